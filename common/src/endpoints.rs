//! 外部サービスのエンドポイント
//!
//! 類似検索サービスと画像ダウンロードサービスのURL組み立て

use serde::{Deserialize, Serialize};

/// 画像URLテンプレート
///
/// `{base}` と `{serial_no}` を置換する。
/// 画像サービスには2種類のパス形式が存在するため、どちらも選べるようにしている。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ImageUrlTemplate(String);

impl ImageUrlTemplate {
    /// 標準: `{base}/{serial_no}/large`
    pub const LARGE: &'static str = "{base}/{serial_no}/large";
    /// 旧形式: `{base}/cases/{serial_no}/mark/image.png`
    pub const LEGACY: &'static str = "{base}/cases/{serial_no}/mark/image.png";

    /// プリセット名（large/legacy）またはテンプレート文字列から生成
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "large" => Self(Self::LARGE.to_string()),
            "legacy" | "cases" => Self(Self::LEGACY.to_string()),
            _ => Self(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, base: &str, serial_no: &str) -> String {
        self.0
            .replace("{base}", base.trim_end_matches('/'))
            .replace("{serial_no}", serial_no)
    }
}

impl Default for ImageUrlTemplate {
    fn default() -> Self {
        Self(Self::LARGE.to_string())
    }
}

impl From<String> for ImageUrlTemplate {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ImageUrlTemplate> for String {
    fn from(value: ImageUrlTemplate) -> Self {
        value.0
    }
}

impl std::fmt::Display for ImageUrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// サービス接続設定
///
/// 画面コンポーネントへは構築時にこの値を渡す
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub similarity_base: String,
    pub image_base: Option<String>,
    pub image_template: ImageUrlTemplate,
    pub api_key: Option<String>,
}

impl ServiceEndpoints {
    pub fn new(similarity_base: impl Into<String>) -> Self {
        Self {
            similarity_base: similarity_base.into(),
            ..Default::default()
        }
    }

    pub fn with_image_service(mut self, base: impl Into<String>, template: ImageUrlTemplate) -> Self {
        self.image_base = Some(base.into());
        self.image_template = template;
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.similarity_base.trim_end_matches('/'), path)
    }

    /// 空白だけのAPIキーは未設定扱い。値は設定どおりに送る
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// 商標画像のURL（画像サービス未設定ならNone）
    pub fn image_url(&self, serial_no: &str) -> Option<String> {
        self.image_base
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .map(|base| self.image_template.render(base, serial_no))
    }
}
