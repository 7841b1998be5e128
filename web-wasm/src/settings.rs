//! ブラウザ版の接続設定
//!
//! 既定値はビルド時の環境変数（option_env!）から。画面の設定パネルで上書きできる。

use trademark_search_common::{ImageUrlTemplate, ServiceEndpoints};

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq)]
pub struct WebSettings {
    pub similarity_url: String,
    pub image_url: String,
    pub image_template: ImageUrlTemplate,
    pub api_key: String,
    pub cooccurrence_url: String,
    pub region: String,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl WebSettings {
    pub fn from_build_env() -> Self {
        Self {
            similarity_url: option_env!("SIMILARITY_SEARCH_SVC").unwrap_or_default().to_string(),
            image_url: option_env!("IMAGE_DOWNLOAD_SVC").unwrap_or_default().to_string(),
            image_template: ImageUrlTemplate::parse(option_env!("IMAGE_URL_TEMPLATE").unwrap_or_default()),
            api_key: option_env!("API_KEY").unwrap_or_default().to_string(),
            cooccurrence_url: option_env!("COOCCURRENCE_DATA_PATH").unwrap_or_default().to_string(),
            region: option_env!("AWS_REGION").unwrap_or(DEFAULT_REGION).to_string(),
        }
    }

    /// 類似検索サービス未設定ならNone
    pub fn endpoints(&self) -> Option<ServiceEndpoints> {
        let base = self.similarity_url.trim();
        if base.is_empty() {
            return None;
        }

        let mut endpoints = ServiceEndpoints::new(base).with_api_key(Some(self.api_key.clone()));
        if !self.image_url.trim().is_empty() {
            endpoints = endpoints.with_image_service(self.image_url.trim(), self.image_template.clone());
        }
        Some(endpoints)
    }
}
