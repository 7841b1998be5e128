use crate::error::{Result, TrademarkError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trademark_search_common::{ImageUrlTemplate, ServiceEndpoints};

pub const ENV_SIMILARITY_URL: &str = "SIMILARITY_SEARCH_SVC";
pub const ENV_IMAGE_URL: &str = "IMAGE_DOWNLOAD_SVC";
pub const ENV_IMAGE_TEMPLATE: &str = "IMAGE_URL_TEMPLATE";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_COOCCURRENCE_PATH: &str = "COOCCURRENCE_DATA_PATH";
pub const ENV_AWS_REGION: &str = "AWS_REGION";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub similarity_service_url: Option<String>,
    pub image_service_url: Option<String>,
    pub image_url_template: ImageUrlTemplate,
    pub api_key: Option<String>,
    /// s3://bucket/key または https URL（未設定なら分析ページ無効）
    pub cooccurrence_path: Option<String>,
    pub aws_region: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_service_url: None,
            image_service_url: None,
            image_url_template: ImageUrlTemplate::default(),
            api_key: None,
            cooccurrence_path: None,
            aws_region: "us-east-1".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrademarkError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("trademark-search").join("config.json"))
    }

    /// 環境変数を優先（空文字は無視）
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_SIMILARITY_URL) {
            self.similarity_service_url = Some(v);
        }
        if let Some(v) = get(ENV_IMAGE_URL) {
            self.image_service_url = Some(v);
        }
        if let Some(v) = get(ENV_IMAGE_TEMPLATE) {
            self.image_url_template = ImageUrlTemplate::parse(&v);
        }
        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(ENV_COOCCURRENCE_PATH) {
            self.cooccurrence_path = Some(v);
        }
        if let Some(v) = get(ENV_AWS_REGION) {
            self.aws_region = v;
        }
    }

    /// 画面コンポーネントに渡す接続設定
    pub fn endpoints(&self) -> Result<ServiceEndpoints> {
        let base = self
            .similarity_service_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or(TrademarkError::MissingServiceUrl)?;

        let mut endpoints = ServiceEndpoints::new(base).with_api_key(self.api_key.clone());
        if let Some(image_base) = &self.image_service_url {
            endpoints = endpoints.with_image_service(image_base.clone(), self.image_url_template.clone());
        }
        Ok(endpoints)
    }

    /// 表示用（APIキーは伏せる）
    pub fn masked_api_key(&self) -> &'static str {
        match self.api_key.as_deref() {
            Some(k) if !k.trim().is_empty() => "設定済み",
            _ => "未設定",
        }
    }
}
