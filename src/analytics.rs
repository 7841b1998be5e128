//! 共起確率データのセッションキャッシュ
//!
//! データはプロセス内で一度だけ取得し、以後は不変として扱う。
//! 未設定・取得失敗はエラーではなく AnalyticsState の警告になる。

use crate::config::Config;
use crate::error::Result;
use crate::storage::ObjectStore;
use tokio::sync::OnceCell;
use trademark_search_common::{AnalyticsState, CoOccurrenceTable, ObjectLocation};

pub struct DatasetCache {
    location: Option<String>,
    region: String,
    timeout_seconds: u64,
    state: OnceCell<AnalyticsState>,
}

impl DatasetCache {
    pub fn new(config: &Config) -> Self {
        Self {
            location: config
                .cooccurrence_path
                .clone()
                .filter(|p| !p.trim().is_empty()),
            region: config.aws_region.clone(),
            timeout_seconds: config.timeout_seconds,
            state: OnceCell::new(),
        }
    }

    /// 取得済みのテーブルで初期化（テスト・ローカルファイル用）
    pub fn preloaded(table: CoOccurrenceTable) -> Self {
        let state = OnceCell::new_with(Some(AnalyticsState::Ready(table)));
        Self {
            location: None,
            region: String::new(),
            timeout_seconds: 0,
            state,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.initialized()
    }

    /// 初回のみ取得する
    pub async fn state(&self) -> &AnalyticsState {
        self.state.get_or_init(|| self.load()).await
    }

    async fn load(&self) -> AnalyticsState {
        let Some(location) = self.location.as_deref() else {
            log::warn!("co-occurrence data path is not configured");
            return AnalyticsState::not_configured();
        };

        match self.fetch(location).await {
            Ok(table) => {
                log::info!("loaded {} co-occurrence rows from {}", table.len(), location);
                AnalyticsState::Ready(table)
            }
            Err(e) => {
                log::warn!("failed to load co-occurrence data: {}", e);
                AnalyticsState::load_failed(e)
            }
        }
    }

    async fn fetch(&self, location: &str) -> Result<CoOccurrenceTable> {
        let location = ObjectLocation::parse(location)?;
        let store = ObjectStore::new(self.region.clone(), self.timeout_seconds)?;
        let text = store.fetch_text(&location).await?;
        Ok(CoOccurrenceTable::from_csv_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trademark_search_common::CoOccurrenceRow;

    #[tokio::test]
    async fn test_unconfigured_path_is_warning() {
        let cache = DatasetCache::new(&Config::default());
        let state = cache.state().await;
        assert!(state.table().is_none());
        assert!(state.warning().unwrap().contains("not configured"));
        assert!(cache.is_loaded());
    }

    #[tokio::test]
    async fn test_invalid_location_is_warning() {
        let config = Config {
            cooccurrence_path: Some("ftp://nowhere/data.csv".into()),
            ..Default::default()
        };
        let cache = DatasetCache::new(&config);
        let warning = cache.state().await.warning().unwrap().to_string();
        assert!(warning.starts_with("Failed to load co-occurrence data: "));
    }

    #[tokio::test]
    async fn test_preloaded() {
        let table = CoOccurrenceTable::new(vec![CoOccurrenceRow::new("1 (A)", "2 (B)", 30.0)]);
        let cache = DatasetCache::preloaded(table.clone());
        assert!(cache.is_loaded());
        assert_eq!(cache.state().await.table(), Some(&table));
    }
}
