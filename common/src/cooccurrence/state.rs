//! 分析ページの状態

use super::table::CoOccurrenceTable;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Co-occurrence data is not configured. Set COOCCURRENCE_DATA_PATH to enable analytics.";

/// 分析ページの状態
///
/// データ未設定・取得失敗でもページは表示できる（警告のみ）
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsState {
    Ready(CoOccurrenceTable),
    ConfigurationMissing(String),
}

impl AnalyticsState {
    pub fn not_configured() -> Self {
        AnalyticsState::ConfigurationMissing(NOT_CONFIGURED_MESSAGE.to_string())
    }

    pub fn load_failed(error: impl std::fmt::Display) -> Self {
        AnalyticsState::ConfigurationMissing(format!("Failed to load co-occurrence data: {}", error))
    }

    pub fn table(&self) -> Option<&CoOccurrenceTable> {
        match self {
            AnalyticsState::Ready(table) => Some(table),
            AnalyticsState::ConfigurationMissing(_) => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            AnalyticsState::Ready(_) => None,
            AnalyticsState::ConfigurationMissing(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured() {
        let state = AnalyticsState::not_configured();
        assert!(state.table().is_none());
        assert!(state.warning().unwrap().contains("COOCCURRENCE_DATA_PATH"));
    }

    #[test]
    fn test_load_failed() {
        let state = AnalyticsState::load_failed("403 Forbidden");
        assert_eq!(state.warning(), Some("Failed to load co-occurrence data: 403 Forbidden"));
    }

    #[test]
    fn test_ready() {
        let state = AnalyticsState::Ready(CoOccurrenceTable::default());
        assert!(state.table().is_some());
        assert!(state.warning().is_none());
    }
}
