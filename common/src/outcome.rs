//! 検索結果の状態
//!
//! HTTPステータスと本文から画面に出す状態を決める。
//! エラーはすべてこの型に畳み込み、画面側で例外を出さない。

use crate::types::SearchResult;

pub const SUCCESS_MESSAGE: &str = "Search completed successfully!";
pub const NO_RESULTS_MESSAGE: &str = "No similar marks found.";
pub const SEARCHING_MESSAGE: &str = "Searching for similar marks...";

/// 1回の検索の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// 200 かつ類似商標あり
    Found(SearchResult),
    /// 200 だが類似商標なし（エラーではない）
    NoResults,
    /// 200 以外
    ServiceError { status: u16, body: Option<String> },
    /// 通信・パース失敗
    TransportError(String),
}

impl SearchOutcome {
    /// レスポンスを解釈
    ///
    /// # Arguments
    /// * `status` - HTTPステータス
    /// * `body` - レスポンス本文
    /// * `keep_error_body` - 200以外のとき本文を保持するか
    pub fn from_response(status: u16, body: &str, keep_error_body: bool) -> Self {
        if status != 200 {
            return SearchOutcome::ServiceError {
                status,
                body: keep_error_body.then(|| body.to_string()),
            };
        }

        match serde_json::from_str::<SearchResult>(body) {
            Ok(result) if result.is_empty() => SearchOutcome::NoResults,
            Ok(result) => SearchOutcome::Found(result),
            Err(e) => SearchOutcome::TransportError(e.to_string()),
        }
    }

    pub fn transport(error: impl std::fmt::Display) -> Self {
        SearchOutcome::TransportError(error.to_string())
    }

    /// 200 を受け取ったか
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Found(_) | SearchOutcome::NoResults)
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// 状態の説明文（Found以外）
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Found(_) => None,
            SearchOutcome::NoResults => Some(NO_RESULTS_MESSAGE.to_string()),
            SearchOutcome::ServiceError { status, body: Some(body) } => {
                Some(format!("Error: {} - {}", status, body))
            }
            SearchOutcome::ServiceError { status, body: None } => Some(format!("Error: {}", status)),
            SearchOutcome::TransportError(message) => Some(format!("An error occurred: {}", message)),
        }
    }
}
