//! 検索クエリ
//!
//! 画面の入力状態（QueryForm）から、送信可能なクエリ（Query）を組み立てる。
//! 送信時の検証は trim して空かどうかのみ。

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 検索モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// 画像をアップロードして切り抜く
    #[default]
    Image,
    /// 商標の図柄を文章で説明する
    Description,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Image, SearchMode::Description];

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Image => "Upload Image",
            SearchMode::Description => "Describe Image",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 画面の入力状態
///
/// 非アクティブなモードの入力は保持したままでよい（送信時に無視される）
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    pub mode: SearchMode,
    /// 切り抜き済み画像（PNG）
    pub cropped_png: Option<Vec<u8>>,
    pub description: String,
    /// 商品・役務（任意）
    pub goods_services: String,
}

impl QueryForm {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode, ..Default::default() }
    }

    /// 送信時の検証を行い、クエリを組み立てる
    pub fn into_query(self) -> Result<Query, ValidationError> {
        let goods_services = non_empty_trimmed(&self.goods_services);

        match self.mode {
            SearchMode::Image => match self.cropped_png {
                Some(png) if !png.is_empty() => Ok(Query::Image(ImageQuery { png, goods_services })),
                _ => Err(ValidationError::MissingImage),
            },
            SearchMode::Description => match non_empty_trimmed(&self.description) {
                Some(description) => Ok(Query::Description(DescriptionQuery {
                    description,
                    goods_services,
                })),
                None => Err(ValidationError::MissingDescription),
            },
        }
    }
}

/// 送信可能なクエリ（どちらか一方のみ）
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Image(ImageQuery),
    Description(DescriptionQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageQuery {
    pub png: Vec<u8>,
    pub goods_services: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionQuery {
    /// trim済み
    pub description: String,
    pub goods_services: Option<String>,
}

impl Query {
    pub fn mode(&self) -> SearchMode {
        match self {
            Query::Image(_) => SearchMode::Image,
            Query::Description(_) => SearchMode::Description,
        }
    }

    pub fn goods_services(&self) -> Option<&str> {
        match self {
            Query::Image(q) => q.goods_services.as_deref(),
            Query::Description(q) => q.goods_services.as_deref(),
        }
    }

    /// エラー時にレスポンス本文も表示するか
    ///
    /// 説明文検索のみ本文を表示する
    pub fn shows_error_body(&self) -> bool {
        matches!(self, Query::Description(_))
    }
}

fn non_empty_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
