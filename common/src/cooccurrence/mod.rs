//! 共起確率（クラスA出願者がクラスBにも出願する確率）の分析
//!
//! - table: CSVの読み込み
//! - matrix: クラス×クラスの確率行列
//! - palette: ヒートマップの離散色分け
//! - filter: 単一クラスの閾値フィルタ
//! - state: 分析ページの状態

mod table;
mod matrix;
mod palette;
mod filter;
mod state;

pub use table::{CoOccurrenceRow, CoOccurrenceTable, CLASS_A_COLUMN, CLASS_B_COLUMN, PROBABILITY_COLUMN};
pub use matrix::{ProbabilityMatrix, class_sort_key};
pub use palette::{bucket_for, color_for, BIN_EDGES, BUCKET_COLORS, BUCKET_COUNT, legend};
pub use filter::{filter_by_class, empty_filter_message, FilteredRow, Threshold, DEFAULT_THRESHOLD};
pub use state::{AnalyticsState, NOT_CONFIGURED_MESSAGE};
