//! ファイル出力（CLIとWASMで共有）

#[cfg(feature = "excel")]
pub mod heatmap_excel;
