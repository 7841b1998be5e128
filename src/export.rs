//! ファイル出力（CLI版）
//!
//! ヒートマップExcelは共通ライブラリで生成し、ここではファイルに書き出すだけ

use crate::error::{Result, TrademarkError};
use std::path::{Path, PathBuf};
use trademark_search_common::export::heatmap_excel::generate_heatmap_buffer;
use trademark_search_common::{CoOccurrenceTable, ProbabilityMatrix, SearchResult};

pub const HEATMAP_FILE_NAME: &str = "cooccurrence_heatmap";
pub const RESULT_FILE_NAME: &str = "similar_marks";

/// ディレクトリ指定・拡張子なしのときはファイル名を補う
fn output_path_for(output: &Path, default_stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", default_stem, extension))
    } else {
        output.to_path_buf()
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// ヒートマップをxlsxで保存し、保存先を返す
pub fn write_heatmap_excel(table: &CoOccurrenceTable, output: &Path) -> Result<PathBuf> {
    let path = output_path_for(output, HEATMAP_FILE_NAME, "xlsx");
    let matrix = ProbabilityMatrix::from_table(table);

    let buffer = generate_heatmap_buffer(&matrix, table).map_err(TrademarkError::ExcelGeneration)?;
    ensure_parent(&path)?;
    std::fs::write(&path, buffer)?;

    log::info!("heatmap written: {} ({}x{})", path.display(), matrix.rows.len(), matrix.columns.len());
    Ok(path)
}

/// 検索結果をJSONで保存し、保存先を返す
pub fn write_result_json(result: &SearchResult, output: &Path) -> Result<PathBuf> {
    let path = output_path_for(output, RESULT_FILE_NAME, "json");
    let json = serde_json::to_string_pretty(result)?;
    ensure_parent(&path)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use trademark_search_common::{CoOccurrenceRow, SimilarMark};

    #[test]
    fn test_output_path_for() {
        let dir = tempdir().unwrap();
        assert_eq!(
            output_path_for(dir.path(), "a", "xlsx"),
            dir.path().join("a.xlsx")
        );
        let file = dir.path().join("out.xlsx");
        assert_eq!(output_path_for(&file, "a", "xlsx"), file);
    }

    #[test]
    fn test_write_heatmap_excel() {
        let dir = tempdir().unwrap();
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("1 (A)", "2 (B)", 12.5),
            CoOccurrenceRow::new("2 (B)", "1 (A)", 40.0),
        ]);
        let path = write_heatmap_excel(&table, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "cooccurrence_heatmap.xlsx");
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_result_json() {
        let dir = tempdir().unwrap();
        let result = SearchResult {
            similar_marks: vec![SimilarMark {
                serial_no: Some("97000001".into()),
                ..Default::default()
            }],
            design_codes: vec![],
        };
        let path = write_result_json(&result, &dir.path().join("nested/out.json")).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let back: SearchResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
