//! クラス×クラスの確率行列（ピボット）

use super::table::CoOccurrenceTable;
use serde::Serialize;
use std::collections::HashMap;

/// クラスラベルの並び順キー
///
/// 先頭の空白区切りトークンを整数として読む。読めなければ0。
/// 例: "25 (Clothing)" -> 25, "Unknown" -> 0
pub fn class_sort_key(label: &str) -> i64 {
    label
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

/// 重複を除いたラベルをクラス番号順に（同順位はラベル順）
pub(crate) fn ordered_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for label in labels {
        if !unique.iter().any(|l| l == label) {
            unique.push(label.to_string());
        }
    }
    unique.sort_by(|a, b| class_sort_key(a).cmp(&class_sort_key(b)).then_with(|| a.cmp(b)));
    unique
}

/// 確率行列
///
/// 行: Class A、列: Class B。該当データのないセルはNone。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbabilityMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl ProbabilityMatrix {
    /// テーブルをピボットする（同じ組が複数あれば平均）
    pub fn from_table(table: &CoOccurrenceTable) -> Self {
        let rows = ordered_labels(table.rows().iter().map(|r| r.class_a.as_str()));
        let columns = ordered_labels(table.rows().iter().map(|r| r.class_b.as_str()));

        let row_index: HashMap<&str, usize> =
            rows.iter().enumerate().map(|(i, l)| (l.as_str(), i)).collect();
        let col_index: HashMap<&str, usize> =
            columns.iter().enumerate().map(|(i, l)| (l.as_str(), i)).collect();

        // (合計, 件数)
        let mut sums = vec![vec![(0.0f64, 0u32); columns.len()]; rows.len()];
        for row in table.rows() {
            let (Some(&r), Some(&c)) = (row_index.get(row.class_a.as_str()), col_index.get(row.class_b.as_str()))
            else {
                continue;
            };
            sums[r][c].0 += row.probability;
            sums[r][c].1 += 1;
        }

        let cells = sums
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
                    .collect()
            })
            .collect();

        Self { rows, columns, cells }
    }

    pub fn get(&self, class_a: &str, class_b: &str) -> Option<f64> {
        let r = self.rows.iter().position(|l| l == class_a)?;
        let c = self.columns.iter().position(|l| l == class_b)?;
        self.cells[r][c]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooccurrence::CoOccurrenceRow;

    #[test]
    fn test_class_sort_key() {
        assert_eq!(class_sort_key("1 (Chemicals)"), 1);
        assert_eq!(class_sort_key("  42 (Services)"), 42);
        assert_eq!(class_sort_key("Unknown class"), 0);
        assert_eq!(class_sort_key("3(Cosmetics)"), 0);
        assert_eq!(class_sort_key(""), 0);
    }

    #[test]
    fn test_axes_sorted_numerically() {
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("10 (Medical)", "9 (Electrical)", 10.0),
            CoOccurrenceRow::new("9 (Electrical)", "10 (Medical)", 20.0),
            CoOccurrenceRow::new("Misc", "1 (Chemicals)", 30.0),
        ]);
        let matrix = ProbabilityMatrix::from_table(&table);
        assert_eq!(matrix.rows, vec!["Misc", "9 (Electrical)", "10 (Medical)"]);
        assert_eq!(matrix.columns, vec!["1 (Chemicals)", "9 (Electrical)", "10 (Medical)"]);
    }

    #[test]
    fn test_cells() {
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("1 (A)", "2 (B)", 10.0),
            CoOccurrenceRow::new("1 (A)", "2 (B)", 20.0),
            CoOccurrenceRow::new("2 (B)", "1 (A)", 5.0),
        ]);
        let matrix = ProbabilityMatrix::from_table(&table);
        assert_eq!(matrix.get("1 (A)", "2 (B)"), Some(15.0));
        assert_eq!(matrix.get("2 (B)", "1 (A)"), Some(5.0));
        assert_eq!(matrix.get("1 (A)", "1 (A)"), None);
        assert_eq!(matrix.get("nope", "1 (A)"), None);
    }

    #[test]
    fn test_empty_table() {
        let matrix = ProbabilityMatrix::from_table(&CoOccurrenceTable::default());
        assert!(matrix.is_empty());
        assert!(matrix.cells.is_empty());
    }
}
