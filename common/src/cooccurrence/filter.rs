//! 単一クラスの閾値フィルタ

use super::table::CoOccurrenceTable;
use crate::error::{Error, Result};
use serde::Serialize;

pub const DEFAULT_THRESHOLD: f64 = 20.0;

/// 確率の閾値（0〜100）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl std::str::FromStr for Threshold {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| format!("Invalid threshold: {}", s))?;
        Threshold::new(value).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// フィルタ結果の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredRow {
    pub class_b: String,
    /// 小数点以下2桁に丸めた値
    pub probability: f64,
}

/// クラスAが一致し、確率が閾値を超える行を確率の降順で返す
///
/// 同値の行は元の順序を保つ
pub fn filter_by_class(table: &CoOccurrenceTable, class_a: &str, threshold: Threshold) -> Vec<FilteredRow> {
    let mut matched: Vec<_> = table
        .rows()
        .iter()
        .filter(|row| row.class_a == class_a && row.probability > threshold.value())
        .collect();

    matched.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    matched
        .into_iter()
        .map(|row| FilteredRow {
            class_b: row.class_b.clone(),
            probability: round2(row.probability),
        })
        .collect()
}

/// 該当なしのときの表示文言
pub fn empty_filter_message(class_a: &str, threshold: Threshold) -> String {
    format!("No classes exceed {}% for {}.", threshold, class_a)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooccurrence::CoOccurrenceRow;

    fn table() -> CoOccurrenceTable {
        CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("1 (Chemicals)", "5 (...)", 25.0),
            CoOccurrenceRow::new("1 (Chemicals)", "9 (...)", 15.0),
            CoOccurrenceRow::new("2 (Paints)", "5 (...)", 90.0),
        ])
    }

    #[test]
    fn test_filter_single_match() {
        let rows = filter_by_class(&table(), "1 (Chemicals)", Threshold::new(20.0).unwrap());
        assert_eq!(rows, vec![FilteredRow { class_b: "5 (...)".into(), probability: 25.0 }]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let rows = filter_by_class(&table(), "1 (Chemicals)", Threshold::new(25.0).unwrap());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sorted_descending_and_rounded() {
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("3 (Cosmetics)", "a", 30.126),
            CoOccurrenceRow::new("3 (Cosmetics)", "b", 80.0),
            CoOccurrenceRow::new("3 (Cosmetics)", "c", 30.126),
            CoOccurrenceRow::new("3 (Cosmetics)", "d", 0.5),
        ]);
        let rows = filter_by_class(&table, "3 (Cosmetics)", Threshold::new(0.0).unwrap());
        let labels: Vec<&str> = rows.iter().map(|r| r.class_b.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c", "d"]);
        assert_eq!(rows[1].probability, 30.13);
    }

    #[test]
    fn test_empty_table_yields_empty_rows() {
        let rows = filter_by_class(&CoOccurrenceTable::default(), "1 (Chemicals)", Threshold::default());
        assert!(rows.is_empty());
        assert_eq!(
            empty_filter_message("1 (Chemicals)", Threshold::default()),
            "No classes exceed 20% for 1 (Chemicals)."
        );
    }

    #[test]
    fn test_threshold_range() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(100.0).is_ok());
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(100.1).is_err());
        assert!("abc".parse::<Threshold>().is_err());
        assert_eq!("35".parse::<Threshold>().unwrap().value(), 35.0);
        assert_eq!(Threshold::default().value(), 20.0);
    }
}
