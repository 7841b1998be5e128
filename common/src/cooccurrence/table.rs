//! 共起確率CSVの読み込み

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

pub const CLASS_A_COLUMN: &str = "Class A";
pub const CLASS_B_COLUMN: &str = "Class B";
/// 確率列の既定名（0〜100のパーセント値）
pub const PROBABILITY_COLUMN: &str =
    "Probability (%) that an applicant who filed in Class A also filed in Class B";

/// CSVの1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoOccurrenceRow {
    pub class_a: String,
    pub class_b: String,
    /// 0〜100
    pub probability: f64,
}

impl CoOccurrenceRow {
    pub fn new(class_a: impl Into<String>, class_b: impl Into<String>, probability: f64) -> Self {
        Self {
            class_a: class_a.into(),
            class_b: class_b.into(),
            probability,
        }
    }
}

/// 共起確率テーブル（読み込み後は不変）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoOccurrenceTable {
    rows: Vec<CoOccurrenceRow>,
}

impl CoOccurrenceTable {
    pub fn new(rows: Vec<CoOccurrenceRow>) -> Self {
        Self { rows }
    }

    /// CSVを読み込む
    ///
    /// 確率列は既定名で探し、見つからなければクラス列以外の最初の列を使う
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);

        let class_a_idx = position(CLASS_A_COLUMN)
            .ok_or_else(|| Error::MissingColumn(CLASS_A_COLUMN.into()))?;
        let class_b_idx = position(CLASS_B_COLUMN)
            .ok_or_else(|| Error::MissingColumn(CLASS_B_COLUMN.into()))?;
        let probability_idx = position(PROBABILITY_COLUMN)
            .or_else(|| (0..headers.len()).find(|&i| i != class_a_idx && i != class_b_idx))
            .ok_or_else(|| Error::MissingColumn(PROBABILITY_COLUMN.into()))?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let field = |idx: usize| record.get(idx).unwrap_or_default();

            let raw = field(probability_idx);
            let probability = parse_probability(raw).ok_or_else(|| Error::InvalidProbability {
                line,
                value: raw.to_string(),
            })?;

            rows.push(CoOccurrenceRow::new(field(class_a_idx), field(class_b_idx), probability));
        }

        Ok(Self { rows })
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_csv_reader(text.as_bytes())
    }

    pub fn rows(&self) -> &[CoOccurrenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 出現するクラスA（行ラベル）をクラス番号順で
    pub fn classes_a(&self) -> Vec<String> {
        super::matrix::ordered_labels(self.rows.iter().map(|r| r.class_a.as_str()))
    }
}

/// "25.5" / "25.5%" を受け付ける
fn parse_probability(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    value.is_finite().then_some(value)
}
