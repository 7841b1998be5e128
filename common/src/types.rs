//! 検索結果の型定義
//!
//! 類似検索サービスのJSONレスポンスをそのまま受ける型:
//! - SimilarMark: 類似商標1件
//! - SearchResult: 類似商標の一覧とデザインコード

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// 類似商標1件
///
/// サービスの値をそのまま保持する（検証は有無のみ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarMark {
    #[serde(default, deserialize_with = "lenient_string")]
    pub serial_no: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub filing_dt: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub mark_id_char: Option<String>,

    #[serde(default)]
    pub similarity_score: Option<f64>,
}

/// 類似検索結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// サービスの返した順序を保持
    #[serde(default, deserialize_with = "lenient_marks")]
    pub similar_marks: Vec<SimilarMark>,

    #[serde(default, deserialize_with = "lenient_codes")]
    pub design_codes: Vec<String>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.similar_marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.similar_marks.len()
    }

    /// 重複除去して文字列の昇順に並べたデザインコード
    pub fn distinct_design_codes(&self) -> Vec<String> {
        self.design_codes
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// 文字列・数値・nullのいずれも受け付ける
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

fn value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// similar_marks: null は空配列扱い
fn lenient_marks<'de, D>(deserializer: D) -> Result<Vec<SimilarMark>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SimilarMark>>::deserialize(deserializer)?.unwrap_or_default())
}

/// design_codes: 数値コードも文字列化、nullは除外
fn lenient_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().filter_map(value_to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_default() {
        let result = SearchResult::default();
        assert!(result.is_empty());
        assert!(result.design_codes.is_empty());
    }

    #[test]
    fn test_search_result_deserialize() {
        let json = r#"{
            "similar_marks": [
                {"serial_no": "97123456", "filing_dt": "2021-04-01", "mark_id_char": "ACME", "similarity_score": 0.91234},
                {"serial_no": 88000001, "filing_dt": null, "mark_id_char": null, "similarity_score": 0.5}
            ],
            "design_codes": ["26.01.01", "02.01.01"]
        }"#;

        let result: SearchResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.len(), 2);
        assert_eq!(result.similar_marks[0].serial_no.as_deref(), Some("97123456"));
        assert_eq!(result.similar_marks[1].serial_no.as_deref(), Some("88000001"));
        assert_eq!(result.similar_marks[1].filing_dt, None);
        assert_eq!(result.similar_marks[1].mark_id_char, None);
        assert_eq!(result.design_codes, vec!["26.01.01", "02.01.01"]);
    }

    #[test]
    fn test_missing_keys_default() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.is_empty());

        let mark: SimilarMark = serde_json::from_str("{}").unwrap();
        assert_eq!(mark, SimilarMark::default());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let result: SearchResult =
            serde_json::from_str(r#"{"similar_marks": null, "design_codes": null}"#).unwrap();
        assert!(result.is_empty());
        assert!(result.design_codes.is_empty());
    }

    #[test]
    fn test_distinct_design_codes_sorted_lexicographically() {
        let result = SearchResult {
            design_codes: vec!["3".into(), "1".into(), "1".into(), "2".into(), "10".into()],
            ..Default::default()
        };
        assert_eq!(result.distinct_design_codes(), vec!["1", "10", "2", "3"]);
    }
}
