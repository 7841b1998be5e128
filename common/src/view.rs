//! 検索結果の表示モデル
//!
//! SearchResult をカード・行・デザインコード一覧へ写像する。
//! 計算は行わず、欠損値の置換と書式だけを決める。

use crate::endpoints::ServiceEndpoints;
use crate::types::{SearchResult, SimilarMark};

/// 1行あたりのカード数
pub const CARDS_PER_ROW: usize = 3;
/// 欠損値の表示
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESIGN_CODES: &str = "No design codes found";

/// 類似度スコアの書式（小数点以下4桁固定）
pub fn format_score(score: Option<f64>) -> String {
    format!("{:.4}", score.unwrap_or(0.0))
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// カード1枚
#[derive(Debug, Clone, PartialEq)]
pub struct MarkCard {
    /// 画像サービス未設定またはシリアル番号なしならNone
    pub image_url: Option<String>,
    pub serial_no: String,
    pub filing_date: String,
    pub mark_id: String,
    pub similarity: String,
}

impl MarkCard {
    pub fn from_mark(mark: &SimilarMark, endpoints: &ServiceEndpoints) -> Self {
        Self {
            image_url: mark
                .serial_no
                .as_deref()
                .and_then(|serial| endpoints.image_url(serial)),
            serial_no: or_not_available(mark.serial_no.as_deref()),
            filing_date: or_not_available(mark.filing_dt.as_deref()),
            mark_id: or_not_available(mark.mark_id_char.as_deref()),
            similarity: format_score(mark.similarity_score),
        }
    }

    /// 表示用のラベルと値
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Serial No", self.serial_no.as_str()),
            ("Filing Date", self.filing_date.as_str()),
            ("Mark ID", self.mark_id.as_str()),
            ("Similarity Score", self.similarity.as_str()),
        ]
    }
}

/// 結果画面全体
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub header: String,
    /// 行優先で3枚ずつ
    pub rows: Vec<Vec<MarkCard>>,
    /// 重複除去・昇順
    pub design_codes: Vec<String>,
}

impl ResultsView {
    pub fn build(result: &SearchResult, endpoints: &ServiceEndpoints) -> Self {
        let cards: Vec<MarkCard> = result
            .similar_marks
            .iter()
            .map(|mark| MarkCard::from_mark(mark, endpoints))
            .collect();

        Self {
            header: format!("Found {} similar marks", cards.len()),
            rows: cards.chunks(CARDS_PER_ROW).map(<[MarkCard]>::to_vec).collect(),
            design_codes: result.distinct_design_codes(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn cards(&self) -> impl Iterator<Item = &MarkCard> {
        self.rows.iter().flatten()
    }

    /// デザインコード欄の表示行（空ならプレースホルダー）
    pub fn design_code_lines(&self) -> Vec<String> {
        if self.design_codes.is_empty() {
            vec![NO_DESIGN_CODES.to_string()]
        } else {
            self.design_codes.iter().map(|code| format!("• {}", code)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::ImageUrlTemplate;

    fn mark(serial: &str, score: f64) -> SimilarMark {
        SimilarMark {
            serial_no: Some(serial.to_string()),
            filing_dt: Some("2020-01-01".into()),
            mark_id_char: Some("MARK".into()),
            similarity_score: Some(score),
        }
    }

    fn endpoints() -> ServiceEndpoints {
        ServiceEndpoints::new("http://svc").with_image_service("http://img", ImageUrlTemplate::default())
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(0.5)), "0.5000");
        assert_eq!(format_score(Some(0.123456)), "0.1235");
        assert_eq!(format_score(Some(1.0)), "1.0000");
        assert_eq!(format_score(None), "0.0000");
    }

    #[test]
    fn test_rows_of_three() {
        for n in 0..=7 {
            let result = SearchResult {
                similar_marks: (0..n).map(|i| mark(&i.to_string(), 0.1)).collect(),
                design_codes: vec![],
            };
            let view = ResultsView::build(&result, &endpoints());
            assert_eq!(view.card_count(), n);
            assert_eq!(view.rows.len(), (n + 2) / 3);
            assert!(view.rows.iter().all(|row| row.len() <= 3));
        }
    }

    #[test]
    fn test_order_preserved_row_major() {
        let result = SearchResult {
            similar_marks: (0..5).map(|i| mark(&format!("s{}", i), 0.9)).collect(),
            design_codes: vec![],
        };
        let view = ResultsView::build(&result, &endpoints());
        let serials: Vec<&str> = view.cards().map(|c| c.serial_no.as_str()).collect();
        assert_eq!(serials, vec!["s0", "s1", "s2", "s3", "s4"]);
        assert_eq!(view.rows[1][0].serial_no, "s3");
        assert_eq!(view.header, "Found 5 similar marks");
    }

    #[test]
    fn test_not_available_fallbacks() {
        let result = SearchResult {
            similar_marks: vec![SimilarMark {
                mark_id_char: Some(String::new()),
                ..Default::default()
            }],
            design_codes: vec![],
        };
        let view = ResultsView::build(&result, &endpoints());
        let card = &view.rows[0][0];
        assert_eq!(card.serial_no, "N/A");
        assert_eq!(card.filing_date, "N/A");
        assert_eq!(card.mark_id, "N/A");
        assert_eq!(card.similarity, "0.0000");
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn test_image_url() {
        let result = SearchResult { similar_marks: vec![mark("97123456", 0.7)], design_codes: vec![] };
        let view = ResultsView::build(&result, &endpoints());
        assert_eq!(view.rows[0][0].image_url.as_deref(), Some("http://img/97123456/large"));
    }

    #[test]
    fn test_design_codes() {
        let result = SearchResult {
            similar_marks: vec![mark("1", 0.1)],
            design_codes: vec!["3".into(), "1".into(), "1".into(), "2".into()],
        };
        let view = ResultsView::build(&result, &endpoints());
        assert_eq!(view.design_codes, vec!["1", "2", "3"]);
        assert_eq!(view.design_code_lines(), vec!["• 1", "• 2", "• 3"]);
    }

    #[test]
    fn test_design_codes_placeholder() {
        let result = SearchResult { similar_marks: vec![mark("1", 0.1)], design_codes: vec![] };
        let view = ResultsView::build(&result, &endpoints());
        assert_eq!(view.design_code_lines(), vec!["No design codes found"]);
    }
}
