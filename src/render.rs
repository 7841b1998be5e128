//! 端末向けの描画
//!
//! 表示モデル（ResultsView など）を文字列にする。出力は呼び出し側で行う。

use trademark_search_common::cooccurrence::{empty_filter_message, legend};
use trademark_search_common::outcome::SUCCESS_MESSAGE;
use trademark_search_common::{
    bucket_for, CoOccurrenceTable, FilteredRow, MarkCard, ProbabilityMatrix, ResultsView,
    SearchOutcome, ServiceEndpoints, Threshold, CARDS_PER_ROW,
};

const CARD_WIDTH: usize = 34;
const LABEL_WIDTH: usize = 18;
/// 区間ごとの濃淡記号（低→高）
const SHADES: [char; 7] = ['·', '░', '▒', '▓', '▚', '▙', '█'];

/// 幅に収まるよう切り詰めて左寄せ
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{}{}", text, " ".repeat(width - count))
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn card_lines(card: &MarkCard) -> Vec<String> {
    let mut lines = vec!["-".repeat(CARD_WIDTH - 2)];
    lines.push(match &card.image_url {
        Some(url) => format!("[image] {}", url),
        None => "[image] N/A".to_string(),
    });
    for (label, value) in card.fields() {
        lines.push(format!("{}: {}", label, value));
    }
    lines
}

/// 検索結果の描画（Found以外は状態メッセージ）
pub fn outcome_text(outcome: &SearchOutcome, endpoints: &ServiceEndpoints) -> String {
    let mut out = String::new();

    if outcome.is_success() {
        out.push_str(&format!("✔ {}\n", SUCCESS_MESSAGE));
    }

    match outcome {
        SearchOutcome::Found(result) => {
            out.push_str(&results_text(&ResultsView::build(result, endpoints)));
        }
        SearchOutcome::NoResults => {
            if let Some(message) = outcome.message() {
                out.push_str(&format!("ℹ {}\n", message));
            }
        }
        SearchOutcome::ServiceError { .. } | SearchOutcome::TransportError(_) => {
            if let Some(message) = outcome.message() {
                out.push_str(&format!("✖ {}\n", message));
            }
        }
    }

    out
}

/// カード（3列）とデザインコード欄
pub fn results_text(view: &ResultsView) -> String {
    let mut out = format!("\n{}\n\n", view.header);

    for row in &view.rows {
        let blocks: Vec<Vec<String>> = row.iter().map(card_lines).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let line: Vec<String> = (0..CARDS_PER_ROW)
                .filter_map(|c| blocks.get(c))
                .map(|block| fit(block.get(i).map(String::as_str).unwrap_or(""), CARD_WIDTH))
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("Design Codes\n");
    for line in view.design_code_lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// ヒートマップ（濃淡記号と値）
pub fn heatmap_text(matrix: &ProbabilityMatrix) -> String {
    if matrix.is_empty() {
        return "No co-occurrence data.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&fit("Class A \\ Class B", LABEL_WIDTH));
    for column in &matrix.columns {
        out.push_str(&format!(" {:>7}", fit(column, 7).trim_end()));
    }
    out.push('\n');

    for (r, label) in matrix.rows.iter().enumerate() {
        out.push_str(&fit(label, LABEL_WIDTH));
        for cell in &matrix.cells[r] {
            let text = match cell.and_then(|v| bucket_for(v).map(|b| (v, b))) {
                Some((value, bucket)) => format!("{}{:>6.1}", SHADES[bucket], value),
                None => format!("{:>7}", "-"),
            };
            out.push_str(&format!(" {}", text));
        }
        out.push('\n');
    }

    out.push_str("\nLegend: ");
    let entries: Vec<String> = legend()
        .iter()
        .zip(SHADES)
        .map(|((label, _), shade)| format!("{} {}", shade, label))
        .collect();
    out.push_str(&entries.join("  "));
    out.push('\n');
    out
}

/// 閾値フィルタの結果
pub fn filter_text(class_a: &str, threshold: Threshold, rows: &[FilteredRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty_filter_message(class_a, threshold));
    }

    let mut out = format!("{} (> {}%)\n", class_a, threshold);
    out.push_str(&format!("  {} {:>12}\n", fit("Class B", 40), "Probability"));
    for row in rows {
        out.push_str(&format!("  {} {:>12.2}\n", fit(&row.class_b, 40), row.probability));
    }
    out
}

/// 全データ（元の順序）
pub fn table_text(table: &CoOccurrenceTable) -> String {
    let mut out = format!("{} {} {:>12}\n", fit("Class A", 30), fit("Class B", 30), "Probability");
    for row in table.rows() {
        out.push_str(&format!(
            "{} {} {:>12.2}\n",
            fit(&row.class_a, 30),
            fit(&row.class_b, 30),
            row.probability
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trademark_search_common::{CoOccurrenceRow, ImageUrlTemplate, SearchResult, SimilarMark};

    fn endpoints() -> ServiceEndpoints {
        ServiceEndpoints::new("http://svc").with_image_service("http://img", ImageUrlTemplate::default())
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }

    #[test]
    fn test_outcome_text_found() {
        let result = SearchResult {
            similar_marks: vec![SimilarMark {
                serial_no: Some("97123456".into()),
                similarity_score: Some(0.5),
                ..Default::default()
            }],
            design_codes: vec!["02.01.01".into()],
        };
        let text = outcome_text(&SearchOutcome::Found(result), &endpoints());
        assert!(text.contains("Search completed successfully!"));
        assert!(text.contains("Found 1 similar marks"));
        assert!(text.contains("Similarity Score: 0.5000"));
        assert!(text.contains("Mark ID: N/A"));
        assert!(text.contains("• 02.01.01"));
    }

    #[test]
    fn test_outcome_text_no_results() {
        let text = outcome_text(&SearchOutcome::NoResults, &endpoints());
        assert!(text.contains("Search completed successfully!"));
        assert!(text.contains("No similar marks found."));
    }

    #[test]
    fn test_outcome_text_error() {
        let text = outcome_text(
            &SearchOutcome::ServiceError { status: 502, body: None },
            &endpoints(),
        );
        assert!(!text.contains("successfully"));
        assert!(text.contains("Error: 502"));
    }

    #[test]
    fn test_heatmap_text() {
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("1 (A)", "2 (B)", 60.0),
            CoOccurrenceRow::new("2 (B)", "1 (A)", 3.0),
        ]);
        let text = heatmap_text(&ProbabilityMatrix::from_table(&table));
        assert!(text.contains("█  60.0"));
        assert!(text.contains("·   3.0"));
        assert!(text.contains("Legend:"));
    }

    #[test]
    fn test_filter_text_empty() {
        let text = filter_text("1 (A)", Threshold::default(), &[]);
        assert_eq!(text, "No classes exceed 20% for 1 (A).\n");
    }
}
