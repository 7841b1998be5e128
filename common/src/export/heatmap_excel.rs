//! ヒートマップExcel生成（共通ライブラリ）
//!
//! 確率行列を区間色で塗ったシート、凡例シート、元データシートを出力する

use crate::cooccurrence::{bucket_for, legend, CoOccurrenceTable, ProbabilityMatrix, BUCKET_COLORS};
use crate::cooccurrence::{CLASS_A_COLUMN, CLASS_B_COLUMN, PROBABILITY_COLUMN};
use rust_xlsxwriter::*;

/// "#rrggbb" -> Color
fn hex_color(hex: &str) -> Color {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0xFFFFFF);
    Color::RGB(value)
}

/// 区間ごとのセル書式
fn bucket_formats() -> Vec<Format> {
    BUCKET_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let format = Format::new()
                .set_num_format("0.00")
                .set_align(FormatAlign::Center)
                .set_background_color(hex_color(color))
                .set_border(FormatBorder::Hair)
                .set_border_color(Color::RGB(0xCCCCCC));
            // 濃い区間は白文字
            if i >= BUCKET_COLORS.len() - 2 {
                format.set_font_color(Color::White)
            } else {
                format
            }
        })
        .collect()
}

/// ヒートマップをExcelバッファに生成
///
/// # Arguments
/// * `matrix` - ピボット済みの確率行列
/// * `table` - 元データ（"Data"シートにそのまま出力）
pub fn generate_heatmap_buffer(
    matrix: &ProbabilityMatrix,
    table: &CoOccurrenceTable,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));
    let empty_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));
    let formats = bucket_formats();

    // ヒートマップ
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Heatmap")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        worksheet.set_column_width(0, 28)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        worksheet.write_string_with_format(0, 0, "P(B|A) %", &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

        for (c, label) in matrix.columns.iter().enumerate() {
            let col = c as u16 + 1;
            worksheet.write_string_with_format(0, col, label, &header_format)
                .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
            worksheet.set_column_width(col, 12)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }

        for (r, label) in matrix.rows.iter().enumerate() {
            let row = r as u32 + 1;
            worksheet.write_string_with_format(row, 0, label, &header_format)
                .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

            for (c, cell) in matrix.cells[r].iter().enumerate() {
                let col = c as u16 + 1;
                match cell.and_then(|v| bucket_for(v).map(|b| (v, b))) {
                    Some((value, bucket)) => {
                        worksheet.write_number_with_format(row, col, value, &formats[bucket])
                            .map_err(|e| format!("セル書き込みエラー: {}", e))?;
                    }
                    None => {
                        worksheet.write_blank(row, col, &empty_format)
                            .map_err(|e| format!("セル書き込みエラー: {}", e))?;
                    }
                }
            }
        }

        worksheet.set_freeze_panes(1, 1)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;
    }

    // 凡例
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Legend")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        worksheet.write_string_with_format(0, 0, "Probability", &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
        worksheet.set_column_width(0, 16)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        for (i, (label, color)) in legend().into_iter().enumerate() {
            let format = Format::new()
                .set_background_color(hex_color(color))
                .set_border(FormatBorder::Hair);
            worksheet.write_string_with_format(i as u32 + 1, 0, &label, &format)
                .map_err(|e| format!("凡例書き込みエラー: {}", e))?;
        }
    }

    // 元データ
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Data")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        let headers = [CLASS_A_COLUMN, CLASS_B_COLUMN, PROBABILITY_COLUMN];
        for (c, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, c as u16, *header, &header_format)
                .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
            worksheet.set_column_width(c as u16, 28)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }

        for (r, row) in table.rows().iter().enumerate() {
            let line = r as u32 + 1;
            worksheet.write_string(line, 0, &row.class_a)
                .map_err(|e| format!("セル書き込みエラー: {}", e))?;
            worksheet.write_string(line, 1, &row.class_b)
                .map_err(|e| format!("セル書き込みエラー: {}", e))?;
            worksheet.write_number(line, 2, row.probability)
                .map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooccurrence::CoOccurrenceRow;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#a63603"), Color::RGB(0xA63603));
    }

    #[test]
    fn test_generate_heatmap_buffer() {
        let table = CoOccurrenceTable::new(vec![
            CoOccurrenceRow::new("1 (Chemicals)", "5 (Pharmaceuticals)", 25.0),
            CoOccurrenceRow::new("5 (Pharmaceuticals)", "1 (Chemicals)", 60.0),
            CoOccurrenceRow::new("5 (Pharmaceuticals)", "9 (Electrical)", -3.0),
        ]);
        let matrix = ProbabilityMatrix::from_table(&table);
        let buffer = generate_heatmap_buffer(&matrix, &table).expect("Excel生成失敗");

        // xlsxはZIP形式
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_generate_empty_heatmap() {
        let table = CoOccurrenceTable::default();
        let matrix = ProbabilityMatrix::from_table(&table);
        assert!(generate_heatmap_buffer(&matrix, &table).is_ok());
    }
}
