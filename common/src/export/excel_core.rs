//! Excel生成（共通ライブラリ）
//!
//! CSVと同じ10列を1シートに書き出す。値は全て文字列セルとして書き込む。

use crate::types::{OutputRow, COLUMN_COUNT, HEADER};
use rust_xlsxwriter::*;

const SHEET_NAME: &str = "TLB Results";
const LABEL_COL_WIDTH: f64 = 14.0;
const VALUE_COL_WIDTH: f64 = 22.0;

/// Excelをバッファに生成
pub fn generate_excel_buffer(rows: &[OutputRow]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for col in 0..COLUMN_COUNT as u16 {
        let width = if col < 2 { LABEL_COL_WIDTH } else { VALUE_COL_WIDTH };
        worksheet.set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // ヘッダー行
    for (col, label) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    // データ行
    for (index, row) in rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        for (col, value) in row.fields().iter().enumerate() {
            worksheet.write_string_with_format(excel_row, col as u16, value, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
