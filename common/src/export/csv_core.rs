//! CSV生成（共通ライブラリ）
//!
//! ヘッダー1行 + データ行。カンマ区切り・CRLF終端（RFC 4180）。

use crate::error::Result;
use crate::types::{OutputRow, HEADER};
use std::io::Write;

/// 任意のWriterにCSVを書き出し
pub fn write_csv<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.write_record(row.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// CSVをバッファに生成
pub fn generate_csv_buffer(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    Ok(buffer)
}
