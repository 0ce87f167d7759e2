//! JSON生成（共通ライブラリ）

use crate::error::Result;
use crate::types::{OutputRow, HEADER};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: &'a str,
    header: &'a [&'static str],
    rows: &'a [OutputRow],
}

/// `{ generated_at, header, rows }` 形式のJSONを生成
pub fn generate_json(rows: &[OutputRow], generated_at: &str) -> Result<String> {
    let report = JsonReport {
        generated_at,
        header: &HEADER,
        rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
