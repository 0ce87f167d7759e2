//! Excel生成（CLI版）
//!
//! 共通ライブラリのバッファ生成を使用

use super::ensure_output_dir;
use crate::error::{Result, TlbReportError};
use std::path::Path;
use tlb_report_common::export::excel_core;
use tlb_report_common::OutputRow;

pub fn generate_excel(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    ensure_output_dir(output_path)?;

    let buffer = excel_core::generate_excel_buffer(rows)
        .map_err(TlbReportError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
