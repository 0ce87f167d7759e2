//! CSV出力（CLI版）

use super::ensure_output_dir;
use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tlb_report_common::export::csv_core;
use tlb_report_common::OutputRow;

/// ヘッダー + 全行を一度に書き出し
pub fn write_csv_file(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    ensure_output_dir(output_path)?;

    let file = File::create(output_path)?;
    csv_core::write_csv(BufWriter::new(file), rows)?;
    Ok(())
}
