//! JSON出力

use super::ensure_output_dir;
use crate::error::Result;
use std::path::Path;
use tlb_report_common::export::json_core;
use tlb_report_common::OutputRow;

pub fn write_json_file(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    ensure_output_dir(output_path)?;

    let generated_at = chrono::Utc::now().to_rfc3339();
    let json = json_core::generate_json(rows, &generated_at)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
