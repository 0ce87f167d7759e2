pub mod csv;
pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::{Result, TlbReportError};
use std::path::{Path, PathBuf};
use tlb_report_common::OutputRow;

/// 出力形式に応じた拡張子に差し替え
fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    output.with_extension(extension)
}

/// 出力先フォルダの存在確認（存在しなければ致命的エラー）
pub(crate) fn ensure_output_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(TlbReportError::OutputDirNotFound(parent.display().to_string()))
        }
        _ => Ok(()),
    }
}

/// 指定形式で出力し、書き出したファイルのパスを返す
pub fn export_rows(rows: &[OutputRow], format: ExportFormat, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if format.includes_csv() {
        csv::write_csv_file(rows, output)?;
        written.push(output.to_path_buf());
    }

    if format.includes_excel() {
        let excel_path = output_path_for_format(output, "xlsx");
        excel::generate_excel(rows, &excel_path)?;
        written.push(excel_path);
    }

    if format.includes_json() {
        let json_path = output_path_for_format(output, "json");
        json::write_json_file(rows, &json_path)?;
        written.push(json_path);
    }

    Ok(written)
}
