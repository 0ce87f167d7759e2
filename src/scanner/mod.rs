mod file_name;

pub use file_name::{parse_result_file_name, result_file_name};

use crate::error::{Result, TlbReportError};
use std::path::{Path, PathBuf};
use tlb_report_common::TlbType;
use walkdir::WalkDir;

/// 結果フォルダ内で見つかった結果ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFileInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub tlb_type: TlbType,
    pub first: String,
    pub second: String,
}

/// 結果ファイルのパスを組み立て
pub fn locate_result_file(results_dir: &Path, tlb_type: TlbType, first: &str, second: &str) -> PathBuf {
    results_dir.join(result_file_name(tlb_type, first, second))
}

/// TLB構成ラベルから結果ファイルのパスを組み立て
///
/// 未知のラベルはNone（エラーにはしない）
pub fn locate_by_label(results_dir: &Path, label: &str, first: &str, second: &str) -> Option<PathBuf> {
    let tlb_type = TlbType::from_label(label)?;
    Some(locate_result_file(results_dir, tlb_type, first, second))
}

/// 結果フォルダ直下の結果ファイルを列挙
pub fn scan_results(results_dir: &Path) -> Result<Vec<ResultFileInfo>> {
    if !results_dir.is_dir() {
        return Err(TlbReportError::ResultsDirNotFound(results_dir.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(results_dir)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some((tlb_type, first, second)) = parse_result_file_name(&file_name) {
            files.push(ResultFileInfo {
                path: path.to_path_buf(),
                file_name,
                tlb_type,
                first,
                second,
            });
        }
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
