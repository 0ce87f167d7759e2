//! 集計モジュール
//!
//! ワークロード組み合わせ × TLB構成ごとに結果ファイルを読み込み、
//! 出力表の行を組み立てる。
//!
//! ## 処理フロー
//! 1. 組み合わせラベルをワークロード名に分割
//! 2. 結果ファイルを特定（存在しなければ空行 + 警告）
//! 3. 指標を抽出し、ヒット率を計算

use crate::scanner;
use std::path::{Path, PathBuf};
use tlb_report_common::{
    calculate_hit_rate, parse_result_file, split_combination, workload_combinations, Metric,
    OutputRow, ResultRecord, TlbType,
};
use tracing::{debug, warn};

/// 集計結果
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// 出力行（行順）
    pub rows: Vec<OutputRow>,
    /// 見つからなかった結果ファイル
    pub missing_files: Vec<String>,
}

impl Report {
    /// 結果ファイルがあった行数
    pub fn found_count(&self) -> usize {
        self.rows.len() - self.missing_files.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_files.len()
    }
}

/// 1行分の組み立て結果
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// 結果ファイルから作成
    Found(OutputRow),
    /// 結果ファイルなし（指標列は空）
    Missing { row: OutputRow, path: Option<PathBuf> },
}

impl RowOutcome {
    pub fn row(&self) -> &OutputRow {
        match self {
            RowOutcome::Found(row) => row,
            RowOutcome::Missing { row, .. } => row,
        }
    }

    pub fn into_row(self) -> OutputRow {
        match self {
            RowOutcome::Found(row) => row,
            RowOutcome::Missing { row, .. } => row,
        }
    }
}

/// 全組み合わせの行を組み立て
pub fn build_report(results_dir: &Path, workloads: &[&str]) -> Report {
    let mut report = Report::default();

    for combination in workload_combinations(workloads) {
        for tlb_type in TlbType::ALL {
            match build_row(results_dir, &combination, tlb_type.label()) {
                RowOutcome::Found(row) => report.rows.push(row),
                RowOutcome::Missing { row, path } => {
                    let name = path
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("{} ({})", combination, tlb_type));
                    warn!("結果ファイルが存在しません、空行を作成します: {}", name);
                    report.missing_files.push(name);
                    report.rows.push(row);
                }
            }
        }
    }

    report
}

/// 組み合わせラベルとTLB構成ラベルから1行を組み立て
pub fn build_row(results_dir: &Path, combination: &str, tlb_label: &str) -> RowOutcome {
    let row = OutputRow::with_labels(combination, tlb_label);

    let path = split_combination(combination)
        .and_then(|(first, second)| scanner::locate_by_label(results_dir, tlb_label, first, second));

    match path {
        Some(path) if path.exists() => {
            let record = parse_result_file(&path);
            debug!("{}: {}件の指標を抽出", path.display(), record.len());
            RowOutcome::Found(fill_row(row, &record))
        }
        path => RowOutcome::Missing { row, path },
    }
}

/// 抽出結果を行に反映（空値は空欄のまま）
pub fn fill_row(mut row: OutputRow, record: &ResultRecord) -> OutputRow {
    for metric in Metric::ALL {
        if let Some(value) = record.get(metric) {
            row.set(metric.column(), value);
        }
    }

    let read_hit_rate = calculate_hit_rate(
        record.get(Metric::DtlbReadAccesses),
        record.get(Metric::DtlbReadMisses),
    );
    let write_hit_rate = calculate_hit_rate(
        record.get(Metric::DtlbWriteAccesses),
        record.get(Metric::DtlbWriteMisses),
    );
    row.set(OutputRow::READ_HIT_RATE_COLUMN, &read_hit_rate);
    row.set(OutputRow::WRITE_HIT_RATE_COLUMN, &write_hit_rate);

    row
}
