//! 集計処理の統合テスト
//!
//! 結果フォルダを一時ディレクトリに作成し、行の組み立てとCSV出力を検証

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tlb_report::cli::ExportFormat;
use tlb_report::export;
use tlb_report::report::{build_report, build_row, RowOutcome};
use tlb_report_common::{parse_result_file, Metric, WORKLOADS};

const FULL_RESULT: &str = "\
CORE_0_INST         \t\t :   10000000
CORE_0_CYCLES       \t\t :    6565988
CORE_0_IPC          \t\t :      1.523

CORE_1_INST         \t\t :   10000000
CORE_1_CYCLES       \t\t :   11481056
CORE_1_IPC          \t\t :      0.871

DTLB_READ_ACCESSES  \t :       1000
DTLB_READ_MISSES    \t :         50
DTLB_READ_HIT_RATE  \t :      0.950
DTLB_WRITE_ACCESSES \t :        400
DTLB_WRITE_MISSES   \t :        100
DTLB_WRITE_HIT_RATE \t :      0.750
";

fn write_result(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("結果ファイル作成失敗");
}

/// 全指標が揃ったファイル
#[test]
fn test_build_row_full_result() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_result(dir.path(), "01.norm.libq.lbm", FULL_RESULT);

    let outcome = build_row(dir.path(), "libq+lbm", "Base TLB");
    let row = match outcome {
        RowOutcome::Found(row) => row,
        other => panic!("結果ファイルが見つからない: {:?}", other),
    };

    assert_eq!(
        row.fields().to_vec(),
        vec!["libq+lbm", "Base TLB", "1.523", "0.871", "1000", "50", "0.950", "400", "100", "0.750"]
    );
}

/// 一部の指標のみのファイル
#[test]
fn test_build_row_partial_result() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_result(
        dir.path(),
        "03.coat.bzip2.bzip2",
        "CORE_0_IPC : 1.523\nDTLB_READ_ACCESSES : 1000\nDTLB_READ_MISSES : 50\n",
    );

    let row = build_row(dir.path(), "bzip2+bzip2", "TLBcoat").into_row();
    assert_eq!(
        row.fields().to_vec(),
        vec!["bzip2+bzip2", "TLBcoat", "1.523", "", "1000", "50", "0.950", "", "", "0.000"]
    );
}

/// 抽出は何度行っても同じ結果
#[test]
fn test_parse_result_file_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_result(dir.path(), "01.norm.lbm.lbm", FULL_RESULT);
    let path = dir.path().join("01.norm.lbm.lbm");

    let first = parse_result_file(&path);
    let second = parse_result_file(&path);
    assert_eq!(first, second);
    assert_eq!(first.get(Metric::Core1Ipc), Some("0.871"));
}

/// 一部のファイルのみ存在する場合
#[test]
fn test_build_report_mixed() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_result(dir.path(), "01.norm.libq.libq", FULL_RESULT);
    write_result(dir.path(), "03.coat.lbm.lbm", FULL_RESULT);

    let report = build_report(dir.path(), WORKLOADS);

    assert_eq!(report.rows.len(), WORKLOADS.len() * WORKLOADS.len() * 2);
    assert_eq!(report.found_count(), 2);
    assert_eq!(report.missing_count(), 16);
    assert!(report.rows.iter().all(|row| row.fields().len() == 10));

    // libq+libq / Base TLB は1行目
    assert_eq!(report.rows[0].get(2), "1.523");
    assert!(report.rows[1].is_blank());

    // lbm+lbm / TLBcoat は (1*3+1)*2+1 行目
    let coat_row = &report.rows[9];
    assert_eq!(coat_row.workloads(), "lbm+lbm");
    assert_eq!(coat_row.tlb_type(), "TLBcoat");
    assert_eq!(coat_row.get(9), "0.750");

    let missing = dir.path().join("03.coat.lbm.bzip2").display().to_string();
    assert!(report.missing_files.contains(&missing));
}

/// 集計からCSV出力まで
#[test]
fn test_report_to_csv_end_to_end() {
    let results = tempdir().expect("Failed to create temp dir");
    write_result(results.path(), "01.norm.libq.lbm", FULL_RESULT);

    let output_dir = tempdir().expect("Failed to create temp dir");
    let output = output_dir.path().join("parsed_results.csv");

    let report = build_report(results.path(), WORKLOADS);
    let written = export::export_rows(&report.rows, ExportFormat::Csv, &output)
        .expect("CSV出力に失敗");
    assert_eq!(written, vec![output.clone()]);

    let content = fs::read_to_string(&output).expect("CSV読み込み失敗");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 19);
    assert_eq!(
        lines[0],
        "WORKLOADS,TLB TYPE,CORE_0_IPC,CORE_1_IPC,DTLB_READ_ACCESSES,DTLB_READ_MISSES,\
DTLB_READ_HIT_RATE,DTLB_WRITE_ACCESSES,DTLB_WRITE_MISSES,DTLB_WRITE_HIT_RATE"
    );
    assert_eq!(lines[1], "libq+libq,Base TLB,,,,,,,,");
    assert_eq!(lines[3], "libq+lbm,Base TLB,1.523,0.871,1000,50,0.950,400,100,0.750");
    assert_eq!(lines[4], "libq+lbm,TLBcoat,,,,,,,,");
    assert_eq!(lines[18], "bzip2+bzip2,TLBcoat,,,,,,,,");
    assert!(content.ends_with("\r\n"));
    assert_eq!(content.matches("\r\n").count(), 19);
}
