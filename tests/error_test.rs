//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use tlb_report::cli::ExportFormat;
use tlb_report::error::TlbReportError;
use tlb_report::export;
use tlb_report::scanner;
use tlb_report_common::{OutputRow, TlbType, WorkloadPair};

/// 存在しない結果フォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_results_dir() {
    let result = scanner::scan_results(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, TlbReportError::ResultsDirNotFound(_)));
}

/// 空の結果フォルダはエラーではない
#[test]
fn test_scan_empty_results_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_results(dir.path());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 出力先フォルダが存在しない場合は致命的エラー
#[test]
fn test_export_to_missing_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("no_such_dir").join("parsed_results.csv");
    let rows = vec![OutputRow::empty(&WorkloadPair::new("lbm", "lbm"), TlbType::Base)];

    let result = export::export_rows(&rows, ExportFormat::Csv, &output);
    assert!(matches!(result, Err(TlbReportError::OutputDirNotFound(_))));
    assert!(!output.exists());
}

/// TlbReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TlbReportError::Config("テスト設定エラー".to_string()),
        TlbReportError::OutputDirNotFound("/path/to/out".to_string()),
        TlbReportError::ResultsDirNotFound("/path/to/results".to_string()),
        TlbReportError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TlbReportError = io_err.into();

    assert!(matches!(err, TlbReportError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: TlbReportError = json_err.into();

    assert!(matches!(err, TlbReportError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = tlb_report_common::Error::Excel("シート作成エラー".to_string());
    let err: TlbReportError = common_err.into();

    assert!(matches!(err, TlbReportError::Common(_)));
    assert!(format!("{}", err).contains("シート作成エラー"));
}

/// 書き込み先が失敗するとCSVエラーがCommon経由で伝わる
#[test]
fn test_csv_error_conversion() {
    struct BrokenWriter;

    impl std::io::Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "書き込み不可"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let common_err = tlb_report_common::export::csv_core::write_csv(BrokenWriter, &[]).unwrap_err();
    assert!(matches!(common_err, tlb_report_common::Error::Csv(_)));

    let err: TlbReportError = common_err.into();
    assert!(matches!(err, TlbReportError::Common(tlb_report_common::Error::Csv(_))));
}
