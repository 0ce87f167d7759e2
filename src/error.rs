use thiserror::Error;

#[derive(Error, Debug)]
pub enum TlbReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("出力先フォルダが見つかりません: {0}")]
    OutputDirNotFound(String),

    #[error("結果フォルダが見つかりません: {0}")]
    ResultsDirNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] tlb_report_common::Error),
}

pub type Result<T> = std::result::Result<T, TlbReportError>;
