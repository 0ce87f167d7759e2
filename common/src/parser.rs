//! シミュレーター結果ファイルのパーサー
//!
//! 結果ファイルは `METRIC_NAME : value` 形式の行を含むテキスト。
//! 指標名の直後（空白可）のコロンに続く最初の非空白トークンを値として取り出す。
//! 行頭・行末へのアンカーはしない。

use crate::types::{Metric, ResultRecord};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

lazy_static::lazy_static! {
    // 固定指標のパターン（起動時に一度だけコンパイル）
    static ref METRIC_PATTERNS: HashMap<Metric, Regex> = Metric::ALL
        .into_iter()
        .map(|metric| (metric, field_pattern(metric.name()).unwrap()))
        .collect();
}

/// `<name>\s*:\s*(\S+)` のパターンを生成
fn field_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{}\s*:\s*(\S+)", regex::escape(name)))
}

/// テキストから指定名のフィールド値を抽出
///
/// # Arguments
/// * `content` - 結果ファイルの内容
/// * `name` - 指標名（大文字小文字を区別）
///
/// # Returns
/// * `Some(String)` - 最初に一致した値
/// * `None` - 一致なし
///
/// # Examples
/// ```
/// use tlb_report_common::extract_field;
///
/// let text = "CORE_0_IPC          \t\t :      1.523\n";
/// assert_eq!(extract_field(text, "CORE_0_IPC").as_deref(), Some("1.523"));
/// assert_eq!(extract_field(text, "CORE_1_IPC"), None);
/// ```
pub fn extract_field(content: &str, name: &str) -> Option<String> {
    let re = field_pattern(name).ok()?;
    capture_value(&re, content)
}

/// 固定指標を抽出
pub fn extract_metric(content: &str, metric: Metric) -> Option<String> {
    METRIC_PATTERNS
        .get(&metric)
        .and_then(|re| capture_value(re, content))
}

fn capture_value(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// テキストから全指標を抽出してレコード化
pub fn parse_result_text(content: &str) -> ResultRecord {
    let mut record = ResultRecord::new();
    for metric in Metric::ALL {
        if let Some(value) = extract_metric(content, metric) {
            record.insert(metric, value);
        }
    }
    record
}

/// ファイルから指定名のフィールド値を抽出
///
/// ファイルが存在しない・読めない場合はNone
pub fn extract_field_from_file(path: &Path, name: &str) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    extract_field(&content, name)
}

/// ファイルを一度だけ読み込み、全指標を抽出
///
/// ファイルが存在しない・読めない場合は空のレコード
pub fn parse_result_file(path: &Path) -> ResultRecord {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_result_text(&content),
        Err(_) => ResultRecord::new(),
    }
}
