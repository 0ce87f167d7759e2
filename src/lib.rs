//! tlb-report
//!
//! TLBシミュレーターの結果ファイルを集計し、CSVなどの表形式で出力する。
//!
//! ## 処理フロー
//! 1. ワークロード組み合わせ × TLB構成の列挙
//! 2. 命名規則から結果ファイルを特定
//! 3. 指標の抽出とヒット率の計算
//! 4. 表の書き出し

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod scanner;
