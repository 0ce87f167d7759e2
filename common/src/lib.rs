//! TLB Report Common Library
//!
//! シミュレーター結果の抽出・集計に使う型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod hit_rate;
pub mod combination;
pub mod export;

pub use types::{Metric, OutputRow, ResultRecord, TlbType, WorkloadPair, COLUMN_COUNT, HEADER, WORKLOADS};
pub use error::{Error, Result};
pub use parser::{extract_field, extract_field_from_file, extract_metric, parse_result_file, parse_result_text};
pub use hit_rate::{calculate_hit_rate, ZERO_HIT_RATE};
pub use combination::{report_keys, split_combination, workload_combinations, workload_pairs};
