//! ワークロード組み合わせの列挙

use crate::types::{TlbType, WorkloadPair};

/// 全ての順序付きペアを列挙（自己ペアを含む）
///
/// 外側ループが1つ目、内側ループが2つ目。この順序が出力表の行順になる。
pub fn workload_pairs(workloads: &[&str]) -> Vec<WorkloadPair> {
    workloads
        .iter()
        .flat_map(|first| workloads.iter().map(move |second| WorkloadPair::new(*first, *second)))
        .collect()
}

/// `"<w1>+<w2>"` 形式のラベルを列挙
pub fn workload_combinations(workloads: &[&str]) -> Vec<String> {
    workload_pairs(workloads).iter().map(WorkloadPair::label).collect()
}

/// ラベルを2つのワークロード名に分割
pub fn split_combination(label: &str) -> Option<(&str, &str)> {
    label.split_once('+')
}

/// 出力行に対応する (ワークロード組, TLB構成) を行順に列挙
pub fn report_keys(workloads: &[&str]) -> Vec<(WorkloadPair, TlbType)> {
    workload_pairs(workloads)
        .into_iter()
        .flat_map(|pair| TlbType::ALL.into_iter().map(move |t| (pair.clone(), t)))
        .collect()
}
