//! 集計対象の型定義
//!
//! - TlbType: TLB構成（ベース / TLBcoat）
//! - Metric: 結果ファイルから抽出する指標
//! - WorkloadPair: 同時実行したワークロードの組
//! - ResultRecord: 1ファイル分の抽出結果
//! - OutputRow: 出力表の1行（常に10列）

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 集計対象のワークロード（固定）
pub const WORKLOADS: &[&str] = &["libq", "lbm", "bzip2"];

/// 出力表の列数
pub const COLUMN_COUNT: usize = 10;

/// 出力表のヘッダー
pub const HEADER: [&str; COLUMN_COUNT] = [
    "WORKLOADS",
    "TLB TYPE",
    "CORE_0_IPC",
    "CORE_1_IPC",
    "DTLB_READ_ACCESSES",
    "DTLB_READ_MISSES",
    "DTLB_READ_HIT_RATE",
    "DTLB_WRITE_ACCESSES",
    "DTLB_WRITE_MISSES",
    "DTLB_WRITE_HIT_RATE",
];

/// TLB構成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TlbType {
    /// ベースTLB
    Base,
    /// TLBcoat
    Coat,
}

impl TlbType {
    /// 処理順（ベース → TLBcoat）
    pub const ALL: [TlbType; 2] = [TlbType::Base, TlbType::Coat];

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            TlbType::Base => "Base TLB",
            TlbType::Coat => "TLBcoat",
        }
    }

    /// 結果ファイル名のプレフィックス
    pub fn file_prefix(&self) -> &'static str {
        match self {
            TlbType::Base => "01.norm",
            TlbType::Coat => "03.coat",
        }
    }

    /// ラベルから逆引き（未知のラベルはNone）
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Base TLB" => Some(TlbType::Base),
            "TLBcoat" => Some(TlbType::Coat),
            _ => None,
        }
    }

    /// プレフィックスから逆引き
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.file_prefix() == prefix)
    }
}

impl fmt::Display for TlbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 結果ファイルから抽出する指標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Core0Ipc,
    Core1Ipc,
    DtlbReadAccesses,
    DtlbReadMisses,
    DtlbWriteAccesses,
    DtlbWriteMisses,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Core0Ipc,
        Metric::Core1Ipc,
        Metric::DtlbReadAccesses,
        Metric::DtlbReadMisses,
        Metric::DtlbWriteAccesses,
        Metric::DtlbWriteMisses,
    ];

    /// 結果ファイル中のラベル（大文字小文字を区別）
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Core0Ipc => "CORE_0_IPC",
            Metric::Core1Ipc => "CORE_1_IPC",
            Metric::DtlbReadAccesses => "DTLB_READ_ACCESSES",
            Metric::DtlbReadMisses => "DTLB_READ_MISSES",
            Metric::DtlbWriteAccesses => "DTLB_WRITE_ACCESSES",
            Metric::DtlbWriteMisses => "DTLB_WRITE_MISSES",
        }
    }

    /// 出力表での列位置
    pub fn column(&self) -> usize {
        match self {
            Metric::Core0Ipc => 2,
            Metric::Core1Ipc => 3,
            Metric::DtlbReadAccesses => 4,
            Metric::DtlbReadMisses => 5,
            Metric::DtlbWriteAccesses => 7,
            Metric::DtlbWriteMisses => 8,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// ワークロードの組（自己ペアを含む）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkloadPair {
    pub first: String,
    pub second: String,
}

impl WorkloadPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// `"<w1>+<w2>"` 形式のラベル
    pub fn label(&self) -> String {
        format!("{}+{}", self.first, self.second)
    }

    /// ラベルを分割（最初の `+` で区切る）
    pub fn from_label(label: &str) -> Option<Self> {
        let (first, second) = label.split_once('+')?;
        Some(Self::new(first, second))
    }
}

impl fmt::Display for WorkloadPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// 1ファイル分の抽出結果（指標名 → 生の値）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRecord {
    values: HashMap<Metric, String>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値をセット（空文字列は未検出と同じ扱い）
    pub fn insert(&mut self, metric: Metric, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&metric);
        } else {
            self.values.insert(metric, value);
        }
    }

    pub fn get(&self, metric: Metric) -> Option<&str> {
        self.values.get(&metric).map(String::as_str)
    }

    /// 抽出できた指標数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 出力表の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRow {
    fields: [String; COLUMN_COUNT],
}

impl OutputRow {
    pub const READ_HIT_RATE_COLUMN: usize = 6;
    pub const WRITE_HIT_RATE_COLUMN: usize = 9;

    /// ラベル2列のみ埋めた空行
    pub fn empty(pair: &WorkloadPair, tlb_type: TlbType) -> Self {
        Self::with_labels(&pair.label(), tlb_type.label())
    }

    /// 任意のラベルで空行を作成
    pub fn with_labels(workloads: &str, tlb_type: &str) -> Self {
        let mut fields: [String; COLUMN_COUNT] = Default::default();
        fields[0] = workloads.to_string();
        fields[1] = tlb_type.to_string();
        Self { fields }
    }

    /// 指標列をセット（空値は無視して空欄のまま）
    pub fn set(&mut self, column: usize, value: &str) {
        if !value.is_empty() && column >= 2 && column < COLUMN_COUNT {
            self.fields[column] = value.to_string();
        }
    }

    pub fn get(&self, column: usize) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn workloads(&self) -> &str {
        &self.fields[0]
    }

    pub fn tlb_type(&self) -> &str {
        &self.fields[1]
    }

    pub fn fields(&self) -> &[String; COLUMN_COUNT] {
        &self.fields
    }

    /// 指標列がすべて空か
    pub fn is_blank(&self) -> bool {
        self.fields[2..].iter().all(String::is_empty)
    }
}

impl From<[&str; COLUMN_COUNT]> for OutputRow {
    fn from(values: [&str; COLUMN_COUNT]) -> Self {
        Self {
            fields: values.map(|v| v.to_string()),
        }
    }
}
