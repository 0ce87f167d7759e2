use tlb_report_common::TlbType;

/// `<prefix>.<workload1>.<workload2>` 形式のファイル名
pub fn result_file_name(tlb_type: TlbType, first: &str, second: &str) -> String {
    format!("{}.{}.{}", tlb_type.file_prefix(), first, second)
}

/// ファイル名を (TLB構成, ワークロード1, ワークロード2) に分解
///
/// 命名規則に合わないファイル名はNone
pub fn parse_result_file_name(name: &str) -> Option<(TlbType, String, String)> {
    // プレフィックス自体がドットを1つ含む（例: 01.norm）
    let mut parts = name.splitn(4, '.');
    let prefix = format!("{}.{}", parts.next()?, parts.next()?);
    let tlb_type = TlbType::from_prefix(&prefix)?;

    let first = parts.next()?;
    let second = parts.next()?;
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((tlb_type, first.to_string(), second.to_string()))
}
