//! ヒット率計算

/// 計算不能時の値
pub const ZERO_HIT_RATE: &str = "0.000";

/// アクセス数・ミス数からヒット率を計算（小数点以下3桁の文字列）
///
/// 以下の場合は `"0.000"`:
/// - アクセス数が未取得・空・`"0"`
/// - ミス数が未取得・空
/// - どちらかが整数として解釈できない
/// - 除算が定義されない・減算が桁あふれする
///
/// # Examples
/// ```
/// use tlb_report_common::calculate_hit_rate;
///
/// assert_eq!(calculate_hit_rate(Some("1000"), Some("50")), "0.950");
/// assert_eq!(calculate_hit_rate(Some("100"), Some("0")), "1.000");
/// assert_eq!(calculate_hit_rate(Some("0"), Some("5")), "0.000");
/// assert_eq!(calculate_hit_rate(None, Some("5")), "0.000");
/// ```
pub fn calculate_hit_rate(accesses: Option<&str>, misses: Option<&str>) -> String {
    let (accesses, misses) = match (accesses, misses) {
        (Some(a), Some(m)) if !a.is_empty() && !m.is_empty() && a != "0" => (a, m),
        _ => return ZERO_HIT_RATE.to_string(),
    };

    let (Ok(accesses), Ok(misses)) = (accesses.parse::<i128>(), misses.parse::<i128>()) else {
        return ZERO_HIT_RATE.to_string();
    };

    if accesses == 0 {
        return ZERO_HIT_RATE.to_string();
    }

    let Some(hits) = accesses.checked_sub(misses) else {
        return ZERO_HIT_RATE.to_string();
    };

    let rate = hits as f64 / accesses as f64;
    if !rate.is_finite() {
        return ZERO_HIT_RATE.to_string();
    }

    format!("{:.3}", rate)
}
