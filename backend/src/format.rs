//! Display formatting for currency (Yang) and durations

/// Whole-number currency with `.` thousands separators
///
/// # Example
/// ```
/// use metin_farm_core_rs::format::format_currency;
///
/// assert_eq!(format_currency(1_234_567.4), "1.234.567");
/// assert_eq!(format_currency(-2500.5), "-2.501");
/// assert_eq!(format_currency(999.0), "999");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Compact currency: `1.5B`, `20.0M`, `3.2k`, or the plain number below 1000
///
/// # Example
/// ```
/// use metin_farm_core_rs::format::format_compact_currency;
///
/// assert_eq!(format_compact_currency(1_500_000_000.0), "1.5B");
/// assert_eq!(format_compact_currency(20_000_000.0), "20.0M");
/// assert_eq!(format_compact_currency(3_300.0), "3.3k");
/// assert_eq!(format_compact_currency(750.0), "750");
/// ```
pub fn format_compact_currency(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("{:.1}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{:.1}k", amount / 1_000.0)
    } else {
        amount.to_string()
    }
}

/// Seconds as `"{m}m {s}s"` from one minute up, else `"{x.x}s"`
///
/// # Example
/// ```
/// use metin_farm_core_rs::format::format_time;
///
/// assert_eq!(format_time(125.0), "2m 5s");
/// assert_eq!(format_time(12.34), "12.3s");
/// assert_eq!(format_time(f64::INFINITY), "∞");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "∞".to_string();
    }

    if seconds >= 60.0 {
        let minutes = (seconds / 60.0).floor();
        let secs = (seconds % 60.0).round();
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{:.1}s", seconds)
    }
}
