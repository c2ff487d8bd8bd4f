//! Formatting helpers for candidate counts and throughput

/// Format a count with thousands separators
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Format a candidate rate as a short human readable string
pub fn format_rate(per_second: f64) -> String {
    const UNITS: &[&str] = &["", "K", "M", "G"];
    let mut rate = per_second.max(0.0);
    let mut unit_index = 0;

    while rate >= 1000.0 && unit_index < UNITS.len() - 1 {
        rate /= 1000.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{rate:.0} H/s")
    } else {
        format!("{:.1} {}H/s", rate, UNITS[unit_index])
    }
}
