//! Display formatting for silver amounts.

/// Rounds to the nearest whole silver and groups thousands with commas,
/// e.g. `-12345.6` becomes `-12,346`.
pub fn silver(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Like [`silver`] but always carries a sign, for profit deltas.
pub fn signed_silver(value: f64) -> String {
    if value.is_finite() && value.round() > 0.0 {
        format!("+{}", silver(value))
    } else {
        silver(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(silver(0.0), "0");
        assert_eq!(silver(999.0), "999");
        assert_eq!(silver(1000.0), "1,000");
        assert_eq!(silver(1234567.0), "1,234,567");
    }

    #[test]
    fn rounds_and_keeps_sign() {
        assert_eq!(silver(-12345.6), "-12,346");
        assert_eq!(silver(-0.2), "0");
        assert_eq!(silver(7.5), "8");
        assert_eq!(silver(f64::NAN), "n/a");
    }

    #[test]
    fn deltas_are_signed() {
        assert_eq!(signed_silver(1500.0), "+1,500");
        assert_eq!(signed_silver(-20.0), "-20");
        assert_eq!(signed_silver(0.0), "0");
    }
}
