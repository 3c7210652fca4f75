//! Count and rate parsing for whoscored.com cells.

/// Parses a count cell (minutes, goals, assists) as a non-negative integer.
///
/// An empty cell is missing data and reads as zero. Integral decimals such as
/// `"900.0"` are accepted because spreadsheet round-trips produce them.
///
/// # Examples
///
/// ```
/// use statline_common::parse_count;
///
/// assert_eq!(parse_count("900"), Some(900));
/// assert_eq!(parse_count(""), Some(0));
/// assert_eq!(parse_count("12.0"), Some(12));
/// assert_eq!(parse_count("1.5"), None);
/// assert_eq!(parse_count("-3"), None);
/// ```
pub fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) {
        Some(float as u32)
    } else {
        None
    }
}

/// Parses a rate cell (shots per game, pass success, aerials won).
///
/// An empty cell reads as zero. Negative, NaN and infinite values are rejected.
pub fn parse_rate(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let rate = trimmed.parse::<f64>().ok()?;
    if rate.is_finite() && rate >= 0.0 {
        Some(rate)
    } else {
        None
    }
}

/// Rounds half away from zero to the given number of decimal places.
///
/// # Examples
///
/// ```
/// use statline_common::round_to;
///
/// assert_eq!(round_to(1.234, 2), 1.23);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(10.0 / 3.0, 2), 3.33);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_whitespace() {
        assert_eq!(parse_count("  270 "), Some(270));
    }

    #[test]
    fn test_parse_count_rejects_text() {
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("10(2)"), None);
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("3.5"), Some(3.5));
        assert_eq!(parse_rate(""), Some(0.0));
        assert_eq!(parse_rate("0"), Some(0.0));
        assert_eq!(parse_rate("-1.0"), None);
        assert_eq!(parse_rate("nan"), None);
        assert_eq!(parse_rate("x"), None);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
