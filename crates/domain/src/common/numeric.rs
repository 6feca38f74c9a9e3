//! Parse-with-default helpers for numeric sheet input.
//!
//! A rank field can hold anything while the player is typing. These helpers
//! make the coercion explicit: a malformed value is worth zero, never an error.

/// Parses a rank from free text, returning 0 when the text is not a number.
///
/// Accepts a trimmed integer first, then a finite decimal truncated toward
/// zero. Values outside the `i32` range are treated as malformed.
///
/// # Examples
///
/// ```
/// use xpledger_domain::common::parse_rank_or_zero;
///
/// assert_eq!(parse_rank_or_zero(" 3 "), 3);
/// assert_eq!(parse_rank_or_zero("2.9"), 2);
/// assert_eq!(parse_rank_or_zero("abc"), 0);
/// assert_eq!(parse_rank_or_zero(""), 0);
/// ```
pub fn parse_rank_or_zero(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i32>() {
        return value;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .map(truncate_or_zero)
        .unwrap_or(0)
}

/// Converts a JSON-style float into a rank, truncating toward zero.
///
/// NaN, infinities, and values outside the `i32` range become 0.
pub fn truncate_or_zero(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return 0;
    }
    truncated as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_parse() {
        assert_eq!(parse_rank_or_zero("0"), 0);
        assert_eq!(parse_rank_or_zero("5"), 5);
        assert_eq!(parse_rank_or_zero("-2"), -2);
        assert_eq!(parse_rank_or_zero("  +4"), 4);
    }

    #[test]
    fn test_decimals_truncate_toward_zero() {
        assert_eq!(parse_rank_or_zero("3.7"), 3);
        assert_eq!(parse_rank_or_zero("-1.5"), -1);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_rank_or_zero("trois"), 0);
        assert_eq!(parse_rank_or_zero("3abc"), 0);
        assert_eq!(parse_rank_or_zero("NaN"), 0);
        assert_eq!(parse_rank_or_zero("inf"), 0);
        assert_eq!(parse_rank_or_zero("99999999999"), 0);
    }

    #[test]
    fn test_truncate_or_zero_bounds() {
        assert_eq!(truncate_or_zero(f64::NAN), 0);
        assert_eq!(truncate_or_zero(f64::INFINITY), 0);
        assert_eq!(truncate_or_zero(1e12), 0);
        assert_eq!(truncate_or_zero(4.99), 4);
    }
}
