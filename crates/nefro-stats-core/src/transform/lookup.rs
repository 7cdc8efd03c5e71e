//! Category lookup and the two lossy field conversions the report applies.

use crate::models::{NumericValue, ParsedInt};

/// Percentage rendered for a category the source list does not contain.
pub const ZERO_PERCENT: &str = "0%";

/// First entry matching `predicate`. Later duplicates are never consulted.
pub fn find_category<T, P>(list: &[T], predicate: P) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    list.iter().find(|entry| predicate(entry))
}

/// Parse a count as a base-10 integer, truncating.
///
/// Intentionally lossy: leading whitespace and an optional sign are
/// accepted, then the longest run of digits is read and everything after it
/// (a fractional part, units, garbage) is discarded. Numbers go through their
/// printed form, so `12.9` becomes `12`. No leading digits gives
/// [`ParsedInt::NotANumber`]. Out-of-range values saturate at the `i64` bounds.
pub fn parse_int_truncating(value: &NumericValue) -> ParsedInt {
    parse_int_prefix(&value.to_display_string())
}

fn parse_int_prefix(text: &str) -> ParsedInt {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return ParsedInt::NotANumber;
    }

    let value = match rest[..digits_len].parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    ParsedInt::Int(value)
}

/// Render a percentage as `"<value>%"`.
///
/// A missing value renders as [`ZERO_PERCENT`], the same text a real zero
/// produces.
pub fn format_percentage(value: Option<&NumericValue>) -> String {
    match value {
        Some(v) => format!("{}%", v.to_display_string()),
        None => ZERO_PERCENT.to_string(),
    }
}
