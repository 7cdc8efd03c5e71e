//! Response envelope and loosely-typed numeric fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// REST response wrapper: every source payload arrives as `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}

/// A count or percentage as the API sends it: a JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericValue {
    Number(serde_json::Number),
    Text(String),
}

impl NumericValue {
    /// Render the value the way the dashboard prints it.
    ///
    /// Strings are returned verbatim. Numbers follow JavaScript's
    /// number-to-string rules: integral floats drop the fractional part
    /// and magnitudes outside `[1e-6, 1e21)` use exponent notation with an
    /// explicit sign (`1e+21`).
    pub fn to_display_string(&self) -> String {
        match self {
            NumericValue::Text(text) => text.clone(),
            NumericValue::Number(number) => {
                if number.is_f64() {
                    number
                        .as_f64()
                        .map(format_float)
                        .unwrap_or_else(|| number.to_string())
                } else {
                    number.to_string()
                }
            }
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Number(value.into())
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

fn format_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Result of truncating integer parsing.
///
/// Serializes as a JSON integer, or `null` when the input had no leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInt {
    Int(i64),
    NotANumber,
}

impl ParsedInt {
    /// The integer value, if the parse produced one.
    pub fn value(&self) -> Option<i64> {
        match self {
            ParsedInt::Int(value) => Some(*value),
            ParsedInt::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, ParsedInt::NotANumber)
    }
}

impl std::fmt::Display for ParsedInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedInt::Int(value) => write!(f, "{}", value),
            ParsedInt::NotANumber => write!(f, "NaN"),
        }
    }
}

impl Serialize for ParsedInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParsedInt::Int(value) => serializer.serialize_i64(*value),
            ParsedInt::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ParsedInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<i64>::deserialize(deserializer)?;
        Ok(value.map_or(ParsedInt::NotANumber, ParsedInt::Int))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_accepts_number_or_string() {
        let number: NumericValue = serde_json::from_str("12").unwrap();
        let text: NumericValue = serde_json::from_str("\"12.50\"").unwrap();

        assert_eq!(number, NumericValue::from(12i64));
        assert_eq!(text, NumericValue::from("12.50"));
    }

    #[test]
    fn test_display_string_follows_js_number_rules() {
        let parse = |s: &str| serde_json::from_str::<NumericValue>(s).unwrap();

        assert_eq!(parse("40").to_display_string(), "40");
        assert_eq!(parse("40.0").to_display_string(), "40");
        assert_eq!(parse("12.5").to_display_string(), "12.5");
        assert_eq!(parse("-0.0").to_display_string(), "0");
        assert_eq!(parse("1e21").to_display_string(), "1e+21");
        assert_eq!(parse("1.5e-7").to_display_string(), "1.5e-7");
        assert_eq!(parse("\"33.33\"").to_display_string(), "33.33");
    }

    #[test]
    fn test_parsed_int_serialization() {
        assert_eq!(serde_json::to_string(&ParsedInt::Int(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ParsedInt::NotANumber).unwrap(), "null");

        let back: ParsedInt = serde_json::from_str("null").unwrap();
        assert!(back.is_nan());
    }
}
