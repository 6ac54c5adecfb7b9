//! Polars `AnyValue` helpers.

use polars::prelude::*;

/// Converts a cell to its string form. Null becomes an empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Returns true for a null cell.
pub fn is_null(value: &AnyValue<'_>) -> bool {
    matches!(value, AnyValue::Null)
}

/// Formats a float without a trailing fractional zero run.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts a cell to f64. Strings are parsed; null and other types give `None`.
///
/// 64-bit integers above 2^53 lose precision; use [`any_to_int`] to compare them.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an integer cell, or integer text, to i128 without loss.
///
/// Floats, null and other types give `None`.
pub fn any_to_int(value: &AnyValue<'_>) -> Option<i128> {
    match value {
        AnyValue::Int8(v) => Some(i128::from(*v)),
        AnyValue::Int16(v) => Some(i128::from(*v)),
        AnyValue::Int32(v) => Some(i128::from(*v)),
        AnyValue::Int64(v) => Some(i128::from(*v)),
        AnyValue::UInt8(v) => Some(i128::from(*v)),
        AnyValue::UInt16(v) => Some(i128::from(*v)),
        AnyValue::UInt32(v) => Some(i128::from(*v)),
        AnyValue::UInt64(v) => Some(i128::from(*v)),
        AnyValue::String(s) => s.trim().parse().ok(),
        AnyValue::StringOwned(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_keeps_integral_zeros() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(2.50), "2.5");
    }

    #[test]
    fn any_to_string_handles_common_types() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
        assert_eq!(any_to_string(AnyValue::String("octo")), "octo");
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
    }

    #[test]
    fn any_to_int_is_exact() {
        let big = 9_007_199_254_740_993i64;
        assert_eq!(any_to_int(&AnyValue::Int64(big)), Some(i128::from(big)));
        assert_eq!(any_to_int(&AnyValue::UInt64(u64::MAX)), Some(i128::from(u64::MAX)));
        assert_eq!(any_to_int(&AnyValue::String(" 9007199254740993 ")), Some(i128::from(big)));
        assert_eq!(any_to_int(&AnyValue::String("1.5")), None);
        assert_eq!(any_to_int(&AnyValue::Float64(2.0)), None);
        assert_eq!(any_to_int(&AnyValue::Null), None);
    }

    #[test]
    fn any_to_f64_parses_strings() {
        assert_eq!(any_to_f64(AnyValue::String(" 12 ")), Some(12.0));
        assert_eq!(any_to_f64(AnyValue::String("many")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::UInt32(7)), Some(7.0));
    }
}
