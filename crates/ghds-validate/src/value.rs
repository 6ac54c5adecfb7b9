//! Expected cell values for exact-match checks.

use std::fmt;

use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};

/// A literal a whole column is expected to hold.
///
/// Equality is type-sensitive: strings never equal numbers, booleans never
/// equal integers. Integers and floats compare numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ExpectedValue {
    /// Compare against one cell.
    pub fn matches(&self, cell: &AnyValue<'_>) -> bool {
        match (self, cell) {
            (ExpectedValue::Null, AnyValue::Null) => true,
            (ExpectedValue::Bool(expected), AnyValue::Boolean(actual)) => expected == actual,
            (ExpectedValue::Str(expected), AnyValue::String(actual)) => expected == actual,
            (ExpectedValue::Str(expected), AnyValue::StringOwned(actual)) => {
                expected.as_str() == actual.as_str()
            }
            (ExpectedValue::Int(expected), cell) => match integer_cell(cell) {
                Some(actual) => actual == i128::from(*expected),
                None => float_cell(cell).is_some_and(|actual| actual == *expected as f64),
            },
            (ExpectedValue::Float(expected), cell) => {
                numeric_cell(cell).is_some_and(|actual| actual == *expected)
            }
            _ => false,
        }
    }
}

fn integer_cell(cell: &AnyValue<'_>) -> Option<i128> {
    match *cell {
        AnyValue::Int8(v) => Some(i128::from(v)),
        AnyValue::Int16(v) => Some(i128::from(v)),
        AnyValue::Int32(v) => Some(i128::from(v)),
        AnyValue::Int64(v) => Some(i128::from(v)),
        AnyValue::UInt8(v) => Some(i128::from(v)),
        AnyValue::UInt16(v) => Some(i128::from(v)),
        AnyValue::UInt32(v) => Some(i128::from(v)),
        AnyValue::UInt64(v) => Some(i128::from(v)),
        _ => None,
    }
}

fn float_cell(cell: &AnyValue<'_>) -> Option<f64> {
    match *cell {
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}

fn numeric_cell(cell: &AnyValue<'_>) -> Option<f64> {
    float_cell(cell).or_else(|| integer_cell(cell).map(|v| v as f64))
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedValue::Null => f.write_str("null"),
            ExpectedValue::Bool(v) => write!(f, "{v}"),
            ExpectedValue::Int(v) => write!(f, "{v}"),
            ExpectedValue::Float(v) => write!(f, "{v}"),
            ExpectedValue::Str(v) => write!(f, "'{v}'"),
        }
    }
}

impl From<bool> for ExpectedValue {
    fn from(value: bool) -> Self {
        ExpectedValue::Bool(value)
    }
}

impl From<i32> for ExpectedValue {
    fn from(value: i32) -> Self {
        ExpectedValue::Int(i64::from(value))
    }
}

impl From<i64> for ExpectedValue {
    fn from(value: i64) -> Self {
        ExpectedValue::Int(value)
    }
}

impl From<f64> for ExpectedValue {
    fn from(value: f64) -> Self {
        ExpectedValue::Float(value)
    }
}

impl From<&str> for ExpectedValue {
    fn from(value: &str) -> Self {
        ExpectedValue::Str(value.to_string())
    }
}

impl From<String> for ExpectedValue {
    fn from(value: String) -> Self {
        ExpectedValue::Str(value)
    }
}
