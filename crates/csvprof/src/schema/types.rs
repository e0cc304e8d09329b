//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred value domain of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Every non-missing value parses as a floating-point number.
    Number,
    /// Anything else, including columns with no usable values.
    Text,
}

impl ColumnType {
    /// The name used in rendered reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value reported in a top-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopValue {
    Number(f64),
    Text(String),
}

impl TopValue {
    /// The numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TopValue::Number(n) => Some(*n),
            TopValue::Text(_) => None,
        }
    }
}

impl fmt::Display for TopValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopValue::Number(n) => write!(f, "{}", n),
            TopValue::Text(s) => f.write_str(s),
        }
    }
}
