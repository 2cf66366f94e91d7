// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Values hooks report, and the rules for turning them into report text.
//!
//! Values render the way the settings panel shows them: booleans as
//! `True`/`False`, and floats always with a fractional part (`2.0`, `0.1`).

use std::fmt;

/// A single value produced by a hook.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    /// Free-form, already formatted text.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A flag.
    Bool(bool),
}

impl ReportValue {
    /// Returns the [`ValueKind`] of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ReportValue::Text(_) => ValueKind::Text,
            ReportValue::Integer(_) => ValueKind::Integer,
            ReportValue::Float(_) => ValueKind::Float,
            ReportValue::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Text(text) => f.write_str(text),
            ReportValue::Integer(value) => write!(f, "{value}"),
            ReportValue::Float(value) => write_float(f, *value),
            ReportValue::Bool(true) => f.write_str("True"),
            ReportValue::Bool(false) => f.write_str("False"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "inf" } else { "-inf" })
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl From<String> for ReportValue {
    fn from(value: String) -> Self {
        ReportValue::Text(value)
    }
}

impl From<&str> for ReportValue {
    fn from(value: &str) -> Self {
        ReportValue::Text(value.to_string())
    }
}

impl From<i64> for ReportValue {
    fn from(value: i64) -> Self {
        ReportValue::Integer(value)
    }
}

impl From<i32> for ReportValue {
    fn from(value: i32) -> Self {
        ReportValue::Integer(value.into())
    }
}

impl From<u32> for ReportValue {
    fn from(value: u32) -> Self {
        ReportValue::Integer(value.into())
    }
}

impl From<f64> for ReportValue {
    fn from(value: f64) -> Self {
        ReportValue::Float(value)
    }
}

impl From<bool> for ReportValue {
    fn from(value: bool) -> Self {
        ReportValue::Bool(value)
    }
}

/// The shape of a [`ReportValue`], used to read values back from raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form text.
    Text,
    /// A whole number.
    Integer,
    /// A floating point number.
    Float,
    /// A `True`/`False` flag.
    Bool,
}

impl ValueKind {
    /// The value used when raw text cannot be parsed.
    pub fn default_value(self) -> ReportValue {
        match self {
            ValueKind::Text => ReportValue::Text(String::new()),
            ValueKind::Integer => ReportValue::Integer(0),
            ValueKind::Float => ReportValue::Float(0.0),
            ValueKind::Bool => ReportValue::Bool(false),
        }
    }

    /// Parses raw report text into a value of this kind.
    ///
    /// Unparseable numbers fall back to [`default_value`](Self::default_value);
    /// only the exact text `True` reads as a true flag.
    pub fn load(self, raw: &str) -> ReportValue {
        match self {
            ValueKind::Text => ReportValue::Text(raw.to_string()),
            ValueKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map_or_else(|_| self.default_value(), ReportValue::Integer),
            ValueKind::Float => raw
                .trim()
                .parse::<f64>()
                .map_or_else(|_| self.default_value(), ReportValue::Float),
            ValueKind::Bool => ReportValue::Bool(raw == "True"),
        }
    }
}
