//! Raw and resolved value types for box-model properties.
//!
//! [§ 6 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)

use std::fmt;

use serde::{Deserialize, Serialize};

/// A property value as supplied by the caller, before any parsing.
///
/// Mirrors the JSON shapes accepted in property bags: a plain number, a
/// string (`"auto"`, `"50%"`, `"12.5"`, `"row wrap"`), or an ordered list for
/// the 1/2/3/4-value shorthands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A bare number.
    Number(f64),
    /// A keyword, percentage, or numeric string.
    Text(String),
    /// A shorthand list.
    List(Vec<RawValue>),
}

impl RawValue {
    /// The value as a plain number, parsing numeric strings.
    ///
    /// Returns `None` for keywords, percentages, lists, and non-finite numbers.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::List(_) => None,
        }
    }

    /// Split a shorthand into its components.
    ///
    /// Lists are returned as-is and whitespace-separated strings are split
    /// into one text value per token. Any other value is a single component.
    #[must_use]
    pub fn components(&self) -> Vec<Self> {
        match self {
            Self::List(values) => values.clone(),
            Self::Text(text) => text
                .split_whitespace()
                .map(|token| Self::Text(token.to_string()))
                .collect(),
            Self::Number(_) => vec![self.clone()],
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
///
/// This enum represents a value that can either be 'auto' or a specific length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr {
    /// The value is 'auto' and must be resolved during layout.
    #[default]
    Auto,
    /// The value is a specific length in pixels.
    Length(f64),
}

impl AutoOr {
    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Get the length value, or a default if 'auto'.
    #[must_use]
    pub const fn to_px_or(&self, default: f64) -> f64 {
        match self {
            Self::Length(v) => *v,
            Self::Auto => default,
        }
    }

    /// The length, treating `auto` and zero as unset.
    ///
    /// Zero-sized explicit dimensions and min/max constraints behave as if
    /// they were never given.
    #[must_use]
    pub fn non_zero(&self) -> Option<f64> {
        match self {
            Self::Length(v) if *v != 0.0 => Some(*v),
            _ => None,
        }
    }

    /// JSON form used in computed-layout output: a number or `"auto"`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Auto => serde_json::Value::from("auto"),
            Self::Length(v) => serde_json::Value::from(*v),
        }
    }
}

/// Edge sizes for padding or border.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f64,
    /// Right edge size.
    pub right: f64,
    /// Bottom edge size.
    pub bottom: f64,
    /// Left edge size.
    pub left: f64,
}

impl EdgeSizes {
    /// Edges in `[top, right, bottom, left]` order.
    #[must_use]
    pub const fn from_array([top, right, bottom, left]: [f64; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Edges in `[top, right, bottom, left]` order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// [§ 8 Box model](https://www.w3.org/TR/CSS2/box.html)
///
/// Edge values where each side can be 'auto' or a specific length.
/// Used for margins where 'auto' absorbs free space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoEdgeSizes {
    /// Top edge value.
    pub top: AutoOr,
    /// Right edge value.
    pub right: AutoOr,
    /// Bottom edge value.
    pub bottom: AutoOr,
    /// Left edge value.
    pub left: AutoOr,
}

impl AutoEdgeSizes {
    /// Edges in `[top, right, bottom, left]` order.
    #[must_use]
    pub const fn from_array([top, right, bottom, left]: [AutoOr; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Edges in `[top, right, bottom, left]` order.
    #[must_use]
    pub const fn to_array(&self) -> [AutoOr; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}
