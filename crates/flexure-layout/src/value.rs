//! Length values and their resolution to pixels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValueParseError;

/// A style length: undefined, an absolute number of points, or a percentage
/// of the containing dimension.
///
/// The unit tag alone decides how the value resolves; there is no implicit
/// coercion between units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub enum LayoutValue {
    /// No value; resolves to 0.
    #[default]
    Undefined,
    /// Absolute length in points.
    Points(f32),
    /// Percentage of the parent dimension.
    Percent(f32),
}

impl LayoutValue {
    /// Absolute length.
    #[must_use]
    pub const fn points(value: f32) -> Self {
        Self::Points(value)
    }

    /// Percentage of the parent dimension.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Whether the value carries a unit.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Resolve to pixels against `parent_size`.
    #[must_use]
    pub fn resolve(&self, parent_size: f32) -> f32 {
        match *self {
            Self::Undefined => 0.0,
            Self::Points(v) => v,
            Self::Percent(v) => v * parent_size / 100.0,
        }
    }

    /// Resolve to pixels, or `None` when undefined.
    #[must_use]
    pub fn resolve_defined(&self, parent_size: f32) -> Option<f32> {
        self.is_defined().then(|| self.resolve(parent_size))
    }

    pub(crate) fn is_finite(&self) -> bool {
        match *self {
            Self::Undefined => true,
            Self::Points(v) | Self::Percent(v) => v.is_finite(),
        }
    }
}

/// Free-function form of [`LayoutValue::resolve`].
#[must_use]
pub fn resolve(value: LayoutValue, parent_size: f32) -> f32 {
    value.resolve(parent_size)
}

impl From<f32> for LayoutValue {
    fn from(value: f32) -> Self {
        Self::Points(value)
    }
}

impl fmt::Display for LayoutValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "auto"),
            Self::Points(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for LayoutValue {
    type Err = ValueParseError;

    /// Accepts `auto`, plain numbers, `12px` and `50%`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ValueParseError::Empty);
        }
        if text.eq_ignore_ascii_case("auto") {
            return Ok(Self::Undefined);
        }

        let (number, percent) = if let Some(n) = text.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = text.strip_suffix("px") {
            (n, false)
        } else {
            (text, false)
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| ValueParseError::Invalid(text.to_string()))?;
        if !value.is_finite() {
            return Err(ValueParseError::Invalid(text.to_string()));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Points(value)
        })
    }
}

// Wire form: a bare number is points, a string is parsed, null is undefined.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f32),
    Text(String),
    Null,
}

impl TryFrom<RawValue> for LayoutValue {
    type Error = ValueParseError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::Number(v) => Ok(Self::Points(v)),
            RawValue::Text(s) => s.parse(),
            RawValue::Null => Ok(Self::Undefined),
        }
    }
}

impl From<LayoutValue> for RawValue {
    fn from(value: LayoutValue) -> Self {
        match value {
            LayoutValue::Points(v) => Self::Number(v),
            other => Self::Text(other.to_string()),
        }
    }
}
