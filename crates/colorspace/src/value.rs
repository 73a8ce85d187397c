//! Normalization of color component inputs.
//!
//! Color components arrive in several guises: as unit-range floats, as
//! integers on the 0–255 scale, or as text such as `128`, `50%`, or `none`.
//! [`Value`] captures all of them and [`Value::limit`] turns them into the
//! canonical unit range.

use std::str::FromStr;

use crate::core::{clamp_unit, format_number, round_to};
use crate::error::ColorError;
use crate::Float;

/// A color component before normalization.
///
/// # Examples
///
/// ```
/// # use colorspace::{ColorError, Value};
/// assert_eq!("50%".parse::<Value>()?, Value::Percentage(50.0));
/// assert_eq!("NONE".parse::<Value>()?, Value::Unchanged);
/// assert_eq!(Value::from(255_u8).limit(false), Some(1.0));
/// assert_eq!(Value::Number(0.6).limit(true), Some(0.6));
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// A floating point number, used as is.
    Float(Float),
    /// An integer on the 0–255 scale.
    Integer(i64),
    /// Numeric text without a unit. It is on the 0–255 scale for color
    /// channels and on the unit scale for alpha.
    Number(Float),
    /// Numeric text with a trailing `%`.
    Percentage(Float),
    /// The text `none`. Setters leave the component alone.
    Unchanged,
}

impl Value {
    /// Normalize this value into the unit range.
    ///
    /// The alpha flag selects the scale for [`Value::Number`]. The result is
    /// clamped, with not-a-number becoming zero. This method returns `None`
    /// for [`Value::Unchanged`].
    pub fn limit(&self, alpha: bool) -> Option<Float> {
        let value = match *self {
            Self::Float(value) => value,
            Self::Integer(value) => value as Float / 255.0,
            Self::Number(value) => {
                if alpha {
                    value
                } else {
                    value / 255.0
                }
            }
            Self::Percentage(value) => value / 100.0,
            Self::Unchanged => return None,
        };

        Some(clamp_unit(value))
    }

    /// Determine whether this value is [`Value::Unchanged`].
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Self::Float(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl FromStr for Value {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("none") {
            return Ok(Self::Unchanged);
        }

        fn parse_number(text: &str, original: &str) -> Result<Float, ColorError> {
            text.parse::<Float>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| ColorError::InvalidValue(original.to_string()))
        }

        match text.strip_suffix('%') {
            Some(number) => Ok(Self::Percentage(parse_number(number, s)?)),
            None => Ok(Self::Number(parse_number(text, s)?)),
        }
    }
}

impl TryFrom<&str> for Value {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a textual color component into the unit range.
///
/// Text ending in `%` is divided by 100. Other numbers are divided by 255,
/// unless `alpha` is set, in which case they are used as is. The result is
/// clamped to the unit range.
///
/// # Examples
///
/// ```
/// # use colorspace::{limit, ColorError};
/// assert_eq!(limit("100%", false)?, 1.0);
/// assert_eq!(limit("-10", false)?, 0.0);
/// assert_eq!(limit("7", true)?, 1.0);
/// assert!(limit("none", false).is_err());
/// # Ok::<(), ColorError>(())
/// ```
pub fn limit(text: &str, alpha: bool) -> Result<Float, ColorError> {
    text.parse::<Value>()?
        .limit(alpha)
        .ok_or_else(|| ColorError::InvalidValue(text.to_string()))
}

/// Format the unit-range value as a percentage with at most `precision`
/// places after the decimal and without trailing zeros.
///
/// # Examples
///
/// ```
/// # use colorspace::as_percent;
/// assert_eq!(as_percent(0.1005, 2), "10.05%");
/// assert_eq!(as_percent(0.10005, 2), "10.01%");
/// assert_eq!(as_percent(0.10005, 3), "10.005%");
/// ```
pub fn as_percent(value: Float, precision: usize) -> String {
    format!("{}%", format_number(round_to(value * 100.0, precision)))
}

// ====================================================================================================================
