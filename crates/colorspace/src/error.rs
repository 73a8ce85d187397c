//! Utility module with colorspace's error.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An erroneous color value, argument list, or color string.
///
/// Every variant describes a caller input that cannot be used. None of them
/// are transient. Operations that fail with one of these errors leave their
/// receiver unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A component string that is not a number. For example, `bad` or `1x%`
    /// cannot be turned into a color component.
    InvalidValue(String),

    /// An argument list with the wrong number of elements or tokens. For
    /// example, `rgb(1 2)` is missing a coordinate, whereas `rgb(1, 2)` is
    /// neither modern nor legacy syntax.
    InvalidArguments(String),

    /// A color function that is not supported. For example, `lab(50% 0 0)` is
    /// valid CSS but not a supported color model.
    UnsupportedFunction(String),

    /// A color string that is neither a named color, nor hexadecimal, nor a
    /// color function. For example, `#12345` has the wrong number of digits.
    UnparseableColor(String),

    /// A name that is not in the table of named colors.
    UnknownNamedColor(String),

    /// A posterization quantum that is zero, negative, or not-a-number.
    InvalidQuantum(Float),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorError::*;

        match self {
            InvalidValue(value) => f.write_fmt(format_args!(
                "color component should be a number or percentage but is \"{}\"",
                value
            )),
            InvalidArguments(args) => f.write_fmt(format_args!(
                "color arguments should have one token per component but \"{}\" does not",
                args
            )),
            UnsupportedFunction(name) => f.write_fmt(format_args!(
                "color function should be supported but {}() is not",
                name
            )),
            UnparseableColor(text) => f.write_fmt(format_args!(
                "color should be a name, hexadecimal, or function but \"{}\" is none of them",
                text
            )),
            UnknownNamedColor(name) => f.write_fmt(format_args!(
                "color name should be a known CSS color but \"{}\" is not",
                name
            )),
            InvalidQuantum(quantum) => f.write_fmt(format_args!(
                "posterization quantum should be positive but is {}",
                quantum
            )),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::ColorError;

    #[test]
    fn test_display() {
        assert_eq!(
            ColorError::UnsupportedFunction("lab".to_string()).to_string(),
            "color function should be supported but lab() is not"
        );
        assert_eq!(
            ColorError::InvalidQuantum(0.0).to_string(),
            "posterization quantum should be positive but is 0"
        );
    }
}
