use std::str::FromStr;

use super::{Cmyk, Color, Hsl, Rgb};
use crate::core::parse;
use crate::error::ColorError;
use crate::Float;

/// A color in any of the models produced by parsing CSS.
///
/// Named colors, hexadecimal colors, and `rgb()`/`rgba()` produce RGB,
/// `hsl()`/`hsla()` produce HSL, and `device-cmyk()` produces CMYK. Since all
/// variants implement [`Color`], so does this enum, by delegation.
///
/// # Examples
///
/// ```
/// # use colorspace::{AnyColor, Color, ColorError};
/// let color: AnyColor = "hsl(180, 10%, 25%)".parse()?;
/// assert!(matches!(color, AnyColor::Hsl(_)));
/// assert_eq!(color.to_css(false), "hsl(180 10% 25%)");
///
/// let color = AnyColor::from_css("SpringGreen")?;
/// assert_eq!(color.to_css_hex(), "#00ff7f");
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum AnyColor {
    Rgb(Rgb),
    Hsl(Hsl),
    Cmyk(Cmyk),
}

impl AnyColor {
    /// Parse the CSS color.
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        parse(text)
    }

    /// Format this color in the CSS syntax of its model.
    pub fn to_css(&self, legacy: bool) -> String {
        match self {
            Self::Rgb(color) => color.to_css(legacy),
            Self::Hsl(color) => color.to_css(legacy),
            Self::Cmyk(color) => color.to_css(legacy),
        }
    }
}

impl Default for AnyColor {
    fn default() -> Self {
        Self::Rgb(Rgb::default())
    }
}

impl From<Rgb> for AnyColor {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for AnyColor {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Cmyk> for AnyColor {
    fn from(value: Cmyk) -> Self {
        Self::Cmyk(value)
    }
}

impl Color for AnyColor {
    /// Create a new RGB color.
    fn from_rgba(rgba: [Float; 4]) -> Self {
        Self::Rgb(Rgb::from_rgba(rgba))
    }

    fn rgba(&self) -> [Float; 4] {
        match self {
            Self::Rgb(color) => color.rgba(),
            Self::Hsl(color) => color.rgba(),
            Self::Cmyk(color) => color.rgba(),
        }
    }

    fn replace_rgba(&mut self, rgba: [Float; 4]) {
        match self {
            Self::Rgb(color) => color.replace_rgba(rgba),
            Self::Hsl(color) => color.replace_rgba(rgba),
            Self::Cmyk(color) => color.replace_rgba(rgba),
        }
    }

    fn hue(&self) -> Float {
        match self {
            Self::Rgb(color) => color.hue(),
            Self::Hsl(color) => color.hue(),
            Self::Cmyk(color) => color.hue(),
        }
    }
}

impl FromStr for AnyColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for AnyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css(false))
    }
}
