#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{clamp_rgba, AnyColor, Color};
use crate::core::{format_number, parse, round_to, to_eq_channels};
use crate::error::ColorError;
use crate::value::Value;
use crate::Float;

/// Format the alpha clause of a CSS color function, if alpha is not one.
pub(crate) fn format_alpha(alpha: Float, legacy: bool) -> Option<String> {
    if alpha == 1.0 {
        None
    } else {
        let separator = if legacy { ", " } else { " / " };
        let alpha = format_number(round_to(alpha, 4));
        Some(format!("{}{}", separator, alpha))
    }
}

/// A color in the RGB model.
///
/// RGB is the canonical representation for all color models, so this type
/// stores nothing but its four channels.
///
/// # Examples
///
/// ```
/// # use colorspace::{Color, ColorError, Rgb};
/// let mut color = Rgb::from_24bit(32, 32, 32);
/// assert_eq!(color.to_css(false), "rgb(32 32 32)");
/// color.set_alpha(0.2);
/// assert_eq!(color.to_css(true), "rgba(32, 32, 32, 0.2)");
/// # Ok::<(), ColorError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, module = "colorspace"))]
#[derive(Clone, Debug)]
pub struct Rgb {
    rgba: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgb {
    /// Create a new RGB color from unit-range channels.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_rgba([red, green, blue, alpha])
    }

    /// Create a new RGB color from unit-range channels. Out-of-range values
    /// are clamped.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_rgba([red, green, blue, alpha])
    }

    /// Parse the CSS color and convert it to RGB.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Parse the CSS color and convert it to RGB.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(not(feature = "pyffi"))]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Format this color as a CSS `rgb()` or `rgba()` function.
    ///
    /// Channels are written as integers on the 0–255 scale. The legacy
    /// syntax separates arguments with commas, the modern syntax with spaces
    /// and a slash before alpha. Alpha is written only if it is not one.
    pub fn to_css(&self, legacy: bool) -> String {
        let [r, g, b, a] = self.rgba;
        let alpha = format_alpha(a, legacy);
        let delimiter = if legacy { ", " } else { " " };

        format!(
            "{}({}{}{}{}{}{})",
            if alpha.is_some() { "rgba" } else { "rgb" },
            super::to_byte(r),
            delimiter,
            super::to_byte(g),
            delimiter,
            super::to_byte(b),
            alpha.unwrap_or_default()
        )
    }

    /// Get the red channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "red")]
    pub fn py_red(&self) -> Float {
        self.rgba[0]
    }

    /// Get the green channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "green")]
    pub fn py_green(&self) -> Float {
        self.rgba[1]
    }

    /// Get the blue channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "blue")]
    pub fn py_blue(&self) -> Float {
        self.rgba[2]
    }

    /// Get the alpha channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "alpha")]
    pub fn py_alpha(&self) -> Float {
        self.rgba[3]
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "hue")]
    pub fn py_hue(&self) -> Float {
        self.hue()
    }

    /// Get the RGBA channels. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "rgba")]
    pub fn py_rgba(&self) -> [Float; 4] {
        self.rgba
    }

    /// Set the red channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_red")]
    pub fn py_set_red(&mut self, red: Float) {
        self.set_red(red);
    }

    /// Set the green channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_green")]
    pub fn py_set_green(&mut self, green: Float) {
        self.set_green(green);
    }

    /// Set the blue channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_blue")]
    pub fn py_set_blue(&mut self, blue: Float) {
        self.set_blue(blue);
    }

    /// Set the alpha channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_alpha")]
    pub fn py_set_alpha(&mut self, alpha: Float) {
        self.set_alpha(alpha);
    }

    /// Set red, green, blue, and alpha. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_rgba")]
    pub fn py_set_rgba(&mut self, red: Float, green: Float, blue: Float, alpha: Float) {
        self.set_rgba(red, green, blue, alpha);
    }

    /// Format as hashed hexadecimal. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "to_css_hex")]
    pub fn py_to_css_hex(&self) -> String {
        self.to_css_hex()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Rgb {
    /// Create a new, opaque RGB color from 24-bit components.
    pub fn from_24bit(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba([
            red as Float / 255.0,
            green as Float / 255.0,
            blue as Float / 255.0,
            1.0,
        ])
    }

    /// Create a new RGB color from the given values.
    ///
    /// Missing channels default to zero and missing alpha to one. Channels
    /// that are [`Value::Unchanged`] stay at zero, including alpha.
    ///
    /// # Errors
    ///
    /// This function fails with [`ColorError::InvalidArguments`] if there are
    /// more than four values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorspace::{Color, ColorError, Rgb, Value};
    /// let color = Rgb::from_values(&[64.into(), Value::Percentage(50.0)])?;
    /// assert_eq!(color.rgba_int(true), 0xff_408000);
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        if values.len() > 4 {
            return Err(ColorError::InvalidArguments(format!(
                "{} values for RGBA",
                values.len()
            )));
        }

        let mut padded = [
            Value::Integer(0),
            Value::Integer(0),
            Value::Integer(0),
            Value::Float(1.0),
        ];
        padded[..values.len()].copy_from_slice(values);

        let mut color = Self::from_rgba([0.0; 4]);
        color.set_rgba(padded[0], padded[1], padded[2], padded[3]);
        Ok(color)
    }

    /// Parse any supported color text.
    ///
    /// Named colors and hexadecimal colors result in RGB, whereas color
    /// functions produce the model they name.
    pub fn factory(text: &str) -> Result<AnyColor, ColorError> {
        parse(text)
    }
}

impl Default for Rgb {
    /// Create opaque black.
    fn default() -> Self {
        Self::from_rgba([0.0, 0.0, 0.0, 1.0])
    }
}

impl Color for Rgb {
    fn from_rgba(rgba: [Float; 4]) -> Self {
        Self {
            rgba: clamp_rgba(rgba),
        }
    }

    #[inline]
    fn rgba(&self) -> [Float; 4] {
        self.rgba
    }

    fn replace_rgba(&mut self, rgba: [Float; 4]) {
        self.rgba = clamp_rgba(rgba);
    }
}

impl std::hash::Hash for Rgb {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.rgba).hash(state);
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        to_eq_channels(&self.rgba) == to_eq_channels(&other.rgba)
    }
}

impl Eq for Rgb {}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css(false))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Rgb;
    use crate::error::ColorError;
    use crate::value::Value;
    use crate::Color;

    #[test]
    fn test_from_values() -> Result<(), ColorError> {
        let color = Rgb::from_values(&[64.into(), 31.into(), 16.into()])?;
        assert_eq!(color, Rgb::from_24bit(64, 31, 16));

        let color = Rgb::from_values(&[])?;
        assert_eq!(color.rgba(), [0.0, 0.0, 0.0, 1.0]);

        let color = Rgb::from_values(&[
            Value::Number(255.0),
            Value::Unchanged,
            Value::Percentage(100.0),
            Value::Unchanged,
        ])?;
        assert_eq!(color.rgba(), [1.0, 0.0, 1.0, 0.0]);

        assert!(matches!(
            Rgb::from_values(&[Value::Integer(1); 5]),
            Err(ColorError::InvalidArguments(_))
        ));
        Ok(())
    }

    #[test]
    fn test_to_css() {
        let mut color = Rgb::from_24bit(32, 32, 32);
        assert_eq!(color.to_css(false), "rgb(32 32 32)");
        assert_eq!(color.to_css(true), "rgb(32, 32, 32)");
        assert_eq!(color.to_css_hex(), "#202020");
        assert_eq!(format!("{}", color), "rgb(32 32 32)");

        color.set_alpha(0.2);
        assert_eq!(color.to_css(false), "rgba(32 32 32 / 0.2)");
        assert_eq!(color.to_css(true), "rgba(32, 32, 32, 0.2)");

        color.set_alpha(1.0 / 3.0);
        assert_eq!(color.to_css(false), "rgba(32 32 32 / 0.3333)");
    }

    #[test]
    fn test_clamping() {
        let color = Rgb::new(-1.0, 0.5, 2.0, 7.0);
        assert_eq!(color.rgba(), [0.0, 0.5, 1.0, 1.0]);
        assert_eq!(Rgb::default(), Rgb::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_css() -> Result<(), ColorError> {
        let mut color = Rgb::from_css("device-cmyk(0% 100% 100% 0% / 0.5)")?;
        assert_eq!(color.rgba(), [1.0, 0.0, 0.0, 0.5]);
        color.set_green(1.0).set_alpha(1.0);
        assert_eq!(color.to_css(false), "rgb(255 255 0)");
        assert_eq!(Rgb::from_css("navyblue")?.to_css_hex(), "#9fafdf");
        Ok(())
    }
}
