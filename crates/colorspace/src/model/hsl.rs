#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::rgb::format_alpha;
use super::{clamp_rgba, rgb_of, to_byte, Color};
use crate::core::{clamp_unit, format_number, hsl_to_rgb, rgb_to_hsl, to_eq_channels, Memo};
use crate::error::ColorError;
use crate::hue::human_to_hue;
use crate::value::{as_percent, Value};
use crate::Float;

/// A color in the HSL model.
///
/// Besides the canonical RGBA channels, an HSL color keeps its hue,
/// saturation, and lightness. They are authoritative after one of the HSL
/// setters has been invoked. After an RGBA update, they are recomputed on
/// first access. All three are in unit range; hue does not use degrees.
///
/// # Examples
///
/// ```
/// # use colorspace::{Color, Hsl};
/// let mut color = Hsl::new(0.5, 1.0, 0.5, 1.0);
/// assert_eq!(color.to_css_hex(), "#00ffff");
/// color.set_lightness(0.0);
/// assert_eq!(color.to_css_hex(), "#000000");
/// assert_eq!(color.hue(), 0.5);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, unsendable, module = "colorspace"))]
#[derive(Clone, Debug)]
pub struct Hsl {
    rgba: [Float; 4],
    hsl: Memo<[Float; 3]>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsl {
    /// Create a new HSL color from unit-range components.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::with_native([hue, saturation, lightness], alpha)
    }

    /// Create a new HSL color from unit-range components. Out-of-range
    /// values are clamped.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::with_native([hue, saturation, lightness], alpha)
    }

    /// Parse the CSS color and convert it to HSL.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Parse the CSS color and convert it to HSL.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(not(feature = "pyffi"))]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Get the saturation.
    pub fn saturation(&self) -> Float {
        self.native()[1]
    }

    /// Get the lightness.
    pub fn lightness(&self) -> Float {
        self.native()[2]
    }

    /// Get the saturation on the 0–255 scale.
    pub fn saturation_int(&self) -> u8 {
        to_byte(self.saturation())
    }

    /// Get the lightness on the 0–255 scale.
    pub fn lightness_int(&self) -> u8 {
        to_byte(self.lightness())
    }

    /// Format this color as a CSS `hsl()` or `hsla()` function.
    ///
    /// Hue is written on the same 0–255 scale the parser reads bare numbers
    /// on, so that formatting a parsed color restores the original hue.
    /// Saturation and lightness are percentages with up to two places.
    pub fn to_css(&self, legacy: bool) -> String {
        let [h, s, l] = self.native();
        let alpha = format_alpha(self.rgba[3], legacy);
        let delimiter = if legacy { ", " } else { " " };

        format!(
            "{}({}{}{}{}{}{})",
            if alpha.is_some() { "hsla" } else { "hsl" },
            format_number((h * 255.0).round()),
            delimiter,
            as_percent(s, 2),
            delimiter,
            as_percent(l, 2),
            alpha.unwrap_or_default()
        )
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "hue")]
    pub fn py_hue(&self) -> Float {
        self.hue()
    }

    /// Set hue, saturation, lightness, and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_hsla")]
    pub fn py_set_hsla(&mut self, hue: Float, saturation: Float, lightness: Float, alpha: Float) {
        self.set_hsla(hue, saturation, lightness, alpha);
    }

    /// Get the RGBA channels. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "rgba")]
    pub fn py_rgba(&self) -> [Float; 4] {
        self.rgba
    }

    /// Get the alpha channel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "alpha")]
    pub fn py_alpha(&self) -> Float {
        self.rgba[3]
    }

    /// Set the hue. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_hue")]
    pub fn py_set_hue(&mut self, hue: Float) {
        self.set_hue(hue);
    }

    /// Set the saturation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_saturation")]
    pub fn py_set_saturation(&mut self, saturation: Float) {
        self.set_saturation(saturation);
    }

    /// Set the lightness. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_lightness")]
    pub fn py_set_lightness(&mut self, lightness: Float) {
        self.set_lightness(lightness);
    }

    /// Set hue, saturation, and lightness. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_hsl")]
    pub fn py_set_hsl(&mut self, hue: Float, saturation: Float, lightness: Float) {
        self.set_hsl(hue, saturation, lightness);
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

impl Hsl {
    fn with_native(hsl: [Float; 3], alpha: Float) -> Self {
        let hsl = [clamp_unit(hsl[0]), clamp_unit(hsl[1]), clamp_unit(hsl[2])];
        let [r, g, b] = hsl_to_rgb(&hsl);
        Self {
            rgba: [r, g, b, clamp_unit(alpha)],
            hsl: Memo::fresh(hsl),
        }
    }

    /// Get hue, saturation, and lightness, recomputing them if necessary.
    fn native(&self) -> [Float; 3] {
        self.hsl.get_or_compute(|| rgb_to_hsl(&rgb_of(&self.rgba)))
    }

    /// Update the given components and push the result to RGB.
    fn update_native(&mut self, values: [Value; 3]) -> &mut Self {
        if values.iter().all(Value::is_unchanged) {
            return self;
        }

        let mut hsl = self.native();
        for (component, value) in hsl.iter_mut().zip(values) {
            if let Some(value) = value.limit(false) {
                *component = value;
            }
        }

        let [r, g, b] = hsl_to_rgb(&hsl);
        self.rgba[..3].copy_from_slice(&[r, g, b]);
        self.hsl.set(hsl);
        self
    }

    /// Create a new HSL color from three or four values.
    ///
    /// Missing alpha defaults to one. Components that are
    /// [`Value::Unchanged`] stay at zero.
    ///
    /// # Errors
    ///
    /// This function fails with [`ColorError::InvalidArguments`] if there are
    /// fewer than three or more than four values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorspace::{Color, ColorError, Hsl, Value};
    /// let color = Hsl::from_values(&[25.into(), 25.into(), 25.into()])?;
    /// assert_eq!(color.saturation_int(), 25);
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let alpha = match values.len() {
            3 => Value::Float(1.0),
            4 => values[3],
            n => {
                return Err(ColorError::InvalidArguments(format!(
                    "{} values for HSLA",
                    n
                )));
            }
        };

        let mut color = Self::with_native([0.0; 3], 0.0);
        color.set_hsla(values[0], values[1], values[2], alpha);
        Ok(color)
    }

    /// Set the hue. Bare numbers are on the 0–255 scale.
    pub fn set_hue(&mut self, hue: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([hue.into(), U, U])
    }

    /// Set the hue from human hue.
    pub fn set_hue_human(&mut self, human: Float) -> &mut Self {
        self.set_hue(human_to_hue(human))
    }

    /// Set the saturation.
    pub fn set_saturation(&mut self, saturation: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, saturation.into(), U])
    }

    /// Set the lightness.
    pub fn set_lightness(&mut self, lightness: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, U, lightness.into()])
    }

    /// Set hue, saturation, and lightness without touching alpha.
    pub fn set_hsl(
        &mut self,
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        lightness: impl Into<Value>,
    ) -> &mut Self {
        self.update_native([hue.into(), saturation.into(), lightness.into()])
    }

    /// Set hue, saturation, lightness, and alpha.
    pub fn set_hsla(
        &mut self,
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        lightness: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> &mut Self {
        if let Some(alpha) = alpha.into().limit(true) {
            self.rgba[3] = alpha;
        }
        self.set_hsl(hue, saturation, lightness)
    }
}

impl Default for Hsl {
    /// Create opaque black.
    fn default() -> Self {
        Self::with_native([0.0; 3], 1.0)
    }
}

impl Color for Hsl {
    fn from_rgba(rgba: [Float; 4]) -> Self {
        Self {
            rgba: clamp_rgba(rgba),
            hsl: Memo::stale(),
        }
    }

    #[inline]
    fn rgba(&self) -> [Float; 4] {
        self.rgba
    }

    fn replace_rgba(&mut self, rgba: [Float; 4]) {
        self.rgba = clamp_rgba(rgba);
        self.hsl.invalidate();
    }

    fn hue(&self) -> Float {
        self.native()[0]
    }
}

impl std::hash::Hash for Hsl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.rgba).hash(state);
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_channels(&self.rgba) == to_eq_channels(&other.rgba)
    }
}

impl Eq for Hsl {}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css(false))
    }
}

// ====================================================================================================================
