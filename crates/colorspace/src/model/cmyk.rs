#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::rgb::format_alpha;
use super::{clamp_rgba, rgb_of, Color};
use crate::core::{
    clamp_unit, cmyk_to_rgb, format_number, rgb_to_cmyk, round_to, to_eq_channels, Memo,
};
use crate::error::ColorError;
use crate::value::{as_percent, Value};
use crate::Float;

/// Format the unit-range value as a percentage followed by the symbol.
fn format_percent(value: Float, precision: usize, symbol: &str) -> String {
    format!("{}{}", format_number(round_to(value * 100.0, precision)), symbol)
}

/// A color in the CMYK model.
///
/// Cyan, magenta, yellow, and black are kept alongside RGBA. Black is
/// derived first, as one minus the largest RGB channel, and the inks follow
/// from it. Unlike the other models, bare numbers are on the unit scale for
/// all CMYK components.
///
/// # Examples
///
/// ```
/// # use colorspace::{Cmyk, Color, Rgb};
/// let color: Cmyk = Rgb::new(0.5, 0.25, 0.0, 1.0).to();
/// assert_eq!(color.black(), 0.5);
/// assert_eq!(color.to_string(), "0%, 50%, 100%, 50%");
/// assert_eq!(color.to_css(false), "device-cmyk(0% 50% 100% 50%)");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, unsendable, module = "colorspace"))]
#[derive(Clone, Debug)]
pub struct Cmyk {
    rgba: [Float; 4],
    cmyk: Memo<[Float; 4]>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cmyk {
    /// Create a new CMYK color from unit-range components.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(cyan: Float, magenta: Float, yellow: Float, black: Float, alpha: Float) -> Self {
        Self::with_native([cyan, magenta, yellow, black], alpha)
    }

    /// Create a new CMYK color from unit-range components. Out-of-range
    /// values are clamped.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(cyan: Float, magenta: Float, yellow: Float, black: Float, alpha: Float) -> Self {
        Self::with_native([cyan, magenta, yellow, black], alpha)
    }

    /// Parse the CSS color and convert it to CMYK.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Parse the CSS color and convert it to CMYK.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(not(feature = "pyffi"))]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Get the cyan ink.
    pub fn cyan(&self) -> Float {
        self.native()[0]
    }

    /// Get the magenta ink.
    pub fn magenta(&self) -> Float {
        self.native()[1]
    }

    /// Get the yellow ink.
    pub fn yellow(&self) -> Float {
        self.native()[2]
    }

    /// Get the black ink.
    pub fn black(&self) -> Float {
        self.native()[3]
    }

    /// Format the cyan ink as a percentage.
    ///
    /// The percentage is rounded to the given number of places and followed
    /// by the symbol, which usually is `%`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorspace::Cmyk;
    /// let color = Cmyk::new(0.12345, 0.0, 0.0, 0.0, 1.0);
    /// assert_eq!(color.cyan_percent(2, "%"), "12.35%");
    /// assert_eq!(color.cyan_percent(0, " percent"), "12 percent");
    /// ```
    pub fn cyan_percent(&self, precision: usize, symbol: &str) -> String {
        format_percent(self.cyan(), precision, symbol)
    }

    /// Format the magenta ink as a percentage with the given suffix.
    pub fn magenta_percent(&self, precision: usize, symbol: &str) -> String {
        format_percent(self.magenta(), precision, symbol)
    }

    /// Format the yellow ink as a percentage with the given suffix.
    pub fn yellow_percent(&self, precision: usize, symbol: &str) -> String {
        format_percent(self.yellow(), precision, symbol)
    }

    /// Format the black ink as a percentage with the given suffix.
    pub fn black_percent(&self, precision: usize, symbol: &str) -> String {
        format_percent(self.black(), precision, symbol)
    }

    /// Format this color as a CSS `device-cmyk()` function.
    ///
    /// Inks are percentages with up to two places. Alpha is written only if
    /// it is not one.
    pub fn to_css(&self, legacy: bool) -> String {
        let delimiter = if legacy { ", " } else { " " };
        let inks = self
            .native()
            .iter()
            .map(|ink| as_percent(*ink, 2))
            .collect::<Vec<_>>()
            .join(delimiter);

        format!(
            "device-cmyk({}{})",
            inks,
            format_alpha(self.rgba[3], legacy).unwrap_or_default()
        )
    }

    /// Set cyan, magenta, yellow, black, and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_cmyka")]
    pub fn py_set_cmyka(
        &mut self,
        cyan: Float,
        magenta: Float,
        yellow: Float,
        black: Float,
        alpha: Float,
    ) {
        self.set_cmyka(cyan, magenta, yellow, black, alpha);
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

    /// Set the cyan ink. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_cyan")]
    pub fn py_set_cyan(&mut self, cyan: Float) {
        self.set_cyan(cyan);
    }

    /// Set the magenta ink. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_magenta")]
    pub fn py_set_magenta(&mut self, magenta: Float) {
        self.set_magenta(magenta);
    }

    /// Set the yellow ink. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_yellow")]
    pub fn py_set_yellow(&mut self, yellow: Float) {
        self.set_yellow(yellow);
    }

    /// Set the black ink. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_black")]
    pub fn py_set_black(&mut self, black: Float) {
        self.set_black(black);
    }

    /// Set all four inks. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_cmyk")]
    pub fn py_set_cmyk(&mut self, cyan: Float, magenta: Float, yellow: Float, black: Float) {
        self.set_cmyk(cyan, magenta, yellow, black);
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

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Cmyk {
    fn with_native(cmyk: [Float; 4], alpha: Float) -> Self {
        let cmyk = [
            clamp_unit(cmyk[0]),
            clamp_unit(cmyk[1]),
            clamp_unit(cmyk[2]),
            clamp_unit(cmyk[3]),
        ];
        let [r, g, b] = cmyk_to_rgb(&cmyk);
        Self {
            rgba: [r, g, b, clamp_unit(alpha)],
            cmyk: Memo::fresh(cmyk),
        }
    }

    fn native(&self) -> [Float; 4] {
        self.cmyk.get_or_compute(|| rgb_to_cmyk(&rgb_of(&self.rgba)))
    }

    fn update_native(&mut self, values: [Value; 4]) -> &mut Self {
        if values.iter().all(Value::is_unchanged) {
            return self;
        }

        let mut cmyk = self.native();
        for (component, value) in cmyk.iter_mut().zip(values) {
            if let Some(value) = value.limit(true) {
                *component = value;
            }
        }

        let [r, g, b] = cmyk_to_rgb(&cmyk);
        self.rgba[..3].copy_from_slice(&[r, g, b]);
        self.cmyk.set(cmyk);
        self
    }

    /// Create a new CMYK color from four or five values.
    ///
    /// # Errors
    ///
    /// This function fails with [`ColorError::InvalidArguments`] if there are
    /// fewer than four or more than five values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorspace::{Cmyk, Color, ColorError, Value};
    /// let values = ["0", "100%", "1", "0.5"].map(|t| t.parse::<Value>());
    /// let values = values.into_iter().collect::<Result<Vec<_>, _>>()?;
    /// let color = Cmyk::from_values(&values)?;
    /// assert_eq!(color.to_css_hex(), "#7f0000");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let alpha = match values.len() {
            4 => Value::Float(1.0),
            5 => values[4],
            n => {
                return Err(ColorError::InvalidArguments(format!(
                    "{} values for CMYKA",
                    n
                )));
            }
        };

        let mut color = Self::with_native([0.0; 4], 0.0);
        color.set_cmyka(values[0], values[1], values[2], values[3], alpha);
        Ok(color)
    }

    /// Set the cyan ink.
    pub fn set_cyan(&mut self, cyan: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([cyan.into(), U, U, U])
    }

    /// Set the magenta ink.
    pub fn set_magenta(&mut self, magenta: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, magenta.into(), U, U])
    }

    /// Set the yellow ink.
    pub fn set_yellow(&mut self, yellow: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, U, yellow.into(), U])
    }

    /// Set the black ink.
    pub fn set_black(&mut self, black: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, U, U, black.into()])
    }

    /// Set all four inks without touching alpha.
    pub fn set_cmyk(
        &mut self,
        cyan: impl Into<Value>,
        magenta: impl Into<Value>,
        yellow: impl Into<Value>,
        black: impl Into<Value>,
    ) -> &mut Self {
        self.update_native([cyan.into(), magenta.into(), yellow.into(), black.into()])
    }

    /// Set all four inks and alpha.
    pub fn set_cmyka(
        &mut self,
        cyan: impl Into<Value>,
        magenta: impl Into<Value>,
        yellow: impl Into<Value>,
        black: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> &mut Self {
        if let Some(alpha) = alpha.into().limit(true) {
            self.rgba[3] = alpha;
        }
        self.set_cmyk(cyan, magenta, yellow, black)
    }
}

impl Default for Cmyk {
    /// Create opaque black.
    fn default() -> Self {
        Self::with_native([0.0, 0.0, 0.0, 1.0], 1.0)
    }
}

impl Color for Cmyk {
    fn from_rgba(rgba: [Float; 4]) -> Self {
        Self {
            rgba: clamp_rgba(rgba),
            cmyk: Memo::stale(),
        }
    }

    #[inline]
    fn rgba(&self) -> [Float; 4] {
        self.rgba
    }

    fn replace_rgba(&mut self, rgba: [Float; 4]) {
        self.rgba = clamp_rgba(rgba);
        self.cmyk.invalidate();
    }
}

impl std::hash::Hash for Cmyk {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.rgba).hash(state);
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        to_eq_channels(&self.rgba) == to_eq_channels(&other.rgba)
    }
}

impl Eq for Cmyk {}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let [c, m, y, k] = self.native();
        f.write_fmt(format_args!(
            "{}, {}, {}, {}",
            as_percent(c, precision),
            as_percent(m, precision),
            as_percent(y, precision),
            as_percent(k, precision)
        ))?;

        let alpha = self.rgba[3];
        if alpha != 1.0 {
            f.write_fmt(format_args!(" / {}", as_percent(alpha, precision)))?;
        }
        Ok(())
    }
}

// ====================================================================================================================
