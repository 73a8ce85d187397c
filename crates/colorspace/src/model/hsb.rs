#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{clamp_rgba, rgb_of, to_byte, Color};
use crate::core::{
    clamp_unit, format_number, hsb_to_rgb, rgb_to_hsb, round_to, to_eq_channels, Memo,
};
use crate::error::ColorError;
use crate::hue::human_to_hue;
use crate::value::{as_percent, Value};
use crate::Float;

/// A color in the HSB model, also known as HSV.
///
/// Like [`Hsl`](crate::Hsl), an HSB color keeps its native components
/// alongside RGBA and lazily recomputes them after RGBA updates. CSS has no
/// function for HSB, so its [`Display`](std::fmt::Display) implementation
/// uses a plain `h, s%, b%` format, with hue in degrees and the formatter's
/// precision defaulting to two places.
///
/// # Examples
///
/// ```
/// # use colorspace::{Color, Hsb};
/// let color = Hsb::new(1.0 / 3.0, 0.5, 0.8, 1.0);
/// assert_eq!(format!("{}", color), "120, 50%, 80%");
/// assert_eq!(format!("{:.0}", Hsb::new(0.1, 0.333, 1.0, 1.0)), "36, 33%, 100%");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, unsendable, module = "colorspace"))]
#[derive(Clone, Debug)]
pub struct Hsb {
    rgba: [Float; 4],
    hsb: Memo<[Float; 3]>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsb {
    /// Create a new HSB color from unit-range components.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        Self::with_native([hue, saturation, brightness], alpha)
    }

    /// Create a new HSB color from unit-range components. Out-of-range
    /// values are clamped.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        Self::with_native([hue, saturation, brightness], alpha)
    }

    /// Parse the CSS color and convert it to HSB.
    ///
    /// # Errors
    ///
    /// This function fails with the error of [`parse`](crate::parse).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_css(text: &str) -> Result<Self, ColorError> {
        Ok(crate::core::parse(text)?.to())
    }

    /// Parse the CSS color and convert it to HSB.
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

    /// Get the brightness.
    pub fn brightness(&self) -> Float {
        self.native()[2]
    }

    /// Get the saturation on the 0–255 scale.
    pub fn saturation_int(&self) -> u8 {
        to_byte(self.saturation())
    }

    /// Get the brightness on the 0–255 scale.
    pub fn brightness_int(&self) -> u8 {
        to_byte(self.brightness())
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "hue")]
    pub fn py_hue(&self) -> Float {
        self.hue()
    }

    /// Set hue, saturation, brightness, and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_hsba")]
    pub fn py_set_hsba(&mut self, hue: Float, saturation: Float, brightness: Float, alpha: Float) {
        self.set_hsba(hue, saturation, brightness, alpha);
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

    /// Set the brightness. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_brightness")]
    pub fn py_set_brightness(&mut self, brightness: Float) {
        self.set_brightness(brightness);
    }

    /// Set hue, saturation, and brightness. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "set_hsb")]
    pub fn py_set_hsb(&mut self, hue: Float, saturation: Float, brightness: Float) {
        self.set_hsb(hue, saturation, brightness);
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

impl Hsb {
    fn with_native(hsb: [Float; 3], alpha: Float) -> Self {
        let hsb = [clamp_unit(hsb[0]), clamp_unit(hsb[1]), clamp_unit(hsb[2])];
        let [r, g, b] = hsb_to_rgb(&hsb);
        Self {
            rgba: [r, g, b, clamp_unit(alpha)],
            hsb: Memo::fresh(hsb),
        }
    }

    fn native(&self) -> [Float; 3] {
        self.hsb.get_or_compute(|| rgb_to_hsb(&rgb_of(&self.rgba)))
    }

    fn update_native(&mut self, values: [Value; 3]) -> &mut Self {
        if values.iter().all(Value::is_unchanged) {
            return self;
        }

        let mut hsb = self.native();
        for (component, value) in hsb.iter_mut().zip(values) {
            if let Some(value) = value.limit(false) {
                *component = value;
            }
        }

        let [r, g, b] = hsb_to_rgb(&hsb);
        self.rgba[..3].copy_from_slice(&[r, g, b]);
        self.hsb.set(hsb);
        self
    }

    /// Create a new HSB color from three or four values.
    ///
    /// # Errors
    ///
    /// This function fails with [`ColorError::InvalidArguments`] if there are
    /// fewer than three or more than four values.
    pub fn from_values(values: &[Value]) -> Result<Self, ColorError> {
        let alpha = match values.len() {
            3 => Value::Float(1.0),
            4 => values[3],
            n => {
                return Err(ColorError::InvalidArguments(format!(
                    "{} values for HSBA",
                    n
                )));
            }
        };

        let mut color = Self::with_native([0.0; 3], 0.0);
        color.set_hsba(values[0], values[1], values[2], alpha);
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

    /// Set the brightness.
    pub fn set_brightness(&mut self, brightness: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        self.update_native([U, U, brightness.into()])
    }

    /// Set hue, saturation, and brightness without touching alpha.
    pub fn set_hsb(
        &mut self,
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        brightness: impl Into<Value>,
    ) -> &mut Self {
        self.update_native([hue.into(), saturation.into(), brightness.into()])
    }

    /// Set hue, saturation, brightness, and alpha.
    pub fn set_hsba(
        &mut self,
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        brightness: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> &mut Self {
        if let Some(alpha) = alpha.into().limit(true) {
            self.rgba[3] = alpha;
        }
        self.set_hsb(hue, saturation, brightness)
    }
}

impl Default for Hsb {
    /// Create opaque black.
    fn default() -> Self {
        Self::with_native([0.0; 3], 1.0)
    }
}

impl Color for Hsb {
    fn from_rgba(rgba: [Float; 4]) -> Self {
        Self {
            rgba: clamp_rgba(rgba),
            hsb: Memo::stale(),
        }
    }

    #[inline]
    fn rgba(&self) -> [Float; 4] {
        self.rgba
    }

    fn replace_rgba(&mut self, rgba: [Float; 4]) {
        self.rgba = clamp_rgba(rgba);
        self.hsb.invalidate();
    }

    fn hue(&self) -> Float {
        self.native()[0]
    }
}

impl std::hash::Hash for Hsb {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.rgba).hash(state);
    }
}

impl PartialEq for Hsb {
    fn eq(&self, other: &Self) -> bool {
        to_eq_channels(&self.rgba) == to_eq_channels(&other.rgba)
    }
}

impl Eq for Hsb {}

impl std::fmt::Display for Hsb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let [h, s, b] = self.native();
        f.write_fmt(format_args!(
            "{}, {}, {}",
            format_number(round_to(h * 360.0, precision)),
            as_percent(s, precision),
            as_percent(b, precision)
        ))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Hsb;
    use crate::core::{assert_same_rgba, State};
    use crate::error::ColorError;
    use crate::value::Value;
    use crate::{Color, Rgb};

    #[test]
    fn test_from_values() -> Result<(), ColorError> {
        let color = Hsb::from_values(&[0.into(), Value::Percentage(100.0), 255.into()])?;
        assert_eq!(color.to_css_hex(), "#ff0000");
        assert_eq!(color.saturation_int(), 255);
        assert_eq!(color.brightness_int(), 255);

        let color = Hsb::from_values(&[
            Value::Float(0.5),
            Value::Float(1.0),
            Value::Float(0.5),
            Value::Unchanged,
        ])?;
        assert_same_rgba!(color.rgba(), [0.0, 0.5, 0.5, 0.0], 1e-12);

        assert!(matches!(
            Hsb::from_values(&[]),
            Err(ColorError::InvalidArguments(_))
        ));
        Ok(())
    }

    #[test]
    fn test_native_cache() {
        let mut color = Hsb::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(color.hsb.state(), State::Fresh([0.0, 1.0, 1.0]));

        color.set_blue(1.0);
        assert_eq!(color.hsb.state(), State::Stale);
        assert_eq!(color.to_css_hex(), "#ff00ff");
        assert!((color.hue() - 5.0 / 6.0).abs() < 1e-12);

        color.set_brightness(0.5);
        assert_eq!(color.to_css_hex(), "#7f007f");
        assert_eq!(color.brightness(), 0.5);
    }

    #[test]
    fn test_setters() {
        let mut color = Hsb::default();
        color.set_hsb(0.5, 0.0, 1.0);
        assert_eq!(color.to_css_hex(), "#ffffff");
        color.set_saturation(1.0);
        assert_eq!(color.to_css_hex(), "#00ffff");
        color.set_hue(Value::Unchanged).set_hue(Value::Number(0.0));
        assert_eq!(color.to_css_hex(), "#ff0000");

        color.set_hsba(Value::Unchanged, Value::Unchanged, 0.0, 0.25);
        assert_eq!(color.rgba(), [0.0, 0.0, 0.0, 0.25]);

        color.set_hue_human(0.0).set_brightness(1.0);
        assert_eq!(color.to_css_hex(), "#ff0000");

        let rgb = Rgb::from_24bit(127, 127, 255);
        assert_eq!(rgb.to::<Hsb>().hue(), rgb.hue());
    }

    #[test]
    fn test_display() {
        let color = Hsb::new(0.5, 0.1234, 0.75, 1.0);
        assert_eq!(format!("{}", color), "180, 12.34%, 75%");
        assert_eq!(format!("{:.1}", color), "180, 12.3%, 75%");
    }

    #[test]
    fn test_from_css() -> Result<(), ColorError> {
        let color = Hsb::from_css("hsl(0 100% 25% / 0.5)")?;
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.brightness(), 0.5);
        assert_eq!(color.alpha(), 0.5);

        assert_eq!(Hsb::from_css("#00ffff")?.hue(), 0.5);
        assert_eq!(
            Hsb::from_css("hsb(0 0 0)"),
            Err(ColorError::UnsupportedFunction("hsb".to_string()))
        );
        Ok(())
    }
}
