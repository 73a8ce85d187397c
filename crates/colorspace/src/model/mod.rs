//! The color models and the operations they share.

mod any;
mod cmyk;
mod hsb;
mod hsl;
mod rgb;

pub use any::AnyColor;
pub use cmyk::Cmyk;
pub use hsb::Hsb;
pub use hsl::Hsl;
pub use rgb::Rgb;

use crate::core::{clamp_unit, decode_hex, find_named, rgb_to_hue, unpack_argb};
use crate::error::ColorError;
use crate::hue::hue_to_human;
use crate::value::Value;
use crate::Float;

/// Convert a unit-range value to the 0–255 scale with rounding.
#[inline]
pub(crate) fn to_byte(value: Float) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

/// Convert a unit-range value to the 0–255 scale with truncation.
#[inline]
fn to_truncated_byte(value: Float) -> u8 {
    (clamp_unit(value) * 255.0) as u8
}

/// Clamp all four channels into unit range.
#[inline]
pub(crate) fn clamp_rgba(rgba: [Float; 4]) -> [Float; 4] {
    [
        clamp_unit(rgba[0]),
        clamp_unit(rgba[1]),
        clamp_unit(rgba[2]),
        clamp_unit(rgba[3]),
    ]
}

/// Extract the RGB channels.
#[inline]
pub(crate) fn rgb_of(rgba: &[Float; 4]) -> [Float; 3] {
    [rgba[0], rgba[1], rgba[2]]
}

/// Write the given values into the color's RGBA channels. The last value is
/// alpha. Unchanged values are skipped and, if all are unchanged, the color is
/// left alone entirely.
fn update_rgba<C: Color>(color: &mut C, values: [Value; 4]) -> &mut C {
    if values.iter().all(Value::is_unchanged) {
        return color;
    }

    let mut rgba = color.rgba();
    for (index, value) in values.iter().enumerate() {
        if let Some(value) = value.limit(index == 3) {
            rgba[index] = value;
        }
    }

    color.replace_rgba(rgba);
    color
}

/// Pack the unit-range channels into a `0xAARRGGBB` integer.
///
/// Each channel is rounded to the 0–255 scale.
///
/// # Examples
///
/// ```
/// # use colorspace::rgba_to_int;
/// assert_eq!(rgba_to_int(1.0, 0.5, 0.0, 1.0), 0xff_ff8000);
/// ```
pub fn rgba_to_int(red: Float, green: Float, blue: Float, alpha: Float) -> u32 {
    ((to_byte(alpha) as u32) << 24)
        | ((to_byte(red) as u32) << 16)
        | ((to_byte(green) as u32) << 8)
        | to_byte(blue) as u32
}

// ====================================================================================================================

/// The operations common to all color models.
///
/// Every color has a canonical RGBA representation with all four channels in
/// unit range. Implementations only need to provide access to that
/// representation. All other operations are defined in terms of it.
///
/// Setters that update RGBA invalidate a model's native components, which are
/// recomputed on their next read. Setters accept anything convertible into a
/// [`Value`], and skip [`Value::Unchanged`].
///
/// # Examples
///
/// ```
/// # use colorspace::{Color, ColorError, Rgb};
/// let mut color = Rgb::default();
/// color.set_hex("#401f10")?.set_alpha(0.5);
/// assert_eq!(color.hex(false), "401f10");
/// assert_eq!(color.red_int(), 64);
/// # Ok::<(), ColorError>(())
/// ```
pub trait Color: Sized {
    /// Create a new color from RGBA channels, clamping them into unit range.
    fn from_rgba(rgba: [Float; 4]) -> Self;

    /// Get the RGBA channels.
    fn rgba(&self) -> [Float; 4];

    /// Replace the RGBA channels, clamping them into unit range. This method
    /// marks any native components as stale.
    fn replace_rgba(&mut self, rgba: [Float; 4]);

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red channel.
    fn red(&self) -> Float {
        self.rgba()[0]
    }

    /// Get the green channel.
    fn green(&self) -> Float {
        self.rgba()[1]
    }

    /// Get the blue channel.
    fn blue(&self) -> Float {
        self.rgba()[2]
    }

    /// Get the alpha channel.
    fn alpha(&self) -> Float {
        self.rgba()[3]
    }

    /// Get the red channel on the 0–255 scale.
    fn red_int(&self) -> u8 {
        to_byte(self.red())
    }

    /// Get the green channel on the 0–255 scale.
    fn green_int(&self) -> u8 {
        to_byte(self.green())
    }

    /// Get the blue channel on the 0–255 scale.
    fn blue_int(&self) -> u8 {
        to_byte(self.blue())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Set the red channel.
    fn set_red(&mut self, red: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        update_rgba(self, [red.into(), U, U, U])
    }

    /// Set the green channel.
    fn set_green(&mut self, green: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        update_rgba(self, [U, green.into(), U, U])
    }

    /// Set the blue channel.
    fn set_blue(&mut self, blue: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        update_rgba(self, [U, U, blue.into(), U])
    }

    /// Set the alpha channel. Bare numbers are on the unit scale.
    fn set_alpha(&mut self, alpha: impl Into<Value>) -> &mut Self {
        use Value::Unchanged as U;
        update_rgba(self, [U, U, U, alpha.into()])
    }

    /// Set the red, green, and blue channels to the same gray level.
    fn set_gray(&mut self, level: impl Into<Value>) -> &mut Self {
        let level = level.into();
        update_rgba(self, [level, level, level, Value::Unchanged])
    }

    /// Set the red, green, and blue channels without touching alpha.
    fn set_rgb(
        &mut self,
        red: impl Into<Value>,
        green: impl Into<Value>,
        blue: impl Into<Value>,
    ) -> &mut Self {
        update_rgba(
            self,
            [red.into(), green.into(), blue.into(), Value::Unchanged],
        )
    }

    /// Set all four channels.
    fn set_rgba(
        &mut self,
        red: impl Into<Value>,
        green: impl Into<Value>,
        blue: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> &mut Self {
        update_rgba(self, [red.into(), green.into(), blue.into(), alpha.into()])
    }

    /// Set all four channels from a `0xAARRGGBB` integer.
    fn set_rgba_int(&mut self, argb: u32) -> &mut Self {
        self.replace_rgba(unpack_argb(argb));
        self
    }

    /// Set the red, green, and blue channels from hexadecimal text.
    ///
    /// All characters that are not hexadecimal digits are ignored, so `#fa0`,
    /// `fa0`, and `#ffaa00` are equivalent. The remaining digits must number
    /// three or six. Alpha is not touched.
    fn set_hex(&mut self, hex: &str) -> Result<&mut Self, ColorError> {
        let digits: String = hex.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let [r, g, b] =
            decode_hex(&digits).ok_or_else(|| ColorError::UnparseableColor(hex.to_string()))?;
        Ok(self.set_rgb(r, g, b))
    }

    /// Set all four channels to the named color, including its alpha.
    fn set_named_color(&mut self, name: &str) -> Result<&mut Self, ColorError> {
        let argb = find_named(&name.trim().to_ascii_lowercase())
            .ok_or_else(|| ColorError::UnknownNamedColor(name.to_string()))?;
        Ok(self.set_rgba_int(argb))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Add the other color's channels to this color's, clamping each sum.
    fn add(&mut self, delta: &impl Color) -> &mut Self {
        let mut rgba = self.rgba();
        for (channel, addend) in rgba.iter_mut().zip(delta.rgba()) {
            *channel += addend;
        }

        self.replace_rgba(rgba);
        self
    }

    /// Blend this color with another.
    ///
    /// The absolute value of the ratio, clamped to unit range, determines how
    /// far to move towards the mix color. Without alpha blending, the mix
    /// color's opacity further scales the ratio and this color's alpha is
    /// retained. With alpha blending, alpha is interpolated just like the
    /// other channels.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorspace::{Color, Rgb};
    /// let black = Rgb::new(0.0, 0.0, 0.0, 1.0);
    /// let white = Rgb::new(1.0, 1.0, 1.0, 0.5);
    /// assert_eq!(black.blend(&white, 0.5, false).red(), 0.25);
    /// assert_eq!(black.blend(&white, 0.5, true).alpha(), 0.75);
    /// ```
    fn blend(&self, mix: &impl Color, ratio: Float, blend_alpha: bool) -> Self {
        let [r1, g1, b1, a1] = self.rgba();
        let [r2, g2, b2, a2] = mix.rgba();

        let mut ratio = clamp_unit(ratio.abs());
        let ratio_alpha = if blend_alpha {
            ratio
        } else {
            ratio *= 1.0 - a2;
            0.0
        };

        Self::from_rgba([
            r1 + ratio * (r2 - r1),
            g1 + ratio * (g2 - g1),
            b1 + ratio * (b2 - b1),
            a1 + ratio_alpha * (a2 - a1),
        ])
    }

    /// Compute the per-step difference for moving from this color to the
    /// other in the given number of steps.
    ///
    /// The result is a color and hence clamped, so only channels that grow
    /// have a nonzero delta. Zero steps are treated as one.
    fn delta(&self, other: &impl Color, steps: usize) -> Self {
        let steps = steps.max(1) as Float;
        let this = self.rgba();
        let other = other.rgba();

        Self::from_rgba([
            (other[0] - this[0]) / steps,
            (other[1] - this[1]) / steps,
            (other[2] - this[2]) / steps,
            (other[3] - this[3]) / steps,
        ])
    }

    /// Posterize this color.
    ///
    /// A quantum larger than one is the number of bands, rounded. A quantum
    /// between zero (exclusive) and one (inclusive) is the band width, with
    /// the number of bands `round(1/quantum)`. A single band turns every color
    /// into mid-gray. Alpha is retained.
    ///
    /// # Errors
    ///
    /// This method fails with [`ColorError::InvalidQuantum`] if the quantum is
    /// zero, negative, or not-a-number.
    fn posterize(&self, quantum: Float) -> Result<Self, ColorError> {
        let bands = if quantum > 1.0 {
            quantum.round()
        } else if quantum > 0.0 {
            (1.0 / quantum).round()
        } else {
            return Err(ColorError::InvalidQuantum(quantum));
        };

        let [r, g, b, a] = self.rgba();
        if bands == 1.0 {
            return Ok(Self::from_rgba([0.5, 0.5, 0.5, a]));
        }

        let band = |c: Float| (bands * c).floor() / (bands - 1.0);
        Ok(Self::from_rgba([band(r), band(g), band(b), a]))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the hue in unit range.
    fn hue(&self) -> Float {
        rgb_to_hue(&rgb_of(&self.rgba()))
    }

    /// Get the hue as perceived by humans.
    fn hue_human(&self) -> Float {
        hue_to_human(self.hue())
    }

    /// Get the luma of this color, i.e., the Y in YIQ.
    fn gray(&self) -> Float {
        let [r, g, b, _] = self.rgba();
        0.30 * r + 0.59 * g + 0.11 * b
    }

    /// Determine the perceived distance between the hues of this and the
    /// other color.
    ///
    /// The distance has unit range. Since hue is circular, the distance is
    /// largest for opposite hues.
    fn hue_distance(&self, other: &impl Color) -> Float {
        let distance = 2.0 * (self.hue_human() - other.hue_human()).abs();
        if distance > 1.0 {
            2.0 - distance
        } else {
            distance
        }
    }

    /// Pack this color into a `0xAARRGGBB` integer. Without alpha, the alpha
    /// byte is zero.
    fn rgba_int(&self, with_alpha: bool) -> u32 {
        let [r, g, b, a] = self.rgba();
        rgba_to_int(r, g, b, if with_alpha { a } else { 0.0 })
    }

    /// Add this color's weighted channels to the running sum.
    fn running_sum(&self, sum: &mut [Float; 4], weight: Float) -> &Self {
        for (total, channel) in sum.iter_mut().zip(self.rgba()) {
            *total += weight * channel;
        }
        self
    }

    /// Format this color as lowercase hexadecimal digits without leading
    /// hash. Channels are truncated to the 0–255 scale.
    fn hex(&self, with_alpha: bool) -> String {
        let [r, g, b, a] = self.rgba();
        let mut hex = format!(
            "{:02x}{:02x}{:02x}",
            to_truncated_byte(r),
            to_truncated_byte(g),
            to_truncated_byte(b)
        );
        if with_alpha {
            hex.push_str(&format!("{:02x}", to_truncated_byte(a)));
        }
        hex
    }

    /// Format this color in CSS hashed hexadecimal notation.
    fn to_css_hex(&self) -> String {
        format!("#{}", self.hex(false))
    }

    /// Convert this color to another model.
    fn to<C: Color>(&self) -> C {
        C::from_rgba(self.rgba())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{rgba_to_int, Color, Rgb};
    use crate::core::assert_same_rgba;
    use crate::error::ColorError;
    use crate::value::Value;
    use crate::{assert_close_enough, Float};

    fn rgb(r: i32, g: i32, b: i32, a: Float) -> Rgb {
        let mut color = Rgb::default();
        color.set_rgba(r, g, b, a);
        color
    }

    #[test]
    fn test_channels() {
        let mut color = Rgb::default();
        assert_eq!(color.rgba(), [0.0, 0.0, 0.0, 1.0]);

        color.set_red(255).set_green(0.5).set_blue(Value::Percentage(25.0));
        assert_eq!(color.rgba(), [1.0, 0.5, 0.25, 1.0]);
        assert_eq!(color.red_int(), 255);
        assert_eq!(color.green_int(), 128);
        assert_eq!(color.blue_int(), 64);

        color.set_rgb(Value::Unchanged, 0, Value::Unchanged);
        assert_eq!(color.rgba(), [1.0, 0.0, 0.25, 1.0]);

        color.set_alpha(Value::Number(0.4)).set_gray(Value::Number(51.0));
        assert_same_rgba!(color.rgba(), [0.2, 0.2, 0.2, 0.4], 1e-12);

        color.set_alpha(Value::Unchanged).set_red(-3.0);
        assert_same_rgba!(color.rgba(), [0.0, 0.2, 0.2, 0.4], 1e-12);
    }

    #[test]
    fn test_hex() -> Result<(), ColorError> {
        let color = rgb(64, 31, 16, 0.505);
        assert_eq!(color.hex(false), "401f10");
        assert_eq!(color.hex(true), "401f1080");
        assert_eq!(color.to_css_hex(), "#401f10");

        let mut color = Rgb::default();
        color.set_alpha(0.5).set_hex("#FA0")?;
        assert_eq!(color.hex(true), "ffaa007f");
        color.set_hex(" 12-34-56 ")?;
        assert_eq!(color.to_css_hex(), "#123456");

        assert_eq!(
            color.set_hex("#12345"),
            Err(ColorError::UnparseableColor("#12345".to_string()))
        );
        assert_eq!(color.to_css_hex(), "#123456");
        Ok(())
    }

    #[test]
    fn test_named_and_int() -> Result<(), ColorError> {
        let mut color = Rgb::default();
        color.set_named_color("SpringGreen")?;
        assert_eq!(color.to_css_hex(), "#00ff7f");
        assert_eq!(color.rgba_int(true), 0xff_00ff7f);
        assert_eq!(color.rgba_int(false), 0x00_00ff7f);

        color.set_named_color("clear")?;
        assert_eq!(color.rgba_int(true) >> 24, 0x7f);

        assert_eq!(
            color.set_named_color("octarine"),
            Err(ColorError::UnknownNamedColor("octarine".to_string()))
        );
        assert_eq!(color.rgba_int(true), 0x7f_000000);

        color.set_rgba_int(0x80_102030);
        assert_eq!(color.hex(true), "10203080");
        assert_eq!(rgba_to_int(0.0, 0.0, 0.0, 0.0), 0);
        assert_eq!(rgba_to_int(0.5, 0.5, 0.5, 1.0), 0xff_808080);
        assert_eq!(rgba_to_int(0.5, 0.5, 0.5, 0.5), 0x80_808080);
        assert_eq!(rgba_to_int(0.0, 0.0, 0.0, 1.0), 0xff_000000);
        assert_eq!(Rgb::default().rgba_int(true), 0xff_000000);
        Ok(())
    }

    #[test]
    fn test_hue_and_gray() {
        let color = rgb(64, 31, 16, 1.0);
        assert!((color.hue() - 0.0520833333).abs() < 1e-10);

        let gray = rgb(40, 40, 40, 1.0);
        assert!((gray.gray() - 0.1568627451).abs() < 1e-10);
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.hue_human(), 0.0);

        let red = Rgb::new(1.0, 0.0, 0.0, 1.0);
        let cyan = Rgb::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(red.hue_distance(&red), 0.0);
        let distance = red.hue_distance(&cyan);
        assert!(0.0 < distance && distance <= 1.0);
        assert_close_enough!(distance, cyan.hue_distance(&red));
    }

    #[test]
    fn test_add_and_running_sum() {
        let mut color = Rgb::new(0.5, 0.5, 0.5, 0.5);
        color.add(&Rgb::new(0.25, 0.75, 0.0, 0.25));
        assert_eq!(color.rgba(), [0.75, 1.0, 0.5, 0.75]);

        let mut sum = [0.0; 4];
        color.running_sum(&mut sum, 2.0).running_sum(&mut sum, 1.0);
        assert_eq!(sum, [2.25, 3.0, 1.5, 2.25]);
    }

    #[test]
    fn test_blend() {
        let black = Rgb::new(0.0, 0.0, 0.0, 1.0);
        let white = Rgb::new(1.0, 1.0, 1.0, 1.0);

        // An opaque mix color has no effect without alpha blending.
        assert_eq!(black.blend(&white, 0.5, false), black);
        assert_eq!(
            black.blend(&white, -0.5, true).rgba(),
            [0.5, 0.5, 0.5, 1.0]
        );
        assert_eq!(black.blend(&white, 7.0, true), white);

        let ghost = Rgb::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(
            black.blend(&ghost, 0.5, false).rgba(),
            [0.25, 0.25, 0.25, 1.0]
        );
    }

    #[test]
    fn test_delta() {
        let black = Rgb::new(0.0, 0.0, 0.0, 1.0);
        let white = Rgb::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(black.delta(&white, 4).rgba(), [0.25, 0.25, 0.25, 0.0]);
        assert_eq!(white.delta(&black, 4).rgba(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(black.delta(&white, 0).rgba(), [1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_posterize() -> Result<(), ColorError> {
        let color = Rgb::new(0.5, 1.0, 0.1, 0.3);
        assert_eq!(color.posterize(1.0)?.rgba(), [0.5, 0.5, 0.5, 0.3]);

        let expected = [2.0 / 3.0, 1.0, 0.0, 0.3];
        assert_same_rgba!(color.posterize(4.0)?.rgba(), expected, 1e-12);
        assert_same_rgba!(color.posterize(0.25)?.rgba(), expected, 1e-12);
        assert_same_rgba!(color.posterize(4.4)?.rgba(), expected, 1e-12);

        assert_eq!(color.posterize(0.0), Err(ColorError::InvalidQuantum(0.0)));
        assert_eq!(color.posterize(-1.0), Err(ColorError::InvalidQuantum(-1.0)));
        assert!(color.posterize(Float::NAN).is_err());
        Ok(())
    }
}
