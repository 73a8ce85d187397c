use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Clamp the value into unit range.
///
/// Not-a-number becomes zero, so that no out-of-range value is ever stored.
#[inline]
pub(crate) fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round the value to the given number of places after the decimal.
///
/// Rounding goes half away from zero. Before rounding, the scaled value is
/// reduced to the significant digits the floating point type can represent.
/// That way, `0.10005` rounds to `0.1001` even though its binary
/// representation is a hair smaller.
pub(crate) fn round_to(value: Float, places: usize) -> Float {
    let factor = (10.0 as Float).powi(places as i32);
    let scaled = value * factor;
    let scaled = format!("{:.*e}", Float::DIGITS as usize - 1, scaled)
        .parse::<Float>()
        .unwrap_or(scaled);

    // Adding zero turns negative zero into positive zero.
    scaled.round() / factor + 0.0
}

/// Format the number without trailing zeros.
///
/// Integral values have no decimal point at all, e.g., `180` and not `180.0`.
#[inline]
pub(crate) fn format_number(value: Float) -> String {
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod test {
    use super::{clamp_unit, format_number, round_to};
    use crate::Float;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(4.0), 1.0);
        assert_eq!(clamp_unit(Float::NAN), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(10.049, 2), 10.05);
        assert_eq!(round_to(12.5, 0), 13.0);
        assert_eq!(round_to(-12.5, 0), -13.0);
        assert_eq!(format_number(round_to(-0.0001, 2)), "0");
        assert_eq!(format_number(round_to(0.2, 4)), "0.2");
        assert_eq!(format_number(180.0), "180");
    }
}
