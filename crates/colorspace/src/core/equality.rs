use super::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two RGBA quadruples are within the given
/// tolerance of each other.
///
/// # Panics
///
/// This macro panics if any channel differs by more than the tolerance. Its
/// message places the quadruples below each other for easy comparability.
#[cfg(test)]
macro_rules! assert_same_rgba {
    ($rgba1:expr, $rgba2:expr, $tolerance:expr $(,)?) => {
        let (rgba1, rgba2, tolerance) = ($rgba1, $rgba2, $tolerance);
        for index in 0..4 {
            assert!(
                (rgba1[index] - rgba2[index]).abs() <= tolerance,
                "channels differ:\n{:?}\n{:?}",
                rgba1,
                rgba2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_same_rgba;

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize RGBA channels for equality testing and hashing.
#[must_use = "function returns new channel bits and does not mutate original value"]
pub(crate) fn to_eq_channels(rgba: &[Float; 4]) -> [Bits; 4] {
    [
        to_eq_bits(rgba[0]),
        to_eq_bits(rgba[1]),
        to_eq_bits(rgba[2]),
        to_eq_bits(rgba[3]),
    ]
}
