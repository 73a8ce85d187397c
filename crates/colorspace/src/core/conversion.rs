use super::clamp_unit;
use crate::Float;

/// Determine the largest and smallest of the three channels.
#[inline]
fn max_min(rgb: &[Float; 3]) -> (Float, Float) {
    let [r, g, b] = *rgb;
    (r.max(g).max(b), r.min(g).min(b))
}

/// Clamp all three channels into unit range.
#[inline]
fn clamp_rgb(rgb: [Float; 3]) -> [Float; 3] {
    [clamp_unit(rgb[0]), clamp_unit(rgb[1]), clamp_unit(rgb[2])]
}

/// Split the hue into its 60º sector `0..=5` and the position within that
/// sector. A hue of exactly one wraps around to sector zero.
#[inline]
fn to_sector(hue: Float) -> (usize, Float) {
    let h = hue * 6.0;
    let sector = h.floor();
    ((sector as usize) % 6, h - sector)
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue of the RGB channels.
///
/// The hue has unit range `0..1`. It is zero for achromatic colors. A hue that
/// works out to be exactly one is collapsed to zero as well.
pub(crate) fn rgb_to_hue(rgb: &[Float; 3]) -> Float {
    let [r, g, b] = *rgb;
    let (max, min) = max_min(rgb);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };
    if saturation == 0.0 {
        return 0.0;
    }

    let delta = max - min;
    let mut hue = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue == 1.0 {
        hue = 0.0;
    }
    hue
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB channels to hue, saturation, and lightness.
pub(crate) fn rgb_to_hsl(rgb: &[Float; 3]) -> [Float; 3] {
    let (max, min) = max_min(rgb);
    let lightness = (max + min) / 2.0;
    let denominator = 1.0 - (min + max - 1.0).abs();
    let saturation = if denominator > 0.0 {
        (max - min) / denominator
    } else {
        0.0
    };

    let hue = rgb_to_hue(rgb);
    [hue, clamp_unit(saturation), clamp_unit(lightness)]
}

/// Convert hue, saturation, and lightness to RGB channels.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *hsl;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - ((hue * 6.0).rem_euclid(2.0) - 1.0).abs());
    let mid = lightness - chroma / 2.0;

    let (sector, _) = to_sector(hue);
    let [r, g, b] = match sector {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    clamp_rgb([r + mid, g + mid, b + mid])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB channels to hue, saturation, and brightness.
pub(crate) fn rgb_to_hsb(rgb: &[Float; 3]) -> [Float; 3] {
    let (max, min) = max_min(rgb);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };

    [rgb_to_hue(rgb), saturation, max]
}

/// Convert hue, saturation, and brightness to RGB channels.
pub(crate) fn hsb_to_rgb(hsb: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, brightness] = *hsb;
    if saturation == 0.0 {
        return [brightness, brightness, brightness];
    }

    let (sector, pos) = to_sector(hue);
    let c1 = brightness * (1.0 - saturation);
    let c2 = brightness * (1.0 - saturation * pos);
    let c3 = brightness * (1.0 - saturation * (1.0 - pos));

    clamp_rgb(match sector {
        0 => [brightness, c3, c1],
        1 => [c2, brightness, c1],
        2 => [c1, brightness, c3],
        3 => [c1, c2, brightness],
        4 => [c3, c1, brightness],
        _ => [brightness, c1, c2],
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB channels to cyan, magenta, yellow, and black.
///
/// Black is computed first. Pure black has no cyan, magenta, or yellow.
pub(crate) fn rgb_to_cmyk(rgb: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *rgb;
    let (max, _) = max_min(rgb);
    let black = 1.0 - max;
    if black == 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let divisor = 1.0 - black;
    [
        clamp_unit((1.0 - r - black) / divisor),
        clamp_unit((1.0 - g - black) / divisor),
        clamp_unit((1.0 - b - black) / divisor),
        black,
    ]
}

/// Convert cyan, magenta, yellow, and black to RGB channels.
pub(crate) fn cmyk_to_rgb(cmyk: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *cmyk;

    #[inline]
    fn convert(ink: Float, black: Float) -> Float {
        1.0 - ink.mul_add(1.0 - black, black).min(1.0)
    }

    [convert(c, k), convert(m, k), convert(y, k)]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        cmyk_to_rgb, hsb_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsb, rgb_to_hsl, rgb_to_hue,
    };
    use crate::Float;

    const TOLERANCE: Float = 1e-6;

    fn samples() -> Vec<[Float; 3]> {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.6, 0.75, 0.9, 1.0];
        let mut result = Vec::new();
        for r in steps {
            for g in steps {
                for b in steps {
                    result.push([r, g, b]);
                }
            }
        }
        result
    }

    fn assert_rgb(actual: [Float; 3], expected: [Float; 3]) {
        for index in 0..3 {
            assert!(
                (actual[index] - expected[index]).abs() <= TOLERANCE,
                "channels differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_hue() {
        assert_eq!(rgb_to_hue(&[0.5, 0.5, 0.5]), 0.0);
        assert_eq!(rgb_to_hue(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(rgb_to_hue(&[1.0, 0.0, 0.0]), 0.0);
        let green = rgb_to_hue(&[0.0, 1.0, 0.0]);
        let blue = rgb_to_hue(&[0.0, 0.0, 1.0]);
        assert_rgb([green, blue, 0.0], [1.0 / 3.0, 2.0 / 3.0, 0.0]);

        // Magenta-ish red wraps around to the top of the unit range.
        let hue = rgb_to_hue(&[1.0, 0.0, 0.1]);
        assert!(0.98 < hue && hue < 1.0);

        // Values taken from 64/31/16 on the 0-255 scale.
        let hue = rgb_to_hue(&[64.0 / 255.0, 31.0 / 255.0, 16.0 / 255.0]);
        assert!((hue - 0.0520833333).abs() < 1e-10);
    }

    #[test]
    fn test_hsl() {
        assert_rgb(rgb_to_hsl(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_rgb(rgb_to_hsl(&[1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_rgb(hsl_to_rgb(&[1.0 / 3.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
        assert_rgb(hsl_to_rgb(&[0.5, 0.0, 0.25]), [0.25, 0.25, 0.25]);

        for rgb in samples() {
            assert_rgb(hsl_to_rgb(&rgb_to_hsl(&rgb)), rgb);
        }
    }

    #[test]
    fn test_hsb() {
        assert_rgb(rgb_to_hsb(&[0.0, 0.0, 0.5]), [2.0 / 3.0, 1.0, 0.5]);
        assert_rgb(hsb_to_rgb(&[0.0, 0.0, 0.4]), [0.4, 0.4, 0.4]);
        assert_rgb(hsb_to_rgb(&[1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);

        for rgb in samples() {
            assert_rgb(hsb_to_rgb(&rgb_to_hsb(&rgb)), rgb);
        }
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_rgb(
            cmyk_to_rgb(&[0.0, 1.0, 1.0, 0.0]),
            [1.0, 0.0, 0.0],
        );
        assert_rgb(cmyk_to_rgb(&[1.0, 1.0, 1.0, 1.0]), [0.0, 0.0, 0.0]);

        let [c, m, y, k] = rgb_to_cmyk(&[0.5, 0.25, 0.0]);
        assert_rgb([c, m, y], [0.0, 0.5, 1.0]);
        assert!((k - 0.5).abs() <= TOLERANCE);

        for rgb in samples() {
            assert_rgb(cmyk_to_rgb(&rgb_to_cmyk(&rgb)), rgb);
        }
    }
}
