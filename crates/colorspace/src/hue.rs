//! Perceptual hue.
//!
//! Humans do not perceive hue differences uniformly. Around yellow and cyan,
//! small changes in hue are readily noticeable, whereas reds and blues
//! differ much less visibly for the same change. The functions in this module
//! remap hue with a piecewise linear table so that equal steps along the
//! remapped, human hue look roughly equally different.

use std::sync::OnceLock;

use crate::core::clamp_unit;
use crate::Float;

/// Sensitivity to hue changes, sampled every 10nm from 400nm (magenta) to
/// 660nm (red). Larger numbers mean less noticeable differences.
const SENSITIVITY: [Float; 27] = [
    9.0, 5.5, 2.0, 2.0, 4.0, 4.0, 3.0, 1.2, 0.9, 1.1, 2.0, 3.0, 3.6, 3.8, 3.9, 1.0, 0.8, 0.8, 1.0,
    1.7, 1.9, 2.4, 3.1, 4.3, 6.0, 8.0, 11.0,
];

const BREAKPOINTS: usize = SENSITIVITY.len() + 1;

static HUE_TABLE: OnceLock<[(Float, Float); BREAKPOINTS]> = OnceLock::new();

/// Build the table of `(raw, human)` breakpoints.
///
/// Raw hue advances in even steps, starting at red and walking the
/// sensitivity table backwards. Human hue advances by the inverse of the
/// sensitivity and is normalized to the unit range.
fn build_hue_table() -> [(Float, Float); BREAKPOINTS] {
    let step = 1.0 / BREAKPOINTS as Float;
    let mut table = [(1.0, 1.0); BREAKPOINTS];

    let mut total = 0.0;
    for (index, weight) in SENSITIVITY.iter().rev().enumerate() {
        table[index] = (step * index as Float, total);
        total += 1.0 / weight;
    }

    for entry in table.iter_mut().take(SENSITIVITY.len()) {
        entry.1 /= total;
    }

    table
}

#[inline]
fn hue_table() -> &'static [(Float, Float); BREAKPOINTS] {
    HUE_TABLE.get_or_init(build_hue_table)
}

/// Linearly interpolate within the first segment whose end, as selected by
/// `key`, is at least the value.
fn interpolate(value: Float, key: impl Fn(&(Float, Float)) -> (Float, Float)) -> Float {
    let value = clamp_unit(value);
    if value == 0.0 {
        return 0.0;
    }

    let table = hue_table();
    for index in 1..table.len() {
        let (end_in, end_out) = key(&table[index]);
        if value == end_in {
            return end_out;
        } else if value < end_in {
            let (start_in, start_out) = key(&table[index - 1]);
            return start_out + (value - start_in) / (end_in - start_in) * (end_out - start_out);
        }
    }

    // Unreachable since the table ends with (1, 1).
    1.0
}

/// Convert raw hue into human hue.
///
/// Both hues have unit range. The input is clamped.
///
/// # Examples
///
/// ```
/// # use colorspace::{hue_to_human, human_to_hue};
/// assert_eq!(hue_to_human(0.0), 0.0);
/// assert_eq!(hue_to_human(1.0), 1.0);
/// let human = hue_to_human(0.3);
/// assert!((human_to_hue(human) - 0.3).abs() < 1e-9);
/// ```
pub fn hue_to_human(hue: Float) -> Float {
    interpolate(hue, |&(raw, human)| (raw, human))
}

/// Convert human hue back into raw hue.
///
/// This is the inverse of [`hue_to_human`]. The input is clamped.
pub fn human_to_hue(human: Float) -> Float {
    interpolate(human, |&(raw, human)| (human, raw))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hue_table, hue_to_human, human_to_hue, BREAKPOINTS, SENSITIVITY};
    use crate::Float;

    #[test]
    fn test_table() {
        let table = hue_table();
        assert_eq!(table.len(), 28);
        assert_eq!(table[0], (0.0, 0.0));
        assert_eq!(table[BREAKPOINTS - 1], (1.0, 1.0));

        for pair in table.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }

        // The first segment covers red, which has the lowest sensitivity.
        let total: Float = SENSITIVITY.iter().map(|w| 1.0 / w).sum();
        assert!((table[1].1 - 1.0 / 11.0 / total).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for step in 0..=100 {
            let hue = step as Float / 100.0;
            let human = hue_to_human(hue);
            assert!((0.0..=1.0).contains(&human));
            assert!((human_to_hue(human) - hue).abs() < 1e-9, "hue {}", hue);
        }
    }

    #[test]
    fn test_monotonic_and_clamped() {
        let mut previous = 0.0;
        for step in 1..=200 {
            let human = hue_to_human(step as Float / 200.0);
            assert!(previous < human);
            previous = human;
        }

        assert_eq!(hue_to_human(-0.5), 0.0);
        assert_eq!(hue_to_human(1.5), 1.0);
        assert_eq!(human_to_hue(-1.0), 0.0);
        assert_eq!(human_to_hue(2.0), 1.0);
    }
}
