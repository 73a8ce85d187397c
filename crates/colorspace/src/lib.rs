//! # colorspace
//!
//! Colorspace represents colors in the RGB, HSL, HSB, and CMYK models,
//! converts between them, reads and writes CSS color syntax, and performs
//! color arithmetic.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. With the `pyffi` feature enabled, the crate also builds a Python
extension module."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Items that are only available in Python are decorated with <i
class=python-only>Python only!</i>."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorspace's main abstractions are:
//!
//!   * The [`Color`] trait defines the **shared operations**: channel access,
//!     blending, stepping, posterization, hue and gray level, as well as
//!     hexadecimal formatting. Every color keeps a canonical RGBA
//!     representation with all channels in unit range.
//!   * [`Rgb`], [`Hsl`], [`Hsb`], and [`Cmyk`] implement the **color
//!     models**. All but RGB also keep their native components, which they
//!     recompute lazily after an update to RGBA.
//!   * [`parse`] and [`AnyColor`] implement **CSS color syntax**, covering
//!     named colors, hashed hexadecimal, as well as the `rgb()`, `rgba()`,
//!     `hsl()`, `hsla()`, and `device-cmyk()` functions in legacy and modern
//!     syntax. [`parse_with`] accepts further [`ColorFunction`]s.
//!   * [`Value`] and [`limit`] **normalize component inputs**, whether they
//!     are floats, integers on the 0–255 scale, numeric text, percentages,
//!     or `none`.
//!   * [`hue_to_human`] and [`human_to_hue`] map between raw hue and **hue as
//!     perceived by humans**.
//!
//!
//! ## 2. Parsing and Formatting
//!
//! ```
//! # use colorspace::{parse, Color, ColorError, Hsl};
//! let mut color = parse("rgb(32 12.6% 32)")?;
//! assert_eq!(color.to_css(true), "rgb(32, 32, 32)");
//!
//! color.set_alpha(0.2);
//! assert_eq!(color.to_css(false), "rgba(32 32 32 / 0.2)");
//!
//! let hsl: Hsl = parse("#202020")?.to();
//! assert_eq!(hsl.lightness(), 32.0 / 255.0);
//! assert_eq!(hsl.to_css(false), "hsl(0 0% 12.55%)");
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! Colorspace supports two feature flags:
//!
//!   - `f64` selects the eponymous type as floating point type [`Float`] and
//!     `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as [`Bits`].
//!     This feature is enabled by default.
//!   - `pyffi` enables the Python bindings through [PyO3](https://pyo3.rs).
//!     This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod hue;
mod model;
mod value;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{parse, parse_with, ColorFunction};
pub use error::ColorError;
pub use hue::{hue_to_human, human_to_hue};
pub use model::{rgba_to_int, AnyColor, Cmyk, Color, Hsb, Hsl, Rgb};
pub use value::{as_percent, limit, Value};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorspace(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Rgb>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Hsb>()?;
    m.add_class::<Cmyk>()?;
    m.add_function(wrap_pyfunction!(py_hue_to_human, m)?)?;
    m.add_function(wrap_pyfunction!(py_human_to_hue, m)?)?;
    Ok(())
}

/// Convert raw hue into human hue.
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "hue_to_human")]
pub fn py_hue_to_human(hue: Float) -> Float {
    hue_to_human(hue)
}

/// Convert human hue back into raw hue.
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "human_to_hue")]
pub fn py_human_to_hue(human: Float) -> Float {
    human_to_hue(human)
}
