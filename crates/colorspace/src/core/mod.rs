mod cache;
mod conversion;
mod equality;
mod math;
mod named;
mod string;

// cache
#[cfg(test)]
pub(crate) use cache::State;
pub(crate) use cache::Memo;

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, hsb_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsb, rgb_to_hsl, rgb_to_hue,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_rgba;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// math
pub(crate) use math::{clamp_unit, format_number, round_to, FloatExt};

// named
pub(crate) use named::{find_named, unpack_argb};

// string
pub(crate) use string::decode_hex;
pub use string::{parse, parse_with, ColorFunction};
