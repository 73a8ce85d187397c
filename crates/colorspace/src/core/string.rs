use super::named::{find_named, unpack_argb};
use crate::error::ColorError;
use crate::model::{AnyColor, Cmyk, Color, Hsl, Rgb};
use crate::value::Value;

/// Decode three or six hexadecimal digits into 24-bit components. Each digit
/// of the three-digit form is duplicated.
pub(crate) fn decode_hex(digits: &str) -> Option<[u8; 3]> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return None,
    };

    let mut result = [0_u8; 3];
    for (index, component) in result.iter_mut().enumerate() {
        let n = u8::from_str_radix(&digits[index * width..(index + 1) * width], 16).ok()?;
        *component = if width == 1 { 16 * n + n } else { n };
    }
    Some(result)
}

// --------------------------------------------------------------------------------------------------------------------

/// A CSS color function.
///
/// Besides the built-in functions, [`parse_with`] accepts a table of further
/// functions, which lets other color models make their CSS syntax available.
/// Since the parser lowercases its input before matching, names must be
/// lowercase.
#[derive(Clone, Copy)]
pub struct ColorFunction {
    /// The function name.
    pub name: &'static str,
    /// The number of channels before alpha.
    pub channels: usize,
    /// The constructor, which receives the channels followed by alpha.
    pub create: fn(&[Value]) -> Result<AnyColor, ColorError>,
}

impl std::fmt::Debug for ColorFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorFunction")
            .field("name", &self.name)
            .field("channels", &self.channels)
            .finish_non_exhaustive()
    }
}

fn create_rgb(values: &[Value]) -> Result<AnyColor, ColorError> {
    Ok(AnyColor::Rgb(Rgb::from_values(values)?))
}

fn create_hsl(values: &[Value]) -> Result<AnyColor, ColorError> {
    Ok(AnyColor::Hsl(Hsl::from_values(values)?))
}

fn create_cmyk(values: &[Value]) -> Result<AnyColor, ColorError> {
    Ok(AnyColor::Cmyk(Cmyk::from_values(values)?))
}

const FUNCTIONS: [ColorFunction; 5] = [
    ColorFunction {
        name: "rgb",
        channels: 3,
        create: create_rgb,
    },
    ColorFunction {
        name: "rgba",
        channels: 3,
        create: create_rgb,
    },
    ColorFunction {
        name: "hsl",
        channels: 3,
        create: create_hsl,
    },
    ColorFunction {
        name: "hsla",
        channels: 3,
        create: create_hsl,
    },
    ColorFunction {
        name: "device-cmyk",
        channels: 4,
        create: create_cmyk,
    },
];

/// Split the function arguments into values.
///
/// Without commas, arguments use the modern syntax with whitespace between
/// channels and an optional slash before alpha. With commas, they use the
/// legacy syntax and alpha is an optional last argument. In either case,
/// missing alpha is one.
fn parse_arguments(args: &str, channels: usize) -> Result<Vec<Value>, ColorError> {
    let invalid = || ColorError::InvalidArguments(args.trim().to_string());

    let mut values = if args.contains(',') {
        let tokens = args
            .split(',')
            .map(|t| t.split_whitespace().collect::<String>())
            .collect::<Vec<_>>();
        if tokens.len() != channels && tokens.len() != channels + 1 {
            return Err(invalid());
        }

        tokens
            .iter()
            .map(|t| t.parse::<Value>())
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let (body, alpha) = match args.split_once('/') {
            Some((body, alpha)) => (body, Some(alpha)),
            None => (args, None),
        };

        let mut values = body
            .split_whitespace()
            .map(str::parse::<Value>)
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != channels {
            return Err(invalid());
        }

        if let Some(alpha) = alpha {
            let mut tokens = alpha.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(token), None) => values.push(token.parse()?),
                _ => return Err(invalid()),
            }
        }
        values
    };

    if values.len() == channels {
        values.push(Value::Float(1.0));
    }
    Ok(values)
}

/// Parse a color function, returning `None` if the text isn't shaped like
/// one. The extra functions are consulted before the built-in ones.
fn parse_function(s: &str, extra: &[ColorFunction]) -> Option<Result<AnyColor, ColorError>> {
    let (name, rest) = s.split_once('(')?;
    let name = name.trim_end();
    let args = rest.strip_suffix(')')?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
        return None;
    }

    let function = extra
        .iter()
        .chain(FUNCTIONS.iter())
        .find(|function| function.name == name);

    Some(match function {
        None => Err(ColorError::UnsupportedFunction(name.to_string())),
        Some(function) => parse_arguments(args, function.channels)
            .and_then(|values| (function.create)(&values)),
    })
}

/// Parse the string into a color.
///
/// This function recognizes named colors, three and six digit hexadecimal
/// colors with or without leading hash, and the `rgb()`, `rgba()`, `hsl()`,
/// `hsla()`, and `device-cmyk()` functions in legacy as well as modern
/// syntax. Before parsing, it trims leading and trailing white space and
/// converts ASCII letters to lowercase.
///
/// # Examples
///
/// ```
/// # use colorspace::{parse, Color, ColorError};
/// assert_eq!(parse("#202020")?.to_css(true), "rgb(32, 32, 32)");
/// assert_eq!(parse("transparent")?.to_css(false), "rgba(0 0 0 / 0)");
/// assert_eq!(
///     parse("rgb(32,12.6%,32,0.2)")?,
///     parse("rgb(32 12.6% 32 / 0.2)")?
/// );
/// assert!(matches!(parse("lab(50% 0 0)"), Err(ColorError::UnsupportedFunction(_))));
/// # Ok::<(), ColorError>(())
/// ```
pub fn parse(text: &str) -> Result<AnyColor, ColorError> {
    parse_with(text, &[])
}

/// Parse the string into a color, also recognizing the given functions.
///
/// The extra functions take precedence over built-in functions with the
/// same name.
///
/// # Examples
///
/// ```
/// # use colorspace::{parse, parse_with, AnyColor, Color, ColorError, ColorFunction, Hsb, Rgb};
/// let hsb = ColorFunction {
///     name: "hsb",
///     channels: 3,
///     create: |values| Ok(AnyColor::Rgb(Hsb::from_values(values)?.to::<Rgb>())),
/// };
///
/// let color = parse_with("hsb(0 100% 100%)", &[hsb])?;
/// assert_eq!(color.to_css_hex(), "#ff0000");
/// assert!(matches!(parse("hsb(0 100% 100%)"), Err(ColorError::UnsupportedFunction(_))));
/// # Ok::<(), ColorError>(())
/// ```
pub fn parse_with(text: &str, extra: &[ColorFunction]) -> Result<AnyColor, ColorError> {
    let lowercase = text.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    if let Some(argb) = find_named(s) {
        return Ok(AnyColor::Rgb(Rgb::from_rgba(unpack_argb(argb))));
    }

    if let Some([r, g, b]) = decode_hex(s.strip_prefix('#').unwrap_or(s)) {
        return Ok(AnyColor::Rgb(Rgb::from_24bit(r, g, b)));
    }

    parse_function(s, extra)
        .unwrap_or_else(|| Err(ColorError::UnparseableColor(text.to_string())))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{decode_hex, parse, parse_arguments, parse_with, ColorFunction};
    use crate::error::ColorError;
    use crate::model::{AnyColor, Cmyk, Color, Hsb};
    use crate::value::Value;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("123"), Some([0x11_u8, 0x22, 0x33]));
        assert_eq!(decode_hex("112233"), Some([0x11_u8, 0x22, 0x33]));
        assert_eq!(decode_hex("FfA"), Some([0xff_u8, 0xff, 0xaa]));
        assert_eq!(decode_hex("1234"), None);
        assert_eq!(decode_hex("12345g"), None);
        assert_eq!(decode_hex("+12"), None);
        assert_eq!(decode_hex(""), None);
    }

    #[test]
    fn test_parse_arguments() -> Result<(), ColorError> {
        use Value::*;

        assert_eq!(
            parse_arguments(" 1  2%\t3 ", 3)?,
            vec![Number(1.0), Percentage(2.0), Number(3.0), Float(1.0)]
        );
        assert_eq!(
            parse_arguments("1 none 3 / 50%", 3)?,
            vec![Number(1.0), Unchanged, Number(3.0), Percentage(50.0)]
        );
        assert_eq!(
            parse_arguments("1 2 3/0.5", 3)?,
            vec![Number(1.0), Number(2.0), Number(3.0), Number(0.5)]
        );
        assert_eq!(
            parse_arguments(" 1 , 2 %, 3", 3)?,
            vec![Number(1.0), Percentage(2.0), Number(3.0), Float(1.0)]
        );
        assert_eq!(
            parse_arguments("1,2,3,4,0.5", 4)?,
            vec![
                Number(1.0),
                Number(2.0),
                Number(3.0),
                Number(4.0),
                Number(0.5),
            ]
        );

        for args in [
            "1 2",
            "1 2 3 4",
            "1 2 3 /",
            "1 2 3 / 4 5",
            "1, 2",
            "1,2,3,4,5",
        ] {
            assert_eq!(
                parse_arguments(args, 3),
                Err(ColorError::InvalidArguments(args.trim().to_string()))
            );
        }

        assert_eq!(
            parse_arguments("1 x 3", 3),
            Err(ColorError::InvalidValue("x".to_string()))
        );
        assert_eq!(
            parse_arguments("1,,3", 3),
            Err(ColorError::InvalidValue("".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_parse_rgb() -> Result<(), ColorError> {
        for text in [
            "#202020",
            "202020",
            "  #202020\n",
            "rgb(32 32 32)",
            "RGB(32, 32, 32)",
        ] {
            let color = parse(text)?;
            assert!(matches!(color, AnyColor::Rgb(_)));
            assert_eq!(color.to_css(false), "rgb(32 32 32)");
            assert_eq!(color.to_css(true), "rgb(32, 32, 32)");
            assert_eq!(color.to_css_hex(), "#202020");
        }

        let mut color = parse("rgb(32 12.6% 32)")?;
        assert_eq!(color.to_css(false), "rgb(32 32 32)");
        color.set_alpha(0.2);
        assert_eq!(color.to_css(false), "rgba(32 32 32 / 0.2)");
        assert_eq!(color.to_css(true), "rgba(32, 32, 32, 0.2)");

        let legacy = parse("rgb(32,12.6%,32,0.2)")?;
        let modern = parse("rgb(32 12.6% 32 / 0.2)")?;
        assert_eq!(legacy, modern);
        assert_eq!(legacy, color);

        assert_eq!(parse("#fa0")?.to_css_hex(), "#ffaa00");
        assert_eq!(parse("rgba(255 none 0)")?.rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(parse("rgb(0 0 0 / none)")?.alpha(), 0.0);
        Ok(())
    }

    #[test]
    fn test_parse_named() -> Result<(), ColorError> {
        assert_eq!(parse("springgreen")?.to_css_hex(), "#00ff7f");
        assert_eq!(parse(" SpringGreen ")?.to_css_hex(), "#00ff7f");
        assert_eq!(parse("transparent")?.to_css(false), "rgba(0 0 0 / 0)");
        assert_eq!(parse("clear")?.to_css(true), "rgba(0, 0, 0, 0.498)");
        Ok(())
    }

    #[test]
    fn test_parse_hsl_and_cmyk() -> Result<(), ColorError> {
        let mut color = parse("hsl(180, 10%, 25%)")?;
        assert!(matches!(color, AnyColor::Hsl(_)));
        assert_eq!(color.to_css(false), "hsl(180 10% 25%)");
        assert_eq!(color.to_css(true), "hsl(180, 10%, 25%)");

        color.set_alpha(0.2);
        assert_eq!(color.to_css(false), "hsla(180 10% 25% / 0.2)");
        assert_eq!(color.to_css(true), "hsla(180, 10%, 25%, 0.2)");

        let color = parse("hsla(0 100% 50% / 0.5)")?;
        assert_eq!(color.to_css_hex(), "#ff0000");
        assert_eq!(color.alpha(), 0.5);

        let color = parse("device-cmyk(0 1 1 0)")?;
        assert!(matches!(color, AnyColor::Cmyk(_)));
        assert_eq!(color.to_css_hex(), "#ff0000");
        assert_eq!(color.to_css(false), "device-cmyk(0% 100% 100% 0%)");

        let color = parse("device-cmyk(0%, 0%, 0%, 50%, 0.5)")?;
        assert_eq!(color.to_css(true), "device-cmyk(0%, 0%, 0%, 50%, 0.5)");
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("lab(50% 0 0)"),
            Err(ColorError::UnsupportedFunction("lab".to_string()))
        );
        assert_eq!(
            parse("rgb(1 2)"),
            Err(ColorError::InvalidArguments("1 2".to_string()))
        );
        assert_eq!(
            parse("rgb(1, 2)"),
            Err(ColorError::InvalidArguments("1, 2".to_string()))
        );
        assert_eq!(
            parse("hsl(a b c)"),
            Err(ColorError::InvalidValue("a".to_string()))
        );

        for text in [
            "",
            "#12345",
            "octarine",
            "rgb 1 2 3",
            "rgb(1 2 3",
            "r_b(1 2 3)",
        ] {
            assert_eq!(
                parse(text),
                Err(ColorError::UnparseableColor(text.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_with() -> Result<(), ColorError> {
        let functions = [
            ColorFunction {
                name: "hsv",
                channels: 3,
                create: |values| Ok(AnyColor::Cmyk(Hsb::from_values(values)?.to())),
            },
            ColorFunction {
                name: "rgb",
                channels: 3,
                create: |values| Ok(AnyColor::Cmyk(Cmyk::from_values(&values[..3])?)),
            },
        ];

        let color = parse_with("HSV(85, 100%, 100%, 0.5)", &functions)?;
        assert!(matches!(color, AnyColor::Cmyk(_)));
        assert_eq!(color.to_css_hex(), "#00ff00");
        assert_eq!(color.alpha(), 0.5);

        // Extra functions shadow built-in functions with the same name.
        let error = ColorError::InvalidArguments("3 values for CMYKA".to_string());
        assert_eq!(parse_with("rgb(0 0 0)", &functions), Err(error));
        let color = parse_with("rgba(0 0 0)", &functions)?;
        assert!(matches!(color, AnyColor::Rgb(_)));
        let color = parse_with("#fff", &functions)?;
        assert!(matches!(color, AnyColor::Rgb(_)));

        assert_eq!(
            parse("hsv(120 100% 100%)"),
            Err(ColorError::UnsupportedFunction("hsv".to_string()))
        );
        assert_eq!(
            parse_with("hsv(1 2)", &functions),
            Err(ColorError::InvalidArguments("1 2".to_string()))
        );
        Ok(())
    }
}
