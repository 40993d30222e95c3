//! Arbitrary color input parsing
//!
//! Resolves the color notations found in imported themes into [`Oklch`]:
//!
//! - Hex: `#rgb`, `#rrggbb` (and the alpha variants `#rgba`, `#rrggbbaa`,
//!   whose alpha is dropped)
//! - `rgb(r, g, b)` / `rgb(r g b)` with 0-255 or percentage channels
//! - `hsl(h, s%, l%)` / `hsl(h s% l%)`
//! - `oklch(l c h)` with optional `%` lightness
//!
//! Alpha components are accepted and discarded; tokens carry no alpha.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, opt, value},
    error::{Error as NomError, ErrorKind},
    number::complete::double,
    sequence::{preceded, tuple},
    Finish, IResult,
};

use crate::color::Oklch;
use crate::error::ColorParseError;

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Numeric argument and whether it carried a `%` suffix
#[derive(Clone, Copy, Debug)]
struct Arg {
    value: f64,
    percent: bool,
}

/// Parse any supported notation into its OKLCH value
pub fn parse_any(input: &str) -> Result<Oklch, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    match all_consuming(alt((hex_color, rgb_color, hsl_color, oklch_color)))(input).finish() {
        Ok((_, color)) if color.is_finite() => Ok(color.normalized()),
        Ok(_) => Err(ColorParseError::NonFinite(input.to_string())),
        Err(_) => Err(classify_failure(input)),
    }
}

fn classify_failure(input: &str) -> ColorParseError {
    let lower = input.to_ascii_lowercase();
    let format = if lower.starts_with('#') {
        "hex"
    } else if lower.starts_with("rgb") {
        "rgb"
    } else if lower.starts_with("hsl") {
        "hsl"
    } else if lower.starts_with("oklch") {
        "oklch"
    } else {
        return ColorParseError::UnsupportedFormat(input.to_string());
    };
    ColorParseError::Malformed {
        format,
        input: input.to_string(),
    }
}

/// Parse hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA
fn hex_color(input: &str) -> ParseResult<'_, Oklch> {
    let (rest, digits) = preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))(input)?;

    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    let (r, g, b) = match digits.len() {
        3 | 4 => (
            channel(&digits[0..1].repeat(2)),
            channel(&digits[1..2].repeat(2)),
            channel(&digits[2..3].repeat(2)),
        ),
        6 | 8 => (
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        ),
        _ => {
            return Err(nom::Err::Error(NomError::new(
                input,
                ErrorKind::LengthValue,
            )));
        }
    };

    Ok((
        rest,
        Oklch::from_srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ),
    ))
}

/// Parse rgb(r, g, b) / rgba(r, g, b, a) / rgb(r g b / a)
fn rgb_color(input: &str) -> ParseResult<'_, Oklch> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = open(input)?;
    let (input, r) = arg(input)?;
    let (input, _) = separator(input)?;
    let (input, g) = arg(input)?;
    let (input, _) = separator(input)?;
    let (input, b) = arg(input)?;
    let (input, _) = opt(alpha)(input)?;
    let (input, _) = close(input)?;

    let channel = |a: Arg| {
        if a.percent {
            a.value / 100.0
        } else {
            a.value / 255.0
        }
    };
    Ok((input, Oklch::from_srgb(channel(r), channel(g), channel(b))))
}

/// Parse hsl(h, s%, l%) / hsla(...) / hsl(h s% l% / a)
fn hsl_color(input: &str) -> ParseResult<'_, Oklch> {
    let (input, _) = alt((tag_no_case("hsla"), tag_no_case("hsl")))(input)?;
    let (input, _) = open(input)?;
    let (input, h) = hue(input)?;
    let (input, _) = separator(input)?;
    let (input, s) = arg(input)?;
    let (input, _) = separator(input)?;
    let (input, l) = arg(input)?;
    let (input, _) = opt(alpha)(input)?;
    let (input, _) = close(input)?;

    Ok((input, Oklch::from_hsl(h, unit_fraction(s), unit_fraction(l))))
}

/// Parse oklch(l c h), accepting `%` on lightness and chroma
fn oklch_color(input: &str) -> ParseResult<'_, Oklch> {
    let (input, _) = tag_no_case("oklch")(input)?;
    let (input, _) = open(input)?;
    let (input, l) = arg(input)?;
    let (input, _) = multispace1(input)?;
    let (input, c) = arg(input)?;
    let (input, _) = multispace1(input)?;
    let (input, h) = hue(input)?;
    let (input, _) = opt(alpha)(input)?;
    let (input, _) = close(input)?;

    let lightness = if l.percent { l.value / 100.0 } else { l.value };
    // 100% chroma is 0.4 in CSS Color 4
    let chroma = if c.percent {
        c.value * 0.4 / 100.0
    } else {
        c.value
    };
    Ok((input, Oklch::new(lightness, chroma, h)))
}

/// Saturation/lightness: `50%` or a bare fraction; bare values above 1 are
/// read as percentages.
fn unit_fraction(a: Arg) -> f64 {
    if a.percent || a.value > 1.0 {
        a.value / 100.0
    } else {
        a.value
    }
}

fn arg(input: &str) -> ParseResult<'_, Arg> {
    let (input, value) = double(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    Ok((
        input,
        Arg {
            value,
            percent: percent.is_some(),
        },
    ))
}

fn hue(input: &str) -> ParseResult<'_, f64> {
    let (input, value) = double(input)?;
    let (input, _) = opt(tag_no_case("deg"))(input)?;
    Ok((input, value))
}

fn separator(input: &str) -> ParseResult<'_, ()> {
    alt((
        value((), tuple((multispace0, char(','), multispace0))),
        value((), multispace1),
    ))(input)
}

/// Trailing alpha component, discarded
fn alpha(input: &str) -> ParseResult<'_, ()> {
    let (input, _) = alt((
        value((), tuple((multispace0, char('/'), multispace0))),
        separator,
    ))(input)?;
    let (input, _) = arg(input)?;
    Ok((input, ()))
}

fn open(input: &str) -> ParseResult<'_, ()> {
    value((), tuple((multispace0, char('('), multispace0)))(input)
}

fn close(input: &str) -> ParseResult<'_, ()> {
    value((), tuple((multispace0, char(')'))))(input)
}
