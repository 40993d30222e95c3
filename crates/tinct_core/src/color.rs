//! OKLCH color model
//!
//! [`Oklch`] is the canonical color representation. sRGB, HSV and hex are
//! derived from it through linear-light sRGB and are never edited on their own.
//!
//! The OKLab matrices are the reference ones published with the color space.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::{tag_no_case, take_until},
    character::complete::{char, multispace0},
    sequence::{delimited, tuple},
    IResult,
};

use serde::Serialize;

use crate::error::ColorParseError;

/// Chroma below this is treated as achromatic when converting back from sRGB.
const ACHROMATIC_EPSILON: f64 = 1e-4;

/// Perceptual color triple: lightness `l` in `[0, 1]`, chroma `c >= 0`,
/// hue `h` in degrees `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// 8-bit additive RGB
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/value. `h` in degrees, `s` and `v` in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `0.0..=1.0` floats (gamma-encoded)
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Oklch {
    pub const BLACK: Oklch = Oklch::new(0.0, 0.0, 0.0);
    pub const WHITE: Oklch = Oklch::new(1.0, 0.0, 0.0);
    /// Mid grey used wherever a color could not be resolved
    pub const NEUTRAL: Oklch = Oklch::new(0.5, 0.0, 0.0);

    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.c.is_finite() && self.h.is_finite()
    }

    /// Clamp into canonical ranges. Non-finite components become zero.
    pub fn normalized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        let l = finite(self.l).clamp(0.0, 1.0);
        let c = finite(self.c).max(0.0);
        let mut h = finite(self.h).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if h >= 360.0 {
            h = 0.0;
        }
        Self { l, c, h }
    }

    /// Convert to OKLab `(L, a, b)`
    pub fn to_oklab(&self) -> [f64; 3] {
        let hue = self.h.to_radians();
        [self.l, self.c * hue.cos(), self.c * hue.sin()]
    }

    /// Convert to linear-light sRGB. Channels may fall outside `0..=1` for
    /// out-of-gamut colors.
    pub fn to_linear_srgb(&self) -> [f64; 3] {
        let [l, a, b] = self.to_oklab();

        let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
        let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
        let s_ = l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

        let l3 = l_ * l_ * l_;
        let m3 = m_ * m_ * m_;
        let s3 = s_ * s_ * s_;

        [
            4.076_741_662_1 * l3 - 3.307_711_591_3 * m3 + 0.230_969_929_2 * s3,
            -1.268_438_004_6 * l3 + 2.609_757_401_1 * m3 - 0.341_319_396_5 * s3,
            -0.004_196_086_3 * l3 - 0.703_418_614_7 * m3 + 1.707_614_701_0 * s3,
        ]
    }

    /// Gamma-encoded sRGB, clipped to gamut
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = self.to_linear_srgb();
        let channel = |v: f64| (srgb_encode(v.clamp(0.0, 1.0)) * 255.0).round() as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.to_rgb())
    }

    /// Inverse transform from 8-bit sRGB
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        Self::from_srgb(r, g, b)
    }

    /// Inverse transform from gamma-encoded sRGB channels in `0..=1`
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let r = srgb_decode(r.clamp(0.0, 1.0));
        let g = srgb_decode(g.clamp(0.0, 1.0));
        let b = srgb_decode(b.clamp(0.0, 1.0));

        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        let lightness = 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_;
        let a = 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_;
        let bb = 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_;

        let chroma = (a * a + bb * bb).sqrt();
        if chroma < ACHROMATIC_EPSILON {
            return Self::new(lightness, 0.0, 0.0).normalized();
        }
        Self::new(lightness, chroma, bb.atan2(a).to_degrees()).normalized()
    }

    /// From HSL with `h` in degrees and `s`, `l` in `0..=1`
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let [r, g, b] = hsl_to_srgb(h, s, l);
        Self::from_srgb(r, g, b)
    }
}

impl Default for Oklch {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl FromStr for Oklch {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| ColorParseError::Malformed {
            format: "oklch",
            input: s.to_string(),
        })
    }
}

/// Canonical string form `oklch(l c h)`, each component fixed to 4 decimals.
pub fn stringify(color: &Oklch) -> String {
    format!(
        "oklch({:.4} {:.4} {:.4})",
        fixed_zero(color.l),
        fixed_zero(color.c),
        fixed_zero(color.h)
    )
}

/// Parse the canonical `oklch(l c h)` form.
///
/// Components are whitespace separated. Returns `None` when the parentheses
/// are missing, fewer than three components are present, or any component is
/// not a finite number. Extra numeric components are ignored.
pub fn parse(text: &str) -> Option<Oklch> {
    let (rest, body) = oklch_body(text.trim()).ok()?;
    if !rest.trim().is_empty() {
        return None;
    }

    let components = body
        .split_whitespace()
        .map(|part| part.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<f64>>>()?;

    match components.as_slice() {
        [l, c, h, ..] => Some(Oklch::new(*l, *c, *h)),
        _ => None,
    }
}

fn oklch_body(input: &str) -> IResult<&str, &str> {
    delimited(
        tuple((tag_no_case("oklch"), multispace0, char('('))),
        take_until(")"),
        char(')'),
    )(input)
}

/// Values that would print as `-0.0000` are folded to zero
fn fixed_zero(v: f64) -> f64 {
    if v.abs() < 5e-5 {
        0.0
    } else {
        v
    }
}

fn srgb_encode(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Gamma-encoded channel to linear light
pub(crate) fn srgb_decode(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

fn hsl_to_srgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn stringify_fixes_four_decimals() {
        let primary = Oklch::new(0.62, 0.19, 259.81);
        assert_eq!(stringify(&primary), "oklch(0.6200 0.1900 259.8100)");
        assert_eq!(stringify(&Oklch::BLACK), "oklch(0.0000 0.0000 0.0000)");
    }

    #[test]
    fn stringify_never_prints_negative_zero() {
        let color = Oklch::new(-0.0, -0.00001, 0.0);
        assert_eq!(stringify(&color), "oklch(0.0000 0.0000 0.0000)");
    }

    #[test]
    fn parse_accepts_canonical_and_short_forms() {
        assert_eq!(parse("oklch(1 0 0)"), Some(Oklch::WHITE));
        assert_eq!(
            parse("  oklch(0.6200   0.1900 259.8100) "),
            Some(Oklch::new(0.62, 0.19, 259.81))
        );
        assert_eq!(
            parse("oklch(0.5 0.1 120 0.3)"),
            Some(Oklch::new(0.5, 0.1, 120.0))
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse("oklch 0.5 0.1 120"), None);
        assert_eq!(parse("oklch(0.5 0.1 120"), None);
        assert_eq!(parse("oklch(0.5 0.1)"), None);
        assert_eq!(parse("oklch(0.5 abc 120)"), None);
        assert_eq!(parse("oklch(0.5 0.1 120 / 0.5)"), None);
        assert_eq!(parse("oklch(0.5 NaN 120)"), None);
        assert_eq!(parse("#ffffff"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn white_and_black_map_to_srgb_extremes() {
        assert_eq!(Oklch::WHITE.to_rgb(), Rgb::new(255, 255, 255));
        assert_eq!(Oklch::BLACK.to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Oklch::WHITE.to_hex(), "#ffffff");
        assert_eq!(Oklch::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn pure_red_converts_both_ways() {
        let red = Oklch::from_rgb(Rgb::new(255, 0, 0));
        assert!(close(red.l, 0.62796, 1e-3), "{red:?}");
        assert!(close(red.c, 0.25768, 1e-3), "{red:?}");
        assert!(close(red.h, 29.2339, 1e-1), "{red:?}");
        assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn greys_are_achromatic() {
        let grey = Oklch::from_rgb(Rgb::new(128, 128, 128));
        assert_eq!(grey.c, 0.0);
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsv_of_primaries() {
        let blue = Oklch::from_rgb(Rgb::new(0, 0, 255)).to_hsv();
        assert!(close(blue.h, 240.0, 0.5), "{blue:?}");
        assert!(close(blue.s, 100.0, 0.5), "{blue:?}");
        assert!(close(blue.v, 100.0, 0.5), "{blue:?}");

        let black = Oklch::BLACK.to_hsv();
        assert_eq!(black, Hsv::default());
    }

    #[test]
    fn hsl_green_matches_srgb_green() {
        let green = Oklch::from_hsl(120.0, 1.0, 0.5);
        assert_eq!(green.to_rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn normalized_wraps_hue_and_clamps() {
        let n = Oklch::new(1.4, -0.2, -30.0).normalized();
        assert_eq!(n, Oklch::new(1.0, 0.0, 330.0));
        let n = Oklch::new(f64::NAN, 0.1, 720.0).normalized();
        assert_eq!(n, Oklch::new(0.0, 0.1, 0.0));
    }

    #[test]
    fn from_str_round_trips_display() {
        let color: Oklch = "oklch(0.7000 0.1500 30.0000)".parse().unwrap();
        assert_eq!(color.to_string(), "oklch(0.7000 0.1500 30.0000)");
        assert!("rgb(1, 2, 3)".parse::<Oklch>().is_err());
    }
}
