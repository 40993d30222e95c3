//! Color tokens
//!
//! A [`ColorToken`] is an immutable value. Its hex, RGB, HSV and string
//! caches are computed once from the OKLCH source of truth when the token is
//! built; changing a color means building a new token.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{stringify, Hsv, Oklch, Rgb};
use crate::error::ColorParseError;
use crate::parse::parse_any;

/// Semantic color unit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorTokenRepr", into = "ColorTokenRepr")]
pub struct ColorToken {
    name: String,
    oklch: Oklch,
    hex: String,
    rgb: Rgb,
    hsv: Hsv,
    value: String,
    linked_to: Option<String>,
    linked_colors: Vec<String>,
}

impl ColorToken {
    /// Build a token, deriving every cached representation from `oklch`.
    ///
    /// The triple is normalized first: lightness clamped to `[0, 1]`, chroma
    /// to `>= 0`, hue wrapped into `[0, 360)`.
    pub fn new(name: impl Into<String>, oklch: Oklch) -> Self {
        let oklch = oklch.normalized();
        let rgb = oklch.to_rgb();
        Self {
            name: name.into(),
            oklch,
            hex: rgb.to_hex(),
            rgb,
            hsv: oklch.to_hsv(),
            value: stringify(&oklch),
            linked_to: None,
            linked_colors: Vec::new(),
        }
    }

    /// The neutral grey used when an input cannot be resolved
    pub fn neutral(name: impl Into<String>) -> Self {
        Self::new(name, Oklch::NEUTRAL)
    }

    /// Build a token from hex, `rgb()`, `hsl()` or `oklch()` text.
    ///
    /// Unparseable input yields [`ColorToken::neutral`].
    pub fn from_css(name: impl Into<String>, input: &str) -> Self {
        let name = name.into();
        match parse_any(input) {
            Ok(oklch) => Self::new(name, oklch),
            Err(err) => {
                tracing::warn!("color token `{}` falls back to neutral: {}", name, err);
                Self::neutral(name)
            }
        }
    }

    pub fn try_from_css(name: impl Into<String>, input: &str) -> Result<Self, ColorParseError> {
        parse_any(input).map(|oklch| Self::new(name, oklch))
    }

    /// Same name and link edges, new color
    pub fn with_oklch(&self, oklch: Oklch) -> Self {
        let mut token = Self::new(self.name.clone(), oklch);
        token.linked_to = self.linked_to.clone();
        token.linked_colors = self.linked_colors.clone();
        token
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark this token as mirroring `parent`
    pub fn with_link(mut self, parent: impl Into<String>) -> Self {
        self.linked_to = Some(parent.into());
        self
    }

    pub fn without_link(mut self) -> Self {
        self.linked_to = None;
        self
    }

    /// Record `child` as mirroring this token
    pub fn with_linked_color(mut self, child: impl Into<String>) -> Self {
        let child = child.into();
        if !self.linked_colors.contains(&child) {
            self.linked_colors.push(child);
        }
        self
    }

    pub fn without_linked_color(mut self, child: &str) -> Self {
        self.linked_colors.retain(|c| c != child);
        self
    }

    /// Replace the recorded children, dropping duplicates
    pub fn with_linked_colors(mut self, children: impl IntoIterator<Item = String>) -> Self {
        self.linked_colors.clear();
        children
            .into_iter()
            .fold(self, |token, child| token.with_linked_color(child))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oklch(&self) -> Oklch {
        self.oklch
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Canonical `oklch(l c h)` string
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn linked_to(&self) -> Option<&str> {
        self.linked_to.as_deref()
    }

    pub fn linked_colors(&self) -> &[String] {
        &self.linked_colors
    }

    pub fn is_linked(&self) -> bool {
        self.linked_to.is_some()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Serialized form. Only the color text is read back; caches are rebuilt.
#[derive(Serialize, Deserialize)]
struct ColorTokenRepr {
    #[serde(default)]
    name: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linked_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    linked_colors: Vec<String>,
}

impl TryFrom<ColorTokenRepr> for ColorToken {
    type Error = ColorParseError;

    fn try_from(repr: ColorTokenRepr) -> Result<Self, Self::Error> {
        let mut token = Self::try_from_css(repr.name, &repr.value)?;
        token.linked_to = repr.linked_to;
        token.linked_colors = repr.linked_colors;
        Ok(token)
    }
}

impl From<ColorToken> for ColorTokenRepr {
    fn from(token: ColorToken) -> Self {
        Self {
            name: token.name,
            value: token.value,
            linked_to: token.linked_to,
            linked_colors: token.linked_colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caches_follow_oklch() {
        let token = ColorToken::new("background", Oklch::WHITE);
        assert_eq!(token.value(), "oklch(1.0000 0.0000 0.0000)");
        assert_eq!(token.hex(), "#ffffff");
        assert_eq!(token.rgb(), Rgb::new(255, 255, 255));
        assert_eq!(token.hsv().v, 100.0);

        let darker = token.with_oklch(Oklch::BLACK);
        assert_eq!(darker.name(), "background");
        assert_eq!(darker.hex(), "#000000");
        assert_eq!(darker.value(), "oklch(0.0000 0.0000 0.0000)");
    }

    #[test]
    fn with_oklch_keeps_link_edges() {
        let token = ColorToken::new("ring", Oklch::WHITE)
            .with_link("primary")
            .with_linked_color("sidebar-ring");
        let next = token.with_oklch(Oklch::new(0.4, 0.1, 200.0));
        assert_eq!(next.linked_to(), Some("primary"));
        assert_eq!(next.linked_colors(), ["sidebar-ring".to_string()]);
    }

    #[test]
    fn linked_colors_are_deduplicated() {
        let token = ColorToken::new("primary", Oklch::WHITE)
            .with_linked_color("ring")
            .with_linked_color("ring")
            .with_linked_color("chart-1");
        assert_eq!(token.linked_colors().len(), 2);
        let token = token.without_linked_color("ring");
        assert_eq!(token.linked_colors(), ["chart-1".to_string()]);

        let token = token.with_linked_colors(["ring".to_string(), "ring".to_string()]);
        assert_eq!(token.linked_colors(), ["ring".to_string()]);
    }

    #[test]
    fn from_css_falls_back_to_neutral() {
        let token = ColorToken::from_css("accent", "not a color");
        assert_eq!(token, ColorToken::neutral("accent"));
        assert_eq!(token.value(), "oklch(0.5000 0.0000 0.0000)");
        assert!(ColorToken::try_from_css("accent", "not a color").is_err());
    }

    #[test]
    fn from_css_reads_hex() {
        let token = ColorToken::from_css("primary", "#3b82f6");
        assert_eq!(token.hex(), "#3b82f6");
    }

    #[test]
    fn out_of_range_input_is_normalized() {
        let token = ColorToken::new("x", Oklch::new(1.2, -0.1, 370.0));
        assert_eq!(token.oklch(), Oklch::new(1.0, 0.0, 10.0));
    }
}
