//! Typography tokens for theming

use serde::{Deserialize, Serialize};

pub const SANS_STACK: &str = "ui-sans-serif, system-ui, sans-serif";
pub const SERIF_STACK: &str = "ui-serif, Georgia, Cambria, serif";
pub const MONO_STACK: &str = "ui-monospace, SFMono-Regular, Menlo, monospace";

/// Named typographic elements
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextElement {
    H1,
    H2,
    H3,
    H4,
    H5,
    Paragraph,
    Quote,
    Emphasis,
}

impl TextElement {
    pub const ALL: [TextElement; 8] = [
        TextElement::H1,
        TextElement::H2,
        TextElement::H3,
        TextElement::H4,
        TextElement::H5,
        TextElement::Paragraph,
        TextElement::Quote,
        TextElement::Emphasis,
    ];

    /// Property name prefix
    pub fn key(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::Paragraph => "p",
            Self::Quote => "blockquote",
            Self::Emphasis => "em",
        }
    }
}

/// Per-element text attributes written to the style target
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextAttribute {
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 5] = [
        TextAttribute::FontFamily,
        TextAttribute::FontSize,
        TextAttribute::FontWeight,
        TextAttribute::LineHeight,
        TextAttribute::LetterSpacing,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
        }
    }
}

/// Text style for one element.
///
/// `font_size` is in px, `letter_spacing` in em, `line_height` unitless.
/// An empty `font_family` resolves to the configured fallback stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: f32,
    #[serde(default)]
    pub letter_spacing: f32,
}

impl TextStyle {
    pub fn new(
        font_family: impl Into<String>,
        font_size: f32,
        font_weight: u16,
        line_height: f32,
        letter_spacing: f32,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            font_weight,
            line_height,
            letter_spacing,
        }
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub paragraph: TextStyle,
    pub quote: TextStyle,
    pub emphasis: TextStyle,
}

impl TypographyTokens {
    /// Get a text style by element
    pub fn get(&self, element: TextElement) -> &TextStyle {
        match element {
            TextElement::H1 => &self.h1,
            TextElement::H2 => &self.h2,
            TextElement::H3 => &self.h3,
            TextElement::H4 => &self.h4,
            TextElement::H5 => &self.h5,
            TextElement::Paragraph => &self.paragraph,
            TextElement::Quote => &self.quote,
            TextElement::Emphasis => &self.emphasis,
        }
    }

    pub fn get_mut(&mut self, element: TextElement) -> &mut TextStyle {
        match element {
            TextElement::H1 => &mut self.h1,
            TextElement::H2 => &mut self.h2,
            TextElement::H3 => &mut self.h3,
            TextElement::H4 => &mut self.h4,
            TextElement::H5 => &mut self.h5,
            TextElement::Paragraph => &mut self.paragraph,
            TextElement::Quote => &mut self.quote,
            TextElement::Emphasis => &mut self.emphasis,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            h1: TextStyle::new(SANS_STACK, 36.0, 800, 1.1, -0.025),
            h2: TextStyle::new(SANS_STACK, 30.0, 700, 1.2, -0.02),
            h3: TextStyle::new(SANS_STACK, 24.0, 600, 1.3, -0.015),
            h4: TextStyle::new(SANS_STACK, 20.0, 600, 1.4, 0.0),
            h5: TextStyle::new(SANS_STACK, 18.0, 600, 1.5, 0.0),
            paragraph: TextStyle::new(SANS_STACK, 16.0, 400, 1.6, 0.0),
            quote: TextStyle::new(SERIF_STACK, 18.0, 400, 1.6, 0.0),
            emphasis: TextStyle::new(SANS_STACK, 16.0, 500, 1.6, 0.0),
        }
    }
}

/// Brand identity: display name and font family stacks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandTokens {
    pub name: String,
    pub font_sans: String,
    pub font_serif: String,
    pub font_mono: String,
}

impl Default for BrandTokens {
    fn default() -> Self {
        Self {
            name: String::new(),
            font_sans: SANS_STACK.to_string(),
            font_serif: SERIF_STACK.to_string(),
            font_mono: MONO_STACK.to_string(),
        }
    }
}
