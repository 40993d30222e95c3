//! Tinct Core
//!
//! Color primitives for the Tinct theme engine:
//!
//! - **Color model**: OKLCH as the canonical representation, with derived
//!   sRGB, HSV and hex encodings
//! - **Color parsing**: the canonical `oklch(l c h)` string form, plus a
//!   lenient parser for hex, `rgb()`, `hsl()` and `oklch()` input
//! - **Contrast**: WCAG relative luminance, contrast ratio and grading
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{contrast, ColorToken, Oklch};
//!
//! let primary = ColorToken::new("primary", Oklch::new(0.62, 0.19, 259.81));
//! assert_eq!(primary.value(), "oklch(0.6200 0.1900 259.8100)");
//!
//! let result = contrast::evaluate(&Oklch::WHITE, &primary.oklch());
//! assert!(result.ratio > 1.0);
//! ```

pub mod color;
pub mod contrast;
mod error;
pub mod parse;
pub mod token;

pub use color::{parse, stringify, Hsv, Oklch, Rgb};
pub use contrast::{
    contrast_grade, contrast_ratio, contrast_ratio_css, evaluate, ContrastGrade, ContrastResult,
    GradePair,
};
pub use error::ColorParseError;
pub use parse::parse_any;
pub use token::ColorToken;
