//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Colors, per semantic role
//! - Typography and brand fonts
//! - Spacing
//! - Border radii and width
//! - Shadows
//! - Scrollbar geometry

mod color;
mod radius;
mod scroll;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use scroll::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// Format a length in px, without a `-0`
pub(crate) fn px(value: f32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}
