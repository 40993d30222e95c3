//! Tinct Theme System
//!
//! Theme records, token groups and the engine that synchronizes them into a
//! live style target.
//!
//! # Overview
//!
//! - **Design tokens**: semantic colors, typography, brand fonts, spacing,
//!   border radii, shadows, scrollbar geometry
//! - **Radius linkage**: one global radius with dependent card, button and
//!   checkbox radii that mirror it until edited directly
//! - **Synchronization**: every token flattened to named style properties and
//!   written into a [`StyleTarget`], idempotently
//! - **Contrast audit**: WCAG grades over a fixed catalogue of color pairs
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{MemoryStyleTarget, StyleTarget, SyncEngine, ThemeMode, ThemePreset};
//!
//! let engine = SyncEngine::default();
//! let mut target = MemoryStyleTarget::new();
//!
//! let theme = ThemePreset::Blue.theme();
//! engine.load_theme(&mut target, &theme, ThemeMode::Light).unwrap();
//! engine.set_mode(&mut target, ThemeMode::Light);
//!
//! assert_eq!(
//!     target.property("--primary").as_deref(),
//!     Some("oklch(0.6200 0.1900 259.8100)")
//! );
//! ```
//!
//! # Global registry
//!
//! Hosts with a single preview surface use [`StyleRegistry`], which owns
//! the process-wide target and calls the redraw callback after each write:
//!
//! ```rust,ignore
//! set_redraw_callback(request_frame);
//! let registry = StyleRegistry::get();
//! registry.load_theme(&theme)?;
//! registry.toggle_mode();
//! ```

pub mod audit;
pub mod config;
mod error;
pub mod presets;
pub mod state;
pub mod sync;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use audit::{audit, ContrastPair, PairCategory, PairReport, CONTRAST_PAIRS};
pub use config::{Fallbacks, SyncConfig};
pub use error::ThemeError;
pub use presets::ThemePreset;
pub use state::{set_redraw_callback, StyleRegistry};
pub use sync::{owned_properties, MemoryStyleTarget, PropertyMap, StyleTarget, SyncEngine};
pub use theme::{ThemeData, ThemeMode, REQUIRED_ROLES};
pub use tokens::*;
