//! Writing theme values into a style target

mod engine;
pub mod properties;
mod target;

pub use engine::{PropertyMap, SyncEngine};
pub use properties::owned_properties;
pub use target::{MemoryStyleTarget, StyleTarget};
