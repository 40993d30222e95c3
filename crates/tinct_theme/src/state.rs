//! Global style registry singleton
//!
//! One process-wide style target, written only through the sync engine.
//! Every write triggers the registered redraw callback so the preview surface
//! re-renders.

use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use crate::config::SyncConfig;
use crate::error::ThemeError;
use crate::sync::{MemoryStyleTarget, StyleTarget, SyncEngine};
use crate::theme::{ThemeData, ThemeMode};
use crate::tokens::ThemeColors;

/// Global registry instance
static STYLE_REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();

/// Global redraw callback - set by the host to re-render after style writes
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

/// The shared style target and the engine that owns its properties
pub struct StyleRegistry {
    engine: SyncEngine,
    target: Mutex<Box<dyn StyleTarget + Send>>,
    mode: RwLock<ThemeMode>,
}

impl StyleRegistry {
    /// Initialize the global registry. Returns `false` if it already exists.
    pub fn init(config: SyncConfig, target: Box<dyn StyleTarget + Send>) -> bool {
        let registry = StyleRegistry {
            engine: SyncEngine::new(config),
            target: Mutex::new(target),
            mode: RwLock::new(ThemeMode::Light),
        };
        STYLE_REGISTRY.set(registry).is_ok()
    }

    /// Get the registry, initializing it with an in-memory target if needed
    pub fn get() -> &'static StyleRegistry {
        STYLE_REGISTRY.get_or_init(|| StyleRegistry {
            engine: SyncEngine::default(),
            target: Mutex::new(Box::new(MemoryStyleTarget::new())),
            mode: RwLock::new(ThemeMode::Light),
        })
    }

    /// Try to get the registry (returns None if not initialized)
    pub fn try_get() -> Option<&'static StyleRegistry> {
        STYLE_REGISTRY.get()
    }

    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    // ========== Mode ==========

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
        if *current != mode {
            tracing::debug!("StyleRegistry::set_mode - switching from {} to {}", *current, mode);
        }
        *current = mode;
        drop(current);

        self.with_target(|target| self.engine.set_mode(target, mode));
        trigger_redraw();
    }

    pub fn toggle_mode(&self) {
        self.set_mode(self.mode().toggle());
    }

    // ========== Writes ==========

    /// Apply `theme` using the current mode's colors
    pub fn apply_theme(&self, theme: &ThemeData) -> usize {
        let mode = self.mode();
        let written = self.with_target(|target| self.engine.apply_theme(target, theme, mode));
        trigger_redraw();
        written
    }

    /// Validate, then apply. Nothing is written for an incomplete theme.
    pub fn load_theme(&self, theme: &ThemeData) -> Result<usize, ThemeError> {
        let mode = self.mode();
        let written = self.with_target(|target| self.engine.load_theme(target, theme, mode))?;
        trigger_redraw();
        Ok(written)
    }

    pub fn apply_colors(&self, colors: &ThemeColors) -> usize {
        let written = self.with_target(|target| self.engine.apply_colors(target, colors));
        trigger_redraw();
        written
    }

    pub fn apply_scrollbar_colors(&self, colors: &ThemeColors) -> usize {
        let written =
            self.with_target(|target| self.engine.apply_scrollbar_colors(target, colors));
        trigger_redraw();
        written
    }

    pub fn reset_all(&self) -> usize {
        let removed = self.with_target(|target| self.engine.reset_all(target));
        trigger_redraw();
        removed
    }

    // ========== Reads ==========

    pub fn property(&self, name: &str) -> Option<String> {
        self.with_target(|target| target.property(name))
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.with_target(|target| target.has_flag(flag))
    }

    fn with_target<R>(&self, f: impl FnOnce(&mut (dyn StyleTarget + Send)) -> R) -> R {
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut **target)
    }
}
