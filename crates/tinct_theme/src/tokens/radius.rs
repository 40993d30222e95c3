//! Border radius tokens and the global/dependent linkage between them
//!
//! One global radius drives three dependent families. A dependent is either
//! linked, in which case its effective radius is the global one, or unlinked
//! with its own value. The effective radius is always computed through the
//! link state, so a linked dependent can never hold a stale copy of the
//! global radius.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::px;

/// Radius restored by a global reset, in px
pub const DEFAULT_RADIUS: f32 = 8.0;

pub const GLOBAL_RADIUS_PROPERTY: &str = "--radius";
pub const BORDER_WIDTH_PROPERTY: &str = "--border-width";

/// Component families whose radius depends on the global radius
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusFamily {
    Card,
    Button,
    Checkbox,
}

impl RadiusFamily {
    pub const ALL: [RadiusFamily; 3] = [RadiusFamily::Card, RadiusFamily::Button, RadiusFamily::Checkbox];

    /// Padding between a component's outer edge and its nested content
    pub fn inset(self) -> f32 {
        match self {
            Self::Card => 8.0,
            Self::Button => 4.0,
            Self::Checkbox => 2.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
        }
    }

    pub fn property(self) -> &'static str {
        match self {
            Self::Card => "--radius-card",
            Self::Button => "--radius-button",
            Self::Checkbox => "--radius-checkbox",
        }
    }

    pub fn inner_property(self) -> &'static str {
        match self {
            Self::Card => "--radius-card-inner",
            Self::Button => "--radius-button-inner",
            Self::Checkbox => "--radius-checkbox-inner",
        }
    }

    /// Human-readable derivation of the inner radius
    pub fn formula(self) -> &'static str {
        match self {
            Self::Card => "inner = max(0, card - 8px)",
            Self::Button => "inner = max(0, button - 4px)",
            Self::Checkbox => "inner = max(0, checkbox - 2px)",
        }
    }
}

/// Link state of a dependent radius
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RadiusLink {
    /// Mirrors the global radius
    #[default]
    Linked,
    /// Holds its own radius in px
    Unlinked(f32),
}

/// Read-only view of one controller
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusController {
    pub value: f32,
    pub is_linked: bool,
    pub formula: &'static str,
}

/// Edits an editing surface can send to [`BorderRadii::send`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusEvent {
    SetGlobal(f32),
    ResetGlobal,
    SetDependent(RadiusFamily, f32),
    ToggleLink(RadiusFamily, bool),
    Reset(RadiusFamily),
}

/// Global radius plus the three dependent families
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderRadii {
    global: f32,
    card: RadiusLink,
    button: RadiusLink,
    checkbox: RadiusLink,
}

impl Default for BorderRadii {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl BorderRadii {
    /// Every dependent starts linked
    pub fn new(global: f32) -> Self {
        Self {
            global: sanitize(global).unwrap_or(DEFAULT_RADIUS),
            card: RadiusLink::Linked,
            button: RadiusLink::Linked,
            checkbox: RadiusLink::Linked,
        }
    }

    pub fn global(&self) -> f32 {
        self.global
    }

    pub fn link(&self, family: RadiusFamily) -> RadiusLink {
        match family {
            RadiusFamily::Card => self.card,
            RadiusFamily::Button => self.button,
            RadiusFamily::Checkbox => self.checkbox,
        }
    }

    fn link_mut(&mut self, family: RadiusFamily) -> &mut RadiusLink {
        match family {
            RadiusFamily::Card => &mut self.card,
            RadiusFamily::Button => &mut self.button,
            RadiusFamily::Checkbox => &mut self.checkbox,
        }
    }

    /// Linked dependents follow immediately
    pub fn set_global(&mut self, value: f32) {
        if let Some(value) = sanitize(value) {
            self.global = value;
        }
    }

    /// Any direct set leaves the dependent unlinked with the given value
    pub fn set_dependent(&mut self, family: RadiusFamily, value: f32) {
        if let Some(value) = sanitize(value) {
            *self.link_mut(family) = RadiusLink::Unlinked(value);
        }
    }

    /// Linking snaps to the global radius. Unlinking freezes the current
    /// effective value.
    pub fn toggle_link(&mut self, family: RadiusFamily, should_link: bool) {
        let effective = self.effective(family);
        let link = self.link_mut(family);
        *link = match (should_link, *link) {
            (true, _) => RadiusLink::Linked,
            (false, RadiusLink::Linked) => RadiusLink::Unlinked(effective),
            (false, unlinked) => unlinked,
        };
    }

    pub fn reset_global(&mut self) {
        self.global = DEFAULT_RADIUS;
    }

    /// Relink a dependent
    pub fn reset(&mut self, family: RadiusFamily) {
        self.toggle_link(family, true);
    }

    /// Global back to the default and every dependent relinked
    pub fn reset_all(&mut self) {
        self.reset_global();
        for family in RadiusFamily::ALL {
            self.reset(family);
        }
    }

    pub fn effective(&self, family: RadiusFamily) -> f32 {
        match self.link(family) {
            RadiusLink::Linked => self.global,
            RadiusLink::Unlinked(value) => value,
        }
    }

    pub fn inner(&self, family: RadiusFamily) -> f32 {
        (self.effective(family) - family.inset()).max(0.0)
    }

    pub fn is_linked(&self, family: RadiusFamily) -> bool {
        self.link(family) == RadiusLink::Linked
    }

    pub fn controller(&self, family: RadiusFamily) -> RadiusController {
        RadiusController {
            value: self.effective(family),
            is_linked: self.is_linked(family),
            formula: family.formula(),
        }
    }

    /// The global controller is never linked
    pub fn global_controller(&self) -> RadiusController {
        RadiusController {
            value: self.global,
            is_linked: false,
            formula: "base",
        }
    }

    /// Apply an edit and return the resulting value of the edited controller
    pub fn send(&mut self, event: RadiusEvent) -> f32 {
        match event {
            RadiusEvent::SetGlobal(value) => {
                self.set_global(value);
                self.global
            }
            RadiusEvent::ResetGlobal => {
                self.reset_global();
                self.global
            }
            RadiusEvent::SetDependent(family, value) => {
                self.set_dependent(family, value);
                self.effective(family)
            }
            RadiusEvent::ToggleLink(family, should_link) => {
                self.toggle_link(family, should_link);
                self.effective(family)
            }
            RadiusEvent::Reset(family) => {
                self.reset(family);
                self.effective(family)
            }
        }
    }

    /// Pixel strings keyed by property: global, then each family's outer
    /// and inner radius
    pub fn pixels(&self) -> Vec<(&'static str, String)> {
        let mut pixels = Vec::with_capacity(1 + 2 * RadiusFamily::ALL.len());
        pixels.push((GLOBAL_RADIUS_PROPERTY, px(self.global)));
        for family in RadiusFamily::ALL {
            pixels.push((family.property(), px(self.effective(family))));
            pixels.push((family.inner_property(), px(self.inner(family))));
        }
        pixels
    }
}

fn sanitize(value: f32) -> Option<f32> {
    if value.is_finite() {
        Some(value.max(0.0))
    } else {
        warn!("ignoring non-finite radius {}", value);
        None
    }
}

/// Radii plus border width (px)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderTokens {
    pub radii: BorderRadii,
    pub width: f32,
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            radii: BorderRadii::default(),
            width: 1.0,
        }
    }
}
