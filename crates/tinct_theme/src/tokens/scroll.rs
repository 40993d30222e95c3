//! Scrollbar geometry tokens

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Smooth => "smooth",
        }
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scrollbar width (px), scroll behavior, visibility and track/thumb radii (px)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTokens {
    pub width: f32,
    pub behavior: ScrollBehavior,
    pub hide: bool,
    pub track_radius: f32,
    pub thumb_radius: f32,
}

impl ScrollTokens {
    pub const WIDTH_PROPERTY: &'static str = "--scrollbar-width";
    pub const BEHAVIOR_PROPERTY: &'static str = "--scroll-behavior";
    pub const VISIBILITY_PROPERTY: &'static str = "--scrollbar-visibility";
    pub const TRACK_RADIUS_PROPERTY: &'static str = "--scrollbar-track-radius";
    pub const THUMB_RADIUS_PROPERTY: &'static str = "--scrollbar-thumb-radius";

    pub fn visibility(&self) -> &'static str {
        if self.hide {
            "hidden"
        } else {
            "visible"
        }
    }
}

impl Default for ScrollTokens {
    fn default() -> Self {
        Self {
            width: 8.0,
            behavior: ScrollBehavior::Auto,
            hide: false,
            track_radius: 4.0,
            thumb_radius: 4.0,
        }
    }
}
