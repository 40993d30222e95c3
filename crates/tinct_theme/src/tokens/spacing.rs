//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Spacing tiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingTier {
    Small,
    Medium,
    Large,
}

impl SpacingTier {
    pub const ALL: [SpacingTier; 3] = [SpacingTier::Small, SpacingTier::Medium, SpacingTier::Large];

    pub fn property(self) -> &'static str {
        match self {
            Self::Small => "--spacing-sm",
            Self::Medium => "--spacing-md",
            Self::Large => "--spacing-lg",
        }
    }
}

/// Spacing scale in px
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingTokens {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl SpacingTokens {
    /// Get spacing value by tier
    pub fn get(&self, tier: SpacingTier) -> f32 {
        match tier {
            SpacingTier::Small => self.small,
            SpacingTier::Medium => self.medium,
            SpacingTier::Large => self.large,
        }
    }

    pub fn set(&mut self, tier: SpacingTier, value: f32) {
        match tier {
            SpacingTier::Small => self.small = value,
            SpacingTier::Medium => self.medium = value,
            SpacingTier::Large => self.large = value,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            small: 8.0,
            medium: 16.0,
            large: 24.0,
        }
    }
}
