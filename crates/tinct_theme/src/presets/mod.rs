//! Built-in theme presets inspired by shadcn base color presets.

use std::fmt::{Display, Formatter};

use tinct_core::Oklch;

use crate::theme::{ThemeData, ThemeMode};
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Greyscale preset.
    Neutral,
    /// Neutral surfaces with a blue primary.
    Blue,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Blue => "blue",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Blue => "Blue",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Neutral, ThemePreset::Blue];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build the theme for this preset.
    pub fn theme(self) -> ThemeData {
        match self {
            Self::Neutral => preset_theme(self, neutral_light(), neutral_dark()),
            Self::Blue => preset_theme(self, blue_light(), blue_dark())
                .map_radii(|radii| radii.set_global(10.0))
                .map_colors(ThemeMode::Light, link_to_primary)
                .map_colors(ThemeMode::Dark, link_to_primary),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Default for ThemeData {
    fn default() -> Self {
        ThemePreset::Neutral.theme()
    }
}

/// Focus rings and the sidebar primary follow the brand color
fn link_to_primary(colors: ThemeColors) -> ThemeColors {
    colors
        .link(ColorRole::Ring, ColorRole::Primary)
        .link(ColorRole::SidebarPrimary, ColorRole::Primary)
        .link(ColorRole::SidebarRing, ColorRole::Ring)
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: Oklch,
    foreground: Oklch,
    card: Oklch,
    primary: Oklch,
    primary_foreground: Oklch,
    secondary: Oklch,
    muted: Oklch,
    muted_foreground: Oklch,
    accent: Oklch,
    destructive: Oklch,
    warning: Oklch,
    success: Oklch,
    status_foreground: Oklch,
    border: Oklch,
    input: Oklch,
    ring: Oklch,
    charts: [Oklch; 5],
    sidebar: Oklch,
    sidebar_primary: Oklch,
    scrollbar_thumb: Oklch,
}

fn preset_theme(preset: ThemePreset, light: BasePalette, dark: BasePalette) -> ThemeData {
    let description = format!("{} preset", preset.display_name());
    ThemeData::new(preset.id(), preset.display_name())
        .with_description(description)
        .with_colors(ThemeMode::Light, build_colors(light))
        .with_colors(ThemeMode::Dark, build_colors(dark))
}

fn build_colors(base: BasePalette) -> ThemeColors {
    use ColorRole::*;

    ThemeColors::from_oklch([
        (Background, base.background),
        (Foreground, base.foreground),
        (Card, base.card),
        (CardForeground, base.foreground),
        (Popover, base.card),
        (PopoverForeground, base.foreground),
        (Primary, base.primary),
        (PrimaryForeground, base.primary_foreground),
        (Secondary, base.secondary),
        (SecondaryForeground, base.foreground),
        (Muted, base.muted),
        (MutedForeground, base.muted_foreground),
        (Accent, base.accent),
        (AccentForeground, base.foreground),
        (Destructive, base.destructive),
        (DestructiveForeground, base.status_foreground),
        (Warning, base.warning),
        (WarningForeground, base.status_foreground),
        (Success, base.success),
        (SuccessForeground, base.status_foreground),
        (Border, base.border),
        (Input, base.input),
        (Ring, base.ring),
        (Chart1, base.charts[0]),
        (Chart2, base.charts[1]),
        (Chart3, base.charts[2]),
        (Chart4, base.charts[3]),
        (Chart5, base.charts[4]),
        (Sidebar, base.sidebar),
        (SidebarForeground, base.foreground),
        (SidebarPrimary, base.sidebar_primary),
        (SidebarPrimaryForeground, base.primary_foreground),
        (SidebarAccent, base.accent),
        (SidebarAccentForeground, base.foreground),
        (SidebarBorder, base.border),
        (SidebarRing, base.ring),
        (ScrollbarTrack, base.muted),
        (ScrollbarThumb, base.scrollbar_thumb),
    ])
}

const fn oklch(l: f64, c: f64, h: f64) -> Oklch {
    Oklch { l, c, h }
}

const fn grey(l: f64) -> Oklch {
    oklch(l, 0.0, 0.0)
}

fn neutral_light() -> BasePalette {
    BasePalette {
        background: grey(1.0),
        foreground: grey(0.145),
        card: grey(1.0),
        primary: grey(0.205),
        primary_foreground: grey(0.985),
        secondary: grey(0.97),
        muted: grey(0.97),
        muted_foreground: grey(0.556),
        accent: grey(0.97),
        destructive: oklch(0.577, 0.245, 27.325),
        warning: oklch(0.666, 0.179, 58.318),
        success: oklch(0.527, 0.154, 150.069),
        status_foreground: grey(0.985),
        border: grey(0.922),
        input: grey(0.922),
        ring: grey(0.708),
        charts: [
            oklch(0.646, 0.222, 41.116),
            oklch(0.6, 0.118, 184.704),
            oklch(0.398, 0.07, 227.392),
            oklch(0.828, 0.189, 84.429),
            oklch(0.769, 0.188, 70.08),
        ],
        sidebar: grey(0.985),
        sidebar_primary: grey(0.205),
        scrollbar_thumb: grey(0.87),
    }
}

fn neutral_dark() -> BasePalette {
    BasePalette {
        background: grey(0.145),
        foreground: grey(0.985),
        card: grey(0.205),
        primary: grey(0.922),
        primary_foreground: grey(0.205),
        secondary: grey(0.269),
        muted: grey(0.269),
        muted_foreground: grey(0.708),
        accent: grey(0.269),
        destructive: oklch(0.704, 0.191, 22.216),
        warning: oklch(0.769, 0.188, 70.08),
        success: oklch(0.723, 0.219, 149.579),
        status_foreground: grey(0.145),
        border: grey(0.275),
        input: grey(0.325),
        ring: grey(0.556),
        charts: [
            oklch(0.488, 0.243, 264.376),
            oklch(0.696, 0.17, 162.48),
            oklch(0.769, 0.188, 70.08),
            oklch(0.627, 0.265, 303.9),
            oklch(0.645, 0.246, 16.439),
        ],
        sidebar: grey(0.205),
        sidebar_primary: oklch(0.488, 0.243, 264.376),
        scrollbar_thumb: grey(0.371),
    }
}

fn blue_light() -> BasePalette {
    BasePalette {
        primary: oklch(0.62, 0.19, 259.81),
        primary_foreground: grey(0.985),
        ring: oklch(0.62, 0.19, 259.81),
        sidebar_primary: oklch(0.62, 0.19, 259.81),
        ..neutral_light()
    }
}

fn blue_dark() -> BasePalette {
    BasePalette {
        primary: oklch(0.7137, 0.1434, 254.624),
        primary_foreground: grey(0.145),
        ring: oklch(0.7137, 0.1434, 254.624),
        sidebar_primary: oklch(0.7137, 0.1434, 254.624),
        ..neutral_dark()
    }
}
