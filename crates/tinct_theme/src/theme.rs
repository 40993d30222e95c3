//! Theme record and light/dark mode

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinct_core::{parse_any, Oklch};

use crate::error::ThemeError;
use crate::tokens::*;

/// Light or dark mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown mode `{other}`, expected `light` or `dark`")),
        }
    }
}

/// Roles a theme must define in both modes before it can be applied
pub const REQUIRED_ROLES: [ColorRole; 4] = [
    ColorRole::Background,
    ColorRole::Foreground,
    ColorRole::Primary,
    ColorRole::PrimaryForeground,
];

/// A complete theme: light and dark colors plus every non-color token group.
///
/// Values are edited by consuming the theme and returning the edited copy:
///
/// ```rust
/// use tinct_core::Oklch;
/// use tinct_theme::{ColorRole, ThemeData, ThemeMode};
///
/// let theme = ThemeData::default()
///     .with_color(ThemeMode::Light, ColorRole::Primary, Oklch::new(0.62, 0.19, 259.81));
/// assert_eq!(
///     theme.colors(ThemeMode::Light).token(ColorRole::Primary).unwrap().value(),
///     "oklch(0.6200 0.1900 259.8100)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub brand: BrandTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
    #[serde(default)]
    pub borders: BorderTokens,
    #[serde(default)]
    pub scroll: ScrollTokens,
    pub light_colors: ThemeColors,
    pub dark_colors: ThemeColors,
    #[serde(default)]
    pub typography: TypographyTokens,
    #[serde(default)]
    pub shadows: ShadowTokens,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ThemeData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            author: String::new(),
            version: default_version(),
            brand: BrandTokens::default(),
            spacing: SpacingTokens::default(),
            borders: BorderTokens::default(),
            scroll: ScrollTokens::default(),
            light_colors: ThemeColors::new(),
            dark_colors: ThemeColors::new(),
            typography: TypographyTokens::default(),
            shadows: ShadowTokens::default(),
        }
    }

    pub fn colors(&self, mode: ThemeMode) -> &ThemeColors {
        match mode {
            ThemeMode::Light => &self.light_colors,
            ThemeMode::Dark => &self.dark_colors,
        }
    }

    fn colors_mut(&mut self, mode: ThemeMode) -> &mut ThemeColors {
        match mode {
            ThemeMode::Light => &mut self.light_colors,
            ThemeMode::Dark => &mut self.dark_colors,
        }
    }

    /// Both modes must define every role in [`REQUIRED_ROLES`]
    pub fn validate(&self) -> Result<(), ThemeError> {
        for mode in ThemeMode::ALL {
            let missing = self.colors(mode).missing(&REQUIRED_ROLES);
            if !missing.is_empty() {
                return Err(ThemeError::IncompleteTheme { mode, missing });
            }
        }
        Ok(())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_colors(mut self, mode: ThemeMode, colors: ThemeColors) -> Self {
        *self.colors_mut(mode) = colors;
        self
    }

    /// Edit one mode's colors
    pub fn map_colors(mut self, mode: ThemeMode, f: impl FnOnce(ThemeColors) -> ThemeColors) -> Self {
        let colors = std::mem::take(self.colors_mut(mode));
        *self.colors_mut(mode) = f(colors);
        self
    }

    /// Set one role's color, propagating to roles linked to it
    pub fn with_color(self, mode: ThemeMode, role: ColorRole, oklch: Oklch) -> Self {
        self.map_colors(mode, |colors| colors.with_color(role, oklch))
    }

    /// Set one role's color from hex, `rgb()`, `hsl()` or `oklch()` text
    pub fn with_css_color(
        self,
        mode: ThemeMode,
        role: ColorRole,
        input: &str,
    ) -> Result<Self, ThemeError> {
        let oklch = parse_any(input)?;
        Ok(self.with_color(mode, role, oklch))
    }

    pub fn map_radii(mut self, f: impl FnOnce(&mut BorderRadii)) -> Self {
        f(&mut self.borders.radii);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.borders.width = width;
        self
    }

    pub fn with_typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_text_style(mut self, element: TextElement, style: TextStyle) -> Self {
        *self.typography.get_mut(element) = style;
        self
    }

    pub fn with_brand(mut self, brand: BrandTokens) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_shadows(mut self, shadows: ShadowTokens) -> Self {
        self.shadows = shadows;
        self
    }

    pub fn with_shadow(mut self, step: ShadowStep, shadow: Shadow) -> Self {
        *self.shadows.get_mut(step) = shadow;
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollTokens) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("dim".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn empty_theme_is_incomplete() {
        let err = ThemeData::new("empty", "Empty").validate().unwrap_err();
        match err {
            ThemeError::IncompleteTheme { mode, missing } => {
                assert_eq!(mode, ThemeMode::Light);
                assert_eq!(missing, REQUIRED_ROLES.to_vec());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn incomplete_dark_mode_is_reported() {
        let colors = ThemeColors::from_oklch(REQUIRED_ROLES.map(|role| (role, Oklch::WHITE)));
        let theme = ThemeData::new("half", "Half")
            .with_colors(ThemeMode::Light, colors.clone())
            .with_colors(ThemeMode::Dark, colors.without(ColorRole::PrimaryForeground));
        let err = theme.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "dark colors are missing required roles: primary-foreground"
        );
    }

    #[test]
    fn css_color_edits_propagate_or_fail() {
        let theme = ThemeData::default()
            .map_colors(ThemeMode::Dark, |c| c.link(ColorRole::Ring, ColorRole::Primary))
            .with_css_color(ThemeMode::Dark, ColorRole::Primary, "#ff0000")
            .unwrap();
        let dark = theme.colors(ThemeMode::Dark);
        assert_eq!(dark.token(ColorRole::Primary).unwrap().hex(), "#ff0000");
        assert_eq!(dark.oklch(ColorRole::Ring), dark.oklch(ColorRole::Primary));

        let err = theme
            .with_css_color(ThemeMode::Dark, ColorRole::Primary, "blurple")
            .unwrap_err();
        assert!(matches!(err, ThemeError::Color(_)));
    }

    #[test]
    fn editors_leave_the_original_untouched() {
        let theme = ThemeData::default();
        let edited = theme
            .clone()
            .map_radii(|radii| radii.set_global(12.0))
            .with_border_width(2.0);
        assert_eq!(theme.borders.radii.global(), DEFAULT_RADIUS);
        assert_eq!(edited.borders.radii.global(), 12.0);
        assert_eq!(edited.borders.width, 2.0);
    }

    #[test]
    fn toml_round_trip_keeps_links() {
        let theme = ThemeData::default()
            .map_colors(ThemeMode::Light, |c| c.link(ColorRole::Ring, ColorRole::Primary))
            .map_radii(|radii| radii.set_dependent(RadiusFamily::Card, 14.0));
        let text = theme.to_toml().unwrap();
        let back = ThemeData::from_toml_str(&text).unwrap();
        assert_eq!(
            back.light_colors.parent(ColorRole::Ring),
            Some(ColorRole::Primary)
        );
        assert_eq!(back.borders.radii.effective(RadiusFamily::Card), 14.0);
        assert_eq!(back.light_colors, theme.light_colors);
    }

    #[test]
    fn bare_strings_become_tokens() {
        let theme = ThemeData::from_toml_str(
            r##"
            id = "mini"
            name = "Mini"

            [light_colors]
            background = "#ffffff"
            foreground = "oklch(0.145 0 0)"
            primary = "rgb(59, 130, 246)"
            primary-foreground = "var(--white)"

            [dark_colors]
            background = "#000000"
            "##,
        )
        .unwrap();

        let light = theme.colors(ThemeMode::Light);
        assert_eq!(light.token(ColorRole::Background).unwrap().hex(), "#ffffff");
        assert_eq!(light.token(ColorRole::Background).unwrap().name(), "background");
        assert_eq!(
            light.get(ColorRole::PrimaryForeground),
            Some(&ColorEntry::Legacy("var(--white)".into()))
        );
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::IncompleteTheme { mode: ThemeMode::Dark, .. })
        ));
    }
}
