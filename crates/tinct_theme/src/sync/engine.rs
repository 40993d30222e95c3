//! Token synchronization engine
//!
//! Turns theme values into a flat map of property names to strings and
//! writes that map into a [`StyleTarget`]. Every apply call recomputes its
//! whole map and writes it, so repeating a call leaves the target unchanged
//! and the last call wins.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::properties::{owned_properties, text_property, FONT_MONO, FONT_SANS, FONT_SERIF};
use super::target::StyleTarget;
use crate::config::SyncConfig;
use crate::error::ThemeError;
use crate::theme::{ThemeData, ThemeMode};
use crate::tokens::*;

/// Property name to value, sorted by name
pub type PropertyMap = BTreeMap<String, String>;

#[derive(Clone, Debug, Default)]
pub struct SyncEngine {
    config: SyncConfig,
}

impl SyncEngine {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// One entry per role present in `colors`
    pub fn color_properties(&self, colors: &ThemeColors) -> PropertyMap {
        colors
            .iter()
            .map(|(role, entry)| (role.property(), self.color_value(role, entry)))
            .collect()
    }

    /// Entries for the scrollbar roles present in `colors`
    pub fn scrollbar_properties(&self, colors: &ThemeColors) -> PropertyMap {
        ColorRole::SCROLLBAR
            .iter()
            .filter_map(|role| {
                colors
                    .get(*role)
                    .map(|entry| (role.property(), self.color_value(*role, entry)))
            })
            .collect()
    }

    /// Full property map for `theme` in `mode`
    pub fn theme_properties(&self, theme: &ThemeData, mode: ThemeMode) -> PropertyMap {
        let mut map = self.color_properties(theme.colors(mode));
        self.typography_properties(&theme.typography, &mut map);
        self.brand_properties(&theme.brand, &mut map);
        self.border_properties(&theme.borders, &mut map);
        for tier in SpacingTier::ALL {
            map.insert(tier.property().to_string(), self.length(theme.spacing.get(tier)));
        }
        for step in ShadowStep::ALL {
            let value = theme.shadows.get(step).to_css().unwrap_or_else(|| {
                warn!("shadow {} cannot be rendered, using fallback", step.property());
                self.config.fallbacks.shadow.clone()
            });
            map.insert(step.property().to_string(), value);
        }
        self.scroll_properties(&theme.scroll, &mut map);
        map
    }

    /// Write every role present in `colors`; absent roles are left alone
    pub fn apply_colors<T: StyleTarget + ?Sized>(&self, target: &mut T, colors: &ThemeColors) -> usize {
        let written = write_map(target, &self.color_properties(colors));
        debug!("applied {} color properties", written);
        written
    }

    /// Write colors for `mode` and every non-color token group
    pub fn apply_theme<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        theme: &ThemeData,
        mode: ThemeMode,
    ) -> usize {
        let written = write_map(target, &self.theme_properties(theme, mode));
        debug!("applied theme `{}` ({} mode): {} properties", theme.id, mode, written);
        written
    }

    /// Write only the scrollbar track and thumb colors
    pub fn apply_scrollbar_colors<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        colors: &ThemeColors,
    ) -> usize {
        let written = write_map(target, &self.scrollbar_properties(colors));
        debug!("applied {} scrollbar properties", written);
        written
    }

    /// Validate, then apply. An incomplete theme writes nothing.
    pub fn load_theme<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        theme: &ThemeData,
        mode: ThemeMode,
    ) -> Result<usize, ThemeError> {
        theme.validate()?;
        Ok(self.apply_theme(target, theme, mode))
    }

    /// Remove every property this engine can write. Flags are kept.
    pub fn reset_all<T: StyleTarget + ?Sized>(&self, target: &mut T) -> usize {
        let names = owned_properties();
        for name in names {
            target.remove_property(name);
        }
        debug!("removed {} owned properties", names.len());
        names.len()
    }

    /// Set or clear the dark-mode flag
    pub fn set_mode<T: StyleTarget + ?Sized>(&self, target: &mut T, mode: ThemeMode) {
        target.set_flag(&self.config.dark_class, mode.is_dark());
        debug!("mode set to {}", mode);
    }

    fn color_value(&self, role: ColorRole, entry: &ColorEntry) -> String {
        match entry.css_value() {
            Some(value) => value.to_string(),
            None => {
                warn!("color {} has no value, using fallback", role);
                self.config.fallbacks.color.clone()
            }
        }
    }

    fn typography_properties(&self, typography: &TypographyTokens, map: &mut PropertyMap) {
        for element in TextElement::ALL {
            let style = typography.get(element);
            for attribute in TextAttribute::ALL {
                let value = match attribute {
                    TextAttribute::FontFamily => self.font_family(&style.font_family),
                    TextAttribute::FontSize => self.length(style.font_size),
                    TextAttribute::FontWeight => self.font_weight(style.font_weight),
                    TextAttribute::LineHeight => self.line_height(style.line_height),
                    TextAttribute::LetterSpacing => self.letter_spacing(style.letter_spacing),
                };
                map.insert(text_property(element, attribute), value);
            }
        }
    }

    fn brand_properties(&self, brand: &BrandTokens, map: &mut PropertyMap) {
        map.insert(FONT_SANS.to_string(), self.font_family(&brand.font_sans));
        map.insert(FONT_SERIF.to_string(), self.font_family(&brand.font_serif));
        map.insert(FONT_MONO.to_string(), self.font_family(&brand.font_mono));
    }

    fn border_properties(&self, borders: &BorderTokens, map: &mut PropertyMap) {
        let radii = &borders.radii;
        map.insert(GLOBAL_RADIUS_PROPERTY.to_string(), self.length(radii.global()));
        for family in RadiusFamily::ALL {
            map.insert(family.property().to_string(), self.length(radii.effective(family)));
            map.insert(family.inner_property().to_string(), self.length(radii.inner(family)));
        }
        map.insert(BORDER_WIDTH_PROPERTY.to_string(), self.length(borders.width));
    }

    fn scroll_properties(&self, scroll: &ScrollTokens, map: &mut PropertyMap) {
        map.insert(ScrollTokens::WIDTH_PROPERTY.to_string(), self.length(scroll.width));
        map.insert(
            ScrollTokens::BEHAVIOR_PROPERTY.to_string(),
            scroll.behavior.as_str().to_string(),
        );
        map.insert(
            ScrollTokens::VISIBILITY_PROPERTY.to_string(),
            scroll.visibility().to_string(),
        );
        map.insert(
            ScrollTokens::TRACK_RADIUS_PROPERTY.to_string(),
            self.length(scroll.track_radius),
        );
        map.insert(
            ScrollTokens::THUMB_RADIUS_PROPERTY.to_string(),
            self.length(scroll.thumb_radius),
        );
    }

    fn font_family(&self, family: &str) -> String {
        let family = family.trim();
        if family.is_empty() {
            warn!("empty font family, using fallback");
            self.config.fallbacks.font_family.clone()
        } else {
            family.to_string()
        }
    }

    fn length(&self, value: f32) -> String {
        if value.is_finite() && value >= 0.0 {
            px(value)
        } else {
            warn!("invalid length {}, using fallback", value);
            self.config.fallbacks.length.clone()
        }
    }

    fn font_weight(&self, weight: u16) -> String {
        if (1..=1000).contains(&weight) {
            weight.to_string()
        } else {
            warn!("invalid font weight {}, using fallback", weight);
            self.config.fallbacks.number.clone()
        }
    }

    fn line_height(&self, value: f32) -> String {
        if value.is_finite() && value > 0.0 {
            value.to_string()
        } else {
            warn!("invalid line height {}, using fallback", value);
            self.config.fallbacks.number.clone()
        }
    }

    fn letter_spacing(&self, value: f32) -> String {
        if !value.is_finite() {
            warn!("invalid letter spacing {}, using fallback", value);
            return self.config.fallbacks.number.clone();
        }
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value}em")
    }
}

fn write_map<T: StyleTarget + ?Sized>(target: &mut T, map: &PropertyMap) -> usize {
    for (name, value) in map {
        trace!("{}: {}", name, value);
        target.set_property(name, value);
    }
    map.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::MemoryStyleTarget;
    use pretty_assertions::assert_eq;
    use tinct_core::Oklch;

    #[test]
    fn theme_map_covers_every_owned_property() {
        let engine = SyncEngine::default();
        let map = engine.theme_properties(&ThemeData::default(), ThemeMode::Light);
        let mut names: Vec<&String> = map.keys().collect();
        let mut owned: Vec<&String> = owned_properties().iter().collect();
        names.sort();
        owned.sort();
        assert_eq!(names, owned);
    }

    #[test]
    fn typography_values() {
        let engine = SyncEngine::default();
        let map = engine.theme_properties(&ThemeData::default(), ThemeMode::Light);
        assert_eq!(map["--h1-font-size"], "36px");
        assert_eq!(map["--h1-font-weight"], "800");
        assert_eq!(map["--h1-line-height"], "1.1");
        assert_eq!(map["--h1-letter-spacing"], "-0.025em");
        assert_eq!(map["--p-letter-spacing"], "0em");
        assert_eq!(map["--blockquote-font-family"], SERIF_STACK);
    }

    #[test]
    fn invalid_values_use_fallbacks() {
        let engine = SyncEngine::default();
        let theme = ThemeData::default()
            .with_text_style(TextElement::H2, TextStyle::new("  ", f32::NAN, 0, -1.0, f32::INFINITY))
            .with_spacing(SpacingTokens {
                small: -4.0,
                ..SpacingTokens::default()
            })
            .with_shadow(
                ShadowStep::Lg,
                Shadow::new(0.0, 1.0, 2.0, 0.0, 0.1).with_color("not-a-color"),
            )
            .map_colors(ThemeMode::Light, |c| {
                c.with_entry(ColorRole::Accent, ColorEntry::Legacy(String::new()))
            });
        let map = engine.theme_properties(&theme, ThemeMode::Light);

        assert_eq!(map["--h2-font-family"], "ui-sans-serif, system-ui, sans-serif");
        assert_eq!(map["--h2-font-size"], "0px");
        assert_eq!(map["--h2-font-weight"], "normal");
        assert_eq!(map["--h2-line-height"], "normal");
        assert_eq!(map["--h2-letter-spacing"], "normal");
        assert_eq!(map["--spacing-sm"], "0px");
        assert_eq!(map["--shadow-lg"], "none");
        assert_eq!(map["--accent"], "oklch(0.5000 0.0000 0.0000)");
    }

    #[test]
    fn configured_fallbacks_are_used() {
        let mut config = SyncConfig::default();
        config.fallbacks.color = "transparent".into();
        let engine = SyncEngine::new(config);
        let colors = ThemeColors::new().with_entry(ColorRole::Border, ColorEntry::Legacy(" ".into()));
        assert_eq!(engine.color_properties(&colors)["--border"], "transparent");
    }

    #[test]
    fn legacy_value_written_verbatim() {
        let engine = SyncEngine::default();
        let colors = ThemeColors::from_oklch([(ColorRole::Primary, Oklch::new(0.62, 0.19, 259.81))])
            .with_entry(ColorRole::Ring, ColorEntry::Legacy("hsl(var(--ring))".into()));
        let map = engine.color_properties(&colors);
        assert_eq!(map.len(), 2);
        assert_eq!(map["--primary"], "oklch(0.6200 0.1900 259.8100)");
        assert_eq!(map["--ring"], "hsl(var(--ring))");
    }

    #[test]
    fn reset_keeps_foreign_properties_and_flags() {
        let engine = SyncEngine::default();
        let mut target = MemoryStyleTarget::new();
        target.set_property("--app-header-height", "64px");
        engine.apply_theme(&mut target, &ThemeData::default(), ThemeMode::Dark);
        engine.set_mode(&mut target, ThemeMode::Dark);

        engine.reset_all(&mut target);
        assert_eq!(target.len(), 1);
        assert_eq!(target.property("--app-header-height").as_deref(), Some("64px"));
        assert!(target.has_flag("dark"));
    }
}
