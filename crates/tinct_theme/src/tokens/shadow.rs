//! Shadow tokens for theming

use serde::{Deserialize, Serialize};
use tinct_core::parse_any;

use super::px;

/// Shadow scale steps
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowStep {
    #[serde(rename = "2xs")]
    Xxs,
    Xs,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl ShadowStep {
    pub const ALL: [ShadowStep; 8] = [
        ShadowStep::Xxs,
        ShadowStep::Xs,
        ShadowStep::Sm,
        ShadowStep::Default,
        ShadowStep::Md,
        ShadowStep::Lg,
        ShadowStep::Xl,
        ShadowStep::Xxl,
    ];

    pub fn property(self) -> &'static str {
        match self {
            Self::Xxs => "--shadow-2xs",
            Self::Xs => "--shadow-xs",
            Self::Sm => "--shadow-sm",
            Self::Default => "--shadow",
            Self::Md => "--shadow-md",
            Self::Lg => "--shadow-lg",
            Self::Xl => "--shadow-xl",
            Self::Xxl => "--shadow-2xl",
        }
    }
}

/// A box shadow definition.
///
/// `color` is any text the color parser accepts; `opacity` is applied on
/// top of it when the shadow is rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    #[serde(default)]
    pub spread: f32,
    #[serde(default = "default_shadow_color")]
    pub color: String,
    pub opacity: f32,
}

fn default_shadow_color() -> String {
    "#000000".to_string()
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, opacity: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: default_shadow_color(),
            opacity,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// `box-shadow` text, e.g. `0px 1px 3px 0px rgba(0, 0, 0, 0.1)`.
    ///
    /// `None` when the color cannot be parsed or a geometry value is not
    /// finite.
    pub fn to_css(&self) -> Option<String> {
        let geometry = [self.offset_x, self.offset_y, self.blur, self.spread];
        if !geometry.iter().all(|v| v.is_finite()) || !self.opacity.is_finite() {
            return None;
        }
        let rgb = parse_any(&self.color).ok()?.to_rgb();
        let alpha = self.opacity.clamp(0.0, 1.0);
        Some(format!(
            "{} {} {} {} rgba({}, {}, {}, {})",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur),
            px(self.spread),
            rgb.r,
            rgb.g,
            rgb.b,
            alpha
        ))
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowTokens {
    #[serde(rename = "2xs")]
    pub shadow_2xs: Shadow,
    #[serde(rename = "xs")]
    pub shadow_xs: Shadow,
    #[serde(rename = "sm")]
    pub shadow_sm: Shadow,
    #[serde(rename = "default")]
    pub shadow_default: Shadow,
    #[serde(rename = "md")]
    pub shadow_md: Shadow,
    #[serde(rename = "lg")]
    pub shadow_lg: Shadow,
    #[serde(rename = "xl")]
    pub shadow_xl: Shadow,
    #[serde(rename = "2xl")]
    pub shadow_2xl: Shadow,
}

impl ShadowTokens {
    /// Get shadow by step
    pub fn get(&self, step: ShadowStep) -> &Shadow {
        match step {
            ShadowStep::Xxs => &self.shadow_2xs,
            ShadowStep::Xs => &self.shadow_xs,
            ShadowStep::Sm => &self.shadow_sm,
            ShadowStep::Default => &self.shadow_default,
            ShadowStep::Md => &self.shadow_md,
            ShadowStep::Lg => &self.shadow_lg,
            ShadowStep::Xl => &self.shadow_xl,
            ShadowStep::Xxl => &self.shadow_2xl,
        }
    }

    pub fn get_mut(&mut self, step: ShadowStep) -> &mut Shadow {
        match step {
            ShadowStep::Xxs => &mut self.shadow_2xs,
            ShadowStep::Xs => &mut self.shadow_xs,
            ShadowStep::Sm => &mut self.shadow_sm,
            ShadowStep::Default => &mut self.shadow_default,
            ShadowStep::Md => &mut self.shadow_md,
            ShadowStep::Lg => &mut self.shadow_lg,
            ShadowStep::Xl => &mut self.shadow_xl,
            ShadowStep::Xxl => &mut self.shadow_2xl,
        }
    }
}

/// Scale tuned for light backgrounds
impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            shadow_2xs: Shadow::new(0.0, 1.0, 1.0, 0.0, 0.03),
            shadow_xs: Shadow::new(0.0, 1.0, 2.0, 0.0, 0.05),
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, 0.08),
            shadow_default: Shadow::new(0.0, 1.0, 3.0, 0.0, 0.1),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, 0.1),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, 0.1),
            shadow_xl: Shadow::new(0.0, 20.0, 25.0, -5.0, 0.1),
            shadow_2xl: Shadow::new(0.0, 25.0, 50.0, -12.0, 0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn css_text() {
        let shadow = Shadow::new(0.0, 4.0, 6.0, -1.0, 0.1);
        assert_eq!(
            shadow.to_css().as_deref(),
            Some("0px 4px 6px -1px rgba(0, 0, 0, 0.1)")
        );
    }

    #[test]
    fn colored_shadow() {
        let shadow = Shadow::new(1.5, 2.0, 0.0, 0.0, 2.0).with_color("#ff0000");
        assert_eq!(
            shadow.to_css().as_deref(),
            Some("1.5px 2px 0px 0px rgba(255, 0, 0, 1)")
        );
    }

    #[test]
    fn unusable_shadow_has_no_css() {
        assert_eq!(Shadow::new(0.0, 1.0, 1.0, 0.0, 0.1).with_color("blurple").to_css(), None);
        assert_eq!(Shadow::new(f32::NAN, 1.0, 1.0, 0.0, 0.1).to_css(), None);
    }

    #[test]
    fn every_step_has_a_distinct_property() {
        let mut names: Vec<_> = ShadowStep::ALL.iter().map(|s| s.property()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
