//! Contrast audit over a fixed catalogue of background/foreground pairs

use std::fmt;

use serde::Serialize;
use tinct_core::{evaluate, ContrastResult};

use crate::tokens::{ColorRole, ThemeColors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairCategory {
    ContentContainer,
    Interactive,
    NavigationFunctional,
}

impl PairCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::ContentContainer => "Content & containers",
            Self::Interactive => "Interactive",
            Self::NavigationFunctional => "Navigation & functional",
        }
    }
}

impl fmt::Display for PairCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContrastPair {
    pub category: PairCategory,
    pub background: ColorRole,
    pub foreground: ColorRole,
}

const fn pair(category: PairCategory, background: ColorRole, foreground: ColorRole) -> ContrastPair {
    ContrastPair {
        category,
        background,
        foreground,
    }
}

pub const CONTRAST_PAIRS: &[ContrastPair] = {
    use ColorRole::*;
    use PairCategory::*;
    &[
        pair(ContentContainer, Background, Foreground),
        pair(ContentContainer, Card, CardForeground),
        pair(ContentContainer, Popover, PopoverForeground),
        pair(ContentContainer, Muted, MutedForeground),
        pair(Interactive, Primary, PrimaryForeground),
        pair(Interactive, Secondary, SecondaryForeground),
        pair(Interactive, Accent, AccentForeground),
        pair(Interactive, Destructive, DestructiveForeground),
        pair(Interactive, Warning, WarningForeground),
        pair(Interactive, Success, SuccessForeground),
        pair(NavigationFunctional, Sidebar, SidebarForeground),
        pair(NavigationFunctional, SidebarPrimary, SidebarPrimaryForeground),
        pair(NavigationFunctional, SidebarAccent, SidebarAccentForeground),
        pair(NavigationFunctional, Background, Ring),
        pair(NavigationFunctional, ScrollbarTrack, ScrollbarThumb),
    ]
};

/// Result for one catalogue pair; `result` is `None` when either role is
/// missing or unresolvable
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairReport {
    pub pair: ContrastPair,
    pub result: Option<ContrastResult>,
}

/// Grade every catalogue pair against `colors`
pub fn audit(colors: &ThemeColors) -> Vec<PairReport> {
    CONTRAST_PAIRS
        .iter()
        .map(|pair| {
            let result = colors
                .oklch(pair.background)
                .zip(colors.oklch(pair.foreground))
                .map(|(bg, fg)| evaluate(&bg, &fg));
            PairReport { pair: *pair, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::{ContrastGrade, Oklch};

    #[test]
    fn missing_roles_have_no_result() {
        let colors = ThemeColors::from_oklch([
            (ColorRole::Background, Oklch::WHITE),
            (ColorRole::Foreground, Oklch::BLACK),
        ]);
        let reports = audit(&colors);
        assert_eq!(reports.len(), CONTRAST_PAIRS.len());

        let first = reports[0].result.unwrap();
        assert_eq!(first.grade, ContrastGrade::Aaa);
        assert!(reports[1..].iter().all(|report| report.result.is_none()));
    }

    #[test]
    fn every_category_is_represented() {
        for category in [
            PairCategory::ContentContainer,
            PairCategory::Interactive,
            PairCategory::NavigationFunctional,
        ] {
            assert!(CONTRAST_PAIRS.iter().any(|pair| pair.category == category));
        }
    }
}
