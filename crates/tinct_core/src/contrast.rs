//! WCAG contrast ratio and grading
//!
//! Pure functions; nothing here fails. Unresolvable input surfaces as `None`.

use std::fmt;

use serde::Serialize;

use crate::color::{parse, srgb_decode, Oklch};

/// WCAG 2.1 thresholds
pub struct ContrastThresholds;

impl ContrastThresholds {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AAA_LARGE: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ContrastGrade {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
}

impl ContrastGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }

    pub fn passes(self) -> bool {
        self != Self::Fail
    }
}

impl fmt::Display for ContrastGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grades for normal and large text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GradePair {
    pub grade: ContrastGrade,
    pub large_text_grade: ContrastGrade,
}

/// Ratio and grades for one color pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub grade: ContrastGrade,
    pub large_text_grade: ContrastGrade,
}

/// Relative luminance from linearized sRGB channels
pub fn relative_luminance(color: &Oklch) -> f64 {
    let [r, g, b] = color.to_rgb().to_unit();
    0.2126 * srgb_decode(r) + 0.7152 * srgb_decode(g) + 0.0722 * srgb_decode(b)
}

/// `(lighter + 0.05) / (darker + 0.05)`; symmetric in its arguments
pub fn contrast_ratio(bg: &Oklch, fg: &Oklch) -> f64 {
    let a = relative_luminance(bg);
    let b = relative_luminance(fg);
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

/// Contrast ratio between two canonical `oklch(l c h)` strings
pub fn contrast_ratio_css(bg: &str, fg: &str) -> Option<f64> {
    Some(contrast_ratio(&parse(bg)?, &parse(fg)?))
}

pub fn contrast_grade(ratio: f64) -> GradePair {
    let grade = if ratio >= ContrastThresholds::AAA_NORMAL {
        ContrastGrade::Aaa
    } else if ratio >= ContrastThresholds::AA_NORMAL {
        ContrastGrade::Aa
    } else {
        ContrastGrade::Fail
    };
    let large_text_grade = if ratio >= ContrastThresholds::AAA_LARGE {
        ContrastGrade::Aaa
    } else if ratio >= ContrastThresholds::AA_LARGE {
        ContrastGrade::Aa
    } else {
        ContrastGrade::Fail
    };
    GradePair {
        grade,
        large_text_grade,
    }
}

pub fn evaluate(bg: &Oklch, fg: &Oklch) -> ContrastResult {
    let ratio = contrast_ratio(bg, fg);
    let GradePair {
        grade,
        large_text_grade,
    } = contrast_grade(ratio);
    ContrastResult {
        ratio,
        grade,
        large_text_grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn white_on_black_is_maximal() {
        let ratio = contrast_ratio_css("oklch(1 0 0)", "oklch(0 0 0)").unwrap();
        assert!((ratio - 21.0).abs() < 1e-6, "ratio = {ratio}");
        assert_eq!(contrast_grade(ratio).grade, ContrastGrade::Aaa);
    }

    #[test]
    fn identical_colors_have_unit_ratio() {
        let grey = Oklch::new(0.6, 0.0, 0.0);
        assert!((contrast_ratio(&grey, &grey) - 1.0).abs() < 1e-12);
        let result = evaluate(&grey, &grey);
        assert_eq!(result.grade, ContrastGrade::Fail);
        assert_eq!(result.large_text_grade, ContrastGrade::Fail);
    }

    #[test]
    fn thresholds_are_monotonic() {
        assert_eq!(
            contrast_grade(8.0),
            GradePair {
                grade: ContrastGrade::Aaa,
                large_text_grade: ContrastGrade::Aaa
            }
        );
        assert_eq!(
            contrast_grade(7.0),
            GradePair {
                grade: ContrastGrade::Aaa,
                large_text_grade: ContrastGrade::Aaa
            }
        );
        assert_eq!(
            contrast_grade(4.5),
            GradePair {
                grade: ContrastGrade::Aa,
                large_text_grade: ContrastGrade::Aaa
            }
        );
        assert_eq!(
            contrast_grade(3.0),
            GradePair {
                grade: ContrastGrade::Fail,
                large_text_grade: ContrastGrade::Aa
            }
        );
        assert_eq!(
            contrast_grade(2.9),
            GradePair {
                grade: ContrastGrade::Fail,
                large_text_grade: ContrastGrade::Fail
            }
        );
        assert_eq!(contrast_grade(f64::NAN).grade, ContrastGrade::Fail);
    }

    #[test]
    fn unparseable_input_is_none() {
        assert_eq!(contrast_ratio_css("#fff", "oklch(0 0 0)"), None);
        assert_eq!(contrast_ratio_css("oklch(1 0 0)", "oklch(0 0)"), None);
    }

    #[test]
    fn grade_display() {
        assert_eq!(ContrastGrade::Aaa.to_string(), "AAA");
        assert_eq!(ContrastGrade::Aa.to_string(), "AA");
        assert_eq!(ContrastGrade::Fail.to_string(), "Fail");
    }
}
