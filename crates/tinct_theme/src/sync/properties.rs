//! Names of every property the engine writes

use std::sync::OnceLock;

use crate::tokens::*;

pub const FONT_SANS: &str = "--font-sans";
pub const FONT_SERIF: &str = "--font-serif";
pub const FONT_MONO: &str = "--font-mono";

/// `--<element>-<attribute>`, e.g. `--h1-font-size`
pub fn text_property(element: TextElement, attribute: TextAttribute) -> String {
    format!("--{}-{}", element.key(), attribute.key())
}

/// Every property name a sync call can write.
///
/// Built once; the list is fixed for the process lifetime.
pub fn owned_properties() -> &'static [String] {
    static OWNED: OnceLock<Vec<String>> = OnceLock::new();
    OWNED.get_or_init(|| {
        let mut names: Vec<String> = ColorRole::ALL.iter().map(|role| role.property()).collect();
        for element in TextElement::ALL {
            for attribute in TextAttribute::ALL {
                names.push(text_property(element, attribute));
            }
        }
        names.extend([FONT_SANS, FONT_SERIF, FONT_MONO].map(String::from));
        names.push(GLOBAL_RADIUS_PROPERTY.to_string());
        for family in RadiusFamily::ALL {
            names.push(family.property().to_string());
            names.push(family.inner_property().to_string());
        }
        names.push(BORDER_WIDTH_PROPERTY.to_string());
        names.extend(SpacingTier::ALL.iter().map(|tier| tier.property().to_string()));
        names.extend(ShadowStep::ALL.iter().map(|step| step.property().to_string()));
        names.extend(
            [
                ScrollTokens::WIDTH_PROPERTY,
                ScrollTokens::BEHAVIOR_PROPERTY,
                ScrollTokens::VISIBILITY_PROPERTY,
                ScrollTokens::TRACK_RADIUS_PROPERTY,
                ScrollTokens::THUMB_RADIUS_PROPERTY,
            ]
            .map(String::from),
        );
        names
    })
}
