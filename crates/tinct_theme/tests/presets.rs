use tinct_theme::{ColorRole, RadiusFamily, ThemeMode, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["blue", "neutral"]);
}

#[test]
fn presets_have_distinct_light_and_dark_primary() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        assert_ne!(
            theme.colors(ThemeMode::Light).oklch(ColorRole::Primary),
            theme.colors(ThemeMode::Dark).oklch(ColorRole::Primary),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
    }
}

#[test]
fn blue_primary_is_canonical() {
    let theme = ThemePreset::Blue.theme();
    let primary = theme.colors(ThemeMode::Light).token(ColorRole::Primary).unwrap();
    assert_eq!(primary.value(), "oklch(0.6200 0.1900 259.8100)");
}

#[test]
fn blue_focus_rings_follow_primary() {
    let theme = ThemePreset::Blue.theme();
    for mode in ThemeMode::ALL {
        let colors = theme.colors(mode);
        assert_eq!(colors.parent(ColorRole::Ring), Some(ColorRole::Primary));
        assert_eq!(colors.parent(ColorRole::SidebarRing), Some(ColorRole::Ring));
    }

    let edited = theme.with_color(
        ThemeMode::Dark,
        ColorRole::Primary,
        tinct_core::Oklch::new(0.7, 0.15, 150.0),
    );
    let dark = edited.colors(ThemeMode::Dark);
    assert_eq!(dark.oklch(ColorRole::SidebarRing), dark.oklch(ColorRole::Primary));
    assert_eq!(dark.oklch(ColorRole::SidebarPrimary), dark.oklch(ColorRole::Primary));
}

#[test]
fn preset_dependent_radii_start_linked() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for family in RadiusFamily::ALL {
            assert!(
                theme.borders.radii.is_linked(family),
                "preset={preset:?} family={family:?}"
            );
        }
    }
}

#[test]
fn presets_use_readable_body_text() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for mode in ThemeMode::ALL {
            let colors = theme.colors(mode);
            let ratio = tinct_core::contrast_ratio(
                &colors.oklch(ColorRole::Background).unwrap(),
                &colors.oklch(ColorRole::Foreground).unwrap(),
            );
            assert!(ratio >= 7.0, "preset={preset:?} mode={mode:?} ratio={ratio}");
        }
    }
}

#[test]
fn blue_links_survive_replacing_primary() {
    let replaced = tinct_core::Oklch::new(0.5, 0.2, 300.0);
    let theme = ThemePreset::Blue.theme().map_colors(ThemeMode::Light, |colors| {
        colors.with_entry(
            ColorRole::Primary,
            tinct_core::ColorToken::new("primary", replaced),
        )
    });
    let light = theme.colors(ThemeMode::Light);
    assert_eq!(light.oklch(ColorRole::Ring), Some(replaced));

    let next = tinct_core::Oklch::new(0.3, 0.1, 30.0);
    let edited = theme.with_color(ThemeMode::Light, ColorRole::Primary, next);
    let light = edited.colors(ThemeMode::Light);
    for role in [ColorRole::Ring, ColorRole::SidebarPrimary, ColorRole::SidebarRing] {
        assert!(light.parent(role).is_some(), "role={role:?}");
        assert_eq!(light.oklch(role), light.oklch(ColorRole::Primary), "role={role:?}");
    }
}

#[test]
fn blue_links_survive_a_toml_round_trip() {
    let theme = ThemePreset::Blue.theme();
    let back = tinct_theme::ThemeData::from_toml_str(&theme.to_toml().unwrap()).unwrap();
    let next = tinct_core::Oklch::new(0.3, 0.1, 30.0);
    let edited = back.with_color(ThemeMode::Dark, ColorRole::Primary, next);
    let dark = edited.colors(ThemeMode::Dark);
    assert_eq!(dark.oklch(ColorRole::SidebarRing), Some(next.normalized()));
}
