use tinct_theme::{BorderRadii, RadiusFamily, RadiusLink, ThemeData, DEFAULT_RADIUS};

#[test]
fn linked_dependent_follows_global() {
    let mut radii = BorderRadii::new(8.0);
    assert_eq!(radii.effective(RadiusFamily::Card), 8.0);

    radii.set_global(12.0);
    assert_eq!(radii.effective(RadiusFamily::Card), 12.0);
    assert_eq!(radii.inner(RadiusFamily::Card), 4.0);
}

#[test]
fn direct_set_unlinks_and_freezes() {
    let mut radii = BorderRadii::new(8.0);
    radii.set_dependent(RadiusFamily::Button, 20.0);
    assert!(!radii.is_linked(RadiusFamily::Button));

    radii.set_global(30.0);
    assert_eq!(radii.effective(RadiusFamily::Button), 20.0);
    assert_eq!(radii.effective(RadiusFamily::Card), 30.0);
}

#[test]
fn relinking_snaps_to_global() {
    let mut radii = BorderRadii::new(8.0);
    radii.set_dependent(RadiusFamily::Button, 20.0);
    radii.set_global(30.0);

    radii.toggle_link(RadiusFamily::Button, true);
    assert!(radii.is_linked(RadiusFamily::Button));
    assert_eq!(radii.effective(RadiusFamily::Button), 30.0);
}

#[test]
fn unlinking_freezes_the_effective_value() {
    let mut radii = BorderRadii::new(14.0);
    radii.toggle_link(RadiusFamily::Checkbox, false);
    assert_eq!(radii.link(RadiusFamily::Checkbox), RadiusLink::Unlinked(14.0));

    radii.set_global(4.0);
    assert_eq!(radii.effective(RadiusFamily::Checkbox), 14.0);
    assert_eq!(radii.inner(RadiusFamily::Checkbox), 12.0);
}

#[test]
fn reset_restores_defaults() {
    let mut radii = BorderRadii::new(16.0);
    radii.set_dependent(RadiusFamily::Card, 3.0);

    radii.reset(RadiusFamily::Card);
    assert!(radii.is_linked(RadiusFamily::Card));
    assert_eq!(radii.effective(RadiusFamily::Card), 16.0);

    radii.reset_global();
    assert_eq!(radii.global(), DEFAULT_RADIUS);
    assert_eq!(radii.effective(RadiusFamily::Card), DEFAULT_RADIUS);

    radii.set_dependent(RadiusFamily::Button, 1.0);
    radii.set_global(30.0);
    radii.reset_all();
    assert_eq!(radii, BorderRadii::default());
}

#[test]
fn controllers_expose_link_state() {
    let theme = ThemeData::default().map_radii(|radii| {
        radii.set_global(12.0);
        radii.set_dependent(RadiusFamily::Button, 6.0);
    });
    let radii = &theme.borders.radii;

    let card = radii.controller(RadiusFamily::Card);
    assert_eq!(card.value, 12.0);
    assert!(card.is_linked);

    let button = radii.controller(RadiusFamily::Button);
    assert_eq!(button.value, 6.0);
    assert!(!button.is_linked);
    assert_eq!(button.formula, RadiusFamily::Button.formula());

    let global = radii.global_controller();
    assert_eq!(global.value, 12.0);
    assert!(!global.is_linked);
}
