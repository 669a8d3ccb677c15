#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn toggle_flips_theme() {
    assert!(toggle(ThemeState { dark: false }).dark);
    assert!(!toggle(ThemeState { dark: true }).dark);
}

#[test]
fn toggle_does_not_mutate_input() {
    let current = ThemeState::default();
    let _ = toggle(current);
    assert!(!current.dark);
}

#[test]
fn data_theme_value_matches_dark_class_flag() {
    for theme in [ThemeState { dark: false }, ThemeState { dark: true }] {
        apply(theme);
        assert_eq!(theme.name() == "dark", theme.dark);
    }
}
