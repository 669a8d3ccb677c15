use super::*;

fn route_mode() -> SiteConfig {
    SiteConfig {
        active_link_mode: ActiveLinkMode::Route,
        ..SiteConfig::default()
    }
}

#[test]
fn default_nav_is_home_then_photos() {
    let cfg = SiteConfig::default();
    let labels = cfg.nav.iter().map(|e| e.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Home", "Photos"]);
    assert_eq!(cfg.brand, "PhotoBlog");
    assert_eq!(cfg.related_limit, 3);
    assert_eq!(cfg.current_user.name, "You");
}

#[test]
fn default_mode_is_static() {
    assert_eq!(ActiveLinkMode::default(), ActiveLinkMode::Static);
    assert_eq!(SiteConfig::default().active_link_mode, ActiveLinkMode::Static);
}

#[test]
fn static_mode_always_marks_home() {
    let cfg = SiteConfig::default();
    for path in ["/", "/photos", "/photos/2", "/unknown"] {
        assert_eq!(cfg.current_nav_index(path), Some(0), "path {path}");
    }
}

#[test]
fn static_mode_without_flag_marks_nothing() {
    let mut cfg = SiteConfig::default();
    for entry in &mut cfg.nav {
        entry.current = false;
    }
    assert_eq!(cfg.current_nav_index("/"), None);
}

#[test]
fn route_mode_marks_home_on_root() {
    assert_eq!(route_mode().current_nav_index("/"), Some(0));
}

#[test]
fn route_mode_marks_photos_for_grid_and_detail() {
    let cfg = route_mode();
    assert_eq!(cfg.current_nav_index("/photos"), Some(1));
    assert_eq!(cfg.current_nav_index("/photos/2"), Some(1));
}

#[test]
fn route_mode_respects_segment_boundary() {
    assert_eq!(route_mode().current_nav_index("/photosets"), Some(0));
}
