use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Resolve through the sample catalog, counting how often a view keyed on the
/// resolved photo would be rebuilt.
fn tracked_detail(
    initial: &str,
) -> (RwSignal<Option<String>>, Memo<Option<u32>>, Arc<AtomicUsize>) {
    let raw = RwSignal::new(Some(initial.to_owned()));
    let resolved = resolve_photo_param(Catalog::sample(), move || raw.get());
    let rebuilds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&rebuilds);
    let shown = Memo::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        resolved.get().map(|photo| photo.id)
    });
    (raw, shown, rebuilds)
}

#[test]
fn resolves_known_id_and_misses_unknown() {
    let owner = Owner::new();
    owner.with(|| {
        let raw = RwSignal::new(Some("3".to_owned()));
        let resolved = resolve_photo_param(Catalog::sample(), move || raw.get());
        assert_eq!(resolved.get_untracked().map(|p| p.title), Some("City Lights"));

        raw.set(Some("abc".to_owned()));
        assert!(resolved.get_untracked().is_none());

        raw.set(None);
        assert!(resolved.get_untracked().is_none());
    });
}

#[test]
fn switching_photos_rebuilds_detail_view() {
    let owner = Owner::new();
    owner.with(|| {
        let (raw, shown, rebuilds) = tracked_detail("1");
        assert_eq!(shown.get_untracked(), Some(1));
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        raw.set(Some("2".to_owned()));
        assert_eq!(shown.get_untracked(), Some(2));
        assert_eq!(rebuilds.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn same_photo_through_another_spelling_keeps_view() {
    let owner = Owner::new();
    owner.with(|| {
        let (raw, shown, rebuilds) = tracked_detail("1");
        assert_eq!(shown.get_untracked(), Some(1));

        raw.set(Some("1.0".to_owned()));
        assert_eq!(shown.get_untracked(), Some(1));
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn moving_between_unknown_ids_keeps_not_found_view() {
    let owner = Owner::new();
    owner.with(|| {
        let (raw, shown, rebuilds) = tracked_detail("99");
        assert_eq!(shown.get_untracked(), None);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        raw.set(Some("98".to_owned()));
        assert_eq!(shown.get_untracked(), None);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn not_found_view_has_single_back_link() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <PhotoNotFound/> }.to_html());
    assert!(html.contains("Photo not found"));
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(&format!("href=\"{PHOTOS_PATH}\"")));
    assert!(html.contains("Back to gallery"));
    assert!(!html.contains("<button"));
    assert!(!html.contains("<form"));
}
