use super::*;

#[test]
fn default_layout_is_grid() {
    assert_eq!(GalleryState::default().layout, GridLayout::Grid);
}

#[test]
fn select_layout_is_idempotent() {
    let mut state = GalleryState::default();
    state.select_layout(GridLayout::FullWidth);
    let once = state;
    state.select_layout(GridLayout::FullWidth);
    assert_eq!(state, once);
    assert_eq!(state.layout, GridLayout::FullWidth);
}

#[test]
fn layout_does_not_reorder_or_filter_items() {
    let catalog = Catalog::sample();
    let mut state = GalleryState::default();
    let grid_ids = state.items(&catalog).iter().map(|p| p.id).collect::<Vec<_>>();
    state.select_layout(GridLayout::FullWidth);
    let full_ids = state.items(&catalog).iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(grid_ids, vec![1, 2, 3]);
    assert_eq!(grid_ids, full_ids);
}

#[test]
fn grid_items_link_to_detail_routes() {
    let hrefs = GalleryState::default()
        .items(&Catalog::sample())
        .iter()
        .map(Photo::href)
        .collect::<Vec<_>>();
    assert_eq!(hrefs, vec!["/photos/1", "/photos/2", "/photos/3"]);
}

#[test]
fn layout_labels_and_classes_are_distinct() {
    assert_ne!(GridLayout::Grid.label(), GridLayout::FullWidth.label());
    assert_ne!(GridLayout::Grid.class(), GridLayout::FullWidth.class());
}
