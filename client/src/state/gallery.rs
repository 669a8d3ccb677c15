//! Photo grid display state.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::catalog::Catalog;
use crate::model::Photo;

/// Layout of the photo grid. Affects presentation only, never order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridLayout {
    /// Multi-column grid.
    #[default]
    Grid,
    /// One photo per row at full width.
    FullWidth,
}

impl GridLayout {
    pub const ALL: [Self; 2] = [Self::Grid, Self::FullWidth];

    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::FullWidth => "Full",
        }
    }

    /// Modifier class applied to the grid container.
    pub fn class(self) -> &'static str {
        match self {
            Self::Grid => "photo-grid__items--grid",
            Self::FullWidth => "photo-grid__items--full",
        }
    }
}

/// Grid page state: the selected layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub layout: GridLayout,
}

impl GalleryState {
    /// Select a layout. Selecting the active one again changes nothing.
    pub fn select_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
    }

    /// Photos to render, in catalog order, whatever the layout.
    pub fn items(self, catalog: &Catalog) -> &'static [Photo] {
        catalog.photos()
    }
}
