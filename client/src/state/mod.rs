//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `gallery`, `detail`, `nav`) so each
//! page or component depends only on the small model it renders. None of these
//! models is persisted; they live as long as the signal that owns them.

pub mod detail;
pub mod gallery;
pub mod nav;
pub mod theme;
