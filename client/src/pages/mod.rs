//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates card rendering to
//! `components`.

pub mod home;
pub mod photo_detail;
pub mod photo_grid;
