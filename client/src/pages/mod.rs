//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (scroll trackers, keyboard
//! bindings) and delegates rendering details to `components`.

pub mod deck;
pub(crate) mod deck_slides;
pub mod portfolio;
