//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and scroll-driven effects. Shared state
//! (theme controller, reveal set) comes from Leptos context providers set up
//! by `App` and the pages.

pub mod button;
pub mod case_study_card;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod section;
pub mod slide_controls;
pub mod theme_toggle;
