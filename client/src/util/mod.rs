//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, cookies, media
//! queries, observers, scrolling) from page and component logic. Browser
//! calls compile away outside the `hydrate` feature.

pub mod motion;
pub mod observer;
pub mod scroll;
pub mod theme_dom;
