//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain state machine with no browser dependency, so the
//! rules can be unit tested natively. Browser wiring lives in `util`.

pub mod reveal;
pub mod slides;
pub mod theme;
