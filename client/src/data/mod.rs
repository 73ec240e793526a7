//! Static site content.
//!
//! Records are `'static` so components can borrow them without cloning.

pub mod case_studies;
pub mod profile;
