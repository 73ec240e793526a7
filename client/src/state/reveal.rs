//! Scroll-triggered reveal bookkeeping.
//!
//! Reveal is one-way: once an element has been seen it stays revealed for
//! the lifetime of the page view, even after scrolling back out of view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Visible fraction that counts as "seen".
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Content must clear the bottom tenth of the viewport before it reveals.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report for `id`.
    ///
    /// Returns `true` only on the first intersecting report, which is the
    /// caller's cue to stop observing that element.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> bool {
        is_intersecting && self.mark(id)
    }

    /// Reveal `id` unconditionally. Returns `true` if it was new.
    pub fn mark(&mut self, id: &str) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_owned())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
