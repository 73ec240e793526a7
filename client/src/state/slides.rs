//! Slide deck position tracking.
//!
//! DESIGN
//! ======
//! `SlideDeck` is the whole state machine for the paginated deck: the
//! current index moves on observed visibility crossings or on explicit
//! navigation, and every navigation target is clamped into `[0, len - 1]`.
//! Crossings are not debounced; when several panels cross within one frame
//! the last one reported wins.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

/// Visible fraction at which a panel becomes the current slide.
pub const SLIDE_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Explicit navigation requests from buttons and the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckCommand {
    Next,
    Prev,
    First,
    Last,
    GoTo(i64),
}

impl DeckCommand {
    /// Keyboard binding for the deck.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" | "PageDown" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" | "PageUp" => Some(Self::Prev),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Current position within an ordered sequence of `len` panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

impl SlideDeck {
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub const fn len(self) -> usize {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    pub const fn current(self) -> usize {
        self.current
    }

    pub const fn is_first(self) -> bool {
        self.current == 0
    }

    pub const fn is_last(self) -> bool {
        self.len == 0 || self.current + 1 == self.len
    }

    /// `"3 / 13"` style counter, one-based. An empty deck reads `"0 / 0"`.
    pub fn counter_label(self) -> String {
        if self.len == 0 {
            return "0 / 0".to_owned();
        }
        format!("{} / {}", self.current + 1, self.len)
    }

    /// Record that panel `index` is now `ratio` visible.
    ///
    /// Returns the new current index when the crossing counts.
    pub fn observe_crossing(&mut self, index: usize, ratio: f64) -> Option<usize> {
        if ratio.is_nan() || ratio < SLIDE_VISIBILITY_THRESHOLD || index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        let last = self.len.checked_sub(1)?;
        self.current = (self.current + 1).min(last);
        Some(self.current)
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current = self.current.saturating_sub(1);
        Some(self.current)
    }

    /// Jump to `index`, clamped into range. `None` for an empty deck.
    pub fn go_to(&mut self, index: i64) -> Option<usize> {
        let target = clamp_index(index, self.len)?;
        self.current = target;
        Some(target)
    }

    /// Apply a command and return the panel to scroll into view.
    pub fn apply(&mut self, command: DeckCommand) -> Option<usize> {
        match command {
            DeckCommand::Next => self.next(),
            DeckCommand::Prev => self.prev(),
            DeckCommand::First => self.go_to(0),
            DeckCommand::Last => self.go_to(i64::MAX),
            DeckCommand::GoTo(index) => self.go_to(index),
        }
    }
}

/// Clamp a possibly negative or oversized index into `[0, len - 1]`.
pub fn clamp_index(index: i64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if index <= 0 {
        return Some(0);
    }
    Some(usize::try_from(index).map_or(last, |i| i.min(last)))
}
