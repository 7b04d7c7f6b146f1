use crate::{Axis, DisplayDocument, MatchPolicy};

/// Counter text the page shows for a city without openings.
pub const ZERO_POSITIONS_TEXT: &str = "0 open Positions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortcutGuard {
    /// Skip when the companion counter reads exactly [`ZERO_POSITIONS_TEXT`].
    #[default]
    CounterText,
    /// Skip when no listed job matches the shortcut's location.
    ComputedCount,
}

/// A named button that jumps the location filter to one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilter {
    pub name: String,
    pub location: String,
    /// Text of the companion "open positions" counter, if the page has one.
    pub counter_text: Option<String>,
}

impl QuickFilter {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            counter_text: None,
        }
    }

    pub fn with_counter(mut self, text: impl Into<String>) -> Self {
        self.counter_text = Some(text.into());
        self
    }

    pub fn open_positions(&self, listing: &DisplayDocument, policy: &MatchPolicy) -> usize {
        let location = self.location.trim();
        if location.is_empty() {
            return listing.job_count();
        }
        listing
            .jobs()
            .filter(|job| policy.matches(Axis::Location, &job.location, location))
            .count()
    }

    pub fn is_enabled(
        &self,
        guard: ShortcutGuard,
        listing: &DisplayDocument,
        policy: &MatchPolicy,
    ) -> bool {
        match guard {
            ShortcutGuard::CounterText => {
                self.counter_text.as_deref() != Some(ZERO_POSITIONS_TEXT)
            }
            ShortcutGuard::ComputedCount => self.open_positions(listing, policy) > 0,
        }
    }
}
