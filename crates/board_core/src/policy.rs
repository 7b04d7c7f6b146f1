use crate::{Axes, Axis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    Exact,
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// Rule set deciding whether a job value satisfies a selected value.
///
/// One policy is chosen per deployment. [`MatchPolicy::strict`] fits feeds
/// filtered by three independent selects; [`MatchPolicy::loose`] fits the
/// type+location variant whose location select holds city names that appear
/// inside longer office strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub axes: Axes,
    pub location_match: LocationMatch,
    pub case: CaseSensitivity,
    pub update_count_text: bool,
}

impl MatchPolicy {
    pub const fn strict() -> Self {
        Self {
            axes: Axes::all(),
            location_match: LocationMatch::Exact,
            case: CaseSensitivity::Sensitive,
            update_count_text: true,
        }
    }

    pub const fn loose() -> Self {
        Self {
            axes: Axes {
                category: false,
                employment_type: true,
                location: true,
            },
            location_match: LocationMatch::Substring,
            case: CaseSensitivity::Insensitive,
            update_count_text: false,
        }
    }

    pub fn with_count_text(mut self, update_count_text: bool) -> Self {
        self.update_count_text = update_count_text;
        self
    }

    /// `selected` is assumed trimmed and non-empty.
    pub fn matches(&self, axis: Axis, value: &str, selected: &str) -> bool {
        let value = value.trim();
        let substring = axis == Axis::Location && self.location_match == LocationMatch::Substring;
        match (self.case, substring) {
            (CaseSensitivity::Sensitive, false) => value == selected,
            (CaseSensitivity::Sensitive, true) => value.contains(selected),
            (CaseSensitivity::Insensitive, false) => value.to_lowercase() == selected.to_lowercase(),
            (CaseSensitivity::Insensitive, true) => {
                value.to_lowercase().contains(&selected.to_lowercase())
            }
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
