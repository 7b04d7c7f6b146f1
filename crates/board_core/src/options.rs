use std::collections::HashSet;

use crate::{Axes, Axis, CategoryMap};

/// Distinct values offered by the filter controls, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptionSet {
    pub categories: Vec<String>,
    pub employment_types: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterOptionSet {
    pub fn build(map: &CategoryMap) -> Self {
        let mut types = Distinct::default();
        let mut locations = Distinct::default();
        for job in map.jobs() {
            types.insert(job.employment_type());
            locations.insert(job.location());
        }

        Self {
            categories: map.names().map(ToOwned::to_owned).collect(),
            employment_types: types.values,
            locations: locations.values,
        }
    }

    pub fn for_axis(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Category => &self.categories,
            Axis::EmploymentType => &self.employment_types,
            Axis::Location => &self.locations,
        }
    }

    /// Drops the option lists of controls that are not on the page.
    pub fn restricted_to(mut self, present: Axes) -> Self {
        for axis in Axis::ALL {
            if !present.contains(axis) {
                match axis {
                    Axis::Category => self.categories.clear(),
                    Axis::EmploymentType => self.employment_types.clear(),
                    Axis::Location => self.locations.clear(),
                }
            }
        }
        self
    }
}

#[derive(Default)]
struct Distinct {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Distinct {
    fn insert(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.values.push(value.to_string());
        }
    }
}
