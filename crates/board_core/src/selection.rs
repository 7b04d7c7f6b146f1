use std::fmt;

/// One of the independently selectable filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Category,
    EmploymentType,
    Location,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Category, Axis::EmploymentType, Axis::Location];

    /// Parses the short names used by hosts (`category`, `type`, `location`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "category" | "department" => Some(Axis::Category),
            "type" | "employment_type" | "schedule" | "seniority" => Some(Axis::EmploymentType),
            "location" | "office" => Some(Axis::Location),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Category => "category",
            Axis::EmploymentType => "type",
            Axis::Location => "location",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A subset of the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axes {
    pub category: bool,
    pub employment_type: bool,
    pub location: bool,
}

impl Axes {
    pub const fn all() -> Self {
        Self {
            category: true,
            employment_type: true,
            location: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            category: false,
            employment_type: false,
            location: false,
        }
    }

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::Category => self.category,
            Axis::EmploymentType => self.employment_type,
            Axis::Location => self.location,
        }
    }

    /// Axes present in both sets.
    pub const fn intersect(self, other: Axes) -> Self {
        Self {
            category: self.category && other.category,
            employment_type: self.employment_type && other.employment_type,
            location: self.location && other.location,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::all()
    }
}

/// Current filter control values. `None` means no constraint on that axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one axis from raw control text; blank text clears the constraint.
    pub fn set(&mut self, axis: Axis, value: &str) {
        let value = value.trim();
        let value = (!value.is_empty()).then(|| value.to_string());
        match axis {
            Axis::Category => self.category = value,
            Axis::EmploymentType => self.employment_type = value,
            Axis::Location => self.location = value,
        }
    }

    pub fn with(mut self, axis: Axis, value: &str) -> Self {
        self.set(axis, value);
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Category => self.category.as_deref(),
            Axis::EmploymentType => self.employment_type.as_deref(),
            Axis::Location => self.location.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().all(|axis| self.get(*axis).is_none())
    }
}
