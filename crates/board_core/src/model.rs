use std::collections::HashMap;

use crate::Axis;

/// One open position. All five fields are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    id: String,
    title: String,
    category: String,
    employment_type: String,
    location: String,
}

impl JobRecord {
    /// Builds a record, or `None` when any field is missing or blank.
    pub fn new(
        id: Option<&str>,
        title: Option<&str>,
        category: Option<&str>,
        employment_type: Option<&str>,
        location: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            id: required(id)?,
            title: required(title)?,
            category: required(category)?,
            employment_type: required(employment_type)?,
            location: required(location)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn employment_type(&self) -> &str {
        &self.employment_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn value(&self, axis: Axis) -> &str {
        match axis {
            Axis::Category => &self.category,
            Axis::EmploymentType => &self.employment_type,
            Axis::Location => &self.location,
        }
    }
}

fn required(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub jobs: Vec<JobRecord>,
}

/// Category name to jobs, kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `job` under its category, creating the category on first sight.
    pub fn push(&mut self, job: JobRecord) {
        match self.index.get(job.category()) {
            Some(&slot) => self.categories[slot].jobs.push(job),
            None => {
                self.index
                    .insert(job.category().to_string(), self.categories.len());
                self.categories.push(Category {
                    name: job.category().to_string(),
                    jobs: vec![job],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[JobRecord]> {
        self.index
            .get(name)
            .map(|&slot| self.categories[slot].jobs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobRecord> {
        self.categories.iter().flat_map(|c| c.jobs.iter())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn job_count(&self) -> usize {
        self.categories.iter().map(|c| c.jobs.len()).sum()
    }
}

impl FromIterator<JobRecord> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = JobRecord>>(iter: I) -> Self {
        let mut map = Self::new();
        for job in iter {
            map.push(job);
        }
        map
    }
}

/// Result of walking a feed: the grouped jobs and how many positions were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub categories: CategoryMap,
    pub dropped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, category: &str) -> JobRecord {
        JobRecord::new(Some(id), Some("Title"), Some(category), Some("Full-time"), Some("Munich"))
            .unwrap()
    }

    #[test]
    fn blank_fields_reject_the_record() {
        assert!(JobRecord::new(Some("1"), Some("t"), Some("c"), Some("f"), None).is_none());
        assert!(JobRecord::new(Some("1"), Some("  "), Some("c"), Some("f"), Some("l")).is_none());
        assert!(JobRecord::new(Some(""), Some("t"), Some("c"), Some("f"), Some("l")).is_none());
    }

    #[test]
    fn fields_are_trimmed() {
        let job = JobRecord::new(Some(" 7 "), Some("Dev\n"), Some("Eng"), Some("Full"), Some(" Paris"))
            .unwrap();
        assert_eq!(job.id(), "7");
        assert_eq!(job.title(), "Dev");
        assert_eq!(job.location(), "Paris");
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let map: CategoryMap = vec![job("1", "Sales"), job("2", "Eng"), job("3", "Sales")]
            .into_iter()
            .collect();

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Sales", "Eng"]);
        let sales: Vec<_> = map.get("Sales").unwrap().iter().map(JobRecord::id).collect();
        assert_eq!(sales, vec!["1", "3"]);
        assert_eq!(map.job_count(), 3);
    }

    #[test]
    fn duplicate_ids_pass_through() {
        let map: CategoryMap = vec![job("1", "Eng"), job("1", "Eng")].into_iter().collect();
        assert_eq!(map.get("Eng").unwrap().len(), 2);
    }
}
