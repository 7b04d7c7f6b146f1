//! Display model of the rendered listing.
//!
//! [`render_listing`] turns a [`CategoryMap`] into a [`DisplayDocument`]: one
//! accordion section per category and one entry per job. The document is the
//! explicit handle the filter engine and the shortcut handlers mutate; hosts
//! turn it into markup.

use url::Url;

use crate::{Axis, CategoryMap, JobRecord};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkTemplateError {
    #[error("invalid job board url: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("job board url cannot carry a path: {0}")]
    NotABase(String),
}

/// Builds `<base>/job/<id>?language=<lang>&display=<display>` detail links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    base: Url,
    language: String,
    display_language: String,
}

impl LinkTemplate {
    pub fn new(
        base: &str,
        language: impl Into<String>,
        display_language: impl Into<String>,
    ) -> Result<Self, LinkTemplateError> {
        let base = Url::parse(base.trim())?;
        if base.cannot_be_a_base() {
            return Err(LinkTemplateError::NotABase(base.to_string()));
        }
        Ok(Self {
            base,
            language: language.into(),
            display_language: display_language.into(),
        })
    }

    pub fn detail_url(&self, job_id: &str) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("job").push(job_id);
        }
        url.query_pairs_mut()
            .append_pair("language", &self.language)
            .append_pair("display", &self.display_language);
        url.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobEntry {
    pub id: String,
    pub title: String,
    pub detail_url: String,
    pub category: String,
    pub employment_type: String,
    pub location: String,
    pub visible: bool,
}

impl JobEntry {
    fn from_record(job: &JobRecord, links: &LinkTemplate) -> Self {
        Self {
            id: job.id().to_string(),
            title: job.title().to_string(),
            detail_url: links.detail_url(job.id()),
            category: job.category().to_string(),
            employment_type: job.employment_type().to_string(),
            location: job.location().to_string(),
            visible: true,
        }
    }

    pub fn value(&self, axis: Axis) -> &str {
        match axis {
            Axis::Category => &self.category,
            Axis::EmploymentType => &self.employment_type,
            Axis::Location => &self.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub category: String,
    pub jobs: Vec<JobEntry>,
    pub visible: bool,
    pub expanded: bool,
    pub count_text: String,
}

impl Section {
    pub fn visible_jobs(&self) -> usize {
        self.jobs.iter().filter(|job| job.visible).count()
    }
}

pub fn count_label(count: usize) -> String {
    format!("{count} Jobs")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayDocument {
    sections: Vec<Section>,
    no_results_visible: bool,
}

impl DisplayDocument {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    pub(crate) fn set_no_results_visible(&mut self, visible: bool) {
        self.no_results_visible = visible;
    }

    /// Flips the expanded indicator of one section. Returns false for unknown ids.
    pub fn toggle_section(&mut self, id: SectionId) -> bool {
        match self.sections.get_mut(id.0) {
            Some(section) => {
                section.expanded = !section.expanded;
                true
            }
            None => false,
        }
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobEntry> {
        self.sections.iter().flat_map(|s| s.jobs.iter())
    }

    pub fn job_count(&self) -> usize {
        self.sections.iter().map(|s| s.jobs.len()).sum()
    }

    pub fn total_visible(&self) -> usize {
        self.sections.iter().map(Section::visible_jobs).sum()
    }
}

pub fn render_listing(map: &CategoryMap, links: &LinkTemplate) -> DisplayDocument {
    let sections = map
        .iter()
        .enumerate()
        .map(|(index, category)| Section {
            id: SectionId(index),
            category: category.name.clone(),
            jobs: category
                .jobs
                .iter()
                .map(|job| JobEntry::from_record(job, links))
                .collect(),
            visible: true,
            expanded: false,
            count_text: count_label(category.jobs.len()),
        })
        .collect();

    DisplayDocument {
        sections,
        no_results_visible: false,
    }
}
