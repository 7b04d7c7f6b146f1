use crate::listing::count_label;
use crate::{DisplayDocument, FilterSelection, JobEntry, MatchPolicy, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobVisibility {
    pub section: SectionId,
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    pub section: SectionId,
    pub category: String,
    pub visible_count: usize,
    pub non_empty: bool,
}

/// Visibility derived from one selection. Recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityResult {
    pub jobs: Vec<JobVisibility>,
    pub sections: Vec<SectionVisibility>,
    pub any_visible: bool,
}

impl VisibilityResult {
    pub fn total_visible(&self) -> usize {
        self.sections.iter().map(|s| s.visible_count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterEngine {
    policy: MatchPolicy,
}

impl FilterEngine {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// True when `job` satisfies every constrained axis the policy filters on.
    pub fn is_match(&self, selection: &FilterSelection, job: &JobEntry) -> bool {
        self.policy.axes.iter().all(|axis| match selection.get(axis) {
            Some(selected) => self.policy.matches(axis, job.value(axis), selected),
            None => true,
        })
    }

    /// Recomputes visibility and writes it back into `listing`.
    ///
    /// Sections with no visible jobs are hidden and collapsed, sections with
    /// visible jobs are shown and expanded, regardless of manual toggles.
    pub fn apply(
        &self,
        selection: &FilterSelection,
        listing: &mut DisplayDocument,
    ) -> VisibilityResult {
        let mut result = VisibilityResult::default();

        for section in listing.sections_mut() {
            let mut visible_count = 0;
            for job in &mut section.jobs {
                job.visible = self.is_match(selection, job);
                if job.visible {
                    visible_count += 1;
                }
                result.jobs.push(JobVisibility {
                    section: section.id,
                    id: job.id.clone(),
                    visible: job.visible,
                });
            }

            let non_empty = visible_count > 0;
            section.visible = non_empty;
            section.expanded = non_empty;
            if self.policy.update_count_text {
                section.count_text = count_label(visible_count);
            }

            result.sections.push(SectionVisibility {
                section: section.id,
                category: section.category.clone(),
                visible_count,
                non_empty,
            });
        }

        result.any_visible = result.total_visible() > 0;
        listing.set_no_results_visible(!result.any_visible);
        result
    }
}
