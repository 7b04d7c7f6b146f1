use board_core::{CategoryMap, Extraction, JobRecord};
use board_logging::board_debug;

use crate::{FeedDocument, XmlElement};

/// Tag names of one feed variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub position: String,
    pub id: String,
    pub category: String,
    pub title: String,
    pub employment_type: String,
    pub location: String,
}

impl FieldNames {
    /// Feeds that classify positions by working schedule.
    pub fn schedule() -> Self {
        Self::with_type_field("schedule")
    }

    /// Feeds that classify positions by seniority.
    pub fn seniority() -> Self {
        Self::with_type_field("seniority")
    }

    pub fn with_type_field(employment_type: impl Into<String>) -> Self {
        Self {
            position: "position".to_string(),
            id: "id".to_string(),
            category: "department".to_string(),
            title: "name".to_string(),
            employment_type: employment_type.into(),
            location: "office".to_string(),
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::schedule()
    }
}

pub trait CategoryExtractor: Send + Sync {
    fn extract(&self, doc: &FeedDocument) -> Extraction;
}

/// Groups `position` elements by department, dropping incomplete ones.
#[derive(Debug, Clone, Default)]
pub struct PositionExtractor {
    fields: FieldNames,
}

impl PositionExtractor {
    pub fn new(fields: FieldNames) -> Self {
        Self { fields }
    }

    fn record(&self, position: &XmlElement) -> Option<JobRecord> {
        let field = |name: &str| position.first_descendant(name).map(XmlElement::text_content);
        JobRecord::new(
            field(&self.fields.id).as_deref(),
            field(&self.fields.title).as_deref(),
            field(&self.fields.category).as_deref(),
            field(&self.fields.employment_type).as_deref(),
            field(&self.fields.location).as_deref(),
        )
    }
}

impl CategoryExtractor for PositionExtractor {
    fn extract(&self, doc: &FeedDocument) -> Extraction {
        let mut categories = CategoryMap::new();
        let mut dropped = 0;

        for (index, position) in doc.elements_by_tag(&self.fields.position).enumerate() {
            match self.record(position) {
                Some(job) => categories.push(job),
                None => {
                    board_debug!("Dropping incomplete position #{}", index);
                    dropped += 1;
                }
            }
        }

        Extraction {
            categories,
            dropped,
        }
    }
}
