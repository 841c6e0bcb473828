//! Lookup sets of valid presenter IDs and topic tags.

use std::collections::HashSet;

use crate::loader::LoadedDocument;
use crate::model::{Roster, TopicVocabulary};
use crate::report::{CheckCategory, Finding};

/// Message reported once when the roster or vocabulary is unusable
pub const BASE_CONFIG_UNAVAILABLE: &str = "Failed to load base configuration files";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceIndex {
    presenter_ids: HashSet<String>,
    allowed_tags: HashSet<String>,
}

impl ReferenceIndex {
    pub fn build(roster: &Roster, vocabulary: &TopicVocabulary) -> Self {
        Self {
            presenter_ids: roster.presenters.iter().map(|p| p.id.clone()).collect(),
            allowed_tags: vocabulary.allowed_topic_tags.iter().cloned().collect(),
        }
    }

    /// Build the index from loaded documents.
    ///
    /// Returns a single blocking finding if either document is missing,
    /// unparseable, or does not have the expected shape.
    pub fn from_documents(
        presenters: &LoadedDocument,
        tags: &LoadedDocument,
    ) -> Result<Self, Finding> {
        let unavailable = || Finding::error(CheckCategory::CrossReference, BASE_CONFIG_UNAVAILABLE);

        let roster = presenters
            .value()
            .and_then(|v| Roster::from_value(v).ok())
            .ok_or_else(unavailable)?;
        let vocabulary = tags
            .value()
            .and_then(|v| TopicVocabulary::from_value(v).ok())
            .ok_or_else(unavailable)?;

        let index = Self::build(&roster, &vocabulary);
        tracing::debug!(
            presenters = index.presenter_count(),
            tags = index.tag_count(),
            "built reference index"
        );
        Ok(index)
    }

    pub fn has_presenter(&self, id: &str) -> bool {
        self.presenter_ids.contains(id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    pub fn presenter_count(&self) -> usize {
        self.presenter_ids.len()
    }

    pub fn tag_count(&self) -> usize {
        self.allowed_tags.len()
    }
}
