//! Presenter and topic tag cross-references.

use crate::index::ReferenceIndex;
use crate::model::Show;
use crate::report::{CheckCategory, Finding};

/// Check that every presenter and tag a show references exists.
///
/// Findings are emitted per show in input order; within a show, presenters
/// come before tags, each in declaration order. All violations are collected.
/// A show whose presenters or topics did not decode skips that half.
pub fn check_references(shows: &[Show], index: &ReferenceIndex) -> Vec<Finding> {
    let mut findings = Vec::new();

    for show in shows {
        let unknown = |message: String| {
            Finding::error(CheckCategory::CrossReference, message).for_subject(&show.id)
        };

        let presenter_ids = show.presenters.iter().flat_map(|p| &p.primary_duo);
        for presenter_id in presenter_ids {
            if !index.has_presenter(presenter_id) {
                findings.push(unknown(format!("Unknown presenter '{}'", presenter_id)));
            }
        }

        for tag in show.topics.iter().flat_map(|t| &t.primary_tags) {
            if !index.has_tag(tag) {
                findings.push(unknown(format!("Unknown tag '{}'", tag)));
            }
        }
    }

    findings
}
