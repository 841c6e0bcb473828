//! JSON syntax check and the typed decoding phase for shows.

use crate::loader::{ConfigSet, DocumentState, LoadedDocument};
use crate::model::Show;
use crate::report::{CheckCategory, Finding};

/// Report every document that is missing or failed to parse.
pub fn check_syntax(set: &ConfigSet) -> Vec<Finding> {
    set.documents()
        .filter_map(|doc| match &doc.state {
            DocumentState::Parsed(_) => None,
            DocumentState::Missing => Some(Finding::error(
                CheckCategory::Syntax,
                format!("File not found: {}", doc.path.display()),
            )),
            DocumentState::Invalid(_) => Some(Finding::error(
                CheckCategory::Syntax,
                format!("Invalid JSON: {}", doc.path.display()),
            )),
        })
        .collect()
}

/// Decode parsed show documents into [`Show`]s.
///
/// Documents that did not parse are skipped (already reported by
/// [`check_syntax`]). A show with absent or malformed fields yields one
/// finding listing every problem, and is still returned with those sections
/// empty so checkers that do not need them can use it.
pub fn decode_shows(docs: &[LoadedDocument]) -> (Vec<Show>, Vec<Finding>) {
    let mut shows = Vec::new();
    let mut findings = Vec::new();

    for doc in docs {
        let Some(value) = doc.value() else {
            continue;
        };

        let file_stem = doc.file_stem();
        let decoded = Show::decode(value, &file_stem);

        if !decoded.problems.is_empty() {
            let subject = decoded
                .show
                .as_ref()
                .map_or(file_stem.as_str(), |show| show.id.as_str());
            findings.push(
                Finding::error(
                    CheckCategory::Syntax,
                    format!("Invalid show definition: {}", decoded.problems.join("; ")),
                )
                .for_subject(subject),
            );
        }

        shows.extend(decoded.show);
    }

    (shows, findings)
}
