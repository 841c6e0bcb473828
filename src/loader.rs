//! Filesystem loader for station configuration documents.
//!
//! The loader is the only part of the crate that performs I/O. It turns a
//! config root into a [`ConfigSet`] of parsed-or-failed documents; the
//! validation engine consumes that set without touching the filesystem.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::paths::{PRESENTERS_FILE, SHOWS_DIR, STATION_FILE, TAGS_FILE};

/// Load and parse a JSON file.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// State of a single document after loading
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentState {
    Parsed(Value),
    /// The file does not exist
    Missing,
    /// The file exists but could not be read or parsed
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub state: DocumentState,
}

impl LoadedDocument {
    pub fn load(path: &Path) -> Self {
        let state = match load_json(path) {
            Ok(value) => DocumentState::Parsed(value),
            Err(LoadError::NotFound(_)) => DocumentState::Missing,
            Err(e) => {
                tracing::debug!(
                    path = %e.path().display(),
                    error = %e,
                    "document failed to load"
                );
                DocumentState::Invalid(e.to_string())
            }
        };
        Self {
            path: path.to_path_buf(),
            state,
        }
    }

    pub fn parsed(path: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            path: path.into(),
            state: DocumentState::Parsed(value),
        }
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: DocumentState::Missing,
        }
    }

    #[cfg(test)]
    pub(crate) fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: DocumentState::Invalid(reason.into()),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match &self.state {
            DocumentState::Parsed(value) => Some(value),
            _ => None,
        }
    }

    /// File name without extension, used to label documents without an `id`
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

/// Every document a validation run looks at
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSet {
    pub station: LoadedDocument,
    pub presenters: LoadedDocument,
    pub tags: LoadedDocument,
    /// Show documents in file-enumeration order
    pub shows: Vec<LoadedDocument>,
}

impl ConfigSet {
    /// Load the standard layout under `root`.
    ///
    /// Missing or malformed documents are recorded, not returned as errors.
    /// Only a failure to enumerate the shows directory is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let station = LoadedDocument::load(&root.join(STATION_FILE));
        let presenters = LoadedDocument::load(&root.join(PRESENTERS_FILE));
        let tags = LoadedDocument::load(&root.join(TAGS_FILE));

        let shows = show_paths(&root.join(SHOWS_DIR))?
            .iter()
            .map(|path| LoadedDocument::load(path))
            .collect::<Vec<_>>();

        tracing::debug!(
            root = %root.display(),
            shows = shows.len(),
            "loaded configuration set"
        );

        Ok(Self {
            station,
            presenters,
            tags,
            shows,
        })
    }

    /// Build a set from already-parsed documents.
    ///
    /// `None` marks a base document as missing. Shows are labelled by their
    /// `id` field (or their position) for path-based messages.
    pub fn from_values(
        station: Option<Value>,
        presenters: Option<Value>,
        tags: Option<Value>,
        shows: Vec<Value>,
    ) -> Self {
        let base = |name: &str, value: Option<Value>| match value {
            Some(v) => LoadedDocument::parsed(name, v),
            None => LoadedDocument::missing(name),
        };

        let shows = shows
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let stem = Path::new(SHOWS_DIR).join(format!("show_{}", i));
                let name = value
                    .get("id")
                    .and_then(Value::as_str)
                    .map(|id| Path::new(SHOWS_DIR).join(id))
                    .unwrap_or(stem);
                LoadedDocument::parsed(name.with_extension("json"), value)
            })
            .collect();

        Self {
            station: base(STATION_FILE, station),
            presenters: base(PRESENTERS_FILE, presenters),
            tags: base(TAGS_FILE, tags),
            shows,
        }
    }

    /// Base documents followed by shows, in reporting order
    pub fn documents(&self) -> impl Iterator<Item = &LoadedDocument> {
        [&self.station, &self.presenters, &self.tags]
            .into_iter()
            .chain(self.shows.iter())
    }
}

/// Sorted `*.json` paths in the shows directory. An absent directory has no shows.
fn show_paths(shows_dir: &Path) -> Result<Vec<PathBuf>> {
    if !shows_dir.exists() {
        return Ok(Vec::new());
    }

    let pattern = shows_dir.join("*.json");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non UTF-8 shows path: {}", shows_dir.display()))?;

    let mut paths = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to enumerate {}", shows_dir.display()))?;
    paths.sort();
    Ok(paths)
}
