//! # Lofield - station configuration linter
//!
//! Checks the JSON documents that describe a Lofield FM broadcast day before
//! they reach the scheduler: station ratio policy, presenter roster, topic
//! vocabulary and one document per show.
//!
//! ## Modules
//!
//! - [`loader`] - Reads the config tree into a [`loader::ConfigSet`]
//! - [`model`] - Typed station, roster, vocabulary and show documents
//! - [`index`] - Presenter/tag lookup sets
//! - [`checks`] - Syntax, cross-reference, ratio, schedule and budget checkers
//! - [`engine`] - Runs the checkers and builds a [`report::Report`]
//! - [`config`] - Linter settings and tolerances
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use lofield::config::Tolerances;
//! use lofield::loader::ConfigSet;
//! use lofield::report::Outcome;
//!
//! let set = ConfigSet::load(Path::new("config")).expect("Failed to read config tree");
//! let report = lofield::engine::validate(&set, &Tolerances::default());
//!
//! match report.outcome() {
//!     Outcome::Success => println!("{} warnings", report.warning_count()),
//!     Outcome::Failure(errors) => println!("{} errors", errors),
//! }
//! ```

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod report;
pub mod telemetry;
pub mod ui;

/// Default file layout of a station config tree.
pub mod paths {
    /// Default config root: `config`
    pub const CONFIG_DIR: &str = "config";
    /// Station ratio policy: `station.json`
    pub const STATION_FILE: &str = "station.json";
    /// Presenter roster: `presenters.json`
    pub const PRESENTERS_FILE: &str = "presenters.json";
    /// Topic vocabulary: `tags.json`
    pub const TAGS_FILE: &str = "tags.json";
    /// Directory of per-show documents: `shows`
    pub const SHOWS_DIR: &str = "shows";
    /// Optional linter settings file: `lofield-lint.yaml`
    pub const LINT_CONFIG_FILE: &str = "lofield-lint.yaml";
}
