use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::builders::ShowBuilder;
use super::fixtures;

/// StationHarness provides an isolated station config tree.
/// Each harness creates a temporary directory with config/station.json,
/// config/presenters.json, config/tags.json and an empty config/shows/.
pub struct StationHarness {
    pub dir: TempDir,
    pub config_dir: PathBuf,
    pub lofield_binary: PathBuf,
}

impl StationHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = dir.path().join("config");
        fs::create_dir_all(config_dir.join("shows")).expect("Failed to create shows dir");

        let harness = Self {
            dir,
            config_dir,
            lofield_binary: PathBuf::from(env!("CARGO_BIN_EXE_lofield")),
        };
        harness.write_json("station.json", &fixtures::station());
        harness.write_json("presenters.json", &fixtures::presenters());
        harness.write_json("tags.json", &fixtures::tags());
        harness
    }

    /// Harness pre-populated with the standard eight-show day
    pub fn with_standard_day() -> Self {
        let harness = Self::new();
        for show in fixtures::standard_day() {
            harness.add_show(show);
        }
        harness
    }

    pub fn add_show(&self, show: ShowBuilder) {
        let file = format!("shows/{}.json", show.id());
        self.write_json(&file, &show.build());
    }

    pub fn write_json(&self, relative: &str, value: &Value) {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.write_raw(relative, &content);
    }

    pub fn write_raw(&self, relative: &str, content: &str) {
        fs::write(self.config_dir.join(relative), content).expect("Failed to write fixture");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.config_dir.join(relative)).expect("Failed to remove fixture");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run lofield with `--config-dir` pointing at this harness
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.lofield_binary)
            .args(args)
            .arg("--config-dir")
            .arg(&self.config_dir)
            .current_dir(self.dir.path())
            .env_remove("LOFIELD_CONFIG_DIR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run lofield")
    }

    /// Run `lofield validate --format json` and parse the report
    pub fn validate_json(&self) -> (Output, Value) {
        let output = self.run(&["validate", "--format", "json"]);
        let report = serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "Invalid JSON report: {}\nstdout: {}\nstderr: {}",
                e,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            )
        });
        (output, report)
    }
}

/// Collect a JSON array of strings
pub fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
