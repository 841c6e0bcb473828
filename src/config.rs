//! Linter configuration.
//!
//! Settings come from an optional `lofield-lint.yaml`; every field has a
//! default, so the file can be omitted entirely. The config root can also be
//! set with `LOFIELD_CONFIG_DIR` or on the command line.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::{CONFIG_DIR, LINT_CONFIG_FILE};

/// Environment variable overriding the config root
pub const CONFIG_DIR_ENV: &str = "LOFIELD_CONFIG_DIR";

/// Numeric tolerances used by the ratio and budget checks
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Tolerances {
    /// Allowed deviation of `music_fraction + talk_fraction` from 1.0
    #[serde(default = "default_ratio_sum")]
    pub ratio_sum: f64,
    /// Allowed TTS budget drift, in seconds
    #[serde(default = "default_tts_seconds")]
    pub tts_seconds: f64,
    /// Allowed music budget drift, in minutes
    #[serde(default = "default_music_minutes")]
    pub music_minutes: f64,
}

fn default_ratio_sum() -> f64 {
    0.001
}

fn default_tts_seconds() -> f64 {
    60.0
}

fn default_music_minutes() -> f64 {
    5.0
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            ratio_sum: default_ratio_sum(),
            tts_seconds: default_tts_seconds(),
            music_minutes: default_music_minutes(),
        }
    }
}

impl Tolerances {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tolerances.ratio_sum", self.ratio_sum),
            ("tolerances.tts_seconds", self.tts_seconds),
            ("tolerances.music_minutes", self.music_minutes),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LintConfig {
    /// Root directory holding station.json, presenters.json, tags.json and shows/
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
    #[serde(default)]
    pub tolerances: Tolerances,
}

fn default_config_dir() -> PathBuf {
    PathBuf::from(CONFIG_DIR)
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            tolerances: Tolerances::default(),
        }
    }
}

impl LintConfig {
    /// Load configuration.
    ///
    /// Resolution order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. `explicit` file, or `lofield-lint.yaml` in the working directory if present
    /// 3. `LOFIELD_CONFIG_DIR`
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let default_path = Path::new(LINT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                config.config_dir = PathBuf::from(dir);
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lint config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid lint config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: LintConfig =
            serde_yaml::from_str(content).context("Failed to parse lint config")?;

        config.tolerances.validate()?;

        Ok(config)
    }
}
