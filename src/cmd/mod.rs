//! Command module structure for lofield CLI

use anyhow::Result;

use lofield::config::LintConfig;

use crate::cli::SourceArgs;

pub mod schedule;
pub mod util;
pub mod validate;

/// Resolve linter settings for a command and make sure the config root exists.
///
/// `--config-dir` overrides both the settings file and `LOFIELD_CONFIG_DIR`.
pub fn resolve_config(source: &SourceArgs) -> Result<LintConfig> {
    let mut config = LintConfig::load(source.lint_config.as_deref())?;
    if let Some(dir) = &source.config_dir {
        config.config_dir = dir.clone();
    }

    if !config.config_dir.is_dir() {
        anyhow::bail!(
            "Config directory not found: {}\n\nPass --config-dir or set LOFIELD_CONFIG_DIR.",
            config.config_dir.display()
        );
    }

    tracing::debug!(config_dir = %config.config_dir.display(), "resolved lint config");
    Ok(config)
}
