//! Commands that describe the linter itself: `version`, `man` and `completion`.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use lofield::config::Tolerances;
use lofield::paths::{CONFIG_DIR, LINT_CONFIG_FILE};
use lofield::report::CheckCategory;

use crate::cli::Cli;

/// Name the CLI is registered under
fn bin_name() -> String {
    Cli::command().get_name().to_string()
}

/// Lines printed by `version`; `verbose` adds build and lint defaults
fn version_lines(verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("{} {}", bin_name(), env!("CARGO_PKG_VERSION"))];
    if !verbose {
        return lines;
    }

    let checks: Vec<String> = CheckCategory::ALL.iter().map(ToString::to_string).collect();
    let tolerances = Tolerances::default();
    lines.extend([
        format!("commit: {}", env!("GIT_SHA")),
        format!("built: {}", env!("BUILD_DATE")),
        format!("checks: {}", checks.join(", ")),
        format!(
            "default tolerances: ratio sum {}, TTS {}s, music {}min",
            tolerances.ratio_sum, tolerances.tts_seconds, tolerances.music_minutes
        ),
        format!("default config dir: {}", CONFIG_DIR),
        format!("settings file: {}", LINT_CONFIG_FILE),
    ]);
    lines
}

pub fn cmd_version(verbose: bool) -> Result<()> {
    for line in version_lines(verbose) {
        println!("{}", line);
    }
    Ok(())
}

/// Path the man page is written to inside `out_dir`
fn man_path(out_dir: &Path) -> PathBuf {
    out_dir.join(format!("{}.1", bin_name()))
}

pub fn cmd_man(out_dir: Option<&PathBuf>) -> Result<()> {
    let out_dir = out_dir.map_or_else(|| PathBuf::from("."), PathBuf::clone);
    let path = man_path(&out_dir);

    let mut page = Vec::new();
    clap_mangen::Man::new(Cli::command())
        .render(&mut page)
        .context("Failed to render man page")?;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    std::fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Man page written to: {}", path.display());
    Ok(())
}

pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = bin_name();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_uses_bin_name() {
        let lines = version_lines(false);
        assert_eq!(lines, vec![format!("lofield {}", env!("CARGO_PKG_VERSION"))]);
    }

    #[test]
    fn test_verbose_version_lists_checks_and_tolerances() {
        let lines = version_lines(true);

        assert!(lines.contains(
            &"checks: JSON Syntax, Cross-Reference, Music Ratio, Schedule Coverage, AI Budget"
                .to_string()
        ));
        assert!(lines.contains(
            &"default tolerances: ratio sum 0.001, TTS 60s, music 5min".to_string()
        ));
        assert!(lines.contains(&"settings file: lofield-lint.yaml".to_string()));
    }

    #[test]
    fn test_man_path() {
        assert_eq!(man_path(Path::new("out")), Path::new("out").join("lofield.1"));
    }
}
