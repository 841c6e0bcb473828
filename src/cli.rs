//! CLI argument definitions for lofield.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lofield")]
#[command(version)]
#[command(about = "Lint Lofield FM station configuration", long_about = None)]
#[command(
    after_help = concat!(
        "GETTING STARTED:\n",
        "    lofield validate                     Check ./config\n",
        "    lofield validate --config-dir DIR    Check another config tree\n",
        "    lofield schedule                     Show the normalized day timeline",
    )
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find the station config tree and linter settings
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config root containing station.json, presenters.json, tags.json and shows/
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Linter settings file (defaults to ./lofield-lint.yaml when present)
    #[arg(long, value_name = "FILE")]
    pub lint_config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the station configuration
    ///
    /// Exits 0 when there are no errors (warnings allowed) and 1 otherwise.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the normalized schedule in start order
    Schedule {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate a man page
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
