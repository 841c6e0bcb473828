//! CLI entry point for lofield.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    lofield::telemetry::init_tracing(cli.log_json, level);

    match cli.command {
        Commands::Validate {
            source,
            format,
            strict,
        } => cmd::validate::cmd_validate(&source, format, strict, cli.quiet),
        Commands::Schedule { source } => cmd::schedule::cmd_schedule(&source),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
