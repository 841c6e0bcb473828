//! `lofield schedule`: print the normalized broadcast day.

use anyhow::Result;
use colored::Colorize;

use lofield::checks::{decode_shows, normalize, total_minutes};
use lofield::loader::ConfigSet;
use lofield::ui;

use crate::cli::SourceArgs;
use crate::cmd::resolve_config;

pub fn cmd_schedule(source: &SourceArgs) -> Result<()> {
    let config = resolve_config(source)?;
    let set = ConfigSet::load(&config.config_dir)?;

    let (shows, decode_findings) = decode_shows(&set.shows);
    let (slots, parse_findings) = normalize(&shows);

    println!("{}", "Schedule".bold());
    println!("{}", ui::separator(8));
    if slots.is_empty() {
        println!("  {}", "(no shows scheduled)".dimmed());
    }
    for slot in &slots {
        println!("  {}", slot);
    }

    println!("\nTotal: {:.1}h", total_minutes(&slots) as f64 / 60.0);

    for finding in decode_findings.iter().chain(parse_findings.iter()) {
        finding.display();
    }

    Ok(())
}
