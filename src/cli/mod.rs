//! Command-line front end
//!
//! Each subcommand lives in its own module with a `run` entry point that
//! loads the navigator, reads the input text and prints either JSON or a
//! coloured summary.

pub mod analyze;
pub mod checklist;
pub mod enhance;
pub mod map;
pub mod server;
pub mod validate;

use crate::engine::Navigator;
use crate::models::{NavigatorConfig, OverallStatus, Severity, ValidationIssue};
use crate::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Resolve the input text: `--text`, then `--file`, then stdin
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    if buffer.trim().is_empty() {
        anyhow::bail!("No input text: pass --text, --file or pipe text on stdin");
    }
    Ok(buffer)
}

/// Load configuration and build the navigator it describes
pub fn load_navigator(config_path: Option<&Path>) -> Result<Navigator> {
    Navigator::from_config(NavigatorConfig::load(config_path)?)
}

/// Same as [`load_navigator`], with the backend spinner on for terminal output
pub fn load_interactive_navigator(config_path: Option<&Path>, json: bool) -> Result<Navigator> {
    let mut config = NavigatorConfig::load(config_path)?;
    config.generator.show_progress = !json;
    Navigator::from_config(config)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn status_label(status: OverallStatus) -> ColoredString {
    let label = format!("{} {}", status.emoji(), status.name().to_uppercase());
    match status {
        OverallStatus::Pass => label.green().bold(),
        OverallStatus::Partial => label.yellow().bold(),
        OverallStatus::Fail => label.red().bold(),
    }
}

pub(crate) fn print_issues(issues: &[ValidationIssue], indent: &str) {
    for issue in issues {
        let line = issue.format();
        let line = match issue.severity {
            Severity::Error => line.red(),
            Severity::Warning => line.yellow(),
            Severity::Info => line.normal(),
        };
        println!("{}{}", indent, line);
        println!("{}   {}", indent, issue.suggestion.bright_black());
    }
}
