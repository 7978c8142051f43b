use super::{load_interactive_navigator, print_json, read_input};
use crate::models::{MappingMode, MappingResult};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct MapArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub industry: Option<String>,
    pub jurisdiction: Option<String>,
    pub mode: Option<MappingMode>,
    pub json: bool,
}

pub async fn run(args: MapArgs, config_path: Option<&Path>) -> Result<()> {
    let navigator = load_interactive_navigator(config_path, args.json)?;
    let text = read_input(args.text, args.file.as_deref())?;
    let defaults = &navigator.config().defaults;
    let industry = args.industry.unwrap_or_else(|| defaults.industry.clone());
    let jurisdiction = args.jurisdiction.unwrap_or_else(|| defaults.jurisdiction.clone());
    let mode = args.mode.unwrap_or(defaults.mode);

    if !args.json {
        println!(
            "{}",
            format!("🔎 Mapping text ({} mode, backend: {})", mode.name(), navigator.backend_name()).cyan()
        );
    }

    let result = navigator.map(&text, &industry, &jurisdiction, mode).await;

    if args.json {
        return print_json(&result);
    }
    print_mapping(&result);
    Ok(())
}

fn print_mapping(result: &MappingResult) {
    println!();
    for candidate in &result.candidates {
        if candidate.is_sentinel() {
            println!("  {} {}", "•".red(), candidate.code.red().bold());
        } else {
            println!("  {} {}", "•".green(), candidate.code.bold());
        }
        println!("    {}", candidate.reason);
        if !candidate.matched_keywords.is_empty() {
            println!(
                "    {} {}",
                "keywords:".bright_black(),
                candidate.matched_keywords.join(", ").bright_black()
            );
        }
    }
    println!();
    println!("   Confidence: {}", format_confidence(result.confidence));
    println!("   {}", result.coverage_comment.bright_black());
}

fn format_confidence(confidence: f64) -> colored::ColoredString {
    let text = format!("{:.2}", confidence);
    if confidence >= crate::mapping::ESCALATION_THRESHOLD {
        text.green()
    } else if confidence > 0.0 {
        text.yellow()
    } else {
        text.red()
    }
}
