use super::{load_navigator, print_issues, print_json, read_input, status_label};
use crate::engine::ANALYZE_DEFAULT_JURISDICTION;
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct AnalyzeArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub industry: Option<String>,
    pub jurisdiction: Option<String>,
    pub json: bool,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let navigator = load_navigator(config_path)?;
    let text = read_input(args.text, args.file.as_deref())?;
    let industry = args
        .industry
        .unwrap_or_else(|| navigator.config().defaults.industry.clone());
    let jurisdiction = args
        .jurisdiction
        .unwrap_or_else(|| ANALYZE_DEFAULT_JURISDICTION.to_string());

    let suggestions = navigator.analyze_sentences(&text, &industry, &jurisdiction);

    if args.json {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        println!("{}", "✅ No sentence needs attention".green());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} sentence(s) need attention", suggestions.len()).cyan().bold()
    );
    for suggestion in &suggestions {
        println!();
        println!(
            "   #{} {} [{}]",
            suggestion.index,
            status_label(suggestion.overall_status),
            suggestion.group_titles.join(", ")
        );
        println!("   {}", suggestion.text.italic());
        print_issues(&suggestion.issues, "      ");
    }
    Ok(())
}
