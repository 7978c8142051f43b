use super::{load_interactive_navigator, print_json, read_input};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct EnhanceArgs {
    pub code: String,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub industry: Option<String>,
    pub message: Option<String>,
    pub json: bool,
}

pub async fn run(args: EnhanceArgs, config_path: Option<&Path>) -> Result<()> {
    let navigator = load_interactive_navigator(config_path, args.json)?;
    let paragraph = read_input(args.text, args.file.as_deref())?;
    let industry = args
        .industry
        .unwrap_or_else(|| navigator.config().defaults.industry.clone());

    let result = navigator
        .enhance_paragraph(&paragraph, &args.code, &industry, args.message.as_deref())
        .await;

    if args.json {
        return print_json(&result);
    }

    println!("{}", format!("{} ({})", result.title, result.code).cyan().bold());
    println!();
    for element in &result.missing_elements {
        let mark = if element.present { "✓".green() } else { "✗".red() };
        println!("   {} {}", mark, element.label);
        if !element.present {
            println!("     {}", element.reason.bright_black());
        }
    }

    println!();
    if result.completed_paragraph == paragraph {
        println!("{}", "No completion available; original paragraph kept.".yellow());
    } else {
        println!("{}", "Completed paragraph:".bold());
        println!("{}", result.completed_paragraph);
    }
    Ok(())
}
