use super::{load_navigator, print_issues, print_json, read_input, status_label};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct ChecklistArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub industry: Option<String>,
    pub json: bool,
}

pub async fn run(args: ChecklistArgs, config_path: Option<&Path>) -> Result<()> {
    let navigator = load_navigator(config_path)?;
    let text = read_input(args.text, args.file.as_deref())?;
    let industry = args
        .industry
        .unwrap_or_else(|| navigator.config().defaults.industry.clone());

    let items = navigator.build_checklist(&text, &industry);

    if args.json {
        return print_json(&items);
    }

    println!("{}", "IFRS S2 checklist".cyan().bold());
    for item in &items {
        println!();
        println!("   {} {} ({})", status_label(item.status), item.title.bold(), item.code);
        print_issues(&item.issues, "      ");
    }
    Ok(())
}
