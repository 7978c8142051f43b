use super::{load_navigator, print_issues, print_json, read_input, status_label};
use crate::engine::VALIDATE_DEFAULT_INDUSTRY;
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub struct ValidateArgs {
    pub codes: Vec<String>,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub industry: Option<String>,
    pub json: bool,
}

pub async fn run(args: ValidateArgs, config_path: Option<&Path>) -> Result<()> {
    let navigator = load_navigator(config_path)?;
    let text = read_input(args.text, args.file.as_deref())?;
    let industry = args
        .industry
        .unwrap_or_else(|| VALIDATE_DEFAULT_INDUSTRY.to_string());

    let result = navigator.validate(&args.codes, &text, &industry);

    if args.json {
        return print_json(&result);
    }

    println!(
        "{}",
        format!("Validation for: {}", args.codes.join(", ")).cyan().bold()
    );
    println!();
    println!("   Status: {}", status_label(result.overall_status));
    if result.issues.is_empty() {
        println!("   {}", "No issues found".green());
    } else {
        println!();
        print_issues(&result.issues, "   ");
    }
    Ok(())
}
