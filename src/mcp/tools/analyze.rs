//! analyze_sentences MCP Tool

use super::{get_required_string, get_string_or, to_text, ToolDefinition};
use crate::engine::{Navigator, ANALYZE_DEFAULT_JURISDICTION};
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for analyze_sentences
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_sentences".to_string(),
        description: "Split a text into sentences and report the IFRS S2 gaps of each mapped sentence"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["raw_text"],
            "properties": {
                "raw_text": {
                    "type": "string",
                    "description": "Text to analyse, e.g. one report page"
                },
                "industry": {
                    "type": "string",
                    "description": "Industry of the reporting entity"
                },
                "jurisdiction": {
                    "type": "string",
                    "default": ANALYZE_DEFAULT_JURISDICTION,
                    "description": "Jurisdiction of the reporting entity"
                }
            }
        }),
    }
}

/// Execute the analyze_sentences tool
pub fn execute(args: &Value, navigator: &Navigator) -> Result<String> {
    let raw_text = get_required_string(args, "raw_text")?;
    let industry = get_string_or(args, "industry", &navigator.config().defaults.industry);
    let jurisdiction = get_string_or(args, "jurisdiction", ANALYZE_DEFAULT_JURISDICTION);

    to_text(&navigator.analyze_sentences(&raw_text, &industry, &jurisdiction))
}
