//! build_checklist MCP Tool

use super::{get_required_string, get_string_or, to_text, ToolDefinition};
use crate::engine::Navigator;
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for build_checklist
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "build_checklist".to_string(),
        description: "Evaluate a whole document against every registered IFRS S2 requirement".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["draft_text"],
            "properties": {
                "draft_text": {
                    "type": "string",
                    "description": "Document text"
                },
                "industry": {
                    "type": "string",
                    "description": "Industry of the reporting entity"
                }
            }
        }),
    }
}

/// Execute the build_checklist tool
pub fn execute(args: &Value, navigator: &Navigator) -> Result<String> {
    let draft_text = get_required_string(args, "draft_text")?;
    let industry = get_string_or(args, "industry", &navigator.config().defaults.industry);

    to_text(&navigator.build_checklist(&draft_text, &industry))
}
