//! validate_disclosure MCP Tool
//!
//! Runs the group-level presence checks over a drafted disclosure.

use super::{get_required_string, get_required_string_list, get_string_or, to_text, ToolDefinition};
use crate::engine::{Navigator, VALIDATE_DEFAULT_INDUSTRY};
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for validate_disclosure
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "validate_disclosure".to_string(),
        description: "Check whether a drafted disclosure covers the IFRS S2 groups it targets".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["codes", "draft_text"],
            "properties": {
                "codes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Target codes, e.g. [\"S2-5\", \"22\", \"29(a)\"]"
                },
                "draft_text": {
                    "type": "string",
                    "description": "Drafted disclosure text"
                },
                "industry": {
                    "type": "string",
                    "default": VALIDATE_DEFAULT_INDUSTRY,
                    "description": "Industry of the reporting entity"
                }
            }
        }),
    }
}

/// Execute the validate_disclosure tool
pub fn execute(args: &Value, navigator: &Navigator) -> Result<String> {
    let codes = get_required_string_list(args, "codes")?;
    let draft_text = get_required_string(args, "draft_text")?;
    let industry = get_string_or(args, "industry", VALIDATE_DEFAULT_INDUSTRY);

    to_text(&navigator.validate(&codes, &draft_text, &industry))
}
