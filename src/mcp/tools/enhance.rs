//! enhance_paragraph MCP Tool

use super::{get_optional_string, get_required_string, get_string_or, to_text, ToolDefinition};
use crate::engine::Navigator;
use crate::Result;
use serde_json::{json, Value};

/// Get the tool definition for enhance_paragraph
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "enhance_paragraph".to_string(),
        description: "Detect the required elements a paragraph is missing for an IFRS S2 code and \
                      return a completed paragraph"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["paragraph", "ifrs_code"],
            "properties": {
                "paragraph": {
                    "type": "string",
                    "description": "Paragraph to analyse and complete"
                },
                "ifrs_code": {
                    "type": "string",
                    "description": "Requirement code, e.g. \"14\", \"22–23,25\", \"29(a)–29(c)\""
                },
                "industry": {
                    "type": "string",
                    "description": "Industry of the reporting entity"
                },
                "user_message": {
                    "type": "string",
                    "description": "Additional request from the user"
                }
            }
        }),
    }
}

/// Execute the enhance_paragraph tool
pub async fn execute(args: &Value, navigator: &Navigator) -> Result<String> {
    let paragraph = get_required_string(args, "paragraph")?;
    let code = get_required_string(args, "ifrs_code")?;
    let industry = get_string_or(args, "industry", &navigator.config().defaults.industry);
    let user_message = get_optional_string(args, "user_message");

    let result = navigator
        .enhance_paragraph(&paragraph, &code, &industry, user_message.as_deref())
        .await;
    to_text(&result)
}
