//! MCP Tool Registry and Implementations
//!
//! Every tool is a thin adapter over one [`Navigator`] operation: arguments
//! are pulled from the JSON object, the operation runs, and the typed result
//! is returned as pretty-printed JSON text.

pub mod analyze;
pub mod checklist;
pub mod enhance;
pub mod map;
pub mod validate;

use crate::engine::Navigator;
use crate::Result;
use serde::Serialize;
use serde_json::{json, Value};

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolRegistry {
    /// Create a new tool registry with all available tools
    pub fn new() -> Self {
        Self {
            tools: vec![
                map::definition(),
                map::hybrid_definition(),
                validate::definition(),
                enhance::definition(),
                checklist::definition(),
                analyze::definition(),
            ],
        }
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name with the given arguments
    pub async fn call_tool(&self, name: &str, arguments: &Value, navigator: &Navigator) -> Result<String> {
        match name {
            "map_to_ifrs_s2" => map::execute(arguments, navigator),
            "map_hybrid" => map::execute_hybrid(arguments, navigator).await,
            "validate_disclosure" => validate::execute(arguments, navigator),
            "enhance_paragraph" => enhance::execute(arguments, navigator).await,
            "build_checklist" => checklist::execute(arguments, navigator),
            "analyze_sentences" => analyze::execute(arguments, navigator),
            _ => anyhow::bail!("Unknown tool: {}", name),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to extract a required string field from JSON
pub fn get_required_string(args: &Value, field: &str) -> Result<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required field: {}", field))
}

/// Helper to extract an optional string field from JSON
pub fn get_optional_string(args: &Value, field: &str) -> Option<String> {
    args.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Optional string field with a fallback
pub fn get_string_or(args: &Value, field: &str, default: &str) -> String {
    get_optional_string(args, field).unwrap_or_else(|| default.to_string())
}

/// Helper to extract a required array of strings from JSON
pub fn get_required_string_list(args: &Value, field: &str) -> Result<Vec<String>> {
    let items = args
        .get(field)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("Missing required array field: {}", field))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow::anyhow!("Field {} must contain only strings", field))
        })
        .collect()
}

/// Serialize a tool result as the text payload
pub(crate) fn to_text<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_every_tool_with_schema() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.names(),
            vec![
                "map_to_ifrs_s2",
                "map_hybrid",
                "validate_disclosure",
                "enhance_paragraph",
                "build_checklist",
                "analyze_sentences"
            ]
        );
        for tool in registry.list_tools() {
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert!(tool["description"].as_str().is_some_and(|d| !d.is_empty()));
        }
    }

    #[test]
    fn test_string_list_rejects_non_strings() {
        let args = json!({ "codes": ["S2-5", 7] });
        assert!(get_required_string_list(&args, "codes").is_err());
        assert!(get_required_string_list(&json!({}), "codes").is_err());

        let args = json!({ "codes": ["S2-5", "29(a)"] });
        assert_eq!(get_required_string_list(&args, "codes").unwrap(), vec!["S2-5", "29(a)"]);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let navigator = Navigator::offline();
        let err = ToolRegistry::new()
            .call_tool("create_proposal", &json!({}), &navigator)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }
}
