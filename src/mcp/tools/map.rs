//! map_to_ifrs_s2 / map_hybrid MCP Tools

use super::{get_optional_string, get_required_string, get_string_or, to_text, ToolDefinition};
use crate::engine::Navigator;
use crate::models::MappingMode;
use crate::Result;
use serde_json::{json, Value};

fn mapping_properties() -> Value {
    json!({
        "raw_text": {
            "type": "string",
            "description": "Section or paragraph of a TCFD/ESG report"
        },
        "industry": {
            "type": "string",
            "description": "Industry of the reporting entity (e.g. Banking, Steel, Utilities)"
        },
        "jurisdiction": {
            "type": "string",
            "default": "IFRS",
            "description": "Applicable framework variant (IFRS, K-IFRS, ...)"
        }
    })
}

/// Get the tool definition for map_to_ifrs_s2
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "map_to_ifrs_s2".to_string(),
        description: "Roughly map disclosure text to IFRS S2 paragraph codes using keyword rules only"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["raw_text", "industry"],
            "properties": mapping_properties()
        }),
    }
}

/// Get the tool definition for map_hybrid
pub fn hybrid_definition() -> ToolDefinition {
    let mut properties = mapping_properties();
    properties["mode"] = json!({
        "type": "string",
        "enum": ["fast", "accurate", "auto"],
        "default": "auto",
        "description": "fast: rules only; accurate: reasoning backend with rule hints; auto: escalate on low confidence"
    });

    ToolDefinition {
        name: "map_hybrid".to_string(),
        description: "Map disclosure text to IFRS S2 paragraph codes with the hybrid rule/reasoning engine"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["raw_text", "industry"],
            "properties": properties
        }),
    }
}

/// Execute the map_to_ifrs_s2 tool
pub fn execute(args: &Value, navigator: &Navigator) -> Result<String> {
    let raw_text = get_required_string(args, "raw_text")?;
    get_required_string(args, "industry")?;

    to_text(&navigator.map_rules(&raw_text))
}

/// Execute the map_hybrid tool
pub async fn execute_hybrid(args: &Value, navigator: &Navigator) -> Result<String> {
    let raw_text = get_required_string(args, "raw_text")?;
    let industry = get_required_string(args, "industry")?;
    let defaults = &navigator.config().defaults;
    let jurisdiction = get_string_or(args, "jurisdiction", &defaults.jurisdiction);
    let mode = match get_optional_string(args, "mode") {
        Some(mode) => mode.parse::<MappingMode>()?,
        None => defaults.mode,
    };

    let result = navigator.map(&raw_text, &industry, &jurisdiction, mode).await;
    to_text(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_mapping_tool() {
        let navigator = Navigator::offline();
        let text = execute(
            &json!({ "raw_text": "We ran a scenario analysis.", "industry": "Utilities" }),
            &navigator,
        )
        .unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["candidates"][0]["code"], "22–23,25");
        assert!(value["confidence"].as_f64().is_some());
    }

    #[test]
    fn test_missing_industry_is_rejected() {
        let navigator = Navigator::offline();
        let err = execute(&json!({ "raw_text": "text" }), &navigator).unwrap_err();
        assert!(err.to_string().contains("industry"));
    }

    #[tokio::test]
    async fn test_hybrid_rejects_unknown_mode() {
        let navigator = Navigator::offline();
        let args = json!({ "raw_text": "text", "industry": "Steel", "mode": "thorough" });
        assert!(execute_hybrid(&args, &navigator).await.is_err());
    }

    #[tokio::test]
    async fn test_hybrid_fast_mode() {
        let navigator = Navigator::offline();
        let args = json!({ "raw_text": "Our transition plan.", "industry": "Steel", "mode": "fast" });
        let value: Value = serde_json::from_str(&execute_hybrid(&args, &navigator).await.unwrap()).unwrap();
        assert_eq!(value["candidates"][0]["code"], "14");
    }
}
