//! MCP prompt catalogue
//!
//! Reusable prompts a client can render and send to its own model:
//! the expert mapping prompt and the disclosure drafting prompt.

use crate::orchestrator::prompts::{draft_disclosure_prompt, expert_mapping_prompt};
use crate::Result;
use serde_json::{json, Value};

struct PromptArgument {
    name: &'static str,
    description: &'static str,
    required: bool,
}

struct PromptDefinition {
    name: &'static str,
    description: &'static str,
    arguments: &'static [PromptArgument],
}

const PROMPTS: &[PromptDefinition] = &[
    PromptDefinition {
        name: "map_to_ifrs_s2_expert",
        description: "Ask an IFRS S2 expert model for a precise paragraph mapping in JSON",
        arguments: &[
            PromptArgument {
                name: "raw_text",
                description: "Text to analyse",
                required: true,
            },
            PromptArgument {
                name: "industry",
                description: "Industry of the reporting entity",
                required: true,
            },
            PromptArgument {
                name: "jurisdiction",
                description: "Applicable framework variant (default IFRS)",
                required: false,
            },
        ],
    },
    PromptDefinition {
        name: "draft_ifrs_s2_disclosure",
        description: "Draft a disclosure paragraph that satisfies the given IFRS S2 codes",
        arguments: &[
            PromptArgument {
                name: "codes",
                description: "Target codes, comma separated",
                required: true,
            },
            PromptArgument {
                name: "company_profile",
                description: "Short company profile",
                required: true,
            },
            PromptArgument {
                name: "source_text",
                description: "Existing source text or draft",
                required: true,
            },
        ],
    },
];

/// Prompt definitions in MCP `prompts/list` format
pub fn list_prompts() -> Vec<Value> {
    PROMPTS
        .iter()
        .map(|p| {
            let arguments: Vec<Value> = p
                .arguments
                .iter()
                .map(|a| {
                    json!({
                        "name": a.name,
                        "description": a.description,
                        "required": a.required
                    })
                })
                .collect();
            json!({
                "name": p.name,
                "description": p.description,
                "arguments": arguments
            })
        })
        .collect()
}

/// Render a prompt as an MCP `prompts/get` result
pub fn get_prompt(name: &str, arguments: &Value) -> Result<Value> {
    let definition = PROMPTS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| anyhow::anyhow!("Unknown prompt: {}", name))?;

    let text = match name {
        "map_to_ifrs_s2_expert" => expert_mapping_prompt(
            &required(arguments, "raw_text")?,
            &required(arguments, "industry")?,
            arguments
                .get("jurisdiction")
                .and_then(|v| v.as_str())
                .unwrap_or("IFRS"),
        ),
        _ => draft_disclosure_prompt(
            &code_list(arguments)?,
            &required(arguments, "company_profile")?,
            &required(arguments, "source_text")?,
        ),
    };

    Ok(json!({
        "description": definition.description,
        "messages": [{
            "role": "user",
            "content": { "type": "text", "text": text }
        }]
    }))
}

fn required(arguments: &Value, field: &str) -> Result<String> {
    arguments
        .get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required argument: {}", field))
}

// MCP prompt arguments are strings, but an array is accepted too
fn code_list(arguments: &Value) -> Result<Vec<String>> {
    match arguments.get("codes") {
        Some(Value::String(s)) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect()),
        _ => anyhow::bail!("Missing required argument: codes"),
    }
}
