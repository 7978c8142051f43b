//! MCP Server implementation using JSON-RPC 2.0 over stdio
//!
//! Implements the MCP subset the navigator needs:
//! - `initialize` - Return server info and capabilities
//! - `tools/list` / `tools/call` - Navigator operations as tools
//! - `prompts/list` / `prompts/get` - Reusable expert prompts
//!
//! Requests without an `id` are notifications and get no response.

use crate::engine::Navigator;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::prompts;
use super::tools::ToolRegistry;

/// MCP protocol revision spoken by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported by `initialize`
pub const SERVER_NAME: &str = "IFRS_S2_Navigator";

/// MCP Server for handling JSON-RPC requests
pub struct McpServer {
    navigator: Arc<Navigator>,
    tool_registry: ToolRegistry,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }
}

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

type MethodResult = std::result::Result<Value, (i32, String)>;

impl McpServer {
    pub fn new(navigator: Arc<Navigator>) -> Self {
        Self {
            navigator,
            tool_registry: ToolRegistry::new(),
        }
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Run the MCP server, reading from stdin and writing to stdout
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let reader = BufReader::new(stdin.lock());

        info!(backend = %self.navigator.backend_name(), "MCP server started, waiting for requests");

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!(error = %e, "MCP read error");
                    break;
                }
            };

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                let response_json = serde_json::to_string(&response)?;
                writeln!(stdout, "{}", response_json)?;
                stdout.flush()?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Parse and handle one line of input
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(&request).await,
            Err(e) => Some(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            )),
        }
    }

    /// Handle a parsed request; `None` for notifications
    pub async fn handle_request(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Validate jsonrpc version
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id.clone().unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        debug!(method = %request.method, "MCP request");

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tool_registry.list_tools() })),
            "tools/call" => self.handle_tools_call(&request.params).await,
            "prompts/list" => Ok(json!({ "prompts": prompts::list_prompts() })),
            "prompts/get" => self.handle_prompts_get(&request.params),
            "shutdown" => {
                info!("MCP shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        let id = request.id.clone()?;
        Some(match result {
            Ok(value) => JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: Some(value),
                error: None,
            },
            Err((code, message)) => JsonRpcResponse::error(id, code, message),
        })
    }

    /// Handle `initialize` request
    fn handle_initialize(&self) -> MethodResult {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {},
                "prompts": {}
            }
        }))
    }

    /// Handle `tools/call` request
    async fn handle_tools_call(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        info!(tool = name, "Calling MCP tool");

        // Tool failures are content, not transport errors
        match self.tool_registry.call_tool(name, &arguments, &self.navigator).await {
            Ok(result) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            })),
            Err(e) => {
                warn!(tool = name, error = %e, "MCP tool failed");
                Ok(json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error: {}", e)
                    }],
                    "isError": true
                }))
            }
        }
    }

    /// Handle `prompts/get` request
    fn handle_prompts_get(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing prompt name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        prompts::get_prompt(name, &arguments).map_err(|e| (INVALID_PARAMS, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Arc::new(Navigator::offline()))
    }

    #[test]
    fn test_parse_request() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, "initialize");
        assert_eq!(request.jsonrpc, "2.0");
    }

    #[test]
    fn test_serialize_response() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: json!(1),
            result: Some(json!({"status": "ok"})),
            error: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[tokio::test]
    async fn test_initialize_reports_protocol_version() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#)
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_parse_error_and_unknown_method() {
        let server = server();
        let response = server.handle_line("{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);

        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);

        let response = server
            .handle_line(r#"{"jsonrpc":"1.0","id":3,"method":"tools/list"}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_tool_failure_is_content() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"validate_disclosure","arguments":{}}}"#,
            )
            .await
            .unwrap();
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"].as_str().unwrap().starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_tool_call_returns_json_text() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"map_to_ifrs_s2","arguments":{"raw_text":"Scope 1 emissions","industry":"Steel"}}}"#,
            )
            .await
            .unwrap();
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        let mapping: Value = serde_json::from_str(text).unwrap();
        assert_eq!(mapping["candidates"][0]["code"], "29(a)–29(c)");
    }

    #[tokio::test]
    async fn test_prompts_get_missing_params() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":6,"method":"prompts/get"}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }
}
