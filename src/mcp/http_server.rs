//! Unified HTTP Server - REST API + MCP
//!
//! This server combines:
//! - Service index at `/` and health check at `/health`
//! - REST wrappers for every navigator operation under `/api`
//! - Text analysis demo at `/api/demo/analyze-text`
//! - MCP JSON-RPC endpoint at `/mcp`

use crate::engine::{Navigator, ANALYZE_DEFAULT_JURISDICTION, VALIDATE_DEFAULT_INDUSTRY};
use crate::mcp::server::{JsonRpcRequest, McpServer};
use crate::models::{
    ChecklistItem, EnhancementResult, MappingMode, MappingResult, SentenceSuggestion, ValidationResult,
};
use crate::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

// =============================================================================
// Request / Response Models
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct MapRequest {
    pub raw_text: String,
    pub industry: String,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub mode: Option<MappingMode>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub codes: Vec<String>,
    pub draft_text: String,
    #[serde(default = "default_validate_industry")]
    pub industry: String,
}

fn default_validate_industry() -> String {
    VALIDATE_DEFAULT_INDUSTRY.to_string()
}

#[derive(Debug, Deserialize)]
pub struct EnhanceParagraphRequest {
    pub paragraph: String,
    pub ifrs_code: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub user_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChecklistRequest {
    pub draft_text: String,
    #[serde(default)]
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextAnalysisRequest {
    pub raw_text: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
}

/// Source description echoed by the demo endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SourceMeta {
    pub filename: String,
    pub page_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoAnalysisResponse {
    pub pdf_text: String,
    pub pdf_meta: SourceMeta,
    pub checklist: Vec<ChecklistItem>,
    pub sentence_suggestions: Vec<SentenceSuggestion>,
}

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<Navigator>,
    pub mcp: Arc<McpServer>,
}

impl AppState {
    pub fn new(navigator: Arc<Navigator>) -> Self {
        Self {
            mcp: Arc::new(McpServer::new(navigator.clone())),
            navigator,
        }
    }

    fn industry_or_default(&self, industry: Option<String>) -> String {
        industry.unwrap_or_else(|| self.navigator.config().defaults.industry.clone())
    }
}

// =============================================================================
// Server Startup
// =============================================================================

/// Build the router with every route and the shared layers
pub fn router(navigator: Arc<Navigator>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/api/map", post(api_map))
        .route("/api/validate", post(api_validate))
        .route("/api/enhance-paragraph", post(api_enhance_paragraph))
        .route("/api/checklist", post(api_checklist))
        .route("/api/analyze-sentences", post(api_analyze_sentences))
        .route("/api/demo/analyze-text", post(api_demo_analyze_text))
        .route("/mcp", post(handle_mcp_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(navigator))
}

/// Start the HTTP server on `host:port`
pub async fn start_server(navigator: Arc<Navigator>, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", host, port, e))?;
    let backend = navigator.backend_name().to_string();
    let app = router(navigator);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, backend = %backend, "HTTP server listening");
    println!("✓ Server listening on http://{}", addr);
    println!("  REST API: http://{}/api", addr);
    println!("  MCP endpoint: http://{}/mcp", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// =============================================================================
// Index / Health
// =============================================================================

async fn read_root() -> Json<Value> {
    let modes: serde_json::Map<String, Value> = [MappingMode::Fast, MappingMode::Accurate, MappingMode::Auto]
        .iter()
        .map(|m| (m.name().to_string(), Value::from(m.description())))
        .collect();

    Json(json!({
        "message": "IFRS S2 Navigator API - REST wrapper for the MCP tools",
        "version": env!("CARGO_PKG_VERSION"),
        "modes": modes
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "available_tools": state.mcp.tool_registry().names(),
        "llm_model": state.navigator.config().generator.model,
        "backend": state.navigator.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// =============================================================================
// REST Handlers
// =============================================================================

async fn api_map(State(state): State<AppState>, Json(payload): Json<MapRequest>) -> Json<MappingResult> {
    let defaults = &state.navigator.config().defaults;
    let jurisdiction = payload.jurisdiction.unwrap_or_else(|| defaults.jurisdiction.clone());
    let mode = payload.mode.unwrap_or(defaults.mode);

    Json(
        state
            .navigator
            .map(&payload.raw_text, &payload.industry, &jurisdiction, mode)
            .await,
    )
}

async fn api_validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidationResult> {
    Json(
        state
            .navigator
            .validate(&payload.codes, &payload.draft_text, &payload.industry),
    )
}

async fn api_enhance_paragraph(
    State(state): State<AppState>,
    Json(payload): Json<EnhanceParagraphRequest>,
) -> Json<EnhancementResult> {
    let industry = state.industry_or_default(payload.industry);
    Json(
        state
            .navigator
            .enhance_paragraph(
                &payload.paragraph,
                &payload.ifrs_code,
                &industry,
                payload.user_message.as_deref(),
            )
            .await,
    )
}

async fn api_checklist(
    State(state): State<AppState>,
    Json(payload): Json<ChecklistRequest>,
) -> Json<Vec<ChecklistItem>> {
    let industry = state.industry_or_default(payload.industry);
    Json(state.navigator.build_checklist(&payload.draft_text, &industry))
}

async fn api_analyze_sentences(
    State(state): State<AppState>,
    Json(payload): Json<TextAnalysisRequest>,
) -> Json<Vec<SentenceSuggestion>> {
    let jurisdiction = payload
        .jurisdiction
        .clone()
        .unwrap_or_else(|| ANALYZE_DEFAULT_JURISDICTION.to_string());
    let industry = state.industry_or_default(payload.industry);
    Json(
        state
            .navigator
            .analyze_sentences(&payload.raw_text, &industry, &jurisdiction),
    )
}

/// Checklist and sentence suggestions for one pasted text
async fn api_demo_analyze_text(
    State(state): State<AppState>,
    Json(payload): Json<TextAnalysisRequest>,
) -> Response {
    if payload.raw_text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Text to analyse must not be empty." })),
        )
            .into_response();
    }

    let industry = state.industry_or_default(payload.industry);
    let jurisdiction = payload
        .jurisdiction
        .unwrap_or_else(|| ANALYZE_DEFAULT_JURISDICTION.to_string());

    let checklist = state.navigator.build_checklist(&payload.raw_text, &industry);
    let sentence_suggestions = state
        .navigator
        .analyze_sentences(&payload.raw_text, &industry, &jurisdiction);

    Json(DemoAnalysisResponse {
        pdf_text: payload.raw_text,
        pdf_meta: SourceMeta {
            filename: "User Input Text".to_string(),
            page_index: 0,
        },
        checklist,
        sentence_suggestions,
    })
    .into_response()
}

// =============================================================================
// MCP Handler
// =============================================================================

async fn handle_mcp_request(State(state): State<AppState>, Json(request): Json<JsonRpcRequest>) -> Response {
    match state.mcp.handle_request(&request).await {
        Some(response) => Json(response).into_response(),
        // Notification - return HTTP 202 Accepted with empty body
        None => (StatusCode::ACCEPTED, "").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(Navigator::offline()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_index_lists_modes() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["modes"]["auto"].as_str().is_some());
        assert!(value["modes"]["fast"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_demo_rejects_blank_text() {
        let (status, body) = post_json("/api/demo/analyze-text", json!({ "raw_text": "  \n " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_demo_returns_checklist_and_suggestions() {
        let (status, body) = post_json(
            "/api/demo/analyze-text",
            json!({ "raw_text": "Our governance framework covers climate matters." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pdf_meta"]["filename"], "User Input Text");
        assert_eq!(body["checklist"].as_array().unwrap().len(), 3);
        assert_eq!(body["sentence_suggestions"][0]["ifrs_codes"][0], "S2-5");
    }

    #[tokio::test]
    async fn test_map_fast_mode() {
        let (status, body) = post_json(
            "/api/map",
            json!({ "raw_text": "We ran a scenario analysis.", "industry": "Utilities", "mode": "fast" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidates"][0]["code"], "22–23,25");
    }

    #[tokio::test]
    async fn test_mcp_notification_is_accepted() {
        let (status, body) = post_json(
            "/mcp",
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_mcp_tools_list() {
        let (status, body) = post_json("/mcp", json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 6);
    }
}
