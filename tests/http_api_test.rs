//! REST and MCP endpoints served by the unified router

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use s2_navigator::mcp::router;
use s2_navigator::Navigator;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(Navigator::offline()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health_reports_tools_and_model() {
    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["llm_model"], "gpt-4o-mini");
    assert_eq!(body["backend"], "disabled");
    let tools: Vec<&str> = body["available_tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert!(tools.contains(&"map_to_ifrs_s2"));
    assert!(tools.contains(&"validate_disclosure"));
}

#[tokio::test]
async fn test_validate_defaults_industry() {
    let (status, body) = post(
        "/api/validate",
        json!({ "codes": ["S2-15"], "draft_text": "We ran a scenario analysis for 2050." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_status"], "pass");
    assert!(body["issues"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_enhance_unknown_code_gets_generic_title() {
    let (status, body) = post(
        "/api/enhance-paragraph",
        json!({ "paragraph": "We track physical risks.", "ifrs_code": "10(b)" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ifrs_title"], "IFRS S2 10(b)");
    assert!(body["missing_elements"].as_array().unwrap().is_empty());
    assert_eq!(body["completed_paragraph"], "We track physical risks.");
}

#[tokio::test]
async fn test_checklist_and_sentence_endpoints() {
    let (status, body) = post("/api/checklist", json!({ "draft_text": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = post(
        "/api/analyze-sentences",
        json!({ "raw_text": "Our governance framework covers climate matters." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["ifrs_titles"][0], "Governance (board/committee oversight)");
}

#[tokio::test]
async fn test_map_rejects_missing_fields() {
    let (status, _) = post("/api/map", json!({ "raw_text": "text" })).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_mcp_prompts_over_http() {
    let (status, body) = post(
        "/mcp",
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "prompts/get",
            "params": {
                "name": "draft_ifrs_s2_disclosure",
                "arguments": {
                    "codes": ["14"],
                    "company_profile": "Regional bank",
                    "source_text": "We finance renewable projects."
                }
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    let text = body["result"]["messages"][0]["content"]["text"].as_str().unwrap();
    assert!(text.contains("Regional bank"));
}
