//! MCP (Model Context Protocol) and HTTP surfaces for the navigator
//!
//! ## Tools
//! - `map_to_ifrs_s2` - Rule-only paragraph mapping
//! - `map_hybrid` - Hybrid mapping with fast/accurate/auto modes
//! - `validate_disclosure` - Group-level presence checks
//! - `enhance_paragraph` - Missing-element detection and completion
//! - `build_checklist` - Whole-document requirement checklist
//! - `analyze_sentences` - Per-sentence gap report

pub mod http_server;
pub mod prompts;
pub mod server;
pub mod tools;

pub use http_server::{router, start_server};
pub use server::McpServer;
