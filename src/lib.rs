// S2 Navigator - IFRS S2 mapping, validation and enhancement engine
// Hybrid rule/LLM classification of climate disclosures with gap detection

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod mcp;
pub mod models;
pub mod orchestrator;
pub mod registry;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use engine::Navigator;
pub use error::GenerationError;
pub use models::{
    ChecklistItem, EnhancementResult, MappingMode, MappingResult, NavigatorConfig, OverallStatus,
    SentenceSuggestion, Severity, ValidationResult,
};
