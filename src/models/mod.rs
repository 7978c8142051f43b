pub mod config;
pub mod mapping;
pub mod requirement;
pub mod validation;

pub use config::{BackendKind, DefaultsConfig, GeneratorConfig, NavigatorConfig, ServerConfig};
pub use mapping::{
    MappingCandidate, MappingMode, MappingResult, GENERATION_ERROR_CODE, NEEDS_REVIEW_CODE,
};
pub use requirement::{EnhancementResult, RequiredElement, Requirement, RequirementGroup};
pub use validation::{
    ChecklistItem, ElementCheckResult, OverallStatus, SentenceSuggestion, Severity,
    ValidationIssue, ValidationResult,
};
