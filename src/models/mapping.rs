use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Code of the sentinel candidate emitted when no rule fired
pub const NEEDS_REVIEW_CODE: &str = "(needs review)";

/// Code of the sentinel candidate emitted when the reasoning backend failed
/// and no rule hint was available
pub const GENERATION_ERROR_CODE: &str = "(generation error)";

/// A requirement code proposed for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingCandidate {
    /// IFRS S2 paragraph or paragraph range (e.g. "14", "22–23,25")
    pub code: String,
    /// Why the text was mapped to this code
    pub reason: String,
    /// Keywords that triggered the mapping, sorted; empty for backend results
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    /// Weight in [0, 1]
    #[serde(default)]
    pub score: f64,
}

impl MappingCandidate {
    pub fn is_sentinel(&self) -> bool {
        self.code == NEEDS_REVIEW_CODE || self.code == GENERATION_ERROR_CODE
    }
}

/// Ranked mapping candidates plus an overall confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub candidates: Vec<MappingCandidate>,
    pub coverage_comment: String,
    /// Reliability estimate in [0, 1]
    #[serde(default)]
    pub confidence: f64,
}

impl MappingResult {
    /// True when the only candidate is the "(needs review)" sentinel
    pub fn needs_review(&self) -> bool {
        self.candidates
            .first()
            .map_or(true, |c| c.code == NEEDS_REVIEW_CODE)
    }

    /// Candidate codes in order
    pub fn codes(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.code.as_str()).collect()
    }
}

/// Strategy of the hybrid decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Rule matcher only, no backend call
    Fast,
    /// Always ask the reasoning backend, with the rule result as a hint
    Accurate,
    /// Rule matcher first, escalate when confidence is below the threshold
    #[default]
    Auto,
}

impl MappingMode {
    pub fn name(&self) -> &'static str {
        match self {
            MappingMode::Fast => "fast",
            MappingMode::Accurate => "accurate",
            MappingMode::Auto => "auto",
        }
    }

    /// Human description used by the service index and CLI help
    pub fn description(&self) -> &'static str {
        match self {
            MappingMode::Fast => "Rule-based only (instant response)",
            MappingMode::Accurate => "Rule hints + reasoning backend decides (2-3 s)",
            MappingMode::Auto => {
                "Rule-based first, reasoning backend when confidence is low (default)"
            }
        }
    }
}

impl FromStr for MappingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(MappingMode::Fast),
            "accurate" => Ok(MappingMode::Accurate),
            "auto" => Ok(MappingMode::Auto),
            other => anyhow::bail!("Unknown mapping mode: {} (expected fast|accurate|auto)", other),
        }
    }
}
