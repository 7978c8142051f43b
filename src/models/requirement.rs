use serde::{Deserialize, Serialize};

use super::ElementCheckResult;

/// An informational element a disclosure paragraph must contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredElement {
    /// Detector key (e.g. "time_horizon")
    pub key: String,
    /// Display label
    pub label: String,
}

impl RequiredElement {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A fine-grained IFRS S2 requirement with its required elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Paragraph code (e.g. "29(a)–29(c)")
    pub code: String,
    pub title: String,
    pub summary: String,
    pub elements: Vec<RequiredElement>,
}

impl Requirement {
    pub fn new(code: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            summary: summary.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, key: &str, label: &str) -> Self {
        self.elements.push(RequiredElement::new(key, label));
        self
    }
}

/// Coarse semantic cluster over requirement codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementGroup {
    /// Group code (e.g. "S2-15")
    pub code: String,
    pub title: String,
    /// Paragraph ranges this group covers
    pub paragraphs: Vec<String>,
    pub essential: bool,
}

/// Response of the paragraph enhancement operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementResult {
    #[serde(rename = "ifrs_code")]
    pub code: String,
    #[serde(rename = "ifrs_title")]
    pub title: String,
    /// Every evaluated element with its presence flag
    pub missing_elements: Vec<ElementCheckResult>,
    pub completed_paragraph: String,
}

impl EnhancementResult {
    /// Elements the detector could not find
    pub fn absent(&self) -> impl Iterator<Item = &ElementCheckResult> {
        self.missing_elements.iter().filter(|e| !e.present)
    }
}
