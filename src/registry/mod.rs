//! Static requirement configuration
//!
//! The registry and the group catalog are built once and shared read-only
//! across requests.

pub mod elements;
pub mod groups;

pub use elements::{has_number, ElementDetector, ElementDetectors, Probe, UNKNOWN_ELEMENT_REASON};
pub use groups::{literal_group_for, GroupCatalog, GOVERNANCE_GROUP, METRICS_GROUP, SCENARIO_GROUP};

use crate::models::{ElementCheckResult, Requirement};

/// Requirements with their required elements, in registration order
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
    detectors: ElementDetectors,
}

impl RequirementRegistry {
    pub fn new(requirements: Vec<Requirement>, detectors: ElementDetectors) -> Self {
        Self {
            requirements,
            detectors,
        }
    }

    /// Reference configuration: strategy/transition plan, scenario analysis
    /// and emission metrics
    pub fn standard() -> Self {
        let requirements = vec![
            Requirement::new(
                "14",
                "Climate-related strategy and transition plan",
                "Explain the strategy and transition plan responding to climate-related risks and \
                 opportunities, with key initiatives and quantitative information.",
            )
            .with_element("risk_type", "Risk or opportunity type")
            .with_element("time_horizon", "Time horizon")
            .with_element("financial_impact", "Financial impact")
            .with_element("strategic_response", "Strategic response")
            .with_element("quantitative_metrics", "Quantitative metrics"),
            Requirement::new(
                "22–23,25",
                "Climate scenario analysis and climate resilience",
                "Explain the climate scenarios used, key assumptions, financial effects and the \
                 climate resilience of the business and strategy.",
            )
            .with_element("scenario_description", "Scenario description")
            .with_element("key_assumptions", "Key assumptions")
            .with_element("resilience_evaluation", "Climate resilience assessment")
            .with_element("financial_impact", "Financial impact by scenario"),
            Requirement::new(
                "29(a)–29(c)",
                "Greenhouse gas emission metrics (Scope 1·2·3)",
                "Disclose core emission metrics: Scope 1·2·3 emissions, base year and target \
                 values, and progress against them.",
            )
            .with_element("scope_coverage", "Scope 1·2·3 coverage")
            .with_element("base_year", "Base year")
            .with_element("target_value", "Quantitative target")
            .with_element("progress", "Progress against target"),
        ];
        Self::new(requirements, ElementDetectors::standard())
    }

    pub fn get(&self, code: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn detectors(&self) -> &ElementDetectors {
        &self.detectors
    }

    /// Run every element detector of `requirement` over `text`
    pub fn evaluate(&self, text: &str, requirement: &Requirement) -> Vec<ElementCheckResult> {
        let probe = Probe::new(text);
        requirement
            .elements
            .iter()
            .map(|element| {
                let (present, reason) = self.detectors.detect_probe(&element.key, &probe);
                ElementCheckResult {
                    key: element.key.clone(),
                    label: element.label.clone(),
                    present,
                    reason,
                }
            })
            .collect()
    }

    /// Look up `code` and evaluate it; `None` for unregistered codes
    pub fn evaluate_code(&self, text: &str, code: &str) -> Option<(&Requirement, Vec<ElementCheckResult>)> {
        let requirement = self.get(code)?;
        Some((requirement, self.evaluate(text, requirement)))
    }
}

impl Default for RequirementRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = RequirementRegistry::standard();
        let codes: Vec<&str> = registry.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["14", "22–23,25", "29(a)–29(c)"]);
    }

    #[test]
    fn test_every_registered_element_has_a_detector() {
        let registry = RequirementRegistry::standard();
        for requirement in registry.iter() {
            for element in &requirement.elements {
                assert!(
                    registry.detectors().get(&element.key).is_some(),
                    "{} has no detector",
                    element.key
                );
            }
        }
    }

    #[test]
    fn test_evaluate_emission_paragraph() {
        let registry = RequirementRegistry::standard();
        let (requirement, elements) = registry
            .evaluate_code(
                "Scope 1 and Scope 2 emissions fell 12% against the 2019 base year.",
                "29(a)–29(c)",
            )
            .unwrap();

        assert_eq!(requirement.title, "Greenhouse gas emission metrics (Scope 1·2·3)");
        let flags: Vec<(&str, bool)> = elements.iter().map(|e| (e.key.as_str(), e.present)).collect();
        assert_eq!(
            flags,
            vec![
                ("scope_coverage", true),
                ("base_year", true),
                ("target_value", false),
                ("progress", false),
            ]
        );
        assert!(elements.iter().all(|e| !e.reason.is_empty()));
    }

    #[test]
    fn test_unregistered_code() {
        assert!(RequirementRegistry::standard().evaluate_code("text", "10(a)").is_none());
    }
}
