use crate::models::{ChecklistItem, OverallStatus, Severity, ValidationIssue};
use crate::registry::RequirementRegistry;

/// Whole-document checklist over every registered requirement
pub struct ChecklistBuilder<'a> {
    registry: &'a RequirementRegistry,
}

impl<'a> ChecklistBuilder<'a> {
    pub fn new(registry: &'a RequirementRegistry) -> Self {
        Self { registry }
    }

    /// One item per requirement, in registry order, regardless of whether the
    /// text seems to address it
    pub fn build(&self, text: &str) -> Vec<ChecklistItem> {
        self.registry
            .iter()
            .map(|requirement| {
                let elements = self.registry.evaluate(text, requirement);
                let missing: Vec<_> = elements.iter().filter(|e| !e.present).collect();
                let present = elements.len() - missing.len();

                let status = if present == 0 {
                    OverallStatus::Fail
                } else if missing.is_empty() {
                    OverallStatus::Pass
                } else {
                    OverallStatus::Partial
                };

                let severity = if missing.len() == elements.len() {
                    Severity::Error
                } else {
                    Severity::Warning
                };

                let issues = missing
                    .iter()
                    .map(|element| {
                        ValidationIssue::new(
                            requirement.code.clone(),
                            severity,
                            format!("{} missing", element.label),
                            element.reason.clone(),
                            format!("Add information on {}. {}", element.label, element.reason),
                        )
                    })
                    .collect();

                ChecklistItem {
                    code: requirement.code.clone(),
                    title: requirement.title.clone(),
                    status,
                    issues,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_item_per_requirement_in_order() {
        let registry = RequirementRegistry::standard();
        let items = ChecklistBuilder::new(&registry).build("");

        let codes: Vec<&str> = items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["14", "22–23,25", "29(a)–29(c)"]);
        assert!(items.iter().all(|i| i.status == OverallStatus::Fail));
        assert!(items
            .iter()
            .flat_map(|i| &i.issues)
            .all(|issue| issue.severity == Severity::Error));
    }

    #[test]
    fn test_partial_items_emit_warnings() {
        let registry = RequirementRegistry::standard();
        let items = ChecklistBuilder::new(&registry).build(
            "Scope 1 emissions fell 12% against the 2019 base year, reaching 40% of our target.",
        );

        let emissions = &items[2];
        assert_eq!(emissions.status, OverallStatus::Partial);
        assert_eq!(emissions.issues.len(), 1);
        assert_eq!(emissions.issues[0].severity, Severity::Warning);
        assert_eq!(emissions.issues[0].title, "Progress against target missing");
        assert!(emissions.issues[0]
            .suggestion
            .starts_with("Add information on Progress against target."));
    }

    #[test]
    fn test_complete_text_passes() {
        let registry = RequirementRegistry::standard();
        let text = "Scope 1 and 2 emissions fell 12% against the 2019 base year; we target a 50% \
                    reduction and report progress year-on-year.";
        let items = ChecklistBuilder::new(&registry).build(text);
        assert_eq!(items[2].status, OverallStatus::Pass);
        assert!(items[2].issues.is_empty());
    }
}
