//! Requirement group catalog
//!
//! Groups are the coarse clusters the validation engine checks against:
//! governance, scenario analysis, and metrics/targets/emissions.

use crate::models::RequirementGroup;

pub const GOVERNANCE_GROUP: &str = "S2-5";
pub const SCENARIO_GROUP: &str = "S2-15";
pub const METRICS_GROUP: &str = "S2-9";

/// Literal paragraph-code → group rules used by the per-sentence analyzer,
/// checked in order against the space-stripped code.
///
/// These are plain substring tests. A bare "25" also resolves codes such as
/// "24–25" to the scenario group.
const LITERAL_GROUP_RULES: [(&[&str], &str); 5] = [
    (&["5–7", "5-7"], GOVERNANCE_GROUP),
    (&["22–23", "22-23"], SCENARIO_GROUP),
    (&["25"], SCENARIO_GROUP),
    (&["29(a)", "29(a)–29(c)", "29(a)-29(c)"], METRICS_GROUP),
    (&["33", "34", "35", "36"], METRICS_GROUP),
];

/// Ordered, immutable group catalog
#[derive(Debug, Clone)]
pub struct GroupCatalog {
    groups: Vec<RequirementGroup>,
}

impl GroupCatalog {
    pub fn new(groups: Vec<RequirementGroup>) -> Self {
        Self { groups }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            group(
                GOVERNANCE_GROUP,
                "Governance (board/committee oversight)",
                &["5–7"],
            ),
            group(SCENARIO_GROUP, "Climate scenario analysis", &["22–23", "25"]),
            group(
                METRICS_GROUP,
                "Metrics, targets and emissions (Scope 1·2·3)",
                &["29(a)–29(c)", "33–36"],
            ),
        ])
    }

    pub fn groups(&self) -> &[RequirementGroup] {
        &self.groups
    }

    pub fn get(&self, code: &str) -> Option<&RequirementGroup> {
        self.groups.iter().find(|g| g.code == code)
    }

    /// Groups every disclosure must address
    pub fn essential_groups(&self) -> impl Iterator<Item = &RequirementGroup> {
        self.groups.iter().filter(|g| g.essential)
    }

    /// Title for UI display, or the code itself when unknown
    pub fn display_title<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map_or(code, |g| g.title.as_str())
    }

    /// Resolve a paragraph code through the catalog's paragraph lists.
    ///
    /// Whitespace is ignored and containment is tested both ways, so
    /// "22–23,25" resolves through its "22–23" entry.
    pub fn group_for_paragraph(&self, paragraph_code: &str) -> Option<&str> {
        let normalized = strip_spaces(paragraph_code);
        if normalized.is_empty() {
            return None;
        }

        self.groups
            .iter()
            .find(|g| {
                g.paragraphs.iter().any(|p| {
                    let p = strip_spaces(p);
                    p.contains(&normalized) || normalized.contains(&p)
                })
            })
            .map(|g| g.code.as_str())
    }
}

impl Default for GroupCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn group(code: &str, title: &str, paragraphs: &[&str]) -> RequirementGroup {
    RequirementGroup {
        code: code.to_string(),
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        essential: true,
    }
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Group for a rule-matcher paragraph code, by the fixed literal rule table
pub fn literal_group_for(paragraph_code: &str) -> Option<&'static str> {
    let normalized = paragraph_code.replace(' ', "");
    if normalized.is_empty() {
        return None;
    }

    LITERAL_GROUP_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| normalized.contains(n)))
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rules_for_reference_codes() {
        assert_eq!(literal_group_for("5–7"), Some(GOVERNANCE_GROUP));
        assert_eq!(literal_group_for("22–23,25"), Some(SCENARIO_GROUP));
        assert_eq!(literal_group_for("29(a)–29(c)"), Some(METRICS_GROUP));
        assert_eq!(literal_group_for("33–36"), Some(METRICS_GROUP));
        assert_eq!(literal_group_for("14"), None);
        assert_eq!(literal_group_for("10(b)"), None);
        assert_eq!(literal_group_for(""), None);
    }

    #[test]
    fn test_literal_rules_pin_ambiguous_cases() {
        // Risk management codes collide with the bare "25" rule
        assert_eq!(literal_group_for("24–25"), Some(SCENARIO_GROUP));
        // ASCII hyphen variant is accepted
        assert_eq!(literal_group_for("5-7"), Some(GOVERNANCE_GROUP));
        assert_eq!(literal_group_for("5 – 7"), Some(GOVERNANCE_GROUP));
        // Other dash characters are not
        assert_eq!(literal_group_for("5—7"), None);
        // "15–16" contains neither a rule literal nor "25"
        assert_eq!(literal_group_for("15–16"), None);
        // Any code mentioning 34 lands in metrics
        assert_eq!(literal_group_for("134"), Some(METRICS_GROUP));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = GroupCatalog::standard();
        assert_eq!(catalog.essential_groups().count(), 3);
        assert_eq!(catalog.display_title("S2-15"), "Climate scenario analysis");
        assert_eq!(catalog.display_title("S2-99"), "S2-99");
    }

    #[test]
    fn test_group_for_paragraph_two_way_containment() {
        let catalog = GroupCatalog::standard();
        assert_eq!(catalog.group_for_paragraph("5–7"), Some(GOVERNANCE_GROUP));
        assert_eq!(catalog.group_for_paragraph("22–23,25"), Some(SCENARIO_GROUP));
        assert_eq!(catalog.group_for_paragraph("29(a)"), Some(METRICS_GROUP));
        assert_eq!(catalog.group_for_paragraph("33 – 36"), Some(METRICS_GROUP));
        assert_eq!(catalog.group_for_paragraph("14"), None);
        assert_eq!(catalog.group_for_paragraph("  "), None);
    }
}
