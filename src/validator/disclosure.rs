use crate::models::{Severity, ValidationIssue, ValidationResult};
use crate::registry::{has_number, Probe, GOVERNANCE_GROUP, METRICS_GROUP, SCENARIO_GROUP};

/// Group-level presence checks over a draft disclosure
///
/// Which checks run is decided by literal predicates over the supplied codes,
/// so callers may pass group codes ("S2-9") or paragraph codes ("29(a)").
#[derive(Debug, Default, Clone, Copy)]
pub struct DisclosureValidator;

impl DisclosureValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `text` against every group triggered by `codes`
    pub fn validate<S: AsRef<str>>(&self, codes: &[S], text: &str) -> ValidationResult {
        let probe = Probe::new(text);
        let mut issues = Vec::new();

        if triggers_governance(codes) {
            issues.extend(self.check_governance(&probe));
        }
        if triggers_scenario(codes) {
            issues.extend(self.check_scenario(&probe));
        }
        if triggers_metrics(codes) {
            issues.extend(self.check_metrics(&probe));
        }

        ValidationResult::new(issues)
    }

    fn check_governance(&self, probe: &Probe) -> Vec<ValidationIssue> {
        if probe.mentions(&["이사회", "위원회", "board"]) {
            return Vec::new();
        }
        vec![ValidationIssue::new(
            GOVERNANCE_GROUP,
            Severity::Warning,
            "Board/committee responsibility not stated",
            "The text addresses governance, but the role of the board or a committee is not \
             explicitly described.",
            "Add the role and reporting line of the board committee responsible (e.g. a \
             sustainability or risk committee).",
        )]
    }

    fn check_scenario(&self, probe: &Probe) -> Vec<ValidationIssue> {
        if !probe.mentions(&["시나리오", "scenario"]) {
            return vec![ValidationIssue::new(
                SCENARIO_GROUP,
                Severity::Error,
                "Scenario analysis not mentioned",
                "The text is expected to cover scenario analysis (e.g. a 2℃ scenario), but no \
                 scenario analysis is explicitly mentioned.",
                "State which climate scenarios were used (e.g. NZE 2050, a below-2℃ scenario) and \
                 summarise the results.",
            )];
        }
        if !probe.has_number() {
            return vec![ValidationIssue::new(
                SCENARIO_GROUP,
                Severity::Warning,
                "Scenario analysis lacks quantitative information",
                "Scenario analysis is mentioned, but there is almost no quantitative information \
                 such as years, ratios or profit-and-loss effects.",
                "Include at least one or two results expressed as numbers, such as target years \
                 (2030, 2050) or loss rates and amounts at risk.",
            )];
        }
        Vec::new()
    }

    fn check_metrics(&self, probe: &Probe) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !probe.mentions(&["scope 1", "scope1", "스코프1", "scope 2", "scope2", "스코프2"]) {
            issues.push(ValidationIssue::new(
                METRICS_GROUP,
                Severity::Error,
                "Scope 1·2 emissions not mentioned",
                "The text covers metrics and targets, but Scope 1·2 greenhouse gas emissions or an \
                 equivalent expression are missing.",
                "Include at least the level of Scope 1 and Scope 2 emissions (e.g. in tCO2e) and the \
                 related targets.",
            ));
        }

        if !probe.mentions(&["scope 3", "scope3", "스코프3"]) {
            issues.push(ValidationIssue::new(
                METRICS_GROUP,
                Severity::Warning,
                "Scope 3 emissions not reported",
                "There is no mention of Scope 3 emissions or whether they apply.",
                "State whether Scope 3 emissions were calculated and, if not, why and what is \
                 planned, even in a single sentence.",
            ));
        }

        if !probe.mentions(&["기준연도", "base year"]) {
            issues.push(ValidationIssue::new(
                METRICS_GROUP,
                Severity::Warning,
                "Base year not stated",
                "The base year that emissions or reduction targets are measured against is not \
                 stated.",
                "State the base year explicitly, e.g. \"20XX emissions are set as the base year\".",
            ));
        }

        if !has_number(probe.text) {
            issues.push(ValidationIssue::new(
                METRICS_GROUP,
                Severity::Warning,
                "Quantitative target missing",
                "Reductions are described without a figure for how much or by what percentage.",
                "Write a target with figures, e.g. \"cut Scope 1+2 emissions 50% from the 2019 level \
                 by 2030\".",
            ));
        }

        issues
    }
}

fn any_code<S: AsRef<str>>(codes: &[S], predicate: impl Fn(&str, &str) -> bool) -> bool {
    codes.iter().any(|c| {
        let code = c.as_ref();
        predicate(code, &code.to_lowercase())
    })
}

pub fn triggers_governance<S: AsRef<str>>(codes: &[S]) -> bool {
    any_code(codes, |_, lower| lower.contains("s2-5") || lower.contains("governance"))
}

pub fn triggers_scenario<S: AsRef<str>>(codes: &[S]) -> bool {
    any_code(codes, |code, lower| {
        lower.contains("s2-15") || code.contains("22") || code.contains("23")
    })
}

pub fn triggers_metrics<S: AsRef<str>>(codes: &[S]) -> bool {
    any_code(codes, |code, lower| {
        code.contains("29") || code.contains("30") || lower.contains("s2-9")
    })
}
