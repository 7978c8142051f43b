use serde::{Deserialize, Serialize};

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, never affects the overall status
    Info,
    /// Something is thin or missing; downgrades the status to partial
    Warning,
    /// A required disclosure is absent; the section fails
    Error,
}

impl Severity {
    /// Get display symbol for severity
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Error => "🔴",
            Severity::Warning => "🟡",
            Severity::Info => "🔵",
        }
    }

    /// Get display name for severity
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// Overall verdict for a draft, a checklist item or a sentence.
///
/// Variants are ordered by urgency so `max()` over a set of statuses yields the
/// aggregate (fail > partial > pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pass,
    Partial,
    Fail,
}

impl OverallStatus {
    /// Derive the status from issue severities: fail iff any error, partial iff any
    /// warning, pass otherwise.
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        if issues.iter().any(|i| i.severity == Severity::Error) {
            OverallStatus::Fail
        } else if issues.iter().any(|i| i.severity == Severity::Warning) {
            OverallStatus::Partial
        } else {
            OverallStatus::Pass
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "pass",
            OverallStatus::Partial => "partial",
            OverallStatus::Fail => "fail",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "✅",
            OverallStatus::Partial => "⚠️",
            OverallStatus::Fail => "❌",
        }
    }
}

/// A single finding against a draft disclosure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Requirement or group code the issue belongs to (e.g. "S2-9", "14")
    pub code: String,
    pub severity: Severity,
    /// One-line title for UI display
    pub title: String,
    /// Why this is a problem and what the check looked at
    pub detail: String,
    /// What the author should add or change
    pub suggestion: String,
}

impl ValidationIssue {
    pub fn new(
        code: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        detail: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            severity,
            title: title.into(),
            detail: detail.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Format issue for display
    pub fn format(&self) -> String {
        format!(
            "{} [{}] {} - {}",
            self.severity.symbol(),
            self.severity.name(),
            self.code,
            self.title
        )
    }
}

/// Result of validating a draft against requirement groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub overall_status: OverallStatus,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Build a result, deriving the status from the issues
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self {
            overall_status: OverallStatus::from_issues(&issues),
            issues,
        }
    }

    /// Count issues by severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Format all issues for display
    pub fn format_issues(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.format())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Outcome of one element detector run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCheckResult {
    pub key: String,
    pub label: String,
    pub present: bool,
    /// Shown verbatim to end users
    pub reason: String,
}

/// One row of the whole-document checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Internal requirement code (e.g. "22–23,25"); UIs should display `title`
    pub code: String,
    pub title: String,
    pub status: OverallStatus,
    pub issues: Vec<ValidationIssue>,
}

/// Issues flagged for a single sentence of a longer text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSuggestion {
    /// Position of the sentence in the segmented text (0-based)
    #[serde(rename = "sentence_index")]
    pub index: usize,
    #[serde(rename = "sentence_text")]
    pub text: String,
    /// Resolved requirement group codes, sorted
    #[serde(rename = "ifrs_codes")]
    pub group_codes: Vec<String>,
    /// Display titles matching `group_codes`
    #[serde(rename = "ifrs_titles")]
    pub group_titles: Vec<String>,
    pub overall_status: OverallStatus,
    pub issues: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ValidationIssue {
        ValidationIssue::new("S2-9", severity, "t", "d", "s")
    }

    #[test]
    fn test_status_is_monotone_in_severity() {
        assert_eq!(OverallStatus::from_issues(&[]), OverallStatus::Pass);
        assert_eq!(
            OverallStatus::from_issues(&[issue(Severity::Info)]),
            OverallStatus::Pass
        );
        assert_eq!(
            OverallStatus::from_issues(&[issue(Severity::Info), issue(Severity::Warning)]),
            OverallStatus::Partial
        );
        assert_eq!(
            OverallStatus::from_issues(&[issue(Severity::Warning), issue(Severity::Error)]),
            OverallStatus::Fail
        );
    }

    #[test]
    fn test_status_ordering_aggregates_with_max() {
        let statuses = [OverallStatus::Pass, OverallStatus::Fail, OverallStatus::Partial];
        assert_eq!(statuses.iter().max(), Some(&OverallStatus::Fail));
    }

    #[test]
    fn test_wire_format_uses_lowercase_and_legacy_names() {
        let suggestion = SentenceSuggestion {
            index: 2,
            text: "Board oversight is described.".to_string(),
            group_codes: vec!["S2-5".to_string()],
            group_titles: vec!["Governance".to_string()],
            overall_status: OverallStatus::Partial,
            issues: vec![issue(Severity::Warning)],
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["sentence_index"], 2);
        assert_eq!(json["ifrs_codes"][0], "S2-5");
        assert_eq!(json["overall_status"], "partial");
        assert_eq!(json["issues"][0]["severity"], "warning");
    }
}
