//! Per-sentence analysis of longer texts
//!
//! Each retained sentence is classified by the rule matcher alone, its
//! paragraph codes are folded into requirement groups, and every group is
//! validated against the sentence. Only sentences with findings are reported.

pub mod segmenter;

pub use segmenter::{segment, split_sentences, MIN_SENTENCE_CHARS};

use crate::mapping::Ruleset;
use crate::models::{OverallStatus, SentenceSuggestion};
use crate::registry::{literal_group_for, GroupCatalog};
use crate::validator::DisclosureValidator;
use std::collections::BTreeSet;

pub struct SentenceAnalyzer<'a> {
    rules: &'a Ruleset,
    groups: &'a GroupCatalog,
    validator: DisclosureValidator,
}

impl<'a> SentenceAnalyzer<'a> {
    pub fn new(rules: &'a Ruleset, groups: &'a GroupCatalog) -> Self {
        Self {
            rules,
            groups,
            validator: DisclosureValidator::new(),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<SentenceSuggestion> {
        segment(text)
            .into_iter()
            .filter_map(|(index, sentence)| self.analyze_sentence(index, sentence))
            .collect()
    }

    fn analyze_sentence(&self, index: usize, sentence: String) -> Option<SentenceSuggestion> {
        let mapping = self.rules.match_text(&sentence);
        let group_codes: BTreeSet<&'static str> = mapping
            .candidates
            .iter()
            .filter(|c| !c.is_sentinel())
            .filter_map(|c| literal_group_for(&c.code))
            .collect();
        if group_codes.is_empty() {
            return None;
        }

        let mut issues = Vec::new();
        let mut status = OverallStatus::Pass;
        for group in &group_codes {
            let result = self.validator.validate(&[*group], &sentence);
            status = status.max(result.overall_status);
            issues.extend(result.issues);
        }
        if issues.is_empty() {
            return None;
        }

        Some(SentenceSuggestion {
            index,
            text: sentence,
            group_titles: group_codes
                .iter()
                .map(|g| self.groups.display_title(g).to_string())
                .collect(),
            group_codes: group_codes.iter().map(|g| g.to_string()).collect(),
            overall_status: status,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Vec<SentenceSuggestion> {
        let rules = Ruleset::standard();
        let groups = GroupCatalog::standard();
        SentenceAnalyzer::new(&rules, &groups).analyze(text)
    }

    #[test]
    fn test_governance_sentence_without_board_is_flagged() {
        let suggestions = analyze("Our governance framework covers climate matters.");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].index, 0);
        assert_eq!(suggestions[0].group_codes, vec!["S2-5"]);
        assert_eq!(
            suggestions[0].group_titles,
            vec!["Governance (board/committee oversight)"]
        );
        assert_eq!(suggestions[0].overall_status, OverallStatus::Partial);
    }

    #[test]
    fn test_clean_and_unmapped_sentences_are_skipped() {
        // Governance with a board mention has nothing to flag; the second
        // sentence maps only to paragraph 14, which has no group.
        let suggestions = analyze(
            "이사회는 governance 체계를 통해 기후 문제를 감독합니다. Our transition plan is ambitious.",
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_groups_are_sorted_and_status_aggregated() {
        let suggestions = analyze(
            "Short.\nWe disclose Scope 1 emissions and ran a scenario analysis on our governance.",
        );
        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.index, 1);
        assert_eq!(s.group_codes, vec!["S2-15", "S2-5", "S2-9"]);
        // Scenario passes (a digit is present); the other groups only warn
        assert_eq!(s.overall_status, OverallStatus::Partial);
        assert!(s.issues.iter().any(|i| i.code == "S2-9"));
        assert!(s.issues.iter().any(|i| i.code == "S2-5"));
    }

    #[test]
    fn test_risk_management_sentence_resolves_to_scenario_group() {
        // "24–25" hits the bare "25" literal rule
        let suggestions = analyze("기후 리스크 관리 절차를 매년 점검합니다.");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].group_codes, vec!["S2-15"]);
        assert_eq!(suggestions[0].overall_status, OverallStatus::Fail);
    }
}
