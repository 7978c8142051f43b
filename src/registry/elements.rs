//! Required-element detectors
//!
//! Each element key maps to an independent predicate plus the two reasons
//! shown to users. Predicates work on the raw text and its lowercase form;
//! keyword sets are bilingual (English/Korean).

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Reason returned for keys without a detector
pub const UNKNOWN_ELEMENT_REASON: &str = "Cannot be judged automatically; manual review required.";

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"20\d{2}\s*년|\b20\d{2}\b").expect("valid year regex"))
}

fn base_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"20\d{2}\s*년.*기준").expect("valid base year regex"))
}

/// Input to a detector predicate
pub struct Probe<'a> {
    pub text: &'a str,
    pub lower: String,
}

impl<'a> Probe<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
        }
    }

    /// Any keyword (lowercased) is contained in the lowercased text
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords
            .iter()
            .any(|kw| self.lower.contains(&kw.to_lowercase()))
    }

    pub fn has_number(&self) -> bool {
        has_number(self.text)
    }

    pub fn has_year(&self) -> bool {
        year_re().is_match(self.text)
    }
}

/// True if the text contains any digit
pub fn has_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// One element's heuristic and its user-facing explanations
#[derive(Clone, Copy)]
pub struct ElementDetector {
    predicate: fn(&Probe) -> bool,
    present_reason: &'static str,
    absent_reason: &'static str,
}

impl ElementDetector {
    pub fn new(
        predicate: fn(&Probe) -> bool,
        present_reason: &'static str,
        absent_reason: &'static str,
    ) -> Self {
        Self {
            predicate,
            present_reason,
            absent_reason,
        }
    }

    pub fn detect(&self, probe: &Probe) -> (bool, &'static str) {
        if (self.predicate)(probe) {
            (true, self.present_reason)
        } else {
            (false, self.absent_reason)
        }
    }
}

impl std::fmt::Debug for ElementDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDetector")
            .field("present_reason", &self.present_reason)
            .finish()
    }
}

fn risk_type(p: &Probe) -> bool {
    p.mentions(&[
        "전환 리스크",
        "물리적 리스크",
        "기후 리스크",
        "기후 관련 리스크",
        "기후 관련 위험",
        "기회",
        "비즈니스 기회",
        "transition risk",
        "physical risk",
        "climate risk",
        "climate-related risk",
        "opportunit",
    ])
}

fn time_horizon(p: &Probe) -> bool {
    p.has_year()
        || p.mentions(&[
            "단기",
            "중기",
            "장기",
            "short-term",
            "short term",
            "medium-term",
            "medium term",
            "long-term",
            "long term",
        ])
}

fn financial_impact(p: &Probe) -> bool {
    p.has_number()
        && p.mentions(&[
            "비용",
            "매출",
            "손익",
            "영업이익",
            "투자",
            "현금흐름",
            "손실",
            "영향",
            "cost",
            "revenue",
            "profit",
            "operating income",
            "investment",
            "cash flow",
            "loss",
            "impact",
        ])
}

fn strategic_response(p: &Probe) -> bool {
    p.mentions(&[
        "전략",
        "계획",
        "로드맵",
        "대응",
        "완화",
        "전환",
        "투자 확대",
        "재생에너지",
        "감축 활동",
        "strategy",
        "plan",
        "roadmap",
        "respond",
        "mitigat",
        "transition",
        "renewable",
    ])
}

fn quantitative_metrics(p: &Probe) -> bool {
    p.has_number() && p.mentions(&["비율", "%", "지표", "목표", "감축률", "ratio", "metric", "target", "reduction rate"])
}

fn scenario_description(p: &Probe) -> bool {
    p.mentions(&["시나리오", "scenario", "1.5", "2℃", "4℃", "nze", "넷제로", "net zero"])
}

fn key_assumptions(p: &Probe) -> bool {
    p.mentions(&[
        "가정",
        "전제",
        "탄소 가격",
        "수요",
        "성장률",
        "가격",
        "assum",
        "carbon price",
        "demand",
        "growth rate",
        "price",
    ])
}

fn resilience_evaluation(p: &Probe) -> bool {
    p.mentions(&[
        "탄력성",
        "resilien",
        "견조",
        "유지 가능",
        "영향을 흡수",
        "버틸 수",
        "withstand",
        "absorb",
    ])
}

fn scope_coverage(p: &Probe) -> bool {
    p.mentions(&[
        "scope 1", "scope1", "scope 2", "scope2", "scope 3", "scope3", "스코프1", "스코프2", "스코프3",
    ])
}

fn base_year(p: &Probe) -> bool {
    p.mentions(&["기준연도", "base year", "baseline year"]) || base_year_re().is_match(p.text)
}

fn target_value(p: &Probe) -> bool {
    p.has_number()
        && p.mentions(&[
            "감축", "목표", "줄이", "낮추", "달성", "reduc", "target", "cut by", "lower", "achieve",
        ])
}

fn progress(p: &Probe) -> bool {
    p.mentions(&[
        "달성률",
        "진행률",
        "이행 상황",
        "성과",
        "추세",
        "year-on-year",
        "yoy",
        "progress",
        "trend",
        "achieved",
    ])
}

/// Detector strategy map keyed by element key
#[derive(Debug, Clone)]
pub struct ElementDetectors {
    detectors: BTreeMap<&'static str, ElementDetector>,
}

impl ElementDetectors {
    pub fn standard() -> Self {
        let detectors = BTreeMap::from([
            (
                "risk_type",
                ElementDetector::new(
                    risk_type,
                    "The type of climate-related risk or opportunity is mentioned.",
                    "The type of climate-related risk or opportunity is not clearly stated in the paragraph.",
                ),
            ),
            (
                "time_horizon",
                ElementDetector::new(
                    time_horizon,
                    "A time horizon (a year or short/medium/long term) is stated.",
                    "No time horizon (a year or short/medium/long term) is stated.",
                ),
            ),
            (
                "financial_impact",
                ElementDetector::new(
                    financial_impact,
                    "Financial effects (cost, revenue or profit with figures) are included.",
                    "Financial effects are not explained sufficiently. State how this strategy affects \
                     financial performance (e.g. cost savings, revenue growth).",
                ),
            ),
            (
                "strategic_response",
                ElementDetector::new(
                    strategic_response,
                    "A response strategy or transition plan is described.",
                    "No concrete response strategy or transition plan is described. State which \
                     climate-related risk or opportunity the strategy responds to.",
                ),
            ),
            (
                "quantitative_metrics",
                ElementDetector::new(
                    quantitative_metrics,
                    "Quantitative targets or metrics for the strategy are included.",
                    "Quantitative targets that measure the strategy's effect (e.g. reduction ratio, \
                     investment amount) are missing.",
                ),
            ),
            (
                "scenario_description",
                ElementDetector::new(
                    scenario_description,
                    "The climate scenario used is mentioned.",
                    "The climate scenario used is not stated.",
                ),
            ),
            (
                "key_assumptions",
                ElementDetector::new(
                    key_assumptions,
                    "The key assumptions behind the scenario are explained.",
                    "The key assumptions behind the scenario are not explained.",
                ),
            ),
            (
                "resilience_evaluation",
                ElementDetector::new(
                    resilience_evaluation,
                    "An assessment of climate resilience is included.",
                    "There is little or no assessment of whether the strategy can withstand the scenarios \
                     (climate resilience).",
                ),
            ),
            (
                "scope_coverage",
                ElementDetector::new(
                    scope_coverage,
                    "The Scope 1·2·3 emission boundaries are mentioned.",
                    "The Scope 1·2·3 emission boundaries are not mentioned.",
                ),
            ),
            (
                "base_year",
                ElementDetector::new(
                    base_year,
                    "A base year is stated.",
                    "No base year is stated.",
                ),
            ),
            (
                "target_value",
                ElementDetector::new(
                    target_value,
                    "A quantitative target value is included.",
                    "The target is described without concrete figures.",
                ),
            ),
            (
                "progress",
                ElementDetector::new(
                    progress,
                    "Progress or trends against the target are described.",
                    "Progress or trends against the target are hardly described.",
                ),
            ),
        ]);
        Self { detectors }
    }

    pub fn get(&self, key: &str) -> Option<&ElementDetector> {
        self.detectors.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.detectors.keys().copied()
    }

    /// Presence flag and user-facing reason for `key` in `text`
    pub fn detect(&self, key: &str, text: &str) -> (bool, String) {
        self.detect_probe(key, &Probe::new(text))
    }

    pub(crate) fn detect_probe(&self, key: &str, probe: &Probe) -> (bool, String) {
        match self.detectors.get(key) {
            Some(detector) => {
                let (present, reason) = detector.detect(probe);
                (present, reason.to_string())
            }
            None => (false, UNKNOWN_ELEMENT_REASON.to_string()),
        }
    }
}

impl Default for ElementDetectors {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(key: &str, text: &str) -> bool {
        ElementDetectors::standard().detect(key, text).0
    }

    #[test]
    fn test_every_detector_explains_both_outcomes() {
        let detectors = ElementDetectors::standard();
        for key in detectors.keys() {
            let (_, absent) = detectors.detect(key, "");
            assert!(!absent.is_empty(), "{}", key);
            let detector = detectors.get(key).unwrap();
            assert!(!detector.present_reason.is_empty(), "{}", key);
            assert_ne!(detector.present_reason, detector.absent_reason, "{}", key);
        }
    }

    #[test]
    fn test_unknown_key_requires_manual_review() {
        let (present, reason) = ElementDetectors::standard().detect("water_usage", "anything");
        assert!(!present);
        assert_eq!(reason, UNKNOWN_ELEMENT_REASON);
    }

    #[test]
    fn test_time_horizon_year_patterns() {
        assert!(present("time_horizon", "By 2030 we will electrify the fleet."));
        assert!(present("time_horizon", "2030년까지 전환을 완료합니다."));
        assert!(present("time_horizon", "장기적으로 대응합니다."));
        assert!(present("time_horizon", "Over the long term, demand will shift."));
        assert!(!present("time_horizon", "We will act soon, within 120302 units."));
    }

    #[test]
    fn test_financial_impact_needs_number_and_keyword() {
        assert!(!present("financial_impact", "Costs will rise."));
        assert!(!present("financial_impact", "We emitted 120 tonnes."));
        assert!(present("financial_impact", "Costs will rise by 5 billion won."));
        assert!(present("financial_impact", "매출이 3% 감소할 수 있습니다."));
    }

    #[test]
    fn test_scope_and_base_year() {
        assert!(present("scope_coverage", "SCOPE1 emissions were flat."));
        assert!(present("scope_coverage", "스코프3 배출량을 산정했습니다."));
        assert!(!present("scope_coverage", "Emissions were flat."));

        assert!(present("base_year", "Against the base year, emissions fell."));
        assert!(present("base_year", "2019년 배출량 기준으로 30% 감축"));
        assert!(!present("base_year", "Emissions fell 30%."));
    }

    #[test]
    fn test_target_value_and_progress() {
        assert!(present("target_value", "We target a 42% reduction."));
        assert!(!present("target_value", "We aim to reduce emissions."));
        assert!(present("progress", "Year-on-year emissions fell."));
        assert!(!present("progress", "Emissions are reported annually."));
    }
}
