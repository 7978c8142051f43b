//! Keyword rules and the rule matcher
//!
//! Each rule is a (keywords, code, rationale) triple. Matching is a
//! case-insensitive substring test; a rule contributes at most one keyword
//! per text, while a code may collect keywords from several rules.

use super::confidence::score_confidence;
use crate::models::{MappingCandidate, MappingResult, NEEDS_REVIEW_CODE};
use std::collections::BTreeSet;

const NO_MATCH_REASON: &str =
    "No clear IFRS S2 keyword was found in the text; manual review is required.";

const NO_MATCH_COMMENT: &str = "Automatic mapping is not possible without clear keywords. \
Review the paragraph manually and decide which section (governance, strategy, risk management, \
metrics and targets) it is closest to.";

const MATCH_COMMENT: &str = "Suggested IFRS S2 paragraph candidates based on the main keywords \
in the text. Review and adjust the final mapping against the IFRS S2 text and the company's \
situation before publishing.";

/// A keyword-set → requirement code classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub code: String,
    pub rationale: String,
}

impl Rule {
    pub fn new(keywords: &[&str], code: &str, rationale: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            code: code.to_string(),
            rationale: rationale.to_string(),
        }
    }

    /// First keyword contained in the already-lowercased text
    pub fn first_hit(&self, text_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| text_lower.contains(&kw.to_lowercase()))
            .map(|kw| kw.as_str())
    }
}

/// Ordered, immutable rule list
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Reference rule set covering governance, risks and opportunities, value
    /// chain, strategy, financial effects, scenario analysis, targets and
    /// emission metrics. Keywords are bilingual (English/Korean).
    pub fn standard() -> Self {
        Self::new(vec![
            Rule::new(
                &[
                    "governance",
                    "거버넌스",
                    "이사회",
                    "ESG위원회",
                    "ESG 위원회",
                    "ESG 협의체",
                    "기후 관련 위험 및 기회에 대한 이사회의 감독",
                    "기후 관련 위험 및 기회에 대한 경영진의 책임",
                ],
                "5–7",
                "Describes the role of the board, committees or management in overseeing \
                 climate-related risks and opportunities.",
            ),
            Rule::new(
                &[
                    "기후 리스크 관리",
                    "기후 관련 리스크 관리",
                    "기후 관련 위험 관리",
                    "climate risk management",
                    "기후 리스크 식별",
                    "기후 관련 위험 식별",
                    "기후 관련 리스크 평가",
                    "기후 관련 위험 평가",
                ],
                "24–25",
                "Describes the process for identifying, assessing, prioritising and monitoring \
                 climate-related risks.",
            ),
            Rule::new(
                &[
                    "기후 관련 비즈니스 기회",
                    "기후 관련 기회",
                    "climate-related opportunity",
                    "기후 관련 비즈니스",
                    "저탄소 솔루션",
                    "저탄소 서비스",
                    "저탄소 물류",
                ],
                "10(a)",
                "Describes climate-related business opportunities such as low-carbon \
                 solutions and services.",
            ),
            Rule::new(
                &[
                    "climate risk",
                    "climate-related risk",
                    "climate-related risks",
                    "기후 리스크",
                    "기후 관련 리스크",
                    "기후변화 리스크",
                    "기후 관련 위험",
                    "전환 리스크",
                    "물리적 리스크",
                    "탄소세",
                    "탄소배출권",
                    "배출권",
                ],
                "10(b)",
                "Covers climate-related risks (transition or physical, carbon taxes, emission \
                 allowances) and their effect on the company's prospects and finances.",
            ),
            Rule::new(
                &[
                    "value chain",
                    "가치사슬",
                    "supply chain",
                    "밸류체인",
                    "공급망",
                    "협력사",
                    "협력회사",
                    "업스트림 운송",
                    "다운스트림",
                ],
                "13",
                "Describes how climate-related risks and opportunities affect the business \
                 model and value chain (supply chain, suppliers).",
            ),
            Rule::new(
                &[
                    "기후변화 대응 전략",
                    "기후변화 대응",
                    "기후 관련 대응 방안",
                    "탄소중립",
                    "탄소 중립",
                    "Net Zero Roadmap",
                    "넷제로 로드맵",
                    "온실가스 감축 활동",
                    "재생에너지 확대",
                    "전환 계획",
                    "transition plan",
                ],
                "14",
                "Describes the strategy and transition plan responding to climate-related \
                 risks and opportunities, with its key initiatives.",
            ),
            Rule::new(
                &[
                    "재무영향",
                    "재무 영향",
                    "재무적 영향",
                    "매출",
                    "영업이익",
                    "비용",
                    "손익",
                    "현금흐름",
                    "cash flow",
                    "cash flows",
                    "재무상태표",
                    "손익계산서",
                ],
                "15–16",
                "Describes current and anticipated effects of climate-related risks and \
                 opportunities on financial position, performance and cash flows.",
            ),
            Rule::new(
                &[
                    "기후 시나리오",
                    "시나리오 분석",
                    "scenario analysis",
                    "1.5℃ 시나리오",
                    "2℃ 시나리오",
                    "RCP",
                    "탄소가격 시나리오",
                ],
                "22–23,25",
                "Describes climate-related scenario analysis and its use in assessing climate \
                 resilience and identifying risks.",
            ),
            Rule::new(
                &[
                    "감축 목표",
                    "온실가스 감축",
                    "배출량 감축 목표",
                    "net zero",
                    "Net Zero",
                    "넷제로",
                    "재생에너지 100",
                    "재생에너지 100%",
                ],
                "33–36",
                "Describes quantitative greenhouse-gas and energy-transition targets and \
                 progress against them.",
            ),
            Rule::new(
                &[
                    "Scope 1",
                    "Scope 2",
                    "Scope 3",
                    "scope 1",
                    "scope 2",
                    "scope 3",
                    "스코프1",
                    "스코프2",
                    "스코프3",
                    "tCO2eq",
                    "온실가스 배출량",
                ],
                "29(a)–29(c)",
                "Discloses core emission metrics such as Scope 1/2/3 greenhouse-gas emissions.",
            ),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classify text by keyword rules.
    ///
    /// Candidates appear in the order their code first matched. Each carries
    /// the rationale of the first rule that hit it, the sorted keyword set and
    /// `score = min(1, 0.2 × keywords)`.
    pub fn match_text(&self, text: &str) -> MappingResult {
        let text_lower = text.to_lowercase();
        let mut hits: Vec<(&str, &str, BTreeSet<&str>)> = Vec::new();

        for rule in &self.rules {
            let Some(keyword) = rule.first_hit(&text_lower) else {
                continue;
            };
            match hits.iter_mut().find(|(code, _, _)| *code == rule.code) {
                Some((_, _, keywords)) => {
                    keywords.insert(keyword);
                }
                None => {
                    hits.push((rule.code.as_str(), rule.rationale.as_str(), BTreeSet::from([keyword])));
                }
            }
        }

        let mut result = if hits.is_empty() {
            MappingResult {
                candidates: vec![MappingCandidate {
                    code: NEEDS_REVIEW_CODE.to_string(),
                    reason: NO_MATCH_REASON.to_string(),
                    matched_keywords: Vec::new(),
                    score: 0.0,
                }],
                coverage_comment: NO_MATCH_COMMENT.to_string(),
                confidence: 0.0,
            }
        } else {
            let candidates = hits
                .into_iter()
                .map(|(code, rationale, keywords)| {
                    let matched: Vec<String> = keywords.into_iter().map(String::from).collect();
                    MappingCandidate {
                        code: code.to_string(),
                        reason: format!("{} (matched keywords: {})", rationale, matched.join(", ")),
                        score: keyword_score(matched.len()),
                        matched_keywords: matched,
                    }
                })
                .collect();
            MappingResult {
                candidates,
                coverage_comment: MATCH_COMMENT.to_string(),
                confidence: 0.0,
            }
        };

        result.confidence = score_confidence(&result);
        result
    }
}

/// 0.2 per keyword, capped at 1.0
fn keyword_score(count: usize) -> f64 {
    (count.saturating_mul(20)).min(100) as f64 / 100.0
}
