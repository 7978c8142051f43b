/// Prompt templates for the generation backend
///
/// Mapping prompts carry a strict fenced-JSON output contract; completion
/// prompts carry the drafting rules for a single disclosure paragraph.
use crate::models::{ElementCheckResult, MappingResult, Requirement};

/// System instruction for mapping calls
pub const MAPPING_SYSTEM_INSTRUCTION: &str = "You are an expert in IFRS S2 climate-related \
disclosures. Respond with JSON only. Do not include any other text.";

/// System instruction for paragraph completion calls
pub const ENHANCE_SYSTEM_INSTRUCTION: &str =
    "You are a consultant who writes IFRS S2 climate-related disclosures.";

const JSON_CONTRACT: &str = r#"Answer only in the JSON format below.
```json
{
  "candidates": [
    {
      "code": "paragraph or paragraph range (e.g. \"10\", \"13–14\", \"22–23\")",
      "reason": "detailed explanation of why the text corresponds to this paragraph"
    }
  ],
  "coverage_comment": "summary of which parts of IFRS S2 the text covers and how well"
}
```
Follow the JSON format strictly and do not write explanatory sentences outside the JSON."#;

/// Expert mapping prompt without rule hints
pub fn expert_mapping_prompt(text: &str, industry: &str, jurisdiction: &str) -> String {
    mapping_prompt(text, industry, jurisdiction, None)
}

/// Mapping prompt, optionally seeded with rule-based candidates
pub fn mapping_prompt(
    text: &str,
    industry: &str,
    jurisdiction: &str,
    hint: Option<&MappingResult>,
) -> String {
    let mut prompt = format!(
        r#"You are an expert in IFRS S2 climate-related disclosures and know how the TCFD recommendations differ from IFRS S2.
Read the text below and determine which IFRS S2 paragraph (or paragraph range) it corresponds to.

[Industry]
{industry}

[Jurisdiction]
{jurisdiction}

[Text to analyse]
{text}

"#,
        industry = industry,
        jurisdiction = jurisdiction,
        text = text
    );

    if let Some(hint) = hint.filter(|h| !h.needs_review()) {
        prompt.push_str("[Reference: keyword-based analysis]\n");
        for candidate in &hint.candidates {
            prompt.push_str(&format!(
                "- {}: {}\n",
                candidate.code,
                candidate.matched_keywords.join(", ")
            ));
        }
        prompt.push_str(
            "\nUse the result above as a reference, but base the final decision on the full context of the text.\n\n",
        );
    }

    prompt.push_str(JSON_CONTRACT);
    prompt
}

/// Drafting prompt for new disclosure paragraphs
pub fn draft_disclosure_prompt(codes: &[String], company_profile: &str, source_text: &str) -> String {
    format!(
        r#"You are an expert in IFRS S2 climate-related disclosures.
Using the information below, draft a disclosure paragraph that meets the IFRS S2 requirements.

[Target IFRS S2 requirement codes]
{codes}

[Drafting principles]
- Do not mention 'IFRS S2' or paragraph numbers (e.g. 10(a)) in the body text
- Instead, describe naturally what the paragraphs require (risks/opportunities, scenario analysis, metrics and targets)
- Write concretely, as if reflecting the company's actual situation
- Include quantitative figures (ratios, amounts, periods) wherever possible
- Use the formal register of a report read by investors and regulators

[Company profile]
{company_profile}

[Source text or current draft]
{source_text}
"#,
        codes = codes.join(", "),
        company_profile = company_profile,
        source_text = source_text
    )
}

/// Completion prompt for a registered requirement
pub fn enhance_prompt(
    paragraph: &str,
    requirement: &Requirement,
    elements: &[ElementCheckResult],
    user_message: Option<&str>,
) -> String {
    let missing: Vec<String> = elements
        .iter()
        .filter(|e| !e.present)
        .map(|e| format!("- {}: {}", e.label, e.reason))
        .collect();
    let missing_lines = if missing.is_empty() {
        "- (no key element is missing)".to_string()
    } else {
        missing.join("\n")
    };

    format!(
        r#"You are a consultant who writes IFRS S2 climate-related disclosures.

Below is one paragraph of a corporate sustainability report.

[Original paragraph]
{paragraph}

This paragraph responds to the following IFRS S2 requirement:
- Title: {title} (IFRS S2 {code})
- Summary: {summary}

Analysis of the current paragraph found these required elements missing or insufficient:
{missing_lines}
{user_block}
Reflecting all of the elements above, write one complete disclosure paragraph, in the language of the original paragraph, that can be used in the report as is.

Rules:
1. Keep the context and content of the original, and fill in the missing information (time horizons, financial effects, scopes, target figures) concretely.
2. Never invent quantitative data. Where a figure is missing, insert an explicit placeholder of the form [Required input: (description of the missing data)], e.g. [Required input: expected cost savings or revenue uplift], [Required input: 2030 reduction target ratio].
3. Never include the term 'IFRS S2' or the paragraph number ({code}) in the generated paragraph. Report paragraphs read by users must not contain technical codes or standard names.
4. Output exactly one paragraph, with no bullet points or additional explanation.
5. Include only content related to the requested requirement ({code}); do not add content from other core areas such as governance, strategy, risk management or metrics and targets."#,
        paragraph = paragraph,
        title = requirement.title,
        code = requirement.code,
        summary = requirement.summary,
        missing_lines = missing_lines,
        user_block = user_block(user_message),
    )
}

/// Completion prompt for codes absent from the registry
pub fn generic_enhance_prompt(paragraph: &str, user_message: Option<&str>) -> String {
    let mut prompt = format!(
        r#"You are an expert in IFRS S2 climate-related disclosures.
Make the sustainability report paragraph below more specific, in the style of an IFRS S2 disclosure.

[Original paragraph]
{paragraph}

- Clearly cover climate-related risks/opportunities, strategy, financial effects and quantitative metrics.
- Where a figure is unknown, insert a placeholder of the form [Required input: (description)] instead of inventing it.
- Do not mention 'IFRS S2' or paragraph numbers in the paragraph.
- Output a single paragraph, in the language of the original, that can be pasted into the report.
- Cover only the topic this paragraph deals with; do not add content from other core IFRS S2 areas."#,
        paragraph = paragraph
    );
    prompt.push_str(&user_block(user_message));
    prompt
}

fn user_block(user_message: Option<&str>) -> String {
    match user_message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => format!("\n[Additional request from the user]\n{}\n", message),
        None => String::new(),
    }
}
