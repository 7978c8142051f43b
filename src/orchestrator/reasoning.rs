//! External reasoning adapter
//!
//! Formats the mapping prompt, calls the generation backend once under a
//! timeout, and parses the structured answer. Every failure degrades to a
//! result through an ordered recovery chain; nothing is raised to the caller.

use super::generator::{GenerationRequest, Generator};
use super::prompts;
use crate::error::GenerationError;
use crate::mapping::Ruleset;
use crate::models::{MappingCandidate, MappingResult, GENERATION_ERROR_CODE};
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Score and confidence assigned to backend-produced candidates
pub const BACKEND_SCORE: f64 = 0.9;

const GENERATION_ERROR_COMMENT: &str =
    "The reasoning backend failed and no rule-based hint was available.";

fn fenced_json_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid fenced JSON regex"))
}

#[derive(Debug, Deserialize)]
struct RawMapping {
    #[serde(default)]
    candidates: Vec<RawCandidate>,
    #[serde(default)]
    coverage_comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    #[serde(default)]
    code: serde_json::Value,
    #[serde(default)]
    reason: String,
}

impl RawCandidate {
    /// Backends sometimes answer `"code": 14`; accept numbers as well as strings
    fn code(&self) -> Option<String> {
        match &self.code {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Recovery strategies, tried in order until one yields a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    /// Return the rule result supplied by the caller
    Hint,
    /// Run the rule matcher again on the text
    FreshRules,
    /// Report the failure as a single error candidate
    ErrorSentinel,
}

impl Recovery {
    fn chain_for(error: &GenerationError) -> &'static [Recovery] {
        if error.is_soft() {
            &[Recovery::Hint, Recovery::FreshRules, Recovery::ErrorSentinel]
        } else {
            &[Recovery::Hint, Recovery::ErrorSentinel]
        }
    }
}

/// Mapping via the external generation backend
pub struct ReasoningAdapter {
    generator: Arc<dyn Generator>,
    rules: Arc<Ruleset>,
    timeout: Duration,
    max_tokens: u32,
}

impl ReasoningAdapter {
    pub fn new(
        generator: Arc<dyn Generator>,
        rules: Arc<Ruleset>,
        timeout: Duration,
        max_tokens: u32,
    ) -> Self {
        Self {
            generator,
            rules,
            timeout,
            max_tokens,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.generator.name()
    }

    /// Map `text` with the backend, recovering from any failure
    pub async fn map(
        &self,
        text: &str,
        industry: &str,
        jurisdiction: &str,
        hint: Option<&MappingResult>,
    ) -> MappingResult {
        match self.try_map(text, industry, jurisdiction, hint).await {
            Ok(result) => result,
            Err(error) => self.recover(&error, text, hint),
        }
    }

    async fn try_map(
        &self,
        text: &str,
        industry: &str,
        jurisdiction: &str,
        hint: Option<&MappingResult>,
    ) -> Result<MappingResult, GenerationError> {
        let request = GenerationRequest::new(
            prompts::MAPPING_SYSTEM_INSTRUCTION,
            prompts::mapping_prompt(text, industry, jurisdiction, hint),
            self.max_tokens,
        );

        let started = Instant::now();
        let raw = tokio::time::timeout(self.timeout, self.generator.generate(&request))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))??;
        info!(
            backend = %self.generator.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Reasoning backend answered"
        );

        parse_mapping(&raw)
    }

    fn recover(&self, error: &GenerationError, text: &str, hint: Option<&MappingResult>) -> MappingResult {
        let recovered = Recovery::chain_for(error)
            .iter()
            .find_map(|strategy| self.apply(*strategy, error, text, hint).map(|r| (*strategy, r)));

        match recovered {
            Some((strategy, result)) => {
                warn!(error = %error, recovery = ?strategy, "Reasoning backend failed; using fallback");
                result
            }
            None => error_sentinel(error),
        }
    }

    fn apply(
        &self,
        strategy: Recovery,
        error: &GenerationError,
        text: &str,
        hint: Option<&MappingResult>,
    ) -> Option<MappingResult> {
        match strategy {
            Recovery::Hint => hint.cloned(),
            Recovery::FreshRules => Some(self.rules.match_text(text)),
            Recovery::ErrorSentinel => Some(error_sentinel(error)),
        }
    }
}

fn error_sentinel(error: &GenerationError) -> MappingResult {
    MappingResult {
        candidates: vec![MappingCandidate {
            code: GENERATION_ERROR_CODE.to_string(),
            reason: error.to_string(),
            matched_keywords: Vec::new(),
            score: 0.0,
        }],
        coverage_comment: GENERATION_ERROR_COMMENT.to_string(),
        confidence: 0.0,
    }
}

/// Locate the JSON payload: fenced block, then first balanced object, then
/// the whole text
pub fn extract_json(raw: &str) -> &str {
    if let Some(inner) = fenced_json_re().captures(raw).and_then(|c| c.get(1)) {
        return inner.as_str();
    }
    if let Some((start, end)) = find_json_bounds(raw) {
        return &raw[start..end];
    }
    raw.trim()
}

/// Span of the first balanced object; braces inside JSON strings are ignored
fn find_json_bounds(s: &str) -> Option<(usize, usize)> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in s[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse backend text into a mapping result
pub fn parse_mapping(raw: &str) -> Result<MappingResult, GenerationError> {
    if raw.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let parsed: RawMapping = serde_json::from_str(extract_json(raw))?;
    let candidates: Vec<MappingCandidate> = parsed
        .candidates
        .iter()
        .filter_map(|c| {
            c.code().map(|code| MappingCandidate {
                code,
                reason: c.reason.clone(),
                matched_keywords: Vec::new(),
                score: BACKEND_SCORE,
            })
        })
        .collect();

    if candidates.is_empty() {
        return Err(GenerationError::NoCandidates);
    }
    debug!(candidates = candidates.len(), "Parsed backend mapping");

    Ok(MappingResult {
        candidates,
        coverage_comment: parsed.coverage_comment.unwrap_or_default(),
        confidence: BACKEND_SCORE,
    })
}
