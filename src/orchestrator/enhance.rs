//! Paragraph completion
//!
//! Asks the generation backend to rewrite a disclosure paragraph so that the
//! missing required elements are covered. The call never fails from the
//! caller's point of view: any backend error, timeout or empty answer returns
//! the original paragraph.

use super::generator::{GenerationRequest, Generator};
use super::prompts;
use crate::error::GenerationError;
use crate::models::{ElementCheckResult, Requirement};
use regex::Regex;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{info, warn};

fn standard_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:\b(?:under|per)\s+)?IFRS\s*S2(?:\s+paragraphs?)?")
            .expect("valid standard name regex")
    })
}

fn empty_parens_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\(\s*(?:paragraphs?|para\.?)?\s*[,;]?\s*\)").expect("valid empty parens regex")
    })
}

fn spacing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]{2,}").expect("valid spacing regex"))
}

/// Backend-driven paragraph completer
pub struct ParagraphCompleter {
    generator: Arc<dyn Generator>,
    timeout: Duration,
    max_tokens: u32,
}

impl ParagraphCompleter {
    pub fn new(generator: Arc<dyn Generator>, timeout: Duration, max_tokens: u32) -> Self {
        Self {
            generator,
            timeout,
            max_tokens,
        }
    }

    /// Completed paragraph for `code`, or `paragraph` unchanged on failure.
    ///
    /// `requirement` is `None` for codes outside the registry; those get the
    /// generic completion prompt.
    pub async fn complete(
        &self,
        paragraph: &str,
        code: &str,
        requirement: Option<&Requirement>,
        elements: &[ElementCheckResult],
        user_message: Option<&str>,
    ) -> String {
        let prompt = match requirement {
            Some(requirement) => prompts::enhance_prompt(paragraph, requirement, elements, user_message),
            None => prompts::generic_enhance_prompt(paragraph, user_message),
        };
        let request = GenerationRequest::new(prompts::ENHANCE_SYSTEM_INSTRUCTION, prompt, self.max_tokens);

        let raw = match tokio::time::timeout(self.timeout, self.generator.generate(&request)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                warn!(code, error = %e, "Paragraph completion failed; returning original paragraph");
                return paragraph.to_string();
            }
            Err(_) => {
                let e = GenerationError::Timeout(self.timeout);
                warn!(code, error = %e, "Paragraph completion failed; returning original paragraph");
                return paragraph.to_string();
            }
        };

        let cleaned = scrub_codes(&raw, code);
        if cleaned.is_empty() {
            info!(code, "Backend returned no usable paragraph; returning original");
            return paragraph.to_string();
        }
        cleaned
    }
}

/// Remove the standard name and citations of the requirement code from
/// generated prose.
///
/// The code is removed only in citation context: after the standard name,
/// after "paragraph"/"para." or as a parenthesised reference. Figures that
/// happen to equal the code ("14%", "14.5", "1414", "2014") are left intact.
pub fn scrub_codes(text: &str, code: &str) -> String {
    let without_code = strip_citations(text.trim(), code.trim());
    let without_name = standard_name_re().replace_all(&without_code, "");
    let without_parens = empty_parens_re().replace_all(&without_name, "");
    let collapsed = spacing_re().replace_all(&without_parens, " ");

    collapsed
        .replace(" ,", ",")
        .replace(" .", ".")
        .trim_start_matches(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .trim_end()
        .to_string()
}

fn strip_citations(text: &str, code: &str) -> String {
    if code.is_empty() {
        return text.to_string();
    }

    let code = regex::escape(code);
    let pattern = format!(
        r"(?i)(?:\b(?:under|per|in\s+line\s+with|according\s+to)\s+)?(?:IFRS\s*S2\s*(?:(?:paragraphs?|para\.?)\s*)?{code}|\b(?:paragraphs?|para\.?)\s*{code}|\(\s*{code}\s*\))"
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Could not build citation pattern; leaving text unscrubbed");
            return text.to_string();
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;
    while let Some(m) = re.find_at(text, from) {
        from = m.end();
        if !m.as_str().ends_with(')') && continues_number(&text[m.end()..]) {
            continue;
        }
        out.push_str(&text[copied..m.start()]);
        copied = m.end();
    }
    out.push_str(&text[copied..]);
    out
}

/// True when `rest` carries on the figure just matched ("%", "5", ".5", ",140").
fn continues_number(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_alphanumeric() || c == '%' => true,
        Some('.') | Some(',') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}
