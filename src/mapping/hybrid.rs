//! Hybrid decision engine
//!
//! `fast` returns the rule result. `accurate` always asks the reasoning
//! backend, passing the rule result as a hint. `auto` escalates only when the
//! rule confidence is below [`ESCALATION_THRESHOLD`].

use super::confidence::ESCALATION_THRESHOLD;
use super::rules::Ruleset;
use crate::models::{MappingMode, MappingResult};
use crate::orchestrator::ReasoningAdapter;
use std::sync::Arc;
use tracing::{debug, info};

pub struct HybridEngine {
    rules: Arc<Ruleset>,
    adapter: ReasoningAdapter,
}

impl HybridEngine {
    pub fn new(rules: Arc<Ruleset>, adapter: ReasoningAdapter) -> Self {
        Self { rules, adapter }
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn backend_name(&self) -> &str {
        self.adapter.backend_name()
    }

    /// True when `mode` sends a rule result with this confidence to the backend
    pub fn should_escalate(mode: MappingMode, confidence: f64) -> bool {
        match mode {
            MappingMode::Fast => false,
            MappingMode::Accurate => true,
            MappingMode::Auto => confidence < ESCALATION_THRESHOLD,
        }
    }

    pub async fn map(
        &self,
        text: &str,
        industry: &str,
        jurisdiction: &str,
        mode: MappingMode,
    ) -> MappingResult {
        let rule_result = self.rules.match_text(text);

        if !Self::should_escalate(mode, rule_result.confidence) {
            debug!(
                mode = mode.name(),
                confidence = rule_result.confidence,
                "Returning rule-based mapping"
            );
            return rule_result;
        }

        info!(
            mode = mode.name(),
            confidence = rule_result.confidence,
            backend = %self.adapter.backend_name(),
            "Escalating mapping to reasoning backend"
        );
        self.adapter
            .map(text, industry, jurisdiction, Some(&rule_result))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::orchestrator::{GenerationRequest, Generator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts calls and always proposes paragraph 13
    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Generator for CountingGenerator {
        fn name(&self) -> &str {
            "counting"
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(r#"{"candidates": [{"code": "13", "reason": "value chain"}], "coverage_comment": "ok"}"#
                .to_string())
        }
    }

    fn engine(generator: Arc<CountingGenerator>) -> HybridEngine {
        let rules = Arc::new(Ruleset::standard());
        let adapter = ReasoningAdapter::new(generator, rules.clone(), Duration::from_secs(5), 2000);
        HybridEngine::new(rules, adapter)
    }

    // 7 keywords over 7 codes: 0.85 + 0.1 = 0.95
    const RICH_TEXT: &str = "Our governance covers climate risk, the supply chain, our transition plan, \
        cash flow effects, scenario analysis and Scope 1 emissions.";

    #[test]
    fn test_threshold_boundary() {
        assert!(!HybridEngine::should_escalate(MappingMode::Auto, 0.70));
        assert!(!HybridEngine::should_escalate(MappingMode::Auto, 0.95));
        assert!(HybridEngine::should_escalate(MappingMode::Auto, 0.6999));
        assert!(HybridEngine::should_escalate(MappingMode::Accurate, 1.0));
        assert!(!HybridEngine::should_escalate(MappingMode::Fast, 0.0));
    }

    #[tokio::test]
    async fn test_fast_never_calls_backend() {
        let generator = Arc::new(CountingGenerator::default());
        let result = engine(generator.clone())
            .map("nothing relevant", "Steel", "IFRS", MappingMode::Fast)
            .await;

        assert!(result.needs_review());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_keeps_confident_rule_result() {
        let generator = Arc::new(CountingGenerator::default());
        let engine = engine(generator.clone());
        let expected = engine.rules().match_text(RICH_TEXT);
        assert!(expected.confidence >= ESCALATION_THRESHOLD);

        let result = engine.map(RICH_TEXT, "Steel", "IFRS", MappingMode::Auto).await;
        assert_eq!(result, expected);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_escalates_low_confidence() {
        let generator = Arc::new(CountingGenerator::default());
        let result = engine(generator.clone())
            .map("Our governance is sound.", "Steel", "IFRS", MappingMode::Auto)
            .await;

        assert_eq!(result.codes(), vec!["13"]);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_accurate_always_escalates() {
        let generator = Arc::new(CountingGenerator::default());
        let result = engine(generator.clone())
            .map(RICH_TEXT, "Steel", "IFRS", MappingMode::Accurate)
            .await;

        assert_eq!(result.codes(), vec!["13"]);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }
}
