//! Navigator facade
//!
//! Owns the immutable rule list, requirement registry and group catalog, and
//! exposes the five public operations. Every operation is a function of its
//! inputs plus this read-only state, so one `Navigator` can be shared across
//! concurrent requests behind an `Arc`.

use crate::analysis::SentenceAnalyzer;
use crate::mapping::{HybridEngine, Ruleset};
use crate::models::{
    ChecklistItem, EnhancementResult, MappingMode, MappingResult, NavigatorConfig, SentenceSuggestion,
    ValidationResult,
};
use crate::orchestrator::{build_generator, DisabledGenerator, Generator, ParagraphCompleter, ReasoningAdapter};
use crate::registry::{GroupCatalog, RequirementRegistry};
use crate::validator::{ChecklistBuilder, DisclosureValidator};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Industry assumed by `validate` when the caller gives none
pub const VALIDATE_DEFAULT_INDUSTRY: &str = "Banking";

/// Jurisdiction assumed by sentence analysis when the caller gives none
pub const ANALYZE_DEFAULT_JURISDICTION: &str = "Republic of Korea";

pub struct Navigator {
    config: NavigatorConfig,
    rules: Arc<Ruleset>,
    registry: Arc<RequirementRegistry>,
    groups: Arc<GroupCatalog>,
    hybrid: HybridEngine,
    completer: ParagraphCompleter,
}

impl Navigator {
    /// Build a navigator around an explicit generation backend
    pub fn new(config: NavigatorConfig, generator: Arc<dyn Generator>) -> Self {
        let rules = Arc::new(Ruleset::standard());
        let timeout = Duration::from_secs(config.generator.timeout_secs);

        let adapter = ReasoningAdapter::new(
            generator.clone(),
            rules.clone(),
            timeout,
            config.generator.mapping_max_tokens,
        );
        let completer = ParagraphCompleter::new(generator, timeout, config.generator.enhance_max_tokens);

        Self {
            hybrid: HybridEngine::new(rules.clone(), adapter),
            completer,
            rules,
            registry: Arc::new(RequirementRegistry::standard()),
            groups: Arc::new(GroupCatalog::standard()),
            config,
        }
    }

    /// Build a navigator with the backend named in the configuration
    pub fn from_config(config: NavigatorConfig) -> Result<Self> {
        let generator = build_generator(&config.generator)?;
        info!(
            backend = %generator.name(),
            model = %config.generator.model,
            "Navigator initialised"
        );
        Ok(Self::new(config, generator))
    }

    /// Navigator that never calls a backend; escalations fall back to rules
    pub fn offline() -> Self {
        Self::new(NavigatorConfig::default(), Arc::new(DisabledGenerator))
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn registry(&self) -> &RequirementRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &GroupCatalog {
        &self.groups
    }

    pub fn backend_name(&self) -> &str {
        self.hybrid.backend_name()
    }

    /// Map text to requirement codes with the given strategy
    pub async fn map(&self, text: &str, industry: &str, jurisdiction: &str, mode: MappingMode) -> MappingResult {
        self.hybrid.map(text, industry, jurisdiction, mode).await
    }

    /// Rule matcher only
    pub fn map_rules(&self, text: &str) -> MappingResult {
        self.rules.match_text(text)
    }

    /// Group-level presence checks over a draft
    pub fn validate<S: AsRef<str>>(&self, codes: &[S], text: &str, industry: &str) -> ValidationResult {
        debug!(industry, codes = codes.len(), "Validating disclosure");
        DisclosureValidator::new().validate(codes, text)
    }

    /// Detect missing elements of `code` and ask the backend for a completed
    /// paragraph. Unregistered codes get a generic prompt and no elements.
    pub async fn enhance_paragraph(
        &self,
        paragraph: &str,
        code: &str,
        industry: &str,
        user_message: Option<&str>,
    ) -> EnhancementResult {
        debug!(industry, code, "Enhancing paragraph");
        let (requirement, elements) = match self.registry.evaluate_code(paragraph, code) {
            Some((requirement, elements)) => (Some(requirement), elements),
            None => (None, Vec::new()),
        };

        let completed_paragraph = self
            .completer
            .complete(paragraph, code, requirement, &elements, user_message)
            .await;

        EnhancementResult {
            code: code.to_string(),
            title: requirement.map_or_else(|| format!("IFRS S2 {}", code), |r| r.title.clone()),
            missing_elements: elements,
            completed_paragraph,
        }
    }

    /// One checklist item per registered requirement
    pub fn build_checklist(&self, text: &str, industry: &str) -> Vec<ChecklistItem> {
        debug!(industry, "Building checklist");
        ChecklistBuilder::new(&self.registry).build(text)
    }

    /// Sentence-by-sentence findings for a longer text
    pub fn analyze_sentences(&self, text: &str, industry: &str, jurisdiction: &str) -> Vec<SentenceSuggestion> {
        debug!(industry, jurisdiction, "Analysing sentences");
        SentenceAnalyzer::new(&self.rules, &self.groups).analyze(text)
    }
}
