pub mod confidence;
pub mod hybrid;
pub mod rules;

pub use confidence::{score_confidence, ESCALATION_THRESHOLD};
pub use hybrid::HybridEngine;
pub use rules::{Rule, Ruleset};
