use crate::models::{MappingResult, NEEDS_REVIEW_CODE};
use std::collections::HashSet;

/// Confidence below which `auto` mode escalates to the reasoning backend
pub const ESCALATION_THRESHOLD: f64 = 0.70;

/// Heuristic reliability of a rule-based mapping result.
///
/// Ladder on the total matched-keyword count: ≥7 → 0.85, ≥5 → 0.7, ≥3 → 0.5,
/// ≥1 → 0.3, else 0. Two or more distinct candidate codes add 0.1, capped at
/// 1.0. The sentinel result scores 0.
pub fn score_confidence(result: &MappingResult) -> f64 {
    let Some(first) = result.candidates.first() else {
        return 0.0;
    };
    if first.code == NEEDS_REVIEW_CODE {
        return 0.0;
    }

    let total_keywords: usize = result
        .candidates
        .iter()
        .map(|c| c.matched_keywords.len())
        .sum();

    // Work in percentage points so ladder values stay exact
    let mut points: u32 = match total_keywords {
        n if n >= 7 => 85,
        n if n >= 5 => 70,
        n if n >= 3 => 50,
        n if n >= 1 => 30,
        _ => 0,
    };

    let distinct_codes: HashSet<&str> = result.candidates.iter().map(|c| c.code.as_str()).collect();
    if distinct_codes.len() >= 2 {
        points = (points + 10).min(100);
    }

    f64::from(points) / 100.0
}
