//! Gate stages: text normalization, geographic relevance, outcome
//! confirmation and speculative-language exclusion.
//!
//! Every function here is pure and operates on text already passed through
//! [`normalize`]. Pattern families are compiled once on first use and shared
//! read-only across threads.

use super::tables::{DISASTER_IMPACT_PHRASES, EXCLUSION_LIMIT, TARGET_ENTITIES};
use once_cell::sync::Lazy;
use regex::Regex;

fn compile_family(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("static pattern must compile"))
        .collect()
}

/// Explicit confirmation vocabulary.
static CONFIRMATION_VOCABULARY: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_family(&[
        r"\b(confirmed|announced|declared|official|finalized|completed|executed|implemented)\b",
        r"\b(has occurred|occurred on|took place|happened)\b",
        r"\b(reported that|stated that|announced that)\b",
    ])
});

/// Past-tense operational outcomes, including passive forms.
static PAST_TENSE_OUTCOMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_family(&[
        r"\b(shut down|closed|collapsed|defaulted|filed|declared|announced|implemented|imposed|occurred|happened)\b",
        r"\b(has shut|has closed|has collapsed|has defaulted|has filed)\b",
        r"\b(has been|were)\s+(shut|closed|destroyed|damaged|cancelled|halted|stopped)\b",
        r"\b(operations)\s+(halted|stopped|suspended)\b",
    ])
});

/// Modal, planning, conditional and risk language. Every match counts.
static SPECULATIVE_FAMILIES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_family(&[
        r"\b(may|might|could|would|should|potentially|possibly|expected|forecast|projected|predicted|anticipated|likely|rumored|speculated)\b",
        r"\b(proposal|proposed|draft|plan to|considering|discussing|negotiating|talks about)\b",
        r"\b(if|whether|whether or not|in case|hypothetical|scenario)\b",
        r"\b(risk of|threat of|concern about|fear of|worry about)\b",
    ])
});

/// Warning and advisory language. Only counts when not followed by a
/// confirmation, see [`WARNING_CONFIRMED_TAIL`].
static WARNING_FAMILY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(warns|warning|caution|advisory|alert)\b").expect("static pattern must compile")
});

/// Tail that suppresses a warning match, checked on the text right after it
/// in place of a negative lookahead.
static WARNING_CONFIRMED_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s+(of\s+)?(confirmed|announced|declared)").expect("static pattern must compile")
});

/// Join title and content with a single space and lower-case the result.
pub fn normalize(title: &str, content: &str) -> String {
    format!("{title} {content}").to_lowercase()
}

/// True iff any target entity occurs anywhere in `text` (substring match).
pub fn geographic_match(text: &str) -> bool {
    TARGET_ENTITIES.iter().any(|entity| text.contains(entity))
}

/// True iff any confirmation family has at least one hit.
pub fn confirmed_outcome(text: &str) -> bool {
    let vocabulary = CONFIRMATION_VOCABULARY.iter().any(|re| re.is_match(text));
    let past_tense = PAST_TENSE_OUTCOMES.iter().any(|re| re.is_match(text));
    let disaster = DISASTER_IMPACT_PHRASES.iter().any(|phrase| text.contains(phrase));
    vocabulary || past_tense || disaster
}

/// Total number of speculative-language matches across all five families.
pub fn exclusion_count(text: &str) -> usize {
    let speculative: usize = SPECULATIVE_FAMILIES
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();

    let warnings = WARNING_FAMILY
        .find_iter(text)
        .filter(|m| !WARNING_CONFIRMED_TAIL.is_match(&text[m.end()..]))
        .count();

    speculative + warnings
}

/// True iff the event reads as speculative and must be rejected.
pub fn is_excluded(text: &str) -> bool {
    exclusion_count(text) >= EXCLUSION_LIMIT
}
