//! Negative high-impact event detection.
//!
//! The detector decides whether a news event is a confirmed, negative,
//! high-impact event for Indonesia, China, Vietnam, Cambodia or Laos. It runs
//! four stages over the normalized text, in order, stopping at the first
//! failing gate:
//!
//! 1. **Geographic relevance**: a target country, demonym or capital appears
//! 2. **Outcome confirmation**: the text reports something that already happened
//! 3. **Speculative exclusion**: fewer than three hedging/speculative markers
//! 4. **Weighted criteria**: category weights sum to at least 2.0
//!
//! # Submodules
//!
//! - [`tables`]: Target entities, criteria categories and weights
//! - [`filters`]: Normalization and the three gates
//! - [`scorer`]: Per-category weighted scoring
//!
//! # Concurrency
//!
//! All tables are immutable statics, so a [`NegativeEventDetector`] is a
//! zero-sized `Copy` handle that can be used from any number of threads.

pub mod filters;
pub mod scorer;
pub mod tables;

use crate::models::{AnalysisResult, EventRecord, Verdict};
use tables::QUALIFICATION_THRESHOLD;
use tracing::{debug, instrument};

/// Handle to the rule-based classifier.
///
/// # Examples
///
/// ```
/// use negative_event_detector::{NegativeEventDetector, Verdict};
///
/// let detector = NegativeEventDetector::new();
/// let verdict = detector.detect_from_text(
///     "Cambodia announces tariff increase on imports",
///     "The Cambodian government has officially announced a 25% tariff increase.",
/// );
/// assert_eq!(verdict, Verdict::Yes);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeEventDetector;

impl NegativeEventDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify an event. Only `title` and `content` are consulted.
    #[instrument(level = "debug", skip_all)]
    pub fn detect(&self, event: &EventRecord) -> Verdict {
        let text = filters::normalize(&event.title, &event.content);

        if !filters::geographic_match(&text) {
            debug!(gate = "geographic", "Rejected");
            return Verdict::No;
        }

        if !filters::confirmed_outcome(&text) {
            debug!(gate = "confirmation", "Rejected");
            return Verdict::No;
        }

        if filters::is_excluded(&text) {
            debug!(gate = "exclusion", "Rejected");
            return Verdict::No;
        }

        let total_score = scorer::score(&text);
        debug!(total_score, threshold = QUALIFICATION_THRESHOLD, "Scored event");

        if total_score >= QUALIFICATION_THRESHOLD {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }

    pub fn detect_from_text(&self, title: &str, content: &str) -> Verdict {
        self.detect(&EventRecord::new(title, content))
    }

    /// Same decision as [`detect_from_text`](Self::detect_from_text), plus
    /// every gate outcome and the matched categories.
    ///
    /// Gate flags are evaluated independently here, so a geographic miss
    /// still reports whether the text was confirmed or excluded.
    pub fn detailed_analysis(&self, title: &str, content: &str) -> AnalysisResult {
        let text = filters::normalize(title, content);
        let criteria_matches = scorer::matched_criteria(&text);
        let total_score = criteria_matches.iter().map(|m| m.weight).sum();

        AnalysisResult {
            result: self.detect_from_text(title, content),
            geographic_match: filters::geographic_match(&text),
            confirmed_outcome: filters::confirmed_outcome(&text),
            excluded: filters::is_excluded(&text),
            criteria_matches,
            total_score,
        }
    }
}
