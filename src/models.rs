//! Data models shared by the classifier, the batch pipeline and the CLI.
//!
//! This module defines the records that cross the classifier boundary:
//! - [`EventRecord`]: Title and body text handed to the detector
//! - [`Verdict`]: The two-token `"yes"`/`"no"` result
//! - [`AnalysisResult`]: Gate outcomes and per-category matches for diagnostics
//! - [`CriteriaMatch`]: A single category hit inside an [`AnalysisResult`]
//!
//! Field names on the serialized types are part of the output contract read
//! by downstream consumers, so they are kept in snake_case exactly as emitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A news event as handed to the detector.
///
/// Only `title` and `content` are read. The optional hints are carried for
/// callers that already know them, but classification is derived from the
/// text alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventRecord {
    /// The article headline.
    pub title: String,
    /// The article body, description or summary.
    pub content: String,
    /// Country the caller believes the event concerns. Ignored by the detector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Caller-side confirmation flag. Ignored by the detector.
    #[serde(default)]
    pub is_confirmed: bool,
}

impl EventRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Final classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category that matched during scoring.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CriteriaMatch {
    /// Category name, e.g. `"production_disruption"`.
    pub criterion: String,
    /// The first few keywords found, in table order (at most three).
    pub matched_keywords: Vec<String>,
    /// The category weight added to the total score.
    pub weight: f64,
}

/// Full diagnostic output of a detailed analysis.
///
/// `result` is the same verdict the short-circuit decision yields. The three
/// gate flags are always evaluated so a reader can see every reason at once.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub result: Verdict,
    pub geographic_match: bool,
    pub confirmed_outcome: bool,
    pub excluded: bool,
    pub criteria_matches: Vec<CriteriaMatch>,
    pub total_score: f64,
}
