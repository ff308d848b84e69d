//! # Negative Event Detector
//!
//! A rule-based classifier that decides whether a news article describes a
//! confirmed, negative, high-impact event for Indonesia, China, Vietnam,
//! Cambodia or Laos, plus the batch and line-mode plumbing around it.
//!
//! ## Features
//!
//! - Four-stage decision: geographic gate, confirmation gate, speculative
//!   exclusion gate, weighted criteria score against a fixed threshold
//! - Detailed analysis with every gate outcome and the matched categories
//! - Batch classification of JSON article dumps produced by the scrapers
//! - Single-event, stdin and interactive command-line modes
//!
//! ## Usage
//!
//! ```
//! use negative_event_detector::{NegativeEventDetector, Verdict};
//!
//! let detector = NegativeEventDetector::new();
//! let analysis = detector.detailed_analysis(
//!     "Port of Jakarta confirmed closed due to strike",
//!     "A massive workers' strike began on Monday.",
//! );
//! assert_eq!(analysis.result, Verdict::Yes);
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod detector;
pub mod interactive;
pub mod models;
pub mod utils;

pub use detector::NegativeEventDetector;
pub use models::{AnalysisResult, CriteriaMatch, EventRecord, Verdict};
