//! Batch file mode: classify a JSON array of scraped articles.
//!
//! Input is a JSON array of objects, each carrying at least a `title` and one
//! of `content`, `description` or `summary`. Output is the same array, in the
//! same order, with `negative_high_impact` and `processed_at` appended to
//! every object.
//!
//! # Processing
//!
//! Records are classified on tokio's blocking pool with bounded concurrency.
//! The whole input is parsed before any work starts, so malformed input
//! aborts the batch before an output file is created.

use crate::detector::NegativeEventDetector;
use crate::models::{EventRecord, Verdict};
use chrono::Local;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Fields checked, in priority order, for the article body.
const CONTENT_FIELDS: &[&str] = &["content", "description", "summary"];

/// Default directory for processed output when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Default number of records classified at the same time.
pub const DEFAULT_CONCURRENCY: usize = 12;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid batch input: {0}")]
    Parse(String),
    #[error("classification worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Totals reported after a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub output: PathBuf,
}

fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Pull the title and body out of one input object.
///
/// The body is the first non-empty of `content`, `description` and `summary`.
/// Missing or non-string fields read as empty strings.
pub fn extract_event(object: &Map<String, Value>) -> EventRecord {
    let title = str_field(object, "title");
    let content = CONTENT_FIELDS
        .iter()
        .map(|key| str_field(object, key))
        .find(|value| !value.is_empty())
        .unwrap_or("");
    EventRecord::new(title, content)
}

/// Parse batch input into a list of objects, rejecting anything else.
pub fn parse_events(raw: &str) -> Result<Vec<Map<String, Value>>, BatchError> {
    let root: Value = serde_json::from_str(raw).map_err(|e| BatchError::Parse(e.to_string()))?;
    let Value::Array(items) = root else {
        return Err(BatchError::Parse("expected a JSON array of events".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(object),
            other => Err(BatchError::Parse(format!(
                "event at index {index} is not an object (found {other})"
            ))),
        })
        .collect()
}

fn processed_at() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Classify every object and append the result fields, preserving order.
#[instrument(level = "info", skip(detector, events), fields(count = events.len()))]
pub async fn process_events(
    detector: NegativeEventDetector,
    events: Vec<Map<String, Value>>,
    concurrency: usize,
) -> Result<Vec<Map<String, Value>>, BatchError> {
    stream::iter(events.into_iter().enumerate())
        .map(move |(index, mut object)| async move {
            let event = extract_event(&object);
            let verdict =
                tokio::task::spawn_blocking(move || detector.detect(&event)).await?;
            debug!(index, %verdict, "Classified event");

            object.insert(
                "negative_high_impact".to_string(),
                Value::String(verdict.to_string()),
            );
            object.insert("processed_at".to_string(), Value::String(processed_at()));
            Ok::<_, BatchError>(object)
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}

/// Default output location: `{output_dir}/processed_{input file name}`.
pub fn default_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("processed_{file_name}"))
}

/// Read `input`, classify every event and write the annotated array to `output`.
#[instrument(level = "info", skip_all, fields(input = %input.display(), output = %output.display()))]
pub async fn process_json_file(
    detector: NegativeEventDetector,
    input: &Path,
    output: &Path,
    concurrency: usize,
) -> Result<BatchSummary, BatchError> {
    let raw = fs::read_to_string(input).await.map_err(|source| BatchError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let events = parse_events(&raw)?;
    info!(count = events.len(), "Loaded events");

    let processed = process_events(detector, events, concurrency).await?;
    let positive = processed
        .iter()
        .filter(|object| str_field(object, "negative_high_impact") == Verdict::Yes.as_str())
        .count();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|source| BatchError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(&processed).map_err(|e| BatchError::Parse(e.to_string()))?;
    fs::write(output, json).await.map_err(|source| BatchError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!(total = processed.len(), positive, "Wrote processed events");

    Ok(BatchSummary {
        total: processed.len(),
        positive,
        negative: processed.len() - positive,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_extract_event_content_priority() {
        let event = extract_event(&object(json!({
            "title": "T",
            "content": "",
            "description": "D",
            "summary": "S"
        })));
        assert_eq!(event, EventRecord::new("T", "D"));

        let event = extract_event(&object(json!({"title": "T", "summary": "S"})));
        assert_eq!(event.content, "S");

        let event = extract_event(&object(json!({"content": "C", "description": "D"})));
        assert_eq!(event, EventRecord::new("", "C"));
    }

    #[test]
    fn test_extract_event_missing_fields_are_empty() {
        let event = extract_event(&object(json!({"url": "https://example.com", "title": 7})));
        assert_eq!(event, EventRecord::new("", ""));
    }

    #[test]
    fn test_parse_events_rejects_non_array() {
        assert!(matches!(parse_events(r#"{"title": "x"}"#), Err(BatchError::Parse(_))));
        assert!(matches!(parse_events("[{\"title\": "), Err(BatchError::Parse(_))));
        assert!(matches!(parse_events(r#"[{"title": "x"}, 3]"#), Err(BatchError::Parse(_))));
        assert_eq!(parse_events("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/tmp/in/events.json"), Path::new("data"));
        assert_eq!(path, PathBuf::from("data/processed_events.json"));
    }

    #[tokio::test]
    async fn test_process_events_preserves_order_and_fields() {
        let events = parse_events(
            &json!([
                {
                    "title": "Cambodia announces tariff increase on imports",
                    "description": "The Cambodian government has officially announced a 25% tariff increase.",
                    "url": "https://example.com/a"
                },
                {"title": "Company reports quarterly earnings", "content": "Steady results."},
                {"url": "https://example.com/c"}
            ])
            .to_string(),
        )
        .unwrap();

        let processed = process_events(NegativeEventDetector::new(), events, 2)
            .await
            .unwrap();

        assert_eq!(processed.len(), 3);
        assert_eq!(processed[0]["negative_high_impact"], "yes");
        assert_eq!(processed[1]["negative_high_impact"], "no");
        assert_eq!(processed[2]["negative_high_impact"], "no");
        assert_eq!(processed[0]["url"], "https://example.com/a");

        let keys: Vec<_> = processed[0].keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["title", "description", "url", "negative_high_impact", "processed_at"]
        );
        let stamp = processed[0]["processed_at"].as_str().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[tokio::test]
    async fn test_process_json_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("nested/out/processed.json");
        std::fs::write(
            &input,
            json!([
                {
                    "title": "Port of Jakarta confirmed closed due to strike",
                    "content": "A massive workers' strike began on Monday."
                },
                {"title": "Weather report", "content": "Sunny."}
            ])
            .to_string(),
        )
        .unwrap();

        let summary = process_json_file(NegativeEventDetector::new(), &input, &output, 4)
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["negative_high_impact"], "yes");
        assert_eq!(written[1]["negative_high_impact"], "no");
    }

    #[tokio::test]
    async fn test_malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        let output = dir.path().join("out/processed_broken.json");
        std::fs::write(&input, "not json").unwrap();

        let result = process_json_file(NegativeEventDetector::new(), &input, &output, 4).await;
        assert!(matches!(result, Err(BatchError::Parse(_))));
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = process_json_file(
            NegativeEventDetector::new(),
            &dir.path().join("missing.json"),
            &dir.path().join("out.json"),
            1,
        )
        .await;
        assert!(matches!(result, Err(BatchError::Io { .. })));
    }
}
