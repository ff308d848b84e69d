//! Standard-input and interactive line modes.
//!
//! Both modes feed the same `title + content` contract as the programmatic
//! API. The reader and writer are generic so the loop can be driven from
//! in-memory buffers.

use crate::detector::NegativeEventDetector;
use crate::models::EventRecord;
use itertools::Itertools;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

/// Build an event from piped input.
///
/// Two or more lines: the first is the title, the rest is the content.
/// A single line is tried as a JSON object (`title`, then `content` or
/// `description`), falling back to a bare title.
pub fn parse_stdin_event(raw: &str) -> EventRecord {
    let lines: Vec<&str> = raw.trim().split('\n').collect();

    if lines.len() >= 2 {
        return EventRecord::new(lines[0], lines[1..].join("\n"));
    }

    let line = lines.first().copied().unwrap_or("");
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(object)) => {
            let field = |key: &str| object.get(key).and_then(Value::as_str).unwrap_or("");
            let content = [field("content"), field("description")]
                .into_iter()
                .find(|value| !value.is_empty())
                .unwrap_or("");
            EventRecord::new(field("title"), content)
        }
        _ => EventRecord::new(line, ""),
    }
}

/// Prompt for events until `quit` or end of input, printing each verdict and
/// the categories that matched.
#[instrument(level = "debug", skip_all)]
pub async fn run_interactive<R, W>(
    detector: NegativeEventDetector,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    let banner = "=".repeat(RULE_WIDE);
    writer
        .write_all(
            format!(
                "{banner}\nNEGATIVE HIGH-IMPACT EVENT DETECTOR\n{banner}\nEnter event details (type 'quit' to exit)\n\n"
            )
            .as_bytes(),
        )
        .await?;

    loop {
        writer
            .write_all(format!("{}\nTitle: ", "-".repeat(RULE_NARROW)).as_bytes())
            .await?;
        writer.flush().await?;

        let Some(title) = lines.next_line().await? else {
            break;
        };
        let title = title.trim().to_string();
        if title.eq_ignore_ascii_case("quit") {
            break;
        }

        writer
            .write_all(b"Content (press Enter twice to finish):\n")
            .await?;
        writer.flush().await?;

        let mut content_lines = Vec::new();
        while let Some(line) = lines.next_line().await? {
            if line.is_empty() {
                break;
            }
            content_lines.push(line);
        }
        let content = content_lines.join("\n");

        let analysis = detector.detailed_analysis(&title, &content);
        debug!(result = %analysis.result, total_score = analysis.total_score, "Interactive event");

        let mut report = format!("\nResult: {}\n", analysis.result);
        if !analysis.criteria_matches.is_empty() {
            report.push_str("Matched criteria:\n");
            for m in &analysis.criteria_matches {
                report.push_str(&format!(
                    "  - {}: {}\n",
                    m.criterion,
                    m.matched_keywords.iter().join(", ")
                ));
            }
        }
        writer.write_all(report.as_bytes()).await?;
    }

    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[test]
    fn test_parse_stdin_multiline() {
        let event = parse_stdin_event("Flood in Hanoi\nRoads closed.\nSchools shut.\n");
        assert_eq!(event, EventRecord::new("Flood in Hanoi", "Roads closed.\nSchools shut."));
    }

    #[test]
    fn test_parse_stdin_single_json_line() {
        let event = parse_stdin_event(r#"{"title": "T", "description": "D"}"#);
        assert_eq!(event, EventRecord::new("T", "D"));

        let event = parse_stdin_event(r#"{"title": "T", "content": "C", "description": "D"}"#);
        assert_eq!(event.content, "C");
    }

    #[test]
    fn test_parse_stdin_single_plain_line() {
        assert_eq!(parse_stdin_event("Just a headline"), EventRecord::new("Just a headline", ""));
        assert_eq!(parse_stdin_event("   "), EventRecord::new("", ""));
        assert_eq!(parse_stdin_event("[1, 2]"), EventRecord::new("[1, 2]", ""));
    }

    #[tokio::test]
    async fn test_interactive_session() {
        let input = "Cambodia announces tariff increase on imports\n\
                     The Cambodian government has officially announced a 25% tariff increase.\n\
                     \n\
                     Weather report\n\
                     Sunny skies.\n\
                     \n\
                     quit\n";
        let mut output = Vec::new();

        run_interactive(
            NegativeEventDetector::new(),
            BufReader::new(input.as_bytes()),
            &mut output,
        )
        .await
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Result: yes"));
        assert!(text.contains("  - trade_restrictions: tariff increase"));
        assert!(text.contains("Result: no"));
        assert_eq!(text.matches("Title: ").count(), 3);
    }

    #[tokio::test]
    async fn test_interactive_stops_at_eof() {
        let mut output = Vec::new();
        run_interactive(NegativeEventDetector::new(), BufReader::new(&b""[..]), &mut output)
            .await
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("NEGATIVE HIGH-IMPACT EVENT DETECTOR"));
        assert!(!text.contains("Result:"));
    }
}
