//! # Negative Event Detector CLI
//!
//! Classifies news events as negative high-impact (`yes`) or not (`no`).
//!
//! ## Usage
//!
//! ```sh
//! negative_event_detector -t "Title" -c "Content" [--detailed]
//! negative_event_detector -i articles.json [-o processed.json]
//! negative_event_detector --stdin < event.txt
//! negative_event_detector --interactive
//! ```
//!
//! Verdicts and reports go to stdout; logs go to stderr and are controlled
//! with `RUST_LOG` (default `info`).

use clap::{CommandFactory, Parser};
use negative_event_detector::batch::{default_output_path, process_json_file};
use negative_event_detector::cli::{Cli, Mode};
use negative_event_detector::config::PipelineConfig;
use negative_event_detector::interactive::{parse_stdin_event, run_interactive};
use negative_event_detector::utils::truncate_for_log;
use negative_event_detector::NegativeEventDetector;
use std::error::Error;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let detector = NegativeEventDetector::new();

    match args.mode() {
        Mode::Interactive => {
            run_interactive(detector, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
        }
        Mode::Stdin => {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            let event = parse_stdin_event(&raw);
            debug!(title = %truncate_for_log(&event.title, 120), "Read event from stdin");
            println!("{}", detector.detect(&event));
        }
        Mode::Single {
            title,
            content,
            detailed,
        } => {
            if detailed {
                let analysis = detector.detailed_analysis(title, content);
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", detector.detect_from_text(title, content));
            }
        }
        Mode::Batch { input } => {
            let file_config = match &args.config {
                Some(path) => PipelineConfig::load(path).await?,
                None => PipelineConfig::default(),
            };
            let config = file_config.with_overrides(args.output_dir.clone(), args.concurrency);
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(input, &config.output_dir));

            let summary = match process_json_file(detector, input, &output, config.batch_concurrency).await {
                Ok(summary) => summary,
                Err(e) => {
                    error!(input = %input.display(), error = %e, "Batch processing failed");
                    return Err(e.into());
                }
            };

            println!("Processed {} events", summary.total);
            println!("  Negative high-impact: {}", summary.positive);
            println!("  Not qualifying: {}", summary.negative);
            println!("Output saved to: {}", summary.output.display());
        }
        Mode::Help => {
            Cli::command().print_help()?;
            println!();
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");

    Ok(())
}
