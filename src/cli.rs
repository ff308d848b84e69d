//! Command-line interface definitions for the negative event detector.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Batch settings can also be provided via environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the negative event detector.
///
/// Modes are checked in this order: interactive, stdin, single event
/// (`--title` and `--content`), batch file (`--input`). With none of them
/// the help text is printed.
///
/// # Examples
///
/// ```sh
/// # Single event
/// negative_event_detector -t "Flood hits Jakarta" -c "Thousands were evacuated."
///
/// # Single event with the full analysis as JSON
/// negative_event_detector -t "..." -c "..." --detailed
///
/// # Batch file, output to data/processed_articles.json
/// negative_event_detector -i articles.json
///
/// # Piped input: first line title, remaining lines content
/// cat event.txt | negative_event_detector --stdin
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input JSON file with events to process
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output JSON file for results
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Event title (for single event mode)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Event content (for single event mode)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read event from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Run in interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Show detailed analysis (only for single event mode)
    #[arg(long)]
    pub detailed: bool,

    /// Optional path to a pipeline config YAML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for batch output when --output is not given
    #[arg(long, env = "NEG_CHECK_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of records classified concurrently in batch mode
    #[arg(long, env = "NEG_CHECK_CONCURRENCY")]
    pub concurrency: Option<usize>,
}

/// The mode selected by a parsed [`Cli`].
#[derive(Debug, PartialEq)]
pub enum Mode<'a> {
    Interactive,
    Stdin,
    Single {
        title: &'a str,
        content: &'a str,
        detailed: bool,
    },
    Batch {
        input: &'a PathBuf,
    },
    Help,
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        if self.interactive {
            return Mode::Interactive;
        }
        if self.stdin {
            return Mode::Stdin;
        }
        if let (Some(title), Some(content)) = (&self.title, &self.content) {
            return Mode::Single {
                title,
                content,
                detailed: self.detailed,
            };
        }
        match &self.input {
            Some(input) => Mode::Batch { input },
            None => Mode::Help,
        }
    }
}
