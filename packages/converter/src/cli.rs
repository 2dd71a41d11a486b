//! Command-line interface for the converter.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_BATCH_SIZE, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::converter::{convert_with, ConvertEvent, ProgressObserver};
use crate::error::Result;
use crate::extractor::VocabularyExtractor;

/// HSK Converter - Extract vocabulary cards from an HTML page into JSON.
#[derive(Parser)]
#[command(name = "hsk-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML document with the vocabulary list
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// JSON file to write (overwritten if it exists)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of elements per progress report
    #[arg(default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_command(&cli)
}

/// Execute the conversion.
fn convert_command(cli: &Cli) -> Result<()> {
    let mut reporter = ConsoleReporter::default();
    let result = convert_with(
        &VocabularyExtractor,
        &cli.input,
        &cli.output,
        cli.batch_size,
        &mut reporter,
    );
    reporter.clear();
    result.map(|_| ())
}

/// Prints conversion progress to the terminal.
///
/// The progress bar draws to stderr and stays hidden when stderr is not a
/// terminal; the report lines always go to stdout.
#[derive(Default)]
struct ConsoleReporter {
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    fn print(&self, line: String) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressObserver for ConsoleReporter {
    fn on_event(&mut self, event: ConvertEvent<'_>) {
        match event {
            ConvertEvent::Started { input } => {
                self.print(format!(
                    "{} {}",
                    style("Processing large file:").bold(),
                    style(input.display()).cyan()
                ));
            }
            ConvertEvent::Found { total } => {
                self.print(format!(
                    "Found {} vocabulary elements",
                    style(total).green()
                ));

                let bar = ProgressBar::new(total as u64);
                #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{bar:40.green} {pos}/{len} {msg}")
                        .expect("valid template"),
                );
                self.bar = Some(bar);
            }
            ConvertEvent::BatchDone { processed, total } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(processed as u64);
                }
                self.print(format!("Processed: {processed}/{total}"));
            }
            ConvertEvent::Finished { summary } => {
                self.clear();

                let failed = if summary.failed > 0 {
                    style(summary.failed).red().bold()
                } else {
                    style(summary.failed)
                };
                println!(
                    "{} Success: {}, Failed: {}",
                    style("Done!").green().bold(),
                    style(summary.succeeded).green(),
                    failed
                );
                if summary.skipped > 0 {
                    println!(
                        "  Skipped (incomplete markup): {}",
                        style(summary.skipped).yellow()
                    );
                }
                if let Some(path) = &summary.output_path {
                    println!("{} {}", style("Saved to:").green().bold(), path.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["hsk-converter"]);

        assert_eq!(cli.input, PathBuf::from("hsk_vocabulary.html"));
        assert_eq!(cli.output, PathBuf::from("hsk6_vocabulary.json"));
        assert_eq!(cli.batch_size, 2000);
    }

    #[test]
    fn test_cli_parse_all_positional() {
        let cli = Cli::parse_from(["hsk-converter", "in.html", "out.json", "50"]);

        assert_eq!(cli.input, PathBuf::from("in.html"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.batch_size, 50);
    }

    #[test]
    fn test_cli_rejects_non_numeric_batch_size() {
        let result = Cli::try_parse_from(["hsk-converter", "in.html", "out.json", "many"]);
        assert!(result.is_err());
    }
}
