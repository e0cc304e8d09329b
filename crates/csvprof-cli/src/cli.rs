//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// csvprof: profile the columns of a CSV file
#[derive(Parser)]
#[command(name = "csvprof")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and write JSON and/or Markdown reports
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory for the report files
        #[arg(short, long, default_value = "outputs")]
        out_dir: PathBuf,

        /// Report file name without extension
        #[arg(short = 'n', long, default_value = "report")]
        report_name: String,

        /// Which reports to write
        #[arg(short, long, default_value = "both")]
        format: ReportFormat,

        #[command(flatten)]
        options: ProfileOptions,
    },

    /// Print a column overview without writing files
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full JSON report instead of the overview
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: ProfileOptions,
    },
}

/// Options shared by commands that profile a file.
#[derive(clap::Args, Clone, Debug)]
pub struct ProfileOptions {
    /// Number of most frequent values to report per column
    #[arg(short = 'k', long, default_value = "5")]
    pub top_k: usize,

    /// Field delimiter (auto-detected when omitted)
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Maximum number of data rows to read
    #[arg(long)]
    pub max_rows: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    #[default]
    Both,
}

impl ReportFormat {
    pub fn writes_json(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }

    pub fn writes_markdown(&self) -> bool {
        matches!(self, ReportFormat::Markdown | ReportFormat::Both)
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "both" | "all" => Ok(ReportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, markdown, or both.", s)),
        }
    }
}

/// Parse a single-byte delimiter. Accepts `tab` and `\t` for a tab.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("Delimiter must be a single ASCII character, got {:?}", s)),
    }
}
