//! csvprof: column profiling for delimited tabular text files.
//!
//! Reads a CSV file with a header row and describes each column: whether its
//! values are numbers or text, how many are missing, how many are distinct,
//! and which values occur most often. The result is a [`Report`] that can be
//! rendered as JSON or Markdown.
//!
//! # Core Principles
//!
//! - **One missing-value rule**: blank cells and `NA`, `N/A`, `null`, `None`,
//!   `NaN` (any case, surrounding whitespace ignored) are missing everywhere
//! - **First row is the schema**: column order follows the first row's keys
//! - **Deterministic**: the same rows always produce the same report
//!
//! # Example
//!
//! ```no_run
//! use csvprof::Profiler;
//!
//! let profiler = Profiler::new();
//! let run = profiler.profile_file("data.csv").unwrap();
//!
//! println!("Rows: {}", run.report.summary.rows);
//! for (name, column) in &run.report.columns {
//!     println!("{name}: {} ({} missing)", column.column_type, column.stats.missing);
//! }
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod render;
pub mod schema;

mod profiler;

pub use error::{ProfileError, Result};
pub use inference::{DEFAULT_TOP_K, aggregate, infer_type, is_missing, parse_number};
pub use input::{Parser, ParserConfig, Row, Schema, SourceMetadata};
pub use profiler::{ProfileRun, Profiler, ProfilerConfig, profile};
pub use render::{render_json, render_markdown, write_json, write_markdown};
pub use schema::{ColumnProfile, ColumnStats, ColumnType, Report, ReportSummary, TopEntry, TopValue};
