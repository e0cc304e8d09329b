//! Profiling engine and public API.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::inference::{DEFAULT_TOP_K, aggregate, infer_type};
use crate::input::{Parser, ParserConfig, Row, Schema, SourceMetadata};
use crate::schema::{ColumnProfile, Report, ReportSummary};

/// Profile a table of rows.
///
/// The first row's keys fix the column set and order. Later rows are read
/// through that schema: a missing key counts as a missing value and extra keys
/// are ignored. An empty slice gives an empty report.
pub fn profile(rows: &[Row], top_k: usize, source: Option<String>) -> Result<Report> {
    if rows.is_empty() {
        debug!("no rows to profile");
        return Ok(Report::empty(source));
    }

    let schema = Schema::from_rows(rows);
    let mut columns = IndexMap::with_capacity(schema.len());

    for name in schema.columns() {
        let values: Vec<&str> = schema.column_values(rows, name).collect();
        let column_type = infer_type(&values);
        let stats = aggregate(&values, column_type, top_k).map_err(|e| {
            error!(column = %name, error = %e, "column aggregation failed");
            e.in_column(name.as_str())
        })?;

        debug!(
            column = %name,
            column_type = %column_type,
            count = stats.count,
            missing = stats.missing,
            unique = stats.unique,
            "profiled column"
        );

        columns.insert(name.clone(), ColumnProfile::new(column_type, stats));
    }

    Ok(Report {
        source,
        summary: ReportSummary {
            rows: rows.len(),
            columns: schema.len(),
        },
        columns,
    })
}

/// Configuration for a profiling run.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Row reader configuration.
    pub parser: ParserConfig,
    /// Number of most frequent values to report per column.
    pub top_k: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ProfilerConfig {
    /// Set the number of top values per column.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the row reader configuration.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

/// Result of profiling a file.
#[derive(Debug, Clone)]
pub struct ProfileRun {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The column profile.
    pub report: Report,
}

/// Reads files and profiles their columns.
pub struct Profiler {
    config: ProfilerConfig,
    parser: Parser,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Read a delimited file and profile it. The report's source is the file path.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<ProfileRun> {
        let path = path.as_ref();
        let (rows, source) = self.parser.parse_file(path)?;

        let report = self.profile_rows(&rows, Some(path.display().to_string()))?;

        info!(
            file = %source.file,
            rows = report.summary.rows,
            columns = report.summary.columns,
            "profiled file"
        );

        Ok(ProfileRun { source, report })
    }

    /// Profile rows already in memory.
    pub fn profile_rows(&self, rows: &[Row], source: Option<String>) -> Result<Report> {
        profile(rows, self.config.top_k, source)
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
