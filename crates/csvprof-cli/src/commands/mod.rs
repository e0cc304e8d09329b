//! CLI command implementations.

pub mod inspect;
pub mod profile;

use csvprof::{ParserConfig, Profiler, ProfilerConfig};

use crate::cli::ProfileOptions;

/// Build a profiler from the shared command-line options.
fn build_profiler(options: &ProfileOptions) -> Profiler {
    let parser = ParserConfig {
        delimiter: options.delimiter,
        max_rows: options.max_rows,
        ..ParserConfig::default()
    };
    Profiler::with_config(
        ProfilerConfig::default()
            .with_top_k(options.top_k)
            .with_parser(parser),
    )
}
