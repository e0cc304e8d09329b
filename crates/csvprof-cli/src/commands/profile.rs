//! Profile command - profile a data file and write reports.

use std::path::PathBuf;

use colored::Colorize;
use csvprof::{write_json, write_markdown};
use tracing::info;

use super::build_profiler;
use crate::cli::{ProfileOptions, ReportFormat};

pub fn run(
    file: PathBuf,
    out_dir: PathBuf,
    report_name: String,
    format: ReportFormat,
    options: ProfileOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Profiling".cyan().bold(),
        file.display().to_string().white()
    );

    let run = build_profiler(&options).profile_file(&file)?;
    info!(
        hash = %run.source.hash,
        size_bytes = run.source.size_bytes,
        format = %run.source.format,
        analyzed_at = %run.source.analyzed_at,
        "read source"
    );
    let report = run.report;

    println!(
        "Found {} rows and {} columns",
        report.summary.rows.to_string().white().bold(),
        report.summary.columns.to_string().white().bold()
    );

    let mut written = Vec::new();
    if format.writes_json() {
        let path = out_dir.join(format!("{}.json", report_name));
        write_json(&report, &path)?;
        written.push(path);
    }
    if format.writes_markdown() {
        let path = out_dir.join(format!("{}.md", report_name));
        write_markdown(&report, &path)?;
        written.push(path);
    }

    println!();
    for path in &written {
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}
