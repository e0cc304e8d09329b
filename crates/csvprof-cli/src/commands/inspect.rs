//! Inspect command - print a column overview to the terminal.

use std::path::PathBuf;

use colored::Colorize;
use csvprof::{ColumnType, render_json};

use super::build_profiler;
use crate::cli::ProfileOptions;

pub fn run(
    file: PathBuf,
    json: bool,
    options: ProfileOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let report = build_profiler(&options).profile_file(&file)?.report;

    if json {
        print!("{}", render_json(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Columns of".yellow().bold(),
        file.display().to_string().white(),
        report.summary.rows,
        report.summary.columns
    );
    println!();

    for (name, column) in &report.columns {
        let type_label = match column.column_type {
            ColumnType::Number => column.column_type.to_string().blue(),
            ColumnType::Text => column.column_type.to_string().magenta(),
        };
        let missing = format!("{:.2}% missing", column.stats.missing_percentage());
        let missing = if column.stats.missing > 0 {
            missing.yellow()
        } else {
            missing.normal()
        };
        let top = column
            .stats
            .top
            .iter()
            .map(|e| format!("{} ({})", e.value, e.count))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {:20} {:8} {:>16}  {:>6} unique  {}",
            name,
            type_label,
            missing,
            column.stats.unique,
            top.dimmed()
        );
    }

    Ok(())
}
