//! Markdown report rendering.

use std::fmt::Write;
use std::path::Path;

use super::write_document;
use crate::error::Result;
use crate::schema::{ColumnProfile, ColumnType, Report};

/// Render a report as a Markdown document.
///
/// Layout: title, summary bullets, an overview table with one row per column,
/// then a details section per column listing its top values.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    let rows = report.summary.rows;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# CSV Profiling Report\n");
    let _ = writeln!(out, "- Rows: **{}**", rows);
    let _ = writeln!(out, "- Columns: **{}**\n", report.summary.columns);

    let _ = writeln!(out, "## Column Overview\n");
    let _ = writeln!(out, "| Column | Type | Missing % | Unique |");
    let _ = writeln!(out, "|--------|------|-----------|--------|");
    for (name, column) in &report.columns {
        let missing_pct = if rows == 0 {
            0.0
        } else {
            column.stats.missing as f64 / rows as f64 * 100.0
        };
        let _ = writeln!(
            out,
            "| {} | {} | {:.2}% | {} |",
            escape_cell(name),
            column.column_type,
            missing_pct,
            column.stats.unique
        );
    }

    for (name, column) in &report.columns {
        out.push('\n');
        render_details(&mut out, name, column);
    }

    out
}

/// Render a report as Markdown and write it to `path`.
pub fn write_markdown(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    write_document(path.as_ref(), &render_markdown(report))
}

fn render_details(out: &mut String, name: &str, column: &ColumnProfile) {
    let stats = &column.stats;

    let _ = writeln!(out, "## {} Details\n", name);
    let _ = writeln!(out, "- Type: **{}**", column.column_type);
    let _ = writeln!(out, "- Missing: **{}**", stats.missing);
    let _ = writeln!(out, "- Unique: **{}**", stats.unique);

    if column.column_type == ColumnType::Number {
        // Derived from the top values only, not the full column.
        let values: Vec<f64> = stats.top.iter().filter_map(|e| e.value.as_f64()).collect();
        if !values.is_empty() {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let _ = writeln!(out, "- Min: {}", min);
            let _ = writeln!(out, "- Max: {}", max);
            let _ = writeln!(out, "- Mean: {:.2}", mean);
        }
    }

    let _ = writeln!(out, "- Top values:");
    for entry in &stats.top {
        let _ = writeln!(out, "  - {} ({})", entry.value, entry.count);
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Row;
    use crate::profiler::profile;

    fn age_city_report() -> Report {
        let rows = vec![
            Row::new().with("age", "30").with("city", "NYC"),
            Row::new().with("age", "NA").with("city", "NYC"),
            Row::new().with("age", "25").with("city", "LA"),
        ];
        profile(&rows, 5, None).unwrap()
    }

    #[test]
    fn test_render_markdown_document() {
        let expected = "\
# CSV Profiling Report

- Rows: **3**
- Columns: **2**

## Column Overview

| Column | Type | Missing % | Unique |
|--------|------|-----------|--------|
| age | number | 33.33% | 2 |
| city | text | 0.00% | 2 |

## age Details

- Type: **number**
- Missing: **1**
- Unique: **2**
- Min: 25
- Max: 30
- Mean: 27.50
- Top values:
  - 30 (1)
  - 25 (1)

## city Details

- Type: **text**
- Missing: **0**
- Unique: **2**
- Top values:
  - NYC (2)
  - LA (1)
";
        assert_eq!(render_markdown(&age_city_report()), expected);
    }

    #[test]
    fn test_render_markdown_empty_report() {
        let md = render_markdown(&Report::empty(None));
        assert!(md.contains("- Rows: **0**"));
        assert!(md.ends_with("|--------|------|-----------|--------|\n"));
    }

    #[test]
    fn test_pipes_escaped_in_overview() {
        let rows = vec![Row::new().with("a|b", "x")];
        let md = render_markdown(&profile(&rows, 5, None).unwrap());
        assert!(md.contains("| a\\|b | text | 0.00% | 1 |"));
    }

    #[test]
    fn test_write_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.md");

        write_markdown(&age_city_report(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# CSV Profiling Report\n"));
    }
}
