//! JSON report rendering.

use std::path::Path;

use super::write_document;
use crate::error::Result;
use crate::schema::Report;

/// Render a report as pretty-printed JSON with a trailing newline.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Render a report as JSON and write it to `path`.
pub fn write_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    write_document(path.as_ref(), &render_json(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Row;
    use crate::profiler::profile;

    #[test]
    fn test_render_json_shape() {
        let rows = vec![Row::new().with("city", "Zürich").with("n", "1")];
        let report = profile(&rows, 5, Some("cities.csv".into())).unwrap();
        let json = render_json(&report).unwrap();

        assert!(json.ends_with("}\n"));
        assert!(json.contains("\"Zürich\""));
        assert!(json.contains("  \"summary\": {"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "cities.csv");
        assert_eq!(value["columns"]["n"]["type"], "number");
        assert_eq!(value["columns"]["n"]["stats"]["top"][0]["value"], 1.0);
        assert_eq!(value["columns"]["city"]["stats"]["top"][0]["count"], 1);
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        write_json(&crate::schema::Report::empty(None), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"rows\": 0"));
    }
}
