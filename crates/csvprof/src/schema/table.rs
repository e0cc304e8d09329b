//! Table-level report definition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::ColumnProfile;

/// Row and column counts for a profiled table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub rows: usize,
    pub columns: usize,
}

/// Profile of an entire table.
///
/// Columns keep the order of the first row's keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Where the rows came from, if known.
    pub source: Option<String>,
    pub summary: ReportSummary,
    pub columns: IndexMap<String, ColumnProfile>,
}

impl Report {
    /// Create a report for a table with no rows.
    pub fn empty(source: Option<String>) -> Self {
        Self {
            source,
            summary: ReportSummary::default(),
            columns: IndexMap::new(),
        }
    }

    /// Get a column profile by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.get(name)
    }

    /// Get all column names in report order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_shape() {
        let report = Report::empty(None);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["source"].is_null());
        assert_eq!(json["summary"]["rows"], 0);
        assert_eq!(json["summary"]["columns"], 0);
        assert!(json["columns"].as_object().unwrap().is_empty());
    }
}
