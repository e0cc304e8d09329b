//! Column profile and statistics.

use serde::{Deserialize, Serialize};

use super::types::{ColumnType, TopValue};

/// One entry of a top-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    /// The distinct value.
    pub value: TopValue,
    /// Number of occurrences among usable values.
    pub count: usize,
}

impl TopEntry {
    pub fn new(value: TopValue, count: usize) -> Self {
        Self { value, count }
    }
}

/// Statistics computed for a column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Number of non-missing values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Number of distinct non-missing values.
    pub unique: usize,
    /// Most frequent values, descending by count.
    pub top: Vec<TopEntry>,
}

impl ColumnStats {
    /// Total number of values seen, missing included.
    pub fn total(&self) -> usize {
        self.count + self.missing
    }

    /// Percentage of missing values, 0.0 for an empty column.
    pub fn missing_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (self.missing as f64 / total as f64) * 100.0
        }
    }
}

/// Profile of a single column: its inferred type and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub stats: ColumnStats,
}

impl ColumnProfile {
    pub fn new(column_type: ColumnType, stats: ColumnStats) -> Self {
        Self { column_type, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_percentage() {
        let stats = ColumnStats {
            count: 2,
            missing: 1,
            unique: 2,
            top: Vec::new(),
        };
        assert_eq!(stats.total(), 3);
        assert!((stats.missing_percentage() - 33.333).abs() < 0.001);
        assert_eq!(ColumnStats::default().missing_percentage(), 0.0);
    }

    #[test]
    fn test_profile_uses_type_key() {
        let profile = ColumnProfile::new(ColumnType::Number, ColumnStats::default());
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["type"], "number");
        assert_eq!(json["stats"]["count"], 0);
        assert!(json["stats"]["top"].as_array().unwrap().is_empty());
    }
}
