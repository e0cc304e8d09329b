//! Missing-value policy shared by classification and aggregation.

/// Tokens that mark a cell as missing, compared after trimming and case-folding.
pub const MISSING_TOKENS: &[&str] = &["", "na", "n/a", "null", "none", "nan"];

/// Check if a raw cell value represents a missing value.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// A column's values split into usable (trimmed) values and a missing count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Non-missing values in input order, trimmed.
    pub usable: Vec<&'a str>,
    /// Number of missing values.
    pub missing: usize,
}

impl<'a> Partition<'a> {
    /// Split raw values with [`is_missing`].
    pub fn of(values: &[&'a str]) -> Self {
        let mut usable = Vec::with_capacity(values.len());
        let mut missing = 0;

        for &value in values {
            if is_missing(value) {
                missing += 1;
            } else {
                usable.push(value.trim());
            }
        }

        Self { usable, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        for value in ["NA", "na", "N/A", "  ", "", "null", "None", "NaN", " NULL "] {
            assert!(is_missing(value), "{value:?} should be missing");
        }
    }

    #[test]
    fn test_is_not_missing() {
        for value in ["0", "false", "value", "-", ".", "nil", "n.a."] {
            assert!(!is_missing(value), "{value:?} should not be missing");
        }
    }

    #[test]
    fn test_partition_trims_usable_values() {
        let partition = Partition::of(&[" 1 ", "NA", "abc", ""]);
        assert_eq!(partition.usable, vec!["1", "abc"]);
        assert_eq!(partition.missing, 2);
    }
}
