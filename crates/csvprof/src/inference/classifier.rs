//! Column type classification.

use super::missing::Partition;
use crate::schema::ColumnType;

/// Parse a token as a floating-point number.
///
/// The whole trimmed token must match: optional sign, digits with an optional
/// decimal point, optional exponent. `inf`, `infinity` and `nan` are accepted.
/// Thousands separators, hex and digit-group underscores are rejected.
pub fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}

/// Infer the type of a column from its raw values.
///
/// A column is [`ColumnType::Number`] when it has at least one usable value and
/// every usable value parses as a number. Stops at the first value that does not.
pub fn infer_type(values: &[&str]) -> ColumnType {
    let partition = Partition::of(values);
    if partition.usable.is_empty() {
        return ColumnType::Text;
    }

    if partition.usable.iter().all(|v| parse_number(v).is_some()) {
        ColumnType::Number
    } else {
        ColumnType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_grammar() {
        assert_eq!(parse_number("1"), Some(1.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("+4"), Some(4.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("1.5E-2"), Some(0.015));
        assert!(parse_number("inf").is_some_and(f64::is_infinite));
    }

    #[test]
    fn test_parse_number_rejects_partial_tokens() {
        for token in ["abc", "1,000", "1_000", "12abc", "0x10", "", ".", "1 2", "e5"] {
            assert_eq!(parse_number(token), None, "{token:?} should not parse");
        }
    }

    #[test]
    fn test_infer_number_with_missing() {
        assert_eq!(infer_type(&["1", "2.5", "", "NA"]), ColumnType::Number);
    }

    #[test]
    fn test_infer_text_on_any_non_number() {
        assert_eq!(infer_type(&["1", "abc"]), ColumnType::Text);
        assert_eq!(infer_type(&["abc", "1"]), ColumnType::Text);
    }

    #[test]
    fn test_infer_all_missing_is_text() {
        assert_eq!(infer_type(&["", "n/a", "NULL"]), ColumnType::Text);
        assert_eq!(infer_type(&[]), ColumnType::Text);
    }

    #[test]
    fn test_infer_boolean_words_are_text() {
        assert_eq!(infer_type(&["0", "false"]), ColumnType::Text);
    }
}
