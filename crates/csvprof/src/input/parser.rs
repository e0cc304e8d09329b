//! CSV/TSV row reader with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::source::{Row, SourceMetadata};
use crate::error::{ProfileError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads header-keyed rows from delimited text.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return its rows and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Vec<Row>, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |e| ProfileError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = self.resolve_delimiter(&contents);
        let (rows, column_count) = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            rows.len(),
            column_count,
        );

        debug!(
            file = %metadata.file,
            rows = metadata.row_count,
            columns = metadata.column_count,
            format = %metadata.format,
            "parsed input file"
        );

        Ok((rows, metadata))
    }

    /// Parse rows from any reader.
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<Vec<Row>> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).map_err(|e| ProfileError::Io {
            path: "<reader>".into(),
            source: e,
        })?;
        let delimiter = self.resolve_delimiter(&contents);
        let (rows, _) = self.parse_bytes(&contents, delimiter)?;
        Ok(rows)
    }

    fn resolve_delimiter(&self, bytes: &[u8]) -> u8 {
        self.config
            .delimiter
            .unwrap_or_else(|| detect_delimiter(bytes, self.config.quote))
    }

    /// Parse bytes into rows keyed by the header. Returns the rows and the header width.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<(Vec<Row>, usize)> {
        if delimiter == self.config.quote {
            return Err(ProfileError::Config(format!(
                "delimiter and quote are both {:?}",
                delimiter as char
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() {
            return Ok((Vec::new(), 0));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() != expected_cols {
                // Header line is line 1, so data row N is on line N + 2.
                warn!(
                    line = row_idx + 2,
                    expected = expected_cols,
                    found = record.len(),
                    "row width does not match header"
                );
            }

            // Every header gets a cell. Short records read as blank; surplus cells are dropped.
            let row: Row = headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.as_str(), record.get(i).unwrap_or("")))
                .collect();
            rows.push(row);
        }

        Ok((rows, expected_cols))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
///
/// A candidate must occur in every sampled line. Falls back to a comma.
fn detect_delimiter(bytes: &[u8], quote: u8) -> u8 {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim, quote))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if counts.contains(&0) {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; ties go to the earlier delimiter.
        let score = if consistent {
            first_count * 1000
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, skipping those inside quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    let delim_char = delimiter as char;
    let quote_char = quote as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            c if c == quote_char => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data, b'"'), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data, b'"'), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted() {
        let data = b"name,note\n\"Smith; John\",x\n\"Doe; Jane\",y";
        assert_eq!(detect_delimiter(data, b'"'), b',');
    }

    #[test]
    fn test_detect_delimiter_uses_configured_quote() {
        let data = b"a,b;c\n'1,5';x\n'2,5';y";
        assert_eq!(detect_delimiter(data, b'\''), b';');
    }

    #[test]
    fn test_detect_delimiter_requires_every_line() {
        assert_eq!(detect_delimiter(b"size|bytes\n10\n20\n", b'"'), b',');
        assert_eq!(detect_delimiter(b"a;b\tc\n1\t2\n3\t4\n", b'"'), b'\t');
    }

    #[test]
    fn test_detect_delimiter_empty_defaults_to_comma() {
        assert_eq!(detect_delimiter(b"", b'"'), b',');
        assert_eq!(detect_delimiter(b"single_column\nvalue", b'"'), b',');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let (rows, width) = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(width, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["name", "age", "city"]);
        assert_eq!(rows[0].get("name"), Some("Alice"));
        assert_eq!(rows[1].get("age"), Some("25"));
    }

    #[test]
    fn test_parse_short_and_long_rows() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2\n4,5,6,7";
        let (rows, _) = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(rows[0].get("c"), Some(""));
        assert_eq!(rows[1].get("c"), Some("6"));
        assert_eq!(rows[1].keys().count(), 3);
    }

    #[test]
    fn test_parse_header_only() {
        let parser = Parser::new();
        let (rows, width) = parser.parse_bytes(b"a,b,c\n", b',').unwrap();
        assert!(rows.is_empty());
        assert_eq!(width, 3);
    }

    #[test]
    fn test_parse_empty_input() {
        let parser = Parser::new();
        let rows = parser.parse_reader(&b""[..]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..Default::default()
        });
        let rows = parser.parse_reader(&b"x\n1\n2\n3\n"[..]).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_delimiter_equal_to_quote_is_config_error() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: Some(b'"'),
            ..Default::default()
        });
        let err = parser.parse_reader(&b"a\n1\n"[..]).unwrap_err();
        assert!(matches!(err, ProfileError::Config(_)));
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let parser = Parser::new();
        let rows = parser
            .parse_reader(&b"city,note\nNYC,\"big, busy\"\n"[..])
            .unwrap();
        assert_eq!(rows[0].get("note"), Some("big, busy"));
    }
}
