//! Fuzz target for the row reader.
//!
//! Checks that the CSV/TSV reader:
//! 1. Never panics on malformed input
//! 2. Handles every delimiter combination

#![no_main]

use csvprof::Parser;
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let parser = Parser::new();
            let _ = parser.parse_file(temp_file.path());
        }
    }
});
