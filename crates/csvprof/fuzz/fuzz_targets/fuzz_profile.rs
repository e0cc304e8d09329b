//! Fuzz target for parse + profile.
//!
//! Any input the reader accepts must profile without error, and the report
//! must satisfy count + missing == rows for every column.

#![no_main]

use csvprof::{Parser, profile};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(rows) = Parser::new().parse_reader(data) else {
        return;
    };

    let report = profile(&rows, 5, None).expect("profiling parsed rows must not fail");
    for column in report.columns.values() {
        assert_eq!(column.stats.count + column.stats.missing, rows.len());
        assert!(column.stats.unique <= column.stats.count);
    }
});
