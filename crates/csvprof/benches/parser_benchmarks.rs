//! Row reader performance benchmarks.
//!
//! Measures parsing performance across different file sizes and delimiters.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use csvprof::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate synthetic delimited data with the specified number of rows and columns.
fn generate_data(rows: usize, cols: usize, delimiter: char) -> String {
    let mut data = String::new();

    for i in 0..cols {
        if i > 0 {
            data.push(delimiter);
        }
        data.push_str(&format!("column_{}", i + 1));
    }
    data.push('\n');

    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push(delimiter);
            }
            // Mix of numbers, text and missing markers
            match col % 4 {
                0 => data.push_str(&format!("ID_{:06}", row)),
                1 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                2 => data.push_str(if row % 7 == 0 { "NA" } else { "42" }),
                3 => data.push_str(&format!("Category_{}", row % 10)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

fn bench_parse(c: &mut Criterion, name: &str, delimiter: char, suffix: &str) {
    let mut group = c.benchmark_group(name);

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_data(*rows, 10, delimiter);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let parser = Parser::new();
                    black_box(parser.parse_file(temp.path()).unwrap())
                },
            )
        });
    }

    group.finish();
}

fn bench_parse_csv(c: &mut Criterion) {
    bench_parse(c, "parse_csv", ',', ".csv");
}

fn bench_parse_tsv(c: &mut Criterion) {
    bench_parse(c, "parse_tsv", '\t', ".tsv");
}

criterion_group!(benches, bench_parse_csv, bench_parse_tsv);
criterion_main!(benches);
