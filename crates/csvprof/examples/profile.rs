//! Example: profile a CSV file and print both reports.
//!
//! Usage:
//!   cargo run --example profile -- <file_path> [top_k]

use std::env;
use std::path::Path;

use csvprof::{Profiler, ProfilerConfig, render_json, render_markdown};

fn main() -> csvprof::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path> [top_k]");
        std::process::exit(1);
    }

    let file_path = &args[1];
    if !Path::new(file_path).exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let top_k = args.get(2).and_then(|k| k.parse().ok()).unwrap_or(csvprof::DEFAULT_TOP_K);
    let profiler = Profiler::with_config(ProfilerConfig::default().with_top_k(top_k));
    let run = profiler.profile_file(file_path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("{} ({}, {} bytes)", run.source.file, run.source.format, run.source.size_bytes);
    println!("{}", separator);
    println!();
    print!("{}", render_json(&run.report)?);
    println!();
    print!("{}", render_markdown(&run.report));

    Ok(())
}
