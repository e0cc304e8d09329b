//! csvprof CLI - profile the columns of a CSV file.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_format));

    let result = match cli.command {
        Commands::Profile {
            file,
            out_dir,
            report_name,
            format,
            options,
        } => commands::profile::run(file, out_dir, report_name, format, options),

        Commands::Inspect {
            file,
            json,
            options,
        } => commands::inspect::run(file, json, options),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
