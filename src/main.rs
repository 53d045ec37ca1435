//! 2A03 Period Table Generator CLI
//!
//! Writes the period tables for clock divisors 12, 15 and 16 to the file
//! named on the command line.

mod args;

use std::process;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;

use args::{CliArgs, USAGE};
use period_tables::Tuning;

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.show_help {
        CliArgs::print_help();
        return Ok(());
    }
    if args.invalid {
        eprintln!("{USAGE}");
        process::exit(2);
    }
    let Some(file_path) = args.file_path else {
        println!("{USAGE}");
        return Ok(());
    };

    setup_logging(args.verbose);

    let tuning = if args.reload_offset {
        Tuning::default().with_reload_offset()
    } else {
        Tuning::default()
    };

    period_tables::generate_with(&file_path, &tuning, args.format)
        .with_context(|| format!("Failed to write '{}'", file_path))?;

    info!(path = %file_path, "done");
    Ok(())
}
