//! Command-line argument parsing for the period table generator.
//!
//! Handles:
//! - Output file path (the only required argument)
//! - Output format selection
//! - Firmware reload offset
//! - Verbosity and help flags

use std::env;

use period_tables::OutputFormat;

/// Short usage line printed when no output file is given.
pub const USAGE: &str = "Arguments: filename";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Destination file for the generated tables
    pub file_path: Option<String>,
    /// Selected output format
    pub format: OutputFormat,
    /// Subtract the timer reload cycle (firmware tables)
    pub reload_offset: bool,
    /// Log progress at info level
    pub verbose: bool,
    /// Whether help was requested
    pub show_help: bool,
    /// Whether an unknown flag or bad value was seen
    pub invalid: bool,
}

impl CliArgs {
    /// Parse arguments from command line.
    pub fn parse() -> Self {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse arguments from an iterator (program name already skipped).
    pub fn parse_from<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--reload-offset" => {
                    parsed.reload_offset = true;
                }
                "--verbose" | "-v" => {
                    parsed.verbose = true;
                }
                "--help" | "-h" => {
                    parsed.show_help = true;
                }
                "--format" => {
                    if let Some(value) = iter.next() {
                        parsed.set_format(&value);
                    } else {
                        eprintln!("--format requires an argument (c, rust, json)");
                        parsed.invalid = true;
                    }
                }
                _ if arg.starts_with("--format=") => {
                    parsed.set_format(&arg["--format=".len()..]);
                }
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    eprintln!("Unknown flag: {}", arg);
                    parsed.invalid = true;
                }
                _ => {
                    if parsed.file_path.is_some() {
                        eprintln!("Unexpected extra argument: {}", arg);
                        parsed.invalid = true;
                    } else {
                        parsed.file_path = Some(arg);
                    }
                }
            }
        }

        parsed
    }

    fn set_format(&mut self, value: &str) {
        match OutputFormat::from_str(value) {
            Some(format) => self.format = format,
            None => {
                eprintln!("Unknown output format: {}", value);
                self.invalid = true;
            }
        }
    }

    /// Print help text to stdout.
    pub fn print_help() {
        println!(
            "Usage:\n  period-tables [--format <c|rust|json>] [--reload-offset] [-v] <filename>\n\n\
             Flags:\n\
             \x20 --format <fmt>       Output format:\n\
             \x20                        - c (default): const uint16_t period_tableN[84] PROGMEM\n\
             \x20                        - rust: pub static PERIOD_TABLEN: [u16; 84]\n\
             \x20                        - json: array of {{ divisor, periods }}\n\
             \x20 --reload-offset      Subtract the timer reload cycle (T - 1), as in the firmware\n\
             \x20 -v, --verbose        Log progress\n\
             \x20 -h, --help           Show this help\n\n\
             Tables are generated for clock divisors 12, 15 and 16, in that order.\n\n\
             Examples:\n\
             \x20 period-tables periods.c\n\
             \x20 period-tables --format rust src/periods.rs\n"
        );
    }
}
