//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose as needed.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Values in literal notation (positional).
pub fn values_arg() -> Arg {
    Arg::new("values")
        .value_name("VALUES")
        .conflicts_with("file")
        .help("Comma-separated values in literal notation")
}

/// Read values from a file (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read values from FILE ('-' for stdin)")
}

/// Treat input as a JSON array (--input-json).
pub fn input_json_arg() -> Arg {
    Arg::new("input_json")
        .long("input-json")
        .action(ArgAction::SetTrue)
        .help("Parse input as a JSON array instead of literal notation")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

/// Left-hand value of a comparison (positional).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .value_name("LEFT")
        .required(true)
        .help("First value in literal notation")
}

/// Right-hand value of a comparison (positional).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .value_name("RIGHT")
        .required(true)
        .help("Second value in literal notation")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("List passing checks too")
}

/// Colorize output (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
