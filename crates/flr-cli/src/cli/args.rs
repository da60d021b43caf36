//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Event files, one per translation unit (positional, `-` for stdin).
pub fn events_arg() -> Arg {
    Arg::new("events")
        .value_name("EVENTS")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Declaration event files, one per translation unit (use \"-\" for stdin)")
}

/// Output file (-o/--output), required.
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Table file to write")
}

/// Optional output file (-o/--output); stdout when absent.
pub fn optional_output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to write (stdout if omitted)")
}

/// Schema header path (--schema).
pub fn schema_arg() -> Arg {
    Arg::new("schema")
        .long("schema")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Schema header the table includes [default: flr.h]")
}

/// Data object name (--symbol).
pub fn symbol_arg() -> Arg {
    Arg::new("symbol")
        .long("symbol")
        .value_name("NAME")
        .help("Name of the table object [default: info]")
}

/// Loader function name (--loader).
pub fn loader_arg() -> Arg {
    Arg::new("loader")
        .long("loader")
        .value_name("NAME")
        .help("Name of the loader function [default: flr_load]")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Structured output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the registry as JSON")
}
