//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("flr")
        .about("Reflection tables from declaration events")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(schema_command())
}

/// Fold, merge and serialize a reflection table.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate a reflection table")
        .override_usage("  flr gen <EVENTS>... -o <FILE>")
        .after_help(
            r#"EXAMPLES:
  flr gen a.json b.json -o gen/info.c          # one unit per events file
  flr gen - -o info.c < events.json            # events from stdin
  flr gen a.json -o info.c --schema inc/flr.h  # schema header elsewhere"#,
        )
        .arg(events_arg())
        .arg(output_arg())
        .arg(schema_arg())
        .arg(symbol_arg())
        .arg(loader_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Fold and resolve without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate declaration events")
        .override_usage("  flr check <EVENTS>...")
        .after_help(
            r#"EXAMPLES:
  flr check a.json b.json           # report dangling references
  flr check a.json --strict         # fail on warnings"#,
        )
        .arg(events_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Show the merged registry.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the registry built from declaration events")
        .override_usage("  flr dump <EVENTS>... [--json]")
        .arg(events_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Write the schema header.
pub fn schema_command() -> Command {
    Command::new("schema")
        .about("Write the schema header tables are compiled against")
        .override_usage("  flr schema [-o <FILE>]")
        .arg(optional_output_arg())
        .arg(loader_arg())
}
