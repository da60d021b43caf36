//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenArgs;
use crate::commands::schema::SchemaArgs;

pub struct GenParams {
    pub events: Vec<PathBuf>,
    pub output: PathBuf,
    pub schema: Option<PathBuf>,
    pub symbol: Option<String>,
    pub loader: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            events: events(m),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_default(),
            schema: m.get_one::<PathBuf>("schema").cloned(),
            symbol: m.get_one::<String>("symbol").cloned(),
            loader: m.get_one::<String>("loader").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            events: p.events,
            output: p.output,
            schema: p.schema,
            symbol: p.symbol,
            loader: p.loader,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub events: Vec<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            events: events(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            events: p.events,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub events: Vec<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            events: events(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            events: p.events,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SchemaParams {
    pub output: Option<PathBuf>,
    pub loader: Option<String>,
}

impl SchemaParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned(),
            loader: m.get_one::<String>("loader").cloned(),
        }
    }
}

impl From<SchemaParams> for SchemaArgs {
    fn from(p: SchemaParams) -> Self {
        Self {
            output: p.output,
            loader: p.loader,
        }
    }
}

fn events(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("events")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
