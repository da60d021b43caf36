//! Test utilities shared by the pass tests.

use std::path::Path;

use flr_core::{RawEvent, Registry, parse_events};

use crate::emit::{EmitConfig, emit_table};
use crate::{Diagnostics, Error, Reducer, Unit};

/// Parse JSON events, panicking on malformed input.
pub fn events(text: &str) -> Vec<RawEvent> {
    parse_events(text).expect("test events must parse")
}

/// Fold events that are expected to reduce cleanly.
pub fn fold(text: &str) -> (Registry, Diagnostics) {
    let events = events(text);
    let unit = Reducer::fold(&events).expect("expected events to fold");
    (unit.registry, unit.diagnostics)
}

/// Fold events and return the whole unit, held typedefs included.
pub fn fold_unit(text: &str) -> Unit {
    let events = events(text);
    Reducer::fold(&events).expect("expected events to fold")
}

/// Fold events that are expected to fail, returning the error.
pub fn fold_err(text: &str) -> Error {
    let events = events(text);
    match Reducer::fold(&events) {
        Ok(_) => panic!("expected events to fail"),
        Err(err) => err,
    }
}

/// Config with a fixed base directory, so includes don't depend on the cwd.
pub fn test_config() -> EmitConfig {
    EmitConfig::new().base_dir("/work").indent("    ")
}

/// Render the table for `registry` into `/work/out/info.c`.
pub fn render_registry(registry: &Registry) -> (String, Diagnostics) {
    emit_table(registry, Path::new("out/info.c"), &test_config()).expect("expected table to emit")
}

/// Fold events and render their table.
pub fn render_table(text: &str) -> String {
    let (registry, _) = fold(text);
    render_registry(&registry).0
}
