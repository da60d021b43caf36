use std::fmt::Write;
use std::path::PathBuf;

use flr_core::{Colors, FieldEntry, Registry, TypeSpecifier};

use super::run_common::{build_session, fail};

pub struct DumpArgs {
    pub events: Vec<PathBuf>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let session = build_session(&args.events);
    let registry = session.registry();

    if args.json {
        let json = serde_json::to_string_pretty(&registry.snapshot()).unwrap_or_else(|e| fail(e));
        println!("{}", json);
        return;
    }

    print!("{}", render(registry, Colors::new(args.color)));
}

/// Human readable listing, records first, then enums.
///
/// ```text
/// struct Point a.h#1
///   = PointAlias
///   x @0: i32
/// ```
pub fn render(registry: &Registry, c: Colors) -> String {
    let mut out = String::new();

    for (i, record) in registry.records().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let name = if record.name().is_empty() {
            "<unnamed>"
        } else {
            record.name()
        };
        let _ = writeln!(
            out,
            "{} {}{}{} {}{}{}",
            record.kind().as_str(),
            c.blue,
            name,
            c.reset,
            c.dim,
            record.id(),
            c.reset
        );
        for alias in record.aliases() {
            let _ = writeln!(out, "  = {}{}{}", c.green, alias, c.reset);
        }
        for field in record.fields() {
            let _ = writeln!(
                out,
                "  {} {}@{}{}: {}",
                field.name,
                c.dim,
                field.offset,
                c.reset,
                field_type(field)
            );
        }
    }

    for (i, entry) in registry.enums().enumerate() {
        if i > 0 || registry.record_count() > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "enum {}{}{} {}{}{}",
            c.blue,
            entry.name(),
            c.reset,
            c.dim,
            entry.id(),
            c.reset
        );
    }

    out
}

fn field_type(field: &FieldEntry) -> String {
    match &field.ty {
        TypeSpecifier::Record { target, kind } => format!("{} {}", kind.as_str(), target),
        TypeSpecifier::Primitive(p) => match (p.bits, p.signed) {
            (Some(bits), Some(true)) => format!("i{bits}"),
            (Some(bits), Some(false)) => format!("u{bits}"),
            (Some(bits), None) => format!("b{bits}"),
            (None, _) => "?".to_string(),
        },
    }
}
