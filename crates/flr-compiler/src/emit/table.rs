//! Reflection table serialization.
//!
//! One pass over a finished registry, in creation order. Output indices are
//! assigned up front so that any field can refer to any record, including
//! ones emitted after it.

use flr_core::{EnumEntry, FieldEntry, Primitive, RecordEntry, RecordKind, Registry, TypeSpecifier};

use super::EmitConfig;
use super::resolve::OutputIndex;
use super::writer::{Terminator, Writer, quote};
use crate::Diagnostics;

/// Struct names from the schema header.
const PROGRAM_INFO: &str = "struct flr_programInfo";
const TYPE_INFO: &str = "struct flr_typeInfo";
const FIELD: &str = "struct flr_field";
const ENUM_INFO: &str = "struct flr_enumInfo";
const ALLOC: &str = "flr_Alloc";

pub struct TableSerializer<'a> {
    registry: &'a Registry,
    config: &'a EmitConfig,
    index: OutputIndex<'a>,
    diagnostics: Diagnostics,
    w: Writer,
}

impl<'a> TableSerializer<'a> {
    pub fn new(registry: &'a Registry, config: &'a EmitConfig) -> Self {
        Self {
            registry,
            config,
            index: OutputIndex::new(registry),
            diagnostics: Diagnostics::new(),
            w: Writer::with_indent(config.indent.as_str()),
        }
    }

    /// Emit the whole translation unit. `include` is the schema header path
    /// as written in the `#include` line.
    pub fn serialize(mut self, include: &str) -> (String, Diagnostics) {
        self.emit_includes(include);
        self.emit_program_info();
        self.w.blank();
        self.emit_loader();
        (self.w.finish(), self.diagnostics)
    }

    fn emit_includes(&mut self, include: &str) {
        self.w.line(&format!("#include {}", quote(include)));
        for header in &self.config.system_includes {
            self.w.line(&format!("#include <{header}>"));
        }
        self.w.blank();
    }

    fn emit_program_info(&mut self) {
        let registry = self.registry;
        let header = format!("{PROGRAM_INFO} {}", self.config.symbol_name());
        self.w.assign_block(&header, "", Terminator::Semicolon);
        self.w
            .assign(".numTypes", self.registry.record_count(), Terminator::Comma);
        self.w
            .assign(".numEnums", self.registry.enum_count(), Terminator::Comma);
        self.w.blank();

        self.w
            .assign_block(".types", &format!("({TYPE_INFO}[])"), Terminator::Comma);
        if self.registry.record_count() == 0 {
            self.w.comment("No types");
        }
        for (i, record) in registry.records().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            self.emit_record(record);
        }
        self.w.end_block();

        self.w
            .assign_block(".enums", &format!("({ENUM_INFO}[])"), Terminator::Comma);
        if self.registry.enum_count() == 0 {
            self.w.comment("No enums");
        }
        for (i, entry) in registry.enums().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            self.emit_enum(entry);
        }
        self.w.end_block();

        self.w.end_block();
    }

    fn emit_record(&mut self, record: &RecordEntry) {
        self.w.begin_block("", Terminator::Comma);
        self.w.assign(".ID", record.id().id(), Terminator::Comma);
        self.w
            .assign(".filename", quote(record.id().file()), Terminator::Comma);
        self.w.assign(".name", quote(record.name()), Terminator::Comma);

        self.w
            .assign(".numAliases", record.aliases().len(), Terminator::Comma);
        self.w.assign_block(".aliases", "(char *[])", Terminator::Comma);
        if record.aliases().is_empty() {
            self.w.comment("No aliases");
        }
        for alias in record.aliases() {
            self.w.line(&format!("{},", quote(alias)));
        }
        self.w.end_block();

        self.w
            .assign(".recordType", record_kind(record.kind()), Terminator::Comma);
        self.w
            .assign(".numFields", record.fields().len(), Terminator::Comma);
        self.w
            .assign_block(".fields", &format!("({FIELD}[])"), Terminator::Comma);
        if record.fields().is_empty() {
            self.w.comment("No fields");
        }
        for (i, field) in record.fields().iter().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            self.emit_field(record, field);
        }
        self.w.end_block();

        self.w.end_block();
    }

    fn emit_field(&mut self, owner: &RecordEntry, field: &FieldEntry) {
        self.w.begin_block("", Terminator::Comma);
        self.w.assign(".name", quote(&field.name), Terminator::Comma);
        self.w.assign(".offset", field.offset, Terminator::Comma);

        let target = self.index.resolve(owner, field, &mut self.diagnostics);
        self.w.assign_block(".type", "", Terminator::Comma);
        match &field.ty {
            TypeSpecifier::Primitive(primitive) => {
                self.w
                    .assign(".kind", "FLR_FIELD_PRIMITIVE", Terminator::Comma);
                self.w.assign(".record", target, Terminator::Comma);
                if let Some(value) = primitive_initializer(primitive) {
                    self.w.assign(".primitive", value, Terminator::Comma);
                }
            }
            TypeSpecifier::Record { kind, .. } => {
                self.w.assign(".kind", field_kind(*kind), Terminator::Comma);
                self.w.assign(".record", target, Terminator::Comma);
            }
        }
        self.w.end_block();

        self.w.end_block();
    }

    fn emit_enum(&mut self, entry: &EnumEntry) {
        self.w.begin_block("", Terminator::Comma);
        self.w.assign(".ID", entry.id().id(), Terminator::Comma);
        self.w
            .assign(".filename", quote(entry.id().file()), Terminator::Comma);
        self.w.assign(".name", quote(entry.name()), Terminator::Comma);
        self.w.assign(".numMembers", 0, Terminator::Comma);
        self.w.end_block();
    }

    fn emit_loader(&mut self) {
        let header = format!("{PROGRAM_INFO} {}({ALLOC} allocator)", self.config.loader_name());
        self.w.begin_block(&header, Terminator::Bare);
        self.w.line("(void)allocator;");
        self.w.line(&format!("return {};", self.config.symbol_name()));
        self.w.end_block();
    }
}

fn record_kind(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Struct => "FLR_RECORD_STRUCT",
        RecordKind::Union => "FLR_RECORD_UNION",
    }
}

fn field_kind(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Struct => "FLR_FIELD_STRUCT",
        RecordKind::Union => "FLR_FIELD_UNION",
    }
}

/// `{ .bits = 32, .isSigned = 1 }`, with unknown halves left out.
fn primitive_initializer(primitive: &Primitive) -> Option<String> {
    if !primitive.is_known() {
        return None;
    }
    let mut parts = Vec::new();
    if let Some(bits) = primitive.bits {
        parts.push(format!(".bits = {bits}"));
    }
    if let Some(signed) = primitive.signed {
        parts.push(format!(".isSigned = {}", u8::from(signed)));
    }
    Some(format!("{{ {} }}", parts.join(", ")))
}
