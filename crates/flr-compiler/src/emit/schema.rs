//! Schema header the emitted table is compiled against.

use super::EmitConfig;
use super::writer::{Terminator, Writer};

/// Render the schema header declaring every struct the table uses and the
/// loader prototype.
pub fn render_schema(config: &EmitConfig) -> String {
    let guard = include_guard(config);
    let mut w = Writer::with_indent(config.indent.as_str());

    w.line(&format!("#ifndef {guard}"));
    w.line(&format!("#define {guard}"));
    w.blank();
    w.line("#include <stddef.h>");
    w.line("#include <stdint.h>");
    w.blank();

    w.comment("Allocator handed to the loader. Unused by static tables.");
    w.begin_block("struct flr_Alloc", Terminator::Semicolon);
    w.line("void *ctx;");
    w.line("void *(*alloc)(void *ctx, size_t size);");
    w.line("void (*free)(void *ctx, void *ptr);");
    w.end_block();
    w.line("typedef struct flr_Alloc flr_Alloc;");
    w.blank();

    w.begin_block("enum flr_recordType", Terminator::Semicolon);
    w.line("FLR_RECORD_STRUCT,");
    w.line("FLR_RECORD_UNION,");
    w.end_block();
    w.blank();

    w.begin_block("enum flr_fieldKind", Terminator::Semicolon);
    w.line("FLR_FIELD_PRIMITIVE,");
    w.line("FLR_FIELD_STRUCT,");
    w.line("FLR_FIELD_UNION,");
    w.end_block();
    w.blank();

    w.comment("Zero when unknown.");
    w.begin_block("struct flr_primitive", Terminator::Semicolon);
    w.line("uint32_t bits;");
    w.line("uint8_t isSigned;");
    w.end_block();
    w.blank();

    w.begin_block("struct flr_typeSpecifier", Terminator::Semicolon);
    w.line("enum flr_fieldKind kind;");
    w.comment("Index into flr_programInfo.types, or -1.");
    w.line("int64_t record;");
    w.line("struct flr_primitive primitive;");
    w.end_block();
    w.blank();

    w.begin_block("struct flr_field", Terminator::Semicolon);
    w.line("char *name;");
    w.comment("In bits from the start of the record.");
    w.line("uint64_t offset;");
    w.line("struct flr_typeSpecifier type;");
    w.end_block();
    w.blank();

    w.begin_block("struct flr_typeInfo", Terminator::Semicolon);
    w.line("int64_t ID;");
    w.line("char *filename;");
    w.line("char *name;");
    w.line("size_t numAliases;");
    w.line("char **aliases;");
    w.line("enum flr_recordType recordType;");
    w.line("size_t numFields;");
    w.line("struct flr_field *fields;");
    w.end_block();
    w.blank();

    w.begin_block("struct flr_enumInfo", Terminator::Semicolon);
    w.line("int64_t ID;");
    w.line("char *filename;");
    w.line("char *name;");
    w.line("size_t numMembers;");
    w.end_block();
    w.blank();

    w.begin_block("struct flr_programInfo", Terminator::Semicolon);
    w.line("size_t numTypes;");
    w.line("size_t numEnums;");
    w.line("struct flr_typeInfo *types;");
    w.line("struct flr_enumInfo *enums;");
    w.end_block();
    w.blank();

    w.line(&format!(
        "struct flr_programInfo {}(flr_Alloc allocator);",
        config.loader_name()
    ));
    w.blank();
    w.line(&format!("#endif // {guard}"));

    w.finish()
}

/// `flr.h` becomes `FLR_H`; anything not alphanumeric becomes `_`.
fn include_guard(config: &EmitConfig) -> String {
    let name = config
        .schema
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("flr.h");
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
