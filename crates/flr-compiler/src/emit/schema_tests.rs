use super::{EmitConfig, render_schema};

#[test]
fn schema_header() {
    let config = EmitConfig::new().indent("    ");

    insta::assert_snapshot!(render_schema(&config), @r"
    #ifndef FLR_H
    #define FLR_H

    #include <stddef.h>
    #include <stdint.h>

    // Allocator handed to the loader. Unused by static tables.
    struct flr_Alloc {
        void *ctx;
        void *(*alloc)(void *ctx, size_t size);
        void (*free)(void *ctx, void *ptr);
    };
    typedef struct flr_Alloc flr_Alloc;

    enum flr_recordType {
        FLR_RECORD_STRUCT,
        FLR_RECORD_UNION,
    };

    enum flr_fieldKind {
        FLR_FIELD_PRIMITIVE,
        FLR_FIELD_STRUCT,
        FLR_FIELD_UNION,
    };

    // Zero when unknown.
    struct flr_primitive {
        uint32_t bits;
        uint8_t isSigned;
    };

    struct flr_typeSpecifier {
        enum flr_fieldKind kind;
        // Index into flr_programInfo.types, or -1.
        int64_t record;
        struct flr_primitive primitive;
    };

    struct flr_field {
        char *name;
        // In bits from the start of the record.
        uint64_t offset;
        struct flr_typeSpecifier type;
    };

    struct flr_typeInfo {
        int64_t ID;
        char *filename;
        char *name;
        size_t numAliases;
        char **aliases;
        enum flr_recordType recordType;
        size_t numFields;
        struct flr_field *fields;
    };

    struct flr_enumInfo {
        int64_t ID;
        char *filename;
        char *name;
        size_t numMembers;
    };

    struct flr_programInfo {
        size_t numTypes;
        size_t numEnums;
        struct flr_typeInfo *types;
        struct flr_enumInfo *enums;
    };

    struct flr_programInfo flr_load(flr_Alloc allocator);

    #endif // FLR_H
    ");
}

#[test]
fn guard_and_loader_follow_config() {
    let config = EmitConfig::new()
        .schema("include/reflect-v2.h")
        .loader("reflect_load");

    let header = render_schema(&config);

    assert!(header.starts_with("#ifndef REFLECT_V2_H\n#define REFLECT_V2_H\n"));
    assert!(header.contains("struct flr_programInfo reflect_load(flr_Alloc allocator);\n"));
    assert!(header.contains("\tvoid *ctx;\n"));
}
