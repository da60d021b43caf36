use crate::{
    FieldEntry, IdentityKey, Primitive, RecordHandle, RecordKind, Registry, RegistryError,
    TypeSpecifier,
};

fn key(id: i64, file: &str) -> IdentityKey {
    IdentityKey::new(id, file)
}

fn int_field(name: &str, offset: u64) -> FieldEntry {
    FieldEntry::new(name, offset, TypeSpecifier::Primitive(Primitive::new(32, true)))
}

#[test]
fn create_keeps_first_seen_order() {
    let mut registry = Registry::new();
    let keys = [key(7, "b.h"), key(1, "a.h"), key(3, "a.h"), key(1, "b.h")];

    for (i, k) in keys.iter().enumerate() {
        let handle = registry
            .create(k.clone(), format!("R{i}"), RecordKind::Struct)
            .unwrap();
        assert_eq!(handle.index(), i);
    }

    assert_eq!(registry.record_count(), 4);
    let order: Vec<_> = registry.records().map(|r| r.id().clone()).collect();
    assert_eq!(order, keys);
}

#[test]
fn same_id_in_different_files_are_distinct() {
    let mut registry = Registry::new();
    let a = registry.create(key(1, "a.h"), "A", RecordKind::Struct).unwrap();
    let b = registry.create(key(1, "b.h"), "B", RecordKind::Union).unwrap();

    assert_ne!(a, b);
    assert_eq!(registry.find_by_key(&key(1, "a.h")), Some(a));
    assert_eq!(registry.find_by_key(&key(1, "b.h")), Some(b));
    assert_eq!(registry.get(b).kind(), RecordKind::Union);
}

#[test]
fn redeclaring_a_key_is_rejected() {
    let mut registry = Registry::new();
    registry.create(key(1, "a.h"), "Point", RecordKind::Struct).unwrap();

    let err = registry
        .create(key(1, "a.h"), "Point", RecordKind::Struct)
        .unwrap_err();

    assert_eq!(err, RegistryError::DuplicateRecord(key(1, "a.h")));
    assert_eq!(registry.record_count(), 1);
    insta::assert_snapshot!(err.to_string(), @"record a.h#1 is already registered");
}

#[test]
fn find_by_key_misses_unknown_keys() {
    let mut registry = Registry::new();
    registry.create(key(1, "a.h"), "Point", RecordKind::Struct).unwrap();

    assert_eq!(registry.find_by_key(&key(2, "a.h")), None);
    assert_eq!(registry.find_by_key(&key(1, "c.h")), None);
    assert!(registry.handles_for(&key(2, "a.h")).is_empty());
    assert_eq!(registry.handles_for(&key(1, "a.h")).len(), 1);
}

#[test]
fn aliases_are_deduplicated_in_insertion_order() {
    let mut registry = Registry::new();
    let h = registry.create(key(1, "a.h"), "Point", RecordKind::Struct).unwrap();

    assert!(registry.append_alias(h, "PointAlias"));
    assert!(registry.append_alias(h, "Point2"));
    assert!(!registry.append_alias(h, "PointAlias"));

    assert_eq!(registry.get(h).aliases(), ["PointAlias", "Point2"]);
}

#[test]
fn fields_keep_declaration_order() {
    let mut registry = Registry::new();
    let h = registry.create(key(1, "a.h"), "U", RecordKind::Union).unwrap();

    registry.append_field(h, int_field("b", 0));
    registry.append_field(h, int_field("a", 0));

    let names: Vec<_> = registry.get(h).fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn append_field_accepts_unregistered_targets() {
    let mut registry = Registry::new();
    let h = registry.create(key(1, "b.h"), "Line", RecordKind::Struct).unwrap();
    let ty = TypeSpecifier::Record {
        target: key(99, "a.h"),
        kind: RecordKind::Struct,
    };

    registry.append_field(h, FieldEntry::new("start", 0, ty.clone()));

    assert_eq!(registry.get(h).fields()[0].ty, ty);
    assert_eq!(registry.find_by_key(&key(99, "a.h")), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn foreign_handle_panics() {
    let mut registry = Registry::new();
    registry.append_alias(RecordHandle(3), "Nope");
}

#[test]
fn enums_are_keyed_separately() {
    let mut registry = Registry::new();
    registry.create(key(1, "a.h"), "Point", RecordKind::Struct).unwrap();
    registry.create_enum(key(1, "a.h"), "Color").unwrap();

    assert_eq!(registry.record_count(), 1);
    assert_eq!(registry.enum_count(), 1);
    assert_eq!(
        registry.create_enum(key(1, "a.h"), "Color"),
        Err(RegistryError::DuplicateEnum(key(1, "a.h")))
    );
}

#[test]
fn enum_only_registry_is_not_empty() {
    let mut registry = Registry::new();
    assert!(registry.is_empty());

    registry.create_enum(key(9, "c.h"), "Color").unwrap();

    assert_eq!(registry.record_count(), 0);
    assert!(!registry.is_empty());
}

#[test]
fn merge_deduplicates_shared_records() {
    let mut left = Registry::new();
    let h = left.create(key(1, "shared.h"), "Point", RecordKind::Struct).unwrap();
    left.append_field(h, int_field("x", 0));
    left.append_alias(h, "Point_t");

    let mut right = Registry::new();
    right.create(key(4, "b.c"), "Local", RecordKind::Struct).unwrap();
    let h = right.create(key(1, "shared.h"), "Point", RecordKind::Struct).unwrap();
    right.append_field(h, int_field("x", 0));
    right.append_alias(h, "Point_t");
    right.append_alias(h, "PointRef");
    right.create_enum(key(9, "shared.h"), "Mode").unwrap();

    left.merge(right).unwrap();

    let names: Vec<_> = left.records().map(|r| r.name().to_string()).collect();
    assert_eq!(names, ["Point", "Local"]);
    let point = left.get_by_key(&key(1, "shared.h")).unwrap();
    assert_eq!(point.aliases(), ["Point_t", "PointRef"]);
    assert_eq!(point.fields().len(), 1);
    assert_eq!(left.enum_count(), 1);
}

#[test]
fn merge_rejects_conflicting_shapes() {
    let mut left = Registry::new();
    let h = left.create(key(1, "shared.h"), "Point", RecordKind::Struct).unwrap();
    left.append_field(h, int_field("x", 0));

    let mut right = Registry::new();
    let h = right.create(key(1, "shared.h"), "Point", RecordKind::Struct).unwrap();
    right.append_field(h, int_field("y", 0));

    assert_eq!(
        left.merge(right),
        Err(RegistryError::ConflictingRecord(key(1, "shared.h")))
    );
}

#[test]
fn snapshot_serializes_as_ordered_lists() {
    let mut registry = Registry::new();
    let h = registry.create(key(1, "a.h"), "Point", RecordKind::Struct).unwrap();
    registry.append_alias(h, "P");
    registry.append_field(
        h,
        FieldEntry::new("x", 0, TypeSpecifier::Primitive(Primitive::UNKNOWN)),
    );

    let json = serde_json::to_string(&registry.snapshot()).unwrap();

    insta::assert_snapshot!(json, @r#"{"records":[{"id":{"id":1,"file":"a.h"},"name":"Point","kind":"struct","aliases":["P"],"fields":[{"name":"x","offset":0,"type":{"type":"primitive"}}]}],"enums":[]}"#);
}
