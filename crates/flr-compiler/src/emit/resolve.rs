//! Output index assignment and record reference resolution.

use std::collections::HashMap;

use flr_core::{FieldEntry, IdentityKey, RecordEntry, Registry};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Emitted for primitives and for references whose target was never
/// registered.
pub const DANGLING_INDEX: i64 = -1;

/// 0-based position of every record in the emitted `types` array.
///
/// Indices are only meaningful within one emitted table.
#[derive(Debug)]
pub struct OutputIndex<'r> {
    indices: HashMap<&'r IdentityKey, i64>,
}

impl<'r> OutputIndex<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        let indices = registry
            .records()
            .enumerate()
            .map(|(i, record)| (record.id(), i as i64))
            .collect();
        Self { indices }
    }

    pub fn get(&self, key: &IdentityKey) -> Option<i64> {
        self.indices.get(key).copied()
    }

    /// Index of the record `field` refers to.
    ///
    /// Primitives yield [`DANGLING_INDEX`] silently. A reference to an
    /// unregistered record yields it too, and is reported.
    pub fn resolve(
        &self,
        owner: &RecordEntry,
        field: &FieldEntry,
        diagnostics: &mut Diagnostics,
    ) -> i64 {
        let Some((target, kind)) = field.ty.record_ref() else {
            return DANGLING_INDEX;
        };
        if let Some(index) = self.get(target) {
            return index;
        }

        diagnostics
            .report(DiagnosticKind::DanglingRecordRef)
            .message(format!("{}.{}", display_name(owner), field.name))
            .subject(owner.id().clone())
            .hint(format!("no {} was registered as {target}", kind.as_str()))
            .emit();
        DANGLING_INDEX
    }

    /// Resolve every record reference in `registry`, collecting findings.
    pub fn check(registry: &'r Registry) -> Diagnostics {
        let index = Self::new(registry);
        let mut diagnostics = Diagnostics::new();
        for record in registry.records() {
            for field in record.fields() {
                index.resolve(record, field, &mut diagnostics);
            }
        }
        diagnostics
    }
}

/// Name used in messages: the declared name, else the first alias.
pub(crate) fn display_name(record: &RecordEntry) -> &str {
    if !record.name().is_empty() {
        return record.name();
    }
    record
        .aliases()
        .first()
        .map(String::as_str)
        .unwrap_or("<unnamed>")
}
