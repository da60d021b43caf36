//! Identity-keyed store of records and enums.
//!
//! Records keep the order in which they were created. That order is the
//! output order of the serialized table, and a record's position in it is
//! its [`RecordHandle`].

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::{EnumEntry, FieldEntry, IdentityKey, RecordEntry, RecordKind};

/// Position of a record in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordHandle(pub(crate) usize);

impl RecordHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contract violations raised by registry mutation. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A record with this key already exists.
    #[error("record {0} is already registered")]
    DuplicateRecord(IdentityKey),

    /// An enum with this key already exists.
    #[error("enum {0} is already registered")]
    DuplicateEnum(IdentityKey),

    /// Two translation units registered the same key with different shapes.
    #[error("record {0} has conflicting definitions across translation units")]
    ConflictingRecord(IdentityKey),
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: IndexMap<IdentityKey, RecordEntry>,
    enums: IndexMap<IdentityKey, EnumEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new record. Re-declaring a key is an error.
    pub fn create(
        &mut self,
        id: IdentityKey,
        name: impl Into<String>,
        kind: RecordKind,
    ) -> Result<RecordHandle, RegistryError> {
        match self.records.entry(id) {
            Entry::Occupied(e) => Err(RegistryError::DuplicateRecord(e.key().clone())),
            Entry::Vacant(e) => {
                let handle = RecordHandle(e.index());
                let entry = RecordEntry::new(e.key().clone(), name.into(), kind);
                e.insert(entry);
                Ok(handle)
            }
        }
    }

    /// Register an enum placeholder.
    pub fn create_enum(
        &mut self,
        id: IdentityKey,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        match self.enums.entry(id) {
            Entry::Occupied(e) => Err(RegistryError::DuplicateEnum(e.key().clone())),
            Entry::Vacant(e) => {
                let entry = EnumEntry::new(e.key().clone(), name.into());
                e.insert(entry);
                Ok(())
            }
        }
    }

    pub fn find_by_key(&self, key: &IdentityKey) -> Option<RecordHandle> {
        self.records.get_index_of(key).map(RecordHandle)
    }

    /// All records registered under `key`.
    ///
    /// Keys are unique, so this yields at most one handle; callers that must
    /// reject ambiguity count the results instead of assuming.
    pub fn handles_for(&self, key: &IdentityKey) -> Vec<RecordHandle> {
        self.find_by_key(key).into_iter().collect()
    }

    /// Bind a typedef name. Returns `false` if it was already bound.
    pub fn append_alias(&mut self, handle: RecordHandle, alias: impl Into<String>) -> bool {
        self.ensure_record_mut(handle).push_alias(alias.into())
    }

    /// Append a field. Record references are not validated here; the target
    /// may be registered later or never.
    pub fn append_field(&mut self, handle: RecordHandle, field: FieldEntry) {
        self.ensure_record_mut(handle).push_field(field);
    }

    pub fn get(&self, handle: RecordHandle) -> &RecordEntry {
        self.ensure_record(handle)
    }

    pub fn get_by_key(&self, key: &IdentityKey) -> Option<&RecordEntry> {
        self.records.get(key)
    }

    /// Records in creation order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &RecordEntry> {
        self.records.values()
    }

    /// Enums in creation order.
    pub fn enums(&self) -> impl ExactSizeIterator<Item = &EnumEntry> {
        self.enums.values()
    }

    /// Number of records. Enum placeholders are counted by [`Self::enum_count`].
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when neither records nor enum placeholders were registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.enums.is_empty()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Fold a registry built from another translation unit into this one.
    ///
    /// Entries are de-duplicated by key. A record seen in both units keeps
    /// this registry's position; aliases are unioned and fields must match
    /// exactly. New records are appended in the other unit's order.
    pub fn merge(&mut self, other: Registry) -> Result<(), RegistryError> {
        for (key, incoming) in other.records {
            match self.records.entry(key) {
                Entry::Vacant(e) => {
                    e.insert(incoming);
                }
                Entry::Occupied(mut e) => {
                    let existing = e.get();
                    if existing.kind() != incoming.kind()
                        || existing.name() != incoming.name()
                        || existing.fields() != incoming.fields()
                    {
                        return Err(RegistryError::ConflictingRecord(e.key().clone()));
                    }
                    let existing = e.get_mut();
                    for alias in incoming.aliases() {
                        existing.push_alias(alias.clone());
                    }
                }
            }
        }

        for (key, incoming) in other.enums {
            self.enums.entry(key).or_insert(incoming);
        }

        Ok(())
    }

    /// Borrowed view for structured (JSON) dumps.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            records: self.records.values().collect(),
            enums: self.enums.values().collect(),
        }
    }

    pub(crate) fn record_slot(&self, handle: RecordHandle) -> Option<&RecordEntry> {
        self.records.get_index(handle.0).map(|(_, v)| v)
    }

    pub(crate) fn record_slot_mut(&mut self, handle: RecordHandle) -> Option<&mut RecordEntry> {
        self.records.get_index_mut(handle.0).map(|(_, v)| v)
    }
}

/// Serializable view of a registry: records and enums as ordered lists.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub records: Vec<&'a RecordEntry>,
    pub enums: Vec<&'a EnumEntry>,
}
