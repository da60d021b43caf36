#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for flr reflection tables.
//!
//! Two layers:
//! - **Event layer** (`events`): 1:1 mapping of the declaration stream a
//!   language front end produces (record, typedef, field)
//! - **Model layer** (`record`, `registry`): identity-keyed records and
//!   enums, folded from events and ready for serialization

mod colors;
mod events;
mod identity;
mod invariants;
mod record;
mod registry;

#[cfg(test)]
mod registry_tests;

pub use colors::Colors;
pub use events::{RawEvent, RawField, RawRecord, RawTag, RawType, RawTypedef, parse_events};
pub use identity::{DeclId, IdentityKey};
pub use record::{EnumEntry, FieldEntry, Primitive, RecordEntry, RecordKind, TypeSpecifier};
pub use registry::{RecordHandle, Registry, RegistryError, Snapshot};
