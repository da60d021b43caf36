//! Declaration events emitted by a language front end.
//!
//! The front end parses source files and reports what it sees, one event at
//! a time, in an order this crate does not control. Events arrive as JSON,
//! either as one array or as a stream of objects (JSON lines).

use serde::{Deserialize, Serialize};

use crate::{DeclId, RecordKind};

/// Tag keyword of a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawTag {
    Struct,
    Union,
    Class,
    Interface,
    Enum,
}

impl RawTag {
    /// The record kind, for the tags that produce table records.
    pub fn record_kind(self) -> Option<RecordKind> {
        match self {
            Self::Struct => Some(RecordKind::Struct),
            Self::Union => Some(RecordKind::Union),
            Self::Class | Self::Interface | Self::Enum => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RawEvent {
    Record(RawRecord),
    Typedef(RawTypedef),
    Field(RawField),
}

impl RawEvent {
    /// File the event was observed in.
    pub fn file(&self) -> &str {
        match self {
            Self::Record(r) => &r.file,
            Self::Typedef(t) => &t.file,
            Self::Field(f) => &f.file,
        }
    }
}

/// A record (or enum) declaration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub id: DeclId,
    pub file: String,
    /// Empty for unnamed records.
    #[serde(default)]
    pub name: String,
    pub tag: RawTag,
    /// Anonymous member struct/union (`struct { union { .. }; }`).
    #[serde(default)]
    pub anonymous: bool,
}

/// A typedef declaration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawTypedef {
    pub id: DeclId,
    pub file: String,
    pub name: String,
    pub underlying: RawType,
}

/// A field declaration with its layout offset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawField {
    pub id: DeclId,
    pub file: String,
    /// Declaration id of the owning record, in the same file.
    pub owner: DeclId,
    #[serde(default)]
    pub name: String,
    /// Offset in bits from the start of the owning record.
    pub offset: u64,
    #[serde(rename = "type")]
    pub ty: RawType,
}

/// Type of a field or typedef target, as classified by the front end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawType {
    Primitive {
        #[serde(default)]
        bits: Option<u32>,
        #[serde(default)]
        signed: Option<bool>,
    },
    Record {
        id: DeclId,
        /// Origin file of the referenced record; the referencing event's
        /// file when absent.
        #[serde(default)]
        file: Option<String>,
        tag: RawTag,
    },
    /// Pointers, arrays, functions and anything else not classified yet.
    #[serde(other)]
    Other,
}

/// Parse an event stream: a JSON array, or whitespace separated objects.
pub fn parse_events(text: &str) -> Result<Vec<RawEvent>, serde_json::Error> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text);
    }

    serde_json::Deserializer::from_str(text)
        .into_iter::<RawEvent>()
        .collect()
}
