//! Record, field and enum entries stored in the registry.

use serde::{Deserialize, Serialize};

use crate::IdentityKey;

/// Struct or union. Fixed when the record is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Struct,
    Union,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

/// Width and signedness of a non-record field.
///
/// Both halves are optional: front ends that do not classify scalars leave
/// the placeholder empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primitive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
}

impl Primitive {
    /// Placeholder with nothing known.
    pub const UNKNOWN: Self = Self {
        bits: None,
        signed: None,
    };

    pub fn new(bits: u32, signed: bool) -> Self {
        Self {
            bits: Some(bits),
            signed: Some(signed),
        }
    }

    pub fn is_known(&self) -> bool {
        self.bits.is_some() || self.signed.is_some()
    }
}

/// Classification of a field's type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeSpecifier {
    Primitive(Primitive),
    /// Weak reference to another record. The target may not be registered
    /// yet, and may never be.
    Record {
        target: IdentityKey,
        kind: RecordKind,
    },
}

impl TypeSpecifier {
    pub fn record_ref(&self) -> Option<(&IdentityKey, RecordKind)> {
        match self {
            Self::Record { target, kind } => Some((target, *kind)),
            Self::Primitive(_) => None,
        }
    }
}

/// One member of a record, with its offset in bits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub offset: u64,
    #[serde(rename = "type")]
    pub ty: TypeSpecifier,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, offset: u64, ty: TypeSpecifier) -> Self {
        Self {
            name: name.into(),
            offset,
            ty,
        }
    }
}

/// One declared struct or union.
///
/// Identity, name and kind never change after creation. Aliases and fields
/// only grow, and only through the [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    id: IdentityKey,
    name: String,
    kind: RecordKind,
    aliases: Vec<String>,
    fields: Vec<FieldEntry>,
}

impl RecordEntry {
    pub(crate) fn new(id: IdentityKey, name: String, kind: RecordKind) -> Self {
        Self {
            id,
            name,
            kind,
            aliases: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> &IdentityKey {
        &self.id
    }

    /// Declared name. Empty for unnamed records that are only reachable
    /// through typedef aliases.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Fields in declaration (layout) order.
    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    /// Returns `false` if the alias was already bound.
    pub(crate) fn push_alias(&mut self, alias: String) -> bool {
        if self.aliases.contains(&alias) {
            return false;
        }
        self.aliases.push(alias);
        true
    }

    pub(crate) fn push_field(&mut self, field: FieldEntry) {
        self.fields.push(field);
    }
}

/// Enum placeholder: identity and name, no members yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    id: IdentityKey,
    name: String,
}

impl EnumEntry {
    pub(crate) fn new(id: IdentityKey, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &IdentityKey {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
