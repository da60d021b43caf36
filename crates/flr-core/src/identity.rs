//! Run-wide identity of declared records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declaration id assigned by the front end.
///
/// Only unique within a single parse; pair it with the origin file
/// (see [`IdentityKey`]) before using it as a lookup key.
pub type DeclId = i64;

/// Compound `(declaration id, origin file)` key.
///
/// Names a record independently of traversal order. Two independently parsed
/// files may hand out the same numeric id, so the file is part of the key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityKey {
    id: DeclId,
    file: String,
}

impl IdentityKey {
    pub fn new(id: DeclId, file: impl Into<String>) -> Self {
        Self {
            id,
            file: file.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> DeclId {
        self.id
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.file, self.id)
    }
}
