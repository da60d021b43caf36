//! flr compiler: folds declaration events into a registry and serializes it.
//!
//! This crate provides the pipeline from front-end events to an embeddable
//! reflection table:
//! - `reduce` - fold record/typedef/field events into a `Registry`
//! - `emit` - nested-block text writer, table serializer, schema header
//! - `diagnostics` - non-fatal findings (dangling references, alias notes)
//! - `session` - high-level facade: fold units, merge, emit, write

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

use flr_core::{IdentityKey, RegistryError};

pub mod diagnostics;
pub mod emit;
pub mod reduce;
pub mod session;

#[cfg(test)]
pub mod test_utils;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{EmitConfig, Terminator, Writer};
pub use reduce::{Context, PendingAlias, Reducer, Unit};
pub use session::Session;

/// Result type for passes that produce both output and diagnostics.
///
/// Non-fatal findings travel alongside the output. Fatal errors use the
/// outer `Result` and abort the run before anything is written.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Fatal errors. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A field arrived for a record that was never registered.
    #[error("field `{field}` belongs to unregistered record {owner}")]
    OrphanField { field: String, owner: IdentityKey },

    /// A typedef target key matched more than one record.
    #[error("alias `{alias}` matches {matches} records keyed {target}")]
    AmbiguousAliasTarget {
        alias: String,
        target: IdentityKey,
        matches: usize,
    },

    #[error(
        "cannot include `{}` relative to `{}`",
        schema.display(),
        output.display()
    )]
    UnresolvableInclude { schema: PathBuf, output: PathBuf },

    #[error("failed to read the working directory")]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to write `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
