//! Text emission of a finished registry.
//!
//! This module handles:
//! - A generic nested-block writer for braced initializer syntax
//! - Output index assignment and record reference resolution
//! - The reflection table translation unit and its loader entry point
//! - The schema header that the table includes
//! - Relative include paths computed without touching the working directory

mod config;
mod invariants;
mod paths;
mod resolve;
mod schema;
mod table;
mod writer;

#[cfg(test)]
mod paths_tests;
#[cfg(test)]
mod schema_tests;

use std::path::{Path, PathBuf};

use flr_core::Registry;

use crate::{Error, PassResult, Result};

pub use config::EmitConfig;
pub use paths::{absolutize, normalize, relative_include};
pub use resolve::{DANGLING_INDEX, OutputIndex};
pub use schema::render_schema;
pub use table::TableSerializer;
pub use writer::{Terminator, Writer, quote};

/// Serialize `registry` as the table translation unit written to `output`.
///
/// Dangling record references are reported, not fatal. The include of the
/// schema header is computed relative to `output`'s directory.
pub fn emit_table(registry: &Registry, output: &Path, config: &EmitConfig) -> PassResult<String> {
    let base = base_dir(config)?;
    let include = relative_include(output, config.schema_path(), &base).ok_or_else(|| {
        Error::UnresolvableInclude {
            schema: absolutize(config.schema_path(), &base),
            output: absolutize(output, &base),
        }
    })?;

    Ok(TableSerializer::new(registry, config).serialize(&include))
}

/// Directory relative paths are anchored at. Reading the process working
/// directory is the fallback; it is never changed.
fn base_dir(config: &EmitConfig) -> Result<PathBuf> {
    match config.base_dir_path() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(Error::WorkingDir),
    }
}
