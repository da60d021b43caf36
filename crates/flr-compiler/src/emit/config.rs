//! Configuration for table emission.

use std::path::{Path, PathBuf};

/// Configuration for table and schema emission.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Schema header the table includes
    pub(crate) schema: PathBuf,
    /// Anchor for relative paths; the working directory when unset
    pub(crate) base_dir: Option<PathBuf>,
    /// Name of the static data object
    pub(crate) symbol: String,
    /// Name of the loader entry point
    pub(crate) loader: String,
    /// One level of indentation
    pub(crate) indent: String,
    /// Headers emitted as `#include <..>` after the schema include
    pub(crate) system_includes: Vec<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("flr.h"),
            base_dir: None,
            symbol: "info".to_string(),
            loader: "flr_load".to_string(),
            indent: "\t".to_string(),
            system_includes: ["stdlib.h", "stdint.h", "string.h"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl EmitConfig {
    /// Create a new EmitConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema header path.
    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema = path.into();
        self
    }

    /// Set the directory relative paths are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set the data object symbol.
    pub fn symbol(mut self, name: impl Into<String>) -> Self {
        self.symbol = name.into();
        self
    }

    /// Set the loader function name.
    pub fn loader(mut self, name: impl Into<String>) -> Self {
        self.loader = name.into();
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }

    /// Replace the system includes.
    pub fn system_includes<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_includes = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema
    }

    pub fn base_dir_path(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol
    }

    pub fn loader_name(&self) -> &str {
        &self.loader
    }
}
