//! High-level facade over the fold, merge and emit passes.
//!
//! A session owns one registry and the non-fatal findings gathered while
//! building it. Each translation unit is folded into its own registry and
//! merged in; nothing is written until the whole table has been emitted.
//! A typedef may reach the session before the unit holding its record, so
//! unbound typedefs are carried across units and bound after each merge.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flr_core::{RawEvent, Registry};

use crate::emit::{self, EmitConfig, OutputIndex};
use crate::{DiagnosticKind, Diagnostics, Error, PassResult, PendingAlias, Reducer, Result};

#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
    diagnostics: Diagnostics,
    /// Typedefs whose record no unit has registered yet.
    pending: Vec<PendingAlias>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session holding a single translation unit.
    pub fn from_events(events: &[RawEvent]) -> Result<Self> {
        let mut session = Self::new();
        session.add_unit(events)?;
        Ok(session)
    }

    /// Fold one translation unit into its own registry and merge it in.
    pub fn add_unit(&mut self, events: &[RawEvent]) -> Result<()> {
        let unit = Reducer::fold(events)?;
        self.merge(unit.registry, unit.diagnostics)?;
        self.hold(unit.pending);
        Ok(())
    }

    /// Merge a registry built elsewhere. Keys seen in both are de-duplicated.
    pub fn merge(&mut self, registry: Registry, diagnostics: Diagnostics) -> Result<()> {
        self.registry.merge(registry)?;
        self.diagnostics.extend(diagnostics);
        self.bind_pending();
        Ok(())
    }

    /// Carry typedefs over until the unit holding their record is merged.
    pub fn hold(&mut self, pending: impl IntoIterator<Item = PendingAlias>) {
        for alias in pending {
            if !self.pending.contains(&alias) {
                self.pending.push(alias);
            }
        }
        self.bind_pending();
    }

    /// Typedefs still waiting for their record.
    pub fn pending(&self) -> &[PendingAlias] {
        &self.pending
    }

    fn bind_pending(&mut self) {
        let registry = &mut self.registry;
        self.pending
            .retain(|pending| match registry.find_by_key(&pending.target) {
                Some(handle) => {
                    registry.append_alias(handle, pending.alias.as_str());
                    false
                }
                None => true,
            });
    }

    fn unbound_aliases(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for pending in &self.pending {
            diagnostics
                .report(DiagnosticKind::UnboundAlias)
                .message(pending.alias.as_str())
                .subject(pending.target.clone())
                .emit();
        }
        diagnostics
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Findings gathered while folding.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// All findings, including unresolved record references and typedefs
    /// that never found their record.
    pub fn check(&self) -> Diagnostics {
        let mut all = self.diagnostics.clone();
        all.extend(self.unbound_aliases());
        all.extend(OutputIndex::check(&self.registry));
        all
    }

    /// Emit the table for `output` into memory.
    pub fn emit(&self, output: &Path, config: &EmitConfig) -> PassResult<String> {
        let (text, found) = emit::emit_table(&self.registry, output, config)?;
        let mut diagnostics = self.diagnostics.clone();
        diagnostics.extend(self.unbound_aliases());
        diagnostics.extend(found);
        Ok((text, diagnostics))
    }

    /// Emit the table and write it to `output`.
    ///
    /// A fatal error leaves `output` untouched.
    pub fn write(&self, output: &Path, config: &EmitConfig) -> Result<Diagnostics> {
        let (text, diagnostics) = self.emit(output, config)?;
        write_file(output, text.as_bytes())?;
        Ok(diagnostics)
    }
}

/// Write `contents` to `path` through one scoped buffered handle.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
