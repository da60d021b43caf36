//! Folding declaration events into a registry.
//!
//! Each fold reads one raw event plus the ambient context (the file the
//! event was observed in) and mutates the registry. Folds for unrelated
//! records commute; folds for the same record do not, since field and alias
//! order is preserved.

use std::collections::{BTreeMap, HashSet};

use flr_core::{
    FieldEntry, IdentityKey, Primitive, RawEvent, RawField, RawRecord, RawTag, RawType,
    RawTypedef, Registry, TypeSpecifier,
};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

/// Ambient state for a single fold.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    /// File the current event was observed in.
    pub file: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(file: &'a str) -> Self {
        Self { file }
    }

    /// Key for a declaration in the current file.
    fn key(&self, id: flr_core::DeclId) -> IdentityKey {
        IdentityKey::new(id, self.file)
    }

    /// Key for a referenced declaration, which may live in another file.
    fn target_key(&self, id: flr_core::DeclId, file: Option<&str>) -> IdentityKey {
        IdentityKey::new(id, file.unwrap_or(self.file))
    }
}

/// A typedef name still waiting for the record it aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAlias {
    pub target: IdentityKey,
    pub alias: String,
}

/// Everything one translation unit produced.
#[derive(Debug, Default)]
pub struct Unit {
    pub registry: Registry,
    pub diagnostics: Diagnostics,
    /// Typedefs whose record did not appear in this unit, ordered by target.
    pub pending: Vec<PendingAlias>,
}

/// Builds one registry from one stream of events.
#[derive(Debug, Default)]
pub struct Reducer {
    registry: Registry,
    diagnostics: Diagnostics,
    /// Anonymous member records. Their fields are dropped with them.
    excluded: HashSet<IdentityKey>,
    /// Typedefs seen before the record they name.
    pending_aliases: BTreeMap<IdentityKey, Vec<String>>,
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole stream, stopping at the first fatal error.
    pub fn fold<'e>(events: impl IntoIterator<Item = &'e RawEvent>) -> Result<Unit> {
        let mut reducer = Self::new();
        for event in events {
            reducer.apply(event)?;
        }
        Ok(reducer.finish())
    }

    /// Dispatch one event, using the event's own file as context.
    pub fn apply(&mut self, event: &RawEvent) -> Result<()> {
        let ctx = Context::new(event.file());
        match event {
            RawEvent::Record(raw) => self.on_record(raw, &ctx),
            RawEvent::Typedef(raw) => self.on_typedef(raw, &ctx),
            RawEvent::Field(raw) => self.on_field(raw, &ctx),
        }
    }

    /// Register a struct or union.
    ///
    /// Anonymous member records carry no stable name and are left out of the
    /// table. Enums become placeholders; other tags are skipped.
    pub fn on_record(&mut self, raw: &RawRecord, ctx: &Context<'_>) -> Result<()> {
        let key = ctx.key(raw.id);

        let Some(kind) = raw.tag.record_kind() else {
            if raw.tag == RawTag::Enum {
                self.registry.create_enum(key, raw.name.as_str())?;
            }
            return Ok(());
        };

        if raw.anonymous {
            self.excluded.insert(key);
            return Ok(());
        }

        let pending = self.pending_aliases.remove(&key);
        let handle = self.registry.create(key, raw.name.as_str(), kind)?;
        for alias in pending.into_iter().flatten() {
            self.registry.append_alias(handle, alias);
        }
        Ok(())
    }

    /// Bind a typedef name to the record it aliases.
    ///
    /// Typedefs of anything but a struct/union are skipped. A typedef seen
    /// before its record is held until the record arrives.
    pub fn on_typedef(&mut self, raw: &RawTypedef, ctx: &Context<'_>) -> Result<()> {
        let RawType::Record { id, file, tag } = &raw.underlying else {
            return Ok(());
        };
        if tag.record_kind().is_none() {
            return Ok(());
        }

        let target = ctx.target_key(*id, file.as_deref());
        let handles = self.registry.handles_for(&target);
        if handles.len() > 1 {
            return Err(Error::AmbiguousAliasTarget {
                alias: raw.name.clone(),
                target,
                matches: handles.len(),
            });
        }

        let Some(&handle) = handles.first() else {
            let pending = self.pending_aliases.entry(target.clone()).or_default();
            if !pending.contains(&raw.name) {
                pending.push(raw.name.clone());
                return Ok(());
            }
            self.report_redundant(&raw.name, target);
            return Ok(());
        };

        if !self.registry.append_alias(handle, raw.name.as_str()) {
            self.report_redundant(&raw.name, target);
        }
        Ok(())
    }

    fn report_redundant(&mut self, alias: &str, target: IdentityKey) {
        self.diagnostics
            .report(DiagnosticKind::RedundantAlias)
            .message(alias)
            .subject(target)
            .emit();
    }

    /// Append a field to its owning record.
    ///
    /// The owner must already be registered in the current file; a field
    /// without one is a front-end desynchronization and is fatal.
    pub fn on_field(&mut self, raw: &RawField, ctx: &Context<'_>) -> Result<()> {
        let owner = ctx.key(raw.owner);
        if self.excluded.contains(&owner) {
            return Ok(());
        }

        let ty = match &raw.ty {
            RawType::Record { id, file, tag } => match tag.record_kind() {
                Some(kind) => TypeSpecifier::Record {
                    target: ctx.target_key(*id, file.as_deref()),
                    kind,
                },
                None => TypeSpecifier::Primitive(Primitive::UNKNOWN),
            },
            RawType::Primitive { bits, signed } => TypeSpecifier::Primitive(Primitive {
                bits: *bits,
                signed: *signed,
            }),
            RawType::Other => TypeSpecifier::Primitive(Primitive::UNKNOWN),
        };
        let field = FieldEntry::new(raw.name.as_str(), raw.offset, ty);

        let Some(handle) = self.registry.find_by_key(&owner) else {
            return Err(Error::OrphanField {
                field: raw.name.clone(),
                owner,
            });
        };
        self.registry.append_field(handle, field);
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Freeze the registry, handing back typedefs whose record never arrived.
    pub fn finish(self) -> Unit {
        let pending = self
            .pending_aliases
            .into_iter()
            .flat_map(|(target, aliases)| {
                aliases.into_iter().map(move |alias| PendingAlias {
                    target: target.clone(),
                    alias,
                })
            })
            .collect();
        Unit {
            registry: self.registry,
            diagnostics: self.diagnostics,
            pending,
        }
    }
}
