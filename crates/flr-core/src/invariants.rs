//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{RecordEntry, RecordHandle, Registry};

impl Registry {
    pub(crate) fn ensure_record(&self, handle: RecordHandle) -> &RecordEntry {
        let count = self.record_count();
        self.record_slot(handle).unwrap_or_else(|| {
            panic!(
                "Registry: record handle {handle} out of bounds ({count} records; \
                 handles must come from the registry that issued them)"
            )
        })
    }

    pub(crate) fn ensure_record_mut(&mut self, handle: RecordHandle) -> &mut RecordEntry {
        let count = self.record_count();
        self.record_slot_mut(handle).unwrap_or_else(|| {
            panic!(
                "Registry: record handle {handle} out of bounds ({count} records; \
                 handles must come from the registry that issued them)"
            )
        })
    }
}
