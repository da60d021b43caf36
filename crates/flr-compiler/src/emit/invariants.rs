//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::Terminator;

#[inline]
pub(super) fn ensure_open_block(top: Option<Terminator>) -> Terminator {
    top.unwrap_or_else(|| panic!("Writer: end_block called with no open block"))
}

#[inline]
pub(super) fn ensure_balanced(open: usize) {
    assert!(
        open == 0,
        "Writer: {open} block(s) still open at finish (every begin_block needs an end_block)"
    );
}
