//! Shared steps of the commands that fold event files.

use std::path::PathBuf;

use flr_compiler::{Diagnostics, Session};

use super::event_loader::load_events;

/// Print `error: <message>` and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

/// Fold each events file as its own unit and merge them, in order.
pub fn build_session(paths: &[PathBuf]) -> Session {
    let files = load_events(paths).unwrap_or_else(|e| fail(e));

    let mut session = Session::new();
    for file in &files {
        if let Err(e) = session.add_unit(&file.events) {
            fail(format_args!("{}: {}", file.path.display(), e));
        }
    }
    session
}

/// Print findings to stderr. Returns `false` when the run should fail.
pub fn report(diagnostics: &Diagnostics, strict: bool, color: bool) -> bool {
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(color));
    }
    !(strict && diagnostics.has_warnings())
}
