use std::path::PathBuf;

use super::run_common::{build_session, report};

pub struct CheckArgs {
    pub events: Vec<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let session = build_session(&args.events);

    if !report(&session.check(), args.strict, args.color) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
