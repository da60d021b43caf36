use std::path::PathBuf;

use flr_compiler::EmitConfig;
use flr_compiler::session::write_file;

use super::run_common::{build_session, fail, report};

pub struct GenArgs {
    pub events: Vec<PathBuf>,
    pub output: PathBuf,
    pub schema: Option<PathBuf>,
    pub symbol: Option<String>,
    pub loader: Option<String>,
    pub strict: bool,
    pub color: bool,
}

impl GenArgs {
    fn config(&self) -> EmitConfig {
        let mut config = EmitConfig::new();
        if let Some(schema) = &self.schema {
            config = config.schema(schema);
        }
        if let Some(symbol) = &self.symbol {
            config = config.symbol(symbol);
        }
        if let Some(loader) = &self.loader {
            config = config.loader(loader);
        }
        config
    }
}

pub fn run(args: GenArgs) {
    let session = build_session(&args.events);
    let config = args.config();

    // Emit to memory first so --strict can refuse before anything is written.
    let (text, diagnostics) = session
        .emit(&args.output, &config)
        .unwrap_or_else(|e| fail(e));
    if !report(&diagnostics, args.strict, args.color) {
        std::process::exit(1);
    }

    if let Err(e) = write_file(&args.output, text.as_bytes()) {
        fail(e);
    }
}
