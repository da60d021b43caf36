use std::path::PathBuf;

use flr_compiler::EmitConfig;
use flr_compiler::emit::render_schema;
use flr_compiler::session::write_file;

use super::run_common::fail;

pub struct SchemaArgs {
    pub output: Option<PathBuf>,
    pub loader: Option<String>,
}

pub fn run(args: SchemaArgs) {
    let mut config = EmitConfig::new();
    if let Some(output) = &args.output {
        config = config.schema(output);
    }
    if let Some(loader) = &args.loader {
        config = config.loader(loader);
    }

    let header = render_schema(&config);
    match &args.output {
        Some(path) => {
            if let Err(e) = write_file(path, header.as_bytes()) {
                fail(e);
            }
        }
        None => print!("{}", header),
    }
}
