mod cli;
mod commands;

use cli::{CheckParams, DumpParams, GenParams, SchemaParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("gen", m)) => {
            let params = GenParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("schema", m)) => {
            let params = SchemaParams::from_matches(m);
            commands::schema::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
