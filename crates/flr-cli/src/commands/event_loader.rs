use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flr_core::{RawEvent, parse_events};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("stdin can only be read once")]
    StdinTwice,

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid events in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Events of one translation unit.
#[derive(Debug)]
pub struct EventFile {
    pub path: PathBuf,
    pub events: Vec<RawEvent>,
}

/// Load every events file, in argument order. `-` reads stdin.
pub fn load_events(paths: &[PathBuf]) -> Result<Vec<EventFile>, LoadError> {
    let mut stdin_used = false;
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let text = if path.as_os_str() == "-" {
            if stdin_used {
                return Err(LoadError::StdinTwice);
            }
            stdin_used = true;
            load_stdin()?
        } else {
            load_file(path)?
        };

        let events = parse_events(&text).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;
        files.push(EventFile {
            path: path.clone(),
            events,
        });
    }

    Ok(files)
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
