//! Path algebra for the schema include.
//!
//! Everything here is lexical. Nothing reads the filesystem and nothing
//! changes the working directory, so it is safe to call from any thread.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into the preceding component.
///
/// A `..` that would climb above the root is dropped; one that leads a
/// relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Anchor a relative path at `base`. Absolute paths are returned as is.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Include path of `schema` as seen from the directory containing `output`.
///
/// Both paths are anchored at `base` when relative. The result always uses
/// `/` separators. Returns `None` when no relative path exists (different
/// drive prefixes, or a path that is not valid UTF-8).
pub fn relative_include(output: &Path, schema: &Path, base: &Path) -> Option<String> {
    let output = normalize(&absolutize(output, base));
    let schema = normalize(&absolutize(schema, base));
    let dir = output.parent()?;

    let rel = pathdiff::diff_paths(&schema, dir)?;
    let parts = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            Component::ParentDir => Some(".."),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
