use std::path::{Path, PathBuf};

use super::paths::{absolutize, normalize, relative_include};

#[test]
fn normalize_folds_dots() {
    assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
}

#[test]
fn absolutize_keeps_absolute_paths() {
    let base = Path::new("/work");
    assert_eq!(absolutize(Path::new("/etc/flr.h"), base), PathBuf::from("/etc/flr.h"));
    assert_eq!(absolutize(Path::new("out/info.c"), base), PathBuf::from("/work/out/info.c"));
}

#[test]
fn include_from_subdirectory() {
    let include = relative_include(Path::new("out/info.c"), Path::new("flr.h"), Path::new("/work"));
    assert_eq!(include.as_deref(), Some("../flr.h"));
}

#[test]
fn include_from_same_directory() {
    let include = relative_include(Path::new("info.c"), Path::new("flr.h"), Path::new("/work"));
    assert_eq!(include.as_deref(), Some("flr.h"));
}

#[test]
fn include_into_sibling_tree() {
    let include = relative_include(
        Path::new("/work/build/gen/info.c"),
        Path::new("/work/include/flr/flr.h"),
        Path::new("/elsewhere"),
    );
    assert_eq!(include.as_deref(), Some("../../include/flr/flr.h"));
}

#[test]
fn include_ignores_dot_segments() {
    let include = relative_include(
        Path::new("./out/../out/info.c"),
        Path::new("./include/./flr.h"),
        Path::new("/work"),
    );
    assert_eq!(include.as_deref(), Some("../include/flr.h"));
}

#[test]
fn include_does_not_touch_working_directory() {
    let before = std::env::current_dir().unwrap();
    relative_include(Path::new("a/b/c.c"), Path::new("flr.h"), Path::new("/work"));
    assert_eq!(std::env::current_dir().unwrap(), before);
}
