use std::path::PathBuf;

use super::event_loader::{LoadError, load_events};

#[test]
fn loads_files_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    std::fs::write(
        &a,
        r#"{"event":"record","id":1,"file":"a.h","name":"A","tag":"struct"}"#,
    )
    .unwrap();
    std::fs::write(
        &b,
        r#"[{"event":"record","id":2,"file":"b.h","name":"B","tag":"union"},
           {"event":"record","id":3,"file":"b.h","name":"C","tag":"enum"}]"#,
    )
    .unwrap();

    let files = load_events(&[b.clone(), a.clone()]).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, b);
    assert_eq!(files[0].events.len(), 2);
    assert_eq!(files[1].path, a);
    assert_eq!(files[1].events[0].file(), "a.h");
}

#[test]
fn missing_file_names_the_path() {
    let err = load_events(&[PathBuf::from("/nonexistent/events.json")]).unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read '/nonexistent/events.json': ")
    );
}

#[test]
fn malformed_events_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"event":"record","id":1}"#).unwrap();

    let err = load_events(&[path]).unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("missing field"));
}
