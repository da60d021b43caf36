use flr_core::IdentityKey;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
    insta::assert_snapshot!(format!("{}", Severity::Note), @"note");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::DanglingRecordRef).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_warnings());
    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "field refers to an unregistered record");
    assert_eq!(msg.hints().len(), 1);
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::RedundantAlias)
        .message("PointAlias")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "alias `PointAlias` is already bound to this record");
    assert!(msg.hints().is_empty());
}

#[test]
fn notes_are_not_warnings() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::RedundantAlias).emit();

    assert!(!diagnostics.is_empty());
    assert!(!diagnostics.has_warnings());
    assert_eq!(diagnostics.warning_count(), 0);
    assert_eq!(diagnostics.count_of(DiagnosticKind::RedundantAlias), 1);
}

#[test]
fn unbound_alias_is_a_note_with_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnboundAlias)
        .message("P")
        .subject(IdentityKey::new(1, "a.h"))
        .emit();

    assert!(!diagnostics.has_warnings());
    let msg = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(
        msg.to_string(),
        @"note[unbound-alias]: typedef `P` names an unregistered record (in a.h#1) (hint: the alias is left out of the table)"
    );
}

#[test]
fn extend_keeps_order() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::RedundantAlias).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::DanglingRecordRef).emit();

    first.extend(second);

    let kinds: Vec<_> = first.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::RedundantAlias, DiagnosticKind::DanglingRecordRef]
    );
}

#[test]
fn display_is_single_line() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::RedundantAlias)
        .message("P")
        .subject(IdentityKey::new(1, "a.h"))
        .hint("drop the second typedef")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(
        msg.to_string(),
        @"note[redundant-alias]: alias `P` is already bound to this record (in a.h#1) (hint: drop the second typedef)"
    );
}

#[test]
fn render_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingRecordRef)
        .message("Line.end")
        .subject(IdentityKey::new(5, "b.h"))
        .emit();
    diagnostics
        .report(DiagnosticKind::RedundantAlias)
        .message("PointAlias")
        .subject(IdentityKey::new(1, "a.h"))
        .emit();

    insta::assert_snapshot!(diagnostics.render(), @r"
    warning[dangling-record-ref]: field `Line.end` refers to an unregistered record
      --> b.h#5
      = hint: the target was only forward-declared, or its file was not part of this run; the field is emitted with record index -1

    note[redundant-alias]: alias `PointAlias` is already bound to this record
      --> a.h#1
    ");
}

#[test]
fn render_colored_wraps_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::RedundantAlias).emit();

    let out = diagnostics.render_colored(true);

    assert!(out.starts_with("\x1b[34mnote[redundant-alias]\x1b[0m: "));
}

#[test]
fn render_empty_is_empty() {
    assert_eq!(Diagnostics::new().render(), "");
}
