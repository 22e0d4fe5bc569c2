use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E0001, "unrecognized character `@`")
        .with_primary(Span::new(4, 5), "not part of any token")
        .with_note("the character was skipped");

    assert!(diag.is_error());
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.notes, vec!["the character was skipped".to_string()]);
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E0002, "unterminated literal")
        .with_secondary(Span::point(9), "input ends here")
        .with_primary(Span::new(0, 1), "literal starts here");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
    assert_eq!(
        diag.labels.iter().map(|l| l.style).collect::<Vec<_>>(),
        vec![LabelStyle::Secondary, LabelStyle::Primary]
    );
}

#[test]
fn notes_are_not_errors() {
    let diag = Diagnostic::note(ErrorCode::E9002, "aborting after 3 errors");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
    assert_eq!(diag.to_string(), "note[E9002]: aborting after 3 errors");
}

#[test]
fn display_puts_span_before_message() {
    let diag = Diagnostic::error(ErrorCode::E0003, "malformed escape sequence `\\q`")
        .with_primary(Span::new(2, 4), "invalid escape");
    assert_eq!(
        diag.to_string(),
        "error[E0003] 2..4: malformed escape sequence `\\q`"
    );
}
