use super::*;
use pretty_assertions::assert_eq;

fn error_at(code: ErrorCode, start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(code, message).with_primary(Span::new(start, start + 1), "here")
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(ErrorCode::E0001, 20, "second"), 3, 1));
    assert!(queue.add(error_at(ErrorCode::E0001, 0, "first"), 1, 1));
    assert!(queue.add(error_at(ErrorCode::E0003, 25, "third"), 3, 6));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn test_flush_clears_queue() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(ErrorCode::E0001, 0, "x"), 1, 1);
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.flush().len(), 1);
    assert_eq!(queue.error_count(), 0);
    assert!(!queue.has_errors());
    assert!(queue.flush().is_empty());
}

#[test]
fn test_deduplicate_same_code_and_span() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(ErrorCode::E0001, 4, "a"), 1, 5));
    assert!(!queue.add(error_at(ErrorCode::E0001, 4, "a again"), 1, 5));
    // Same span, different code is kept.
    assert!(queue.add(error_at(ErrorCode::E0003, 4, "b"), 1, 5));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_no_dedup_when_unlimited() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(ErrorCode::E0001, 4, "a"), 1, 5));
    assert!(queue.add(error_at(ErrorCode::E0001, 4, "a"), 1, 5));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(error_at(ErrorCode::E0001, 0, "1"), 1, 1));
    assert!(!queue.limit_reached());
    assert!(queue.add(error_at(ErrorCode::E0001, 1, "2"), 1, 2));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(ErrorCode::E0001, 2, "3"), 1, 3));
    assert!(!queue.add(error_at(ErrorCode::E0001, 3, "4"), 1, 4));
    assert_eq!(queue.suppressed_count(), 2);

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 3);
    let last = &flushed[2];
    assert_eq!(last.code, ErrorCode::E9002);
    assert!(!last.is_error());
    assert_eq!(last.primary_span(), Some(Span::new(1, 2)));
    assert_eq!(last.notes, vec!["2 further errors were not reported".to_string()]);
}

#[test]
fn test_notes_ignore_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    assert!(queue.add(error_at(ErrorCode::E0001, 0, "e"), 1, 1));
    assert!(queue.add(Diagnostic::note(ErrorCode::E9002, "summary"), 1, 2));
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.peek().count(), 2);
}
