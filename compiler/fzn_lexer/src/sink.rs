//! Destinations for lexical errors.

use fzn_diagnostic::DiagnosticQueue;

use crate::LexError;

/// Receives lexical errors as the scanner finds them.
///
/// The scanner never stops on an error; it reports and continues.
pub trait DiagnosticSink {
    fn report(&mut self, error: LexError);
}

impl DiagnosticSink for Vec<LexError> {
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}

/// Converts each error to a [`Diagnostic`](fzn_diagnostic::Diagnostic);
/// the queue's limit and deduplication apply.
impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, error: LexError) {
        let position = error.position;
        self.add(error.to_diagnostic(), position.line, position.column);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, error: LexError) {
        (**self).report(error);
    }
}
