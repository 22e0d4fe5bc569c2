//! Lexical error types.
//!
//! Every error carries:
//! - WHERE: `span` and `position` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - the offending source text
//!
//! Errors are values pushed into a [`DiagnosticSink`](crate::DiagnosticSink);
//! the scanner never stops on them.

use fzn_diagnostic::{Diagnostic, ErrorCode};
use fzn_ir::{Position, Span};

/// A lexical error with location and offending text.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    /// Byte range of the offending text.
    pub span: Span,
    /// Line and column of the first offending character.
    pub position: Position,
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The offending source text.
    pub text: String,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No rule of the active vocabulary accepts at this position.
    /// The character is skipped.
    #[error("unrecognized character `{}`", found.escape_debug())]
    UnrecognizedCharacter { found: char },
    /// A string or char literal with no closing delimiter. Strings run to
    /// end of input; chars stop after their first element.
    #[error("unterminated literal: expected closing `{delimiter}`")]
    UnterminatedLiteral { delimiter: char },
    /// `''`: nothing between the quotes.
    #[error("empty character literal")]
    EmptyCharLiteral,
    /// A char literal holding more than one character, such as `'ab'`.
    #[error("character literal may only contain one character")]
    MultiCharLiteral,
    /// An escape introducer not followed by a valid short, Unicode, or
    /// octal escape. Decodes to U+FFFD.
    #[error("malformed escape sequence `{escape}`")]
    MalformedEscape { escape: String },
}

impl LexError {
    /// Character that no rule accepts.
    #[cold]
    pub fn unrecognized_character(span: Span, position: Position, found: char) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::UnrecognizedCharacter { found },
            text: found.to_string(),
        }
    }

    /// String or char literal closed by end of input.
    #[cold]
    pub fn unterminated_literal(
        span: Span,
        position: Position,
        delimiter: char,
        text: &str,
    ) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::UnterminatedLiteral { delimiter },
            text: text.to_owned(),
        }
    }

    /// `''`.
    #[cold]
    pub fn empty_char_literal(span: Span, position: Position, text: &str) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::EmptyCharLiteral,
            text: text.to_owned(),
        }
    }

    /// Char literal with more than one element between its quotes.
    #[cold]
    pub fn multi_char_literal(span: Span, position: Position, text: &str) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::MultiCharLiteral,
            text: text.to_owned(),
        }
    }

    /// Escape no dialect accepts.
    #[cold]
    pub fn malformed_escape(span: Span, position: Position, escape: &str) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::MalformedEscape {
                escape: escape.to_owned(),
            },
            text: escape.to_owned(),
        }
    }

    /// The stable diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedLiteral { .. } => ErrorCode::E0002,
            LexErrorKind::MalformedEscape { .. } => ErrorCode::E0003,
            LexErrorKind::EmptyCharLiteral => ErrorCode::E0004,
            LexErrorKind::MultiCharLiteral => ErrorCode::E0005,
        }
    }

    /// Convert to a renderer-ready diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.kind.to_string());
        match &self.kind {
            LexErrorKind::UnrecognizedCharacter { .. } => diag
                .with_primary(self.span, "not part of any token")
                .with_note("the character was skipped"),
            LexErrorKind::UnterminatedLiteral { delimiter } => {
                let opening = Span::new(self.span.start, self.span.start + 1);
                let end = Span::point(self.span.end);
                diag.with_primary(opening, "literal starts here")
                    .with_secondary(end, "no closing delimiter before here")
                    .with_note(format!("add a closing `{delimiter}`"))
            }
            LexErrorKind::EmptyCharLiteral => diag
                .with_primary(self.span, "empty character literal")
                .with_note("a character literal holds exactly one character or escape"),
            LexErrorKind::MultiCharLiteral => diag
                .with_primary(self.span, "more than one character")
                .with_note("use a string literal for text"),
            LexErrorKind::MalformedEscape { .. } => diag
                .with_primary(self.span, "invalid escape")
                .with_note("valid escapes are \\b \\t \\n \\f \\r \\\" \\' \\\\, \\uXXXX, and octal \\0 to \\377"),
        }
    }
}
