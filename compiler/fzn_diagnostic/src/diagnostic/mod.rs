//! Diagnostic values handed from the lexer to whatever renders them.

use std::fmt;

use fzn_ir::Span;

use crate::ErrorCode;

/// How serious a diagnostic is.
///
/// Only errors count toward the queue's limit; notes summarize.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Note,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label marks the offending text or a related location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

/// A source range with a short explanation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

/// One reportable problem: code, severity, headline, and the source ranges
/// it concerns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// An error with its headline.
    #[cold]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// A note with its headline. Notes are never counted as errors.
    #[cold]
    pub fn note(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Note,
            ..Self::error(code, message)
        }
    }

    /// Mark the offending text.
    pub fn with_primary(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message, LabelStyle::Primary)
    }

    /// Point at a related location, such as where an unterminated literal
    /// ran out of input.
    pub fn with_secondary(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message, LabelStyle::Secondary)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    fn labeled(mut self, span: Span, message: impl Into<String>, style: LabelStyle) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            style,
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.style == LabelStyle::Primary)
            .map(|label| label.span)
    }
}

/// `error[E0003] 6..8: malformed escape sequence`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.severity, self.code)?;
        if let Some(span) = self.primary_span() {
            write!(f, " {span}")?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests;
