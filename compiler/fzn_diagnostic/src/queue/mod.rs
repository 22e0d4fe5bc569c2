//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of repeated (code, span) reports
//! - Position-sorted flushing

use std::collections::HashSet;

use fzn_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics with the same code and primary span as an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queued diagnostic with its sort key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Line number (1-based) for sorting.
    line: u32,
    /// Column number (1-based) for sorting within a line.
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic, line, column);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not notes).
    error_count: usize,
    /// Errors rejected because the limit was reached.
    suppressed: usize,
    /// Primary locations already reported, for dedup.
    seen: HashSet<(ErrorCode, Option<Span>)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic located at `line`/`column`.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert((diag.code, diag.primary_span())) {
            return false;
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors dropped by the limit.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    /// Check if any errors were collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. If the error limit dropped anything, a final
    /// "too many errors" diagnostic is appended.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        let last_span = self
            .diagnostics
            .last()
            .and_then(|d| d.diagnostic.primary_span())
            .unwrap_or_default();

        let mut result: Vec<Diagnostic> =
            self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        if self.suppressed > 0 {
            result.push(too_many_errors(self.config.error_limit, self.suppressed, last_span));
        }

        self.error_count = 0;
        self.suppressed = 0;
        self.seen.clear();

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }
}

/// Summary appended when the error limit dropped diagnostics.
#[cold]
fn too_many_errors(limit: usize, suppressed: usize, span: Span) -> Diagnostic {
    Diagnostic::note(ErrorCode::E9002, format!("aborting after {limit} errors"))
        .with_primary(span, "error limit reached here")
        .with_note(format!("{suppressed} further errors were not reported"))
}

#[cfg(test)]
mod tests;
