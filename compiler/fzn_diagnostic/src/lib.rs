//! Diagnostic values for lexical errors.
//!
//! A diagnostic carries:
//! - an error code for searchability
//! - a message (what went wrong)
//! - a primary span (where it went wrong)
//! - notes (why it matters, how to fix)
//!
//! Rendering is left to the driver. [`DiagnosticQueue`] collects diagnostics
//! from one or more scans and hands them back sorted by position.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
