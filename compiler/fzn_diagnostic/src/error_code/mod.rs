//! Error codes for lexical diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0001`) with the first digit
//! indicating the phase. Only the lexer phase exists in this workspace.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// No vocabulary rule matches the character
    E0001,
    /// String or char literal missing its closing delimiter
    E0002,
    /// Escape introducer not followed by a valid escape
    E0003,
    /// Char literal with nothing between the quotes
    E0004,
    /// Char literal holding more than one character
    E0005,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E9002,
    ];

    /// Get the error code as a string (e.g., `"E0001"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E9002 => "E9002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
