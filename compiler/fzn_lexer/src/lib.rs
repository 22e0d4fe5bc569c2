//! FlatZinc lexer.
//!
//! Turns source text into [`Token`]s on two channels. Comments and
//! whitespace go to the hidden channel; everything else is what the grammar
//! sees. Lexical errors are reported to a [`DiagnosticSink`] and never stop
//! the scan.
//!
//! - [`Scanner`]: pull one token at a time, both channels
//! - [`TokenStream`]: parser view, default channel only
//! - [`lex`]: scan a whole buffer into a [`TokenList`]
//! - [`literal`]: decode literal token text into values

mod config;
mod lex_error;
pub mod literal;
mod scanner;
mod sink;
mod stream;

use std::sync::Once;

pub use config::LexerConfig;
pub use fzn_ir::{Channel, Position, Span, Token, TokenFlags, TokenKind, TokenList};
pub use fzn_lexer_core::{SourceBuffer, Tier, UnknownTier};
pub use lex_error::{LexError, LexErrorKind};
pub use literal::{char_value, float_value, int_value, string_value};
pub use scanner::Scanner;
pub use sink::DiagnosticSink;
pub use stream::TokenStream;

/// Tokens and errors from scanning one buffer.
#[derive(Debug)]
pub struct LexOutput<'src> {
    pub tokens: TokenList<'src>,
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` completely, collecting errors.
pub fn lex<'src>(source: &'src str, config: &LexerConfig) -> LexOutput<'src> {
    let mut errors = Vec::new();
    let tokens = lex_with_sink(source, config, &mut errors);
    LexOutput { tokens, errors }
}

/// Scan `source` completely, reporting errors to `sink`.
#[tracing::instrument(
    level = "debug",
    skip(source, config, sink),
    fields(tier = %config.tier, len = source.len())
)]
pub fn lex_with_sink<'src, S: DiagnosticSink>(
    source: &'src str,
    config: &LexerConfig,
    sink: S,
) -> TokenList<'src> {
    let mut scanner = Scanner::with_sink(source, config.tier, ErrorCounter { sink, count: 0 });
    let mut tokens = TokenList::with_capacity(source.len() / 4);
    for token in &mut scanner {
        if config.retain_hidden || !token.is_hidden() {
            tokens.push(token);
        }
    }
    tracing::debug!(
        tokens = tokens.len(),
        errors = scanner.sink().count,
        "lexed"
    );
    tokens
}

/// Counts errors on their way to the caller's sink.
struct ErrorCounter<S> {
    sink: S,
    count: usize,
}

impl<S: DiagnosticSink> DiagnosticSink for ErrorCounter<S> {
    fn report(&mut self, error: LexError) {
        self.count += 1;
        self.sink.report(error);
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fzn_lexer=debug` or
/// `RUST_LOG=fzn_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
