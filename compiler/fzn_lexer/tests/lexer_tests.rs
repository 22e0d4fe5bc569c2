//! End-to-end lexing behavior on both vocabulary tiers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fzn_diagnostic::{DiagnosticConfig, DiagnosticQueue, ErrorCode};
use fzn_lexer::{
    lex, lex_with_sink, string_value, LexErrorKind, LexerConfig, SourceBuffer, Tier, TokenKind,
    TokenStream,
};
use fzn_lexer_core::vocabulary::Vocabulary;
use pretty_assertions::assert_eq;

fn default_kinds(tier: Tier, source: &str) -> Vec<TokenKind> {
    let out = lex(source, &LexerConfig::default().with_tier(tier));
    out.tokens.default_channel().map(|t| t.kind).collect()
}

const MODEL: &str = "\
% Simple FlatZinc model
predicate my_pred(var int: x);
array [1..3] of int: coeffs = [1, -2, 3];
var 0..10: x :: output_var;
var bool: b;
var set of 1..5: s;
var float: f = 2.5e-1;
constraint int_lin_le(coeffs, [x, x, x], -3) :: domain;
constraint bool_eq(b, true);
solve :: int_search([x], input_order, indomain_min, complete) minimize x;
";

#[test]
fn every_keyword_alone_is_one_token() {
    for tier in Tier::ALL {
        for (kind, text) in Vocabulary::for_tier(tier).literals() {
            let out = lex(text, &LexerConfig::default().with_tier(tier));
            assert!(out.errors.is_empty(), "{tier} {text:?}");
            let tokens: Vec<(TokenKind, &str)> =
                out.tokens.iter().map(|t| (t.kind, t.text)).collect();
            assert_eq!(tokens, vec![(kind, text)], "{tier}");
        }
    }
}

#[test]
fn keyword_with_identifier_tail_is_identifier() {
    for tier in Tier::ALL {
        for (kind, text) in Vocabulary::for_tier(tier).literals() {
            if !kind.is_keyword() || !text.ends_with(|c: char| c.is_ascii_alphanumeric()) {
                continue;
            }
            let source = format!("{text}_1");
            let kinds = default_kinds(tier, &source);
            if text.contains(['.', ' ']) {
                // The compound still wins; only its tail joins an identifier.
                assert_eq!(kinds.last(), Some(&TokenKind::Ident), "{source:?}");
            } else {
                assert_eq!(kinds, vec![TokenKind::Ident], "{source:?}");
            }
        }
    }
}

#[test]
fn order_by_spelling() {
    assert_eq!(default_kinds(Tier::Extended, "order by"), vec![TokenKind::OrderBy]);
    assert_eq!(default_kinds(Tier::Extended, "orderby"), vec![TokenKind::Ident]);
}

#[test]
fn compound_operators() {
    let source = "<= >= == != && || :: ..";
    assert_eq!(
        default_kinds(Tier::Extended, source),
        vec![
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::ColonColon,
            TokenKind::DotDot,
        ]
    );
}

#[test]
fn comment_goes_to_hidden_channel() {
    let out = lex("var%comment\nint", &LexerConfig::default());
    assert_eq!(
        out.tokens.default_channel().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Var, TokenKind::Int]
    );
    assert_eq!(
        out.tokens.hidden_channel().map(|t| t.text).collect::<Vec<_>>(),
        vec!["%comment\n"]
    );
}

#[test]
fn escape_dialects_decode_alike() {
    for source in ["\"A\\u0041B\"", "\"A\\101B\"", "\"AAB\""] {
        let out = lex(source, &LexerConfig::default());
        assert!(out.errors.is_empty());
        assert_eq!(string_value(&out.tokens[0]).as_deref(), Some("AAB"));
    }
}

#[test]
fn signed_integer_is_one_token() {
    let out = lex("-17", &LexerConfig::default());
    assert_eq!(out.tokens.kinds(), vec![TokenKind::IntConst]);
    assert_eq!(fzn_lexer::int_value(&out.tokens[0]), Some(-17));
}

#[test]
fn one_bad_character_one_error() {
    let out = lex("var int: x = 1 @ 2;", &LexerConfig::default());
    assert_eq!(out.errors.len(), 1);
    assert_eq!(
        out.errors[0].kind,
        LexErrorKind::UnrecognizedCharacter { found: '@' }
    );
    assert_eq!(
        out.tokens.kinds().last(),
        Some(&TokenKind::Semicolon),
        "scanning continues after the error"
    );
}

#[test]
fn model_lexes_cleanly_and_reconstructs() {
    for tier in Tier::ALL {
        let out = lex(MODEL, &LexerConfig::default().with_tier(tier));
        assert!(!out.has_errors(), "{tier}: {:?}", out.errors);
        assert_eq!(out.tokens.reconstruct(), MODEL);
    }
}

#[test]
fn dropping_hidden_tokens() {
    let out = lex(MODEL, &LexerConfig::default().with_retain_hidden(false));
    assert!(out.tokens.iter().all(|t| !t.is_hidden()));
    let stream: Vec<TokenKind> = TokenStream::new(MODEL, Tier::Base).map(|t| t.kind).collect();
    assert_eq!(out.tokens.kinds(), stream);
}

#[test]
fn base_tier_treats_extended_words_as_identifiers() {
    assert_eq!(
        default_kinds(Tier::Base, "each queue min max sum"),
        vec![TokenKind::Ident; 5]
    );
    let out = lex("a && b", &LexerConfig::default());
    assert_eq!(out.errors.len(), 2);
    assert!(out
        .errors
        .iter()
        .all(|e| e.kind == LexErrorKind::UnrecognizedCharacter { found: '&' }));
}

#[test]
fn unterminated_string_runs_to_end() {
    let out = lex("x = \"abc", &LexerConfig::default());
    let last = out.tokens.iter().last().unwrap();
    assert_eq!((last.kind, last.text), (TokenKind::Str, "\"abc"));
    assert_eq!(
        out.errors.iter().map(|e| e.kind.clone()).collect::<Vec<_>>(),
        vec![LexErrorKind::UnterminatedLiteral { delimiter: '"' }]
    );
}

#[test]
fn floats_and_ranges() {
    assert_eq!(
        default_kinds(Tier::Base, "1.5e-3 2E10"),
        vec![TokenKind::FloatConst, TokenKind::FloatConst]
    );
    assert_eq!(
        default_kinds(Tier::Base, "1..5"),
        vec![TokenKind::IntConst, TokenKind::DotDot, TokenKind::IntConst]
    );
}

#[test]
fn extended_model_fragment() {
    let source = "###ST### each x in rev(xs) order by key: min(x.var.name) <= 3 && !b";
    let out = lex(source, &LexerConfig::extended());
    assert!(out.errors.is_empty(), "{:?}", out.errors);
    assert_eq!(
        out.tokens.default_channel().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::MarkerStruct,
            TokenKind::Each,
            TokenKind::Ident,
            TokenKind::In,
            TokenKind::Rev,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::OrderBy,
            TokenKind::Key,
            TokenKind::Colon,
            TokenKind::Min,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Dot,
            TokenKind::VarName,
            TokenKind::RParen,
            TokenKind::LtEq,
            TokenKind::IntConst,
            TokenKind::AndAnd,
            TokenKind::Bang,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn diagnostics_through_queue() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let tokens = lex_with_sink("s = \"a\\q\";\n@", &LexerConfig::default(), &mut queue);
    assert_eq!(tokens.reconstruct(), "s = \"a\\q\";\n");
    let codes: Vec<ErrorCode> = queue.flush().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0003, ErrorCode::E0001]);
}

#[test]
fn reading_from_a_stream() {
    let buffer = SourceBuffer::from_reader(MODEL.as_bytes()).unwrap();
    let out = lex(buffer.as_str(), &LexerConfig::default());
    assert_eq!(out.tokens.reconstruct(), MODEL);

    let invalid: &[u8] = &[b'x', 0xff, b'y'];
    let err = SourceBuffer::from_reader(invalid).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
