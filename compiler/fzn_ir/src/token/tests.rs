use std::collections::HashSet;

use super::*;
use crate::{Position, Span};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, start: u32) -> Token<'_> {
    let end = start + u32::try_from(text.len()).unwrap_or(u32::MAX);
    Token::new(kind, text, Span::new(start, end), Position::new(1, start + 1))
}

#[test]
fn all_kinds_are_distinct_and_counted() {
    let set: HashSet<TokenKind> = TokenKind::ALL.iter().copied().collect();
    assert_eq!(set.len(), TokenKind::COUNT);
}

#[test]
fn all_kinds_in_declaration_order() {
    assert!(TokenKind::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn symbolic_names_are_unique() {
    let names: HashSet<&str> = TokenKind::ALL.iter().map(|k| k.symbolic_name()).collect();
    assert_eq!(names.len(), TokenKind::COUNT);
}

#[test]
fn spellings_are_unique() {
    let spellings: Vec<&str> = TokenKind::ALL.iter().filter_map(|k| k.spelling()).collect();
    let unique: HashSet<&str> = spellings.iter().copied().collect();
    assert_eq!(unique.len(), spellings.len());
}

#[test]
fn structural_kinds_have_no_spelling() {
    for kind in [
        TokenKind::Ident,
        TokenKind::IntConst,
        TokenKind::FloatConst,
        TokenKind::Str,
        TokenKind::Char,
        TokenKind::Comment,
        TokenKind::Whitespace,
    ] {
        assert_eq!(kind.spelling(), None, "{kind:?}");
    }
}

#[test]
fn symbolic_names_match_grammar() {
    assert_eq!(TokenKind::Minus.symbolic_name(), "MN");
    assert_eq!(TokenKind::DotDot.symbolic_name(), "DD");
    assert_eq!(TokenKind::ColonColon.symbolic_name(), "DC");
    assert_eq!(TokenKind::OrderBy.symbolic_name(), "ORDERBY");
    assert_eq!(TokenKind::IntConst.symbolic_name(), "INT_CONST");
    assert_eq!(TokenKind::Whitespace.symbolic_name(), "WS");
    assert_eq!(TokenKind::MarkerPar.symbolic_name(), "APAR");
}

#[test]
fn only_comments_and_whitespace_are_hidden() {
    let hidden: Vec<TokenKind> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|k| k.channel() == Channel::Hidden)
        .collect();
    assert_eq!(hidden, vec![TokenKind::Comment, TokenKind::Whitespace]);
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::Var.is_keyword());
    assert!(TokenKind::OrderBy.is_keyword());
    assert!(TokenKind::VarCardinality.is_keyword());
    assert!(!TokenKind::LtEq.is_keyword());
    assert!(!TokenKind::MarkerExpr.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
}

#[test]
fn marker_classification() {
    let markers = TokenKind::ALL.iter().filter(|k| k.is_marker()).count();
    assert_eq!(markers, 9);
    assert!(TokenKind::ALL
        .iter()
        .filter(|k| k.is_marker())
        .all(|k| k.spelling().is_some_and(|s| s.starts_with("###") && s.len() == 8)));
}

#[test]
fn kind_display() {
    assert_eq!(TokenKind::LtEq.to_string(), "`<=`");
    assert_eq!(TokenKind::Ident.to_string(), "IDENTIFIER");
}

#[test]
fn token_debug_shows_symbol_text_and_span() {
    let token = tok(TokenKind::Var, "var", 4);
    assert_eq!(format!("{token:?}"), "VAR(\"var\") @ 4..7");
}

#[test]
fn token_debug_shows_flags() {
    let mut token = tok(TokenKind::Str, "\"ab", 0);
    token.flags |= TokenFlags::HAS_ERROR;
    assert!(format!("{token:?}").ends_with("TokenFlags(HAS_ERROR)"));
}

#[test]
fn token_channel_follows_kind() {
    assert_eq!(tok(TokenKind::Comment, "% x", 0).channel(), Channel::Hidden);
    assert!(tok(TokenKind::Whitespace, " ", 0).is_hidden());
    assert_eq!(tok(TokenKind::Int, "int", 0).channel(), Channel::Default);
}

#[test]
fn flags_helpers() {
    let flags = TokenFlags::HAS_ERROR | TokenFlags::UNTERMINATED;
    assert!(flags.has_error());
    assert!(!flags.after_trivia());
    assert!(TokenFlags::default().is_empty());
}

#[test]
fn token_list_channel_views() {
    let list: TokenList<'_> = [
        tok(TokenKind::Var, "var", 0),
        tok(TokenKind::Whitespace, " ", 3),
        tok(TokenKind::Ident, "x", 4),
        tok(TokenKind::Comment, "%c", 5),
    ]
    .into_iter()
    .collect();

    assert_eq!(list.len(), 4);
    let visible: Vec<TokenKind> = list.default_channel().map(|t| t.kind).collect();
    assert_eq!(visible, vec![TokenKind::Var, TokenKind::Ident]);
    let hidden: Vec<TokenKind> = list.hidden_channel().map(|t| t.kind).collect();
    assert_eq!(hidden, vec![TokenKind::Whitespace, TokenKind::Comment]);
    assert_eq!(list.reconstruct(), "var x%c");
    assert_eq!(list[2].text, "x");
}

#[test]
fn token_list_empty() {
    let list = TokenList::new();
    assert!(list.is_empty());
    assert_eq!(list.get(0), None);
    assert_eq!(list.reconstruct(), "");
}
