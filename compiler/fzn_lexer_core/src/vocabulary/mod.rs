//! Vocabulary tiers and the ordered rule table.
//!
//! There is exactly one rule table, [`RULES`]. Each rule names its token
//! kind, its pattern, and the lowest tier that enables it. A [`Vocabulary`]
//! is the table filtered by tier and compiled for scanning: literal rules
//! into a byte trie, structural rules into a short list of matchers.
//!
//! Declaration order is priority order. Keyword literals come before the
//! identifier pattern so that a run like `var` resolves to `VAR` on the
//! equal-length tie, while `vartype` resolves to `IDENTIFIER` because it is
//! longer.

mod trie;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use fzn_ir::TokenKind;

use crate::pattern::Structural;

pub use trie::LiteralTrie;

/// Which dialect a scanner recognizes.
///
/// `Extended` is a strict superset of `Base`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Plain FlatZinc.
    #[default]
    Base,
    /// FlatZinc plus search-strategy, queue and introspection vocabulary.
    Extended,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Base, Tier::Extended];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Base => "base",
            Tier::Extended => "extended",
        }
    }

    /// Whether a rule introduced at `rule_tier` is active in this tier.
    #[inline]
    pub fn enables(self, rule_tier: Tier) -> bool {
        rule_tier <= self
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown tier name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown vocabulary tier `{}` (expected `base` or `extended`)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTier(s.to_owned()))
    }
}

/// How a rule matches text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Exact text: keywords, operators, sentinel markers.
    Literal(&'static str),
    /// Variable text recognized by a matcher.
    Structural(Structural),
}

/// One entry of the rule table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Pattern,
    /// Lowest tier in which the rule is active.
    pub tier: Tier,
}

impl Rule {
    const fn literal(kind: TokenKind, text: &'static str, tier: Tier) -> Self {
        Rule {
            kind,
            pattern: Pattern::Literal(text),
            tier,
        }
    }

    const fn structural(kind: TokenKind, pattern: Structural) -> Self {
        Rule {
            kind,
            pattern: Pattern::Structural(pattern),
            tier: Tier::Base,
        }
    }
}

use Tier::{Base, Extended};

/// The rule table, in priority order.
pub static RULES: [Rule; 83] = [
    // Base keywords
    Rule::literal(TokenKind::Bool, "bool", Base),
    Rule::literal(TokenKind::True, "true", Base),
    Rule::literal(TokenKind::False, "false", Base),
    Rule::literal(TokenKind::Int, "int", Base),
    Rule::literal(TokenKind::Float, "float", Base),
    Rule::literal(TokenKind::Set, "set", Base),
    Rule::literal(TokenKind::Of, "of", Base),
    Rule::literal(TokenKind::Array, "array", Base),
    Rule::literal(TokenKind::Var, "var", Base),
    Rule::literal(TokenKind::Par, "par", Base),
    Rule::literal(TokenKind::Predicate, "predicate", Base),
    Rule::literal(TokenKind::Constraint, "constraint", Base),
    Rule::literal(TokenKind::Solve, "solve", Base),
    Rule::literal(TokenKind::Satisfy, "satisfy", Base),
    Rule::literal(TokenKind::Minimize, "minimize", Base),
    Rule::literal(TokenKind::Maximize, "maximize", Base),
    // Base punctuation
    Rule::literal(TokenKind::DotDot, "..", Base),
    Rule::literal(TokenKind::Dot, ".", Base),
    Rule::literal(TokenKind::LBrace, "{", Base),
    Rule::literal(TokenKind::RBrace, "}", Base),
    Rule::literal(TokenKind::Comma, ",", Base),
    Rule::literal(TokenKind::LBracket, "[", Base),
    Rule::literal(TokenKind::RBracket, "]", Base),
    Rule::literal(TokenKind::Eq, "=", Base),
    Rule::literal(TokenKind::Plus, "+", Base),
    Rule::literal(TokenKind::Minus, "-", Base),
    Rule::literal(TokenKind::Semicolon, ";", Base),
    Rule::literal(TokenKind::Colon, ":", Base),
    Rule::literal(TokenKind::ColonColon, "::", Base),
    Rule::literal(TokenKind::LParen, "(", Base),
    Rule::literal(TokenKind::RParen, ")", Base),
    // Extended keywords
    Rule::literal(TokenKind::As, "as", Extended),
    Rule::literal(TokenKind::Each, "each", Extended),
    Rule::literal(TokenKind::Queue, "queue", Extended),
    Rule::literal(TokenKind::List, "list", Extended),
    Rule::literal(TokenKind::Heap, "heap", Extended),
    Rule::literal(TokenKind::One, "one", Extended),
    Rule::literal(TokenKind::Wone, "wone", Extended),
    Rule::literal(TokenKind::For, "for", Extended),
    Rule::literal(TokenKind::Wfor, "wfor", Extended),
    Rule::literal(TokenKind::OrderBy, "order by", Extended),
    // Extended operators
    Rule::literal(TokenKind::AndAnd, "&&", Extended),
    Rule::literal(TokenKind::OrOr, "||", Extended),
    Rule::literal(TokenKind::Bang, "!", Extended),
    Rule::literal(TokenKind::In, "in", Extended),
    Rule::literal(TokenKind::Rev, "rev", Extended),
    Rule::literal(TokenKind::EqEq, "==", Extended),
    Rule::literal(TokenKind::NotEq, "!=", Extended),
    Rule::literal(TokenKind::Lt, "<", Extended),
    Rule::literal(TokenKind::Gt, ">", Extended),
    Rule::literal(TokenKind::LtEq, "<=", Extended),
    Rule::literal(TokenKind::GtEq, ">=", Extended),
    // Extended introspection keywords
    Rule::literal(TokenKind::Key, "key", Extended),
    Rule::literal(TokenKind::Cstr, "cstr", Extended),
    Rule::literal(TokenKind::Prop, "prop", Extended),
    Rule::literal(TokenKind::VarName, "var.name", Extended),
    Rule::literal(TokenKind::VarCardinality, "var.cardinality", Extended),
    Rule::literal(TokenKind::CstrName, "cstr.name", Extended),
    Rule::literal(TokenKind::CstrArity, "cstr.arity", Extended),
    Rule::literal(TokenKind::PropPriority, "prop.priority", Extended),
    Rule::literal(TokenKind::PropArity, "prop.arity", Extended),
    Rule::literal(TokenKind::PropPrioDyn, "prop.prioDyn", Extended),
    Rule::literal(TokenKind::Any, "any", Extended),
    Rule::literal(TokenKind::Min, "min", Extended),
    Rule::literal(TokenKind::Max, "max", Extended),
    Rule::literal(TokenKind::Sum, "sum", Extended),
    Rule::literal(TokenKind::Size, "size", Extended),
    // Sentinel markers
    Rule::literal(TokenKind::MarkerPar, "###_P###", Base),
    Rule::literal(TokenKind::MarkerParArray, "###AP###", Base),
    Rule::literal(TokenKind::MarkerVar, "###_V###", Base),
    Rule::literal(TokenKind::MarkerVarArray, "###AV###", Base),
    Rule::literal(TokenKind::MarkerIndex, "###ID###", Base),
    Rule::literal(TokenKind::MarkerExpr, "###EX###", Base),
    Rule::literal(TokenKind::MarkerAnnotations, "###AS###", Base),
    Rule::literal(TokenKind::MarkerStruct, "###ST###", Extended),
    Rule::literal(TokenKind::MarkerStreg, "###SR###", Extended),
    // Structural
    Rule::structural(TokenKind::Ident, Structural::Identifier),
    Rule::structural(TokenKind::Comment, Structural::Comment),
    Rule::structural(TokenKind::Whitespace, Structural::Whitespace),
    Rule::structural(TokenKind::IntConst, Structural::IntConst),
    Rule::structural(TokenKind::FloatConst, Structural::FloatConst),
    Rule::structural(TokenKind::Str, Structural::Str),
    Rule::structural(TokenKind::Char, Structural::Char),
];

/// A structural rule compiled into a vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StructuralRule {
    /// Index into [`RULES`]; lower wins ties.
    pub index: u16,
    pub kind: TokenKind,
    pub pattern: Structural,
}

/// The rule table filtered to one tier and compiled for scanning.
///
/// Immutable once built. Use [`Vocabulary::for_tier`] to share one instance
/// per tier across scanners and threads.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    tier: Tier,
    trie: LiteralTrie,
    structural: Vec<StructuralRule>,
}

impl Vocabulary {
    /// Compile the rules active in `tier`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "RULES has fewer than u16::MAX entries"
    )]
    pub fn build(tier: Tier) -> Self {
        let mut trie = LiteralTrie::new();
        let mut structural = Vec::new();
        for (index, rule) in RULES.iter().enumerate() {
            if !tier.enables(rule.tier) {
                continue;
            }
            let index = index as u16;
            match rule.pattern {
                Pattern::Literal(text) => trie.insert(text, index),
                Pattern::Structural(pattern) => structural.push(StructuralRule {
                    index,
                    kind: rule.kind,
                    pattern,
                }),
            }
        }
        Vocabulary {
            tier,
            trie,
            structural,
        }
    }

    /// The shared vocabulary for `tier`, built on first use.
    pub fn for_tier(tier: Tier) -> &'static Vocabulary {
        static BASE: OnceLock<Vocabulary> = OnceLock::new();
        static EXTENDED: OnceLock<Vocabulary> = OnceLock::new();
        let cell = match tier {
            Tier::Base => &BASE,
            Tier::Extended => &EXTENDED,
        };
        cell.get_or_init(|| Vocabulary::build(tier))
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Literal rules of this tier.
    #[inline]
    pub fn trie(&self) -> &LiteralTrie {
        &self.trie
    }

    /// Structural rules of this tier, in priority order.
    #[inline]
    pub fn structural(&self) -> &[StructuralRule] {
        &self.structural
    }

    /// Active rules with their table index, in priority order.
    pub fn rules(&self) -> impl Iterator<Item = (usize, &'static Rule)> + '_ {
        RULES
            .iter()
            .enumerate()
            .filter(move |(_, rule)| self.tier.enables(rule.tier))
    }

    /// Whether this vocabulary can produce `kind`.
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.rules().any(|(_, rule)| rule.kind == kind)
    }

    /// The fixed spellings active in this tier.
    pub fn literals(&self) -> impl Iterator<Item = (TokenKind, &'static str)> + '_ {
        self.rules().filter_map(|(_, rule)| match rule.pattern {
            Pattern::Literal(text) => Some((rule.kind, text)),
            Pattern::Structural(_) => None,
        })
    }
}
