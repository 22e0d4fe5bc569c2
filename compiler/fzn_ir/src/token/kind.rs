//! Named token kinds.
//!
//! The combined base and extended vocabulary. Variant names are the stable
//! contract the grammar is written against; [`TokenKind::symbolic_name`]
//! gives the conventional grammar symbol for each kind.

use std::fmt;

use super::Channel;

/// Every token kind either vocabulary tier can produce.
///
/// Which kinds a given scanner actually emits depends on its tier; the enum
/// itself is tier-agnostic so the grammar sees one closed set of names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Base keywords ===
    Bool,
    True,
    False,
    Int,
    Float,
    Set,
    Of,
    Array,
    Var,
    Par,
    Predicate,
    Constraint,
    Solve,
    Satisfy,
    Minimize,
    Maximize,

    // === Base punctuation ===
    /// `..`
    DotDot,
    /// `.`
    Dot,
    LBrace,
    RBrace,
    Comma,
    LBracket,
    RBracket,
    /// `=`
    Eq,
    Plus,
    /// Standalone `-`.
    ///
    /// A `-` directly followed by digits is absorbed into [`TokenKind::IntConst`]
    /// or [`TokenKind::FloatConst`] by longest match, so `x-1` lexes as
    /// `IDENTIFIER INT_CONST`. Grammars that need binary minus must expect
    /// whitespace or another separator before the operand.
    Minus,
    Semicolon,
    Colon,
    /// `::`
    ColonColon,
    LParen,
    RParen,

    // === Extended keywords ===
    As,
    Each,
    Queue,
    List,
    Heap,
    One,
    Wone,
    For,
    Wfor,
    /// `order by`, one token including the inner space.
    OrderBy,

    // === Extended operators ===
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    In,
    Rev,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    Lt,
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    // === Extended introspection keywords ===
    Key,
    Cstr,
    Prop,
    VarName,
    VarCardinality,
    CstrName,
    CstrArity,
    PropPriority,
    PropArity,
    PropPrioDyn,
    Any,
    Min,
    Max,
    Sum,
    Size,

    // === Sentinel markers ===
    /// `###_P###`: resolved parameter.
    MarkerPar,
    /// `###AP###`: resolved parameter array.
    MarkerParArray,
    /// `###_V###`: resolved variable.
    MarkerVar,
    /// `###AV###`: resolved variable array.
    MarkerVarArray,
    /// `###ID###`: resolved index set.
    MarkerIndex,
    /// `###EX###`: resolved expression.
    MarkerExpr,
    /// `###AS###`: resolved annotations.
    MarkerAnnotations,
    /// `###ST###`: resolved structure (extended).
    MarkerStruct,
    /// `###SR###`: resolved structure registration (extended).
    MarkerStreg,

    // === Structural ===
    Ident,
    /// `[+-]?[0-9]+`. The sign is part of the literal.
    IntConst,
    FloatConst,
    Str,
    Char,
    /// `%` to end of line, hidden.
    Comment,
    /// One whitespace character, hidden.
    Whitespace,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// All token kinds in declaration order.
    pub const ALL: [TokenKind; 83] = [
        TokenKind::Bool,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Set,
        TokenKind::Of,
        TokenKind::Array,
        TokenKind::Var,
        TokenKind::Par,
        TokenKind::Predicate,
        TokenKind::Constraint,
        TokenKind::Solve,
        TokenKind::Satisfy,
        TokenKind::Minimize,
        TokenKind::Maximize,
        TokenKind::DotDot,
        TokenKind::Dot,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Eq,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::ColonColon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::As,
        TokenKind::Each,
        TokenKind::Queue,
        TokenKind::List,
        TokenKind::Heap,
        TokenKind::One,
        TokenKind::Wone,
        TokenKind::For,
        TokenKind::Wfor,
        TokenKind::OrderBy,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Bang,
        TokenKind::In,
        TokenKind::Rev,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::Key,
        TokenKind::Cstr,
        TokenKind::Prop,
        TokenKind::VarName,
        TokenKind::VarCardinality,
        TokenKind::CstrName,
        TokenKind::CstrArity,
        TokenKind::PropPriority,
        TokenKind::PropArity,
        TokenKind::PropPrioDyn,
        TokenKind::Any,
        TokenKind::Min,
        TokenKind::Max,
        TokenKind::Sum,
        TokenKind::Size,
        TokenKind::MarkerPar,
        TokenKind::MarkerParArray,
        TokenKind::MarkerVar,
        TokenKind::MarkerVarArray,
        TokenKind::MarkerIndex,
        TokenKind::MarkerExpr,
        TokenKind::MarkerAnnotations,
        TokenKind::MarkerStruct,
        TokenKind::MarkerStreg,
        TokenKind::Ident,
        TokenKind::IntConst,
        TokenKind::FloatConst,
        TokenKind::Str,
        TokenKind::Char,
        TokenKind::Comment,
        TokenKind::Whitespace,
    ];

    /// The fixed source spelling of literal kinds.
    ///
    /// Returns `None` for structural kinds (identifiers, literals, comments,
    /// whitespace) whose text varies.
    pub const fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Bool => "bool",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Set => "set",
            TokenKind::Of => "of",
            TokenKind::Array => "array",
            TokenKind::Var => "var",
            TokenKind::Par => "par",
            TokenKind::Predicate => "predicate",
            TokenKind::Constraint => "constraint",
            TokenKind::Solve => "solve",
            TokenKind::Satisfy => "satisfy",
            TokenKind::Minimize => "minimize",
            TokenKind::Maximize => "maximize",
            TokenKind::DotDot => "..",
            TokenKind::Dot => ".",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::As => "as",
            TokenKind::Each => "each",
            TokenKind::Queue => "queue",
            TokenKind::List => "list",
            TokenKind::Heap => "heap",
            TokenKind::One => "one",
            TokenKind::Wone => "wone",
            TokenKind::For => "for",
            TokenKind::Wfor => "wfor",
            TokenKind::OrderBy => "order by",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::In => "in",
            TokenKind::Rev => "rev",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Key => "key",
            TokenKind::Cstr => "cstr",
            TokenKind::Prop => "prop",
            TokenKind::VarName => "var.name",
            TokenKind::VarCardinality => "var.cardinality",
            TokenKind::CstrName => "cstr.name",
            TokenKind::CstrArity => "cstr.arity",
            TokenKind::PropPriority => "prop.priority",
            TokenKind::PropArity => "prop.arity",
            TokenKind::PropPrioDyn => "prop.prioDyn",
            TokenKind::Any => "any",
            TokenKind::Min => "min",
            TokenKind::Max => "max",
            TokenKind::Sum => "sum",
            TokenKind::Size => "size",
            TokenKind::MarkerPar => "###_P###",
            TokenKind::MarkerParArray => "###AP###",
            TokenKind::MarkerVar => "###_V###",
            TokenKind::MarkerVarArray => "###AV###",
            TokenKind::MarkerIndex => "###ID###",
            TokenKind::MarkerExpr => "###EX###",
            TokenKind::MarkerAnnotations => "###AS###",
            TokenKind::MarkerStruct => "###ST###",
            TokenKind::MarkerStreg => "###SR###",
            TokenKind::Ident
            | TokenKind::IntConst
            | TokenKind::FloatConst
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Whitespace => return None,
        };
        Some(text)
    }

    /// The grammar symbol for this kind (`"INT_CONST"`, `"MN"`, `"ORDERBY"`).
    pub const fn symbolic_name(self) -> &'static str {
        match self {
            TokenKind::Bool => "BOOL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Set => "SET",
            TokenKind::Of => "OF",
            TokenKind::Array => "ARRAY",
            TokenKind::Var => "VAR",
            TokenKind::Par => "PAR",
            TokenKind::Predicate => "PREDICATE",
            TokenKind::Constraint => "CONSTRAINT",
            TokenKind::Solve => "SOLVE",
            TokenKind::Satisfy => "SATISFY",
            TokenKind::Minimize => "MINIMIZE",
            TokenKind::Maximize => "MAXIMIZE",
            TokenKind::DotDot => "DD",
            TokenKind::Dot => "DO",
            TokenKind::LBrace => "LB",
            TokenKind::RBrace => "RB",
            TokenKind::Comma => "CM",
            TokenKind::LBracket => "LS",
            TokenKind::RBracket => "RS",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PL",
            TokenKind::Minus => "MN",
            TokenKind::Semicolon => "SC",
            TokenKind::Colon => "CL",
            TokenKind::ColonColon => "DC",
            TokenKind::LParen => "LP",
            TokenKind::RParen => "RP",
            TokenKind::As => "AS",
            TokenKind::Each => "EACH",
            TokenKind::Queue => "QUEUE",
            TokenKind::List => "LIST",
            TokenKind::Heap => "HEAP",
            TokenKind::One => "ONE",
            TokenKind::Wone => "WONE",
            TokenKind::For => "FOR",
            TokenKind::Wfor => "WFOR",
            TokenKind::OrderBy => "ORDERBY",
            TokenKind::AndAnd => "AND",
            TokenKind::OrOr => "OR",
            TokenKind::Bang => "NOT",
            TokenKind::In => "IN",
            TokenKind::Rev => "REV",
            TokenKind::EqEq => "OEQ",
            TokenKind::NotEq => "ONQ",
            TokenKind::Lt => "OLT",
            TokenKind::Gt => "OGT",
            TokenKind::LtEq => "OLQ",
            TokenKind::GtEq => "OGQ",
            TokenKind::Key => "KEY",
            TokenKind::Cstr => "CSTR",
            TokenKind::Prop => "PROP",
            TokenKind::VarName => "VNAME",
            TokenKind::VarCardinality => "VCARD",
            TokenKind::CstrName => "CNAME",
            TokenKind::CstrArity => "CARITY",
            TokenKind::PropPriority => "PPRIO",
            TokenKind::PropArity => "PARITY",
            TokenKind::PropPrioDyn => "PPRIOD",
            TokenKind::Any => "ANY",
            TokenKind::Min => "MIN",
            TokenKind::Max => "MAX",
            TokenKind::Sum => "SUM",
            TokenKind::Size => "SIZE",
            TokenKind::MarkerPar => "APAR",
            TokenKind::MarkerParArray => "ARRPAR",
            TokenKind::MarkerVar => "AVAR",
            TokenKind::MarkerVarArray => "ARRVAR",
            TokenKind::MarkerIndex => "INDEX",
            TokenKind::MarkerExpr => "EXPR",
            TokenKind::MarkerAnnotations => "ANNOTATIONS",
            TokenKind::MarkerStruct => "STRUC",
            TokenKind::MarkerStreg => "STREG",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::IntConst => "INT_CONST",
            TokenKind::FloatConst => "FLOAT_CONST",
            TokenKind::Str => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WS",
        }
    }

    /// The channel tokens of this kind are routed to.
    #[inline]
    pub const fn channel(self) -> Channel {
        match self {
            TokenKind::Comment | TokenKind::Whitespace => Channel::Hidden,
            _ => Channel::Default,
        }
    }

    /// Sentinel markers injected by macro expansion.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(
            self,
            TokenKind::MarkerPar
                | TokenKind::MarkerParArray
                | TokenKind::MarkerVar
                | TokenKind::MarkerVarArray
                | TokenKind::MarkerIndex
                | TokenKind::MarkerExpr
                | TokenKind::MarkerAnnotations
                | TokenKind::MarkerStruct
                | TokenKind::MarkerStreg
        )
    }

    /// Kinds whose spelling is an identifier-shaped word (or dotted/spaced
    /// compound of words).
    pub fn is_keyword(self) -> bool {
        self.spelling()
            .and_then(|s| s.bytes().next())
            .is_some_and(|b| b.is_ascii_alphabetic())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.symbolic_name()),
        }
    }
}
