//! Lexer output: positioned, typed tokens.

use std::fmt;

use crate::{Position, Span};

/// A lexical unit of the tapper DSL.
///
/// `text` is the exact source slice for primitive tokens and the
/// concatenation of the constituents' text for tokens synthesized by the
/// peephole merger. `line`/`column` always point at the first character of
/// the (first constituent) token.
///
/// # Invariant
///
/// `value()` is `Some` if and only if `kind()` is [`TokenKind::Number`] or
/// [`TokenKind::ArrayType`]. `kind` and `value` are private and set only by
/// the constructors: `new` builds value-less tokens, `number` and
/// `array_type` are the only ways to attach a payload.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub text: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
    kind: TokenKind,
    value: Option<TokenValue>,
}

impl Token {
    /// Create a token that carries no decoded value.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is a value-carrying kind (`Number`, `ArrayType`);
    /// use [`Token::number`] or [`Token::array_type`] for those.
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, pos: Position) -> Self {
        assert!(
            !kind.carries_value(),
            "{kind:?} tokens must be built with a value"
        );
        Token {
            text: text.into(),
            span,
            line: pos.line,
            column: pos.column,
            kind,
            value: None,
        }
    }

    /// Create a numeric literal token with its decoded value.
    #[inline]
    pub fn number(text: impl Into<String>, value: TokenValue, span: Span, pos: Position) -> Self {
        Token {
            text: text.into(),
            span,
            line: pos.line,
            column: pos.column,
            kind: TokenKind::Number,
            value: Some(value),
        }
    }

    /// Create a fixed-size array prefix token (`[N]`) with its size.
    #[inline]
    pub fn array_type(text: impl Into<String>, size: u64, span: Span, pos: Position) -> Self {
        Token {
            text: text.into(),
            span,
            line: pos.line,
            column: pos.column,
            kind: TokenKind::ArrayType,
            value: Some(TokenValue::Int(size)),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Decoded payload: the literal value of a `Number`, the size of an
    /// `ArrayType`, `None` for every other kind.
    #[inline]
    pub fn value(&self) -> Option<TokenValue> {
        self.value
    }

    /// The payload as an integer, if it fits in `u64`.
    #[inline]
    pub fn int_value(&self) -> Option<u64> {
        match self.value? {
            TokenValue::Int(v) => Some(v),
            TokenValue::Overflow => None,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {} {:?}",
            self.line,
            self.column,
            self.kind.name(),
            self.text
        )?;
        if let Some(value) = self.value {
            write!(f, " value=<{value}>")?;
        }
        Ok(())
    }
}

/// Decoded payload of a `Number` or `ArrayType` token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenValue {
    Int(u64),
    /// Integer literal too wide for `u64`. The literal itself is still a
    /// valid `Number`; its digits are kept in the token text.
    Overflow,
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(v) => write!(f, "{v}"),
            TokenValue::Overflow => f.write_str("overflow"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Token kinds for the tapper DSL.
///
/// The set is closed. The default scanner table only produces a subset of
/// it; the remaining operator kinds are reachable through the extended
/// operator set of the lexer, except `NotEquals`, which no table produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Relational ===
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,

    // === Arithmetic ===
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Exponent,
    /// `%`
    Mod,

    // === Bitwise / logical ===
    /// `|`
    BitwiseOr,
    /// `&`
    BitwiseAnd,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,

    // === Delimiters ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,

    // === Atoms ===
    /// Identifier.
    Symbol,
    /// Integer literal; carries its decoded value.
    Number,

    // === Composite type prefixes ===
    /// `[]`
    SliceType,
    /// `[N]`; carries the size.
    ArrayType,
    /// `[map]`
    MapType,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::GreaterThan,
        TokenKind::GreaterOrEqual,
        TokenKind::LessThan,
        TokenKind::LessOrEqual,
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Exponent,
        TokenKind::Mod,
        TokenKind::BitwiseOr,
        TokenKind::BitwiseAnd,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Symbol,
        TokenKind::Number,
        TokenKind::SliceType,
        TokenKind::ArrayType,
        TokenKind::MapType,
    ];

    /// Stable name of the kind, used in debug output and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Equals => "Equals",
            TokenKind::NotEquals => "NotEquals",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::GreaterOrEqual => "GreaterOrEqual",
            TokenKind::LessThan => "LessThan",
            TokenKind::LessOrEqual => "LessOrEqual",
            TokenKind::Add => "Add",
            TokenKind::Subtract => "Subtract",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Exponent => "Exponent",
            TokenKind::Mod => "Mod",
            TokenKind::BitwiseOr => "BitwiseOr",
            TokenKind::BitwiseAnd => "BitwiseAnd",
            TokenKind::LogicalAnd => "LogicalAnd",
            TokenKind::LogicalOr => "LogicalOr",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Symbol => "Symbol",
            TokenKind::Number => "Number",
            TokenKind::SliceType => "SliceType",
            TokenKind::ArrayType => "ArrayType",
            TokenKind::MapType => "MapType",
        }
    }

    /// The fixed source text of the kind, if it has one.
    ///
    /// Returns `None` for `Symbol`, `Number` and `ArrayType`, whose text
    /// varies.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Equals => Some("=="),
            TokenKind::NotEquals => Some("!="),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::GreaterOrEqual => Some(">="),
            TokenKind::LessThan => Some("<"),
            TokenKind::LessOrEqual => Some("<="),
            TokenKind::Add => Some("+"),
            TokenKind::Subtract => Some("-"),
            TokenKind::Multiply => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::Exponent => Some("^"),
            TokenKind::Mod => Some("%"),
            TokenKind::BitwiseOr => Some("|"),
            TokenKind::BitwiseAnd => Some("&"),
            TokenKind::LogicalAnd => Some("&&"),
            TokenKind::LogicalOr => Some("||"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::SliceType => Some("[]"),
            TokenKind::MapType => Some("[map]"),
            TokenKind::Symbol | TokenKind::Number | TokenKind::ArrayType => None,
        }
    }

    /// Whether tokens of this kind carry a decoded value.
    #[inline]
    pub const fn carries_value(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::ArrayType)
    }

    /// Whether this kind is one of the composite type prefixes
    /// (`[]`, `[N]`, `[map]`).
    #[inline]
    pub const fn is_type_prefix(self) -> bool {
        matches!(
            self,
            TokenKind::SliceType | TokenKind::ArrayType | TokenKind::MapType
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
