//! Raw lexical units produced by `logos`.
//!
//! This layer only classifies characters: identifiers, numeric literals,
//! quoted literals, comments and single punctuation characters. Mapping a
//! unit to a [`TokenKind`](tapper_ir::TokenKind) (and rejecting the units
//! the DSL has no kind for) happens in the scanner.

use std::fmt;

use logos::{Lexer, Logos};

/// Raw token from logos (before kind translation).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    /// `/* ... */`, not nested. An unterminated comment is an error unit
    /// covering the rest of the input.
    #[token("/*", block_comment)]
    BlockComment,

    /// Unicode letters, decimal digits and `_`; never starts with a digit.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    DecInt,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    HexInt,

    #[regex(r"0[oO][0-7_]+")]
    OctInt,

    #[regex(r"0[bB][01_]+")]
    BinInt,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r"'([^'\\\n\r]|\\.)'")]
    Char,

    /// Any single ASCII punctuation character.
    #[regex(r"[!-/:-@\[-\^`{-~]", |lex| lex.slice().chars().next())]
    Punct(char),
}

/// Consume a block comment body up to and including the closing `*/`.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

impl RawToken {
    /// Whether the unit is a comment, which never reaches the token stream.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawToken::LineComment | RawToken::BlockComment)
    }

    /// Radix of an integer literal unit, `None` for everything else.
    pub fn int_radix(self) -> Option<u32> {
        match self {
            RawToken::DecInt => Some(10),
            RawToken::HexInt => Some(16),
            RawToken::OctInt => Some(8),
            RawToken::BinInt => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::LineComment | RawToken::BlockComment => f.write_str("comment"),
            RawToken::Ident => f.write_str("identifier"),
            RawToken::DecInt | RawToken::HexInt | RawToken::OctInt | RawToken::BinInt => {
                f.write_str("integer literal")
            }
            RawToken::Float => f.write_str("float literal"),
            RawToken::String | RawToken::RawString => f.write_str("string literal"),
            RawToken::Char => f.write_str("char literal"),
            RawToken::Punct(c) => write!(f, "`{c}`"),
        }
    }
}
