//! First pass: raw units to primitive tokens.
//!
//! Wraps the `logos` raw lexer, translates every unit through the closed
//! kind table, and attaches byte spans and 1-based positions. Comments and
//! whitespace never reach the output; no terminator token is appended.

use std::num::IntErrorKind;

use logos::Logos;
use tapper_ir::{LineOffsetTable, Span, Token, TokenKind, TokenValue};

use crate::{LexError, LexerConfig, RawToken};

/// Scan `source` into primitive tokens with the core operator table.
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    scan_with(source, &LexerConfig::default())
}

/// Scan `source` into primitive tokens.
///
/// Fails on the first unit the kind table has no entry for; no tokens are
/// returned in that case.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let lines = LineOffsetTable::build(source);
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::try_from_range(logos.span()).map_err(LexError::source_too_large)?;
        let position = lines.position(source, span.start);

        let raw = match result {
            Ok(raw) if raw.is_trivia() => continue,
            Ok(raw) => raw,
            Err(()) if logos.slice().starts_with("/*") => {
                tracing::debug!(%position, "unterminated block comment");
                return Err(LexError::unterminated_comment(span, position));
            }
            Err(()) => {
                let text = unclassified_text(source, span);
                tracing::debug!(%position, ?text, "unclassified character");
                return Err(LexError::unknown_token(None, text, span, position));
            }
        };

        let slice = logos.slice();
        let Some(kind) = convert_kind(raw, config) else {
            tracing::debug!(%position, %raw, "raw unit has no token kind");
            return Err(LexError::unknown_token(Some(raw), slice, span, position));
        };

        let token = if kind == TokenKind::Number {
            let value = decode_int(raw, slice)
                .ok_or_else(|| LexError::invalid_number(slice, span, position))?;
            Token::number(slice, value, span, position)
        } else {
            Token::new(kind, slice, span, position)
        };
        tokens.push(token);
    }

    tracing::debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}

/// Translate a raw unit into a token kind.
///
/// Returns `None` for units outside the active table.
fn convert_kind(raw: RawToken, config: &LexerConfig) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Ident => TokenKind::Symbol,
        RawToken::DecInt | RawToken::HexInt | RawToken::OctInt | RawToken::BinInt => {
            TokenKind::Number
        }
        RawToken::Punct('(') => TokenKind::LeftParen,
        RawToken::Punct(')') => TokenKind::RightParen,
        RawToken::Punct('*') => TokenKind::Multiply,
        RawToken::Punct('+') => TokenKind::Add,
        RawToken::Punct('<') => TokenKind::LessThan,
        RawToken::Punct('>') => TokenKind::GreaterThan,
        RawToken::Punct('[') => TokenKind::LeftBracket,
        RawToken::Punct(']') => TokenKind::RightBracket,
        RawToken::Punct('|') => TokenKind::BitwiseOr,
        RawToken::Punct(c) if config.extended_operators() => return extended_kind(c),
        _ => return None,
    };
    Some(kind)
}

/// Single-character operators only present in the extended table.
fn extended_kind(c: char) -> Option<TokenKind> {
    match c {
        '-' => Some(TokenKind::Subtract),
        '/' => Some(TokenKind::Divide),
        '%' => Some(TokenKind::Mod),
        '^' => Some(TokenKind::Exponent),
        '&' => Some(TokenKind::BitwiseAnd),
        '=' => Some(TokenKind::Equals),
        _ => None,
    }
}

/// Decode an integer literal, honoring radix prefixes and `_` separators.
///
/// Literals wider than `u64` decode to [`TokenValue::Overflow`]. Returns
/// `None` if the literal has no digits.
fn decode_int(raw: RawToken, slice: &str) -> Option<TokenValue> {
    let radix = raw.int_radix()?;
    let digits = if radix == 10 { slice } else { slice.get(2..)? };
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    match u64::from_str_radix(&digits, radix) {
        Ok(v) => Some(TokenValue::Int(v)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(TokenValue::Overflow),
        Err(_) => None,
    }
}

/// Text of the first character at `span`, for error reporting.
fn unclassified_text(source: &str, span: Span) -> String {
    source
        .get(span.start as usize..)
        .and_then(|rest| rest.chars().next())
        .map(String::from)
        .unwrap_or_default()
}
