//! Second pass: peephole recombination of primitive tokens.
//!
//! A single left-to-right pass over the primitive tokens. At each cursor
//! position the longest window wins:
//!
//! 1. three tokens: `[map]` or `[<digits>]`
//! 2. two tokens: `||`, `&&`, `[]` (plus `==`, `>=`, `<=` with the
//!    extended operator set)
//! 3. otherwise the token is passed through unchanged
//!
//! Windows compare concatenated token text, so whitespace between the
//! constituents does not matter. A synthesized token takes its position from
//! its first constituent. Emitted tokens are never re-examined, and a
//! window that fails to match never consumes input.

use tapper_ir::{Token, TokenKind};

use crate::{LexError, LexerConfig};

/// Merge primitive tokens with the core operator table.
pub fn merge(tokens: Vec<Token>) -> Result<Vec<Token>, LexError> {
    merge_with(tokens, &LexerConfig::default())
}

/// Merge primitive tokens into composite operators and type prefixes.
///
/// Fails on the first `[N]` window whose size is zero or unparsable.
#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len()))]
pub fn merge_with(tokens: Vec<Token>, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if let Some(window) = tokens.get(i..i + 3) {
            if let Some(token) = merge_three(window)? {
                tracing::trace!(?token, "merged three-token window");
                result.push(token);
                i += 3;
                continue;
            }
        }

        if let Some(window) = tokens.get(i..i + 2) {
            if let Some(token) = merge_two(window, config) {
                tracing::trace!(?token, "merged two-token window");
                result.push(token);
                i += 2;
                continue;
            }
        }

        result.push(tokens[i].clone());
        i += 1;
    }

    tracing::debug!(count = result.len(), "merge complete");
    Ok(result)
}

/// Try the three-token window rules.
fn merge_three(window: &[Token]) -> Result<Option<Token>, LexError> {
    let text = concat(window);

    if text == "[map]" {
        return Ok(Some(synthesize(window, TokenKind::MapType, text)));
    }

    let Some(digits) = array_size_digits(&text) else {
        return Ok(None);
    };

    let first = &window[0];
    let span = first.span.merge(window[window.len() - 1].span);
    match digits.parse::<u64>() {
        Ok(size) if size > 0 => Ok(Some(Token::array_type(
            text,
            size,
            span,
            first.position(),
        ))),
        _ => {
            tracing::debug!(position = %first.position(), %text, "invalid array size");
            Err(LexError::invalid_array_size(text, span, first.position()))
        }
    }
}

/// Try the two-token window rules.
fn merge_two(window: &[Token], config: &LexerConfig) -> Option<Token> {
    let text = concat(window);
    let kind = match text.as_str() {
        "||" => TokenKind::LogicalOr,
        "&&" => TokenKind::LogicalAnd,
        "[]" => TokenKind::SliceType,
        "==" if config.extended_operators() => TokenKind::Equals,
        ">=" if config.extended_operators() => TokenKind::GreaterOrEqual,
        "<=" if config.extended_operators() => TokenKind::LessOrEqual,
        _ => return None,
    };
    Some(synthesize(window, kind, text))
}

/// Match the whole of `text` against `[<digits>]`, returning the digit run.
fn array_size_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix('[')?.strip_suffix(']')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

fn concat(window: &[Token]) -> String {
    window.iter().map(|t| t.text.as_str()).collect()
}

/// Build a value-less token covering `window`.
fn synthesize(window: &[Token], kind: TokenKind, text: String) -> Token {
    let first = &window[0];
    let span = first.span.merge(window[window.len() - 1].span);
    Token::new(kind, text, span, first.position())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
