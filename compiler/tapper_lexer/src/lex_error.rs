//! Lexer error types.
//!
//! Errors follow a WHERE + WHAT + HOW shape:
//! - WHERE: `span` and `position` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestions` with actionable hints for the DSL author
//!
//! Both lexer passes fail fast: the first error aborts the pass and no
//! partial token sequence is returned.

use tapper_ir::{Position, Span, SpanError};
use thiserror::Error;

use crate::RawToken;

/// A lexer error with enough context to report a DSL syntax error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE, as a byte range.
    pub span: Span,
    /// WHERE, as a 1-based line/column.
    pub position: Position,
    /// HOW to fix.
    pub suggestions: Vec<String>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// The raw scanner produced a unit the kind table has no entry for.
    ///
    /// `raw` is `None` when the character could not be classified at all
    /// (control characters, non-ASCII).
    #[error("unknown token {text:?}{}", describe(.raw.as_ref()))]
    UnknownToken { raw: Option<RawToken>, text: String },

    /// A radix-prefixed integer literal with no digits (`0x_`).
    #[error("invalid number {text:?}: no digits after the radix prefix")]
    InvalidNumber { text: String },

    /// A `/*` with no closing `*/`.
    #[error("block comment is not terminated")]
    UnterminatedComment,

    /// A `[N]` window whose size is zero or does not fit in `u64`.
    #[error("invalid array size in {text:?}")]
    InvalidArraySize { text: String },

    /// Source longer than the span representation allows.
    #[error("source too large: {0}")]
    SourceTooLarge(SpanError),
}

fn describe(raw: Option<&RawToken>) -> String {
    raw.map_or_else(String::new, |raw| format!(" ({raw})"))
}

impl LexError {
    /// Create an unknown-token error.
    #[cold]
    pub fn unknown_token(
        raw: Option<RawToken>,
        text: impl Into<String>,
        span: Span,
        position: Position,
    ) -> Self {
        let suggestions = match raw {
            Some(RawToken::Float) => vec!["only integer literals are supported".to_string()],
            Some(RawToken::String | RawToken::RawString | RawToken::Char) => {
                vec!["quoted literals are not part of the DSL".to_string()]
            }
            Some(RawToken::Punct('&' | '-' | '/' | '%' | '^' | '=')) => {
                vec!["this operator requires the extended operator set".to_string()]
            }
            _ => Vec::new(),
        };
        Self {
            kind: LexErrorKind::UnknownToken {
                raw,
                text: text.into(),
            },
            span,
            position,
            suggestions,
        }
    }

    /// Create a malformed integer literal error.
    #[cold]
    pub fn invalid_number(text: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind: LexErrorKind::InvalidNumber { text: text.into() },
            span,
            position,
            suggestions: vec!["write at least one digit, e.g. `0x0`".to_string()],
        }
    }

    /// Create an unterminated block comment error.
    #[cold]
    pub fn unterminated_comment(span: Span, position: Position) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedComment,
            span,
            position,
            suggestions: vec!["close the comment with `*/`".to_string()],
        }
    }

    /// Create an invalid array size error.
    #[cold]
    pub fn invalid_array_size(text: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind: LexErrorKind::InvalidArraySize { text: text.into() },
            span,
            position,
            suggestions: vec![format!("array sizes must be between 1 and {}", u64::MAX)],
        }
    }

    /// Create a source-too-large error.
    #[cold]
    pub fn source_too_large(err: SpanError) -> Self {
        Self {
            kind: LexErrorKind::SourceTooLarge(err),
            span: Span::DUMMY,
            position: Position::START,
            suggestions: Vec::new(),
        }
    }
}
