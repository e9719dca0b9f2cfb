//! Lexer for the tapper DSL.
//!
//! Two passes, run in sequence by [`lex`]:
//!
//! 1. [`scan`]: `logos` classifies the source into raw units, which are
//!    translated through a closed kind table into primitive tokens.
//! 2. [`merge`]: a peephole pass recombines fixed windows of primitive
//!    tokens into `||`, `&&`, `[]`, `[map]` and `[N]` tokens.
//!
//! Both passes fail fast with a [`LexError`]; no partial token sequence is
//! ever returned.
//!
//! ```
//! use tapper_ir::TokenKind;
//!
//! let tokens = tapper_lexer::lex("[4]int || [map]")?;
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::ArrayType, TokenKind::Symbol, TokenKind::LogicalOr, TokenKind::MapType]
//! );
//! assert_eq!(tokens[0].int_value(), Some(4));
//! # Ok::<(), tapper_lexer::LexError>(())
//! ```

mod config;
mod lex_error;
mod peephole;
mod raw_token;
mod scanner;

pub use config::{LexerConfig, OperatorSet};
pub use lex_error::{LexError, LexErrorKind};
pub use peephole::{merge, merge_with};
pub use raw_token::RawToken;
pub use scanner::{scan, scan_with};
pub use tapper_ir::{Position, Span, Token, TokenKind, TokenValue};

/// Lex `source` with the core operator table.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with(source, &LexerConfig::default())
}

/// Lex `source`: scan, then merge.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), operators = ?config.operators))]
pub fn lex_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let tokens = scan_with(source, config)?;
    merge_with(tokens, config)
}
