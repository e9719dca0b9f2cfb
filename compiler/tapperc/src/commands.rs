//! CLI command implementations.

mod lex;

pub use lex::{format_error, format_tokens, lex_file, parse_lex_options, LexOptions};
