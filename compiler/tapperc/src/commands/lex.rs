//! `tapper lex`: tokenize a file and print the tokens.

use std::fmt::Write as _;
use std::io::Read;

use tapper_ir::Token;
use tapper_lexer::{LexError, LexerConfig, OperatorSet};

/// Options accepted by `tapper lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Source path, `-` for stdin.
    pub path: Option<String>,
    pub config: LexerConfig,
}

/// Parse the arguments following `lex`.
///
/// Unknown flags are reported as an error message.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        match arg.as_str() {
            "--extended" | "-e" => options.config.operators = OperatorSet::Extended,
            "-" => options.path = Some(arg.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ if options.path.is_none() => options.path = Some(arg.clone()),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
    }
    Ok(options)
}

/// Lex the file named in `options` and print the tokens.
///
/// Returns the process exit code.
pub fn lex_file(options: &LexOptions) -> i32 {
    let path = options.path.as_deref().unwrap_or("-");
    tracing::debug!(path, operators = ?options.config.operators, "lexing");
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read '{path}': {err}");
            return 1;
        }
    };

    match tapper_lexer::lex_with(&source, &options.config) {
        Ok(tokens) => {
            print!("{}", format_tokens(path, &tokens));
            0
        }
        Err(err) => {
            eprint!("{}", format_error(path, &err));
            1
        }
    }
}

/// Render a token listing, one token per line.
pub fn format_tokens(path: &str, tokens: &[Token]) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for tok in tokens {
        let _ = writeln!(out, "  {tok:?}");
    }
    out
}

/// Render a lexer error with its suggestions.
pub fn format_error(path: &str, err: &LexError) -> String {
    let mut out = format!("error: {path}:{err}\n");
    for suggestion in &err.suggestions {
        let _ = writeln!(out, "  help: {suggestion}");
    }
    out
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
