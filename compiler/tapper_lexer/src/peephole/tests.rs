use super::*;
use crate::{scan, scan_with, LexErrorKind};
use pretty_assertions::assert_eq;
use tapper_ir::{Position, Span, TokenValue};

/// Helper: build primitive tokens laid out on one line, separated by a
/// single space, without going through the scanner.
fn primitives(texts: &[&str]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0u32;
    for text in texts {
        let len = u32::try_from(text.len()).unwrap();
        let span = Span::new(offset, offset + len);
        let pos = Position::new(1, offset + 1);
        let kind = match *text {
            "[" => TokenKind::LeftBracket,
            "]" => TokenKind::RightBracket,
            "|" => TokenKind::BitwiseOr,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            _ => TokenKind::Symbol,
        };
        let token = if text.bytes().all(|b| b.is_ascii_digit()) {
            let value = text.parse().map_or(TokenValue::Overflow, TokenValue::Int);
            Token::number(*text, value, span, pos)
        } else {
            Token::new(kind, *text, span, pos)
        };
        tokens.push(token);
        offset += len + 1;
    }
    tokens
}

/// Helper: scan then merge with the core table.
fn lex_core(source: &str) -> Vec<Token> {
    let tokens = scan(source).unwrap_or_else(|err| panic!("scan of {source:?} failed: {err}"));
    merge(tokens).unwrap_or_else(|err| panic!("merge of {source:?} failed: {err}"))
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

// === Three-token windows ===

#[test]
fn map_prefix() {
    let merged = merge(primitives(&["[", "map", "]"])).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].kind(), TokenKind::MapType);
    assert_eq!(merged[0].text, "[map]");
    assert_eq!(merged[0].value(), None);
}

#[test]
fn array_prefix_decodes_size() {
    let merged = merge(primitives(&["[", "42", "]"])).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].kind(), TokenKind::ArrayType);
    assert_eq!(merged[0].text, "[42]");
    assert_eq!(merged[0].int_value(), Some(42));
}

#[test]
fn array_size_zero_fails() {
    let tokens = primitives(&["x", "[", "0", "]", "int"]);
    let err = merge(tokens).unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidArraySize {
            text: "[0]".to_string()
        }
    );
    assert_eq!(err.position, Position::new(1, 3));
}

#[test]
fn array_size_too_wide_fails() {
    let tokens = primitives(&["[", "99999999999999999999", "]"]);
    assert_eq!(tokens[1].kind(), TokenKind::Number);
    let err = merge(tokens).unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidArraySize {
            text: "[99999999999999999999]".to_string()
        }
    );
    assert_eq!(err.span, Span::new(0, 24));
}

#[test]
fn scanned_wide_array_size_fails_in_merge() {
    let tokens = scan("[99999999999999999999]int").unwrap();
    let err = merge(tokens).unwrap_err();
    assert!(matches!(err.kind, LexErrorKind::InvalidArraySize { .. }));
    assert_eq!(err.position, Position::new(1, 1));
}

#[test]
fn array_size_with_leading_zeros() {
    let merged = merge(primitives(&["[", "007", "]"])).unwrap();
    assert_eq!(merged[0].int_value(), Some(7));
}

#[test]
fn partial_window_falls_through_without_skipping() {
    let merged = merge(primitives(&["[", "a", "]"])).unwrap();
    assert_eq!(
        kinds(&merged),
        vec![
            TokenKind::LeftBracket,
            TokenKind::Symbol,
            TokenKind::RightBracket
        ]
    );
}

#[test]
fn non_decimal_literal_is_not_an_array_size() {
    let merged = lex_core("[0x10]int");
    assert_eq!(
        kinds(&merged),
        vec![
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::RightBracket,
            TokenKind::Symbol,
        ]
    );
}

// === Two-token windows ===

#[test]
fn logical_or() {
    let merged = merge(primitives(&["|", "|"])).unwrap();
    assert_eq!(kinds(&merged), vec![TokenKind::LogicalOr]);
    assert_eq!(merged[0].text, "||");
}

#[test]
fn logical_and_from_hand_built_tokens() {
    let tokens = primitives(&["&", "&"]);
    let merged = merge(tokens).unwrap();
    assert_eq!(kinds(&merged), vec![TokenKind::LogicalAnd]);
}

#[test]
fn slice_prefix() {
    let merged = lex_core("[]int");
    assert_eq!(kinds(&merged), vec![TokenKind::SliceType, TokenKind::Symbol]);
    assert_eq!(merged[0].value(), None);
}

#[test]
fn three_window_takes_priority_over_two() {
    // `[` `]` would form `[]`, but `[` `5` `]` matches first at position 0.
    let merged = lex_core("[5]]");
    assert_eq!(
        kinds(&merged),
        vec![TokenKind::ArrayType, TokenKind::RightBracket]
    );
}

#[test]
fn slice_inside_brackets() {
    let merged = lex_core("[[]]");
    assert_eq!(
        kinds(&merged),
        vec![
            TokenKind::LeftBracket,
            TokenKind::SliceType,
            TokenKind::RightBracket
        ]
    );
}

#[test]
fn odd_pipe_run() {
    let merged = lex_core("a ||| b");
    assert_eq!(
        kinds(&merged),
        vec![
            TokenKind::Symbol,
            TokenKind::LogicalOr,
            TokenKind::BitwiseOr,
            TokenKind::Symbol
        ]
    );
}

#[test]
fn whitespace_between_constituents_is_ignored() {
    let merged = lex_core("a | | b [ 3 ] c");
    assert_eq!(
        kinds(&merged),
        vec![
            TokenKind::Symbol,
            TokenKind::LogicalOr,
            TokenKind::Symbol,
            TokenKind::ArrayType,
            TokenKind::Symbol,
        ]
    );
    assert_eq!(merged[3].text, "[3]");
    assert_eq!(merged[3].int_value(), Some(3));
}

// === Extended table ===

#[test]
fn extended_comparisons() {
    let config = LexerConfig::extended();
    let tokens = scan_with("a == b >= c <= d && e", &config).unwrap();
    let merged = merge_with(tokens, &config).unwrap();
    let ops: Vec<TokenKind> = kinds(&merged)
        .into_iter()
        .filter(|k| *k != TokenKind::Symbol)
        .collect();
    assert_eq!(
        ops,
        vec![
            TokenKind::Equals,
            TokenKind::GreaterOrEqual,
            TokenKind::LessOrEqual,
            TokenKind::LogicalAnd,
        ]
    );
}

#[test]
fn core_table_does_not_merge_comparisons() {
    let tokens = vec![
        Token::new(TokenKind::GreaterThan, ">", Span::new(0, 1), Position::new(1, 1)),
        Token::new(TokenKind::Equals, "=", Span::new(1, 2), Position::new(1, 2)),
    ];
    let merged = merge(tokens).unwrap();
    assert_eq!(
        kinds(&merged),
        vec![TokenKind::GreaterThan, TokenKind::Equals]
    );
}

// === Positions and spans ===

#[test]
fn synthesized_tokens_keep_first_position() {
    let merged = lex_core("x\n  [map] [16]\n  ||");
    let summary: Vec<(TokenKind, u32, u32)> =
        merged.iter().map(|t| (t.kind(), t.line, t.column)).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Symbol, 1, 1),
            (TokenKind::MapType, 2, 3),
            (TokenKind::ArrayType, 2, 9),
            (TokenKind::LogicalOr, 3, 3),
        ]
    );
}

#[test]
fn synthesized_span_covers_constituents() {
    let merged = lex_core("[ map ]");
    assert_eq!(merged[0].span, Span::new(0, 7));
}

// === Pass properties ===

#[test]
fn empty_input() {
    assert_eq!(merge(Vec::new()), Ok(Vec::new()));
}

#[test]
fn no_transitive_merging() {
    let once = lex_core("[[5]] [ [] ] | || [map]");
    let twice = merge(once.clone()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn unmatched_tokens_pass_through_unchanged() {
    let tokens = lex_core("(a + b) * c");
    let merged = merge(tokens.clone()).unwrap();
    assert_eq!(merged, tokens);
}
