//! Tapper IR - shared vocabulary for the tapper DSL.
//!
//! This crate contains the value types that flow between the lexer and any
//! downstream consumer:
//! - Spans and 1-based positions for source locations
//! - `Token` and the closed `TokenKind` set produced by the lexer
//! - `TypeNode`, the tree used to describe typed data shapes
//!
//! Everything here is an immutable plain value: `Clone`, `Eq`, `Hash`,
//! `Debug`, and `Send + Sync`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod line_table;
mod span;
mod token;
mod type_node;

pub use line_table::LineOffsetTable;
pub use span::{Position, Span, SpanError};
pub use token::{Token, TokenKind, TokenValue};
pub use type_node::{StructFields, TypeNode};
