//! Lexer configuration.

/// Which operator table the lexer runs with.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum OperatorSet {
    /// The DSL's core table: `( ) * + < > [ ] |`, identifiers and integers.
    /// `&&` is not reachable because `&` is not in the table.
    #[default]
    Core,
    /// Core plus `- / % ^ & =`, and the merged `==`, `>=`, `<=`, `&&`.
    Extended,
}

/// Options for [`scan_with`](crate::scan_with), [`merge_with`](crate::merge_with)
/// and [`lex_with`](crate::lex_with).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    pub operators: OperatorSet,
}

impl LexerConfig {
    /// Configuration using the extended operator table.
    pub const fn extended() -> Self {
        LexerConfig {
            operators: OperatorSet::Extended,
        }
    }

    #[inline]
    pub(crate) fn extended_operators(&self) -> bool {
        self.operators == OperatorSet::Extended
    }
}
