use thiserror::Error;

use crate::interpreter::token::{KindSet, TokenKind};

/// Represents all errors that can occur while validating the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A token whose kind the grammar does not allow at this point.
    #[error("Syntax error at offset {offset} on line {line}: unexpected token {kind}, expecting \
             {expected}.")]
    UnexpectedToken {
        /// The kind of the offending token.
        kind:     TokenKind,
        /// The kinds that would have been accepted.
        expected: KindSet,
        /// The column of the offending token.
        offset:   usize,
        /// The source line of the offending token.
        line:     usize,
    },
    /// The input ended while the grammar still required more tokens.
    #[error("Syntax error at offset {offset} on line {line}: unexpected end, expecting {expected}.")]
    UnexpectedEnd {
        /// The kinds that would have been accepted.
        expected: KindSet,
        /// The column just past the last token.
        offset:   usize,
        /// The line of the last token.
        line:     usize,
    },
}

impl SyntaxError {
    /// The column where the error occurred.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. } | Self::UnexpectedEnd { offset, .. } => *offset,
        }
    }

    /// The line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::UnexpectedEnd { line, .. } => *line,
        }
    }

    /// The kinds that would have been accepted.
    #[must_use]
    pub const fn expected(&self) -> KindSet {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEnd { expected, .. } => {
                *expected
            },
        }
    }
}
