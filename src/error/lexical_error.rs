use thiserror::Error;

use crate::interpreter::token::KindSet;

/// Represents all errors that can occur while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character that is not part of the grammar.
    #[error("Lexical error at offset {offset} on line {line}: unknown token '{token}'.")]
    UnknownToken {
        /// The offending text.
        token:  String,
        /// The column where the error occurred.
        offset: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A known character in a place it cannot appear, such as a second `.`
    /// or a non-digit after a decimal point.
    #[error("Lexical error at offset {offset} on line {line}: unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending text.
        token:  String,
        /// The column where the error occurred.
        offset: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `)` without a matching `(`.
    #[error("Lexical error at offset {offset} on line {line}: unexpected token ')'.")]
    UnexpectedCloseBrace {
        /// The column where the error occurred.
        offset: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The input ended in the middle of a decimal or an open group.
    #[error("Lexical error at offset {offset} on line {line}: unexpected end, expecting {expected}.")]
    UnexpectedEnd {
        /// What would have completed the input.
        expected: KindSet,
        /// The column just past the end of the input.
        offset:   usize,
        /// The last line of the input.
        line:     usize,
    },
}

impl LexicalError {
    /// The column where the error occurred.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownToken { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedCloseBrace { offset, .. }
            | Self::UnexpectedEnd { offset, .. } => *offset,
        }
    }

    /// The line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownToken { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedCloseBrace { line, .. }
            | Self::UnexpectedEnd { line, .. } => *line,
        }
    }

    /// The kinds that would have completed the input, for end-of-input errors.
    #[must_use]
    pub const fn expected(&self) -> Option<KindSet> {
        match self {
            Self::UnexpectedEnd { expected, .. } => Some(*expected),
            Self::UnknownToken { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedCloseBrace { .. } => None,
        }
    }
}
