use std::fmt;

use crate::{
    error::SyntaxError,
    interpreter::{
        parser::{grammar::validate, shunting::to_postfix},
        token::Token,
    },
};

/// Result type used by the validator.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// A token sequence in postfix (Reverse Polish) order, ready for execution.
///
/// Holds operands and operators only. It is only built by the converter, so
/// every sequence an executor sees reduces to exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixSequence {
    tokens: Vec<Token>,
}

impl PostfixSequence {
    pub(in crate::interpreter) const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in execution order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the tokens in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a PostfixSequence {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexemes: Vec<&str> = self.tokens.iter().map(|token| token.lexeme.as_str()).collect();
        f.write_str(&lexemes.join(" "))
    }
}

/// Validates a scanned token sequence and converts it to postfix order.
///
/// # Errors
/// Returns a [`SyntaxError`] if the sequence does not follow the grammar; see
/// [`validate`].
///
/// # Examples
/// ```
/// use opprec::interpreter::{lexer::tokenize, parser::core::lex};
///
/// let postfix = lex(&tokenize("1 + 3 * 5").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "1 3 5 * +");
/// ```
pub fn lex(tokens: &[Token]) -> ParseResult<PostfixSequence> {
    validate(tokens)?;
    let postfix = to_postfix(tokens);
    log::debug!("postfix: {postfix}");
    Ok(postfix)
}
