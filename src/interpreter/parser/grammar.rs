use crate::{
    error::SyntaxError,
    interpreter::{
        parser::core::ParseResult,
        token::{KindSet, Position, Token, TokenKind},
    },
};

/// Checks that a token sequence follows the expression grammar.
///
/// The grammar is a successor table: every kind names the set of kinds that
/// may follow it. An operand or a `)` is followed by a binary operator (or a
/// `)` while a group is open); everything else is followed by something that
/// starts an operand. Whitespace is skipped.
///
/// # Errors
/// - [`SyntaxError::UnexpectedToken`] for the first token outside the
///   expected set.
/// - [`SyntaxError::UnexpectedEnd`] if the sequence ends while an operand or a
///   `)` is still required. Empty input is reported this way too.
///
/// # Examples
/// ```
/// use opprec::interpreter::{lexer::tokenize, parser::grammar::validate};
///
/// assert!(validate(&tokenize("(1 + 2) * 3").unwrap()).is_ok());
/// assert!(validate(&tokenize("1 2").unwrap()).is_err());
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    let mut expected = KindSet::OPERAND_START;
    let mut depth = 0usize;
    let mut last: Option<&Token> = None;

    for token in tokens.iter().filter(|token| !token.is_whitespace()) {
        if !expected.contains(token.kind) {
            return Err(SyntaxError::UnexpectedToken { kind: token.kind,
                                                      expected,
                                                      offset: token.offset,
                                                      line: token.line });
        }
        match token.kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
        expected = successors(token.kind, depth);
        last = Some(token);
    }

    let end = last.map_or(Position::START, Token::end);
    if expected.contains(TokenKind::Number) {
        return Err(SyntaxError::UnexpectedEnd { expected,
                                                offset: end.offset,
                                                line: end.line });
    }
    if depth > 0 {
        return Err(SyntaxError::UnexpectedEnd { expected: KindSet::of(&[TokenKind::CloseBrace]),
                                                offset:   end.offset,
                                                line:     end.line, });
    }
    Ok(())
}

/// The kinds allowed after a token of `kind`, given the group depth after
/// that token.
fn successors(kind: TokenKind, depth: usize) -> KindSet {
    match kind {
        TokenKind::Number | TokenKind::Decimal | TokenKind::CloseBrace => {
            if depth > 0 {
                KindSet::BINARY_OPERATORS.with(TokenKind::CloseBrace)
            } else {
                KindSet::BINARY_OPERATORS
            }
        },
        TokenKind::OpenBrace
        | TokenKind::Add
        | TokenKind::Sub
        | TokenKind::Neg
        | TokenKind::Mul
        | TokenKind::Mod
        | TokenKind::Div
        | TokenKind::Exp => KindSet::OPERAND_START,
        // Never consulted: whitespace is filtered before the table is used.
        TokenKind::Whitespace => KindSet::empty(),
    }
}
