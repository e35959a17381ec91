use logos::Logos;

use crate::{
    error::LexicalError,
    interpreter::token::{KindSet, Position, Token, TokenKind},
};

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexicalError>;

/// Raw lexemes recognized by the `logos` state machine.
///
/// This is a finer classification than [`TokenKind`]: it separates the
/// malformed decimal shapes so the scanner can report them precisely, and it
/// does not yet distinguish unary from binary minus.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = Position)]
enum Lexeme {
    /// `3.14`
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,
    /// `3.` with no fractional digits.
    #[regex(r"[0-9]+\.")]
    TrailingDot,
    /// `42`
    #[regex(r"[0-9]+")]
    Number,
    /// A `.` that does not follow a number.
    #[token(".")]
    Dot,
    /// Spaces, tabs, carriage returns and line feeds.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    /// `(`
    #[token("(")]
    OpenBrace,
    /// `)`
    #[token(")")]
    CloseBrace,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, unary or binary depending on what precedes it.
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `%`
    #[token("%")]
    Percent,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
}

/// Scans `source` into an ordered list of tokens.
///
/// Whitespace is kept as [`TokenKind::Whitespace`] tokens so positions of the
/// original text survive; later phases skip them. A `-` becomes
/// [`TokenKind::Neg`] when nothing but whitespace, an operator or an open
/// brace precedes it, and [`TokenKind::Sub`] otherwise.
///
/// # Errors
/// Returns a [`LexicalError`] for unknown characters, a `.` that is not
/// directly between digits, a `)` with no open group, or input that ends with
/// a group still open.
///
/// # Examples
/// ```
/// use opprec::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<_> = tokenize("-2 - 1.5").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Neg,
///             TokenKind::Number,
///             TokenKind::Whitespace,
///             TokenKind::Sub,
///             TokenKind::Whitespace,
///             TokenKind::Decimal]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexeme::lexer_with_extras(source, Position::START);
    let mut tokens: Vec<Token> = Vec::new();
    let mut depth = 0usize;

    while let Some(lexeme) = lexer.next() {
        let at = lexer.extras;
        let slice = lexer.slice();
        lexer.extras.advance(slice);

        let kind = match lexeme {
            Ok(Lexeme::Number) => TokenKind::Number,
            Ok(Lexeme::Decimal) => TokenKind::Decimal,
            Ok(Lexeme::TrailingDot) => {
                let after = lexer.extras;
                return Err(match lexer.remainder().chars().next() {
                               Some(next) => LexicalError::UnexpectedToken { token:  next.to_string(),
                                                                             offset: after.offset,
                                                                             line:   after.line, },
                               None => {
                                   LexicalError::UnexpectedEnd { expected: KindSet::of(&[TokenKind::Number]),
                                                                 offset:   after.offset,
                                                                 line:     after.line, }
                               },
                           });
            },
            Ok(Lexeme::Dot) => {
                return Err(LexicalError::UnexpectedToken { token:  slice.to_string(),
                                                           offset: at.offset,
                                                           line:   at.line, });
            },
            Ok(Lexeme::Whitespace) => TokenKind::Whitespace,
            Ok(Lexeme::OpenBrace) => {
                depth += 1;
                TokenKind::OpenBrace
            },
            Ok(Lexeme::CloseBrace) => {
                if depth == 0 {
                    return Err(LexicalError::UnexpectedCloseBrace { offset: at.offset,
                                                                    line:   at.line, });
                }
                depth -= 1;
                TokenKind::CloseBrace
            },
            Ok(Lexeme::Plus) => TokenKind::Add,
            Ok(Lexeme::Minus) => minus_kind(&tokens),
            Ok(Lexeme::Star) => TokenKind::Mul,
            Ok(Lexeme::Percent) => TokenKind::Mod,
            Ok(Lexeme::Slash) => TokenKind::Div,
            Ok(Lexeme::Caret) => TokenKind::Exp,
            Err(()) => {
                return Err(LexicalError::UnknownToken { token:  slice.to_string(),
                                                        offset: at.offset,
                                                        line:   at.line, });
            },
        };

        tokens.push(Token::new(kind, slice, at));
    }

    if depth != 0 {
        let end = lexer.extras;
        return Err(LexicalError::UnexpectedEnd { expected: KindSet::of(&[TokenKind::CloseBrace]),
                                                 offset:   end.offset,
                                                 line:     end.line, });
    }

    log::debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}

/// Decides whether a `-` is a negation or a subtraction from the nearest
/// preceding non-whitespace token.
fn minus_kind(tokens: &[Token]) -> TokenKind {
    match tokens.iter().rev().find(|token| !token.is_whitespace()) {
        None => TokenKind::Neg,
        Some(prev) if prev.kind.is_operator() || prev.kind == TokenKind::OpenBrace => {
            TokenKind::Neg
        },
        Some(_) => TokenKind::Sub,
    }
}
