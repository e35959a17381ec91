use crate::interpreter::{
    parser::core::PostfixSequence,
    token::{Associativity, Token, TokenKind},
};

/// Rewrites an infix token sequence into postfix order.
///
/// This is a shunting-yard pass over a validated sequence; it does not check
/// the grammar again. Operands go straight to the output. Operators wait on a
/// stack until an operator that binds no tighter arrives, a `)` closes their
/// group, or the input ends. Braces never reach the output.
///
/// An incoming operator pops the top of the stack when the top binds tighter,
/// or binds equally and the incoming operator is left-associative. A `^`
/// therefore never pops another `^` and a negation never pops anything, so
/// both group to the right.
pub fn to_postfix(tokens: &[Token]) -> PostfixSequence {
    let mut output: Vec<Token> = Vec::new();
    let mut operators: Vec<&Token> = Vec::new();

    for token in tokens.iter().filter(|token| !token.is_whitespace()) {
        match token.kind {
            TokenKind::Number | TokenKind::Decimal => output.push(token.clone()),
            TokenKind::OpenBrace => operators.push(token),
            TokenKind::CloseBrace => {
                while let Some(top) = operators.pop() {
                    if top.kind == TokenKind::OpenBrace {
                        break;
                    }
                    output.push(top.clone());
                }
            },
            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Neg
            | TokenKind::Mul
            | TokenKind::Mod
            | TokenKind::Div
            | TokenKind::Exp => {
                while let Some(&top) = operators.last()
                      && !output.is_empty()
                      && yields_to(top.kind, token.kind)
                {
                    operators.pop();
                    output.push(top.clone());
                }
                operators.push(token);
            },
            TokenKind::Whitespace => {},
        }
    }

    while let Some(top) = operators.pop() {
        output.push(top.clone());
    }

    PostfixSequence::new(output)
}

/// Returns `true` if the stacked operator `top` must be emitted before
/// `incoming` is pushed.
fn yields_to(top: TokenKind, incoming: TokenKind) -> bool {
    if top == TokenKind::OpenBrace || incoming == TokenKind::Neg {
        return false;
    }
    match (top.precedence(), incoming.precedence()) {
        (Some(top_prec), Some(incoming_prec)) => {
            top_prec > incoming_prec
            || (top_prec == incoming_prec
                && incoming.associativity() == Some(Associativity::Left))
        },
        _ => false,
    }
}
