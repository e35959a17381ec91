use opprec::{
    Error, ErrorCategory, evaluate,
    error::{LexicalError, RuntimeError, SyntaxError},
    interpreter::token::{KindSet, TokenKind},
};
use rstest::rstest;

fn error_of(src: &str) -> Error {
    match evaluate(src, false) {
        Ok(evaluation) => panic!("{src} evaluated to {} but was expected to fail", evaluation.value),
        Err(e) => e,
    }
}

#[rstest]
#[case("(17 - (4)", ErrorCategory::Lexical)]
#[case("1.2.3", ErrorCategory::Lexical)]
#[case("1.", ErrorCategory::Lexical)]
#[case(".5", ErrorCategory::Lexical)]
#[case(")", ErrorCategory::Lexical)]
#[case("2 & 3", ErrorCategory::Lexical)]
#[case("4+", ErrorCategory::Syntax)]
#[case("0 0", ErrorCategory::Syntax)]
#[case("", ErrorCategory::Syntax)]
#[case("()", ErrorCategory::Syntax)]
#[case("* 2", ErrorCategory::Syntax)]
#[case("1 / 0", ErrorCategory::Runtime)]
#[case("5 % 0", ErrorCategory::Runtime)]
#[case("5 % 0.5", ErrorCategory::Runtime)]
fn failures_have_the_right_category(#[case] source: &str, #[case] category: ErrorCategory) {
    assert_eq!(error_of(source).category(), category);
}

#[test]
fn unclosed_group_points_past_the_input() {
    let err = error_of("(17 - (4)");
    assert_eq!(err,
               Error::Lexical(LexicalError::UnexpectedEnd { expected: KindSet::of(&[TokenKind::CloseBrace]),
                                                            offset:   10,
                                                            line:     1, }));
    assert_eq!(err.to_string(),
               "Lexical error at offset 10 on line 1: unexpected end, expecting T_CLOSE_BRACE.");
}

#[test]
fn second_decimal_point_is_rejected() {
    assert_eq!(error_of("1.2.3"),
               Error::Lexical(LexicalError::UnexpectedToken { token:  ".".to_string(),
                                                              offset: 4,
                                                              line:   1, }));
}

#[test]
fn decimal_point_needs_a_digit() {
    assert_eq!(error_of("1.+2"),
               Error::Lexical(LexicalError::UnexpectedToken { token:  "+".to_string(),
                                                              offset: 3,
                                                              line:   1, }));
    let err = error_of("12.");
    assert_eq!(err.offset(), 4);
    assert_eq!(err.expected(), Some(KindSet::of(&[TokenKind::Number])));
}

#[test]
fn unmatched_close_brace() {
    assert_eq!(error_of("(1))"),
               Error::Lexical(LexicalError::UnexpectedCloseBrace { offset: 4,
                                                                   line:   1, }));
}

#[test]
fn unknown_characters() {
    let err = error_of("2 & 3");
    assert_eq!(err,
               Error::Lexical(LexicalError::UnknownToken { token:  "&".to_string(),
                                                           offset: 3,
                                                           line:   1, }));
    assert_eq!(err.to_string(), "Lexical error at offset 3 on line 1: unknown token '&'.");
    assert_eq!(error_of("1 +\n x").line(), 2);
}

#[test]
fn trailing_operator_is_unexpected_end() {
    let err = error_of("4+");
    assert_eq!(err,
               Error::Syntax(SyntaxError::UnexpectedEnd { expected: KindSet::OPERAND_START,
                                                          offset:   3,
                                                          line:     1, }));
    assert_eq!(err.to_string(),
               "Syntax error at offset 3 on line 1: unexpected end, expecting T_NUMBER, \
                T_DECIMAL, T_OPEN_BRACE or T_NEG.");
}

#[test]
fn adjacent_operands_are_rejected() {
    let err = error_of("0 0");
    assert_eq!(err,
               Error::Syntax(SyntaxError::UnexpectedToken { kind:     TokenKind::Number,
                                                            expected: KindSet::BINARY_OPERATORS,
                                                            offset:   3,
                                                            line:     1, }));
    assert_eq!(err.to_string(),
               "Syntax error at offset 3 on line 1: unexpected token T_NUMBER, expecting T_ADD, \
                T_SUB, T_MUL, T_MOD, T_DIV or T_EXP.");
}

#[test]
fn close_brace_is_expected_inside_groups() {
    let err = error_of("(1 2)");
    assert_eq!(err.expected(),
               Some(KindSet::BINARY_OPERATORS.with(TokenKind::CloseBrace)));
    assert_eq!(err.offset(), 4);
}

#[test]
fn empty_group_is_rejected() {
    let err = error_of("()");
    assert!(matches!(err,
                     Error::Syntax(SyntaxError::UnexpectedToken { kind: TokenKind::CloseBrace,
                                                                  offset: 2,
                                                                  .. })));
}

#[test]
fn empty_input_is_unexpected_end() {
    for source in ["", "   ", "\n"] {
        let err = error_of(source);
        assert_eq!(err.offset(), 1);
        assert_eq!(err.line(), 1);
        assert_eq!(err.expected(), Some(KindSet::OPERAND_START));
    }
}

#[test]
fn syntax_positions_follow_lines() {
    let err = error_of("1 +\n  2 3");
    assert_eq!((err.offset(), err.line()), (5, 2));
}

#[test]
fn division_by_zero_names_the_operator() {
    assert_eq!(error_of("1 / 0"),
               Error::from(RuntimeError::DivisionByZero { offset: 3,
                                                          line:   1, }));
    assert_eq!(error_of("5 % 0"),
               Error::from(RuntimeError::ModuloByZero { offset: 3,
                                                        line:   1, }));
    assert_eq!(error_of("1 / 0").to_string(),
               "Runtime error at offset 3 on line 1: division by zero.");
    assert_eq!(error_of("2 * (1 / (3 - 3))").offset(), 8);
    assert_eq!(error_of("1 / 0").expected(), None);
}

#[rstest]
#[case(true)]
#[case(false)]
fn runtime_errors_keep_the_steps_before_the_failure(#[case] debug: bool) {
    let err = evaluate("2 * 3 + 4 / (1 - 1)", debug).unwrap_err();
    assert!(matches!(err,
                     Error::Runtime { error: RuntimeError::DivisionByZero { offset: 11,
                                                                            line:   1, },
                                      .. }));
    let trace = err.trace().unwrap();
    assert_eq!(trace.steps(), ["2 * 3 = 6", "1 - 1 = 0"]);
    assert_eq!(trace.to_string(), "[0] 2 * 3 = 6\n[1] 1 - 1 = 0\n");
}

#[test]
fn earlier_stages_carry_no_trace() {
    assert!(error_of("(1").trace().is_none());
    assert!(error_of("1 1").trace().is_none());
    assert!(error_of("1 / 0").trace().unwrap().is_empty());
}
