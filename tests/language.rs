use std::fs;

use opprec::{Session, evaluate};
use rstest::rstest;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            match evaluate(&source, false) {
                Ok(evaluation) => assert!(close(evaluation.value, expected),
                                          "case {} in {:?}: {source} = {} but expected {expected}",
                                          i + 1,
                                          path,
                                          evaluation.value),
                Err(e) => panic!("case {} in {:?} failed:\n{source}\nError: {e}", i + 1, path),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => value` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (source, value) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("case line without '=>': {line}"));
               let value = value.trim()
                                .parse()
                                .unwrap_or_else(|e| panic!("bad expected value in {line}: {e}"));
               (source.trim().to_string(), value)
           })
           .collect()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src, false) {
        Ok(evaluation) => assert!(close(evaluation.value, expected),
                                  "{src} = {} but expected {expected}",
                                  evaluation.value),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

#[rstest]
#[case("1 + 2", 3.0)]
#[case("24 + 111 - 62 % 17", 124.0)]
#[case("-(3 + -4) * 9", 9.0)]
#[case("0.4 - (1.005 / ((2 + 11) - (6 * 3 / 9))) ", 0.308_636_363_636_363_65)]
#[case("(14 - 7 * 2 + 129 - 2^7 * (100 / 25 - (13 % 12)) - -256) * 11 * 11 % 79", 42.0)]
#[case("---(8 * -(2^8)) / 2^(-((((-(((-((((9))))))))))))", 1_048_576.0)]
#[case("-(-(42 ^ 3 / 3717 % (56 - 14)))", 19.0)]
#[case("1 - (33 * 3 / 9) * -1", 12.0)]
#[case("7 * 6", 42.0)]
fn reference_expressions(#[case] source: &str, #[case] expected: f64) {
    assert_value(source, expected);
}

#[rstest]
#[case("10 - 4 - 3", 3.0)]
#[case("100 / 10 / 5", 2.0)]
#[case("2 * 3 % 4", 2.0)]
#[case("17 % 5 * 2", 4.0)]
fn equal_precedence_is_left_associative(#[case] source: &str, #[case] expected: f64) {
    assert_value(source, expected);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 ^ 2 ^ 2 ^ 2", 65_536.0);
    assert_value("(2 ^ 3) ^ 2", 64.0);
}

#[test]
fn precedence_levels() {
    assert_value("1 + 3 * 5", 16.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("2 ^ 3 * 2", 16.0);
    assert_value("1 + 2 ^ 2 * 3", 13.0);
    assert_value("(1 + 3) * 5", 20.0);
}

#[test]
fn negation() {
    assert_value("-5", -5.0);
    assert_value("--5", 5.0);
    assert_value("3 - -2", 5.0);
    assert_value("3--2", 5.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("-2 ^ 2", 4.0);
    assert_value("2 * (-3)", -6.0);
    assert_value("  - 4", -4.0);
}

#[test]
fn decimals() {
    assert_value("1.5 + 1.25", 2.75);
    assert_value("0.1 * 10", 1.0);
    assert_value("007 + 0.50", 7.5);
    assert_value("4 ^ 0.5", 2.0);
}

#[test]
fn modulo_truncates_operands() {
    assert_value("5.5 % 2", 1.0);
    assert_value("7 % 2.9", 1.0);
    assert_value("-7 % 3", -1.0);
    assert_value("7 % -3", 1.0);
}

#[test]
fn whitespace_and_newlines_are_ignored() {
    assert_value("\t1 +\r\n 2\n* 3 ", 7.0);
    assert_value("(\n1\n)", 1.0);
}

#[test]
fn nested_groups() {
    assert_value("((((9))))", 9.0);
    assert_value("(1 + (2 * (3 + (4 - 1))))", 13.0);
}

#[test]
fn debug_returns_trace() {
    let evaluation = evaluate("1 + 3 * 5", true).unwrap();
    assert_eq!(evaluation.value, 16.0);
    let trace = evaluation.trace.unwrap();
    assert_eq!(trace.steps(), ["3 * 5 = 15", "1 + 15 = 16"]);
    assert_eq!(trace.to_string(), "[0] 3 * 5 = 15\n[1] 1 + 15 = 16\n");
    assert_eq!(trace.last_frame().as_deref(), Some("[1] 1 + 15 = 16"));
}

#[test]
fn trace_formats_negation_and_operands() {
    let trace = evaluate("-(2.5 - 4) ^ 2", true).unwrap().trace.unwrap();
    assert_eq!(trace.steps(), ["2.5 - 4 = -1.5", "-(-1.5) = 1.5", "1.5 ^ 2 = 2.25"]);
}

#[test]
fn trace_prints_shortest_round_trip_values() {
    let trace = evaluate("0.1 + 0.2", true).unwrap().trace.unwrap();
    assert_eq!(trace.steps(), ["0.1 + 0.2 = 0.30000000000000004"]);

    let trace = evaluate("1 / 3", true).unwrap().trace.unwrap();
    assert_eq!(trace.steps(), ["1 / 3 = 0.3333333333333333"]);
}

#[test]
fn single_literal_has_empty_trace() {
    let evaluation = evaluate("42", true).unwrap();
    assert_eq!(evaluation.value, 42.0);
    assert!(evaluation.trace.unwrap().is_empty());
}

#[rstest]
#[case("1 + 2")]
#[case("-(3 + -4) * 9")]
#[case("2 ^ 3 ^ 2")]
#[case("0.4 - (1.005 / ((2 + 11) - (6 * 3 / 9)))")]
fn evaluation_is_idempotent(#[case] source: &str) {
    let first = evaluate(source, true).unwrap();
    let second = evaluate(source, true).unwrap();
    assert_eq!(first, second);

    let mut a = Session::new(source);
    let mut b = Session::new(source);
    assert_eq!(a.run().unwrap(), b.run().unwrap());
    assert_eq!(a.trace().len(), b.trace().len());
}

#[rstest]
#[case("1 / 0")]
#[case("(17 - (4)")]
#[case("0 0")]
#[case("3 $ 4")]
fn errors_are_deterministic(#[case] source: &str) {
    assert_eq!(evaluate(source, false).unwrap_err(), evaluate(source, false).unwrap_err());
}
