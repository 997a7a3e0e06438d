use std::{fs, io::Cursor};

use calq::{
    error::{DomainError, Error, LexErrorKind, ParseError},
    evaluate,
    get_result,
    interpreter::value::core::Value,
    repl::{ReplConfig, run},
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((expression, expected)) = line.split_once(" => ") else {
                panic!("Malformed case at {path:?}:{}: {line}", line_no + 1);
            };

            count += 1;
            let actual = match get_result(expression) {
                Ok(result) => result,
                Err(e) => e.to_string(),
            };
            assert_eq!(actual,
                       expected.trim(),
                       "Case at {path:?}:{} evaluated {expression:?}",
                       line_no + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_result(src: &str, expected: &str) {
    match get_result(src) {
        Ok(result) => assert_eq!(result, expected, "Wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e:#}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_result("2+3*4", "14");
    assert_result("2*3+4", "10");
    assert_result("2+3-1", "4");
    assert_result("(2+3)*4", "20");
    assert_result("10 - 4 - 3", "3");
    assert_result("2 * 3 | 4", "14");
    assert_result("1 << 3 + 1", "9");
    assert_result("-7 % 3", "2");
}

#[test]
fn unary_operators_chain() {
    assert_result("--3", "3");
    assert_result("~0", "-1");
    assert_result("!!1", "true");
    assert_result("2 * -3", "-6");
    assert_result("2 - -3", "5");
    assert_result("+4", "4");
}

#[test]
fn function_calls_with_and_without_parentheses() {
    assert_result("sqrt(16)", "4");
    assert_result("sqrt 16", "4");
    assert_result("pow(2,10)", "1024");
    assert_result("sqrt 16 + 9", "13");
    assert_result("abs -3", "3");
    assert_result("pow(2, 3) + pow(3, 2)", "17");
    assert_result("SQRT(4)", "2");
}

#[test]
fn logic_and_comparisons() {
    assert_result("3>2&&1==1", "true");
    assert_result("5<2||0==0", "true");
    assert_result("1 = 1", "true");
    assert_result("true != false", "true");
    assert_result("1 && 0", "false");
    assert_result("!5", "false");
}

#[test]
fn number_formatting() {
    assert_result("4/2", "2");
    assert_result("1/3", "0.3333333333333333");
    assert_result("0.1 + 0.2", "0.30000000000000004");
    assert_result("-0", "0");
    assert_result("2. + 1", "3");
    assert_result("pow(2, 60)", "1152921504606846976");
}

#[test]
fn value_types() {
    assert_eq!(evaluate("2.5 * 2").unwrap(), Value::Number(5.0));
    assert_eq!(evaluate("bool(2)").unwrap(), Value::from(true));
    assert_eq!(evaluate("float(false)").unwrap(), Value::Number(0.0));
}

#[test]
fn structural_errors_collapse_to_invalid_expression() {
    for src in ["1/", "(1+2", "", ")", "1 2", "pow 2", "pow(2)", "sqrt()", "pow(1,)"] {
        let e = assert_failure(src);
        assert!(matches!(e, Error::Parse(_)), "{src:?} gave {e:?}");
        assert_eq!(e.to_string(), "invalid expression!");
    }
}

#[test]
fn unknown_identifier_is_named() {
    let e = assert_failure("foo(1)");
    assert_eq!(e.to_string(), "unknown identifier 'foo'!");

    let e = assert_failure("1 + FOO");
    assert_eq!(e.to_string(), "unknown identifier 'foo'!");
    assert_eq!(format!("{e:#}"), "Error at column 4: Unknown identifier 'foo'.");
}

#[test]
fn lexical_errors() {
    for (src, kind) in [("1.2.3", LexErrorKind::MalformedNumber),
                        ("2.", LexErrorKind::MalformedNumber),
                        ("#", LexErrorKind::UnexpectedCharacter),
                        (".5", LexErrorKind::UnexpectedCharacter)]
    {
        match assert_failure(src) {
            Error::Lex(e) => assert_eq!(e.kind, kind, "{src:?}"),
            e => panic!("{src:?} gave {e:?}"),
        }
    }
}

#[test]
fn domain_errors() {
    assert_eq!(assert_failure("fact(-1)"), Error::Domain(DomainError::NegativeFactorial));
    assert_eq!(assert_failure("pow(-8, 1/3)"), Error::Domain(DomainError::ComplexPower));
    assert_eq!(assert_failure("1 / 0"), Error::Domain(DomainError::DivisionByZero));
    assert_eq!(assert_failure("1 % 0"), Error::Domain(DomainError::DivisionByZero));
    assert_eq!(assert_failure("sqrt(-1)"),
               Error::Domain(DomainError::Undefined { operation: "sqrt" }));
    assert_eq!(assert_failure("true + 1"),
               Error::Domain(DomainError::ExpectedNumber { operation: "+" }));
    assert_eq!(assert_failure("true == 1"),
               Error::Domain(DomainError::TypeMismatch { operation: "==" }));
    assert_eq!(assert_failure("1 << 64"), Error::Domain(DomainError::InvalidShift { count: 64 }));
    assert_eq!(assert_failure("9007199254740992 | 0"),
               Error::Domain(DomainError::IntegerOutOfRange));
    assert_failure("fact(171)");
    assert_failure("1 < 2 < 3");
}

#[test]
fn explained_errors_carry_positions() {
    let e = assert_failure("(1+2");
    assert_eq!(format!("{e:#}"),
               "Error at column 0: Expected closing parenthesis ')' but none found.");

    let e = assert_failure("1 + pow(2)");
    assert_eq!(e,
               Error::Parse(ParseError::ArgumentCountMismatch { name:     "pow",
                                                                expected: 2,
                                                                found:    1,
                                                                position: 4, }));

    let e = assert_failure("2 + 3)");
    assert_eq!(format!("{e:#}"),
               "Error at column 5: Extra tokens after expression. Check your input: )");
}

#[test]
fn formatted_results_reevaluate_to_themselves() {
    for src in ["1/3", "-2.5 * 3", "pow(2, 60)", "0.1 + 0.2", "pi", "-e", "1/1024", "3 > 2"] {
        let first = get_result(src).unwrap();
        let second = get_result(&first).unwrap_or_else(|e| panic!("{first:?} failed: {e:#}"));
        assert_eq!(first, second, "{src:?} is not stable");
    }
}

fn nested(open: &str, close: &str, depth: usize) -> String {
    format!("{}1{}", open.repeat(depth), close.repeat(depth))
}

#[test]
fn moderate_nesting_evaluates() {
    assert_result(&nested("(", ")", 100), "1");
    assert_result(&nested("-", "", 100), "1");
    assert_result(&nested("abs(", ")", 100), "1");
    assert_result(&nested("sqrt ", "", 100), "1");
}

#[test]
fn deep_nesting_fails_the_line() {
    for src in [nested("(", ")", 20_000),
                nested("-", "", 20_000),
                nested("!", "", 20_000),
                nested("abs(", ")", 20_000),
                nested("sqrt ", "", 20_000)]
    {
        let e = assert_failure(&src);
        assert!(matches!(e, Error::Parse(ParseError::NestingTooDeep { .. })),
                "deep input gave {e:?}");
        assert_eq!(e.to_string(), "invalid expression!");
    }
}

fn run_session(input: &str, config: &ReplConfig) -> String {
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn repl_prints_one_line_per_expression() {
    let config = ReplConfig::default();
    let output = run_session("1 + 1\n\nfoo\n1/0\n2 * 3\n", &config);
    assert_eq!(output, ">2\n>>unknown identifier 'foo'!\n>invalid expression!\n>6\n>");
}

#[test]
fn repl_stops_on_exit() {
    let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
    let output = run_session("1\nquit\n2\n", &config);
    assert_eq!(output, "1\n");

    let output = run_session("exit\n1\n", &config);
    assert_eq!(output, "");
}

#[test]
fn repl_help_lists_registry() {
    let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
    let output = run_session("help\n", &config);
    assert!(output.starts_with("e pi true false sqrt"));
    assert!(output.contains("atan2"));
    assert!(output.trim_end().ends_with("pow"));
}

#[test]
fn repl_explains_errors_when_asked() {
    let config = ReplConfig { prompt:  String::new(),
                              explain: true, };
    let output = run_session("fact(-1)\n", &config);
    assert_eq!(output, "Domain error: Factorial of a negative number.\n");
}

#[test]
fn repl_continues_after_deep_nesting() {
    let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
    let input = format!("{}\n1+1\n", nested("(", ")", 5_000));
    let output = run_session(&input, &config);
    assert_eq!(output, "invalid expression!\n2\n");
}

#[test]
fn repl_skips_lines_that_are_not_utf8() {
    let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
    let mut output = Vec::new();
    run(Cursor::new(b"\xff\xfe\n1 + 1\n".to_vec()), &mut output, &config).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "invalid expression!\n2\n");
}
