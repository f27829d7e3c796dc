use std::fs::{self};

use pebble::{
    ast::Statement,
    error::{Error, LexError, RuntimeError, SyntaxError},
    interpreter::{evaluator::core::Context, value::core::Value},
    run, run_with_input,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "pb"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read \
                                                                      {expected_path:?}: {e}")
                                                          });

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run(&source, &mut output) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(String::from_utf8(output).unwrap(), expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run(src, &mut output) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(output).unwrap()
}

fn assert_output(src: &str, expected: &[&str]) {
    let expected: String = expected.iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(output_of(src), expected, "Unexpected output for:\n{src}");
}

fn assert_failure(src: &str) -> Error {
    failure_with_output(src).0
}

fn failure_with_output(src: &str) -> (Error, String) {
    let mut output = Vec::new();
    match run(src, &mut output) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => (e, String::from_utf8(output).unwrap()),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("print 2 + 3 * 4", &["14"]);
    assert_output("print 2 * 3 + 4", &["10"]);
    assert_output("print 1 + 8 / 4", &["3"]);
    assert_output("print 10 - 2 * 3", &["4"]);
}

#[test]
fn parentheses_override_precedence() {
    assert_output("print (2 + 3) * 4", &["20"]);
    assert_output("print 2 * (3 + 4)", &["14"]);
    assert_output("print ((1))", &["1"]);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_output("print 10 - 3 - 2", &["5"]);
    assert_output("print 16 / 4 / 2", &["2"]);
    assert_output("print 1 + 2 + \"a\"", &["3a"]);
    assert_output("print \"a\" + 1 + 2", &["a12"]);
}

#[test]
fn unary_operators() {
    assert_output("print -2 + 3", &["1"]);
    assert_output("print 2 * -3", &["-6"]);
    assert_output("print --4", &["4"]);
    assert_output("print -(1 + 2)", &["-3"]);
    assert_output("print !true", &["False"]);
    assert_output("print !0", &["True"]);
    assert_output("print !\"\"", &["True"]);
    assert_output("print !\"x\"", &["False"]);
}

#[test]
fn number_rendering() {
    assert_output("print 7 / 2", &["3.5"]);
    assert_output("print 3.0", &["3"]);
    assert_output("print 2.", &["2"]);
    assert_output("print 1.50", &["1.5"]);
    assert_output("print 0.1 + 0.2", &["0.30000000000000004"]);
    assert_output("print 1 / 0", &["inf"]);
    assert_output("print 0 / 0", &["NaN"]);
    assert_output("print -0", &["-0"]);
    assert_output("print 0 * -1 + 0", &["0"]);
}

#[test]
fn vertical_tab_separates_tokens() {
    assert_output("print\x0B1", &["1"]);
    assert_output("x\x0B=\x0B2\nprint x", &["2"]);
}

#[test]
fn addition_with_a_string_concatenates() {
    assert_output("print \"x\" + 1", &["x1"]);
    assert_output("print 1 + \"x\"", &["1x"]);
    assert_output("print \"n=\" + 2.5", &["n=2.5"]);
    assert_output("print \"a\" + true", &["aTrue"]);
    assert_output("print \"ab\" + \"cd\"", &["abcd"]);
    assert_output("print 1 + 2", &["3"]);
}

#[test]
fn other_arithmetic_on_strings_is_a_type_error() {
    for src in ["print \"a\" - 1", "print \"a\" * 2", "print 4 / \"b\"", "print -\"a\""] {
        assert!(matches!(assert_failure(src),
                         Error::Runtime(RuntimeError::TypeError { line: 1, .. })),
                "{src}");
    }
}

#[test]
fn booleans_count_as_one_and_zero_in_arithmetic() {
    assert_output("print true + true", &["2"]);
    assert_output("print false * 5", &["0"]);
}

#[test]
fn comparisons_and_equality() {
    assert_output("print 1 < 2", &["True"]);
    assert_output("print 2 <= 2", &["True"]);
    assert_output("print 3 > 4", &["False"]);
    assert_output("print 3 >= 4", &["False"]);
    assert_output("print 1 == 1.0", &["True"]);
    assert_output("print 1 != 2", &["True"]);
    assert_output("print \"a\" == \"a\"", &["True"]);
    assert_output("print \"a\" != \"b\"", &["True"]);
    assert_output("print \"1\" == 1", &["True"]);
    assert_output("print true == 1", &["True"]);
    assert_output("print 0 / 0 == 0 / 0", &["False"]);
}

#[test]
fn ordering_a_string_is_a_type_error() {
    let err = assert_failure("print \"a\" < 1");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { line: 1, .. })));
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("print false && undefined_name", &["False"]);
    assert_output("print true || undefined_name", &["True"]);
    assert_output("print false && (1 / 0 > 0)", &["False"]);
    assert_output("print true && 0", &["False"]);
    assert_output("print 0 || \"x\"", &["True"]);

    let err = assert_failure("print true && undefined_name");
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn assignment_then_use() {
    assert_output("x = 5; print x + 1;", &["6"]);
    assert_output("x = 1; x = x + 1; x = x * 10; print x", &["20"]);
    assert_output("s = \"a\"; s = 2; print s", &["2"]);
}

#[test]
fn var_declaration_behaves_like_assignment() {
    assert_output("var a = 2; print a * a", &["4"]);
    assert_output("var a = 1; var a = a + 1; print a", &["2"]);
}

#[test]
fn undefined_variable_stops_the_run() {
    let (err, output) = failure_with_output("print 1; print y; print 2;");
    assert_eq!(output, "1\n");
    match err {
        Error::Runtime(RuntimeError::UnknownVariable { name, line }) => {
            assert_eq!(name, "y");
            assert_eq!(line, 1);
        },
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn while_loop_counts() {
    assert_output("x = 0; while (x < 3) { print x; x = x + 1; }", &["0", "1", "2"]);
    assert_output("x = 5; while (x < 3) { print x; }", &[]);
    assert_output("while (false) { print undefined_name }", &[]);
}

#[test]
fn nested_while_loops() {
    let src = "
i = 0;
while (i < 2) {
    j = 0;
    while (j < 2) {
        print i + \":\" + j;
        j = j + 1;
    }
    i = i + 1;
}";
    assert_output(src, &["0:0", "0:1", "1:0", "1:1"]);
}

#[test]
fn if_else_chains() {
    let src = |x: i32| {
        format!("x = {x}
if (x > 10) {{
    print \"big\"
}} else if (x > 5) {{
    print \"medium\"
}} else {{
    print \"small\"
}}
print \"done\"")
    };
    assert_output(&src(20), &["big", "done"]);
    assert_output(&src(7), &["medium", "done"]);
    assert_output(&src(1), &["small", "done"]);
    assert_output("if (0) { print 1 }", &[]);
    assert_output("if (\"yes\") { print 1 }", &["1"]);
}

#[test]
fn bare_expressions_are_printed() {
    assert_output("1 + 1", &["2"]);
    assert_output("\"hi\"", &["hi"]);
    assert_output("x = 4; x", &["4"]);
    assert_output("true", &["True"]);
}

#[test]
fn semicolons_are_optional() {
    assert_output("x = 1\nprint x\nprint x + 1", &["1", "2"]);
    assert_output("print 1;;; print 2;", &["1", "2"]);
}

#[test]
fn comments_are_skipped() {
    assert_output("// heading\nprint 1 // trailing\n// print 2", &["1"]);
    assert_output("print 4 / 2 // halves", &["2"]);
}

#[test]
fn string_escapes() {
    assert_output("print \"a\\tb\"", &["a\tb"]);
    assert_output("print \"say \\\"hi\\\"\"", &["say \"hi\""]);
    assert_output("print \"back\\\\slash\"", &["back\\slash"]);
    assert_output("print \"two\\nlines\"", &["two", "lines"]);
}

#[test]
fn input_reads_one_line_per_evaluation() {
    let mut output = Vec::new();
    run_with_input("a = input; b = input; print a + b; print b + \"!\"",
                   &mut output,
                   "2\n40\n".as_bytes()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "42\n40!\n");

    let mut output = Vec::new();
    run_with_input("name = input; print \"hello \" + name", &mut output, "world\r\n".as_bytes())
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "hello world\n");
}

#[test]
fn input_at_end_of_stream_is_empty_string() {
    assert_output("x = input; print \"[\" + x + \"]\"", &["[]"]);
}

#[test]
fn runs_do_not_share_variables() {
    assert_output("x = 1", &[]);
    let err = assert_failure("print x");
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn evaluating_an_expression_twice_gives_the_same_value() {
    let program = pebble::parse("(3 * 4 + 1) / 2 - 1").unwrap();
    let Statement::Expression { expr, .. } = &program.statements[0] else {
        panic!("Expected an expression statement");
    };

    let mut context = Context::new(Vec::new());
    let first = context.eval(expr).unwrap();
    let second = context.eval(expr).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "5.5");
}

#[test]
fn context_keeps_globals_between_runs() {
    let mut output = Vec::new();
    {
        let mut context = Context::new(&mut output);
        context.run(&pebble::parse("x = 2").unwrap()).unwrap();
        context.run(&pebble::parse("print x * 21").unwrap()).unwrap();
        assert_eq!(context.globals.len(), 1);
        assert_eq!(context.globals.get("x"), Some(&Value::Number(2.0)));
        assert!(context.globals.get("y").is_none());
    }
    assert_eq!(String::from_utf8(output).unwrap(), "42\n");
}

#[test]
fn syntax_errors_produce_no_output() {
    let (err, output) = failure_with_output("print 1; print 2; print (");
    assert!(matches!(err, Error::Syntax(_)));
    assert!(output.is_empty());
}

#[test]
fn syntax_error_kinds() {
    assert!(matches!(assert_failure("print (1 + 2"),
                     Error::Syntax(SyntaxError::UnmatchedParenthesis { line: 1 })));
    assert!(matches!(assert_failure("print (1 + 2 3)"),
                     Error::Syntax(SyntaxError::UnmatchedParenthesis { line: 1 })));
    assert!(matches!(assert_failure("x = ;"),
                     Error::Syntax(SyntaxError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(assert_failure("print"),
                     Error::Syntax(SyntaxError::UnexpectedEndOfInput { line: 1 })));
    assert!(matches!(assert_failure("while x < 3 { }"),
                     Error::Syntax(SyntaxError::ExpectedToken { line: 1, .. })));
    assert!(matches!(assert_failure("while (x) { print x"),
                     Error::Syntax(SyntaxError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("if (1) { } else print 2"),
                     Error::Syntax(SyntaxError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("var = 3"),
                     Error::Syntax(SyntaxError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("var x 3"),
                     Error::Syntax(SyntaxError::ExpectedToken { .. })));
}

#[test]
fn misplaced_tokens_are_rejected() {
    for src in [")", "}", ";", "=", "==", "else { }", "*", "/ 2", "< 1", "&& true", "|| 1"] {
        assert!(matches!(assert_failure(src), Error::Syntax(_)), "{src:?} should not parse");
    }
}

#[test]
fn lex_error_kinds() {
    match assert_failure("print 1 $ 2") {
        Error::Lex(LexError::UnexpectedCharacter { character, line }) => {
            assert_eq!(character, '$');
            assert_eq!(line, 1);
        },
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(matches!(assert_failure("a & b"),
                     Error::Lex(LexError::UnexpectedCharacter { character: '&', .. })));
    assert!(matches!(assert_failure("print \"abc"),
                     Error::Lex(LexError::UnterminatedString { line: 1 })));
    let huge = format!("x = 1\nprint 9{}", "9".repeat(400));
    assert!(matches!(assert_failure(&huge),
                     Error::Lex(LexError::InvalidNumber { line: 2, .. })));
}

#[test]
fn errors_report_their_source_line() {
    let err = assert_failure("x = 1\n\nprint x + y\n");
    assert_eq!(err.line_number(), 3);
    assert!(err.to_string().contains("line 3"), "{err}");

    let err = assert_failure("print 1\nprint \"two\nlines\"\nprint (");
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(err.line_number(), 4);

    let err = assert_failure("print 1\n  @");
    assert_eq!(err.line_number(), 2);
}
