use pretty_assertions::assert_eq;
use treelox::{diagnostics::Diagnostics, interpreter::evaluator::core::Interpreter, run};

fn run_source(source: &str) -> (String, Diagnostics) {
    let mut interpreter = Interpreter::with_output(Vec::new());
    let diagnostics = run(source, &mut interpreter);
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    (output, diagnostics)
}

/// Runs `source`, expecting it to finish cleanly, and returns its output.
fn output_of(source: &str) -> String {
    let (output, diagnostics) = run_source(source);
    assert!(diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>());
    output
}

/// Runs `source`, expecting a runtime error, and returns the output written
/// before it together with the rendered error.
fn runtime_failure(source: &str) -> (String, String) {
    let (output, diagnostics) = run_source(source);
    assert!(diagnostics.had_runtime_error(), "expected a runtime error for {source:?}");
    assert!(!diagnostics.had_error());
    assert_eq!(diagnostics.len(), 1);
    let message = diagnostics.iter().next().unwrap().to_string();
    (output, message)
}

#[test]
fn nested_arithmetic() {
    assert_eq!(output_of("print (5 - (3 - 1)) + -1;"), "2\n");
    assert_eq!(output_of("print 2 * 3 + 4 * 5;"), "26\n");
    assert_eq!(output_of("print 7 / 2;"), "3.5\n");
}

#[test]
fn mixed_concatenation() {
    assert_eq!(output_of("print 10 + \"string\" + 15;"), "10string15\n");
    assert_eq!(output_of("print \"n=\" + 2.5;"), "n=2.5\n");
    assert_eq!(output_of("print \"a\" + \"b\";"), "ab\n");
}

#[test]
fn logic_and_comparison() {
    assert_eq!(output_of("print !true; print 5 == 5; print 5 >= 5;"),
               "false\ntrue\ntrue\n");
    assert_eq!(output_of("print 1 < 2; print 2 <= 1; print 3 > 3; print 1 != 2;"),
               "true\nfalse\nfalse\ntrue\n");
}

#[test]
fn truthiness() {
    assert_eq!(output_of("print !nil; print !false; print !0; print !\"\";"),
               "true\ntrue\nfalse\nfalse\n");
}

#[test]
fn equality_across_kinds() {
    assert_eq!(output_of("print nil == nil; print nil == false; print 1 == \"1\"; print \"a\" == \"a\";"),
               "true\nfalse\nfalse\ntrue\n");
}

#[test]
fn number_formatting() {
    assert_eq!(output_of("print 12.0; print 2.50; print 1 / 0; print -1 / 0; print 0 / 0;"),
               "12\n2.5\nInfinity\n-Infinity\nNaN\n");
}

#[test]
fn literals_print_as_text() {
    assert_eq!(output_of("print nil; print true; print \"raw text\";"),
               "nil\ntrue\nraw text\n");
}

#[test]
fn declaration_without_initializer_is_nil() {
    assert_eq!(output_of("var x; print x;"), "nil\n");
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(output_of("var a; print a = 3; print a;"), "3\n3\n");
    assert_eq!(output_of("var a; var b; a = b = \"x\"; print a + b;"), "xx\n");
}

#[test]
fn shadowing_resolves_to_innermost() {
    assert_eq!(output_of("var x = 1; { var x = 2; print x; } print x;"), "2\n1\n");
}

#[test]
fn assignment_in_block_updates_enclosing_binding() {
    assert_eq!(output_of("var a = 1; { a = 2; { a = a + 1; } } print a;"), "3\n");
}

#[test]
fn duplicate_global_declaration_is_a_runtime_error() {
    let (output, message) = runtime_failure("var a = 1; var a = 2;");

    assert_eq!(output, "");
    assert_eq!(message, "Variable 'a' is already defined in this scope.\n[line 1:16]");
}

#[test]
fn undefined_variables() {
    let (_, message) = runtime_failure("print x;");
    assert_eq!(message, "Undefined variable 'x'.\n[line 1:7]");

    let (_, message) = runtime_failure("y = 1;");
    assert_eq!(message, "Undefined variable 'y'.\n[line 1:1]");
}

#[test]
fn block_bindings_do_not_leak() {
    let (output, message) = runtime_failure("{ var inner = 1; print inner; } print inner;");

    assert_eq!(output, "1\n");
    assert_eq!(message, "Undefined variable 'inner'.\n[line 1:39]");
}

#[test]
fn runtime_error_stops_the_program() {
    let (output, message) = runtime_failure("print 1; print -\"a\"; print 2;");

    assert_eq!(output, "1\n");
    assert_eq!(message, "Operand must be a number.\n[line 1:16]");
}

#[test]
fn operand_type_errors() {
    let (_, message) = runtime_failure("print 1 < \"a\";");
    assert_eq!(message, "Operands must be numbers.\n[line 1:9]");

    let (_, message) = runtime_failure("print \"a\" * 2;");
    assert_eq!(message, "Operands must be numbers.\n[line 1:11]");

    let (_, message) = runtime_failure("print nil + 1;");
    assert_eq!(message, "Operands must be numbers or strings.\n[line 1:11]");

    let (_, message) = runtime_failure("print true + \"a\";");
    assert_eq!(message, "Operands must be numbers or strings.\n[line 1:12]");
}

#[test]
fn syntax_errors_prevent_execution() {
    let (output, diagnostics) = run_source("print 1; print (;");

    assert_eq!(output, "");
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn globals_persist_between_runs() {
    let mut interpreter = Interpreter::with_output(Vec::new());

    assert!(run("var a = 1;", &mut interpreter).is_empty());
    assert!(run("print a + 1;", &mut interpreter).is_empty());
    assert!(run("var a = 5;", &mut interpreter).had_runtime_error());

    assert_eq!(interpreter.output(), b"2\n");
}

#[test]
fn scope_is_restored_after_a_fault_in_a_block() {
    let mut interpreter = Interpreter::with_output(Vec::new());

    let diagnostics = run("var a = 1; { var a = 2; { print missing; } }", &mut interpreter);
    assert!(diagnostics.had_runtime_error());
    assert_eq!(interpreter.environment().depth(), 1);

    assert!(run("print a;", &mut interpreter).is_empty());
    assert_eq!(interpreter.output(), b"1\n");
}
