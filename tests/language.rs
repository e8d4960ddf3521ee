use std::fs;

use pretty_assertions::assert_eq;
use treelox::{diagnostics::Diagnostics, interpreter::evaluator::core::Interpreter, run};
use walkdir::WalkDir;

/// What a script under `tests/scripts` declares about its own run, through
/// `// expect: <line>`, `// expect syntax error` and
/// `// expect runtime error: <message>` comments.
#[derive(Debug, Default)]
struct Expectation {
    output:        Vec<String>,
    syntax_error:  bool,
    runtime_error: Option<String>,
}

impl Expectation {
    fn parse(source: &str) -> Self {
        let mut expectation = Self::default();

        for line in source.lines() {
            if let Some(expected) = marker(line, "// expect: ") {
                expectation.output.push(expected.to_string());
            } else if let Some(message) = marker(line, "// expect runtime error: ") {
                expectation.runtime_error = Some(message.to_string());
            } else if line.contains("// expect syntax error") {
                expectation.syntax_error = true;
            }
        }

        expectation
    }
}

fn marker<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.find(prefix).map(|start| line[start + prefix.len()..].trim_end())
}

fn run_source(source: &str) -> (String, Diagnostics) {
    let mut interpreter = Interpreter::with_output(Vec::new());
    let diagnostics = run(source, &mut interpreter);
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    (output, diagnostics)
}

#[test]
fn scripts_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").sort_by_file_name()
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expectation = Expectation::parse(&source);
        count += 1;

        let (output, diagnostics) = run_source(&source);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines, expectation.output, "output of {path:?}");
        assert_eq!(diagnostics.had_error(),
                   expectation.syntax_error,
                   "syntax errors of {path:?}");

        let runtime_error = diagnostics.iter()
                                       .find(|d| d.is_runtime())
                                       .map(|d| d.message().to_string());
        assert_eq!(runtime_error, expectation.runtime_error, "runtime error of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_success(src: &str) {
    let (_, diagnostics) = run_source(src);
    if !diagnostics.is_empty() {
        let reports: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        panic!("Script failed: {reports:?}");
    }
}

fn assert_failure(src: &str) {
    let (_, diagnostics) = run_source(src);
    assert!(!diagnostics.is_empty(), "Script succeeded but was expected to fail");
}

#[test]
fn well_formed_parenthesized_expressions_run() {
    assert_success("print (1);");
    assert_success("print ((1 + 2) * (3 - 4));");
    assert_success("print (\"a\" + (1 + 2));");
    assert_success("print (!(1 == 2));");
    assert_success("print ((((nil))));");
}

#[test]
fn declarations_and_blocks() {
    assert_success("var a = 1; { var b = a + 1; { var c = b + 1; a = c; } }");
    assert_success("var empty; { }");
}

#[test]
fn faults_are_reported() {
    assert_failure("print 1 +;");
    assert_failure("var 1 = 2;");
    assert_failure("print undefined;");
    assert_failure("print -nil;");
    assert_failure("var a; var a;");
    assert_failure("print \"open;");
    assert_failure("print 1 $ 2;");
}
