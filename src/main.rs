use std::{
    fs,
    io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use treelox::{
    ast::printer::print_statement,
    diagnostics::Diagnostics,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
    run,
};

/// Exit status for malformed input (lexical or syntax errors).
const EXIT_DATA_ERROR: i32 = 65;
/// Exit status when the script cannot be read.
const EXIT_NO_INPUT: i32 = 66;
/// Exit status when the script stopped on a runtime error.
const EXIT_SOFTWARE: i32 = 70;

/// treelox runs scripts written in a small, dynamically typed scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the syntax tree of every statement instead of running it.
    #[arg(long)]
    ast: bool,

    /// Script file to run. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let status = match &args.script {
        Some(path) => run_file(path, args.ast),
        None => run_prompt(args.ast),
    };
    process::exit(status);
}

/// Logs go to stderr, filtered by `TREELOX_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TREELOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run_file(path: &Path, ast: bool) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return EXIT_NO_INPUT;
        },
    };

    let mut interpreter = Interpreter::new();
    let diagnostics = if ast {
        print_ast(&source)
    } else {
        run(&source, &mut interpreter)
    };
    report(&diagnostics);

    if diagnostics.had_error() {
        EXIT_DATA_ERROR
    } else if diagnostics.had_runtime_error() {
        EXIT_SOFTWARE
    } else {
        0
    }
}

/// Reads and runs one line at a time against a single interpreter, so
/// declarations carry over from line to line. Errors are reported and the
/// prompt continues.
fn run_prompt(ast: bool) -> i32 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return 1;
        },
    };
    let mut interpreter = Interpreter::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(e) = editor.add_history_entry(line.as_str())
                {
                    warn!(error = %e, "failed to record prompt history");
                }

                let diagnostics = if ast {
                    print_ast(&line)
                } else {
                    run(&line, &mut interpreter)
                };
                report(&diagnostics);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("leaving interactive prompt");
                return 0;
            },
            Err(e) => {
                eprintln!("{e}");
                return 1;
            },
        }
    }
}

fn print_ast(source: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);

    for statement in parse(&tokens, &mut diagnostics) {
        println!("{}", print_statement(&statement));
    }
    diagnostics
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        println!("{diagnostic}");
    }
}
