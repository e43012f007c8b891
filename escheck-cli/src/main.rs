//! Command-line driver for [`escheck`]: validates a file or an inline code
//! string and reports the verdict the way the original hand-written
//! implementation did.

use clap::Parser;
use std::process::ExitCode;

const PROGRAM_NAME: &str = "escheck";

/// A dependency-free syntactic validator for an ECMAScript-like language.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to a source file to validate.
    path: Option<String>,

    /// Parse JavaScript-like code from a string instead of a file.
    #[arg(short = 's', num_args = 0..=1)]
    string_source: Option<Option<String>>,

    /// Show usage information.
    #[arg(short = 'h', long = "help")]
    help: bool,
}

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .init()
        .unwrap_or_else(|e| eprintln!("warning: failed to initialize logger: {e}"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print_usage();
            log::debug!("argument parsing failed: {err}");
            return ExitCode::from(1);
        }
    };

    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let code = match cli.string_source {
        Some(None) => {
            eprintln!("Error: Missing JavaScript code string");
            1
        }
        Some(Some(source)) => run_string(&source),
        None => match cli.path {
            Some(path) => run_file(&path),
            None => {
                print_usage();
                1
            }
        },
    };

    ExitCode::from(code)
}

/// Validates the file at `path`, printing the verdict to stdout and any
/// error to stderr. Returns the process exit code.
fn run_file(path: &str) -> u8 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Error: Cannot open file '{path}'");
            return 1;
        }
    };

    match escheck::validate(&source) {
        Ok(()) => {
            println!("\u{2713} Syntax is valid");
            println!("File: {path}");
            println!("Status: PASSED");
            0
        }
        Err(diagnostic) => {
            println!("\u{2717} Syntax error detected");
            println!("File: {path}");
            println!("Status: FAILED");
            eprintln!("{diagnostic}");
            1
        }
    }
}

/// Validates `source` directly, printing the verdict to stdout and any error
/// to stderr. Returns the process exit code.
fn run_string(source: &str) -> u8 {
    match escheck::validate(source) {
        Ok(()) => {
            println!("\u{2713} Syntax is valid");
            0
        }
        Err(diagnostic) => {
            println!("\u{2717} Syntax error detected");
            eprintln!("{diagnostic}");
            1
        }
    }
}

fn print_usage() {
    println!("ECMAScript-like Syntax Validator (hand-written in Rust)");
    println!("========================================================\n");
    println!("Usage:");
    println!("  {PROGRAM_NAME} <file>");
    println!("  {PROGRAM_NAME} -s \"<code>\"\n");
    println!("Options:");
    println!("  -s    Validate code from a string");
    println!("  -h    Show this help message\n");
    println!("Examples:");
    println!("  {PROGRAM_NAME} script.js");
    println!("  {PROGRAM_NAME} -s \"let x = 10; console.log(x);\"");
    println!("\nFeatures:");
    println!("  - Automatic Semicolon Insertion (ASI) per the ECMAScript grammar");
    println!("  - Detailed error reporting with line/column information");
    println!("  - No lexer/parser-generator dependency");
}
