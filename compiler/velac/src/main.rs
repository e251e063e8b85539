//! VeLa CLI
//!
//! Evaluates concrete syntax trees produced by an external parser.

use velac::commands::{ast_file, parse_ast_options, parse_run_options, run_file, EXIT_USAGE};

fn main() {
    velac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => match parse_run_options(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(message) => usage_error(&message, print_run_usage),
        },
        "ast" => match parse_ast_options(&args[2..]) {
            Ok((path, kind)) => ast_file(&path, kind),
            Err(message) => usage_error(&message, print_ast_usage),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("vela {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}

fn usage_error(message: &str, usage: fn()) -> i32 {
    eprintln!("error: {message}");
    eprintln!();
    usage();
    EXIT_USAGE
}

fn print_usage() {
    eprintln!("VeLa expression language");
    eprintln!();
    eprintln!("Usage: vela <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <tree.json>     Build and evaluate a syntax tree");
    eprintln!("  ast <tree.json>     Print the AST a syntax tree builds to");
    eprintln!("  help                Show this message");
    eprintln!("  version             Show version information");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=vela_eval=debug) for diagnostics.");
}

fn print_run_usage() {
    eprintln!("Usage: vela run <tree.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --builder=<kind>           AST builder: listener, visitor (default)");
    eprintln!("  --precision=<n>            Decimal places when REALs become text (default 6)");
    eprintln!("  --tolerance=<x>            Tolerance of =~ (default 1e-6)");
    eprintln!("  --max-depth=<n>            Limit nested function calls");
    eprintln!("  --decimal-separator=<c>    Decimal separator of REAL literals (default .)");
    eprintln!("  --bind=<name>=<value>      Bind a variable before evaluation (repeatable)");
    eprintln!("  --no-intrinsics            Do not install the built-in functions");
    eprintln!("  --json                     Print a JSON report");
}

fn print_ast_usage() {
    eprintln!("Usage: vela ast <tree.json> [--builder=listener|visitor]");
}
