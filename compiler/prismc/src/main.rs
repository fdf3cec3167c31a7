//! Prism CLI
//!
//! Error-tolerant Ruby parsing from the command line.

use prismc::commands::{check_inputs, lex_inputs, parse_inputs};
use prismc::{init_tracing, parse_invocation, CliError, Invocation, Report};
use std::io::IsTerminal;

type Command = fn(&Invocation, bool) -> Result<Vec<Report>, CliError>;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let handler: Command = match command.as_str() {
        "parse" => parse_inputs,
        "lex" => lex_inputs,
        "check" => check_inputs,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-v" => {
            println!("prism {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        // `prism file.rb` checks the file.
        _ if std::path::Path::new(command)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("rb")) =>
        {
            exit_with(run(check_inputs, &args[1..]));
        }
        _ => {
            eprintln!("error: {}", CliError::UnknownCommand(command.clone()));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };
    exit_with(run(handler, &args[2..]));
}

/// Run `handler` and print every report in input order. `Ok(false)` when
/// some input had syntax errors.
fn run(handler: Command, args: &[String]) -> Result<bool, CliError> {
    let invocation = parse_invocation(args)?;
    let is_tty = std::io::stderr().is_terminal();
    let reports = handler(&invocation, is_tty)?;
    let mut ok = true;
    for report in reports {
        print!("{}", report.stdout);
        eprint!("{}", report.stderr);
        ok &= !report.failed;
    }
    Ok(ok)
}

fn exit_with(outcome: Result<bool, CliError>) -> ! {
    match outcome {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Prism, an error-tolerant Ruby parser");
    println!();
    println!("Usage: prism <command> [options] [files...]");
    println!();
    println!("Commands:");
    println!("  parse <file.rb>      Parse and print the syntax tree");
    println!("  lex <file.rb>        Print every token with the lexer state after it");
    println!("  check <file.rb>      Report syntax errors and warnings only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  -e <code>                  Use <code> as the source (repeatable)");
    println!("  --encoding <name>          Source encoding (default: UTF-8)");
    println!("  --line <n>                 Line number of the first line (default: 1)");
    println!("  --frozen-string-literal    Treat string literals as frozen");
    println!("  --no-frozen-string-literal Treat string literals as mutable");
    println!("  --no-warnings, -W0         Report errors only");
    println!("  --color <mode>             auto (default), always or never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=prism_parse=debug Trace parsing to stderr");
    println!("  PRISM_LOG_TREE=1           Print traces as an indented tree");
    println!();
    println!("Examples:");
    println!("  prism parse app.rb");
    println!("  prism check lib/*.rb            # parsed in parallel");
    println!("  prism lex -e 'foo = 1; foo'");
    println!("  prism check --encoding Shift_JIS legacy.rb");
}
