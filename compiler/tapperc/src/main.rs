//! Tapper CLI
//!
//! Debugging front end for the tapper DSL lexer.

use tapperc::commands::{lex_file, parse_lex_options};

fn main() {
    tapperc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: tapper lex [--extended] <file|->");
                    std::process::exit(1);
                }
            };
            std::process::exit(lex_file(&options));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tapper {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tapper DSL lexer");
    println!();
    println!("Usage: tapper <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Tokenize and display tokens (`-` reads stdin)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --extended, -e      Enable the extended operator table (- / % ^ & =)");
    println!();
    println!("Environment:");
    println!("  TAPPER_LOG          Log filter, e.g. tapper_lexer=debug (falls back to RUST_LOG)");
    println!("  TAPPER_LOG_TREE     Show logs as a span tree");
}
