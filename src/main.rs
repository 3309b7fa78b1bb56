//! shopdb CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Hands argument parsing and dispatch to cli::run
//! 2. Prints errors as a JSON line on stdout
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use shopdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        if cli::write_error(&e).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
