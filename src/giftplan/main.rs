//! # Giftplan CLI
//!
//! The binary is thin: everything terminal-facing lives in `cli/`, this file
//! only invokes `cli::run()` and turns errors into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
