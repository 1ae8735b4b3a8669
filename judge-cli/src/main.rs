//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use judge_cli::CliError;

fn main() {
    match judge_cli::run() {
        Ok(()) => {}
        // Help, version and usage errors carry their own output and exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("judge: {err}");
            std::process::exit(1);
        }
    }
}
