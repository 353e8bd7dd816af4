//! mcmod: command dispatcher for Minecraft modding scripts.
//!
//! This is the main entry point for the `mcmod` CLI. It captures the raw
//! arguments, resolves aliases, runs the matching subcommand script, and
//! exits with the script's own exit code.

mod cli;
pub mod alias;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod env_guard;
pub mod error;
pub mod exit_codes;
pub mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match dispatch::run(&cli.args) {
        Ok(code) => exit_code(code),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            exit_code(err.exit_code())
        }
    }
}

/// Convert a child or dispatcher exit code into the process exit code.
///
/// Codes outside `0..=255` cannot be expressed portably and become a
/// generic failure.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
