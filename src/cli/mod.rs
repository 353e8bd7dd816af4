//! CLI argument parsing for mcmod.
//!
//! Uses clap derive macros, but only to capture the raw token list: the
//! tokens themselves are interpreted by the alias resolver, so clap's own
//! `-h/--help` and `-V/--version` flags are disabled and hyphenated tokens
//! are accepted as values.
//!
//! A leading `--` is still clap's end-of-options marker and is consumed:
//! `mcmod -- build` runs `build` and a bare `mcmod --` runs `help`. A `--`
//! after the subcommand name is forwarded to the script unchanged.

use clap::Parser;

/// mcmod: CLI tool for Minecraft modding.
///
/// Runs `<root>/scripts/<COMMAND>.py` with the shared modules directory on
/// the module search path. `mcmod help` lists the available commands.
#[derive(Parser, Debug)]
#[command(name = "mcmod")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Subcommand (or alias) followed by the arguments passed to it.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
