//! Subcommand dispatch.
//!
//! Takes a [`Resolution`] from the alias resolver, checks that a script
//! implements the canonical subcommand, and runs it under the configured
//! interpreter with the module search path pointed at the shared modules
//! directory:
//!
//! ```text
//! Validating --missing--> UnknownSubcommand (environment untouched)
//!     |
//!     v
//! EnvironmentOverridden -> Launching --spawn error--> restored -> LaunchFailure
//!                              |
//!                              v
//!                          Running -> restored -> child exit code
//! ```
//!
//! The override lives in a [`ScopedEnv`] guard, so the variable is restored
//! on every path out of the launch step, successful runs included.

mod launcher;


pub use launcher::{Launcher, ProcessLauncher};

use crate::alias::{AliasTable, Resolution};
use crate::context::InstallContext;
use crate::env_guard::ScopedEnv;
use crate::error::{McmodError, Result};
use crate::exit_codes;
use crate::logging;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Existence predicate for subcommand scripts.
///
/// Implemented for closures so tests can inject a lookup without touching
/// the filesystem.
pub trait ScriptLookup {
    fn exists(&self, path: &Path) -> bool;
}

impl<F: Fn(&Path) -> bool> ScriptLookup for F {
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Looks scripts up on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLookup;

impl ScriptLookup for FsLookup {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// A subcommand that passed validation and is ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Canonical subcommand name.
    pub name: String,
    /// Location of the script implementing it.
    pub script_path: PathBuf,
    /// Arguments forwarded to the script (verbose marker included).
    pub args: Vec<String>,
}

impl ResolvedCommand {
    /// Final argument vector: the script path followed by the forwarded arguments.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.script_path.clone().into_os_string())
            .chain(self.args.iter().map(OsString::from))
            .collect()
    }
}

/// Validates and launches subcommands for one install.
pub struct Dispatcher<'a, S, L> {
    ctx: &'a InstallContext,
    lookup: S,
    launcher: L,
}

impl<'a, S: ScriptLookup, L: Launcher> Dispatcher<'a, S, L> {
    pub fn new(ctx: &'a InstallContext, lookup: S, launcher: L) -> Self {
        Self {
            ctx,
            lookup,
            launcher,
        }
    }

    /// Map a resolution onto its script, failing if no script exists.
    ///
    /// Names that are not a single plain path component (empty, absolute,
    /// containing separators or `..`) never match a script.
    pub fn validate(&self, resolution: &Resolution) -> Result<ResolvedCommand> {
        let script_path = self.ctx.script_path(&resolution.name);

        if !is_plain_name(&resolution.name) || !self.lookup.exists(&script_path) {
            return Err(McmodError::UnknownSubcommand {
                name: resolution.name.clone(),
                path: script_path,
            });
        }

        Ok(ResolvedCommand {
            name: resolution.name.clone(),
            script_path,
            args: resolution.forwarded_args().to_vec(),
        })
    }

    /// Run a validated command and return the child's exit code.
    ///
    /// The module search path override is reverted before this returns,
    /// whether the child succeeded, failed, or never started.
    pub fn launch(&mut self, command: &ResolvedCommand) -> Result<i32> {
        let interpreter = self.ctx.config.interpreter_command()?;
        let argv = command.argv();
        let var = &self.ctx.config.module_path_var;

        let outcome = {
            let env = ScopedEnv::set(var, &self.ctx.modules_dir);
            debug!(
                subcommand = %command.name,
                previous = ?env.previous(),
                interpreter = ?interpreter,
                argv = ?argv,
                "launching subcommand"
            );
            self.launcher.launch(&interpreter, &argv)
        };

        match outcome {
            Ok(code) => {
                debug!(
                    subcommand = %command.name,
                    code,
                    success = code == exit_codes::SUCCESS,
                    "subcommand exited"
                );
                Ok(code)
            }
            Err(source) => Err(McmodError::LaunchFailure {
                program: interpreter[0].clone(),
                source,
            }),
        }
    }

    /// Validate then launch.
    pub fn dispatch(&mut self, resolution: &Resolution) -> Result<i32> {
        let command = self.validate(resolution)?;
        self.launch(&command)
    }
}

/// A subcommand name must stay inside the scripts directory.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Entry point: resolve aliases, locate the install, and run the subcommand.
///
/// Returns the exit code the mcmod process should finish with.
pub fn run<S: AsRef<str>>(raw: &[S]) -> Result<i32> {
    let resolution = AliasTable::builtin().resolve(raw)?;
    logging::init(resolution.verbose);
    debug!(
        name = %resolution.name,
        tokens = ?resolution.tokens,
        "resolved invocation"
    );

    let ctx = InstallContext::resolve()?;
    debug!(root = %ctx.root.display(), "install root");

    Dispatcher::new(&ctx, FsLookup, ProcessLauncher).dispatch(&resolution)
}
