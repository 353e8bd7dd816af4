//! Install root resolution for mcmod.
//!
//! Subcommand scripts and shared modules live next to the `mcmod` executable:
//!
//! ```text
//! <root>/
//!   mcmod.yaml        (optional)
//!   scripts/<name>.py
//!   modules/
//! ```
//!
//! `MCMOD_ROOT` overrides the root, which is how tests and development
//! checkouts point the dispatcher at a different tree.

use crate::config::Config;
use crate::error::{McmodError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the install root.
pub const ROOT_ENV_VAR: &str = "MCMOD_ROOT";

/// Resolved paths for an mcmod installation.
///
/// All paths are absolute when resolved through [`InstallContext::resolve`].
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Installation root.
    pub root: PathBuf,

    /// Directory containing one script per subcommand.
    pub scripts_dir: PathBuf,

    /// Directory of shared modules put on the module search path.
    pub modules_dir: PathBuf,

    /// Layout settings the paths above were derived from.
    pub config: Config,
}

impl InstallContext {
    /// Resolve the install context for the running process.
    ///
    /// Uses `MCMOD_ROOT` when set and non-empty, otherwise the directory
    /// containing the current executable.
    pub fn resolve() -> Result<Self> {
        let root = match env::var_os(ROOT_ENV_VAR) {
            Some(root) if !root.is_empty() => PathBuf::from(root),
            _ => executable_dir()?,
        };

        let root = root.canonicalize().map_err(|e| {
            McmodError::ConfigError(format!(
                "install root '{}' is not accessible: {}",
                root.display(),
                e
            ))
        })?;

        Self::resolve_from(root)
    }

    /// Resolve the install context for a known root directory.
    ///
    /// Loads `mcmod.yaml` from the root if present.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let config = Config::load_from_root(&root)?;
        Ok(Self::with_config(root, config))
    }

    /// Build a context from a root and an already loaded config.
    pub fn with_config(root: PathBuf, config: Config) -> Self {
        let scripts_dir = root.join(&config.scripts_dir);
        let modules_dir = root.join(&config.modules_dir);

        Self {
            root,
            scripts_dir,
            modules_dir,
            config,
        }
    }

    /// Path of the script implementing `name`.
    ///
    /// Pure path arithmetic; whether the file exists is checked by the caller.
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_dir
            .join(format!("{}.{}", name, self.config.extension))
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        McmodError::ConfigError(format!(
            "failed to locate the mcmod executable: {}\nFix: set {} to the install root.",
            e, ROOT_ENV_VAR
        ))
    })?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        McmodError::ConfigError(format!(
            "executable path '{}' has no parent directory\nFix: set {} to the install root.",
            exe.display(),
            ROOT_ENV_VAR
        ))
    })
}
