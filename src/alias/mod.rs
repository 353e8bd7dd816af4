//! Alias resolution for raw mcmod invocations.
//!
//! Turns the tokens the user typed into a canonical subcommand name plus the
//! token list that will be forwarded to it. Resolution is a pure function of
//! its input and the static [`AliasTable`]; it never touches the filesystem
//! or the environment.

use crate::error::{McmodError, Result};


/// Canonical name of the help subcommand.
pub const HELP: &str = "help";

/// Canonical name of the version subcommand.
pub const VERSION: &str = "version";

/// Normalized verbose flag forwarded to subcommands.
pub const VERBOSE_FLAG: &str = "-V";

/// What an alias expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    /// Rewrite the token to this canonical subcommand name.
    Subcommand(&'static str),
    /// The next token is the real subcommand; forward `-V` to it.
    Verbose,
}

/// Built-in aliases. Adding an alias is a change to this table only.
const BUILTIN_ALIASES: &[(&str, AliasTarget)] = &[
    ("h", AliasTarget::Subcommand(HELP)),
    ("?", AliasTarget::Subcommand(HELP)),
    ("v", AliasTarget::Subcommand(VERSION)),
    ("ver", AliasTarget::Subcommand(VERSION)),
    ("V", AliasTarget::Verbose),
    ("verbose", AliasTarget::Verbose),
];

/// Static mapping from alternate spellings to alias targets.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, AliasTarget)],
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Output of alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical subcommand name.
    pub name: String,
    /// Adjusted token list; the first token is always `name`.
    pub tokens: Vec<String>,
    /// Whether the verbose alias was used.
    pub verbose: bool,
}

impl Resolution {
    /// Tokens forwarded to the subcommand, excluding its name.
    pub fn forwarded_args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

impl AliasTable {
    /// The table of aliases mcmod ships with.
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ALIASES,
        }
    }

    /// Look up an already dash-stripped name.
    pub fn lookup(&self, name: &str) -> Option<AliasTarget> {
        self.entries
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, target)| *target)
    }

    /// Resolve a raw invocation into a canonical name and forwarded tokens.
    ///
    /// # Errors
    ///
    /// Returns [`McmodError::MissingArgument`] if the verbose alias is not
    /// followed by a subcommand token.
    pub fn resolve<S: AsRef<str>>(&self, raw: &[S]) -> Result<Resolution> {
        let mut tokens: Vec<String> = raw.iter().map(|s| s.as_ref().to_string()).collect();
        if tokens.is_empty() {
            tokens.push(HELP.to_string());
        }

        let mut name = strip_dashes(&tokens[0]).to_string();
        let mut verbose = false;

        if self.lookup(&name) == Some(AliasTarget::Verbose) {
            let Some(real) = tokens.get_mut(1) else {
                return Err(McmodError::MissingArgument(
                    "subcommand after --verbose".to_string(),
                ));
            };
            name = strip_dashes(real).to_string();
            *real = VERBOSE_FLAG.to_string();
            verbose = true;
        }

        if let Some(AliasTarget::Subcommand(canonical)) = self.lookup(&name) {
            name = canonical.to_string();
        }

        tokens[0] = name.clone();
        Ok(Resolution {
            name,
            tokens,
            verbose,
        })
    }
}

/// Strip every leading `-` so `-build`, `--build` and `build` match alike.
pub fn strip_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}
