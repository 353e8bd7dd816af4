//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Name of the optional config file at the install root.
pub const CONFIG_FILE_NAME: &str = "mcmod.yaml";

/// Layout and runtime settings for dispatching subcommand scripts.
///
/// This struct represents the contents of `<root>/mcmod.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one script per subcommand, relative to the root.
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,

    /// Directory of shared modules exposed to scripts, relative to the root.
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,

    /// File extension of subcommand scripts, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Command line used to run a script (split with shell quoting rules).
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Environment variable the interpreter reads its module search path from.
    #[serde(default = "default_module_path_var")]
    pub module_path_var: String,
}

fn default_scripts_dir() -> String {
    "scripts".to_string()
}

fn default_modules_dir() -> String {
    "modules".to_string()
}

fn default_extension() -> String {
    "py".to_string()
}

fn default_interpreter() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

fn default_module_path_var() -> String {
    "PYTHONPATH".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            modules_dir: default_modules_dir(),
            extension: default_extension(),
            interpreter: default_interpreter(),
            module_path_var: default_module_path_var(),
        }
    }
}
