//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{McmodError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the mcmod.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(McmodError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            McmodError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `mcmod.yaml` from the install root, falling back to defaults
    /// when the file does not exist.
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            McmodError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - no field may be empty
    /// - `extension` must not have a leading dot
    /// - `scripts_dir` and `modules_dir` must be relative paths
    /// - `interpreter` must split into at least one word
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("scripts_dir", &self.scripts_dir),
            ("modules_dir", &self.modules_dir),
            ("extension", &self.extension),
            ("interpreter", &self.interpreter),
            ("module_path_var", &self.module_path_var),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(McmodError::ConfigError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        if self.extension.starts_with('.') {
            return Err(McmodError::ConfigError(format!(
                "config validation failed: extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.extension,
                self.extension.trim_start_matches('.')
            )));
        }

        for (name, dir) in [
            ("scripts_dir", &self.scripts_dir),
            ("modules_dir", &self.modules_dir),
        ] {
            if Path::new(dir).is_absolute() {
                return Err(McmodError::ConfigError(format!(
                    "config validation failed: {} must be relative to the install root (found '{}')",
                    name, dir
                )));
            }
        }

        if self.module_path_var.contains('=') {
            return Err(McmodError::ConfigError(format!(
                "config validation failed: module_path_var must not contain '=' (found '{}')",
                self.module_path_var
            )));
        }

        self.interpreter_command()?;
        Ok(())
    }

    /// Split `interpreter` into program and leading arguments.
    pub fn interpreter_command(&self) -> Result<Vec<String>> {
        let words = shell_words::split(&self.interpreter).map_err(|e| {
            McmodError::ConfigError(format!(
                "failed to parse interpreter '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.interpreter, e
            ))
        })?;

        if words.is_empty() {
            return Err(McmodError::ConfigError(format!(
                "interpreter is empty after parsing: '{}'",
                self.interpreter
            )));
        }

        Ok(words)
    }
}
