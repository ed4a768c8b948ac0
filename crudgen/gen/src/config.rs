//! Generator configuration.

use std::path::{Path, PathBuf};

use crate::errors::GeneratorError;
use crate::output::{PACKAGE_MODULE_FILE, module_name};

/// Default file name of a package option module.
pub const DEFAULT_OPTION_FILE_NAME: &str = "option.rs";

/// Configuration for one generation run.
///
/// Use the builder methods to customize output.
///
/// ## Examples
///
/// ```
/// use crudgen_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .base_path("generated")
///     .dry_run(true);
///
/// assert_eq!(config.option_file_name, "option.rs");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory every `out_file` and option module is written under
    pub base_path: PathBuf,
    /// File name of each package's option module
    pub option_file_name: String,
    /// Print artifacts to stdout instead of writing them
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            option_file_name: DEFAULT_OPTION_FILE_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output base directory.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the option module file name.
    pub fn option_file_name(mut self, name: impl Into<String>) -> Self {
        self.option_file_name = name.into();
        self
    }

    /// Enable or disable dry-run mode.
    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the option file name is empty
    /// or is not a plain file name.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let name = self.option_file_name.as_str();
        if name.is_empty() {
            return Err(GeneratorError::ConfigError(
                "option file name is empty".to_string(),
            ));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(GeneratorError::ConfigError(format!(
                "option file name '{name}' must be a plain file name"
            )));
        }
        if name == PACKAGE_MODULE_FILE {
            return Err(GeneratorError::ConfigError(format!(
                "option file name '{name}' is reserved for the package module"
            )));
        }
        if module_name(Path::new(name)).is_none() {
            return Err(GeneratorError::ConfigError(format!(
                "option file name '{name}' must be a `.rs` file named like a Rust module"
            )));
        }
        Ok(())
    }
}
