//! Configuration module for `coursereqs`

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$COURSEREQS";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Extraction switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Drop references to courses that are not part of the input
    #[serde(default = "default_true")]
    pub filter_codes: bool,
    /// Derive postrequisites from the prerequisite lists
    #[serde(default = "default_true")]
    pub add_postreq: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            filter_codes: true,
            add_postreq: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override the allow-list filtering switch
    pub filter_codes: Option<bool>,
    /// Override the postreq switch
    pub add_postreq: Option<bool>,
}

impl Config {
    /// Get the `$COURSEREQS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursereqs`
    /// - macOS: `~/Library/Application Support/coursereqs`
    /// - Windows: `%APPDATA%\coursereqs`
    #[must_use]
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursereqs")
    }

    /// Get the user config file path
    ///
    /// The file is only ever read; `coursereqs` does not create it.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in. Boolean fields already carry their serde defaults.
    ///
    /// # Returns
    ///
    /// `true` if any fields were changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values in the overrides replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load(None)?;
    /// let overrides = ConfigOverrides {
    ///     add_postreq: Some(false),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(filter_codes) = overrides.filter_codes {
            self.extract.filter_codes = filter_codes;
        }
        if let Some(add_postreq) = overrides.add_postreq {
            self.extract.add_postreq = add_postreq;
        }
    }

    /// Expand `$COURSEREQS` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_config_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSEREQS` is expanded in
    /// string values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Read a config file and merge missing fields from the defaults
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
        let mut config = Self::from_toml(&content)
            .map_err(|e| format!("invalid config {}: {e}", path.display()))?;
        config.merge_defaults(&Self::from_defaults());
        Ok(config)
    }

    /// Load the effective configuration
    ///
    /// - An explicit path must exist and parse.
    /// - Otherwise the user config file is used when present and valid.
    /// - Otherwise the compiled-in defaults are returned.
    ///
    /// Nothing is written to disk.
    ///
    /// # Errors
    /// Returns an error only when an explicit path cannot be loaded
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            if let Ok(config) = Self::load_from(&config_file) {
                return Ok(config);
            }
        }

        Ok(Self::from_defaults())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[extract]")?;
        writeln!(f, "  filter_codes = {}", self.extract.filter_codes)?;
        writeln!(f, "  add_postreq = {}", self.extract.add_postreq)?;

        Ok(())
    }
}
