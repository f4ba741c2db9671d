//! CLI argument definitions for `coursereqs`

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use coursereqs::config::ConfigOverrides;
use coursereqs::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "coursereqs",
    about = "Extract course requirements from catalog descriptions",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Course records, one JSON document per course per line (default stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Requirement records, one JSON document per course per line (default stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose progress output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this TOML file instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep references to courses that are not in the input
    #[arg(long)]
    pub no_filter: bool,

    /// Do not derive postrequisites
    #[arg(long)]
    pub no_postreq: bool,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Flags that were not given produce `None` and leave the config untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.verbose.then_some(true),
            filter_codes: self.no_filter.then_some(false),
            add_postreq: self.no_postreq.then_some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_positionals_are_optional() {
        let cli = Cli::try_parse_from(["coursereqs"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["coursereqs", "-", "reqs.jsonl"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("-")));
        assert_eq!(cli.output, Some(PathBuf::from("reqs.jsonl")));
    }

    #[test]
    fn test_rejects_third_positional() {
        assert!(Cli::try_parse_from(["coursereqs", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::try_parse_from(["coursereqs", "courses.jsonl"]).unwrap();
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.filter_codes.is_none());
        assert!(overrides.add_postreq.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::try_parse_from([
            "coursereqs",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/test.log",
            "-v",
            "--no-filter",
            "--no-postreq",
        ])
        .unwrap();

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.filter_codes, Some(false));
        assert_eq!(overrides.add_postreq, Some(false));
    }
}
