//! Command-line interface entry point for `coursereqs`

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use coursereqs::config::Config;
use coursereqs::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use coursereqs::{debug, error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    config.apply_overrides(&args.to_config_overrides());

    let mut level = args.log_level.map_or_else(
        || Level::parse(&config.logging.level).unwrap_or(Level::Warn),
        Level::from,
    );
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    if config.logging.verbose {
        enable_verbose();
    }
    set_level(level);

    if !config.logging.file.is_empty() {
        let log_path = std::path::PathBuf::from(&config.logging.file);
        if init_file_logging(&log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!("✗ Failed to initialize file logging at: {}", log_path.display());
        }
    }

    debug!("Effective configuration:\n{config}");

    if let Err(e) = commands::extract::run(args.input.as_deref(), args.output.as_deref(), &config)
    {
        error!("Extraction aborted");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
