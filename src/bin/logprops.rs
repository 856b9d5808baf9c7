//! Logprops CLI Binary
//!
//! Merges a source logging.properties file into a target one in place.

use clap::Parser;
use logprops::cli::{Cli, RunContext};
use logprops::config::ConfigLoader;
use logprops::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    // Before config loading, so config errors are logged too.
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Logprops starting");

    let context = match RunContext::new(
        cli.target.clone(),
        cli.source.clone(),
        cli.config.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", logprops::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute() {
        Ok(output) => {
            info!("Merge completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Merge failed: {}", e);
            eprintln!("{}", logprops::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// `[logging]` from the config file (or defaults if it cannot be read), with
/// `--verbose` and the `--log-*` flags applied on top. `LOGPROPS_LOG*` still
/// wins inside `init_logging`.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load()
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
