//! CLI parse: clap types for logprops. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Merge an operator-supplied logging.properties into an application default
#[derive(Parser, Debug)]
#[command(name = "logprops")]
#[command(about = "Merge logging.properties files while preserving layout", version)]
pub struct Cli {
    /// The target logging properties file to merge into (overwritten)
    #[arg(long)]
    pub target: PathBuf,

    /// The source logging properties file merged into the target
    #[arg(long)]
    pub source: PathBuf,

    /// Configuration file path (overrides the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
