//! Merge rules: built-in defaults, lowest precedence of every load.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("merge.mode", "incremental")?
        .set_default("merge.unrecognized_lines", "skip")
}
