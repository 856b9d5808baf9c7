//! Config loading facade.

use super::{defaults, sources, LogpropsConfig};
use crate::error::MergeError;
use std::path::Path;
use tracing::debug;

/// Loads [`LogpropsConfig`] from layered sources.
///
/// Precedence (highest to lowest):
/// 1. `LOGPROPS_*` environment variables
/// 2. Config file (explicit path, or the global file when present)
/// 3. Built-in defaults
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using the global config file, if one exists.
    pub fn load() -> Result<LogpropsConfig, MergeError> {
        let builder = defaults::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::env::add_to_builder(builder);
        let config: LogpropsConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Load using `path` in place of the global config file.
    pub fn load_from_file(path: &Path) -> Result<LogpropsConfig, MergeError> {
        let builder = defaults::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;
        let builder = sources::env::add_to_builder(builder);
        let config: LogpropsConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }
}
