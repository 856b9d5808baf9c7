//! Configuration System
//!
//! Runtime options for a merge run: how the source is applied and what happens
//! to lines that fit no group, plus logging settings. Layered from built-in
//! defaults, a config file and `LOGPROPS_*` environment variables.

use crate::document::MergeMode;
use crate::logging::LoggingConfig;
use crate::parse::UnrecognizedLinePolicy;
use serde::{Deserialize, Serialize};

mod defaults;
mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogpropsConfig {
    /// Merge behavior
    #[serde(default)]
    pub merge: MergeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Merge behavior settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    /// incremental (default) or replace
    #[serde(default)]
    pub mode: MergeMode,

    /// skip (default) or reject
    #[serde(default)]
    pub unrecognized_lines: UnrecognizedLinePolicy,
}
