//! CLI route: run context for one merge. Dispatches to the merge orchestrator and presentation.

use crate::cli::presentation::format_merge_report;
use crate::config::{ConfigLoader, MergeSettings};
use crate::error::MergeError;
use crate::merge::merge_files;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: the two files and the merge settings.
/// Built from target, source and optional config path using ConfigLoader only.
pub struct RunContext {
    target: PathBuf,
    source: PathBuf,
    settings: MergeSettings,
}

impl RunContext {
    /// Create run context from the two paths and optional config path.
    pub fn new(
        target: PathBuf,
        source: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, MergeError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load()?
        };
        Ok(Self::with_settings(target, source, config.merge))
    }

    pub fn with_settings(target: PathBuf, source: PathBuf, settings: MergeSettings) -> Self {
        Self {
            target,
            source,
            settings,
        }
    }

    pub fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    /// Run the merge and return the text summary.
    pub fn execute(&self) -> Result<String, MergeError> {
        let report = merge_files(&self.target, &self.source, &self.settings)?;
        if report.skipped_lines() > 0 {
            info!(skipped = report.skipped_lines(), "Merge completed with skipped lines");
        }
        Ok(format_merge_report(&report))
    }
}
