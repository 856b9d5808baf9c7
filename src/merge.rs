//! Merge orchestration: parse target and source, merge, write the target back.

use crate::config::MergeSettings;
use crate::document::{LoggingProperties, MergeStats};
use crate::error::MergeError;
use crate::group::SectionKind;
use crate::parse::{ParseWarning, Parsed, Parser, UnrecognizedLinePolicy};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Result of one merge run
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub target: PathBuf,
    pub source: PathBuf,
    pub stats: MergeStats,
    pub target_warnings: Vec<ParseWarning>,
    pub source_warnings: Vec<ParseWarning>,
}

impl MergeReport {
    pub fn skipped_lines(&self) -> usize {
        self.target_warnings.len() + self.source_warnings.len()
    }
}

/// Parse the file at `path` line by line.
pub fn parse_file(path: &Path, policy: UnrecognizedLinePolicy) -> Result<Parsed, MergeError> {
    let file = File::open(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parser = Parser::new(policy);
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if let Err(e) = parser.feed_line(&line) {
            error!(path = %path.display(), "Parse failed: {}", e);
            return Err(e);
        }
    }

    let parsed = parser.finish();
    debug!(
        path = %path.display(),
        loggers = parsed.document.logger_names().len(),
        logger_groups = parsed.document.section(SectionKind::Logger).len(),
        handler_groups = parsed.document.section(SectionKind::Handler).len(),
        formatter_groups = parsed.document.section(SectionKind::Formatter).len(),
        skipped = parsed.warnings.len(),
        "Parsed logging properties"
    );
    Ok(parsed)
}

/// Serialize `document` and overwrite `path` with it.
pub fn write_file(document: &LoggingProperties, path: &Path) -> Result<(), MergeError> {
    fs::write(path, document.render()).map_err(|source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge `source` into `target` and write the result over `target`.
pub fn merge_files(
    target: &Path,
    source: &Path,
    settings: &MergeSettings,
) -> Result<MergeReport, MergeError> {
    info!(
        target = %target.display(),
        source = %source.display(),
        mode = ?settings.mode,
        "Merging logging properties"
    );

    let Parsed {
        document: mut merged,
        warnings: target_warnings,
    } = parse_file(target, settings.unrecognized_lines)?;
    let Parsed {
        document: incoming,
        warnings: source_warnings,
    } = parse_file(source, settings.unrecognized_lines)?;

    let stats = merged.merge(incoming, settings.mode)?;
    write_file(&merged, target)?;

    info!(
        target = %target.display(),
        source = %source.display(),
        loggers_added = stats.loggers_added,
        "Merge written"
    );

    Ok(MergeReport {
        target: target.to_path_buf(),
        source: source.to_path_buf(),
        stats,
        target_warnings,
        source_warnings,
    })
}
