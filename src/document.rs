//! The logging.properties document model.
//!
//! A document is laid out as: header comments, the `loggers=` declaration,
//! logger groups, handler groups, formatter groups. Serialization reproduces
//! that order with one blank line after each part.

use crate::entry::PropertyEntry;
use crate::error::ModelError;
use crate::group::{ConfigGroup, GroupSection, SectionKind, SectionMergeStats};
use crate::loggers::LoggerNames;
use serde::{Deserialize, Serialize};

/// How a source document is applied to a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Merge group by group, keeping target order and appending new groups.
    #[default]
    Incremental,
    /// Swap in the source's declaration and sections wholesale.
    Replace,
}

/// What a document merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub mode: MergeMode,
    pub loggers_added: usize,
    pub loggers: SectionMergeStats,
    pub handlers: SectionMergeStats,
    pub formatters: SectionMergeStats,
}

impl MergeStats {
    pub fn section(&self, kind: SectionKind) -> SectionMergeStats {
        match kind {
            SectionKind::Logger => self.loggers,
            SectionKind::Handler => self.handlers,
            SectionKind::Formatter => self.formatters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingProperties {
    header: Vec<String>,
    logger_names: LoggerNames,
    loggers: GroupSection,
    handlers: GroupSection,
    formatters: GroupSection,
    trailer: Vec<String>,
}

impl Default for LoggingProperties {
    fn default() -> Self {
        Self {
            header: Vec::new(),
            logger_names: LoggerNames::new(),
            loggers: GroupSection::new(SectionKind::Logger),
            handlers: GroupSection::new(SectionKind::Handler),
            formatters: GroupSection::new(SectionKind::Formatter),
            trailer: Vec::new(),
        }
    }
}

impl LoggingProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn logger_names(&self) -> &LoggerNames {
        &self.logger_names
    }

    pub fn trailer(&self) -> &[String] {
        &self.trailer
    }

    pub fn section(&self, kind: SectionKind) -> &GroupSection {
        match kind {
            SectionKind::Logger => &self.loggers,
            SectionKind::Handler => &self.handlers,
            SectionKind::Formatter => &self.formatters,
        }
    }

    fn section_mut(&mut self, kind: SectionKind) -> &mut GroupSection {
        match kind {
            SectionKind::Logger => &mut self.loggers,
            SectionKind::Handler => &mut self.handlers,
            SectionKind::Formatter => &mut self.formatters,
        }
    }

    pub fn group(&self, kind: SectionKind, name: &str) -> Option<&ConfigGroup> {
        self.section(kind).get(name)
    }

    pub fn add_header_line(&mut self, line: impl Into<String>) {
        self.header.push(line.into());
    }

    pub fn add_trailer_line(&mut self, line: impl Into<String>) {
        self.trailer.push(line.into());
    }

    /// Add the names of a `loggers=` declaration line.
    pub fn add_loggers(&mut self, line: &str) {
        self.logger_names.add_from_declaration_line(line);
    }

    pub fn set_declaration_comments(&mut self, comments: Vec<String>) {
        self.logger_names.set_comments(comments);
    }

    pub fn add_config(&mut self, kind: SectionKind, name: &str, entry: &PropertyEntry) {
        self.section_mut(kind).add(name, entry);
    }

    pub fn add_logger_config(&mut self, name: &str, entry: &PropertyEntry) {
        self.add_config(SectionKind::Logger, name, entry);
    }

    pub fn add_handler_config(&mut self, name: &str, entry: &PropertyEntry) {
        self.add_config(SectionKind::Handler, name, entry);
    }

    pub fn add_formatter_config(&mut self, name: &str, entry: &PropertyEntry) {
        self.add_config(SectionKind::Formatter, name, entry);
    }

    /// Apply `other` to this document. Header and trailer are never touched.
    pub fn merge(
        &mut self,
        other: LoggingProperties,
        mode: MergeMode,
    ) -> Result<MergeStats, ModelError> {
        match mode {
            MergeMode::Replace => {
                let stats = MergeStats {
                    mode,
                    loggers_added: other.logger_names.len(),
                    loggers: replaced(&other.loggers),
                    handlers: replaced(&other.handlers),
                    formatters: replaced(&other.formatters),
                };
                self.logger_names = other.logger_names;
                self.loggers = other.loggers;
                self.handlers = other.handlers;
                self.formatters = other.formatters;
                Ok(stats)
            }
            MergeMode::Incremental => Ok(MergeStats {
                mode,
                loggers_added: self.logger_names.merge(&other.logger_names),
                loggers: self.loggers.merge(&other.loggers)?,
                handlers: self.handlers.merge(&other.handlers)?,
                formatters: self.formatters.merge(&other.formatters)?,
            }),
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.header.clone();
        lines.push(String::new());
        lines.extend(self.logger_names.to_lines());
        lines.push(String::new());
        for kind in SectionKind::ALL {
            lines.extend(self.section(kind).to_lines());
        }
        lines.extend(self.trailer.iter().cloned());
        lines
    }

    /// Serialized text, one `\n` after every line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.to_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn replaced(section: &GroupSection) -> SectionMergeStats {
    SectionMergeStats {
        merged: 0,
        appended: section.len(),
    }
}
