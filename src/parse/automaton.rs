//! Line-driven state machine that builds a [`LoggingProperties`] document.
//!
//! States advance `Init -> Header -> ExpectingDeclaration -> Holding`. Once
//! `Holding` is reached no further section detection happens: group identity
//! comes from each property key, not from its position in the file.

use super::line::{self, Line, UnrecognizedReason};
use crate::document::LoggingProperties;
use crate::entry::PropertyEntry;
use crate::error::MergeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// What to do with a content line that fits no group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedLinePolicy {
    /// Log a warning, record it and keep going.
    #[default]
    Skip,
    /// Fail the parse with [`MergeError::UnrecognizedLine`].
    Reject,
}

/// A skipped content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line_number: usize,
    pub line: String,
    pub reason: UnrecognizedReason,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line_number, self.reason, self.line)
    }
}

/// A finished parse: the document plus every line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: LoggingProperties,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug)]
enum ParseState {
    Init,
    Header,
    /// Comments seen here belong to the declaration line.
    ExpectingDeclaration { comments: Vec<String> },
    /// Comments seen here wait in `pending` for the next property line.
    Holding { pending: PropertyEntry },
}

impl ParseState {
    fn name(&self) -> &'static str {
        match self {
            ParseState::Init => "init",
            ParseState::Header => "header",
            ParseState::ExpectingDeclaration { .. } => "expecting declaration",
            ParseState::Holding { .. } => "holding",
        }
    }
}

/// One parse of one file. Create a fresh parser per input.
#[derive(Debug)]
pub struct Parser {
    state: ParseState,
    document: LoggingProperties,
    policy: UnrecognizedLinePolicy,
    warnings: Vec<ParseWarning>,
    line_number: usize,
}

impl Parser {
    pub fn new(policy: UnrecognizedLinePolicy) -> Self {
        Self {
            state: ParseState::Init,
            document: LoggingProperties::new(),
            policy,
            warnings: Vec::new(),
            line_number: 0,
        }
    }

    /// Feed one raw line (terminator may or may not be present).
    pub fn feed_line(&mut self, raw: &str) -> Result<(), MergeError> {
        self.line_number += 1;
        let raw = if self.line_number == 1 {
            raw.strip_prefix('\u{feff}').unwrap_or(raw)
        } else {
            raw
        };
        match Line::classify(raw) {
            Line::Comment(comment) => {
                self.comment_in(comment);
                Ok(())
            }
            Line::Blank => {
                self.empty_line();
                Ok(())
            }
            Line::Content(content) => self.content_line(content),
        }
    }

    pub fn finish(self) -> Parsed {
        let mut document = self.document;
        let leftover = match self.state {
            ParseState::Init | ParseState::Header => Vec::new(),
            ParseState::ExpectingDeclaration { comments } => comments,
            ParseState::Holding { mut pending } => pending.take_comments(),
        };
        if !leftover.is_empty() {
            debug!(lines = leftover.len(), "Keeping trailing comments");
        }
        for comment in leftover {
            document.add_trailer_line(comment);
        }
        Parsed {
            document,
            warnings: self.warnings,
        }
    }

    fn transition(&mut self, next: ParseState) {
        debug!(
            line = self.line_number,
            from = self.state.name(),
            to = next.name(),
            "Parse state transition"
        );
        self.state = next;
    }

    fn comment_in(&mut self, comment: &str) {
        match &mut self.state {
            ParseState::Init => {
                self.document.add_header_line(comment);
                self.transition(ParseState::Header);
            }
            ParseState::Header => self.document.add_header_line(comment),
            ParseState::ExpectingDeclaration { comments } => comments.push(comment.to_string()),
            ParseState::Holding { pending } => pending.add_comment(comment),
        }
    }

    fn empty_line(&mut self) {
        if let ParseState::Header = self.state {
            self.transition(ParseState::ExpectingDeclaration {
                comments: Vec::new(),
            });
        }
    }

    fn content_line(&mut self, content: &str) -> Result<(), MergeError> {
        match &mut self.state {
            ParseState::Init | ParseState::Header => {
                self.declaration_or_property(Vec::new(), content)
            }
            ParseState::ExpectingDeclaration { comments } => {
                let comments = std::mem::take(comments);
                self.declaration_or_property(comments, content)
            }
            ParseState::Holding { .. } => self.property_line(content),
        }
    }

    /// First content line: either the declaration, or a property when the
    /// declaration is missing.
    fn declaration_or_property(
        &mut self,
        comments: Vec<String>,
        content: &str,
    ) -> Result<(), MergeError> {
        if line::is_declaration(content) {
            self.document.add_loggers(content);
            self.document.set_declaration_comments(comments);
            self.transition(ParseState::Holding {
                pending: PropertyEntry::default(),
            });
            return Ok(());
        }

        debug!(line = self.line_number, "No loggers declaration before first property");
        let mut pending = PropertyEntry::default();
        for comment in comments {
            pending.add_comment(comment);
        }
        self.transition(ParseState::Holding { pending });
        self.property_line(content)
    }

    fn property_line(&mut self, content: &str) -> Result<(), MergeError> {
        let property = match line::parse_property(content) {
            Ok(property) => property,
            Err(reason) => return self.unrecognized(content, reason),
        };

        if let ParseState::Holding { pending } = &mut self.state {
            pending.set_key_value(property.key, property.value);
            self.document
                .add_config(property.kind, property.group, pending);
            pending.reset();
        }
        Ok(())
    }

    fn unrecognized(
        &mut self,
        content: &str,
        reason: UnrecognizedReason,
    ) -> Result<(), MergeError> {
        match self.policy {
            UnrecognizedLinePolicy::Skip => {
                warn!(
                    line = self.line_number,
                    content,
                    reason = %reason,
                    "Skipping unrecognized line"
                );
                self.warnings.push(ParseWarning {
                    line_number: self.line_number,
                    line: content.to_string(),
                    reason,
                });
                Ok(())
            }
            UnrecognizedLinePolicy::Reject => Err(MergeError::UnrecognizedLine {
                line_number: self.line_number,
                line: content.to_string(),
            }),
        }
    }
}

/// Parse in-memory text.
pub fn parse_str(text: &str, policy: UnrecognizedLinePolicy) -> Result<Parsed, MergeError> {
    let mut parser = Parser::new(policy);
    for raw in text.lines() {
        parser.feed_line(raw)?;
    }
    Ok(parser.finish())
}
