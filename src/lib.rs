//! Logprops: format-preserving merge of logging.properties files
//!
//! Parses two logging.properties files (a header, one `loggers=` declaration,
//! then logger, handler and formatter property groups) into a structured
//! document, merges the source into the target group by group, and writes the
//! result back without disturbing the target's layout.

pub mod cli;
pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod group;
pub mod loggers;
pub mod logging;
pub mod merge;
pub mod parse;
