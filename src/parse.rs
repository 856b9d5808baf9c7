//! Parsing of logging.properties text into the document model.

mod automaton;
mod line;

pub use automaton::{parse_str, ParseWarning, Parsed, Parser, UnrecognizedLinePolicy};
pub use line::UnrecognizedReason;
