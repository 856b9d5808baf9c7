//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::MergeError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &MergeError) -> String {
    match e {
        MergeError::UnrecognizedLine { .. } => format!(
            "{} (set merge.unrecognized_lines = \"skip\" to skip such lines)",
            e
        ),
        _ => e.to_string(),
    }
}
