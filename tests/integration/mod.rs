//! Integration tests for logging.properties merging

mod cli_merge;
mod file_merge;
mod test_utils;
