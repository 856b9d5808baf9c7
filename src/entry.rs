//! Property entries: one `key=value` line plus the comments written above it.

use crate::error::ModelError;
use tracing::debug;

/// A single property line with its leading comment lines.
///
/// When `merge_as_comma_set` is set, the value is treated as an ordered set of
/// comma-separated tokens during merge instead of being replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEntry {
    comments: Vec<String>,
    key: String,
    value: String,
    merge_as_comma_set: bool,
}

impl PropertyEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            comments: Vec::new(),
            key: key.into(),
            value: value.into(),
            merge_as_comma_set: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn merge_as_comma_set(&self) -> bool {
        self.merge_as_comma_set
    }

    pub fn set_merge_as_comma_set(&mut self, flag: bool) {
        self.merge_as_comma_set = flag;
    }

    /// Assign key and value. The value format is not validated.
    pub fn set_key_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.key = key.into();
        self.value = value.into();
    }

    /// Append a comment line; comments belong to the next key/value line.
    pub fn add_comment(&mut self, line: impl Into<String>) {
        self.comments.push(line.into());
    }

    /// Whether the entry holds anything at all (key or buffered comments).
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.comments.is_empty()
    }

    /// Clear every field, including the merge policy flag.
    pub fn reset(&mut self) {
        self.key.clear();
        self.value.clear();
        self.comments.clear();
        self.merge_as_comma_set = false;
    }

    /// Take the buffered comments out of the entry, leaving it without any.
    pub fn take_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.comments)
    }

    /// Merge `other` into this entry.
    ///
    /// Non-empty incoming comments replace ours. Comma-set values are unioned
    /// in first-seen order; plain values are replaced.
    pub fn merge(&mut self, other: &PropertyEntry) -> Result<(), ModelError> {
        if self.key != other.key {
            return Err(ModelError::EntryKeyMismatch {
                expected: self.key.clone(),
                found: other.key.clone(),
            });
        }

        if !other.comments.is_empty() {
            self.comments = other.comments.clone();
        }

        if self.merge_as_comma_set {
            let merged = union_comma_set(&self.value, &other.value);
            debug!(key = %self.key, from = %self.value, to = %merged, "Unioned comma-set value");
            self.value = merged;
        } else {
            self.value = other.value.clone();
        }
        Ok(())
    }

    /// Comment lines followed by the `key=value` line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.comments.clone();
        lines.push(format!("{}={}", self.key, self.value));
        lines
    }
}

fn union_comma_set(existing: &str, incoming: &str) -> String {
    let mut tokens: Vec<&str> = if existing.is_empty() {
        Vec::new()
    } else {
        existing.split(',').collect()
    };
    for token in incoming.split(',') {
        if token.is_empty() || tokens.contains(&token) {
            continue;
        }
        tokens.push(token);
    }
    tokens.join(",")
}
