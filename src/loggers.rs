//! The `loggers=` declaration line.

/// Key of the declaration line.
pub const DECLARATION_KEY: &str = "loggers";

/// Ordered, duplicate-free set of declared logger names.
///
/// Comments written directly above the declaration travel with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerNames {
    comments: Vec<String>,
    names: Vec<String>,
}

impl LoggerNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }

    /// Insert `name` unless already present. Returns whether it was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Parse a `loggers=a,b,c` line and add every name.
    pub fn add_from_declaration_line(&mut self, line: &str) {
        let Some((_, list)) = line.split_once('=') else {
            return;
        };
        for name in list.split(',') {
            self.insert(name.trim());
        }
    }

    /// Append every name from `other` not already declared. Returns how many were added.
    pub fn merge(&mut self, other: &LoggerNames) -> usize {
        let mut added = 0;
        for name in &other.names {
            if self.insert(name) {
                added += 1;
            }
        }
        added
    }

    /// Declaration comments followed by the `loggers=` line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.comments.clone();
        lines.push(format!("{}={}", DECLARATION_KEY, self.names.join(",")));
        lines
    }
}
