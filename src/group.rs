//! Named property groups and the per-kind sections that hold them.
//!
//! A group collects every property of one logger, handler or formatter. The
//! three kinds share one group type; the kind lives on the owning section.

use crate::entry::PropertyEntry;
use crate::error::ModelError;
use std::fmt;
use tracing::debug;

/// Which section of the document a group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Logger,
    Handler,
    Formatter,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Logger,
        SectionKind::Handler,
        SectionKind::Formatter,
    ];

    /// Leading key token for properties of this kind, without the dot.
    pub fn prefix(self) -> &'static str {
        match self {
            SectionKind::Logger => "logger",
            SectionKind::Handler => "handler",
            SectionKind::Formatter => "formatter",
        }
    }

    /// Classify a property key by its leading token.
    pub fn from_key(key: &str) -> Option<SectionKind> {
        let (head, _) = key.split_once('.')?;
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.prefix() == head)
    }

    /// Whether `key` is the comma-set `properties` attribute of group `name`.
    ///
    /// Only handlers and formatters carry one; its shape is exactly
    /// `<kind>.<name>.properties`.
    pub fn is_comma_set_key(self, name: &str, key: &str) -> bool {
        if self == SectionKind::Logger {
            return false;
        }
        let mut parts = key.split('.');
        parts.next() == Some(self.prefix())
            && parts.next() == Some(name)
            && parts.next() == Some("properties")
            && parts.next().is_none()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Ordered properties of one named logger, handler or formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigGroup {
    group_key: String,
    entries: Vec<PropertyEntry>,
}

impl ConfigGroup {
    /// Empty group. The root logger's group key is the empty string.
    pub fn new(group_key: impl Into<String>) -> Self {
        Self {
            group_key: group_key.into(),
            entries: Vec::new(),
        }
    }

    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Property keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PropertyEntry::key)
    }

    /// Store a copy of `entry`; an existing entry with the same key is overwritten in place.
    pub fn add(&mut self, entry: &PropertyEntry) {
        match self.entries.iter_mut().find(|e| e.key() == entry.key()) {
            Some(existing) => *existing = entry.clone(),
            None => self.entries.push(entry.clone()),
        }
    }

    /// Merge every entry of `other`: known keys merge in place, new keys are appended.
    pub fn merge(&mut self, other: &ConfigGroup) -> Result<(), ModelError> {
        if self.group_key != other.group_key {
            return Err(ModelError::GroupKeyMismatch {
                expected: self.group_key.clone(),
                found: other.group_key.clone(),
            });
        }

        for incoming in &other.entries {
            match self.entries.iter_mut().find(|e| e.key() == incoming.key()) {
                Some(existing) => existing.merge(incoming)?,
                None => self.entries.push(incoming.clone()),
            }
        }
        Ok(())
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().flat_map(PropertyEntry::to_lines).collect()
    }
}

/// Outcome of merging one section into another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionMergeStats {
    pub merged: usize,
    pub appended: usize,
}

/// All groups of one kind, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    kind: SectionKind,
    groups: Vec<ConfigGroup>,
}

impl GroupSection {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            groups: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ConfigGroup> {
        self.groups.iter().find(|g| g.group_key() == name)
    }

    /// Group names in section order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(ConfigGroup::group_key)
    }

    /// Route `entry` into group `name`, creating the group on first sight.
    ///
    /// A handler or formatter `properties` key is flagged for comma-set merge
    /// before it is stored.
    pub fn add(&mut self, name: &str, entry: &PropertyEntry) {
        let index = match self.groups.iter().position(|g| g.group_key() == name) {
            Some(index) => index,
            None => {
                debug!(kind = %self.kind, group = name, "New group");
                self.groups.push(ConfigGroup::new(name));
                self.groups.len() - 1
            }
        };

        if self.kind.is_comma_set_key(name, entry.key()) {
            let mut flagged = entry.clone();
            flagged.set_merge_as_comma_set(true);
            self.groups[index].add(&flagged);
        } else {
            self.groups[index].add(entry);
        }
    }

    /// Merge groups of `other` into this section.
    ///
    /// Existing groups keep their position; unseen groups are appended in
    /// `other`'s order.
    pub fn merge(&mut self, other: &GroupSection) -> Result<SectionMergeStats, ModelError> {
        if self.kind != other.kind {
            return Err(ModelError::SectionKindMismatch {
                expected: self.kind,
                found: other.kind,
            });
        }

        let mut stats = SectionMergeStats::default();
        for incoming in &other.groups {
            match self
                .groups
                .iter_mut()
                .find(|g| g.group_key() == incoming.group_key())
            {
                Some(existing) => {
                    existing.merge(incoming)?;
                    stats.merged += 1;
                }
                None => {
                    self.groups.push(incoming.clone());
                    stats.appended += 1;
                }
            }
        }
        Ok(stats)
    }

    /// Each group's lines followed by one blank line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for group in &self.groups {
            lines.extend(group.to_lines());
            lines.push(String::new());
        }
        lines
    }
}
