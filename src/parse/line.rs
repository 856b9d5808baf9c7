//! Line classification and property key analysis.

use crate::group::SectionKind;
use crate::loggers::DECLARATION_KEY;
use std::fmt;

/// A raw input line after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Comment(&'a str),
    Blank,
    Content(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            Line::Blank
        } else if line.starts_with('#') {
            Line::Comment(line)
        } else {
            Line::Content(line)
        }
    }
}

/// Whether a content line is the `loggers=` declaration.
pub fn is_declaration(line: &str) -> bool {
    line.split_once('=')
        .is_some_and(|(key, _)| key.trim() == DECLARATION_KEY)
}

/// Why a content line could not be placed in any group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrecognizedReason {
    /// Key starts with none of `logger.`, `handler.`, `formatter.`
    UnknownPrefix,
    /// No `=` on the line
    MissingSeparator,
    /// Empty name or property segment
    MalformedKey,
    /// Handler or formatter key nested deeper than `<kind>.<name>.<prop>`
    UnsupportedNesting,
    /// A `loggers=` line after properties have started
    MisplacedDeclaration,
}

impl fmt::Display for UnrecognizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnrecognizedReason::UnknownPrefix => {
                "key is not a logger, handler or formatter property"
            }
            UnrecognizedReason::MissingSeparator => "missing '=' separator",
            UnrecognizedReason::MalformedKey => "key has an empty segment",
            UnrecognizedReason::UnsupportedNesting => "key is nested too deeply",
            UnrecognizedReason::MisplacedDeclaration => "loggers declaration after properties",
        };
        f.write_str(text)
    }
}

/// A property line split into its routing parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyLine<'a> {
    pub kind: SectionKind,
    pub group: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

/// Split `line` at the first `=` and derive its section and group.
pub fn parse_property(line: &str) -> Result<PropertyLine<'_>, UnrecognizedReason> {
    let (key, value) = match line.split_once('=') {
        Some((key, value)) => (key.trim(), Some(value.trim())),
        None => (line.trim(), None),
    };

    if key == DECLARATION_KEY {
        return Err(UnrecognizedReason::MisplacedDeclaration);
    }
    let kind = SectionKind::from_key(key).ok_or(UnrecognizedReason::UnknownPrefix)?;
    let value = value.ok_or(UnrecognizedReason::MissingSeparator)?;
    let group = group_name(kind, key)?;

    Ok(PropertyLine {
        kind,
        group,
        key,
        value,
    })
}

/// Owning group of a property key.
///
/// The name is everything between the kind token and the last segment, so
/// logger categories may contain dots. A bare `logger.<prop>` belongs to the
/// root logger (empty name); a bare `handler.<name>` or `formatter.<name>`
/// belongs to `<name>`.
pub fn group_name(kind: SectionKind, key: &str) -> Result<&str, UnrecognizedReason> {
    let rest = key
        .strip_prefix(kind.prefix())
        .and_then(|rest| rest.strip_prefix('.'))
        .ok_or(UnrecognizedReason::UnknownPrefix)?;

    if rest.split('.').any(str::is_empty) {
        return Err(UnrecognizedReason::MalformedKey);
    }

    match kind {
        SectionKind::Logger => Ok(rest.rsplit_once('.').map_or("", |(name, _)| name)),
        SectionKind::Handler | SectionKind::Formatter => match rest.split_once('.') {
            None => Ok(rest),
            Some((name, prop)) if !prop.contains('.') => Ok(name),
            Some(_) => Err(UnrecognizedReason::UnsupportedNesting),
        },
    }
}
