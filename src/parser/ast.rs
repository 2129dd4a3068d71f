//! Data model for RCQL documents

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The fixed directive vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Contain,
    Recall,
    Reflect,
    Intend,
    Consent,
    Yield,
    FailSafe,
    Validate,
}

impl Directive {
    /// All directives, in vocabulary order.
    pub const ALL: [Directive; 8] = [
        Directive::Contain,
        Directive::Recall,
        Directive::Reflect,
        Directive::Intend,
        Directive::Consent,
        Directive::Yield,
        Directive::FailSafe,
        Directive::Validate,
    ];

    /// Label as it is written in the vocabulary (`FailSafe`).
    pub fn label(&self) -> &'static str {
        match self {
            Directive::Contain => "Contain",
            Directive::Recall => "Recall",
            Directive::Reflect => "Reflect",
            Directive::Intend => "Intend",
            Directive::Consent => "Consent",
            Directive::Yield => "Yield",
            Directive::FailSafe => "FailSafe",
            Directive::Validate => "Validate",
        }
    }

    /// Canonical output form: first letter uppercase, the rest lowercase.
    pub fn canonical(&self) -> &'static str {
        match self {
            Directive::FailSafe => "Failsafe",
            other => other.label(),
        }
    }

    /// Case-insensitive lookup of a full label.
    pub fn from_label(label: &str) -> Option<Directive> {
        Directive::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
    }

    /// Whether this directive opens a new record.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Directive::Contain)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical())
    }
}

impl Serialize for Directive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

/// One task block: directives and their values in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(Directive, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, directive: Directive, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(d, _)| *d == directive) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((directive, value)),
        }
    }

    pub fn get(&self, directive: Directive) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == directive)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, directive: Directive) -> bool {
        self.get(directive).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Directive, &str)> {
        self.entries.iter().map(|(d, v)| (*d, v.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(Directive, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (Directive, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (directive, value) in iter {
            record.insert(directive, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (directive, value) in &self.entries {
            map.serialize_entry(directive, value)?;
        }
        map.end()
    }
}

/// All records of one input, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub records: Vec<Record>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
