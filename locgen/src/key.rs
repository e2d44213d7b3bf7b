//! Dotted message keys and the insertion-ordered flat template map.
//!
//! A [`Key`] is the full path of nested section names leading to one
//! message; a [`MessageMap`] is the flat `Key -> Template` form of one
//! locale's merged source files.

use std::fmt::{self, Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, template::Template};

lazy_static! {
    static ref SEGMENT_REGEX: Regex = Regex::new(r"^[a-z_]+$").unwrap();
}

/// An ordered, non-empty sequence of lowercase segment names.
///
/// Keys are immutable once constructed and compare structurally, so they
/// double as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    segments: Vec<String>,
}

impl Key {
    /// Builds a key from its segments, validating each against `[a-z_]+`.
    pub fn new(segments: Vec<String>) -> Result<Self, Error> {
        if segments.is_empty() {
            return Err(Error::key_shape("empty key path"));
        }
        for segment in &segments {
            if !SEGMENT_REGEX.is_match(segment) {
                return Err(Error::key_shape(format!(
                    "invalid key segment `{}`",
                    segment
                )));
            }
        }
        Ok(Key { segments })
    }

    /// Convenience constructor for a dotted path such as `greeting.hello`.
    pub fn from_path(path: &str) -> Result<Self, Error> {
        Key::new(path.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with an arbitrary separator.
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("."))
    }
}

/// The flat form of one locale's definitions.
///
/// Insertion order is preserved; it affects only the deterministic ordering
/// of generated output, never semantics. Lookup is linear, which is fine for
/// the map sizes this crate handles (hundreds of messages, consulted once
/// per generation run).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageMap {
    entries: Vec<(Key, Template)>,
}

impl MessageMap {
    pub fn new() -> Self {
        MessageMap::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Template> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, template)| template)
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Appends an entry. Callers perform duplicate checking: within a single
    /// source file the YAML parser already rejects repeated mapping keys,
    /// and across files [`MessageMap::merge`] enforces it.
    pub fn insert(&mut self, key: Key, template: Template) {
        self.entries.push((key, template));
    }

    /// Merges another source's entries into this locale's map, rejecting any
    /// key that is already defined.
    pub fn merge(&mut self, other: MessageMap, locale: &str) -> Result<(), Error> {
        for (key, template) in other.entries {
            if self.contains(&key) {
                return Err(Error::DuplicateKey {
                    key: key.to_string(),
                    locale: locale.to_string(),
                });
            }
            self.entries.push((key, template));
        }
        Ok(())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Template)> {
        self.entries.iter().map(|(key, template)| (key, template))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }
}
