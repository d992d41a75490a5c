#![forbid(unsafe_code)]

//! Key-based message storage with fallback lookup.
//!
//! A [`MessageCatalog`] maps string keys to translated messages. Lookup is
//! total: a missing catalog, a missing key, and an empty message all fall
//! back to the key itself, so callers always have something to render and
//! untranslated keys are visible in the UI instead of blank.

use std::collections::HashMap;

/// A flat key-to-message catalog for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from key/message pairs.
    #[must_use]
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        }
    }

    /// Insert or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Get the raw message for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve a key to its message, falling back to the key itself.
    ///
    /// An empty message counts as missing.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(message) if !message.is_empty() => message,
            _ => key,
        }
    }

    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a key against an optional catalog.
///
/// Hosts often have no catalog at all (the default locale ships without
/// one); the key doubles as the default-locale message.
#[must_use]
pub fn lookup<'a>(catalog: Option<&'a MessageCatalog>, key: &'a str) -> &'a str {
    match catalog {
        Some(catalog) => catalog.resolve(key),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageCatalog {
        MessageCatalog::from_entries([
            ("field.link-hint", "ctrl+click to open"),
            ("field.placeholder", "write a note"),
            ("field.blank", ""),
        ])
    }

    #[test]
    fn resolve_returns_the_message() {
        let catalog = sample();
        assert_eq!(catalog.resolve("field.link-hint"), "ctrl+click to open");
    }

    #[test]
    fn resolve_missing_key_falls_back_to_key() {
        let catalog = sample();
        assert_eq!(catalog.resolve("field.unknown"), "field.unknown");
    }

    #[test]
    fn resolve_empty_message_falls_back_to_key() {
        let catalog = sample();
        assert_eq!(catalog.resolve("field.blank"), "field.blank");
    }

    #[test]
    fn lookup_without_catalog_falls_back_to_key() {
        assert_eq!(lookup(None, "field.link-hint"), "field.link-hint");
        assert_eq!(lookup(Some(&sample()), "field.link-hint"), "ctrl+click to open");
    }

    #[test]
    fn insert_replaces_existing_message() {
        let mut catalog = sample();
        catalog.insert("field.link-hint", "strg+klick zum Öffnen");
        assert_eq!(catalog.resolve("field.link-hint"), "strg+klick zum Öffnen");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn get_distinguishes_empty_from_missing() {
        let catalog = sample();
        assert_eq!(catalog.get("field.blank"), Some(""));
        assert_eq!(catalog.get("field.unknown"), None);
    }
}
