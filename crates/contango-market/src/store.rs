//! Generic name-to-handle object store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The tag returned by [`ObjectStore::set`]: the object's name plus the
/// version assigned at insert.
///
/// Versions start at 1 and bump each time a name is overwritten, so a tag
/// identifies one particular insertion, not just a name. Displays as
/// `name.version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    version: u64,
}

impl Tag {
    /// The object's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version assigned at insert.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.version)
    }
}

#[derive(Debug)]
struct Entry<T> {
    version: u64,
    object: Arc<T>,
}

/// A store of named objects handing out `Arc` handles.
///
/// Inserting under an existing name replaces the stored object and bumps the
/// version; handles already given out stay valid, pointing at the object
/// they were taken from.
#[derive(Debug)]
pub struct ObjectStore<T> {
    objects: HashMap<String, Entry<T>>,
}

impl<T> Default for ObjectStore<T> {
    fn default() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }
}

impl<T> ObjectStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `object` under `name`, returning its tag.
    ///
    /// A fresh name gets version 1; overwriting bumps the previous version.
    pub fn set(&mut self, name: impl Into<String>, object: T) -> Tag {
        let name = name.into();
        let version = self.objects.get(&name).map_or(1, |e| e.version + 1);
        self.objects.insert(
            name.clone(),
            Entry {
                version,
                object: Arc::new(object),
            },
        );
        Tag { name, version }
    }

    /// Looks up a handle by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.objects.get(name).map(|e| Arc::clone(&e.object))
    }

    /// Returns all stored names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.objects.keys().cloned().collect();
        names.sort();
        names
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_returns_versioned_tags() {
        let mut store = ObjectStore::new();

        let tag = store.set("USD", 1.0f64);
        assert_eq!(tag.name(), "USD");
        assert_eq!(tag.version(), 1);
        assert_eq!(tag.to_string(), "USD.1");

        let tag = store.set("USD", 2.0f64);
        assert_eq!(tag.version(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_is_nullable_lookup() {
        let mut store = ObjectStore::new();
        store.set("EUR", 42u32);

        assert_eq!(store.get("EUR").as_deref(), Some(&42));
        assert!(store.get("GBP").is_none());
    }

    #[test]
    fn test_handles_survive_replacement() {
        let mut store = ObjectStore::new();
        store.set("USD", 1u32);

        let old = store.get("USD").unwrap();
        store.set("USD", 2u32);

        assert_eq!(*old, 1);
        assert_eq!(store.get("USD").as_deref(), Some(&2));
    }

    #[test]
    fn test_list_is_sorted_and_clear_empties() {
        let mut store = ObjectStore::new();
        store.set("GBP", 0u8);
        store.set("AUD", 0u8);
        store.set("EUR", 0u8);

        assert_eq!(store.list(), vec!["AUD", "EUR", "GBP"]);

        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
