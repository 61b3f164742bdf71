//! Intersphinx inventory data model.
//!
//! An inventory maps documentation object types (`py:class`, `sip:method`,
//! ...) to the fully qualified names they document, each with the project,
//! version, URI and display name recorded upstream. Inventories are fetched
//! and parsed by the host before any reference resolution happens; this
//! module only models the parsed form, plus the JSON layout the host uses to
//! cache it between builds. Maps are insertion-ordered so lookup priority is
//! deterministic.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::QtDocError;

/// One documented object, as recorded in an intersphinx inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Project name the object belongs to.
    pub project: String,
    /// Project version at publication time.
    pub version: String,
    /// Absolute URI of the documenting page.
    pub uri: String,
    /// Display name, or the `""`/`"-"` sentinel meaning "use the target".
    pub display_name: String,
}

impl InventoryItem {
    /// Convenience constructor for building inventories in code.
    pub fn new(project: &str, version: &str, uri: &str, display_name: &str) -> Self {
        InventoryItem {
            project: project.to_string(),
            version: version.to_string(),
            uri: uri.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// A parsed inventory: object-type key to named objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    entries: IndexMap<String, IndexMap<String, InventoryItem>>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Record an object under an object-type key such as `py:class`.
    pub fn insert(&mut self, object_type: &str, target: &str, item: InventoryItem) {
        self.entries
            .entry(object_type.to_string())
            .or_default()
            .insert(target.to_string(), item);
    }

    /// All objects documented under one object-type key.
    pub fn objects(&self, object_type: &str) -> Option<&IndexMap<String, InventoryItem>> {
        self.entries.get(object_type)
    }

    /// Object-type keys in insertion order, with their objects.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, &IndexMap<String, InventoryItem>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names documented under a module listing key (`py:module`,
    /// `sip:module`), in inventory order. Empty when the key is absent.
    pub fn module_names(&self, key: &str) -> Vec<String> {
        self.entries
            .get(key)
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Load an inventory from the host's JSON cache format.
    ///
    /// # Errors
    ///
    /// Returns [`QtDocError::Io`] if the file cannot be read, or
    /// [`QtDocError::InventoryFormat`] if it does not deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QtDocError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// The host-owned registry of fetched inventories, keyed by the namespace
/// they were configured under. Read-only to the resolver.
#[derive(Debug, Clone, Default)]
pub struct NamedInventories {
    inventories: IndexMap<String, Inventory>,
}

impl NamedInventories {
    /// Create an empty registry.
    pub fn new() -> Self {
        NamedInventories::default()
    }

    /// Register an inventory under a namespace, replacing any previous one.
    pub fn register(&mut self, namespace: &str, inventory: Inventory) {
        self.inventories.insert(namespace.to_string(), inventory);
    }

    /// The inventory registered under `namespace`, if any.
    pub fn get(&self, namespace: &str) -> Option<&Inventory> {
        self.inventories.get(namespace)
    }

    /// Whether a namespace has a registered inventory.
    pub fn contains(&self, namespace: &str) -> bool {
        self.inventories.contains_key(namespace)
    }

    /// Registered namespaces in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inventories.keys().map(String::as_str)
    }
}
