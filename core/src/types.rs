//! Vocabulary graph types
//!
//! A [`VocabularyGraph`] is the typed class/property graph extracted from a
//! triple store. Classes and properties are keyed by their vocabulary-local
//! name (the IRI with the vocabulary namespace stripped).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A class declared by the vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Vocabulary-local name, unique within the graph
    pub name: String,

    /// Fully qualified IRI
    pub iri: String,

    /// Local names of direct superclasses in store order
    ///
    /// Entries may name classes the vocabulary never declares. Those are kept
    /// and skipped whenever inheritance is resolved.
    pub parents: Vec<String>,

    /// Local names of properties declaring this class as a domain
    pub properties: BTreeSet<String>,

    /// Documentation text from the vocabulary, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ClassDef {
    /// Create a class with no edges
    #[must_use]
    pub fn new(name: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iri: iri.into(),
            ..Default::default()
        }
    }
}

/// A property declared by the vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDef {
    /// Vocabulary-local name, unique within the graph
    pub name: String,

    /// Fully qualified IRI
    pub iri: String,

    /// Class names this property may appear on
    pub domains: Vec<String>,

    /// Class names or primitive markers the value may take
    pub ranges: Vec<String>,

    /// Documentation text from the vocabulary, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PropDef {
    /// Create a property with no edges
    #[must_use]
    pub fn new(name: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iri: iri.into(),
            ..Default::default()
        }
    }
}

/// Class and property definitions extracted from a vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyGraph {
    /// Classes by local name
    pub classes: BTreeMap<String, ClassDef>,

    /// Properties by local name
    pub properties: BTreeMap<String, PropDef>,
}

impl VocabularyGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a class by local name
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Look up a property by local name
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropDef> {
        self.properties.get(name)
    }

    /// Whether `name` is a declared class
    #[must_use]
    pub fn is_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Direct parents of a class that resolve to declared classes
    pub fn resolvable_parents<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.classes
            .get(name)
            .into_iter()
            .flat_map(|class| class.parents.iter())
            .filter(|parent| self.classes.contains_key(parent.as_str()))
            .map(String::as_str)
    }

    /// All transitively resolvable ancestors of a class
    ///
    /// Terminates on cyclic subclassing; a class that is its own ancestor
    /// through a cycle is not included in its own result.
    #[must_use]
    pub fn ancestors(&self, name: &str) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<&str> = self.resolvable_parents(name).collect();

        while let Some(current) = stack.pop() {
            if current == name || !seen.insert(current.to_string()) {
                continue;
            }
            stack.extend(self.resolvable_parents(current));
        }

        seen
    }

    /// Properties declared on a class or on any of its ancestors
    ///
    /// Diamond inheritance collapses naturally since the result is keyed by
    /// property name.
    #[must_use]
    pub fn effective_properties(&self, name: &str) -> BTreeSet<String> {
        let Some(class) = self.classes.get(name) else {
            return BTreeSet::new();
        };

        let mut properties = class.properties.clone();
        for ancestor in self.ancestors(name) {
            if let Some(ancestor) = self.classes.get(&ancestor) {
                properties.extend(ancestor.properties.iter().cloned());
            }
        }
        properties
    }
}
