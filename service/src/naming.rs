//! Mapping vocabulary term names to TypeScript identifiers
//!
//! [`sanitize`] is total: every input string, including the empty string,
//! yields a syntactically valid identifier. [`IdentifierTable`] layers
//! collision resolution on top so that distinct class names never share an
//! identifier.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

/// Names the TypeScript emitter declares itself
pub const CLASS_NAME_UNION: &str = "VocabularyClassName";
/// Name of the class-name to type lookup table
pub const CLASS_TYPE_MAP: &str = "VocabularyClassTypes";
/// Name of the class-name to identifier debugging table
pub const CLASS_IDENTIFIER_TABLE: &str = "VOCABULARY_CLASS_IDENTIFIERS";

/// TypeScript reserved words, strict-mode reserved words and the built-in
/// type names a declaration cannot shadow.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
        "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
        "true", "try", "typeof", "var", "void", "while", "with", "implements", "interface", "let",
        "package", "private", "protected", "public", "static", "yield", "any", "as", "async",
        "await", "bigint", "boolean", "constructor", "declare", "from", "get", "infer", "is",
        "keyof", "module", "namespace", "never", "number", "object", "of", "readonly", "require",
        "set", "string", "symbol", "type", "undefined", "unique", "unknown", "Array",
        "Readonly", "Record", CLASS_NAME_UNION, CLASS_TYPE_MAP, CLASS_IDENTIFIER_TABLE,
    ]
    .into_iter()
    .collect()
});

/// Whether `name` collides with a reserved TypeScript word or emitter name
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name)
}

/// Whether `name` can be emitted verbatim as a top-level declaration name
#[must_use]
pub fn is_declaration_name(name: &str) -> bool {
    sanitize(name) == name
}

/// Turn an arbitrary term name into a valid identifier
///
/// Characters outside `[A-Za-z0-9_$]` become `_`, a leading digit gets a `_`
/// prefix, and reserved words get a trailing `_`.
#[must_use]
pub fn sanitize(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if !ident.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$') {
        ident.insert(0, '_');
    }
    if is_reserved(&ident) {
        ident.push('_');
    }
    ident
}

/// Two or more class names that sanitize to the same identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierCollision {
    /// Identifier all names sanitize to
    pub identifier: String,
    /// Name that kept the identifier
    pub kept_by: String,
    /// Other names and the identifiers they received instead
    pub renamed: Vec<(String, String)>,
}

/// Class name to identifier mapping, injective by construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    identifiers: BTreeMap<String, String>,
    collisions: Vec<IdentifierCollision>,
}

impl IdentifierTable {
    /// Build the table for a set of class names
    ///
    /// Names are processed in lexicographic order. Within a group of names
    /// sharing a sanitized identifier the smallest keeps it and the others
    /// receive the smallest free `_N` suffix, `N >= 2`.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_reserved(names, &[])
    }

    /// Build the table while keeping `reserved` identifiers free
    ///
    /// Used for names the caller declares alongside the class types, such as
    /// a configured base interface. A name sanitizing to one of them gets a
    /// trailing `_` like any other reserved word.
    pub fn build_with_reserved<I, S>(names: I, reserved: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: BTreeSet<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let blocked = |candidate: &str| is_reserved(candidate) || reserved.contains(&candidate);

        let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for name in &names {
            let mut identifier = sanitize(name);
            while blocked(&identifier) {
                identifier.push('_');
            }
            groups.entry(identifier).or_default().push(name);
        }

        let mut taken: HashSet<String> = groups.keys().cloned().collect();
        let mut identifiers = BTreeMap::new();
        let mut collisions = Vec::new();

        for (identifier, members) in &groups {
            let Some((first, rest)) = members.split_first() else {
                continue;
            };
            identifiers.insert((*first).to_string(), identifier.clone());
            if rest.is_empty() {
                continue;
            }

            let mut renamed = Vec::with_capacity(rest.len());
            for name in rest {
                let replacement = (2..)
                    .map(|n| format!("{identifier}_{n}"))
                    .find(|candidate| !taken.contains(candidate) && !blocked(candidate))
                    .unwrap_or_else(|| format!("{identifier}_"));
                taken.insert(replacement.clone());
                warn!(
                    name = %name,
                    identifier = %identifier,
                    replacement = %replacement,
                    kept_by = %first,
                    "Class name collides with another after sanitizing"
                );
                identifiers.insert((*name).to_string(), replacement.clone());
                renamed.push(((*name).to_string(), replacement));
            }
            collisions.push(IdentifierCollision {
                identifier: identifier.clone(),
                kept_by: (*first).to_string(),
                renamed,
            });
        }

        Self {
            identifiers,
            collisions,
        }
    }

    /// Identifier for a class name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.identifiers.get(name).map(String::as_str)
    }

    /// All `(name, identifier)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.identifiers
            .iter()
            .map(|(name, ident)| (name.as_str(), ident.as_str()))
    }

    /// Collisions resolved while building the table
    #[must_use]
    pub fn collisions(&self) -> &[IdentifierCollision] {
        &self.collisions
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}
