//! Property range to TypeScript type expression mapping

use crate::naming::IdentifierTable;
use indexmap::IndexSet;
use std::collections::BTreeSet;
use tracing::debug;
use vocab_core::prelude::*;

/// Type of a property without any resolved range
pub const UNCONSTRAINED: &str = "unknown";

/// Maps property ranges to TypeScript types
///
/// Primitive ranges become scalars. Class ranges become the generated type or
/// a plain string, since JSON-LD allows either a nested node or an `@id`
/// reference. Every property is multi-valued, so the final type also admits
/// an array of the same alternatives.
pub struct TypeMapper<'a> {
    primitives: &'a PrimitiveTypes,
    identifiers: &'a IdentifierTable,
}

impl<'a> TypeMapper<'a> {
    /// Create a mapper over a primitive set and identifier table
    #[must_use]
    pub fn new(primitives: &'a PrimitiveTypes, identifiers: &'a IdentifierTable) -> Self {
        Self {
            primitives,
            identifiers,
        }
    }

    /// Alternatives a single range contributes
    #[must_use]
    pub fn range_alternatives(&self, range: &str) -> Vec<String> {
        if let Some(scalar) = self.primitives.get(range) {
            return vec![scalar.as_typescript().to_string()];
        }
        match self.identifiers.get(range) {
            Some(identifier) => vec![identifier.to_string(), "string".to_string()],
            None => {
                debug!(range, "Range is not a declared class; typing as reference only");
                vec!["string".to_string()]
            }
        }
    }

    /// Union of every range alternative, deduplicated, in sorted range order
    #[must_use]
    pub fn value_union(&self, property: &PropDef) -> Option<String> {
        let ranges: BTreeSet<&str> = property.ranges.iter().map(String::as_str).collect();
        if ranges.is_empty() {
            return None;
        }

        let alternatives: IndexSet<String> = ranges
            .into_iter()
            .flat_map(|range| self.range_alternatives(range))
            .collect();

        Some(alternatives.into_iter().collect::<Vec<_>>().join(" | "))
    }

    /// Full field type for a property
    #[must_use]
    pub fn map_property(&self, property: &PropDef) -> String {
        match self.value_union(property) {
            Some(union) => format!("{union} | Array<{union}>"),
            None => UNCONSTRAINED.to_string(),
        }
    }
}
