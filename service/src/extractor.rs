//! Class/property graph extraction from a triple store
//!
//! Extraction never fails. Vocabulary data is large and loosely curated, so a
//! term with missing or malformed edges simply ends up with fewer edges; it
//! never stops the rest of the vocabulary from compiling.

use crate::loader::TripleSource;
use tracing::{debug, info};
use vocab_core::prelude::*;

/// Builds a [`VocabularyGraph`] from any [`TripleSource`]
pub struct GraphExtractor<'a, S> {
    source: S,
    terms: &'a VocabularyTerms,
}

impl<'a, S: TripleSource> GraphExtractor<'a, S> {
    /// Create an extractor reading `source` with the given vocabulary terms
    #[must_use]
    pub fn new(source: S, terms: &'a VocabularyTerms) -> Self {
        Self { source, terms }
    }

    /// Run every extraction step in order
    #[must_use]
    pub fn extract(&self) -> VocabularyGraph {
        let mut graph = VocabularyGraph::new();

        self.collect_classes(&mut graph);
        self.collect_properties(&mut graph);
        self.resolve_subclassing(&mut graph);
        self.resolve_domains_and_ranges(&mut graph);
        self.collect_comments(&mut graph);
        propagate_properties_to_classes(&mut graph);

        info!(
            classes = graph.classes.len(),
            properties = graph.properties.len(),
            namespace = %self.terms.namespace,
            "Extracted vocabulary graph"
        );
        graph
    }

    /// Register every in-namespace subject typed as a class
    pub fn collect_classes(&self, graph: &mut VocabularyGraph) {
        for iri in self.typed_subjects(&self.terms.class_type) {
            match self.terms.local_name(&iri) {
                Some(name) => {
                    graph
                        .classes
                        .entry(name.to_string())
                        .or_insert_with(|| ClassDef::new(name, iri.as_str()));
                }
                None => debug!(%iri, "Skipping class outside vocabulary namespace"),
            }
        }
    }

    /// Register every in-namespace subject typed as a property
    pub fn collect_properties(&self, graph: &mut VocabularyGraph) {
        for iri in self.typed_subjects(&self.terms.property_type) {
            match self.terms.local_name(&iri) {
                Some(name) => {
                    graph
                        .properties
                        .entry(name.to_string())
                        .or_insert_with(|| PropDef::new(name, iri.as_str()));
                }
                None => debug!(%iri, "Skipping property outside vocabulary namespace"),
            }
        }
    }

    /// Record direct superclasses in store order
    ///
    /// Parents outside the namespace are dropped. In-namespace parents the
    /// vocabulary never declares are kept as dangling references.
    pub fn resolve_subclassing(&self, graph: &mut VocabularyGraph) {
        for class in graph.classes.values_mut() {
            for parent_iri in self.source.objects(&class.iri, &self.terms.subclass_of) {
                let Some(parent) = self.terms.local_name(&parent_iri) else {
                    debug!(class = %class.name, parent = %parent_iri, "Dropping foreign superclass");
                    continue;
                };
                if !class.parents.iter().any(|p| p == parent) {
                    class.parents.push(parent.to_string());
                }
            }
        }
    }

    /// Record domain and range local names for every property
    ///
    /// Names the vocabulary never declares are still recorded; later stages
    /// treat them as opaque.
    pub fn resolve_domains_and_ranges(&self, graph: &mut VocabularyGraph) {
        let domain_predicate = self.terms.domain_includes_iri();
        let range_predicate = self.terms.range_includes_iri();

        for property in graph.properties.values_mut() {
            property.domains = self.local_names(&property.iri, &domain_predicate);
            property.ranges = self.local_names(&property.iri, &range_predicate);
        }
    }

    fn collect_comments(&self, graph: &mut VocabularyGraph) {
        for class in graph.classes.values_mut() {
            class.comment = self.first_comment(&class.iri);
        }
        for property in graph.properties.values_mut() {
            property.comment = self.first_comment(&property.iri);
        }
    }

    /// Smallest comment value, so the choice does not depend on store order
    fn first_comment(&self, iri: &str) -> Option<String> {
        self.source
            .objects(iri, &self.terms.comment)
            .into_iter()
            .filter(|comment| !comment.trim().is_empty())
            .min()
    }

    fn typed_subjects(&self, kind: &str) -> Vec<String> {
        self.source.subjects(&self.terms.type_predicate, kind)
    }

    fn local_names(&self, subject: &str, predicate: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for iri in self.source.objects(subject, predicate) {
            match self.terms.local_name(&iri) {
                Some(name) if !names.iter().any(|n| n == name) => names.push(name.to_string()),
                Some(_) => {}
                None => debug!(%subject, value = %iri, "Dropping value outside vocabulary namespace"),
            }
        }
        names
    }
}

/// Attach each property to every declared class among its domains
///
/// A property without any declared domain is left unattached.
pub fn propagate_properties_to_classes(graph: &mut VocabularyGraph) {
    let VocabularyGraph {
        classes,
        properties,
    } = graph;

    for property in properties.values() {
        let mut attached = false;
        for domain in &property.domains {
            if let Some(class) = classes.get_mut(domain) {
                class.properties.insert(property.name.clone());
                attached = true;
            }
        }
        if !attached {
            debug!(property = %property.name, "Property has no resolvable domain");
        }
    }
}
