//! Vocabulary compilation pipeline
//!
//! Store → extractor → (identifier table, linearization) → generator. Every
//! stage is synchronous and pure; the only failures are in generation itself.

use crate::extractor::GraphExtractor;
use crate::generator::{Generator, TypeMapper};
use crate::inheritance::{Linearization, linearize};
use crate::loader::TripleSource;
use crate::naming::{IdentifierCollision, IdentifierTable};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;
use vocab_core::prelude::*;

/// A vocabulary graph with everything generators need precomputed
#[derive(Debug, Clone)]
pub struct CompiledVocabulary {
    config: CompilerConfig,
    graph: VocabularyGraph,
    linearization: Linearization,
    identifiers: IdentifierTable,
    positions: HashMap<String, usize>,
}

impl CompiledVocabulary {
    /// Compute identifiers and linearization for an extracted graph
    #[must_use]
    pub fn new(config: CompilerConfig, graph: VocabularyGraph) -> Self {
        let identifiers = IdentifierTable::build_with_reserved(
            graph.classes.keys(),
            &[config.generator.base_type_name.as_str()],
        );
        let linearization = linearize(&graph);
        let positions = linearization
            .order
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();

        Self {
            config,
            graph,
            linearization,
            identifiers,
            positions,
        }
    }

    /// Configuration the vocabulary was compiled with
    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Extracted class/property graph
    #[must_use]
    pub fn graph(&self) -> &VocabularyGraph {
        &self.graph
    }

    /// Class order used for emission
    #[must_use]
    pub fn linearization(&self) -> &Linearization {
        &self.linearization
    }

    /// Class name to identifier table
    #[must_use]
    pub fn identifiers(&self) -> &IdentifierTable {
        &self.identifiers
    }

    /// Identifier for a class name
    #[must_use]
    pub fn identifier(&self, name: &str) -> Option<&str> {
        self.identifiers.get(name)
    }

    /// Classes in emission order
    pub fn ordered_classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.linearization
            .order
            .iter()
            .filter_map(|name| self.graph.class(name))
    }

    /// Parents a class's declaration may extend, sorted by name
    ///
    /// Every resolvable parent qualifies except one sharing a subclass cycle
    /// with the class and emitted after it. Within a cycle only forward edges
    /// survive, so the emitted type hierarchy stays acyclic.
    #[must_use]
    pub fn emitted_parents(&self, name: &str) -> Vec<&str> {
        let Some(own) = self.positions.get(name) else {
            return Vec::new();
        };

        let mut parents: Vec<&str> = self
            .graph
            .resolvable_parents(name)
            .filter(|parent| *parent != name)
            .filter(|parent| {
                self.positions.get(*parent).is_some_and(|pos| pos < own)
                    || !self.graph.ancestors(parent).contains(name)
            })
            .collect();
        parents.sort_unstable();
        parents.dedup();
        parents
    }

    /// Type mapper bound to this vocabulary's primitives and identifiers
    #[must_use]
    pub fn type_mapper(&self) -> TypeMapper<'_> {
        TypeMapper::new(&self.config.primitives, &self.identifiers)
    }

    /// Summary of what compilation absorbed along the way
    #[must_use]
    pub fn report(&self) -> CompileReport {
        let unattached_properties = self
            .graph
            .properties
            .values()
            .filter(|p| !p.domains.iter().any(|d| self.graph.is_class(d)))
            .map(|p| p.name.clone())
            .collect();

        let dangling_parents = self
            .graph
            .classes
            .values()
            .flat_map(|c| c.parents.iter().map(move |p| (c, p)))
            .filter(|(_, parent)| !self.graph.is_class(parent))
            .map(|(class, parent)| (class.name.clone(), parent.clone()))
            .collect();

        CompileReport {
            namespace: self.config.vocabulary.namespace.clone(),
            classes: self.graph.classes.len(),
            properties: self.graph.properties.len(),
            unresolved_classes: self.linearization.unresolved.clone(),
            unattached_properties,
            dangling_parents,
            collisions: self.identifiers.collisions().to_vec(),
        }
    }
}

/// Counts and absorbed irregularities from one compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    /// Vocabulary namespace
    pub namespace: String,
    /// Declared classes
    pub classes: usize,
    /// Declared properties
    pub properties: usize,
    /// Classes appended after the ordered ones
    pub unresolved_classes: Vec<String>,
    /// Properties attached to no class
    pub unattached_properties: Vec<String>,
    /// `(class, parent)` pairs whose parent is undeclared
    pub dangling_parents: Vec<(String, String)>,
    /// Identifier collisions and their resolution
    pub collisions: Vec<IdentifierCollision>,
}

/// Drives extraction and generation with one configuration
#[derive(Debug, Clone, Default)]
pub struct VocabularyCompiler {
    config: CompilerConfig,
}

impl VocabularyCompiler {
    /// Create a compiler with the given configuration
    #[must_use]
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Extract and prepare a vocabulary from a triple source
    #[must_use]
    pub fn compile<S: TripleSource>(&self, source: S) -> CompiledVocabulary {
        let graph = GraphExtractor::new(source, &self.config.vocabulary).extract();
        let compiled = CompiledVocabulary::new(self.config.clone(), graph);

        let report = compiled.report();
        info!(
            classes = report.classes,
            properties = report.properties,
            unresolved = report.unresolved_classes.len(),
            unattached = report.unattached_properties.len(),
            dangling = report.dangling_parents.len(),
            collisions = report.collisions.len(),
            "Compiled vocabulary"
        );
        compiled
    }

    /// Compile a source and render it with `generator`
    ///
    /// # Errors
    ///
    /// Returns `VocabError::GenerationError` if rendering fails.
    pub fn generate<S: TripleSource>(
        &self,
        source: S,
        generator: &dyn Generator,
    ) -> Result<String> {
        let compiled = self.compile(source);
        let output = generator.generate(&compiled)?;
        info!(
            generator = generator.name(),
            bytes = output.len(),
            "Generated output"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, parents: &[&str]) -> ClassDef {
        let mut class = ClassDef::new(name, format!("https://schema.org/{name}"));
        class.parents = parents.iter().map(|p| (*p).to_string()).collect();
        class
    }

    fn compiled(classes: Vec<ClassDef>, properties: Vec<PropDef>) -> CompiledVocabulary {
        let mut graph = VocabularyGraph::new();
        for c in classes {
            graph.classes.insert(c.name.clone(), c);
        }
        for p in properties {
            graph.properties.insert(p.name.clone(), p);
        }
        CompiledVocabulary::new(CompilerConfig::default(), graph)
    }

    #[test]
    fn test_emitted_parents_skip_cycle_back_edges() {
        let vocab = compiled(
            vec![class("A", &["B"]), class("B", &["A"]), class("C", &["A", "Thing"]), class("Thing", &[])],
            vec![],
        );
        // Order: Thing, then the unresolved tail A, B, C.
        assert_eq!(vocab.linearization().order, vec!["Thing", "A", "B", "C"]);
        assert!(vocab.emitted_parents("A").is_empty());
        assert_eq!(vocab.emitted_parents("B"), vec!["A"]);
        assert_eq!(vocab.emitted_parents("C"), vec!["A", "Thing"]);
    }

    #[test]
    fn test_emitted_parents_keep_later_parent_outside_cycle() {
        let vocab = compiled(
            vec![class("A", &["B"]), class("B", &["A"]), class("AB", &["B"])],
            vec![],
        );
        assert_eq!(vocab.linearization().order, vec!["A", "AB", "B"]);
        assert_eq!(vocab.emitted_parents("AB"), vec!["B"]);
        assert!(vocab.emitted_parents("A").is_empty());
        assert_eq!(vocab.emitted_parents("B"), vec!["A"]);
    }

    #[test]
    fn test_emitted_parents_skip_self_loop() {
        let vocab = compiled(vec![class("Loop", &["Loop", "Thing"]), class("Thing", &[])], vec![]);
        assert_eq!(vocab.emitted_parents("Loop"), vec!["Thing"]);
    }

    #[test]
    fn test_emitted_parents_skip_dangling() {
        let vocab = compiled(vec![class("Person", &["Thing", "Ghost"]), class("Thing", &[])], vec![]);
        assert_eq!(vocab.emitted_parents("Person"), vec!["Thing"]);
        assert!(vocab.emitted_parents("Nope").is_empty());
    }

    #[test]
    fn test_class_named_like_base_type_is_renamed() {
        let vocab = compiled(vec![class("JsonLdNode", &[])], vec![]);
        assert_eq!(vocab.identifier("JsonLdNode"), Some("JsonLdNode_"));
    }

    #[test]
    fn test_report_lists_absorbed_irregularities() {
        let mut orphan = PropDef::new("orphan", "https://schema.org/orphan");
        orphan.domains = vec!["Ghost".to_string()];
        let vocab = compiled(
            vec![class("Person", &["Ghost"]), class("A", &["B"]), class("B", &["A"])],
            vec![orphan],
        );

        let report = vocab.report();
        assert_eq!(report.classes, 3);
        assert_eq!(report.properties, 1);
        assert_eq!(report.unresolved_classes, vec!["A", "B"]);
        assert_eq!(report.unattached_properties, vec!["orphan"]);
        assert_eq!(
            report.dangling_parents,
            vec![("Person".to_string(), "Ghost".to_string())]
        );
        assert!(report.collisions.is_empty());
    }
}
