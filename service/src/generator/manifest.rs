//! JSON manifest of a compiled vocabulary
//!
//! Describes the same structure the TypeScript output encodes, in a form other
//! tooling can read without parsing TypeScript.

use super::traits::{Generator, GeneratorResult};
use crate::compiler::CompiledVocabulary;
use crate::naming::IdentifierCollision;
use serde::Serialize;
use vocab_core::prelude::*;

/// Manifest generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestGenerator;

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    namespace: &'a str,
    classes: Vec<ClassEntry<'a>>,
    properties: Vec<PropertyEntry<'a>>,
    collisions: &'a [IdentifierCollision],
}

#[derive(Debug, Serialize)]
struct ClassEntry<'a> {
    name: &'a str,
    iri: &'a str,
    identifier: &'a str,
    parents: Vec<&'a str>,
    extends: Vec<&'a str>,
    properties: Vec<String>,
    unresolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct PropertyEntry<'a> {
    name: &'a str,
    iri: &'a str,
    domains: Vec<&'a str>,
    ranges: Vec<&'a str>,
    #[serde(rename = "type")]
    type_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

impl ManifestGenerator {
    /// Create a new manifest generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn class_entry<'a>(vocabulary: &'a CompiledVocabulary, class: &'a ClassDef) -> ClassEntry<'a> {
        let include_docs = vocabulary.config().generator.include_docs;
        ClassEntry {
            name: &class.name,
            iri: &class.iri,
            identifier: vocabulary.identifier(&class.name).unwrap_or_default(),
            parents: sorted(&class.parents),
            extends: vocabulary.emitted_parents(&class.name),
            properties: vocabulary
                .graph()
                .effective_properties(&class.name)
                .into_iter()
                .collect(),
            unresolved: vocabulary.linearization().unresolved.contains(&class.name),
            comment: class.comment.as_deref().filter(|_| include_docs),
        }
    }

    fn property_entry<'a>(
        vocabulary: &'a CompiledVocabulary,
        property: &'a PropDef,
    ) -> PropertyEntry<'a> {
        let include_docs = vocabulary.config().generator.include_docs;
        PropertyEntry {
            name: &property.name,
            iri: &property.iri,
            domains: sorted(&property.domains),
            ranges: sorted(&property.ranges),
            type_expression: vocabulary.type_mapper().map_property(property),
            comment: property.comment.as_deref().filter(|_| include_docs),
        }
    }
}

fn sorted(values: &[String]) -> Vec<&str> {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values.dedup();
    values
}

impl Generator for ManifestGenerator {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn description(&self) -> &'static str {
        "Generate a JSON manifest of classes, properties and identifiers"
    }

    fn generate(&self, vocabulary: &CompiledVocabulary) -> GeneratorResult<String> {
        let manifest = Manifest {
            namespace: &vocabulary.config().vocabulary.namespace,
            classes: vocabulary
                .ordered_classes()
                .map(|class| Self::class_entry(vocabulary, class))
                .collect(),
            properties: vocabulary
                .graph()
                .properties
                .values()
                .map(|property| Self::property_entry(vocabulary, property))
                .collect(),
            collisions: vocabulary.identifiers().collisions(),
        };

        let mut output = serde_json::to_string_pretty(&manifest)?;
        output.push('\n');
        Ok(output)
    }

    fn get_file_extension(&self) -> &'static str {
        "json"
    }

    fn get_default_filename(&self) -> &'static str {
        "vocabulary.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn compiled() -> CompiledVocabulary {
        let mut graph = VocabularyGraph::new();

        let thing = ClassDef::new("Thing", "https://schema.org/Thing");
        let mut person = ClassDef::new("Person", "https://schema.org/Person");
        person.parents = vec!["Thing".to_string(), "Ghost".to_string()];
        person.comment = Some("A person.".to_string());
        graph.classes.insert("Thing".to_string(), thing);
        graph.classes.insert("Person".to_string(), person);

        let mut name = PropDef::new("name", "https://schema.org/name");
        name.domains = vec!["Thing".to_string()];
        name.ranges = vec!["Text".to_string()];
        graph.properties.insert("name".to_string(), name);

        crate::extractor::propagate_properties_to_classes(&mut graph);
        CompiledVocabulary::new(CompilerConfig::default(), graph)
    }

    #[test]
    fn test_manifest_contents() {
        let output = ManifestGenerator::new().generate(&compiled()).expect("generates");
        let manifest: Value = serde_json::from_str(&output).expect("valid JSON");

        assert_eq!(
            manifest,
            json!({
                "namespace": "https://schema.org/",
                "classes": [
                    {
                        "name": "Thing",
                        "iri": "https://schema.org/Thing",
                        "identifier": "Thing",
                        "parents": [],
                        "extends": [],
                        "properties": ["name"],
                        "unresolved": false
                    },
                    {
                        "name": "Person",
                        "iri": "https://schema.org/Person",
                        "identifier": "Person",
                        "parents": ["Ghost", "Thing"],
                        "extends": ["Thing"],
                        "properties": ["name"],
                        "unresolved": false,
                        "comment": "A person."
                    }
                ],
                "properties": [
                    {
                        "name": "name",
                        "iri": "https://schema.org/name",
                        "domains": ["Thing"],
                        "ranges": ["Text"],
                        "type": "string | Array<string>"
                    }
                ],
                "collisions": []
            })
        );
    }

    #[test]
    fn test_manifest_is_deterministic() {
        let generator = ManifestGenerator::new();
        let first = generator.generate(&compiled()).expect("generates");
        let second = generator.generate(&compiled()).expect("generates");
        assert_eq!(first, second);
        assert!(first.ends_with("}\n"));
    }
}
