//! Tests for compiling with non-default configuration

mod helpers;

use helpers::declaration_body;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use vocab_compiler::cli::load_compiler_config;
use vocab_compiler::prelude::*;

const EXAMPLE_VOCAB: &str = "
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <http://example.org/vocab#> .

ex:Resource a rdfs:Class .
ex:Dataset a rdfs:Class ; rdfs:subClassOf ex:Resource ; rdfs:comment \"A dataset.\" .
ex:title a rdf:Property ; ex:domain ex:Resource ; ex:range ex:Literal .
ex:size a rdf:Property ; ex:domain ex:Dataset ; ex:range ex:Count .
ex:published a rdf:Property ; ex:domain ex:Dataset ; ex:range ex:Flag .
";

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

fn generate(config: CompilerConfig) -> String {
    let store = load_document(EXAMPLE_VOCAB.as_bytes(), DocumentFormat::Turtle, None)
        .expect("fixture parses");
    VocabularyCompiler::new(config)
        .generate(&store, &TypeScriptGenerator::new())
        .expect("generates")
}

#[test]
fn test_custom_vocabulary_from_yaml() {
    let file = write_config(
        r#"
vocabulary:
  namespace: "http://example.org/vocab#"
  domain_includes: "http://example.org/vocab#domain"
  range_includes: "http://example.org/vocab#range"
primitives:
  Literal: string
  Count: number
  Flag: boolean
generator:
  include_docs: false
  base_type_name: Node
  header: "Example vocabulary"
"#,
    );

    let config = load_compiler_config(Some(file.path())).expect("config loads");
    let output = generate(config);

    assert!(output.contains(" * Generated by vocabc from the http://example.org/vocab# vocabulary.\n"));
    assert!(output.contains(" * Example vocabulary\n"));
    assert!(output.contains("export interface Node {"));
    assert!(!output.contains("A dataset."));
    assert_eq!(
        declaration_body(&output, "Dataset"),
        "  \"@type\"?: \"Dataset\" | string;\n  \
         \"published\"?: boolean | Array<boolean>;\n  \
         \"size\"?: number | Array<number>;\n  \
         \"title\"?: string | Array<string>;"
    );
    assert!(output.contains("export interface Dataset extends Node, Resource {"));
}

#[test]
fn test_env_substitution_in_namespace() {
    // VOCABC_TEST_UNSET_NAMESPACE is never set, so the default applies.
    let file = write_config(
        r#"
vocabulary:
  namespace: "${VOCABC_TEST_UNSET_NAMESPACE:-http://example.org/vocab#}"
"#,
    );

    let config = load_compiler_config(Some(file.path())).expect("config loads");
    assert_eq!(config.vocabulary.namespace, "http://example.org/vocab#");
    assert_eq!(
        config.vocabulary.domain_includes_iri(),
        "http://example.org/vocab#domainIncludes"
    );

    // The fixture uses ex:domain, so nothing attaches under the derived predicate.
    let output = generate(config);
    assert_eq!(
        declaration_body(&output, "Dataset"),
        "  \"@type\"?: \"Dataset\" | string;"
    );
    assert!(output.contains("/**\n * A dataset.\n */\nexport interface Dataset"));
}

#[test]
fn test_invalid_namespace_is_rejected() {
    let file = write_config("vocabulary:\n  namespace: not an iri\n");
    let err = load_compiler_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, VocabError::ConfigError(_)));
    assert!(err.to_string().contains("vocabulary.namespace"));
}

#[test]
fn test_unknown_scalar_type_is_rejected() {
    let file = write_config("primitives:\n  Text: text\n");
    assert!(matches!(
        load_compiler_config(Some(file.path())),
        Err(VocabError::ConfigError(_))
    ));
}

#[test]
fn test_reserved_base_type_name_is_rejected() {
    for name in ["string", "Readonly", "VocabularyClassName"] {
        let file = write_config(&format!("generator:\n  base_type_name: {name}\n"));
        let err = load_compiler_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, VocabError::ConfigError(_)));
        assert!(err.to_string().contains("generator.base_type_name"), "{name}");
    }
}
