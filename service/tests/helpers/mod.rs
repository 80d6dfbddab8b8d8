//! Shared fixtures for integration tests

#![allow(dead_code)]

use oxigraph::store::Store;
use vocab_compiler::prelude::*;

/// Prefixes prepended to every Turtle fixture
pub const PREFIXES: &str = "\
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix schema: <https://schema.org/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
";

/// Parse a Turtle fixture body into a store
pub fn turtle_store(body: &str) -> Store {
    let document = format!("{PREFIXES}{body}");
    load_document(document.as_bytes(), DocumentFormat::Turtle, None)
        .expect("fixture should parse")
}

/// Compile a Turtle fixture with the default configuration
pub fn compile(body: &str) -> CompiledVocabulary {
    VocabularyCompiler::new(CompilerConfig::default()).compile(&turtle_store(body))
}

/// Generate TypeScript for a Turtle fixture with the default configuration
pub fn typescript(body: &str) -> String {
    VocabularyCompiler::new(CompilerConfig::default())
        .generate(&turtle_store(body), &TypeScriptGenerator::new())
        .expect("generation should succeed")
}

/// Byte offset of the declaration of interface `identifier`
pub fn declaration_index(output: &str, identifier: &str) -> usize {
    output
        .find(&format!("export interface {identifier} "))
        .unwrap_or_else(|| panic!("no declaration for {identifier}"))
}

/// Body of the declaration of interface `identifier`, braces excluded
pub fn declaration_body<'a>(output: &'a str, identifier: &str) -> &'a str {
    let start = declaration_index(output, identifier);
    let open = start + output[start..].find("{\n").expect("opening brace") + 2;
    let close = open + output[open..].find("\n}\n").expect("closing brace");
    &output[open..close]
}

/// The `export interface X extends ... {` line for `identifier`
pub fn declaration_line<'a>(output: &'a str, identifier: &str) -> &'a str {
    let start = declaration_index(output, identifier);
    let end = start + output[start..].find('\n').expect("line end");
    &output[start..end]
}
