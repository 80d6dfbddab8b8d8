//! # vocabc
//!
//! Compiles RDF vocabularies such as schema.org into nominal TypeScript type
//! declarations.
//!
//! The compiler reads a vocabulary document into an in-memory triple store,
//! extracts the class/property graph, orders classes so parents come first
//! despite cycles and multiple inheritance, maps property ranges to type
//! expressions and assigns every class a collision-free identifier.
//!
//! ## Quick Start
//!
//! ```rust
//! use vocab_compiler::prelude::*;
//!
//! let turtle = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     @prefix schema: <https://schema.org/> .
//!     schema:Thing a rdfs:Class .
//!     schema:Person a rdfs:Class ; rdfs:subClassOf schema:Thing .
//! "#;
//!
//! let store = load_document(turtle.as_bytes(), DocumentFormat::Turtle, None)?;
//! let compiler = VocabularyCompiler::new(CompilerConfig::default());
//! let output = compiler.generate(&store, &TypeScriptGenerator::new())?;
//!
//! assert!(output.contains("export interface Person extends JsonLdNode, Thing {"));
//! # Ok::<(), VocabError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unused_self)] // generator helpers take &self for a uniform shape
#![allow(clippy::doc_markdown)] // JSON-LD, TypeScript, IRI are proper nouns

/// Command-line interface
pub mod cli;

/// Compilation pipeline driver
pub mod compiler;

/// Class/property graph extraction
pub mod extractor;

/// Output generators
pub mod generator;

/// Class linearization
pub mod inheritance;

/// Document loading and the triple store adapter
pub mod loader;

/// Identifier sanitizing and collision resolution
pub mod naming;

/// Prelude module for convenient imports
pub mod prelude;

pub use compiler::{CompileReport, CompiledVocabulary, VocabularyCompiler};
pub use vocab_core::{Result, VocabError};
