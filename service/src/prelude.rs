//! Prelude module for the vocabulary compiler
//!
//! Re-exports the types needed to compile a vocabulary end to end.

pub use vocab_core::prelude::*;

pub use crate::compiler::{CompileReport, CompiledVocabulary, VocabularyCompiler};
pub use crate::generator::{
    Generator, GeneratorRegistry, ManifestGenerator, TypeMapper, TypeScriptGenerator,
};
pub use crate::loader::{DocumentFormat, TripleSource, load_document};
pub use crate::naming::{IdentifierTable, sanitize};
