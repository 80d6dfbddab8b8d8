//! # vocabc core
//!
//! Core types, errors and configuration for compiling RDF vocabularies into
//! nominal type declarations.
//!
//! The compiler pipeline itself lives in the `vocabc` crate; this crate only
//! holds what every stage shares.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for vocabulary compilation
pub mod error;

/// Vocabulary graph types
pub mod types;

/// Compiler configuration
pub mod config;

pub use config::{CompilerConfig, GeneratorSettings, PrimitiveTypes, ScalarType, VocabularyTerms};
pub use error::{Result, VocabError};
pub use types::{ClassDef, PropDef, VocabularyGraph};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{Result, VocabError};
    pub use crate::types::*;
}
