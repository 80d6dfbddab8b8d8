//! Core generator traits and types

use crate::compiler::CompiledVocabulary;
use thiserror::Error;
use vocab_core::VocabError;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur during code generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Code generation error
    #[error("Code generation failed: {0}")]
    Generation(String),

    /// Generator configuration or lookup error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Formatting into the output buffer failed
    #[error("Formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serialization error
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GeneratorError> for VocabError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Configuration(message) => VocabError::config(message),
            other => VocabError::generation(other.to_string()),
        }
    }
}

/// A generator turning a compiled vocabulary into one text artifact
///
/// Output must depend only on the compiled vocabulary so that identical input
/// always yields byte-identical output.
pub trait Generator: Send + Sync {
    /// Get generator name
    fn name(&self) -> &'static str;

    /// Get generator description
    fn description(&self) -> &'static str;

    /// Render the artifact
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn generate(&self, vocabulary: &CompiledVocabulary) -> GeneratorResult<String>;

    /// Get the file extension for generated files
    fn get_file_extension(&self) -> &'static str;

    /// Get the default filename for generated files
    fn get_default_filename(&self) -> &'static str;
}
