//! Error types for vocabulary compilation

use thiserror::Error;

/// Main error type for vocabulary compiler operations
///
/// Only pipeline-level failures are represented here. Irregularities inside a
/// vocabulary (dangling parents, properties without domains, cycles) are never
/// errors; the compiler absorbs them and keeps going.
#[derive(Error, Debug)]
pub enum VocabError {
    /// Source document could not be parsed into triples
    #[error(
        "Failed to parse vocabulary document{}: {message}",
        .location.as_deref().map(|l| format!(" '{l}'")).unwrap_or_default()
    )]
    ParseError {
        /// Error message
        message: String,
        /// Document location if available
        location: Option<String>,
    },

    /// Fetching the source document failed
    #[error("Failed to fetch '{url}': {reason}")]
    FetchError {
        /// Requested URL
        url: String,
        /// Reason for failure
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Code generation errors
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for vocabulary compiler operations
pub type Result<T> = std::result::Result<T, VocabError>;

impl VocabError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new fetch error
    #[must_use]
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchError {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a new generation error
    #[must_use]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::GenerationError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for VocabError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
