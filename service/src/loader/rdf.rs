//! RDF document parsing for vocabulary sources
//!
//! The parser is oxigraph's; this module only picks the format and moves the
//! parsed quads into an in-memory [`Store`].

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::store::Store;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;
use vocab_core::prelude::*;

/// Serialization of a vocabulary document
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    /// JSON-LD (.jsonld, .json)
    JsonLd,
    /// Turtle (.ttl)
    Turtle,
    /// N-Triples (.nt)
    NTriples,
    /// RDF/XML (.rdf, .owl, .xml)
    RdfXml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jsonld" | "json" => Some(Self::JsonLd),
            "ttl" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            "rdf" | "owl" | "xml" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Guess the format from a path or URL, defaulting to JSON-LD
    #[must_use]
    pub fn infer(location: &str) -> Self {
        Path::new(location.split(['?', '#']).next().unwrap_or(location))
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::JsonLd)
    }

    fn to_oxigraph_format(self) -> Option<RdfFormat> {
        match self {
            Self::JsonLd => RdfFormat::from_extension("jsonld"),
            Self::Turtle => Some(RdfFormat::Turtle),
            Self::NTriples => Some(RdfFormat::NTriples),
            Self::RdfXml => Some(RdfFormat::RdfXml),
        }
    }
}

/// Parse a vocabulary document into an in-memory store
///
/// # Errors
///
/// Returns `VocabError::ParseError` if the document is not valid in the given
/// format, and `VocabError::ConfigError` for an invalid base IRI.
pub fn load_document(data: &[u8], format: DocumentFormat, base_iri: Option<&str>) -> Result<Store> {
    let rdf_format = format
        .to_oxigraph_format()
        .ok_or_else(|| VocabError::config(format!("{format:?} parsing is not available")))?;

    let parser = RdfParser::from_format(rdf_format);
    let parser = if let Some(base) = base_iri {
        parser
            .with_base_iri(base)
            .map_err(|e| VocabError::config(format!("Invalid base IRI: {e}")))?
    } else {
        parser
    };

    let quads: Vec<_> = parser
        .for_reader(Cursor::new(data))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| VocabError::parse(format!("Failed to parse {format:?} document: {e}")))?;

    let store =
        Store::new().map_err(|e| VocabError::other_with_source("Failed to create store", e))?;
    for quad in &quads {
        store
            .insert(quad)
            .map_err(|e| VocabError::other_with_source("Failed to insert quad", e))?;
    }

    debug!(quads = quads.len(), ?format, "Loaded vocabulary document");
    Ok(store)
}
