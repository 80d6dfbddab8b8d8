//! Loading vocabulary documents into a queryable triple store
//!
//! Fetching and parsing happen once, fully, before compilation starts. The
//! compiler only ever sees the store through [`TripleSource`].

pub mod fetch;
pub mod rdf;
pub mod source;

pub use fetch::{fetch_document, is_remote};
pub use rdf::{DocumentFormat, load_document};
pub use source::TripleSource;
