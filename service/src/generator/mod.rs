//! Output generation for compiled vocabularies
//!
//! Every generator is a pure function of a [`CompiledVocabulary`], so the same
//! vocabulary document always yields byte-identical output.
//!
//! [`CompiledVocabulary`]: crate::compiler::CompiledVocabulary

// Core generator infrastructure
pub mod base;
pub mod registry;
pub mod traits;
pub mod type_mapper;

// Output formats
pub mod manifest;
pub mod typescript;

pub use base::BaseCodeFormatter;
pub use registry::{GeneratorInfo, GeneratorRegistry};
pub use traits::{Generator, GeneratorError, GeneratorResult};
pub use type_mapper::{TypeMapper, UNCONSTRAINED};

pub use manifest::ManifestGenerator;
pub use typescript::TypeScriptGenerator;
