//! Generator registry for looking up generators by name

use super::traits::{Generator, GeneratorError, GeneratorResult};
use super::{ManifestGenerator, TypeScriptGenerator};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Information about a registered generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    /// Generator name
    pub name: String,
    /// Generator description
    pub description: String,
    /// Extension of generated files
    pub file_extension: String,
}

/// Registry of available generators
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in generators
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let generators: Vec<Arc<dyn Generator>> = vec![
            Arc::new(TypeScriptGenerator::new()),
            Arc::new(ManifestGenerator::new()),
        ];
        for generator in generators {
            registry
                .generators
                .insert(generator.name().to_string(), generator);
        }
        registry
    }

    /// Register a generator
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if a generator with the same name is already registered.
    pub fn register(&mut self, generator: Arc<dyn Generator>) -> GeneratorResult<()> {
        let name = generator.name().to_string();
        if self.generators.contains_key(&name) {
            return Err(GeneratorError::Configuration(format!(
                "Generator '{name}' is already registered"
            )));
        }
        self.generators.insert(name, generator);
        Ok(())
    }

    /// Get a generator by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.generators.get(name).cloned()
    }

    /// Get a generator by name, failing with the list of known names
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Configuration` if no generator has that name.
    pub fn require(&self, name: &str) -> GeneratorResult<Arc<dyn Generator>> {
        self.get(name).ok_or_else(|| {
            GeneratorError::Configuration(format!(
                "Unknown generator '{name}', expected one of: {}",
                self.list_generators().join(", ")
            ))
        })
    }

    /// Registered generator names in sorted order
    #[must_use]
    pub fn list_generators(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }

    /// Information for every registered generator
    #[must_use]
    pub fn list_info(&self) -> Vec<GeneratorInfo> {
        self.generators
            .values()
            .map(|generator| GeneratorInfo {
                name: generator.name().to_string(),
                description: generator.description().to_string(),
                file_extension: generator.get_file_extension().to_string(),
            })
            .collect()
    }
}
