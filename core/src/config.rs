//! Configuration for the vocabulary compiler
//!
//! Every field has a default matching the schema.org vocabulary, so an empty
//! configuration file (or none at all) compiles schema.org.

use crate::error::{Result, VocabError};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::debug;

/// `rdf:` namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// `rdfs:` namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// Default vocabulary namespace
pub const SCHEMA_ORG_NS: &str = "https://schema.org/";

static ENV_VAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

static ABSOLUTE_IRI_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S+$").ok());

static IDENTIFIER_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").ok());

/// Load configuration from a `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `VocabError::IoError` if the file cannot be read and
/// `VocabError::ConfigError` if the YAML cannot be parsed or fails validation.
pub fn load_config(path: &Path) -> Result<CompilerConfig> {
    let contents = std::fs::read_to_string(path).map_err(VocabError::IoError)?;
    let config = CompilerConfig::from_yaml_str(&contents)?;
    debug!(
        path = %path.display(),
        namespace = %config.vocabulary.namespace,
        primitives = config.primitives.0.len(),
        "Loaded compiler configuration"
    );
    Ok(config)
}

/// Substitute environment variables in the format `${VAR:-default}`
fn substitute_env_vars(content: &str) -> String {
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

fn is_absolute_iri(value: &str) -> bool {
    ABSOLUTE_IRI_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Complete compiler configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Which IRIs identify classes, properties and their edges
    pub vocabulary: VocabularyTerms,

    /// Range names treated as scalar values
    pub primitives: PrimitiveTypes,

    /// Output settings
    pub generator: GeneratorSettings,
}

impl CompilerConfig {
    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns `VocabError::ConfigError` if the YAML cannot be parsed or the
    /// resulting configuration is invalid.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let substituted = substitute_env_vars(contents);
        let config: Self = if substituted.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&substituted)
                .map_err(|e| VocabError::config(format!("Failed to parse YAML config: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that namespace and predicates are absolute IRIs
    ///
    /// # Errors
    ///
    /// Returns `VocabError::ConfigError` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let terms = &self.vocabulary;
        let checks = [
            ("vocabulary.namespace", terms.namespace.clone()),
            ("vocabulary.class_type", terms.class_type.clone()),
            ("vocabulary.property_type", terms.property_type.clone()),
            ("vocabulary.type_predicate", terms.type_predicate.clone()),
            ("vocabulary.subclass_of", terms.subclass_of.clone()),
            ("vocabulary.domain_includes", terms.domain_includes_iri()),
            ("vocabulary.range_includes", terms.range_includes_iri()),
            ("vocabulary.comment", terms.comment.clone()),
        ];

        for (field, value) in checks {
            if !is_absolute_iri(&value) {
                return Err(VocabError::config(format!(
                    "{field} must be an absolute IRI, got '{value}'"
                )));
            }
        }

        let base = &self.generator.base_type_name;
        if !IDENTIFIER_PATTERN.as_ref().is_some_and(|re| re.is_match(base)) {
            return Err(VocabError::config(format!(
                "generator.base_type_name must be a valid identifier, got '{base}'"
            )));
        }

        Ok(())
    }
}

/// IRIs that define the vocabulary's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyTerms {
    /// Namespace prefix stripped from IRIs to produce local names
    pub namespace: String,

    /// Predicate linking a term to its kind
    pub type_predicate: String,

    /// Object marking a term as a class
    pub class_type: String,

    /// Object marking a term as a property
    pub property_type: String,

    /// Predicate linking a class to a direct superclass
    pub subclass_of: String,

    /// Predicate linking a property to a domain class, defaults to `{namespace}domainIncludes`
    pub domain_includes: Option<String>,

    /// Predicate linking a property to a range, defaults to `{namespace}rangeIncludes`
    pub range_includes: Option<String>,

    /// Predicate carrying documentation text
    pub comment: String,
}

impl Default for VocabularyTerms {
    fn default() -> Self {
        Self {
            namespace: SCHEMA_ORG_NS.to_string(),
            type_predicate: format!("{RDF_NS}type"),
            class_type: format!("{RDFS_NS}Class"),
            property_type: format!("{RDF_NS}Property"),
            subclass_of: format!("{RDFS_NS}subClassOf"),
            domain_includes: None,
            range_includes: None,
            comment: format!("{RDFS_NS}comment"),
        }
    }
}

impl VocabularyTerms {
    /// Effective `domainIncludes` predicate
    #[must_use]
    pub fn domain_includes_iri(&self) -> String {
        self.domain_includes
            .clone()
            .unwrap_or_else(|| format!("{}domainIncludes", self.namespace))
    }

    /// Effective `rangeIncludes` predicate
    #[must_use]
    pub fn range_includes_iri(&self) -> String {
        self.range_includes
            .clone()
            .unwrap_or_else(|| format!("{}rangeIncludes", self.namespace))
    }

    /// Strip the namespace from an IRI, `None` if it lies outside it
    #[must_use]
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.namespace.as_str())
            .filter(|local| !local.is_empty())
    }
}

/// Scalar types a primitive range can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Textual values, including URLs and temporal values
    String,
    /// Numeric values
    Number,
    /// Boolean values
    Boolean,
}

impl ScalarType {
    /// TypeScript spelling of the scalar
    #[must_use]
    pub fn as_typescript(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Range names mapped to scalar types, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveTypes(pub IndexMap<String, ScalarType>);

impl Default for PrimitiveTypes {
    fn default() -> Self {
        // Dates stay strings: generated types describe the JSON shape, not parsed values.
        let entries = [
            ("Text", ScalarType::String),
            ("URL", ScalarType::String),
            ("CssSelectorType", ScalarType::String),
            ("XPathType", ScalarType::String),
            ("PronounceableText", ScalarType::String),
            ("Boolean", ScalarType::Boolean),
            ("Number", ScalarType::Number),
            ("Integer", ScalarType::Number),
            ("Float", ScalarType::Number),
            ("Date", ScalarType::String),
            ("DateTime", ScalarType::String),
            ("Time", ScalarType::String),
        ];
        Self(
            entries
                .into_iter()
                .map(|(name, scalar)| (name.to_string(), scalar))
                .collect(),
        )
    }
}

impl PrimitiveTypes {
    /// Scalar type for a range name, if it is primitive
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ScalarType> {
        self.0.get(name).copied()
    }
}

/// Output settings shared by generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Emit vocabulary comments as doc comments
    pub include_docs: bool,

    /// Extra banner line placed under the generated-file notice
    pub header: Option<String>,

    /// Name of the base shape carrying `@context`, `@type` and `@id`
    pub base_type_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            include_docs: true,
            header: None,
            base_type_name: "JsonLdNode".to_string(),
        }
    }
}
