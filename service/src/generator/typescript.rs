//! TypeScript declaration generator for compiled vocabularies

use super::base::BaseCodeFormatter;
use super::traits::{Generator, GeneratorError, GeneratorResult};
use crate::compiler::CompiledVocabulary;
use crate::naming::{
    CLASS_IDENTIFIER_TABLE, CLASS_NAME_UNION, CLASS_TYPE_MAP, is_declaration_name,
};
use std::fmt::Write;
use vocab_core::prelude::*;

/// TypeScript generator
///
/// Emits one interface per class in linearized order, followed by the class
/// name union, the name to type lookup table and the name to identifier table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl Generator for TypeScriptGenerator {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn description(&self) -> &'static str {
        "Generate TypeScript interfaces and lookup tables from a JSON-LD vocabulary"
    }

    fn generate(&self, vocabulary: &CompiledVocabulary) -> GeneratorResult<String> {
        let base = &vocabulary.config().generator.base_type_name;
        if !is_declaration_name(base) {
            return Err(GeneratorError::Configuration(format!(
                "Base type name '{base}' is not a usable TypeScript declaration name"
            )));
        }

        let mut output = String::new();

        self.generate_header(&mut output, vocabulary)?;
        self.generate_base_interface(&mut output, vocabulary)?;

        for class in vocabulary.ordered_classes() {
            self.generate_interface(&mut output, class, vocabulary)?;
        }

        self.generate_name_union(&mut output, vocabulary)?;
        self.generate_type_map(&mut output, vocabulary)?;
        self.generate_identifier_table(&mut output, vocabulary)?;

        Ok(output)
    }

    fn get_file_extension(&self) -> &'static str {
        "ts"
    }

    fn get_default_filename(&self) -> &'static str {
        "vocabulary.ts"
    }
}

impl TypeScriptGenerator {
    /// Convert `fmt::Error` to `GeneratorError`
    fn fmt_error_to_generator_error(e: std::fmt::Error) -> GeneratorError {
        GeneratorError::Fmt(e)
    }

    /// Create a new TypeScript generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn generate_header(
        &self,
        output: &mut String,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        let config = vocabulary.config();

        writeln!(output, "/**").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(
            output,
            " * Generated by vocabc from the {} vocabulary.",
            config.vocabulary.namespace.replace("*/", "*\\/")
        )
        .map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output, " * Do not edit by hand.").map_err(Self::fmt_error_to_generator_error)?;
        if let Some(header) = config.generator.header.as_deref() {
            for line in BaseCodeFormatter::wrap_text(&header.replace("*/", "*\\/"), 76) {
                writeln!(output, " * {line}").map_err(Self::fmt_error_to_generator_error)?;
            }
        }
        writeln!(output, " */").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    /// Shape shared by every node: the reserved JSON-LD keys
    fn generate_base_interface(
        &self,
        output: &mut String,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        let base = &vocabulary.config().generator.base_type_name;
        let context = "string | Record<string, unknown>";

        writeln!(output, "export interface {base} {{")
            .map_err(Self::fmt_error_to_generator_error)?;
        writeln!(
            output,
            "  \"@context\"?: {context} | Array<{context}>;"
        )
        .map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output, "  \"@type\"?: string;").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output, "  \"@id\"?: string;").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output, "}}").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    /// Generate the interface for one class
    fn generate_interface(
        &self,
        output: &mut String,
        class: &ClassDef,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        let identifier = Self::identifier(vocabulary, &class.name)?;
        let include_docs = vocabulary.config().generator.include_docs;

        if include_docs
            && let Some(doc) = class
                .comment
                .as_deref()
                .and_then(|c| BaseCodeFormatter::doc_comment(c, ""))
        {
            output.push_str(&doc);
        }

        let mut supertypes = vec![vocabulary.config().generator.base_type_name.clone()];
        for parent in vocabulary.emitted_parents(&class.name) {
            supertypes.push(Self::identifier(vocabulary, parent)?.to_string());
        }

        writeln!(
            output,
            "export interface {identifier} extends {} {{",
            supertypes.join(", ")
        )
        .map_err(Self::fmt_error_to_generator_error)?;
        writeln!(
            output,
            "  \"@type\"?: {} | string;",
            BaseCodeFormatter::quote(&class.name)
        )
        .map_err(Self::fmt_error_to_generator_error)?;

        let graph = vocabulary.graph();
        let mapper = vocabulary.type_mapper();
        for name in graph.effective_properties(&class.name) {
            let Some(property) = graph.property(&name) else {
                continue;
            };
            if include_docs
                && let Some(doc) = property
                    .comment
                    .as_deref()
                    .and_then(|c| BaseCodeFormatter::doc_comment(c, "  "))
            {
                output.push_str(&doc);
            }
            writeln!(
                output,
                "  {}?: {};",
                BaseCodeFormatter::quote(&property.name),
                mapper.map_property(property)
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        }

        writeln!(output, "}}").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    /// Closed union of every class name
    fn generate_name_union(
        &self,
        output: &mut String,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        let names: Vec<&String> = vocabulary.graph().classes.keys().collect();
        if names.is_empty() {
            writeln!(output, "export type {CLASS_NAME_UNION} = never;")
                .map_err(Self::fmt_error_to_generator_error)?;
        } else {
            writeln!(output, "export type {CLASS_NAME_UNION} =")
                .map_err(Self::fmt_error_to_generator_error)?;
            let last = names.len() - 1;
            for (idx, name) in names.into_iter().enumerate() {
                let terminator = if idx == last { ";" } else { "" };
                writeln!(output, "  | {}{terminator}", BaseCodeFormatter::quote(name))
                    .map_err(Self::fmt_error_to_generator_error)?;
            }
        }
        writeln!(output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    /// Class name to generated type lookup
    fn generate_type_map(
        &self,
        output: &mut String,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        writeln!(output, "export interface {CLASS_TYPE_MAP} {{")
            .map_err(Self::fmt_error_to_generator_error)?;
        for (name, identifier) in vocabulary.identifiers().iter() {
            writeln!(output, "  {}: {identifier};", BaseCodeFormatter::quote(name))
                .map_err(Self::fmt_error_to_generator_error)?;
        }
        writeln!(output, "}}").map_err(Self::fmt_error_to_generator_error)?;
        writeln!(output).map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    /// Class name to identifier table, for tooling and debugging
    fn generate_identifier_table(
        &self,
        output: &mut String,
        vocabulary: &CompiledVocabulary,
    ) -> GeneratorResult<()> {
        let identifiers = vocabulary.identifiers();
        let declaration = format!(
            "export const {CLASS_IDENTIFIER_TABLE}: Readonly<Record<{CLASS_NAME_UNION}, string>> ="
        );

        if identifiers.is_empty() {
            writeln!(output, "{declaration} {{}};").map_err(Self::fmt_error_to_generator_error)?;
            return Ok(());
        }

        writeln!(output, "{declaration} {{").map_err(Self::fmt_error_to_generator_error)?;
        for (name, identifier) in identifiers.iter() {
            writeln!(
                output,
                "  {}: {},",
                BaseCodeFormatter::quote(name),
                BaseCodeFormatter::quote(identifier)
            )
            .map_err(Self::fmt_error_to_generator_error)?;
        }
        writeln!(output, "}};").map_err(Self::fmt_error_to_generator_error)?;
        Ok(())
    }

    fn identifier<'v>(vocabulary: &'v CompiledVocabulary, name: &str) -> GeneratorResult<&'v str> {
        vocabulary.identifier(name).ok_or_else(|| {
            GeneratorError::Generation(format!("no identifier assigned to class '{name}'"))
        })
    }
}
