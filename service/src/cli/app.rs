//! `vocabc` CLI application

use super::types::{InputArgs, VocabcCli, VocabcCommand};
use crate::compiler::{CompileReport, VocabularyCompiler};
use crate::generator::GeneratorRegistry;
use crate::loader::{DocumentFormat, fetch_document, is_remote, load_document};
use crate::naming::is_declaration_name;
use clap::Parser;
use oxigraph::store::Store;
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vocab_core::prelude::*;

/// Main `vocabc` application
pub struct VocabcApp {
    cli: VocabcCli,
    registry: GeneratorRegistry,
}

impl VocabcApp {
    /// Create the application from command line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(VocabcCli::parse())
    }

    /// Create the application from parsed arguments
    #[must_use]
    pub fn new(cli: VocabcCli) -> Self {
        Self {
            cli,
            registry: GeneratorRegistry::with_defaults(),
        }
    }

    /// Run the application
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn run(self) -> Result<()> {
        self.init_logging();

        match self.execute_command().await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("Command failed: {}", err);
                Err(err)
            }
        }
    }

    /// Configure tracing based on CLI flags
    ///
    /// `RUST_LOG` wins over the flags when set. Logs go to stderr so generated
    /// output can be piped from stdout.
    fn init_logging(&self) {
        let default_level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        // A subscriber may already be installed when embedded; keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    async fn execute_command(&self) -> Result<()> {
        match &self.cli.command {
            VocabcCommand::Generate {
                input,
                generator,
                output,
            } => self.generate_command(input, generator, output.as_ref()).await,
            VocabcCommand::Inspect { input, json } => self.inspect_command(input, *json).await,
            VocabcCommand::Generators => write_stdout(&self.generators_command()?).await,
        }
    }

    async fn generate_command(
        &self,
        input: &InputArgs,
        generator_name: &str,
        output: Option<&PathBuf>,
    ) -> Result<()> {
        let generator = self.registry.require(generator_name)?;
        let (compiler, store) = prepare(input).await?;
        let rendered = compiler.generate(&store, generator.as_ref())?;

        match output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(path, rendered.as_bytes()).await?;
                info!(path = %path.display(), "Wrote {} output", generator.name());
            }
            None => write_stdout(&rendered).await?,
        }
        Ok(())
    }

    async fn inspect_command(&self, input: &InputArgs, json: bool) -> Result<()> {
        let (compiler, store) = prepare(input).await?;
        let report = compiler.compile(&store).report();

        let rendered = if json {
            let mut rendered = serde_json::to_string_pretty(&report)?;
            rendered.push('\n');
            rendered
        } else {
            format_report(&report).map_err(fmt_error_to_vocab_error)?
        };
        write_stdout(&rendered).await
    }

    fn generators_command(&self) -> Result<String> {
        let mut listing = String::new();
        for info in self.registry.list_info() {
            writeln!(
                listing,
                "{:<12} .{:<6} {}",
                info.name, info.file_extension, info.description
            )
            .map_err(fmt_error_to_vocab_error)?;
        }
        Ok(listing)
    }
}

/// Load configuration and the input document
async fn prepare(input: &InputArgs) -> Result<(VocabularyCompiler, Store)> {
    let config = load_compiler_config(input.config.as_deref())?;
    let format = input
        .format
        .unwrap_or_else(|| DocumentFormat::infer(&input.input));

    let data = read_input(&input.input).await?;
    let base_iri = input
        .base_iri
        .as_deref()
        .or_else(|| is_remote(&input.input).then_some(input.input.as_str()));
    let store = load_document(&data, format, base_iri).map_err(|err| match err {
        VocabError::ParseError { message, .. } => VocabError::parse_at(message, input.input.as_str()),
        other => other,
    })?;

    Ok((VocabularyCompiler::new(config), store))
}

/// Load compiler configuration, falling back to defaults without a file
///
/// # Errors
///
/// Returns error if the file cannot be read, parsed or validated.
pub fn load_compiler_config(path: Option<&Path>) -> Result<CompilerConfig> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => CompilerConfig::default(),
    };

    let base = &config.generator.base_type_name;
    if !is_declaration_name(base) {
        return Err(VocabError::config(format!(
            "generator.base_type_name '{base}' is a reserved TypeScript name"
        )));
    }
    Ok(config)
}

/// Read a vocabulary document from disk or over HTTP
///
/// # Errors
///
/// Returns error if the file cannot be read or the fetch fails.
pub async fn read_input(location: &str) -> Result<Vec<u8>> {
    if is_remote(location) {
        return fetch_document(location).await;
    }
    info!(path = location, "Reading vocabulary document");
    Ok(fs::read(location).await?)
}

async fn write_stdout(contents: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(contents.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

fn fmt_error_to_vocab_error(e: std::fmt::Error) -> VocabError {
    VocabError::generation(format!("Failed to format output: {e}"))
}

/// Human-readable compile report
fn format_report(report: &CompileReport) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Vocabulary: {}", report.namespace)?;
    writeln!(out, "Classes:    {}", report.classes)?;
    writeln!(out, "Properties: {}", report.properties)?;

    if !report.unresolved_classes.is_empty() {
        writeln!(
            out,
            "\nClasses on or below a subclass cycle ({}):",
            report.unresolved_classes.len()
        )?;
        for name in &report.unresolved_classes {
            writeln!(out, "  {name}")?;
        }
    }

    if !report.dangling_parents.is_empty() {
        writeln!(
            out,
            "\nUndeclared superclasses ({}):",
            report.dangling_parents.len()
        )?;
        for (class, parent) in &report.dangling_parents {
            writeln!(out, "  {class} -> {parent}")?;
        }
    }

    if !report.unattached_properties.is_empty() {
        writeln!(
            out,
            "\nProperties without a declared domain ({}):",
            report.unattached_properties.len()
        )?;
        for name in &report.unattached_properties {
            writeln!(out, "  {name}")?;
        }
    }

    if !report.collisions.is_empty() {
        writeln!(out, "\nIdentifier collisions ({}):", report.collisions.len())?;
        for collision in &report.collisions {
            writeln!(
                out,
                "  {} kept by {}",
                collision.identifier, collision.kept_by
            )?;
            for (name, replacement) in &collision.renamed {
                writeln!(out, "    {name} -> {replacement}")?;
            }
        }
    }
    Ok(out)
}
