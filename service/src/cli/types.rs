//! CLI type definitions

use crate::loader::DocumentFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `vocabc` command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "vocabc",
    version,
    about = "Compile RDF vocabularies into TypeScript declarations"
)]
pub struct VocabcCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: VocabcCommand,
}

/// Input options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Vocabulary document path or http(s) URL
    #[arg(short, long)]
    pub input: String,

    /// Document format, inferred from the extension when omitted
    #[arg(short = 'F', long, value_enum)]
    pub format: Option<DocumentFormat>,

    /// Base IRI for resolving relative references in the document
    #[arg(long)]
    pub base_iri: Option<String>,

    /// Compiler configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// `vocabc` subcommands
#[derive(Subcommand, Debug)]
pub enum VocabcCommand {
    /// Compile a vocabulary and write generated output
    Generate {
        /// Input options
        #[command(flatten)]
        input: InputArgs,

        /// Generator name (typescript, manifest)
        #[arg(short, long, default_value = "typescript")]
        generator: String,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile a vocabulary and report what was found
    Inspect {
        /// Input options
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available generators
    Generators,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        VocabcCli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = VocabcCli::parse_from([
            "vocabc",
            "-v",
            "generate",
            "--input",
            "schema.ttl",
            "--format",
            "turtle",
            "-o",
            "out.ts",
        ]);
        assert!(cli.verbose);
        match cli.command {
            VocabcCommand::Generate {
                input,
                generator,
                output,
            } => {
                assert_eq!(input.input, "schema.ttl");
                assert_eq!(input.format, Some(DocumentFormat::Turtle));
                assert_eq!(generator, "typescript");
                assert_eq!(output, Some(PathBuf::from("out.ts")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result =
            VocabcCli::try_parse_from(["vocabc", "-v", "-q", "inspect", "--input", "x.jsonld"]);
        assert!(result.is_err());
    }
}
