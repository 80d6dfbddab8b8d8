//! `vocabc` command-line interface
//!
//! Compiles an RDF vocabulary document into TypeScript declarations or a JSON
//! manifest.

use vocab_compiler::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await?;
    Ok(())
}
