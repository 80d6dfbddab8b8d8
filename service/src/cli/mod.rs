//! Command-line interface for the vocabulary compiler

mod app;
mod types;

pub use app::{VocabcApp, load_compiler_config, read_input};
pub use types::{InputArgs, VocabcCli, VocabcCommand};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if loading, compiling or writing output fails.
pub async fn run() -> vocab_core::Result<()> {
    VocabcApp::from_args().run().await
}
