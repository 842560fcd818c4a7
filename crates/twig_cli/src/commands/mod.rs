//! Subcommand implementations

pub mod check;
pub mod pass;
pub mod run;

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use twig_ast::{Forest, SyntaxNode};

/// Reads a JSON forest from `path`.
pub fn read_forest(path: &Path) -> Result<Forest<SyntaxNode>> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid forest in {}", path.display()))
}
