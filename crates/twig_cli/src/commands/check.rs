//! Check command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use twig_ast::SyntaxNode;
use twig_core::NodeTraverser;
use twig_core::passes::KindCounter;

use super::read_forest;

pub fn run_check(input: &Path) -> Result<()> {
    let forest = read_forest(input)?;
    let total: usize = forest.iter().map(|slot| slot.node_count()).sum();

    let mut counter = KindCounter::new();
    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut counter);
    // Read-only visitor; the forest comes back unchanged.
    traverser.traverse(forest).into_diagnostic()?;
    drop(traverser);

    println!("{}: {} node(s)", input.display(), total);
    for (kind, count) in counter.counts() {
        println!("  {:<24} {}", kind, count);
    }
    info!("Checked {}", input.display());

    Ok(())
}
