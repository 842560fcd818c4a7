//! Built-in passes instantiated from pass specs

use tracing::info;
use twig_ast::{NodeVisitor, SyntaxNode};
use twig_core::passes::{KindCounter, RemoveKind, RenameKind, UnwrapKind};

use crate::config::PassSpec;

/// A stock visitor built from a [`PassSpec`].
#[derive(Debug)]
pub enum Pass {
    Remove(RemoveKind),
    Rename(RenameKind),
    Unwrap(UnwrapKind),
    Count(KindCounter),
}

impl Pass {
    pub fn from_spec(spec: &PassSpec) -> Self {
        match spec {
            PassSpec::Remove(kind) => Pass::Remove(RemoveKind::new(kind)),
            PassSpec::Prune(kind) => Pass::Remove(RemoveKind::new(kind).pruning()),
            PassSpec::Rename { from, to } => Pass::Rename(RenameKind::new(from, to)),
            PassSpec::Unwrap(kind) => Pass::Unwrap(UnwrapKind::new(kind)),
            PassSpec::Count => Pass::Count(KindCounter::new()),
        }
    }

    pub fn visitor_mut(&mut self) -> &mut dyn NodeVisitor<SyntaxNode> {
        match self {
            Pass::Remove(pass) => pass,
            Pass::Rename(pass) => pass,
            Pass::Unwrap(pass) => pass,
            Pass::Count(pass) => pass,
        }
    }

    /// Logs what the pass did.
    pub fn report(&self) {
        match self {
            Pass::Remove(pass) => info!("Removed {} node(s)", pass.removed()),
            Pass::Rename(pass) => info!("Renamed {} node(s)", pass.renamed()),
            Pass::Unwrap(pass) => info!("Unwrapped {} node(s)", pass.unwrapped()),
            Pass::Count(counter) => {
                for (kind, count) in counter.counts() {
                    info!("{:>6}  {}", count, kind);
                }
                info!("{:>6}  total", counter.total());
            }
        }
    }
}
