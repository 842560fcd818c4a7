//! Node statistics pass.

use std::collections::BTreeMap;

use twig_ast::{EnterAction, Kinded, NodeVisitor, VisitResult};

/// Counts entered nodes per kind.
#[derive(Debug, Default, Clone)]
pub struct KindCounter {
    counts: BTreeMap<String, usize>,
}

impl KindCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entered nodes of `kind`.
    pub fn get(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    /// Total number of entered nodes.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts per kind, sorted by kind name.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }
}

impl<N: Kinded> NodeVisitor<N> for KindCounter {
    fn enter_node(&mut self, node: &mut N) -> VisitResult<EnterAction<N>> {
        *self.counts.entry(node.kind().to_string()).or_default() += 1;
        Ok(EnterAction::Keep)
    }
}
