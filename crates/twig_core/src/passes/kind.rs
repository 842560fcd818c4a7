//! Kind-based rewriting passes.

use twig_ast::{EnterAction, Kinded, LeaveAction, Node, NodeVisitor, Slot, VisitResult};

/// Removes every node of a kind from its enclosing list.
///
/// Matching nodes in single-node slots make the traversal fail with an
/// invalid action error, since there is no list to remove them from.
#[derive(Debug, Clone)]
pub struct RemoveKind {
    kind: String,
    prune: bool,
    removed: usize,
}

impl RemoveKind {
    /// Creates a pass removing nodes of `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            prune: false,
            removed: 0,
        }
    }

    /// Also skips the children of matching nodes, hiding them from every
    /// visitor in the chain.
    pub fn pruning(mut self) -> Self {
        self.prune = true;
        self
    }

    /// Number of nodes removed so far.
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl<N: Kinded> NodeVisitor<N> for RemoveKind {
    fn enter_node(&mut self, node: &mut N) -> VisitResult<EnterAction<N>> {
        if self.prune && node.kind() == self.kind {
            return Ok(EnterAction::SkipChildren);
        }
        Ok(EnterAction::Keep)
    }

    fn leave_node(&mut self, node: &mut N) -> VisitResult<LeaveAction<N>> {
        if node.kind() != self.kind {
            return Ok(LeaveAction::Keep);
        }
        self.removed += 1;
        Ok(LeaveAction::Remove)
    }
}

/// Renames a node kind in place when a node is entered.
#[derive(Debug, Clone)]
pub struct RenameKind {
    from: String,
    to: String,
    renamed: usize,
}

impl RenameKind {
    /// Creates a pass renaming `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            renamed: 0,
        }
    }

    /// Number of nodes renamed so far.
    pub fn renamed(&self) -> usize {
        self.renamed
    }
}

impl<N: Kinded> NodeVisitor<N> for RenameKind {
    fn enter_node(&mut self, node: &mut N) -> VisitResult<EnterAction<N>> {
        if node.kind() == self.from {
            node.set_kind(self.to.clone());
            self.renamed += 1;
        }
        Ok(EnterAction::Keep)
    }
}

/// Replaces each node of a kind with the nodes held in its child slots.
///
/// Child nodes are spliced in slot order; nested lists are flattened and
/// leaves are dropped. Like [`RemoveKind`], this only works for nodes that
/// sit in a list.
#[derive(Debug, Clone)]
pub struct UnwrapKind {
    kind: String,
    unwrapped: usize,
}

impl UnwrapKind {
    /// Creates a pass unwrapping nodes of `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            unwrapped: 0,
        }
    }

    /// Number of nodes unwrapped so far.
    pub fn unwrapped(&self) -> usize {
        self.unwrapped
    }
}

impl<N: Node + Kinded> NodeVisitor<N> for UnwrapKind {
    fn leave_node(&mut self, node: &mut N) -> VisitResult<LeaveAction<N>> {
        if node.kind() != self.kind {
            return Ok(LeaveAction::Keep);
        }

        let mut children = Vec::new();
        for index in 0..node.slot_count() {
            if let Some(slot) = node.set_slot(index, Slot::default()) {
                children.extend(slot.into_nodes());
            }
        }

        self.unwrapped += 1;
        Ok(LeaveAction::Splice(children))
    }
}
