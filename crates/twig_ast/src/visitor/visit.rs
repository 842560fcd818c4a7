//! NodeVisitor trait for rewriting passes.

use crate::Slot;

use super::action::{EnterAction, ForestAction, LeaveAction};

/// Error raised by a visitor hook.
///
/// The engine hands it back to the caller unchanged, so visitors can return
/// their own error types and callers can downcast them.
pub type VisitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for visitor hooks.
pub type VisitResult<T> = Result<T, VisitError>;

/// A rewriting pass.
///
/// Every hook has a default implementation that keeps its input, so a pass
/// only overrides the hooks it cares about.
///
/// # Chaining
///
/// When several visitors are registered with one traverser, each hook event
/// runs through them in registration order, and whatever one visitor commits
/// (its replacement, or the untouched input) is what the next one receives.
///
/// # Mutation
///
/// `enter_node` and `leave_node` receive the node mutably: a pass may edit
/// leaves or kinds in place and answer [`EnterAction::Keep`]. Structural
/// edits of the enclosing sequence go through the returned action.
pub trait NodeVisitor<N> {
    /// Called once with the initial forest.
    #[inline]
    fn before_traverse(&mut self, _forest: &[Slot<N>]) -> VisitResult<ForestAction<N>> {
        Ok(ForestAction::Keep)
    }

    /// Called when a node is reached, before its children.
    #[inline]
    fn enter_node(&mut self, _node: &mut N) -> VisitResult<EnterAction<N>> {
        Ok(EnterAction::Keep)
    }

    /// Called after a node's children are processed (or skipped).
    #[inline]
    fn leave_node(&mut self, _node: &mut N) -> VisitResult<LeaveAction<N>> {
        Ok(LeaveAction::Keep)
    }

    /// Called once with the structurally final forest.
    #[inline]
    fn after_traverse(&mut self, _forest: &[Slot<N>]) -> VisitResult<ForestAction<N>> {
        Ok(ForestAction::Keep)
    }
}
