//! Hook results.
//!
//! Each hook answers with its own tagged action, so a hook can only request
//! the edits that make sense at that point of the traversal.

use std::fmt;

use crate::Forest;

/// Result of [`NodeVisitor::enter_node`](super::NodeVisitor::enter_node).
#[derive(Debug, Clone, PartialEq)]
pub enum EnterAction<N> {
    /// Keep the node as it is.
    Keep,
    /// Put this node in place of the entered one; later visitors see it.
    Replace(N),
    /// Do not descend into the node's child slots. The node is still left.
    SkipChildren,
}

/// Result of [`NodeVisitor::leave_node`](super::NodeVisitor::leave_node).
#[derive(Debug, Clone, PartialEq)]
pub enum LeaveAction<N> {
    /// Keep the node as it is.
    Keep,
    /// Put this node in place of the left one; later visitors see it.
    Replace(N),
    /// Delete the node from its enclosing list.
    Remove,
    /// Substitute these nodes, in order, for the node in its enclosing list.
    ///
    /// Spliced nodes are not entered or left by the running traversal.
    Splice(Vec<N>),
}

/// Result of the whole-forest hooks.
#[derive(Debug, Clone, PartialEq)]
pub enum ForestAction<N> {
    /// Keep the forest as it is.
    Keep,
    /// Use this forest instead; later visitors see it.
    Replace(Forest<N>),
}

impl<N> Default for EnterAction<N> {
    fn default() -> Self {
        EnterAction::Keep
    }
}

impl<N> Default for LeaveAction<N> {
    fn default() -> Self {
        LeaveAction::Keep
    }
}

impl<N> Default for ForestAction<N> {
    fn default() -> Self {
        ForestAction::Keep
    }
}

impl<N> EnterAction<N> {
    /// Short action name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            EnterAction::Keep => "keep",
            EnterAction::Replace(_) => "replace",
            EnterAction::SkipChildren => "skip-children",
        }
    }
}

impl<N> LeaveAction<N> {
    /// Short action name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            LeaveAction::Keep => "keep",
            LeaveAction::Replace(_) => "replace",
            LeaveAction::Remove => "remove",
            LeaveAction::Splice(_) => "splice",
        }
    }

    /// Returns true for actions that only make sense inside a list.
    pub const fn needs_list(&self) -> bool {
        matches!(self, LeaveAction::Remove | LeaveAction::Splice(_))
    }
}

/// Identifies a visitor hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    BeforeTraverse,
    EnterNode,
    LeaveNode,
    AfterTraverse,
}

impl Hook {
    /// Snake-case hook name, matching the trait method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Hook::BeforeTraverse => "before_traverse",
            Hook::EnterNode => "enter_node",
            Hook::LeaveNode => "leave_node",
            Hook::AfterTraverse => "after_traverse",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
