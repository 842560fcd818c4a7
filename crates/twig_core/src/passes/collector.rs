//! Event recording pass.

use std::fmt;

use twig_ast::{
    EnterAction, ForestAction, Hook, Kinded, LeaveAction, NodeVisitor, Slot, VisitResult,
};

/// A single recorded hook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    /// Either [`Hook::EnterNode`] or [`Hook::LeaveNode`].
    pub hook: Hook,
    /// Kind of the node as this visitor saw it.
    pub kind: String,
    /// Node nesting depth, starting at 1 for top-level nodes.
    pub depth: usize,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:indent$}{} {}",
            "",
            self.hook,
            self.kind,
            indent = (self.depth.saturating_sub(1)) * 2
        )
    }
}

/// Records the kind of every entered and left node.
///
/// Depth is tracked by counting enter and leave events. Register it ahead of
/// passes that remove or splice nodes: those end the leave chain, so a
/// collector behind them misses the leave event and every later event of
/// that traversal is recorded one level too deep. The count restarts at
/// `before_traverse`, so the drift never carries into the next traversal.
#[derive(Debug, Default)]
pub struct NodeCollector {
    events: Vec<TraceEvent>,
    depth: usize,
}

impl NodeCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in call order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumes the collector, returning its events.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Kinds of entered nodes, in document order.
    pub fn entered_kinds(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.hook == Hook::EnterNode)
            .map(|event| event.kind.as_str())
            .collect()
    }
}

impl<N: Kinded> NodeVisitor<N> for NodeCollector {
    fn before_traverse(&mut self, _forest: &[Slot<N>]) -> VisitResult<ForestAction<N>> {
        self.depth = 0;
        Ok(ForestAction::Keep)
    }

    fn enter_node(&mut self, node: &mut N) -> VisitResult<EnterAction<N>> {
        self.depth += 1;
        self.events.push(TraceEvent {
            hook: Hook::EnterNode,
            kind: node.kind().to_string(),
            depth: self.depth,
        });
        Ok(EnterAction::Keep)
    }

    fn leave_node(&mut self, node: &mut N) -> VisitResult<LeaveAction<N>> {
        self.events.push(TraceEvent {
            hook: Hook::LeaveNode,
            kind: node.kind().to_string(),
            depth: self.depth,
        });
        self.depth = self.depth.saturating_sub(1);
        Ok(LeaveAction::Keep)
    }
}
