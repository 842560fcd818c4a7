//! The traversal engine.
//!
//! [`NodeTraverser`] walks a forest depth-first and runs every registered
//! visitor at each hook event:
//!
//! 1. `before_traverse` over the whole forest
//! 2. for each node in document order: `enter_node`, the node's child slots
//!    (unless skipped), then `leave_node`
//! 3. `after_traverse` over the final forest
//!
//! For a single event, visitors run in registration order and each one sees
//! what the previous one committed. Nested lists are descended transparently
//! and leaves are never visited.

use std::fmt;

use tracing::{debug, debug_span, trace};
use twig_ast::{
    EnterAction, Forest, ForestAction, Hook, LeaveAction, Node, NodeVisitor, Slot, VisitResult,
};

use crate::{TraverseError, TraverserConfig};

/// Handle for a registered visitor.
///
/// Ids are unique per traverser and never reused, so removing a visitor
/// leaves a gap rather than renumbering the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitorId(u32);

impl VisitorId {
    /// Registration sequence number.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Registered<'v, N> {
    id: VisitorId,
    visitor: &'v mut dyn NodeVisitor<N>,
}

/// What the leave chain committed for one node.
enum Committed<N> {
    Node(Box<N>),
    /// The node left its slot through a list-only action; only the enclosing
    /// list can apply it.
    Detached(VisitorId, LeaveAction<N>),
}

/// Runs a chain of visitors over a forest and applies their edits.
///
/// The traverser borrows its visitors; drop it (or let it go out of scope)
/// to inspect their state after a traversal.
///
/// # Example
///
/// ```rust
/// use twig_ast::{Kinded, LeaveAction, NodeVisitor, Slot, SyntaxNode, VisitResult};
/// use twig_core::NodeTraverser;
///
/// struct DropNops;
///
/// impl NodeVisitor<SyntaxNode> for DropNops {
///     fn leave_node(&mut self, node: &mut SyntaxNode) -> VisitResult<LeaveAction<SyntaxNode>> {
///         if node.kind() == "Nop" {
///             return Ok(LeaveAction::Remove);
///         }
///         Ok(LeaveAction::Keep)
///     }
/// }
///
/// let forest = vec![
///     Slot::node(SyntaxNode::new("Nop")),
///     Slot::node(SyntaxNode::new("Echo")),
/// ];
///
/// let mut pass = DropNops;
/// let mut traverser = NodeTraverser::new();
/// traverser.add_visitor(&mut pass);
///
/// let result = traverser.traverse(forest).unwrap();
/// assert_eq!(result, vec![Slot::node(SyntaxNode::new("Echo"))]);
/// ```
pub struct NodeTraverser<'v, N> {
    visitors: Vec<Registered<'v, N>>,
    next_id: u32,
    config: TraverserConfig,
}

impl<N> Default for NodeTraverser<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for NodeTraverser<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeTraverser")
            .field("visitors", &self.visitor_ids().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<'v, N> NodeTraverser<'v, N> {
    /// Creates a traverser with no visitors and the default configuration.
    pub fn new() -> Self {
        Self::with_config(TraverserConfig::default())
    }

    /// Creates a traverser with no visitors.
    pub fn with_config(config: TraverserConfig) -> Self {
        Self {
            visitors: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TraverserConfig {
        &self.config
    }

    /// Appends a visitor to the chain.
    ///
    /// The same visitor type may be registered any number of times.
    pub fn add_visitor(&mut self, visitor: &'v mut dyn NodeVisitor<N>) -> VisitorId {
        let id = VisitorId(self.next_id);
        self.next_id += 1;
        self.visitors.push(Registered { id, visitor });
        debug!("Registered visitor {}", id);
        id
    }

    /// Removes a visitor from the chain, keeping the others in order.
    ///
    /// Returns false if the id is not registered; that is not an error.
    pub fn remove_visitor(&mut self, id: VisitorId) -> bool {
        match self.visitors.iter().position(|entry| entry.id == id) {
            Some(position) => {
                self.visitors.remove(position);
                debug!("Removed visitor {}", id);
                true
            }
            None => false,
        }
    }

    /// Registered visitor ids in chain order.
    pub fn visitor_ids(&self) -> impl Iterator<Item = VisitorId> + '_ {
        self.visitors.iter().map(|entry| entry.id)
    }

    /// Number of registered visitors.
    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }
}

impl<N: Node> NodeTraverser<'_, N> {
    /// Traverses a forest and returns the rewritten forest.
    ///
    /// The forest is consumed. If a visitor fails, the error is returned and
    /// the partially rewritten forest is dropped.
    pub fn traverse(&mut self, forest: Forest<N>) -> Result<Forest<N>, TraverseError> {
        let span = debug_span!("traverse", visitors = self.visitors.len());
        let _guard = span.enter();
        debug!("Traversing forest of {} entries", forest.len());

        let mut forest =
            self.run_forest_hook(Hook::BeforeTraverse, forest, |v, f| v.before_traverse(f))?;
        self.traverse_list(&mut forest, 1)?;
        let forest =
            self.run_forest_hook(Hook::AfterTraverse, forest, |v, f| v.after_traverse(f))?;

        debug!("Traversal finished with {} entries", forest.len());
        Ok(forest)
    }

    /// Traverses a copy of the forest, leaving the input untouched.
    pub fn traverse_cloned(&mut self, forest: &[Slot<N>]) -> Result<Forest<N>, TraverseError>
    where
        N: Clone,
    {
        self.traverse(forest.to_vec())
    }

    fn run_forest_hook<F>(
        &mut self,
        hook: Hook,
        mut forest: Forest<N>,
        mut call: F,
    ) -> Result<Forest<N>, TraverseError>
    where
        F: FnMut(&mut dyn NodeVisitor<N>, &[Slot<N>]) -> VisitResult<ForestAction<N>>,
    {
        for entry in self.visitors.iter_mut() {
            let action = call(&mut *entry.visitor, &forest)
                .map_err(|source| TraverseError::visitor(entry.id, hook, source))?;

            if let ForestAction::Replace(replacement) = action {
                trace!("Visitor {} replaced the forest in {}", entry.id, hook);
                forest = replacement;
            }
        }
        Ok(forest)
    }

    /// Rebuilds `list` in place; `depth` is the depth of the nodes it holds.
    fn traverse_list(&mut self, list: &mut Vec<Slot<N>>, depth: usize) -> Result<(), TraverseError> {
        let entries = std::mem::take(list);
        list.reserve(entries.len());

        for entry in entries {
            match entry {
                Slot::Single(node) => match self.traverse_node(node, depth)? {
                    Committed::Node(node) => list.push(Slot::Single(node)),
                    Committed::Detached(_, LeaveAction::Splice(nodes)) => {
                        list.extend(nodes.into_iter().map(Slot::node))
                    }
                    Committed::Detached(..) => {}
                },
                Slot::List(mut nested) => {
                    self.traverse_list(&mut nested, depth)?;
                    list.push(Slot::List(nested));
                }
                leaf @ Slot::Leaf(_) => list.push(leaf),
            }
        }
        Ok(())
    }

    fn traverse_node(&mut self, mut node: Box<N>, depth: usize) -> Result<Committed<N>, TraverseError> {
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            return Err(TraverseError::DepthLimitExceeded { limit });
        }

        let mut skip_children = false;
        for entry in self.visitors.iter_mut() {
            let action = entry
                .visitor
                .enter_node(&mut node)
                .map_err(|source| TraverseError::visitor(entry.id, Hook::EnterNode, source))?;

            match action {
                EnterAction::Keep => {}
                EnterAction::Replace(replacement) => {
                    trace!("Visitor {} replaced a node on enter", entry.id);
                    *node = replacement;
                }
                EnterAction::SkipChildren => {
                    trace!("Visitor {} skipped children", entry.id);
                    skip_children = true;
                }
            }
        }

        if !skip_children {
            self.traverse_children(&mut node, depth)?;
        }

        for entry in self.visitors.iter_mut() {
            let action = entry
                .visitor
                .leave_node(&mut node)
                .map_err(|source| TraverseError::visitor(entry.id, Hook::LeaveNode, source))?;

            // Remove and splice end the chain: there is no node left to hand on.
            match action {
                LeaveAction::Keep => {}
                LeaveAction::Replace(replacement) => {
                    trace!("Visitor {} replaced a node on leave", entry.id);
                    *node = replacement;
                }
                action => {
                    debug_assert!(action.needs_list());
                    trace!("Visitor {} detached a node ({})", entry.id, action.name());
                    return Ok(Committed::Detached(entry.id, action));
                }
            }
        }

        Ok(Committed::Node(node))
    }

    fn traverse_children(&mut self, node: &mut N, depth: usize) -> Result<(), TraverseError> {
        for index in 0..node.slot_count() {
            let Some(slot) = node.slot_mut(index) else {
                continue;
            };

            *slot = match std::mem::take(slot) {
                Slot::Single(child) => match self.traverse_node(child, depth + 1)? {
                    Committed::Node(child) => Slot::Single(child),
                    Committed::Detached(visitor, action) => {
                        return Err(TraverseError::invalid_action(
                            visitor,
                            Hook::LeaveNode,
                            action.name(),
                        ));
                    }
                },
                Slot::List(mut items) => {
                    self.traverse_list(&mut items, depth + 1)?;
                    Slot::List(items)
                }
                leaf => leaf,
            };
        }
        Ok(())
    }
}
