//! Closure-backed visitor.

use std::fmt;

use twig_ast::{EnterAction, LeaveAction, NodeVisitor, VisitResult};

type EnterFn<'f, N> = Box<dyn FnMut(&mut N) -> VisitResult<EnterAction<N>> + 'f>;
type LeaveFn<'f, N> = Box<dyn FnMut(&mut N) -> VisitResult<LeaveAction<N>> + 'f>;

/// A visitor built from closures, for passes too small to deserve a type.
///
/// # Example
///
/// ```rust
/// use twig_ast::{Kinded, LeaveAction, Slot, SyntaxNode};
/// use twig_core::NodeTraverser;
/// use twig_core::passes::FnVisitor;
///
/// let mut seen = Vec::new();
/// let mut pass = FnVisitor::new()
///     .on_enter(|node: &mut SyntaxNode| {
///         seen.push(node.kind.clone());
///         Ok(Default::default())
///     })
///     .on_leave(|node: &mut SyntaxNode| {
///         Ok(if node.kind() == "Nop" { LeaveAction::Remove } else { LeaveAction::Keep })
///     });
///
/// let mut traverser = NodeTraverser::new();
/// traverser.add_visitor(&mut pass);
/// let result = traverser
///     .traverse(vec![Slot::node(SyntaxNode::new("Nop")), Slot::node(SyntaxNode::new("Echo"))])
///     .unwrap();
/// drop(traverser);
/// drop(pass);
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(seen, vec!["Nop", "Echo"]);
/// ```
pub struct FnVisitor<'f, N> {
    enter: Option<EnterFn<'f, N>>,
    leave: Option<LeaveFn<'f, N>>,
}

impl<N> Default for FnVisitor<'_, N> {
    fn default() -> Self {
        Self {
            enter: None,
            leave: None,
        }
    }
}

impl<N> fmt::Debug for FnVisitor<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnVisitor")
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .finish()
    }
}

impl<'f, N> FnVisitor<'f, N> {
    /// Creates a visitor that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `enter_node` closure.
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut N) -> VisitResult<EnterAction<N>> + 'f,
    {
        self.enter = Some(Box::new(f));
        self
    }

    /// Sets the `leave_node` closure.
    pub fn on_leave<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut N) -> VisitResult<LeaveAction<N>> + 'f,
    {
        self.leave = Some(Box::new(f));
        self
    }
}

impl<N> NodeVisitor<N> for FnVisitor<'_, N> {
    fn enter_node(&mut self, node: &mut N) -> VisitResult<EnterAction<N>> {
        match self.enter.as_mut() {
            Some(f) => f(node),
            None => Ok(EnterAction::Keep),
        }
    }

    fn leave_node(&mut self, node: &mut N) -> VisitResult<LeaveAction<N>> {
        match self.leave.as_mut() {
            Some(f) => f(node),
            None => Ok(LeaveAction::Keep),
        }
    }
}
