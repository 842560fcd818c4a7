//! The node capability required by the traversal engine.

use crate::Slot;

/// A tree node as seen by the traversal engine.
///
/// The engine knows nothing about node kinds. It only needs a fixed, ordered
/// list of child slots and a way to swap a slot's value by index. The set and
/// order of slots must not change for the lifetime of a node except through
/// [`Node::set_slot`] or [`Node::slot_mut`].
///
/// # Example
///
/// ```rust
/// use twig_ast::{Node, Slot};
///
/// /// A binary operation with two child slots.
/// #[derive(Debug, PartialEq)]
/// struct BinOp {
///     slots: [Slot<BinOp>; 2],
/// }
///
/// impl Node for BinOp {
///     fn slot_count(&self) -> usize {
///         self.slots.len()
///     }
///
///     fn slot(&self, index: usize) -> Option<&Slot<Self>> {
///         self.slots.get(index)
///     }
///
///     fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<Self>> {
///         self.slots.get_mut(index)
///     }
/// }
///
/// let mut op = BinOp { slots: [Slot::leaf(1_i64), Slot::leaf(2_i64)] };
/// let previous = op.set_slot(1, Slot::leaf(3_i64));
/// assert_eq!(previous, Some(Slot::leaf(2_i64)));
/// assert_eq!(op.child_slots().count(), 2);
/// ```
pub trait Node: Sized {
    /// Number of child slots.
    fn slot_count(&self) -> usize;

    /// Returns the slot at `index`.
    fn slot(&self, index: usize) -> Option<&Slot<Self>>;

    /// Returns the slot at `index` for in-place mutation.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<Self>>;

    /// Iterates over the child slots in order.
    fn child_slots(&self) -> impl Iterator<Item = &Slot<Self>> {
        (0..self.slot_count()).filter_map(move |index| self.slot(index))
    }

    /// Replaces the slot at `index`, returning the previous value.
    ///
    /// Returns `None` and leaves the node untouched when `index` is out of range.
    fn set_slot(&mut self, index: usize, slot: Slot<Self>) -> Option<Slot<Self>> {
        self.slot_mut(index).map(|current| std::mem::replace(current, slot))
    }
}

/// A node that carries a kind name.
///
/// Stock passes that select nodes by kind work on any node implementing this.
pub trait Kinded {
    /// The node's kind, e.g. `"Echo"` or `"FuncCall"`.
    fn kind(&self) -> &str;

    /// Renames the node's kind in place.
    fn set_kind(&mut self, kind: String);
}
