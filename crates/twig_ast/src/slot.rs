//! Child slots and forests.

use serde::{Deserialize, Serialize};

use crate::{Leaf, Node};

/// The top-level sequence of a traversal; a list slot without a parent.
pub type Forest<N> = Vec<Slot<N>>;

/// A positioned child reference of a node.
///
/// A slot holds exactly one node, a nested sequence of slots, or an opaque
/// leaf value. Sequences may nest to any depth; the engine descends through
/// them transparently.
///
/// The default slot is a null leaf. The engine uses it as the placeholder
/// while it owns a slot's previous value, so it is never observed by visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot<N> {
    // Untagged variants are tried in order; `List` comes first so a JSON
    // array never deserializes as a node struct.
    /// A nested sequence.
    List(Vec<Slot<N>>),
    /// A single child node.
    Single(Box<N>),
    /// A non-traversable value.
    Leaf(Leaf),
}

impl<N> Default for Slot<N> {
    fn default() -> Self {
        Slot::Leaf(Leaf::Null)
    }
}

impl<N> Slot<N> {
    /// Creates a single-node slot.
    #[inline]
    pub fn node(node: N) -> Self {
        Slot::Single(Box::new(node))
    }

    /// Creates a list slot holding each node as a single-node entry.
    pub fn list<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Slot::List(nodes.into_iter().map(Slot::node).collect())
    }

    /// Creates a leaf slot.
    #[inline]
    pub fn leaf(value: impl Into<Leaf>) -> Self {
        Slot::Leaf(value.into())
    }

    /// Returns the node held by a single-node slot.
    #[inline]
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Slot::Single(node) => Some(node),
            _ => None,
        }
    }

    /// Mutable variant of [`Slot::as_node`].
    #[inline]
    pub fn as_node_mut(&mut self) -> Option<&mut N> {
        match self {
            Slot::Single(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the entries of a list slot.
    #[inline]
    pub fn as_list(&self) -> Option<&[Slot<N>]> {
        match self {
            Slot::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the leaf value of a leaf slot.
    #[inline]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Slot::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Consumes a single-node slot and returns its node.
    pub fn into_node(self) -> Option<N> {
        match self {
            Slot::Single(node) => Some(*node),
            _ => None,
        }
    }

    /// Flattens the slot into the nodes it directly holds, in order.
    ///
    /// Nested sequences are flattened; leaves are dropped. Descendants of the
    /// returned nodes stay attached to them.
    pub fn into_nodes(self) -> Vec<N> {
        let mut nodes = Vec::new();
        self.collect_nodes(&mut nodes);
        nodes
    }

    fn collect_nodes(self, out: &mut Vec<N>) {
        match self {
            Slot::Single(node) => out.push(*node),
            Slot::List(items) => {
                for item in items {
                    item.collect_nodes(out);
                }
            }
            Slot::Leaf(_) => {}
        }
    }
}

impl<N: Node> Slot<N> {
    /// Counts every node reachable from this slot, descendants included.
    pub fn node_count(&self) -> usize {
        match self {
            Slot::Single(node) => 1 + node.child_slots().map(Slot::node_count).sum::<usize>(),
            Slot::List(items) => items.iter().map(Slot::node_count).sum(),
            Slot::Leaf(_) => 0,
        }
    }
}
