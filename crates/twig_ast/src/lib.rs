//! # twig_ast
//!
//! Tree contracts for the twig rewriting engine.
//!
//! This crate defines what the traversal engine needs from a syntax tree and
//! from the passes that rewrite it, without prescribing any node catalogue.
//!
//! ## Architecture
//!
//! - [`Node`] exposes an ordered list of child [`Slot`]s, mutable by index
//! - A [`Slot`] holds a single node, a nested sequence, or an opaque [`Leaf`]
//! - [`NodeVisitor`] is the four-hook pass contract, answering with tagged actions
//! - [`SyntaxNode`] is a dynamic, catalogue-free node for tools and tests
//!
//! ## Example
//!
//! ```rust
//! use twig_ast::{Node, Slot, SyntaxNode};
//!
//! let echo = SyntaxNode::new("Echo").with_list(
//!     "exprs",
//!     [
//!         SyntaxNode::new("String").with_leaf("value", "Foo"),
//!         SyntaxNode::new("String").with_leaf("value", "Bar"),
//!     ],
//! );
//!
//! assert_eq!(echo.slot_count(), 1);
//! assert!(matches!(echo.slot(0), Some(Slot::List(items)) if items.len() == 2));
//! ```

mod leaf;
mod node;
mod slot;
mod syntax_node;
pub mod visitor;

pub use leaf::Leaf;
pub use node::{Kinded, Node};
pub use slot::{Forest, Slot};
pub use syntax_node::{Field, SyntaxNode};

// Re-export commonly used visitor items for convenience
pub use visitor::{
    EnterAction, ForestAction, Hook, LeaveAction, NodeVisitor, VisitError, VisitResult,
};
