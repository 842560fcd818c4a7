//! # twig_core
//!
//! Visitor-driven traversal engine for mutable syntax trees.
//!
//! This crate provides:
//! - The [`NodeTraverser`] engine and its visitor registry
//! - Traversal configuration ([`TraverserConfig`])
//! - Stock passes for [`Kinded`](twig_ast::Kinded) nodes
//!
//! ## Example
//!
//! ```rust
//! use twig_ast::{Slot, SyntaxNode};
//! use twig_core::NodeTraverser;
//! use twig_core::passes::{KindCounter, RenameKind};
//!
//! let forest = vec![Slot::node(
//!     SyntaxNode::new("Echo").with_list("exprs", [SyntaxNode::new("String")]),
//! )];
//!
//! let mut rename = RenameKind::new("Echo", "Print");
//! let mut counter = KindCounter::new();
//!
//! let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
//! traverser.add_visitor(&mut rename);
//! traverser.add_visitor(&mut counter);
//! let forest = traverser.traverse(forest).unwrap();
//! drop(traverser);
//!
//! assert_eq!(counter.get("Print"), 1);
//! assert_eq!(counter.get("Echo"), 0);
//! assert_eq!(forest[0].as_node().map(|n| n.kind.as_str()), Some("Print"));
//! ```

mod config;
mod error;
pub mod passes;
mod traverser;

pub use config::TraverserConfig;
pub use error::{ConfigError, TraverseError};
pub use traverser::{NodeTraverser, VisitorId};

pub use twig_ast::{
    EnterAction, Forest, ForestAction, Hook, LeaveAction, Node, NodeVisitor, Slot, VisitError,
    VisitResult,
};
