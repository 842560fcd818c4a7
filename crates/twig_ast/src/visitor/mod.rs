//! Visitor contract for tree rewriting passes.
//!
//! This module provides the hooks a pass implements and the actions it can
//! answer with. The traversal engine itself lives in `twig_core`.
//!
//! # Overview
//!
//! - [`NodeVisitor`] - The four-hook pass trait; every hook defaults to "keep"
//! - [`EnterAction`] - What `enter_node` may request
//! - [`LeaveAction`] - What `leave_node` may request
//! - [`ForestAction`] - What `before_traverse` / `after_traverse` may request
//! - [`Hook`] - Names a hook, for diagnostics
//!
//! # Examples
//!
//! ## Editing Leaves in Place
//!
//! ```rust
//! use twig_ast::{Leaf, SyntaxNode, Slot};
//! use twig_ast::visitor::{EnterAction, NodeVisitor, VisitResult};
//!
//! struct Uppercase;
//!
//! impl NodeVisitor<SyntaxNode> for Uppercase {
//!     fn enter_node(&mut self, node: &mut SyntaxNode) -> VisitResult<EnterAction<SyntaxNode>> {
//!         if let Some(Slot::Leaf(Leaf::Str(text))) = node.field_mut("value") {
//!             *text = text.to_uppercase();
//!         }
//!         Ok(EnterAction::Keep)
//!     }
//! }
//! ```
//!
//! ## Dropping a Subtree
//!
//! ```rust
//! use twig_ast::{Kinded, SyntaxNode};
//! use twig_ast::visitor::{EnterAction, LeaveAction, NodeVisitor, VisitResult};
//!
//! struct DropComments;
//!
//! impl NodeVisitor<SyntaxNode> for DropComments {
//!     fn enter_node(&mut self, node: &mut SyntaxNode) -> VisitResult<EnterAction<SyntaxNode>> {
//!         if node.kind() == "Comment" {
//!             return Ok(EnterAction::SkipChildren);
//!         }
//!         Ok(EnterAction::Keep)
//!     }
//!
//!     fn leave_node(&mut self, node: &mut SyntaxNode) -> VisitResult<LeaveAction<SyntaxNode>> {
//!         if node.kind() == "Comment" {
//!             return Ok(LeaveAction::Remove);
//!         }
//!         Ok(LeaveAction::Keep)
//!     }
//! }
//! ```

mod action;
mod visit;

pub use action::{EnterAction, ForestAction, Hook, LeaveAction};
pub use visit::{NodeVisitor, VisitError, VisitResult};
