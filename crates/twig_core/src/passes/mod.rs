//! Stock passes.
//!
//! Small, reusable visitors for trees whose nodes carry a kind name. They are
//! ordinary [`NodeVisitor`](twig_ast::NodeVisitor) implementations and chain
//! with user passes like any other visitor.
//!
//! - [`NodeCollector`] - Records enter/leave events
//! - [`KindCounter`] - Counts nodes per kind
//! - [`RemoveKind`] - Removes nodes of a kind from their lists
//! - [`RenameKind`] - Renames a kind in place
//! - [`UnwrapKind`] - Replaces nodes of a kind with their child nodes
//! - [`FnVisitor`] - Closure-backed visitor for ad hoc passes

mod closure;
mod collector;
mod counter;
mod kind;

pub use closure::FnVisitor;
pub use collector::{NodeCollector, TraceEvent};
pub use counter::KindCounter;
pub use kind::{RemoveKind, RenameKind, UnwrapKind};
