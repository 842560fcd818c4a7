//! SyntaxNode definition.
//!
//! A dynamic node with a kind name and named, ordered fields. It carries no
//! language catalogue: any front-end can build its trees out of it, and the
//! `twig` CLI reads and writes it as JSON.

use serde::{Deserialize, Serialize};

use crate::{Kinded, Leaf, Node, Slot};

/// A named child slot of a [`SyntaxNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    /// Field name, unique within its node by convention.
    pub name: String,

    /// The slot value.
    pub value: Slot<SyntaxNode>,
}

/// A dynamic syntax node.
///
/// # JSON shape
///
/// ```json
/// {
///   "kind": "Echo",
///   "fields": [
///     { "name": "exprs", "value": [ { "kind": "String", "fields": [ { "name": "value", "value": "Foo" } ] } ] }
///   ]
/// }
/// ```
///
/// An object slot value is a single node, an array is a list, and any scalar
/// is a leaf.
///
/// # Example
///
/// ```rust
/// use twig_ast::{Kinded, Leaf, SyntaxNode};
///
/// let call = SyntaxNode::new("FuncCall")
///     .with_node("name", SyntaxNode::new("Name").with_leaf("value", "test"))
///     .with_list("args", [SyntaxNode::new("Arg")]);
///
/// assert_eq!(call.kind(), "FuncCall");
/// assert_eq!(
///     call.field("name").and_then(|slot| slot.as_node()).and_then(|n| n.leaf("value")),
///     Some(&Leaf::from("test")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntaxNode {
    /// Node kind.
    pub kind: String,

    /// Named child slots in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl SyntaxNode {
    /// Creates a node without fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field holding an arbitrary slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: Slot<SyntaxNode>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
        self
    }

    /// Appends a single-node field.
    pub fn with_node(self, name: impl Into<String>, node: SyntaxNode) -> Self {
        self.with_slot(name, Slot::node(node))
    }

    /// Appends a list field.
    pub fn with_list<I>(self, name: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.with_slot(name, Slot::list(nodes))
    }

    /// Appends a leaf field.
    pub fn with_leaf(self, name: impl Into<String>, value: impl Into<Leaf>) -> Self {
        self.with_slot(name, Slot::leaf(value))
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Slot<SyntaxNode>> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Looks up a field by name for mutation.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Slot<SyntaxNode>> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .map(|field| &mut field.value)
    }

    /// Returns the leaf value of a field, if it is a leaf.
    pub fn leaf(&self, name: &str) -> Option<&Leaf> {
        self.field(name).and_then(Slot::as_leaf)
    }

    /// Field names in slot order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl Node for SyntaxNode {
    #[inline]
    fn slot_count(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> Option<&Slot<Self>> {
        self.fields.get(index).map(|field| &field.value)
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<Self>> {
        self.fields.get_mut(index).map(|field| &mut field.value)
    }
}

impl Kinded for SyntaxNode {
    #[inline]
    fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    fn set_kind(&mut self, kind: String) {
        self.kind = kind;
    }
}
