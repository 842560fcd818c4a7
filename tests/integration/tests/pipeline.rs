//! End-to-end rewriting scenarios
//!
//! Forests are loaded from JSON, run through chains of passes and compared
//! against the JSON they should produce.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use twig_ast::{
    EnterAction, Forest, ForestAction, Kinded, LeaveAction, NodeVisitor, Slot, SyntaxNode,
    VisitResult,
};
use twig_core::passes::{FnVisitor, KindCounter, NodeCollector, RemoveKind, RenameKind, UnwrapKind};
use twig_core::{NodeTraverser, TraverseError, TraverserConfig};

fn program() -> Forest<SyntaxNode> {
    serde_json::from_value(json!([
        {
            "kind": "Echo",
            "fields": [
                { "name": "exprs", "value": [
                    { "kind": "String", "fields": [{ "name": "value", "value": "foo" }] },
                    { "kind": "Comment" }
                ]}
            ]
        },
        { "kind": "Comment" },
        {
            "kind": "If",
            "fields": [
                { "name": "cond", "value": { "kind": "Variable", "fields": [{ "name": "name", "value": "a" }] } },
                { "name": "stmts", "value": [
                    { "kind": "Block", "fields": [
                        { "name": "stmts", "value": [
                            { "kind": "Echo", "fields": [{ "name": "exprs", "value": [] }] },
                            { "kind": "Comment" }
                        ]}
                    ]}
                ]}
            ]
        }
    ]))
    .unwrap()
}

fn to_json(forest: &Forest<SyntaxNode>) -> Value {
    serde_json::to_value(forest).unwrap()
}

/// Wraps the whole forest in a single `Program` node after traversal.
#[derive(Default)]
struct WrapProgram;

impl NodeVisitor<SyntaxNode> for WrapProgram {
    fn after_traverse(
        &mut self,
        forest: &[Slot<SyntaxNode>],
    ) -> VisitResult<ForestAction<SyntaxNode>> {
        let program = SyntaxNode::new("Program").with_slot("body", Slot::List(forest.to_vec()));
        Ok(ForestAction::Replace(vec![Slot::node(program)]))
    }
}

/// Drops top-level comments before any node is visited.
#[derive(Default)]
struct StripLeadingComments {
    dropped: usize,
}

impl NodeVisitor<SyntaxNode> for StripLeadingComments {
    fn before_traverse(
        &mut self,
        forest: &[Slot<SyntaxNode>],
    ) -> VisitResult<ForestAction<SyntaxNode>> {
        let kept: Forest<SyntaxNode> = forest
            .iter()
            .filter(|slot| !matches!(slot.as_node(), Some(node) if node.kind() == "Comment"))
            .cloned()
            .collect();
        self.dropped = forest.len() - kept.len();
        Ok(ForestAction::Replace(kept))
    }
}

#[test]
fn traversal_without_visitors_preserves_literals() {
    let input = json!([
        { "kind": "Lit", "fields": [{ "name": "value", "value": u64::MAX }] },
        { "kind": "Lit", "fields": [{ "name": "value", "value": i64::MIN }] },
        { "kind": "Lit", "fields": [{ "name": "value", "value": 0.25 }] },
        { "kind": "Lit", "fields": [{ "name": "value", "value": null }] }
    ]);
    let forest: Forest<SyntaxNode> = serde_json::from_value(input.clone()).unwrap();

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    let result = traverser.traverse(forest).unwrap();

    assert_eq!(to_json(&result), input);
}

#[test]
fn cleanup_pipeline_rewrites_program() {
    let mut strip = RemoveKind::new("Comment");
    let mut flatten = UnwrapKind::new("Block");
    let mut rename = RenameKind::new("Echo", "Print");

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut strip);
    traverser.add_visitor(&mut flatten);
    traverser.add_visitor(&mut rename);
    let result = traverser.traverse(program()).unwrap();
    drop(traverser);

    assert_eq!(
        to_json(&result),
        json!([
            {
                "kind": "Print",
                "fields": [
                    { "name": "exprs", "value": [
                        { "kind": "String", "fields": [{ "name": "value", "value": "foo" }] }
                    ]}
                ]
            },
            {
                "kind": "If",
                "fields": [
                    { "name": "cond", "value": { "kind": "Variable", "fields": [{ "name": "name", "value": "a" }] } },
                    { "name": "stmts", "value": [
                        { "kind": "Print", "fields": [{ "name": "exprs", "value": [] }] }
                    ]}
                ]
            }
        ])
    );
    assert_eq!(strip.removed(), 3);
    assert_eq!(flatten.unwrapped(), 1);
    assert_eq!(rename.renamed(), 2);
}

#[test]
fn forest_hooks_run_around_node_hooks() {
    let mut strip = StripLeadingComments::default();
    let mut counter = KindCounter::new();
    let mut wrap = WrapProgram;

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut strip);
    traverser.add_visitor(&mut counter);
    traverser.add_visitor(&mut wrap);
    let result = traverser.traverse(program()).unwrap();
    drop(traverser);

    // The top-level comment is gone before any node is entered.
    assert_eq!(strip.dropped, 1);
    assert_eq!(counter.get("Comment"), 2);
    assert_eq!(counter.get("Program"), 0);

    assert_eq!(result.len(), 1);
    let program = result[0].as_node().unwrap();
    assert_eq!(program.kind(), "Program");
    assert_eq!(program.field("body").and_then(Slot::as_list).map(|items| items.len()), Some(2));
}

#[test]
fn trace_of_a_small_program() {
    let forest: Forest<SyntaxNode> = serde_json::from_value(json!([
        { "kind": "Echo", "fields": [{ "name": "exprs", "value": [{ "kind": "String" }] }] },
        { "kind": "Nop" }
    ]))
    .unwrap();

    let mut collector = NodeCollector::new();
    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut collector);
    traverser.traverse(forest).unwrap();
    drop(traverser);

    let trace: Vec<String> = collector.events().iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(trace.join("\n"), @r"
    enter_node Echo
      enter_node String
      leave_node String
    leave_node Echo
    enter_node Nop
    leave_node Nop
    ");
}

#[test]
fn visitors_can_be_removed_between_traversals() {
    let mut strip = RemoveKind::new("Comment");
    let mut counter = KindCounter::new();

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    let strip_id = traverser.add_visitor(&mut strip);
    traverser.add_visitor(&mut counter);

    let first = traverser.traverse(program()).unwrap();
    assert!(traverser.remove_visitor(strip_id));
    let second = traverser.traverse(program()).unwrap();
    drop(traverser);

    assert_eq!(first.len(), 2);
    assert_eq!(second, program());
    // Removal happens on leave, so the counter entered every comment in both
    // runs.
    assert_eq!(counter.get("Comment"), 6);
}

#[test]
fn failed_cloned_traversal_leaves_input_intact() {
    let forest = program();
    let mut rename = RenameKind::new("Echo", "Print");
    let mut refuse = FnVisitor::new().on_enter(|node: &mut SyntaxNode| {
        if node.kind() == "Variable" {
            return Err("variables are not supported".into());
        }
        Ok(EnterAction::Keep)
    });

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut rename);
    let refuse_id = traverser.add_visitor(&mut refuse);
    let err = traverser.traverse_cloned(&forest).unwrap_err();
    drop(traverser);

    assert_eq!(err.visitor_id(), Some(refuse_id));
    assert!(err.to_string().contains("variables are not supported"));
    assert_eq!(forest, program());
}

#[rstest]
#[case::unlimited(r#"{}"#, true)]
#[case::deep_enough(r#"{ "maxDepth": 4 }"#, true)]
#[case::too_shallow(r#"{ "maxDepth": 3 }"#, false)]
fn depth_limit_from_config(#[case] json: &str, #[case] succeeds: bool) {
    // If at depth 1, Block at 2, Echo at 3, String at 4.
    let forest: Forest<SyntaxNode> = serde_json::from_value(json!([
        { "kind": "If", "fields": [{ "name": "stmts", "value": [
            { "kind": "Block", "fields": [{ "name": "stmts", "value": [
                { "kind": "Echo", "fields": [{ "name": "exprs", "value": [{ "kind": "String" }] }] }
            ]}]}
        ]}]}
    ]))
    .unwrap();

    let config = TraverserConfig::from_json(json).unwrap();
    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::with_config(config);
    let result = traverser.traverse(forest);

    match result {
        Ok(_) => assert!(succeeds),
        Err(TraverseError::DepthLimitExceeded { limit }) => {
            assert!(!succeeds);
            assert_eq!(limit, 3);
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
}

#[test]
fn replacing_on_leave_feeds_later_visitors() {
    // Each echo becomes a print; the counter registered after the rewrite
    // sees the replacement on leave, the collector before it never does.
    let mut collector = NodeCollector::new();
    let mut rewrite = FnVisitor::new().on_leave(|node: &mut SyntaxNode| {
        if node.kind() == "Echo" {
            let mut print = SyntaxNode::new("Print");
            if let Some(exprs) = node.field_mut("exprs") {
                print = print.with_slot("exprs", std::mem::take(exprs));
            }
            return Ok(LeaveAction::Replace(print));
        }
        Ok(LeaveAction::Keep)
    });
    let mut after = FnVisitor::new().on_leave(|node: &mut SyntaxNode| {
        assert_ne!(node.kind(), "Echo");
        Ok(LeaveAction::Keep)
    });

    let mut traverser: NodeTraverser<'_, SyntaxNode> = NodeTraverser::new();
    traverser.add_visitor(&mut collector);
    traverser.add_visitor(&mut rewrite);
    traverser.add_visitor(&mut after);
    let result = traverser.traverse(program()).unwrap();
    drop(traverser);

    assert_eq!(result[0].as_node().map(|node| node.kind()), Some("Print"));
    assert_eq!(
        collector
            .events()
            .iter()
            .filter(|e| e.kind == "Print")
            .count(),
        0
    );
}
