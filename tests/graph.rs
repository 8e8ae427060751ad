//! Tests for the step index, the two-phase graph builder, and integrity
//! diagnostics.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_linear_workflow_builds_direct_chain() {
    let document = linear_document();
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(diagnostics.is_clean());

    for edge in &graph.edges {
        assert_eq!(edge.kind, EdgeKind::Direct);
        assert!(edge.label.is_empty());
    }
    assert_eq!(graph.edges[0].from, "A");
    assert_eq!(graph.edges[0].to, "B");
    assert_eq!(graph.edges[1].from, "B");
    assert_eq!(graph.edges[1].to, "C");
}

#[test]
fn test_node_count_matches_step_count() {
    let document = linear_document();
    let (graph, _) = GraphBuilder::new(&document).unwrap().build();
    assert_eq!(graph.node_count(), document.steps.len());
}

#[test]
fn test_undefined_conditional_target_is_reported_without_edge() {
    let document = document(vec![with_branches(
        step("A", "Decide", "DecideStep"),
        &[("X", "ctx.Flag == true")],
    )]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(diagnostics.missing_references.len(), 1);
    assert!(diagnostics.missing_references.contains("X"));
}

#[test]
fn test_direct_edge_precedes_conditional_edges() {
    let document = document(vec![
        with_branches(
            step_to("A", "Decide", "DecideStep", "B"),
            &[("C", "expr")],
        ),
        step("B", "B", "ApiCallerStep"),
        step("C", "C", "MessageSenderStep"),
    ]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert!(diagnostics.is_clean());
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(graph.edges[0].from, "A");
    assert_eq!(graph.edges[0].to, "B");
    assert_eq!(graph.edges[0].kind, EdgeKind::Direct);

    assert_eq!(graph.edges[1].from, "A");
    assert_eq!(graph.edges[1].to, "C");
    assert_eq!(graph.edges[1].kind, EdgeKind::Conditional);
    assert_eq!(graph.edges[1].label, "expr");
}

#[test]
fn test_step_with_both_transition_kinds_produces_all_edges() {
    // 1 direct + k conditional edges when every target resolves.
    let document = document(vec![
        with_branches(
            step_to("A", "Decide", "DecideStep", "B"),
            &[("C", "e1"), ("D", "e2"), ("B", "e3")],
        ),
        step("B", "B", "T"),
        step("C", "C", "T"),
        step("D", "D", "T"),
    ]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert!(diagnostics.is_clean());
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_forward_reference_resolves() {
    // The successor is defined later in the document than the step that
    // names it; the node phase must complete before edge resolution.
    let document = document(vec![
        step_to("first", "First", "T", "last"),
        step("last", "Last", "T"),
    ]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert!(diagnostics.is_clean());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges[0].to, "last");
}

#[test]
fn test_dangling_next_step_id_is_reported_without_edge() {
    let document = document(vec![
        step_to("A", "A", "T", "missing"),
        step("B", "B", "T"),
    ]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(diagnostics.missing_references.contains("missing"));
}

#[test]
fn test_terminal_step_is_not_a_diagnostic() {
    let document = document(vec![step("A", "A", "T")]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.edge_count(), 0);
    assert!(diagnostics.is_clean());
}

#[test]
fn test_missing_references_never_contain_resolved_ids() {
    // "B" resolves from one step while "ghost" dangles from another.
    let document = document(vec![
        step_to("A", "A", "T", "B"),
        step_to("B", "B", "T", "ghost"),
    ]);
    let (_, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(diagnostics.missing_references.len(), 1);
    assert!(diagnostics.missing_references.contains("ghost"));
    assert!(!diagnostics.missing_references.contains("B"));
}

#[test]
fn test_shared_dangling_target_is_reported_once() {
    let document = document(vec![
        step_to("A", "A", "T", "X"),
        step_to("B", "B", "T", "X"),
    ]);
    let (_, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(diagnostics.missing_references.len(), 1);
}

#[test]
fn test_parallel_edges_are_preserved() {
    // A direct and a conditional transition to the same target are two edges.
    let document = document(vec![
        with_branches(step_to("A", "A", "T", "B"), &[("B", "expr")]),
        step("B", "B", "T"),
    ]);
    let (graph, _) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.edges.iter().all(|e| e.from == "A" && e.to == "B"));
}

#[test]
fn test_every_edge_endpoint_is_a_registered_node() {
    let document = document(vec![
        with_branches(
            step_to("A", "A", "T", "B"),
            &[("ghost", "e1"), ("C", "e2")],
        ),
        step_to("B", "B", "T", "phantom"),
        step("C", "C", "T"),
    ]);
    let (graph, diagnostics) = GraphBuilder::new(&document).unwrap().build();

    let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &graph.edges {
        assert!(node_ids.contains(&edge.from.as_str()));
        assert!(node_ids.contains(&edge.to.as_str()));
    }
    assert_eq!(diagnostics.missing_references.len(), 2);
}

#[test]
fn test_building_twice_yields_identical_sequences() {
    let document = document(vec![
        with_branches(
            step_to("A", "A", "T", "B"),
            &[("C", "e1"), ("B", "e2")],
        ),
        step_to("B", "B", "T", "C"),
        step("C", "C", "T"),
    ]);
    let builder = GraphBuilder::new(&document).unwrap();

    let (first, _) = builder.build();
    let (second, _) = builder.build();

    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);
}

#[test]
fn test_duplicate_step_id_is_a_schema_error() {
    let document = document(vec![
        step("S1", "First", "T"),
        step("S1", "Second", "T"),
    ]);

    match GraphBuilder::new(&document) {
        Err(SchemaError::DuplicateStepId(id)) => assert_eq!(id, "S1"),
        _ => panic!("Expected DuplicateStepId error"),
    }
}

#[test]
fn test_node_views_carry_normalized_type_and_label() {
    let document = document(vec![step(
        "A",
        "Check Stock - Warehouse",
        "Flows.Steps.ApiCallerStep, Flows.Runtime, Version=1.0",
    )]);
    let (graph, _) = GraphBuilder::new(&document).unwrap().build();

    assert_eq!(graph.nodes[0].normalized_type, "ApiCallerStep");
    assert_eq!(graph.nodes[0].label, "Check Stock\nWarehouse");
}

#[test]
fn test_step_index_lookups() {
    let document = linear_document();
    let index = StepIndex::build(&document.steps).unwrap();

    assert_eq!(index.len(), 3);
    assert!(index.contains("A"));
    assert!(!index.contains("Z"));
    assert_eq!(index.name_of("C"), Some("Notify - Customer"));
    assert_eq!(index.get("B").map(|s| s.id.as_str()), Some("B"));
    assert!(index.name_of("Z").is_none());
}
