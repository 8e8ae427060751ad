pub mod index;
pub mod view;

pub use index::StepIndex;
pub use view::{Diagnostics, EdgeKind, EdgeView, NodeView, WorkflowGraph};

use crate::dsl::WorkflowDocument;
use crate::error::SchemaError;
use ahash::AHashSet;

/// Strips a qualified step type down to its display form.
///
/// The DSL stores runtime type names such as
/// `"Flows.Steps.DecideStep, Flows.Runtime, Version=1.0"`: everything after
/// the first `','` is an assembly qualifier, and the namespace path before
/// the last `'.'` carries no display information. Both are discarded:
///
/// ```
/// use keiro::graph::normalize_step_type;
/// assert_eq!(normalize_step_type("Foo.Bar.BazStep, AssemblyX, Version=1.0"), "BazStep");
/// assert_eq!(normalize_step_type("DecideStep"), "DecideStep");
/// ```
pub fn normalize_step_type(step_type: &str) -> &str {
    let unqualified = step_type.split(',').next().unwrap_or(step_type);
    unqualified.rsplit('.').next().unwrap_or(unqualified)
}

/// Two-phase construction of a [`WorkflowGraph`] from a validated document.
///
/// Phase 1 registers every step as a node; phase 2 resolves each step's
/// direct and conditional successors into typed edges against the complete
/// node set. Targets that resolve to no node are excluded from the edge
/// sequence and accumulated into [`Diagnostics`].
pub struct GraphBuilder<'a> {
    document: &'a WorkflowDocument,
    index: StepIndex<'a>,
}

impl<'a> GraphBuilder<'a> {
    /// Indexes the document's steps. Fails on duplicate step ids.
    pub fn new(document: &'a WorkflowDocument) -> Result<Self, SchemaError> {
        let index = StepIndex::build(&document.steps)?;
        Ok(Self { document, index })
    }

    /// The step index backing edge resolution.
    pub fn index(&self) -> &StepIndex<'a> {
        &self.index
    }

    /// Builds the graph and its integrity diagnostics.
    ///
    /// Nodes are registered for every step before any edge is examined, so a
    /// successor defined later in the document resolves like any other; the
    /// phase ordering is a correctness requirement, not a convenience.
    /// Within the edge phase, steps are visited in document order and a
    /// step's direct edge precedes its conditional edges. Parallel edges
    /// between the same pair of steps are preserved verbatim.
    pub fn build(&self) -> (WorkflowGraph, Diagnostics) {
        let nodes = self.register_nodes();
        let (edges, missing_references) = self.resolve_edges();

        (
            WorkflowGraph { nodes, edges },
            Diagnostics { missing_references },
        )
    }

    fn register_nodes(&self) -> Vec<NodeView> {
        self.document
            .steps
            .iter()
            .map(|step| NodeView {
                id: step.id.clone(),
                label: step.display_label(),
                normalized_type: normalize_step_type(&step.step_type).to_string(),
            })
            .collect()
    }

    fn resolve_edges(&self) -> (Vec<EdgeView>, AHashSet<String>) {
        let mut edges = Vec::new();
        let mut missing = AHashSet::new();

        for step in &self.document.steps {
            if let Some(target) = step.next_step() {
                if self.index.contains(target) {
                    edges.push(EdgeView {
                        from: step.id.clone(),
                        to: target.to_string(),
                        kind: EdgeKind::Direct,
                        label: String::new(),
                    });
                } else {
                    missing.insert(target.to_string());
                }
            }

            for (target, condition) in step.conditional_transitions() {
                if self.index.contains(target) {
                    edges.push(EdgeView {
                        from: step.id.clone(),
                        to: target.to_string(),
                        kind: EdgeKind::Conditional,
                        label: condition.to_string(),
                    });
                } else {
                    missing.insert(target.to_string());
                }
            }
        }

        (edges, missing)
    }
}
