use ahash::AHashSet;

/// How an edge came to exist in the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// The step's unconditional `NextStepId` transition.
    Direct,
    /// One entry of the step's `SelectNextStep` mapping.
    Conditional,
}

/// A single registered step, ready for display decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub id: String,
    /// Multi-line display label derived from the step name.
    pub label: String,
    /// Step type with assembly qualifier and namespace path stripped.
    pub normalized_type: String,
}

/// A resolved transition between two registered steps.
///
/// `label` is empty for [`EdgeKind::Direct`] edges and carries the opaque
/// condition expression for [`EdgeKind::Conditional`] ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub label: String,
}

/// The derived workflow graph. Immutable once built.
///
/// `nodes` holds one entry per step in document order — a step is never
/// withheld, even if unreachable or disconnected. Every edge endpoint is
/// guaranteed to be a member of `nodes`; transitions that would violate that
/// are dropped and reported through [`Diagnostics`] instead.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl WorkflowGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Non-fatal integrity findings accumulated during edge resolution.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    /// Step ids referenced as a `NextStepId` or `SelectNextStep` target that
    /// do not correspond to any registered step.
    pub missing_references: AHashSet<String>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.missing_references.is_empty()
    }
}
