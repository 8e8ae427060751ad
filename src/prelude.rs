//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the keiro crate. Import this
//! module to get access to the core pipeline without having to import each
//! type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let document = WorkflowDocument::from_json(&workflow_json)?;
//!
//! let (graph, diagnostics) = GraphBuilder::new(&document)?.build();
//! let model = RenderModel::decorate(&graph, &StylePalette::default());
//!
//! println!("{}", model.to_json()?);
//! if !diagnostics.is_clean() {
//!     eprintln!("dangling references: {:?}", diagnostics.missing_references);
//! }
//! # Ok(())
//! # }
//! ```

// Document model and loading
pub use crate::dsl::{Step, WorkflowDocument};

// Graph construction
pub use crate::graph::{
    Diagnostics, EdgeKind, EdgeView, GraphBuilder, NodeView, StepIndex, WorkflowGraph,
    normalize_step_type,
};

// Render decoration
pub use crate::render::{EdgeStyle, RenderEdge, RenderModel, RenderNode, StylePalette};

// Error types
pub use crate::error::{LoadError, ParseError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
