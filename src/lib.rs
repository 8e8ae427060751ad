//! # Keiro - Workflow DSL Graph Analysis Engine
//!
//! **Keiro** ingests JSON-encoded workflow definitions — directed graphs of
//! typed steps connected by unconditional and conditional transitions — and
//! produces a validated, render-ready graph model together with integrity
//! diagnostics for dangling step references.
//!
//! ## Core Workflow
//!
//! The engine is renderer-agnostic. It builds a canonical graph model and
//! decorates it with display attributes; drawing the result is left to an
//! external rendering collaborator. The primary workflow is:
//!
//! 1.  **Load**: Parse the workflow bytes into a [`dsl::WorkflowDocument`].
//!     Malformed JSON and missing required fields abort here; nothing else does.
//! 2.  **Build**: Use [`graph::GraphBuilder`] to construct the graph in two
//!     phases — every step is registered as a node before any transition is
//!     resolved into an edge, so forward references resolve like any other.
//!     Transitions naming a step that does not exist are excluded from the
//!     edge set and reported through [`graph::Diagnostics`].
//! 3.  **Decorate**: Use [`render::RenderModel`] to attach colors, shapes and
//!     edge styles keyed by normalized step type, and hand the result to your
//!     renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let workflow_json = r#"{
//!         "Id": "order-flow",
//!         "Version": 3,
//!         "ReleaseVersion": "1.4.0",
//!         "DataType": "Order",
//!         "Steps": [
//!             {
//!                 "Id": "check",
//!                 "Name": "Check Stock - Warehouse",
//!                 "StepType": "Flows.Steps.ApiCallerStep, Flows.Runtime",
//!                 "NextStepId": "decide"
//!             },
//!             {
//!                 "Id": "decide",
//!                 "Name": "Decide - Availability",
//!                 "StepType": "Flows.Steps.DecideStep, Flows.Runtime",
//!                 "SelectNextStep": { "notify": "ctx.InStock == false" }
//!             },
//!             {
//!                 "Id": "notify",
//!                 "Name": "Notify - Customer",
//!                 "StepType": "Flows.Steps.MessageSenderStep, Flows.Runtime"
//!             }
//!         ]
//!     }"#;
//!
//!     let document = WorkflowDocument::from_json(workflow_json)?;
//!     let (graph, diagnostics) = GraphBuilder::new(&document)?.build();
//!
//!     assert_eq!(graph.node_count(), 3);
//!     assert_eq!(graph.edge_count(), 2);
//!     assert!(diagnostics.is_clean());
//!
//!     let model = RenderModel::decorate(&graph, &StylePalette::default());
//!     println!("{}", model.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod dsl;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod render;
