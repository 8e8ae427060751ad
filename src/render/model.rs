use super::style::StylePalette;
use crate::graph::{EdgeKind, WorkflowGraph};
use serde::Serialize;

/// Line style of a rendered edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

/// A node decorated for the external renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    pub color: String,
    pub shape: String,
    /// Hover tooltip; carries the step id.
    pub title: String,
}

/// An edge decorated for the external renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
    /// Stroke color; `None` leaves the renderer's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Hover tooltip; the condition expression on conditional edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub width: u32,
}

/// The render-ready graph handed to the external rendering collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderModel {
    /// Decorates a built graph with display attributes.
    ///
    /// Pure decoration: node and edge membership is taken from the graph
    /// unchanged. Direct edges keep the renderer's default stroke; conditional
    /// edges are dashed, tinted, and carry their condition as a tooltip.
    pub fn decorate(graph: &WorkflowGraph, palette: &StylePalette) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| RenderNode {
                id: node.id.clone(),
                label: node.label.clone(),
                color: palette.color_for(&node.normalized_type).to_string(),
                shape: palette.node_shape().to_string(),
                title: node.id.clone(),
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .map(|edge| match edge.kind {
                EdgeKind::Direct => RenderEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    style: EdgeStyle::Solid,
                    color: None,
                    tooltip: None,
                    width: 2,
                },
                EdgeKind::Conditional => RenderEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    style: EdgeStyle::Dashed,
                    color: Some(palette.conditional_edge_color().to_string()),
                    tooltip: Some(edge.label.clone()),
                    width: 2,
                },
            })
            .collect();

        Self { nodes, edges }
    }

    /// Serializes the model to the JSON shape consumed by the renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
