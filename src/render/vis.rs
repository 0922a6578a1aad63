//! vis-network schema
//!
//! Maps a [`CollaborationGraph`] to the `DataSet` node/edge objects and the
//! options object consumed by the vis-network library.

use super::palette::{Palette, HIGHLIGHT_COLOR};
use super::RenderOptions;
use crate::aggregate::Relation;
use crate::graph::{CollaborationGraph, Node, Role};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisFont {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisNode {
    pub id: String,
    pub label: String,
    /// Size scaling input, the aggregate weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Tooltip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<VisFont>,
    #[serde(skip)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisEdge {
    /// Position in the graph's edge list; names may contain any character
    pub id: usize,
    pub from: String,
    pub to: String,
    pub color: String,
    /// Number of shared movies
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisScaling {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisNodeOptions {
    pub scaling: VisScaling,
    pub font: VisFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisLayout {
    pub improved_layout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisOptions {
    pub nodes: VisNodeOptions,
    pub layout: VisLayout,
}

/// Everything the network component needs to draw one graph
#[derive(Debug, Clone, Serialize)]
pub struct VisNetwork {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
    pub options: VisOptions,
    #[serde(skip)]
    palette: Palette,
}

fn tooltip(node: &Node) -> String {
    format!("Audience (10M): {:.2}", node.display_weight())
}

impl VisNetwork {
    pub fn from_graph(graph: &CollaborationGraph, options: &RenderOptions) -> Self {
        let palette = Palette::for_relation(graph.relation());
        let weighted = graph.weighted();
        let font = VisFont { size: options.font_size };

        let nodes = graph
            .nodes()
            .map(|node| {
                let style = palette.node_style(node.role);
                VisNode {
                    id: node.id.to_string(),
                    label: node.label.clone(),
                    value: weighted.then_some(node.aggregate_weight),
                    color: style.color.to_string(),
                    shape: style.shape.map(str::to_string),
                    title: weighted.then(|| tooltip(node)),
                    font: weighted.then_some(font),
                    role: node.role,
                }
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(idx, edge)| VisEdge {
                id: idx,
                from: edge.a.to_string(),
                to: edge.b.to_string(),
                color: palette.edge.to_string(),
                value: edge.weight,
            })
            .collect();

        let improved_layout = options
            .improved_layout
            .unwrap_or(graph.relation() != Relation::ProducerMovie);

        VisNetwork {
            nodes,
            edges,
            options: VisOptions {
                nodes: VisNodeOptions {
                    scaling: VisScaling {
                        min: options.scaling_min,
                        max: options.scaling_max,
                    },
                    font,
                },
                layout: VisLayout { improved_layout },
            },
            palette,
        }
    }

    /// Restore the default colors
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.color = self.palette.node_style(node.role).color.to_string();
        }
        for edge in &mut self.edges {
            edge.color = self.palette.edge.to_string();
        }
    }

    /// Paint the neighborhood of the entity searched as `name`
    ///
    /// Returns `false` and leaves the styling untouched when nothing matches.
    pub fn highlight(&mut self, graph: &CollaborationGraph, name: &str) -> bool {
        let centers = graph.resolve(name);
        if centers.is_empty() {
            return false;
        }

        self.reset();

        let mut center_ids = BTreeSet::new();
        let mut neighbor_ids = BTreeSet::new();
        for center in &centers {
            let hood = graph.neighborhood(center);
            center_ids.insert(center.to_string());
            neighbor_ids.extend(hood.neighbors.iter().map(|n| n.to_string()));
        }

        for node in &mut self.nodes {
            if center_ids.contains(&node.id) {
                node.color = HIGHLIGHT_COLOR.to_string();
            } else if neighbor_ids.contains(&node.id) {
                node.color = self.palette.neighbor.to_string();
            }
        }
        for edge in &mut self.edges {
            if center_ids.contains(&edge.from) || center_ids.contains(&edge.to) {
                edge.color = HIGHLIGHT_COLOR.to_string();
            }
        }
        true
    }

    pub fn node(&self, id: &str) -> Option<&VisNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
