//! Colors and shapes per relation

use crate::aggregate::Relation;
use crate::graph::Role;

pub const EDGE_COLOR: &str = "#cccccc";
pub const HIGHLIGHT_COLOR: &str = "red";

/// Node look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub color: &'static str,
    pub shape: Option<&'static str>,
}

/// Styling of one relation's graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Roles drawn with the primary style
    pub primary_roles: &'static [Role],
    pub primary: NodeStyle,
    /// Style of everything else
    pub secondary: NodeStyle,
    pub edge: &'static str,
    /// Color of the neighbors of a highlighted node
    pub neighbor: &'static str,
}

impl Palette {
    pub fn for_relation(relation: Relation) -> Self {
        match relation {
            Relation::CoStar => Palette {
                primary_roles: &[Role::Lead],
                primary: NodeStyle { color: "orange", shape: Some("star") },
                secondary: NodeStyle { color: "#97C2FC", shape: Some("dot") },
                edge: EDGE_COLOR,
                neighbor: "pink",
            },
            Relation::DirectorCast | Relation::ProducerMovie => Palette {
                primary_roles: &[Role::Director, Role::Producer],
                primary: NodeStyle { color: "skyblue", shape: None },
                secondary: NodeStyle { color: "pink", shape: None },
                edge: EDGE_COLOR,
                neighbor: "orange",
            },
        }
    }

    pub fn node_style(&self, role: Role) -> NodeStyle {
        if self.primary_roles.contains(&role) {
            self.primary
        } else {
            self.secondary
        }
    }
}
