//! Rendering adapter
//!
//! Presentation lives here and only here: colors, shapes, tooltips and the
//! JSON schema of the network-visualization library. The graph itself knows
//! nothing about how it is drawn.

pub mod palette;
pub mod vis;

pub use palette::{NodeStyle, Palette};
pub use vis::{VisEdge, VisNetwork, VisNode, VisOptions};

use serde::{Deserialize, Serialize};

/// Display settings for rendered networks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Smallest node size
    pub scaling_min: u32,
    /// Largest node size
    pub scaling_max: u32,
    pub font_size: u32,
    /// `None` picks per relation; large bipartite graphs render faster without it
    pub improved_layout: Option<bool>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scaling_min: 10,
            scaling_max: 100,
            font_size: 18,
            improved_layout: None,
        }
    }
}
