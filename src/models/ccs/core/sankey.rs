use serde::Serialize;
use uom::si::{f64::Mass, mass::kilogram};

use super::FlowBreakdown;

/// Node index of the junction every emission flows through.
const JUNCTION: usize = 3;

/// Node labels, indexed 0–6: the three emission sources, the junction, and
/// the three destinations.
const NODE_LABELS: [&str; 7] = [
    "Compression Emissions",
    "Capture Emissions",
    "Usable Energy Output Emissions",
    "Total CO₂ Emitted",
    "Uncaptured CO₂",
    "Leaked CO₂",
    "Captured CO₂",
];

/// Fixed node colors; the junction stays black.
const NODE_COLORS: [&str; 7] = ["red", "orange", "yellow", "black", "blue", "purple", "green"];

/// Fixed link colors: the three inflows, then the three outflows. The
/// junction itself needs no link color.
const LINK_COLORS: [&str; 6] = [
    "#ff6666", "#ff9966", "#ffff66", "#66b3ff", "#c266ff", "#66ff99",
];

/// A Sankey-style flow-graph description for diagram rendering.
///
/// Three source nodes (compression, capture, usable-output emissions)
/// converge on the total-emitted junction, which diverges into the three
/// destinations (uncaptured, leaked, captured). Labels and colors are fixed
/// presentation constants; only the link values vary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

/// One node of the flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowNode {
    pub label: &'static str,
    pub color: &'static str,
}

/// One directed link of the flow graph, carrying a CO₂ mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value_kg: f64,
    pub color: &'static str,
}

impl FlowGraph {
    /// Builds the graph for a computed breakdown.
    #[must_use]
    pub(super) fn from_breakdown(breakdown: &FlowBreakdown) -> Self {
        let nodes = NODE_LABELS
            .iter()
            .zip(NODE_COLORS)
            .map(|(&label, color)| FlowNode { label, color })
            .collect();

        // Inflows from sources 0–2, then outflows to destinations 4–6.
        let flows: [(usize, usize, Mass); 6] = [
            (0, JUNCTION, breakdown.compression_emitted),
            (1, JUNCTION, breakdown.capture_emitted),
            (2, JUNCTION, breakdown.usable_emitted),
            (JUNCTION, 4, breakdown.uncaptured),
            (JUNCTION, 5, breakdown.leaked),
            (JUNCTION, 6, breakdown.captured),
        ];

        let links = flows
            .iter()
            .zip(LINK_COLORS)
            .map(|(&(source, target, mass), color)| FlowLink {
                source,
                target,
                value_kg: mass.get::<kilogram>(),
                color,
            })
            .collect();

        Self { nodes, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn breakdown() -> FlowBreakdown {
        let kg = Mass::new::<kilogram>;
        FlowBreakdown {
            total: kg(198.0),
            compression_emitted: kg(19.8),
            capture_emitted: kg(9.9),
            usable_emitted: kg(168.3),
            uncaptured: kg(19.8),
            leaked: kg(8.91),
            captured: kg(169.29),
        }
    }

    #[test]
    fn graph_has_seven_nodes_and_six_links() {
        let graph = breakdown().sankey();
        assert_eq!(graph.nodes.len(), 7);
        assert_eq!(graph.links.len(), 6);
    }

    #[test]
    fn sources_converge_on_the_junction_then_diverge() {
        let graph = breakdown().sankey();

        for link in &graph.links[..3] {
            assert_eq!(link.target, JUNCTION);
        }
        for link in &graph.links[3..] {
            assert_eq!(link.source, JUNCTION);
        }
    }

    #[test]
    fn link_values_conserve_mass_through_the_junction() {
        let graph = breakdown().sankey();

        let inflow: f64 = graph.links[..3].iter().map(|link| link.value_kg).sum();
        let outflow: f64 = graph.links[3..].iter().map(|link| link.value_kg).sum();

        assert_relative_eq!(inflow, 198.0, max_relative = 1e-12);
        assert_relative_eq!(outflow, 198.0, max_relative = 1e-12);
    }

    #[test]
    fn junction_is_black() {
        let graph = breakdown().sankey();
        assert_eq!(graph.nodes[JUNCTION].label, "Total CO₂ Emitted");
        assert_eq!(graph.nodes[JUNCTION].color, "black");
    }
}
