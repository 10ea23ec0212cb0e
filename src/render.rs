use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use crate::constants::{
    FOCUSED_EDGE_ALPHA, FOCUSED_EDGE_WIDTH, FOCUSED_NODE_SIZE, OVERVIEW_EDGE_ALPHA,
    MAP_PADDING_FRACTION, OVERVIEW_EDGE_WIDTH, OVERVIEW_NODE_SIZE, STATION_LABEL_FONT_SIZE,
};
use crate::geometry::Bounds;
use crate::models::{LinePalette, Selection, Subgraph};

/// Stroke and marker sizes for drawing a subgraph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderStyle {
    pub edge_width: f64,
    pub edge_alpha: f64,
    pub node_size: f64,
    pub label_font_size: f64,
}

impl RenderStyle {
    /// Thin, translucent edges for the whole network
    pub const OVERVIEW: Self = Self {
        edge_width: OVERVIEW_EDGE_WIDTH,
        edge_alpha: OVERVIEW_EDGE_ALPHA,
        node_size: OVERVIEW_NODE_SIZE,
        label_font_size: STATION_LABEL_FONT_SIZE,
    };

    /// Heavier edges and markers when only a few lines are shown
    pub const FOCUSED: Self = Self {
        edge_width: FOCUSED_EDGE_WIDTH,
        edge_alpha: FOCUSED_EDGE_ALPHA,
        node_size: FOCUSED_NODE_SIZE,
        label_font_size: STATION_LABEL_FONT_SIZE,
    };
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::FOCUSED
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub line: String,
    pub color: String,
}

/// Everything a plotter needs besides the subgraph itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderAttributes {
    /// Full-graph edge index to color
    pub edge_colors: IndexMap<usize, String>,
    /// Station name to color
    pub node_colors: IndexMap<String, String>,
    pub legend: Vec<LegendEntry>,
    pub style: RenderStyle,
    /// Viewport: the drawn stations plus a margin, `None` when nothing is drawn
    pub bounds: Option<Bounds>,
}

impl RenderAttributes {
    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn edge_color(&self, edge_id: usize) -> Option<&str> {
        self.edge_colors.get(&edge_id).map(String::as_str)
    }

    #[must_use]
    pub fn node_color(&self, station: &str) -> Option<&str> {
        self.node_colors.get(station).map(String::as_str)
    }
}

/// Assign a color to every edge and station of a subgraph
///
/// Edges take their line's color. A station served by several selected
/// lines takes the color of whichever of them the palette declares first;
/// undeclared lines rank after every declared one and use the fallback
/// color. The result does not depend on edge iteration order.
#[must_use]
pub fn resolve_colors(subgraph: &Subgraph, selection: &Selection, palette: &LinePalette) -> RenderAttributes {
    let mut edge_colors = IndexMap::with_capacity(subgraph.edge_count());
    // station -> (rank, line) of the winning line so far
    let mut node_lines: HashMap<&str, (usize, &str)> = HashMap::new();

    for edge in subgraph.edges() {
        edge_colors.insert(edge.id, palette.color_for(&edge.line).to_string());

        if !selection.contains(&edge.line) {
            continue;
        }
        let rank = palette.rank(&edge.line).unwrap_or(usize::MAX);
        for station in [edge.from.as_str(), edge.to.as_str()] {
            node_lines
                .entry(station)
                .and_modify(|best| {
                    if rank < best.0 {
                        *best = (rank, edge.line.as_str());
                    }
                })
                .or_insert((rank, edge.line.as_str()));
        }
    }

    let node_colors = subgraph
        .nodes()
        .iter()
        .map(|node| {
            let color = node_lines
                .get(node.name.as_str())
                .map_or(palette.fallback(), |(_, line)| palette.color_for(line));
            (node.name.clone(), color.to_string())
        })
        .collect();

    let legend = subgraph
        .lines()
        .iter()
        .filter(|line| selection.contains(line))
        .map(|line| LegendEntry {
            line: line.clone(),
            color: palette.color_for(line).to_string(),
        })
        .collect();

    RenderAttributes {
        edge_colors,
        node_colors,
        legend,
        style: RenderStyle::default(),
        bounds: subgraph.bounds().map(|bounds| bounds.padded(MAP_PADDING_FRACTION)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{load_network_from_str, LoadOptions};
    use crate::models::{build_subgraph, RailwayGraph};
    use pretty_assertions::assert_eq;

    const SCENARIO: &str = "\
Tube Line,From Station,To Station,Distance (km),Longitude_From,Latitude_From,Longitude_To,Latitude_To
Victoria,Euston,Camden Town,1.2,-0.1337,51.5282,-0.1426,51.5392
Victoria,Camden Town,King's Cross,1.7,-0.1426,51.5392,-0.1238,51.5308
Northern,King's Cross,Angel,1.0,-0.1238,51.5308,-0.1058,51.5322
";

    fn scenario_graph() -> RailwayGraph {
        load_network_from_str(SCENARIO, &LoadOptions::default()).expect("Scenario should load")
    }

    fn render(graph: &RailwayGraph, lines: &[&str], palette: &LinePalette) -> RenderAttributes {
        let selection: Selection = lines.iter().copied().collect();
        let subgraph = build_subgraph(graph, &selection, palette);
        resolve_colors(&subgraph, &selection, palette)
    }

    #[test]
    fn test_edges_take_line_color() {
        let graph = scenario_graph();
        let attributes = render(&graph, &["Victoria", "Northern"], &LinePalette::london());

        assert_eq!(attributes.edge_colors.len(), 3);
        for (edge_id, color) in &attributes.edge_colors {
            let edge = petgraph::stable_graph::EdgeIndex::new(*edge_id);
            let line = &crate::models::Tracks::track(&graph, edge).expect("Edge exists").line;
            assert_eq!(color, LinePalette::london().color_for(line));
        }
    }

    #[test]
    fn test_shared_station_takes_first_declared_line() {
        let graph = scenario_graph();

        let victoria_first = LinePalette::default()
            .with_line("Victoria", "#00a0df")
            .with_line("Northern", "#000000");
        let attributes = render(&graph, &["Victoria", "Northern"], &victoria_first);
        assert_eq!(attributes.node_color("King's Cross"), Some("#00a0df"));
        assert_eq!(attributes.node_color("Angel"), Some("#000000"));
        assert_eq!(attributes.node_color("Euston"), Some("#00a0df"));

        let northern_first = LinePalette::default()
            .with_line("Northern", "#000000")
            .with_line("Victoria", "#00a0df");
        let attributes = render(&graph, &["Victoria", "Northern"], &northern_first);
        assert_eq!(attributes.node_color("King's Cross"), Some("#000000"));
        assert_eq!(attributes.node_color("Euston"), Some("#00a0df"));
    }

    #[test]
    fn test_undeclared_line_uses_fallback() {
        let graph = scenario_graph();
        let palette = LinePalette::default().with_line("Victoria", "#00a0df");
        let attributes = render(&graph, &["Victoria", "Northern"], &palette);

        assert_eq!(attributes.node_color("Angel"), Some("lightgray"));
        // Declared line beats undeclared regardless of edge order
        assert_eq!(attributes.node_color("King's Cross"), Some("#00a0df"));
        let northern_edge = attributes
            .edge_colors
            .iter()
            .find(|(_, color)| color.as_str() == "lightgray");
        assert!(northern_edge.is_some());
    }

    #[test]
    fn test_station_without_selected_line_uses_fallback() {
        let graph = scenario_graph();
        let palette = LinePalette::london();
        let all: Selection = ["Victoria", "Northern"].into_iter().collect();
        let subgraph = build_subgraph(&graph, &all, &palette);

        // Colour the full subgraph against a narrower selection
        let narrow: Selection = ["Victoria"].into_iter().collect();
        let attributes = resolve_colors(&subgraph, &narrow, &palette);

        assert_eq!(attributes.node_color("Angel"), Some("lightgray"));
        assert_eq!(attributes.node_color("King's Cross"), Some("#00a0df"));
        assert_eq!(attributes.legend.len(), 1);
    }

    #[test]
    fn test_resolution_is_byte_identical() {
        let graph = scenario_graph();
        let palette = LinePalette::london();
        let first = render(&graph, &["Victoria", "Northern"], &palette);
        let second = render(&graph, &["Northern", "Victoria"], &palette);

        assert_eq!(
            serde_json::to_string(&first).expect("Should serialize"),
            serde_json::to_string(&second).expect("Should serialize")
        );
    }

    #[test]
    fn test_legend_in_declared_order() {
        let graph = scenario_graph();
        let attributes = render(&graph, &["Victoria", "Northern", "Jubilee"], &LinePalette::london());

        assert_eq!(
            attributes.legend,
            vec![
                LegendEntry { line: "Northern".to_string(), color: "#000000".to_string() },
                LegendEntry { line: "Victoria".to_string(), color: "#00a0df".to_string() },
            ]
        );
    }

    #[test]
    fn test_bounds_frame_every_station() {
        let graph = scenario_graph();
        let palette = LinePalette::london();
        let selection: Selection = ["Victoria", "Northern"].into_iter().collect();
        let subgraph = build_subgraph(&graph, &selection, &palette);
        let attributes = resolve_colors(&subgraph, &selection, &palette);

        let tight = subgraph.bounds().expect("Subgraph has stations");
        let viewport = attributes.bounds.expect("Subgraph has stations");
        assert!(viewport.min.0 < tight.min.0 && viewport.min.1 < tight.min.1);
        assert!(viewport.max.0 > tight.max.0 && viewport.max.1 > tight.max.1);
        assert!((viewport.width() - tight.width() * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_subgraph() {
        let graph = scenario_graph();
        let attributes = render(&graph, &[], &LinePalette::london());

        assert!(attributes.edge_colors.is_empty());
        assert!(attributes.node_colors.is_empty());
        assert!(attributes.legend.is_empty());
        assert_eq!(attributes.bounds, None);
        assert_eq!(attributes.style, RenderStyle::FOCUSED);
    }

    #[test]
    fn test_with_style() {
        let graph = scenario_graph();
        let attributes = render(&graph, &["Victoria"], &LinePalette::london()).with_style(RenderStyle::OVERVIEW);
        assert_eq!(attributes.style.edge_width, 1.5);
        assert_eq!(attributes.style.node_size, 50.0);
    }
}
