use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use super::{LinePalette, Lines, RailwayGraph, Selection, Stations, Tracks};
use crate::geometry::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgraphNode {
    pub name: String,
    /// (longitude, latitude)
    pub position: (f64, f64),
    #[serde(skip)]
    pub index: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgraphEdge {
    /// Edge index in the full graph
    pub id: usize,
    pub from: String,
    pub to: String,
    pub line: String,
    pub distance: f64,
    #[serde(skip)]
    pub index: EdgeIndex,
}

/// The part of the network implied by a `Selection`
///
/// Lines are laid out in palette order, edges in line order, and stations in
/// the order an edge first touches them, so iterating a subgraph is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Subgraph {
    lines: Vec<String>,
    nodes: Vec<SubgraphNode>,
    edges: Vec<SubgraphEdge>,
    #[serde(skip)]
    node_lookup: HashMap<String, usize>,
}

impl Subgraph {
    /// Lines that contributed edges, in processing order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn nodes(&self) -> &[SubgraphNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[SubgraphEdge] {
        &self.edges
    }

    #[must_use]
    pub fn node(&self, name: &str) -> Option<&SubgraphNode> {
        self.node_lookup.get(name).and_then(|&i| self.nodes.get(i))
    }

    #[must_use]
    pub fn contains_station(&self, name: &str) -> bool {
        self.node_lookup.contains_key(name)
    }

    #[must_use]
    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.edges.iter().any(|e| e.index == edge)
    }

    pub fn edges_for_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a SubgraphEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.line == line)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Extent of the drawn stations, `None` when nothing is drawn
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.nodes.iter().map(|node| node.position))
    }

    fn add_node<'g>(&mut self, graph: &'g RailwayGraph, index: NodeIndex) -> Option<&'g str> {
        let station = graph.station(index)?;
        if !self.node_lookup.contains_key(&station.name) {
            self.node_lookup.insert(station.name.clone(), self.nodes.len());
            self.nodes.push(SubgraphNode {
                name: station.name.clone(),
                position: station.position,
                index,
            });
        }
        Some(station.name.as_str())
    }
}

/// Lines of `selection` present in `graph`, in palette order
pub(crate) fn selected_lines_in_order<'g>(
    graph: &'g RailwayGraph,
    selection: &Selection,
    palette: &LinePalette,
) -> Vec<&'g str> {
    graph
        .line_names(palette)
        .into_iter()
        .filter(|line| selection.contains(line))
        .collect()
}

/// Build the induced subgraph for the selected lines
///
/// Selected names the graph doesn't know contribute nothing. An empty
/// selection gives an empty subgraph; callers wanting the whole map must
/// pass every line explicitly.
#[must_use]
pub fn build_subgraph(graph: &RailwayGraph, selection: &Selection, palette: &LinePalette) -> Subgraph {
    let mut subgraph = Subgraph::default();
    let mut seen_edges = HashSet::new();

    for line in selected_lines_in_order(graph, selection, palette) {
        let mut contributed = false;

        for &edge in graph.edges_for_line(line) {
            if !seen_edges.insert(edge) {
                continue;
            }
            let (Some(segment), Some((from, to))) = (graph.track(edge), graph.track_endpoints(edge)) else {
                continue;
            };
            let (Some(from_name), Some(to_name)) = (
                subgraph.add_node(graph, from),
                subgraph.add_node(graph, to),
            ) else {
                continue;
            };

            subgraph.edges.push(SubgraphEdge {
                id: edge.index(),
                from: from_name.to_string(),
                to: to_name.to_string(),
                line: segment.line.clone(),
                distance: segment.distance,
                index: edge,
            });
            contributed = true;
        }

        if contributed {
            subgraph.lines.push(line.to_string());
        }
    }

    log::debug!(
        "Built subgraph for {} selected lines: {} stations, {} edges",
        selection.len(),
        subgraph.node_count(),
        subgraph.edge_count()
    );

    subgraph
}
