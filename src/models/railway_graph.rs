use indexmap::IndexMap;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use std::collections::HashMap;
use super::{StationNode, TrackSegment};

mod lines;
mod stations;
mod tracks;

pub use lines::Lines;
pub use stations::Stations;
pub use tracks::Tracks;

/// The full transit network, built once by the loader and read-only afterwards
///
/// Stations are keyed by name. Each edge carries one line, so two stations
/// served by several lines are joined by parallel edges. `line_edges` indexes
/// every edge under its line in the order the rows were read.
#[derive(Debug, Clone, Default)]
pub struct RailwayGraph {
    pub(crate) graph: StableUnGraph<StationNode, TrackSegment>,
    pub(crate) station_name_to_index: HashMap<String, NodeIndex>,
    pub(crate) line_edges: IndexMap<String, Vec<EdgeIndex>>,
}

impl RailwayGraph {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a station node if it doesn't exist, return its `NodeIndex`
    ///
    /// An existing station keeps the position it was first added with.
    pub(crate) fn add_or_get_station(&mut self, name: &str, position: (f64, f64)) -> NodeIndex {
        if let Some(&index) = self.station_name_to_index.get(name) {
            return index;
        }
        let index = self.graph.add_node(StationNode::new(name, position));
        self.station_name_to_index.insert(name.to_string(), index);
        index
    }

    /// Add a segment between two stations and index it under its line
    pub(crate) fn add_track(&mut self, from: NodeIndex, to: NodeIndex, segment: TrackSegment) -> EdgeIndex {
        let line = segment.line.clone();
        let edge = self.graph.add_edge(from, to, segment);
        self.line_edges.entry(line).or_default().push(edge);
        edge
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn track_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
