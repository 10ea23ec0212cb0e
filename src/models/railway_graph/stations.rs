use petgraph::stable_graph::NodeIndex;
use super::RailwayGraph;
use crate::models::station::StationNode;

/// Extension trait for station-related lookups on `RailwayGraph`
pub trait Stations {
    /// Get `NodeIndex` by station name
    fn station_index(&self, name: &str) -> Option<NodeIndex>;

    /// Get station by `NodeIndex`
    fn station(&self, index: NodeIndex) -> Option<&StationNode>;

    /// Get station name by `NodeIndex`
    fn station_name(&self, index: NodeIndex) -> Option<&str>;

    /// Get a station's (longitude, latitude) by name
    fn station_position(&self, name: &str) -> Option<(f64, f64)>;

    /// All stations in the order they were first read
    fn stations(&self) -> Vec<&StationNode>;
}

impl Stations for RailwayGraph {
    fn station_index(&self, name: &str) -> Option<NodeIndex> {
        self.station_name_to_index.get(name).copied()
    }

    fn station(&self, index: NodeIndex) -> Option<&StationNode> {
        self.graph.node_weight(index)
    }

    fn station_name(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(|node| node.name.as_str())
    }

    fn station_position(&self, name: &str) -> Option<(f64, f64)> {
        self.station_index(name)
            .and_then(|index| self.graph.node_weight(index))
            .map(|node| node.position)
    }

    fn stations(&self) -> Vec<&StationNode> {
        self.graph
            .node_indices()
            .filter_map(|index| self.graph.node_weight(index))
            .collect()
    }
}
