use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use super::RailwayGraph;
use super::stations::Stations;
use crate::models::track::TrackSegment;

/// Extension trait for track-related lookups on `RailwayGraph`
pub trait Tracks {
    /// Get track segment by edge index
    fn track(&self, edge_idx: EdgeIndex) -> Option<&TrackSegment>;

    /// Get endpoints of a track segment
    fn track_endpoints(&self, edge_idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)>;

    /// Get the station names at either end of a track segment
    fn track_station_names(&self, edge_idx: EdgeIndex) -> Option<(&str, &str)>;

    /// All edge indices, in the order the segments were added
    fn track_indices(&self) -> Vec<EdgeIndex>;

    /// Segments joining two stations on any line, in either direction
    fn tracks_between(&self, station1_name: &str, station2_name: &str) -> Vec<EdgeIndex>;
}

impl Tracks for RailwayGraph {
    fn track(&self, edge_idx: EdgeIndex) -> Option<&TrackSegment> {
        self.graph.edge_weight(edge_idx)
    }

    fn track_endpoints(&self, edge_idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge_idx)
    }

    fn track_station_names(&self, edge_idx: EdgeIndex) -> Option<(&str, &str)> {
        let (from, to) = self.track_endpoints(edge_idx)?;
        Some((self.station_name(from)?, self.station_name(to)?))
    }

    fn track_indices(&self) -> Vec<EdgeIndex> {
        self.graph.edge_indices().collect()
    }

    fn tracks_between(&self, station1_name: &str, station2_name: &str) -> Vec<EdgeIndex> {
        let (Some(node1), Some(node2)) = (
            self.station_index(station1_name),
            self.station_index(station2_name),
        ) else {
            return Vec::new();
        };

        self.graph
            .edge_indices()
            .filter(|&edge| {
                self.graph.edge_endpoints(edge).is_some_and(|(from, to)| {
                    (from == node1 && to == node2) || (from == node2 && to == node1)
                })
            })
            .collect()
    }
}
