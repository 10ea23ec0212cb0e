use serde::{Deserialize, Serialize};

/// A connection between two stations served by exactly one line
///
/// The endpoints live on the graph edge, so a segment is undirected: the
/// same segment is reached from either station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    pub line: String,
    /// Length in kilometres, always finite and non-negative
    pub distance: f64,
}

impl TrackSegment {
    #[must_use]
    pub fn new(line: impl Into<String>, distance: f64) -> Self {
        Self {
            line: line.into(),
            distance,
        }
    }
}
