use serde::{Deserialize, Serialize};

/// A named stop with a fixed geographic position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationNode {
    pub name: String,
    /// (longitude, latitude)
    pub position: (f64, f64),
}

impl StationNode {
    #[must_use]
    pub fn new(name: impl Into<String>, position: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}
