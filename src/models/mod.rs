mod line;
mod railway_graph;
mod selection;
mod station;
mod subgraph;
mod track;

pub use line::{LinePalette, PaletteError};
pub use railway_graph::{Lines, RailwayGraph, Stations, Tracks};
pub use selection::Selection;
pub use station::StationNode;
pub use subgraph::{build_subgraph, Subgraph, SubgraphEdge, SubgraphNode};
pub use track::TrackSegment;
