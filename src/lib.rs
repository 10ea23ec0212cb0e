#![allow(clippy::implicit_hasher)]
#![allow(clippy::module_name_repetitions)]

//! Transit map engine: load station-to-station segments, filter the network
//! by line, color it, and summarize segment distances.
//!
//! ```
//! use tube_map::import::{load_network_from_str, LoadOptions};
//! use tube_map::models::{LinePalette, Selection};
//! use tube_map::query::query;
//!
//! let csv = "\
//! Tube Line,From Station,To Station,Distance (km),Longitude_From,Latitude_From,Longitude_To,Latitude_To
//! Victoria,Euston,Camden Town,1.2,-0.1337,51.5282,-0.1426,51.5392
//! Northern,Camden Town,Kentish Town,1.0,-0.1426,51.5392,-0.1403,51.5505
//! ";
//! let graph = load_network_from_str(csv, &LoadOptions::default()).unwrap();
//! let selection: Selection = ["Victoria"].into_iter().collect();
//! let result = query(&graph, &selection, &LinePalette::london());
//!
//! assert_eq!(result.subgraph.node_count(), 2);
//! assert_eq!(result.render.node_color("Euston"), Some("#00a0df"));
//! ```

pub mod constants;
pub mod geometry;
pub mod import;
pub mod logging;
pub mod models;
pub mod query;
pub mod render;
pub mod session;
pub mod stats;

pub use import::{load_network, LoadError, LoadOptions};
pub use models::{LinePalette, RailwayGraph, Selection};
pub use query::{query, QueryResult};
pub use session::Session;
