pub mod csv;

// Re-export commonly used items
pub use self::csv::{
    load_network, load_network_from_path, load_network_from_str, CoordinatePolicy, LoadError,
    LoadOptions,
};
