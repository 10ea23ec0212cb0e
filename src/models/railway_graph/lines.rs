use petgraph::stable_graph::EdgeIndex;
use super::RailwayGraph;
use crate::models::line::LinePalette;

/// Extension trait for line-related lookups on `RailwayGraph`
pub trait Lines {
    /// Every distinct line name, in the order lines first appear in the data
    fn all_lines(&self) -> Vec<&str>;

    fn has_line(&self, line: &str) -> bool;

    /// Edges of a line in the order they were read
    ///
    /// An unknown line has no edges; this is not an error.
    fn edges_for_line(&self, line: &str) -> &[EdgeIndex];

    /// Lines to offer for selection: declared palette lines first, in palette
    /// order, then lines the palette doesn't know in data order
    fn line_names(&self, palette: &LinePalette) -> Vec<&str>;
}

impl Lines for RailwayGraph {
    fn all_lines(&self) -> Vec<&str> {
        self.line_edges.keys().map(String::as_str).collect()
    }

    fn has_line(&self, line: &str) -> bool {
        self.line_edges.contains_key(line)
    }

    fn edges_for_line(&self, line: &str) -> &[EdgeIndex] {
        self.line_edges.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    fn line_names(&self, palette: &LinePalette) -> Vec<&str> {
        palette.order_lines(self.all_lines())
    }
}
