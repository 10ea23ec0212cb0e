use serde::Serialize;
use crate::models::{build_subgraph, LinePalette, RailwayGraph, Selection, Subgraph};
use crate::render::{resolve_colors, RenderAttributes};
use crate::stats::{summarize, LineSummary};

/// Everything the presentation layer needs after one selection change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub subgraph: Subgraph,
    pub render: RenderAttributes,
    pub summary: LineSummary,
}

/// Build the subgraph, colors and statistics for a selection in one pass
#[must_use]
pub fn query(graph: &RailwayGraph, selection: &Selection, palette: &LinePalette) -> QueryResult {
    #[cfg(feature = "perf_timing")]
    let start = std::time::Instant::now();

    let subgraph = build_subgraph(graph, selection, palette);
    let render = resolve_colors(&subgraph, selection, palette);
    let summary = summarize(graph, selection, palette);

    #[cfg(feature = "perf_timing")]
    log::debug!(
        "query over {} lines took {:.3}ms",
        selection.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    QueryResult {
        subgraph,
        render,
        summary,
    }
}
