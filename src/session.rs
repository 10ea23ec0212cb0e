use std::collections::HashMap;
use std::path::Path;
use crate::import::{load_network_from_path, LoadError, LoadOptions};
use crate::models::{LinePalette, Lines, RailwayGraph, Selection};
use crate::query::{query, QueryResult};
use crate::render::RenderStyle;
use crate::stats::LineSummary;

static EMPTY_SELECTION: LineSummary = LineSummary::EmptySelection;

/// What the presentation layer draws for the current selection
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    /// Subgraph, colors and statistics of the lines actually drawn
    pub map: &'a QueryResult,
    /// Statistics text for the user's own selection
    pub summary: &'a LineSummary,
    /// True when nothing is selected and the whole network is drawn instead
    pub showing_all: bool,
}

/// One user's state: the loaded network, the palette, the current selection
///
/// Results are cached per drawn selection since they depend on nothing else.
/// The cache is not bounded: it holds at most one entry per subset of the
/// network's lines, which stays small for a city-sized palette.
#[derive(Debug)]
pub struct Session {
    graph: RailwayGraph,
    palette: LinePalette,
    selection: Selection,
    cache: HashMap<(Selection, bool), QueryResult>,
}

impl Session {
    #[must_use]
    pub fn new(graph: RailwayGraph, palette: LinePalette) -> Self {
        Self {
            graph,
            palette,
            selection: Selection::new(),
            cache: HashMap::new(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded; no session is created
    pub fn open(path: &Path, palette: LinePalette, options: &LoadOptions) -> Result<Self, LoadError> {
        Ok(Self::new(load_network_from_path(path, options)?, palette))
    }

    #[must_use]
    pub fn graph(&self) -> &RailwayGraph {
        &self.graph
    }

    #[must_use]
    pub fn palette(&self) -> &LinePalette {
        &self.palette
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Lines to offer as toggles, in palette order
    #[must_use]
    pub fn line_names(&self) -> Vec<&str> {
        self.graph.line_names(&self.palette)
    }

    pub fn select(&mut self, line: &str) -> bool {
        self.selection.insert(line)
    }

    pub fn deselect(&mut self, line: &str) -> bool {
        self.selection.remove(line)
    }

    pub fn toggle(&mut self, line: &str) -> bool {
        self.selection.toggle(line)
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    #[must_use]
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    /// Compute (or reuse) what to draw for the current selection
    ///
    /// With nothing selected the whole network is drawn in the overview
    /// style, while the statistics still report the empty selection.
    pub fn view(&mut self) -> SessionView<'_> {
        let showing_all = self.selection.is_empty();
        let drawn = if showing_all {
            Selection::all(&self.graph)
        } else {
            self.selection.clone()
        };

        let graph = &self.graph;
        let palette = &self.palette;
        let map: &QueryResult = self
            .cache
            .entry((drawn, showing_all))
            .or_insert_with_key(|(drawn, showing_all)| {
                let result = query(graph, drawn, palette);
                if *showing_all {
                    QueryResult {
                        render: result.render.with_style(RenderStyle::OVERVIEW),
                        ..result
                    }
                } else {
                    result
                }
            });

        let summary = if showing_all { &EMPTY_SELECTION } else { &map.summary };
        SessionView {
            map,
            summary,
            showing_all,
        }
    }
}
