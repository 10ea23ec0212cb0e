use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use crate::models::{LinePalette, Lines, RailwayGraph, Selection, Tracks};

/// Descriptive statistics of segment distances over a set of lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Selected line names, in palette order
    pub lines: Vec<String>,
    pub count: usize,
    /// Kilometres
    pub total: f64,
    pub mean: f64,
    /// Sample standard deviation; `None` for a single segment
    pub std_dev: Option<f64>,
}

impl Statistics {
    /// `None` when there are no distances
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_distances(lines: Vec<String>, distances: &[f64]) -> Option<Self> {
        if distances.is_empty() {
            return None;
        }

        let count = distances.len();
        let total: f64 = distances.iter().sum();
        let mean = total / count as f64;
        let std_dev = (count > 1).then(|| {
            let squares: f64 = distances.iter().map(|d| (d - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        });

        Some(Self {
            lines,
            count,
            total,
            mean,
            std_dev,
        })
    }
}

/// Outcome of summarizing a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineSummary {
    /// Nothing was selected
    EmptySelection,
    /// Lines were selected but none of them has any segment
    NoMatchingData,
    Statistics(Statistics),
}

impl LineSummary {
    #[must_use]
    pub fn statistics(&self) -> Option<&Statistics> {
        match self {
            Self::Statistics(stats) => Some(stats),
            Self::EmptySelection | Self::NoMatchingData => None,
        }
    }
}

impl fmt::Display for LineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "No line selected."),
            Self::NoMatchingData => write!(f, "No data for selected lines."),
            Self::Statistics(stats) => {
                writeln!(f, "Selected Lines: {}", stats.lines.join(", "))?;
                writeln!(f, "Total Distance: {:.2} km", stats.total)?;
                writeln!(f, "Average Distance: {:.2} km", stats.mean)?;
                match stats.std_dev {
                    Some(std_dev) => write!(f, "Std Deviation: {std_dev:.2} km"),
                    None => write!(f, "Std Deviation: N/A"),
                }
            }
        }
    }
}

/// Summarize segment distances over every selected line
///
/// Each segment is counted once even if the selection reaches it twice.
#[must_use]
pub fn summarize(graph: &RailwayGraph, selection: &Selection, palette: &LinePalette) -> LineSummary {
    if selection.is_empty() {
        return LineSummary::EmptySelection;
    }

    let mut seen = HashSet::new();
    let distances: Vec<f64> = selection
        .iter()
        .flat_map(|line| graph.edges_for_line(line))
        .filter(|edge| seen.insert(**edge))
        .filter_map(|&edge| graph.track(edge))
        .map(|segment| segment.distance)
        .collect();

    let lines = palette
        .order_lines(selection.iter())
        .into_iter()
        .map(str::to_string)
        .collect();

    match Statistics::from_distances(lines, &distances) {
        Some(stats) => LineSummary::Statistics(stats),
        None => LineSummary::NoMatchingData,
    }
}
