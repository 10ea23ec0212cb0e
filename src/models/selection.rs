use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use super::{Lines, RailwayGraph};

/// The set of line names the user currently has switched on
///
/// Names are not checked against the graph: a stale or retired line name
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    lines: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line present in the graph
    #[must_use]
    pub fn all(graph: &RailwayGraph) -> Self {
        graph.all_lines().into_iter().collect()
    }

    /// Returns false if the line was already selected
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        self.lines.insert(line.into())
    }

    /// Returns false if the line was not selected
    pub fn remove(&mut self, line: &str) -> bool {
        self.lines.remove(line)
    }

    /// Flip a line on or off, returning whether it is now selected
    pub fn toggle(&mut self, line: &str) -> bool {
        if self.lines.remove(line) {
            false
        } else {
            self.lines.insert(line.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_subset(&self, other: &Selection) -> bool {
        self.lines.is_subset(&other.lines)
    }

    /// Selected names in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}
