use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use crate::constants::{DEFAULT_FALLBACK_COLOR, LONDON_LINE_COLORS};

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("could not read palette {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed mapping from line name to display color
///
/// Declaration order matters: it decides the order lines are offered for
/// selection, the legend order, and which line wins when a station is served
/// by several selected lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePalette {
    colors: IndexMap<String, String>,
    fallback: String,
}

impl Default for LinePalette {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_COLOR)
    }
}

impl LinePalette {
    /// Empty palette; every line resolves to `fallback`
    #[must_use]
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback: fallback.into(),
        }
    }

    /// The London Underground palette
    #[must_use]
    pub fn london() -> Self {
        LONDON_LINE_COLORS
            .iter()
            .fold(Self::default(), |palette, (line, color)| palette.with_line(*line, *color))
    }

    /// Parse a JSON object of `"line": "color"` pairs, keeping document order
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object of strings
    pub fn from_json_str(content: &str) -> Result<Self, PaletteError> {
        let colors: IndexMap<String, String> = serde_json::from_str(content)?;
        Ok(Self {
            colors,
            fallback: DEFAULT_FALLBACK_COLOR.to_string(),
        })
    }

    /// Read a palette from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid palette
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_json_str(&content)?;
        log::debug!("Loaded {} line colors from {}", palette.len(), path.display());
        Ok(palette)
    }

    /// Declare a line's color. Redeclaring a line replaces its color but keeps its position.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(line.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    #[must_use]
    pub fn get(&self, line: &str) -> Option<&str> {
        self.colors.get(line).map(String::as_str)
    }

    /// Color for a line, or the fallback color when the line is not declared
    #[must_use]
    pub fn color_for(&self, line: &str) -> &str {
        self.get(line).unwrap_or(&self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Position of a line in declaration order
    #[must_use]
    pub fn rank(&self, line: &str) -> Option<usize> {
        self.colors.get_index_of(line)
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.colors.contains_key(line)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Sort lines into declaration order. Undeclared lines go last and keep
    /// their relative input order.
    #[must_use]
    pub fn order_lines<'a, I>(&self, lines: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ordered: Vec<&'a str> = lines.into_iter().collect();
        ordered.sort_by_key(|line| self.rank(line).unwrap_or(usize::MAX));
        ordered
    }
}
