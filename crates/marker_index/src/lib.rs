// crates/marker_index/src/lib.rs

//! The set of marker characters that delimit regions in a template.
//!
//! A "character" here is always one extended grapheme cluster, so a marker
//! such as `✴️` (U+2734 U+FE0F) or a ZWJ emoji sequence is a single entry.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Marker that matches every selection.
pub const DEFAULT_WILDCARD: &str = "✴️";

/// Errors raised while building an index from its configuration file.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("marker index unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the first grapheme cluster of `text`, if any.
pub fn first_grapheme(text: &str) -> Option<&str> {
    text.graphemes(true).next()
}

/// An ordered, de-duplicated set of marker graphemes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerIndex {
    markers: Vec<String>,
    lookup: HashSet<String>,
}

impl MarkerIndex {
    /// Builds an index from individual markers, keeping first-seen order.
    pub fn from_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for marker in markers {
            index.insert(marker.into());
        }
        index
    }

    /// Builds an index from the text of an index file.
    ///
    /// Each non-empty line contributes its first grapheme cluster; anything
    /// after it on the same line is ignored.
    pub fn from_lines(content: &str) -> Self {
        let mut index = Self::default();
        for line in content.lines() {
            if let Some(marker) = first_grapheme(line) {
                index.insert(marker.to_string());
            }
        }
        index
    }

    /// Reads and parses the index file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IndexError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_lines(&content);
        log::debug!("Loaded {} marker(s) from {}", index.len(), path.display());
        Ok(index)
    }

    fn insert(&mut self, marker: String) {
        if self.lookup.insert(marker.clone()) {
            self.markers.push(marker);
        }
    }

    pub fn contains(&self, grapheme: &str) -> bool {
        self.lookup.contains(grapheme)
    }

    /// Markers in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
