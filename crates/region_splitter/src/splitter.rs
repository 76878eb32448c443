// crates/region_splitter/src/splitter.rs

use marker_index::MarkerIndex;
use unicode_segmentation::UnicodeSegmentation;

use crate::state::{transition, Action, Class, State};

/// Filters a template down to the regions tagged with one marker.
///
/// The splitter borrows everything it needs and keeps no state between
/// calls, so one instance can be reused for any number of inputs.
#[derive(Clone, Copy, Debug)]
pub struct RegionSplitter<'a> {
    index: &'a MarkerIndex,
    selected: &'a str,
    wildcard: &'a str,
}

impl<'a> RegionSplitter<'a> {
    pub fn new(index: &'a MarkerIndex, selected: &'a str, wildcard: &'a str) -> Self {
        Self {
            index,
            selected,
            wildcard,
        }
    }

    /// Classifies one grapheme cluster against the index and the selection.
    pub fn classify(&self, grapheme: &str) -> Class {
        if !self.index.contains(grapheme) {
            Class::Text
        } else if grapheme == self.selected || grapheme == self.wildcard {
            Class::MatchingMarker
        } else {
            Class::OtherMarker
        }
    }

    /// Runs the state machine over `text` and returns what it kept.
    ///
    /// A marker run left open at the end of the input is dropped.
    pub fn run(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut state = State::default();

        for grapheme in text.graphemes(true) {
            let (next, action) = transition(state, self.classify(grapheme));
            if action == Action::Append {
                output.push_str(grapheme);
            }
            state = next;
        }

        output
    }
}

/// Convenience wrapper: filters `text` keeping the regions tagged `selected`
/// or `wildcard`.
pub fn split(text: &str, index: &MarkerIndex, selected: &str, wildcard: &str) -> String {
    RegionSplitter::new(index, selected, wildcard).run(text)
}
