// crates/region_splitter/src/lib.rs

//! Single-pass region filter for marker-tagged templates.
//!
//! Input is walked one grapheme cluster at a time. A run of marker graphemes
//! opens a region, and the text after it is kept only when the run contained
//! the selected marker or the wildcard. Marker graphemes never reach the output.

pub mod state;
pub mod splitter;

pub use splitter::{split, RegionSplitter};
pub use state::{transition, Action, Class, State};
