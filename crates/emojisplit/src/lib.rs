// crates/emojisplit/src/lib.rs

//! Driver for the `emojisplit` binary: argument parsing, index loading,
//! output naming and the single/split run policies around `region_splitter`.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod output_path;

pub use config::{AppConfig, EmptyOutputPolicy, OutputMode};
pub use driver::{load_index, run, split_file, AtomicFileWriter, Outcome, OutputWriter, RunReport};
pub use error::SplitError;
