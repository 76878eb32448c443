// crates/emojisplit/src/config.rs

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use marker_index::first_grapheme;

use crate::error::SplitError;

/// Environment variable that overrides the default index location.
pub const INDEX_ENV_VAR: &str = "EMOJISPLIT_INDEX";

/// Index location relative to the home directory.
pub const DEFAULT_INDEX_RELATIVE: &str = ".config/emojisplit/emoji.index";

/// Which markers get an output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One output for the given marker, written next to the input without its extension.
    SelectedMarker(String),
    /// One output per marker in the index, using the marker as the extension.
    EveryMarker,
}

/// What to do when a run keeps nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyOutputPolicy {
    Skip,
    Write,
}

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub infile: PathBuf,
    pub mode: OutputMode,
    pub index_path: PathBuf,
    pub wildcard: String,
    pub empty_output: EmptyOutputPolicy,
    pub verbose: bool,
}

impl AppConfig {
    /// Builds the configuration from parsed arguments and the process environment.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let infile = matches
            .get_one::<PathBuf>("FILE")
            .cloned()
            .context("missing input FILE")?;

        // clap supplies the wildcard default; the selection falls back to the wildcard.
        let wildcard = matches
            .get_one::<String>("wildcard")
            .cloned()
            .context("missing --wildcard")?;

        let mode = if matches.get_flag("split") {
            OutputMode::EveryMarker
        } else {
            let selected = matches
                .get_one::<String>("emoji")
                .cloned()
                .unwrap_or_else(|| wildcard.clone());
            OutputMode::SelectedMarker(selected)
        };

        let index_path = resolve_index_path(
            matches.get_one::<PathBuf>("index").cloned(),
            std::env::var_os(INDEX_ENV_VAR),
            dirs::home_dir(),
        )?;

        let empty_output = if matches.get_flag("write_empty") {
            EmptyOutputPolicy::Write
        } else {
            EmptyOutputPolicy::Skip
        };

        Ok(Self {
            infile,
            mode,
            index_path,
            wildcard,
            empty_output,
            verbose: matches.get_flag("verbose"),
        })
    }
}

/// Picks the index path: explicit flag, then environment, then the home directory default.
pub fn resolve_index_path(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, SplitError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    home.map(|h| h.join(DEFAULT_INDEX_RELATIVE))
        .ok_or(SplitError::IndexPathUnknown)
}

/// Clap value parser: keeps only the first grapheme cluster of a marker argument.
pub fn parse_marker(value: &str) -> Result<String, String> {
    first_grapheme(value)
        .map(str::to_string)
        .ok_or_else(|| "marker must not be empty".to_string())
}
