// crates/emojisplit/src/error.rs

use std::io;
use std::path::PathBuf;

use marker_index::IndexError;
use thiserror::Error;

/// Failures surfaced at the I/O boundary. The splitting engine itself never fails.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The marker index could not be read. Aborts the whole run.
    #[error("configuration unavailable: {0}")]
    ConfigurationUnavailable(#[from] IndexError),

    /// No index path was given and no home directory could be found.
    #[error("configuration unavailable: no marker index path (pass --index or set EMOJISPLIT_INDEX)")]
    IndexPathUnknown,

    /// The template could not be read or is not valid UTF-8.
    #[error("input unavailable: {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Single mode on a file without an extension would write over the template.
    #[error("refusing to overwrite input file {}", .0.display())]
    OutputWouldOverwriteInput(PathBuf),

    #[error("marker {0:?} cannot be used as a file extension")]
    UnusableMarkerName(String),
}
