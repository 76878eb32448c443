// crates/emojisplit/src/output_path.rs

use std::path::{is_separator, Path, PathBuf};

use crate::error::SplitError;

/// How an output file is named from its template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitFileMode {
    /// `template.conf` -> `template`
    RemoveExtension,
    /// `template.conf` -> `template.<marker>`
    MarkerExtension,
}

/// Derives where the output for `marker` goes.
///
/// Never returns the input path itself.
pub fn derive_output_path(
    infile: &Path,
    marker: &str,
    mode: SplitFileMode,
) -> Result<PathBuf, SplitError> {
    let outfile = match mode {
        SplitFileMode::RemoveExtension => infile.with_extension(""),
        SplitFileMode::MarkerExtension => {
            if marker.is_empty() || marker == "." || marker.chars().any(is_separator) {
                return Err(SplitError::UnusableMarkerName(marker.to_string()));
            }
            infile.with_extension(marker)
        }
    };

    if outfile == infile {
        return Err(SplitError::OutputWouldOverwriteInput(infile.to_path_buf()));
    }
    Ok(outfile)
}
