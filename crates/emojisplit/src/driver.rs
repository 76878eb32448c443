// crates/emojisplit/src/driver.rs

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use marker_index::MarkerIndex;
use region_splitter::RegionSplitter;
use tempfile::NamedTempFile;

use crate::config::{AppConfig, EmptyOutputPolicy, OutputMode};
use crate::error::SplitError;
use crate::output_path::{derive_output_path, SplitFileMode};

/// Trait that abstracts writing a finished output.
pub trait OutputWriter {
    /// Writes `contents` to `path` in one piece.
    fn write_output(&self, path: &Path, contents: &str) -> Result<(), SplitError>;
}

/// Writes through a temporary file in the destination directory, then renames
/// it into place, so a failed write never leaves a truncated output behind.
pub struct AtomicFileWriter;

impl OutputWriter for AtomicFileWriter {
    fn write_output(&self, path: &Path, contents: &str) -> Result<(), SplitError> {
        let fail = |source: std::io::Error| SplitError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
        tmp.write_all(contents.as_bytes()).map_err(fail)?;
        tmp.as_file().sync_all().map_err(fail)?;
        match fs::metadata(path) {
            Ok(existing) => tmp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(fail)?,
            Err(_) => set_default_permissions(tmp.as_file()).map_err(fail)?,
        }
        tmp.persist(path).map_err(|e| fail(e.error))?;
        Ok(())
    }
}

// Temporary files are created 0600; new outputs should look like any other file.
#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

/// Result of one successful invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    SkippedEmpty(PathBuf),
}

/// One invocation of the splitter for one selected marker.
#[derive(Debug)]
pub struct Invocation {
    pub marker: String,
    pub result: Result<Outcome, SplitError>,
}

/// Everything a run attempted, in the order it was attempted.
#[derive(Debug, Default)]
pub struct RunReport {
    pub invocations: Vec<Invocation>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.invocations.iter().all(|i| i.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Invocation> {
        self.invocations.iter().filter(|i| i.result.is_err())
    }

    /// Failure messages in order, each distinct message once.
    ///
    /// Split mode over an unreadable input fails the same way for every marker.
    pub fn distinct_failure_messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = Vec::new();
        for invocation in self.failures() {
            if let Err(err) = &invocation.result {
                let message = err.to_string();
                if messages.contains(&message) {
                    log::debug!("Marker {} repeated: {}", invocation.marker, message);
                } else {
                    messages.push(message);
                }
            }
        }
        messages
    }
}

/// Shared, read-only settings for every invocation in a run.
pub struct SplitContext<'a> {
    pub index: &'a MarkerIndex,
    pub wildcard: &'a str,
    pub empty_output: EmptyOutputPolicy,
    pub writer: &'a dyn OutputWriter,
}

/// Reads the template, keeps the regions for `selected` and writes the result.
///
/// Nothing is written if the input cannot be read, or if the result is empty
/// and the policy says to skip.
pub fn split_file(
    ctx: &SplitContext<'_>,
    infile: &Path,
    selected: &str,
    mode: SplitFileMode,
) -> Result<Outcome, SplitError> {
    let outfile = derive_output_path(infile, selected, mode)?;

    let text = fs::read_to_string(infile).map_err(|source| SplitError::InputUnavailable {
        path: infile.to_path_buf(),
        source,
    })?;

    let output = RegionSplitter::new(ctx.index, selected, ctx.wildcard).run(&text);
    log::debug!(
        "Marker {} kept {} of {} bytes from {}",
        selected,
        output.len(),
        text.len(),
        infile.display()
    );

    if output.is_empty() && ctx.empty_output == EmptyOutputPolicy::Skip {
        return Ok(Outcome::SkippedEmpty(outfile));
    }

    ctx.writer.write_output(&outfile, &output)?;
    Ok(Outcome::Written(outfile))
}

/// Runs single or split mode as configured. Every invocation is attempted;
/// a failure in one does not stop the others.
pub fn run(config: &AppConfig, index: &MarkerIndex, writer: &dyn OutputWriter) -> RunReport {
    let ctx = SplitContext {
        index,
        wildcard: &config.wildcard,
        empty_output: config.empty_output,
        writer,
    };

    let mut report = RunReport::default();
    match &config.mode {
        OutputMode::SelectedMarker(selected) => {
            if !index.contains(selected) && selected != &config.wildcard {
                log::warn!(
                    "Selected marker {} is not in the index; only wildcard sections will be kept",
                    selected
                );
            }
            let result = split_file(&ctx, &config.infile, selected, SplitFileMode::RemoveExtension);
            report.invocations.push(Invocation {
                marker: selected.clone(),
                result,
            });
        }
        OutputMode::EveryMarker => {
            if index.is_empty() {
                log::warn!("Marker index is empty; nothing to split");
            }
            for marker in index.iter() {
                let result = split_file(&ctx, &config.infile, marker, SplitFileMode::MarkerExtension);
                if let Err(err) = &result {
                    log::debug!("Marker {} failed: {}", marker, err);
                }
                report.invocations.push(Invocation {
                    marker: marker.to_string(),
                    result,
                });
            }
        }
    }
    report
}

/// Loads the index named by the configuration.
pub fn load_index(config: &AppConfig) -> Result<MarkerIndex, SplitError> {
    Ok(MarkerIndex::load(&config.index_path)?)
}
