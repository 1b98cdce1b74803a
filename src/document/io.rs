//! Reading and writing documents as text records.

use super::DrawingDocument;
use crate::draw::{SkippedLine, parse_document, serialize};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension used for saved drawings.
pub const DRAWING_EXTENSION: &str = "jvd";

/// I/O failures while persisting a document. The in-memory document is never
/// altered by a failed operation.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read drawing {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write drawing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl DrawingDocument {
    /// Writes every shape to `path` and clears the modified flag.
    ///
    /// The records go to a sibling temporary file which is then renamed over
    /// `path`, so a failed save leaves any previous file intact. On error the
    /// modified flag is left as it was.
    pub fn save_to_path(&mut self, path: &Path) -> Result<(), DocumentError> {
        let text = serialize(self.shapes());
        write_atomically(path, text.as_bytes()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.clear_modified();
        info!("Saved {} shapes to {}", self.size(), path.display());
        Ok(())
    }

    /// Replaces the contents with the records in `path`.
    ///
    /// The file is read in full before the document is touched. Lines that are
    /// not valid records are skipped. Afterwards the document is unmodified.
    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadReport, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = parse_document(&text, self.namer_mut());
        let report = LoadReport {
            loaded: parsed.shapes.len(),
            skipped: parsed.skipped,
        };
        self.load_all(parsed.shapes);
        self.clear_modified();

        if report.skipped.is_empty() {
            info!("Loaded {} shapes from {}", report.loaded, path.display());
        } else {
            info!(
                "Loaded {} shapes from {} ({} lines skipped)",
                report.loaded,
                path.display(),
                report.skipped.len()
            );
        }
        Ok(report)
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path(path);
    let result = (|| {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)?;
        tmp_file.write_all(bytes)?;
        tmp_file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err()
        && tmp_path.exists()
        && let Err(err) = fs::remove_file(&tmp_path)
    {
        warn!(
            "Failed to remove temporary file {}: {}",
            tmp_path.display(),
            err
        );
    }
    result
}

fn temp_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "drawing".to_string());
    let mut candidate = target.with_file_name(format!(".{file_name}.tmp"));
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_file_name(format!(".{file_name}.tmp{counter}"));
    }
    candidate
}
