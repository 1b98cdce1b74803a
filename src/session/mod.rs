//! Editor session: one open drawing and the file it belongs to.
//!
//! Ties the document to its current path and the configured canvas, and
//! implements the open, save, save-as, export and exit-check flows that the
//! menus and the CLI drive.

use crate::config::Config;
use crate::document::{DRAWING_EXTENSION, DocumentError, DrawingDocument, LoadReport};
use crate::export::{self, ExportError, ExportFormat};
use crate::input::InteractionController;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;


/// Errors surfaced to the user by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the drawing has not been saved before; a file path is required")]
    PathRequired,

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// One open drawing.
#[derive(Debug)]
pub struct EditorSession {
    config: Config,
    document: DrawingDocument,
    path: Option<PathBuf>,
}

impl EditorSession {
    /// Empty, unsaved drawing.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            document: DrawingDocument::new(),
            path: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &DrawingDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut DrawingDocument {
        &mut self.document
    }

    /// File the drawing was last opened from or saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Interaction controller seeded with the configured tool and colors.
    pub fn controller(&self) -> InteractionController {
        InteractionController::new(self.config.tool_selection(), self.config.palette())
    }

    /// Replaces the drawing with the contents of `path`.
    ///
    /// On failure both the document and the current path are unchanged.
    pub fn open(&mut self, path: &Path) -> Result<LoadReport, SessionError> {
        let report = self.document.load_from_path(path)?;
        self.path = Some(path.to_path_buf());
        Ok(report)
    }

    /// Saves to the current path.
    pub fn save(&mut self) -> Result<PathBuf, SessionError> {
        let path = self.path.clone().ok_or(SessionError::PathRequired)?;
        self.document.save_to_path(&path)?;
        Ok(path)
    }

    /// Saves to `path` (with `.jvd` appended when missing) and makes it current.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf, SessionError> {
        let path = with_drawing_extension(path);
        self.document.save_to_path(&path)?;
        self.path = Some(path.clone());
        Ok(path)
    }

    /// Whether closing the drawing now would lose changes.
    pub fn needs_save_prompt(&self) -> bool {
        self.document.is_modified()
    }

    /// Exports the drawing as a cropped raster image.
    ///
    /// The format follows the extension of `target`; a missing or unknown
    /// extension gets the configured default format appended. Without a target
    /// a name is generated from the configured filename template.
    pub fn export(&self, target: Option<&Path>) -> Result<PathBuf, SessionError> {
        let default_format = self.config.export.default_format;
        let (path, format) = match target {
            Some(target) => resolve_export_path(target, default_format),
            None => {
                let name =
                    export::generate_filename(&self.config.export.filename_template, default_format)?;
                (PathBuf::from(name), default_format)
            }
        };
        export::export_image(
            self.document.shapes(),
            &self.config.canvas_settings(),
            &path,
            format,
        )?;
        Ok(path)
    }
}

/// Appends the drawing extension unless `path` already ends with it.
pub fn with_drawing_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DRAWING_EXTENSION));
    if has_extension {
        path.to_path_buf()
    } else {
        append_extension(path, DRAWING_EXTENSION)
    }
}

/// Export path and format for a user supplied target.
pub fn resolve_export_path(target: &Path, default_format: ExportFormat) -> (PathBuf, ExportFormat) {
    match ExportFormat::from_path(target) {
        Some(format) => (target.to_path_buf(), format),
        None => (
            append_extension(target, default_format.extension()),
            default_format,
        ),
    }
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
