//! Raster export of the drawing, cropped tightly around its content.
//!
//! The canvas is rendered with Cairo, cropped to the union of the shapes'
//! bounding boxes and encoded with the `image` crate.

pub mod crop;
pub mod file;

pub use crop::compute_crop_rect;
pub use file::{CanvasSettings, export_image, generate_filename, is_valid_template, render_to_image};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while exporting an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format '{0}' (expected png, jpg or gif)")]
    UnsupportedFormat(String),

    #[error("cannot export a {width}x{height} canvas")]
    EmptyCanvas { width: i32, height: i32 },

    #[error("Cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("failed to access rendered pixels: {0}")]
    SurfaceData(String),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid filename template '{0}'")]
    FilenameTemplate(String),
}

/// Raster formats supported for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Gif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpg, ExportFormat::Gif];

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Gif => "gif",
        }
    }

    /// Format for a file extension, case-insensitively. `jpeg` is accepted.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpg),
            "gif" => Some(ExportFormat::Gif),
            _ => None,
        }
    }

    /// Format implied by the extension of `path`, if it names a supported one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            ExportFormat::Png => image::ImageFormat::Png,
            ExportFormat::Jpg => image::ImageFormat::Jpeg,
            ExportFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}
