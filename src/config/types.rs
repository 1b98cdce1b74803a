//! Configuration type definitions.

use super::enums::{ColorSpec, ToolKind};
use crate::export::ExportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// The canvas size is also the frame that exported images are cropped within.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color painted beneath all shapes
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Initial state of the color areas and tool selection when the editor starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial foreground (stroke) color - either a named color (red, green, blue,
    /// yellow, orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_foreground")]
    pub foreground: ColorSpec,

    /// Initial background color, used as the fill of filled circles
    #[serde(default = "default_fill")]
    pub fill: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 10.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Tool selected at startup; none means the user must pick one first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tool: Option<ToolKind>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            fill: default_fill(),
            line_width: default_line_width(),
            default_tool: None,
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Format used when the target path has no recognised extension
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Filename template for exports without an explicit path
    /// (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::default(),
            filename_template: default_filename_template(),
        }
    }
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_foreground() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_line_width() -> f64 {
    1.0
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
