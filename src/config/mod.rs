//! Configuration file support for vecdraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/vecdraw/config.toml`. Settings cover the canvas, the initial
//! colors and tool, and image export defaults.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, ToolKind};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::export::{self, CanvasSettings};
use crate::input::{Palette, ToolSelection};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// foreground = [255, 128, 0]
/// fill = "yellow"
/// line_width = 2.0
/// default_tool = "filled-circle"
///
/// [export]
/// default_format = "png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial colors, stroke width and tool
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Image export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

const MIN_CANVAS_SIZE: i32 = 16;
const MAX_CANVAS_SIZE: i32 = 16384;

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 16 - 16384
    /// - `drawing.line_width`: 0.5 - 10.0
    fn validate_and_clamp(&mut self) {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to {}-{} range",
                self.canvas.width,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.width = self.canvas.width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height,
                MIN_CANVAS_SIZE,
                MAX_CANVAS_SIZE
            );
            self.canvas.height = self.canvas.height.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        // NaN fails the range check and clamps to the default width
        if !(0.5..=10.0).contains(&self.drawing.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-10.0 range",
                self.drawing.line_width
            );
            self.drawing.line_width = if self.drawing.line_width.is_nan() {
                1.0
            } else {
                self.drawing.line_width.clamp(0.5, 10.0)
            };
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, using default");
            self.export.filename_template = ExportConfig::default().filename_template;
        } else if !export::is_valid_template(&self.export.filename_template) {
            log::warn!(
                "Invalid export filename_template '{}', using default",
                self.export.filename_template
            );
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vecdraw/config.toml`
    /// (`$XDG_CONFIG_HOME` is honoured).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vecdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Saves the current configuration to the default path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Canvas parameters for rendering and export.
    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color(),
            line_width: self.drawing.line_width,
        }
    }

    /// Initial foreground/background color areas.
    pub fn palette(&self) -> Palette {
        Palette::new(
            self.drawing.foreground.to_color(),
            self.drawing.fill.to_color(),
        )
    }

    /// Initial tool selection.
    pub fn tool_selection(&self) -> ToolSelection {
        ToolSelection::new(self.drawing.default_tool.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use crate::draw::ShapeKind;
    use crate::export::ExportFormat;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.drawing.line_width, 1.0);
        assert_eq!(config.drawing.default_tool, None);
        assert_eq!(config.export.default_format, ExportFormat::Png);
        assert_eq!(config.export.filename_template, "drawing_%Y-%m-%d_%H%M%S");
        assert_eq!(config.palette().foreground.current(), Color::new(0, 0, 0));
        assert_eq!(config.palette().background.current(), Color::new(255, 255, 255));
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml(
            r#"
[canvas]
width = 320
background = [10, 20, 30]

[drawing]
foreground = "orange"
default_tool = "filled-circle"

[export]
default_format = "gif"
"#,
        )
        .unwrap();
        let canvas = config.canvas_settings();
        assert_eq!((canvas.width, canvas.height), (320, 600));
        assert_eq!(canvas.background, Color::new(10, 20, 30));
        assert_eq!(config.palette().foreground.current(), Color::new(255, 128, 0));
        assert_eq!(config.tool_selection().current(), Some(ShapeKind::FilledCircle));
        assert_eq!(config.export.default_format, ExportFormat::Gif);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
[canvas]
width = 2
height = 100000

[drawing]
line_width = 42.0
"#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 16384);
        assert_eq!(config.drawing.line_width, 10.0);
    }

    #[test]
    fn invalid_filename_template_falls_back_to_default() {
        let mut config = Config::from_toml("[export]\nfilename_template = \"x_%Q\"\n").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.export.filename_template, "drawing_%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_toml(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = 3").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("canvas").is_some());
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("export").is_some());
    }
}
