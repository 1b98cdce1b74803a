//! Configuration enum types.

use crate::draw::{Color, ShapeKind, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool preselected at startup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Straight line between two clicks
    Line,
    /// Circle outline from center to rim
    Circle,
    /// Circle filled with the background color
    FilledCircle,
}

impl From<ToolKind> for ShapeKind {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Line => ShapeKind::Line,
            ToolKind::Circle => ShapeKind::Circle,
            ToolKind::FilledCircle => ShapeKind::FilledCircle,
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// foreground = "red"
///
/// # Custom RGB color (0-255 per component)
/// foreground = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_accepts_names_and_arrays() {
        assert_eq!(ColorSpec::Name("Pink".into()).to_color(), PINK);
        assert_eq!(ColorSpec::Rgb([1, 2, 3]).to_color(), Color::new(1, 2, 3));
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), BLACK);
    }
}
