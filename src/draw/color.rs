//! RGB color type and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque RGB color with 8-bit components.
///
/// The component type makes the `[0, 255]` range an invariant of the type.
///
/// # Examples
///
/// ```
/// use vecdraw::draw::Color;
/// let orange = Color::new(255, 128, 0);
/// assert_eq!(orange.to_string(), "(255, 128, 0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0-1.0 for Cairo.
    pub fn to_cairo(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(self, ctx: &cairo::Context) {
        let (r, g, b) = self.to_cairo();
        ctx.set_source_rgb(r, g, b);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error returned when a color string is neither a known name nor `r,g,b`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color '{0}': expected a color name or r,g,b")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts a predefined color name or three comma separated components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = name_to_color(s) {
            return Ok(color);
        }
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if let [r, g, b] = parts.as_slice()
            && let (Ok(r), Ok(g), Ok(b)) = (r.parse(), g.parse(), b.parse())
        {
            return Ok(Color::new(r, g, b));
        }
        Err(ColorParseError(s.to_string()))
    }
}

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const ORANGE: Color = Color::new(255, 128, 0);
pub const PINK: Color = Color::new(255, 0, 255);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_components() {
        assert_eq!("Red".parse::<Color>().unwrap(), RED);
        assert_eq!("10, 20,30".parse::<Color>().unwrap(), Color::new(10, 20, 30));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!("256,0,0".parse::<Color>().is_err());
        assert!("-1,0,0".parse::<Color>().is_err());
        assert!("1,2".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn cairo_components_are_normalised() {
        let (r, g, b) = ORANGE.to_cairo();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(b, 0.0);
    }
}
