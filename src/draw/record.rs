//! Line-oriented text records for persisting shapes.
//!
//! One shape per line, whitespace separated, keyword first:
//!
//! ```text
//! LINE x0 y0 x1 y1 r g b
//! CIRCLE cx cy radius r g b
//! FCIRCLE cx cy radius r g b r2 g2 b2
//! ```
//!
//! Lines that do not match are skipped by [`parse_document`] rather than
//! failing the whole load.

use super::color::Color;
use super::shape::{Geometry, Shape, ShapeKind, ShapeNamer};
use crate::util::Point;
use log::debug;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a single record line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("unknown record keyword '{0}'")]
    UnknownKeyword(String),

    #[error("{keyword} record needs {expected} tokens, found {found}")]
    TokenCount {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("field {index} of {keyword} record is not a valid number: '{value}'")]
    InvalidNumber {
        keyword: &'static str,
        index: usize,
        value: String,
    },

    #[error("negative radius {0}")]
    NegativeRadius(i32),
}

/// Record keyword for a shape kind.
pub fn keyword(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "LINE",
        ShapeKind::Circle => "CIRCLE",
        ShapeKind::FilledCircle => "FCIRCLE",
    }
}

/// Total token count (keyword included) of a record of `kind`.
fn token_count(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Line => 8,
        ShapeKind::Circle => 7,
        ShapeKind::FilledCircle => 10,
    }
}

fn kind_for_keyword(token: &str) -> Option<ShapeKind> {
    ShapeKind::ALL.into_iter().find(|kind| keyword(*kind) == token)
}

impl Shape {
    /// Serialises the shape as one record line (no trailing newline).
    pub fn to_record(&self) -> String {
        let kw = keyword(self.kind());
        match *self.geometry() {
            Geometry::Line { start, end, color } => format!(
                "{kw} {} {} {} {} {}",
                start.x,
                start.y,
                end.x,
                end.y,
                rgb(color)
            ),
            Geometry::Circle {
                center,
                radius,
                color,
            } => format!("{kw} {} {} {radius} {}", center.x, center.y, rgb(color)),
            Geometry::FilledCircle {
                center,
                radius,
                color,
                fill,
            } => format!(
                "{kw} {} {} {radius} {} {}",
                center.x,
                center.y,
                rgb(color),
                rgb(fill)
            ),
        }
    }

    /// Parses one record line, allocating the new shape's name from `namer`.
    ///
    /// The namer is only advanced when parsing succeeds.
    pub fn from_record(line: &str, namer: &mut ShapeNamer) -> Result<Shape, ParseError> {
        let geometry = parse_geometry(line)?;
        Ok(Shape::new(namer, geometry))
    }
}

fn rgb(color: Color) -> String {
    format!("{} {} {}", color.r, color.g, color.b)
}

/// Parses the variant and field values of one record line.
pub fn parse_geometry(line: &str) -> Result<Geometry, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Err(ParseError::Empty);
    };
    let kind = kind_for_keyword(first).ok_or_else(|| ParseError::UnknownKeyword(first.to_string()))?;

    let fields = Fields {
        keyword: keyword(kind),
        tokens: &tokens,
    };
    if tokens.len() != token_count(kind) {
        return Err(ParseError::TokenCount {
            keyword: fields.keyword,
            expected: token_count(kind),
            found: tokens.len(),
        });
    }

    let geometry = match kind {
        ShapeKind::Line => Geometry::Line {
            start: fields.point(1)?,
            end: fields.point(3)?,
            color: fields.color(5)?,
        },
        ShapeKind::Circle => Geometry::Circle {
            center: fields.point(1)?,
            radius: fields.radius(3)?,
            color: fields.color(4)?,
        },
        ShapeKind::FilledCircle => Geometry::FilledCircle {
            center: fields.point(1)?,
            radius: fields.radius(3)?,
            color: fields.color(4)?,
            fill: fields.color(7)?,
        },
    };
    Ok(geometry)
}

struct Fields<'a> {
    keyword: &'static str,
    tokens: &'a [&'a str],
}

impl Fields<'_> {
    fn number<T: FromStr>(&self, index: usize) -> Result<T, ParseError> {
        let value = self.tokens[index];
        value.parse().map_err(|_| ParseError::InvalidNumber {
            keyword: self.keyword,
            index,
            value: value.to_string(),
        })
    }

    fn point(&self, index: usize) -> Result<Point, ParseError> {
        Ok(Point::new(self.number(index)?, self.number(index + 1)?))
    }

    fn radius(&self, index: usize) -> Result<i32, ParseError> {
        let radius: i32 = self.number(index)?;
        if radius < 0 {
            return Err(ParseError::NegativeRadius(radius));
        }
        Ok(radius)
    }

    fn color(&self, index: usize) -> Result<Color, ParseError> {
        Ok(Color::new(
            self.number(index)?,
            self.number(index + 1)?,
            self.number(index + 2)?,
        ))
    }
}

/// A line that was skipped while parsing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub error: ParseError,
}

/// Shapes recovered from a document plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct ParsedDocument {
    pub shapes: Vec<Shape>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a whole document, skipping malformed lines.
///
/// Blank lines are ignored silently; other mismatches are logged at debug
/// level and recorded in [`ParsedDocument::skipped`].
pub fn parse_document(text: &str, namer: &mut ShapeNamer) -> ParsedDocument {
    let mut parsed = ParsedDocument::default();
    for (index, line) in text.lines().enumerate() {
        match Shape::from_record(line, namer) {
            Ok(shape) => parsed.shapes.push(shape),
            Err(ParseError::Empty) => {}
            Err(error) => {
                debug!("Skipping record line {}: {}", index + 1, error);
                parsed.skipped.push(SkippedLine {
                    line: index + 1,
                    error,
                });
            }
        }
    }
    parsed
}

/// Serialises shapes in order, one record per line, joined with `\n`.
pub fn serialize<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> String {
    shapes
        .into_iter()
        .map(Shape::to_record)
        .collect::<Vec<_>>()
        .join("\n")
}
