//! Edit payloads: the editable fields of a shape as presented to an edit dialog.
//!
//! Coordinates and radii travel as free text and are validated only when the
//! payload is applied. Colors arrive already validated from a color picker.

use super::color::Color;
use super::shape::{Geometry, Shape, ShapeKind};
use crate::util::Point;
use thiserror::Error;

/// Reasons an edit payload is rejected. A rejected edit mutates nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("radius must not be negative, got {0}")]
    NegativeRadius(i32),

    #[error("cannot apply a {payload} edit to a {shape}")]
    KindMismatch { shape: ShapeKind, payload: ShapeKind },

    #[error("{kind} has no field named '{field}'")]
    UnknownField { kind: ShapeKind, field: String },

    #[error(transparent)]
    InvalidColor(#[from] super::color::ColorParseError),
}

/// Editable fields of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub start_x: String,
    pub start_y: String,
    pub end_x: String,
    pub end_y: String,
    pub color: Color,
}

/// Editable fields of a circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleEdit {
    pub center_x: String,
    pub center_y: String,
    pub radius: String,
    pub stroke_color: Color,
}

/// Editable fields of a filled circle: the circle fields plus the fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledCircleEdit {
    pub circle: CircleEdit,
    pub fill_color: Color,
}

/// Variant-matched edit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPayload {
    Line(LineEdit),
    Circle(CircleEdit),
    FilledCircle(FilledCircleEdit),
}

impl EditPayload {
    pub fn kind(&self) -> ShapeKind {
        match self {
            EditPayload::Line(_) => ShapeKind::Line,
            EditPayload::Circle(_) => ShapeKind::Circle,
            EditPayload::FilledCircle(_) => ShapeKind::FilledCircle,
        }
    }

    /// Field names accepted by [`EditPayload::set`], in dialog order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            EditPayload::Line(_) => &["startX", "startY", "endX", "endY", "color"],
            EditPayload::Circle(_) => &["centerX", "centerY", "radius", "strokeColor"],
            EditPayload::FilledCircle(_) => {
                &["centerX", "centerY", "radius", "strokeColor", "fillColor"]
            }
        }
    }

    /// Sets one field by name. Text fields are stored verbatim; color fields
    /// must parse as a color name or `r,g,b`.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        let kind = self.kind();
        let unknown = || ValidationError::UnknownField {
            kind,
            field: field.to_string(),
        };
        match self {
            EditPayload::Line(edit) => match field {
                "startX" => edit.start_x = value.to_string(),
                "startY" => edit.start_y = value.to_string(),
                "endX" => edit.end_x = value.to_string(),
                "endY" => edit.end_y = value.to_string(),
                "color" => edit.color = value.parse()?,
                _ => return Err(unknown()),
            },
            EditPayload::Circle(edit) => {
                if !edit.set(field, value)? {
                    return Err(unknown());
                }
            }
            EditPayload::FilledCircle(edit) => {
                if field == "fillColor" {
                    edit.fill_color = value.parse()?;
                } else if !edit.circle.set(field, value)? {
                    return Err(unknown());
                }
            }
        }
        Ok(())
    }
}

impl CircleEdit {
    fn set(&mut self, field: &str, value: &str) -> Result<bool, ValidationError> {
        match field {
            "centerX" => self.center_x = value.to_string(),
            "centerY" => self.center_y = value.to_string(),
            "radius" => self.radius = value.to_string(),
            "strokeColor" => self.stroke_color = value.parse()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn validate(&self) -> Result<(Point, i32), ValidationError> {
        let center = Point::new(
            parse_int("centerX", &self.center_x)?,
            parse_int("centerY", &self.center_y)?,
        );
        let radius = parse_int("radius", &self.radius)?;
        if radius < 0 {
            return Err(ValidationError::NegativeRadius(radius));
        }
        Ok((center, radius))
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

impl Shape {
    /// Builds an edit payload from the shape's current fields.
    pub fn describe_editable_fields(&self) -> EditPayload {
        match *self.geometry() {
            Geometry::Line { start, end, color } => EditPayload::Line(LineEdit {
                start_x: start.x.to_string(),
                start_y: start.y.to_string(),
                end_x: end.x.to_string(),
                end_y: end.y.to_string(),
                color,
            }),
            Geometry::Circle {
                center,
                radius,
                color,
            } => EditPayload::Circle(circle_edit(center, radius, color)),
            Geometry::FilledCircle {
                center,
                radius,
                color,
                fill,
            } => EditPayload::FilledCircle(FilledCircleEdit {
                circle: circle_edit(center, radius, color),
                fill_color: fill,
            }),
        }
    }

    /// Applies an edit payload atomically.
    ///
    /// Every field is validated before anything is written; on error the shape
    /// is left exactly as it was.
    pub fn apply_edit(&mut self, payload: &EditPayload) -> Result<(), ValidationError> {
        let geometry = match payload {
            EditPayload::Line(edit) => Geometry::Line {
                start: Point::new(
                    parse_int("startX", &edit.start_x)?,
                    parse_int("startY", &edit.start_y)?,
                ),
                end: Point::new(
                    parse_int("endX", &edit.end_x)?,
                    parse_int("endY", &edit.end_y)?,
                ),
                color: edit.color,
            },
            EditPayload::Circle(edit) => {
                let (center, radius) = edit.validate()?;
                Geometry::Circle {
                    center,
                    radius,
                    color: edit.stroke_color,
                }
            }
            EditPayload::FilledCircle(edit) => {
                let (center, radius) = edit.circle.validate()?;
                Geometry::FilledCircle {
                    center,
                    radius,
                    color: edit.circle.stroke_color,
                    fill: edit.fill_color,
                }
            }
        };

        if geometry.kind() != self.kind() {
            return Err(ValidationError::KindMismatch {
                shape: self.kind(),
                payload: payload.kind(),
            });
        }

        self.set_geometry(geometry);
        Ok(())
    }
}

fn circle_edit(center: Point, radius: i32, color: Color) -> CircleEdit {
    CircleEdit {
        center_x: center.x.to_string(),
        center_y: center.y.to_string(),
        radius: radius.to_string(),
        stroke_color: color,
    }
}
