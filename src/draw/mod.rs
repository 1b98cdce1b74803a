//! Shape model and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: 8-bit RGB color with predefined constants
//! - [`Shape`]: lines, circles and filled circles with stable display names
//! - [`EditPayload`]: the per-kind editable fields of a shape
//! - text records for persisting shapes, one per line
//! - rendering functions for Cairo-based output

pub mod color;
pub mod edit;
pub mod record;
pub mod render;
pub mod shape;

pub use color::Color;
pub use edit::{CircleEdit, EditPayload, FilledCircleEdit, LineEdit, ValidationError};
pub use record::{ParseError, ParsedDocument, SkippedLine, parse_document, serialize};
pub use render::{render_canvas, render_shape, render_shapes};
pub use shape::{Geometry, Shape, ShapeKind, ShapeName, ShapeNamer};
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
