//! Rasterising the canvas and writing image files.

use super::crop::compute_crop_rect;
use super::{ExportError, ExportFormat};
use crate::draw::{Color, Shape, render_canvas};
use crate::util::Rect;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use image::{DynamicImage, RgbaImage};
use log::{info, warn};
use std::fmt::Write;
use std::path::Path;

/// Canvas parameters needed to rasterise a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    pub line_width: f64,
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - Target image format, which supplies the extension
///
/// # Errors
/// Returns [`ExportError::FilenameTemplate`] when `template` contains an
/// unknown format specifier.
pub fn generate_filename(template: &str, format: ExportFormat) -> Result<String, ExportError> {
    if !is_valid_template(template) {
        return Err(ExportError::FilenameTemplate(template.to_string()));
    }
    let mut name = String::new();
    write!(name, "{}.{}", Local::now().format(template), format.extension())
        .map_err(|_| ExportError::FilenameTemplate(template.to_string()))?;
    Ok(name)
}

/// Whether every specifier in `template` is one chrono can format.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Renders the full canvas (background plus shapes) into an RGBA image.
pub fn render_to_image(shapes: &[Shape], canvas: &CanvasSettings) -> Result<RgbaImage, ExportError> {
    if canvas.width <= 0 || canvas.height <= 0 {
        return Err(ExportError::EmptyCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let mut surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, canvas.width, canvas.height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_canvas(&ctx, canvas.background, shapes, None, canvas.line_width);
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let (width, height) = (canvas.width as u32, canvas.height as u32);
    let data = surface
        .data()
        .map_err(|err| ExportError::SurfaceData(err.to_string()))?;

    let mut image = RgbaImage::new(width, height);
    for (y, row) in data.chunks(stride).take(height as usize).enumerate() {
        for (x, px) in row.chunks_exact(4).take(width as usize).enumerate() {
            let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            image.put_pixel(x as u32, y as u32, unpremultiply(argb));
        }
    }
    Ok(image)
}

/// Converts one premultiplied Cairo ARGB32 pixel to straight RGBA.
fn unpremultiply(argb: u32) -> image::Rgba<u8> {
    let a = (argb >> 24) as u8;
    let channel = |shift: u32| {
        let c = (argb >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((c * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
        }
    };
    image::Rgba([channel(16), channel(8), channel(0), a])
}

/// Pixel region to keep from a full-canvas render.
///
/// Degenerate extents are widened to one pixel. A region starting beyond the
/// canvas is unusable and yields `None` (export the whole canvas).
fn crop_region(rect: Rect, width: i32, height: i32) -> Option<(u32, u32, u32, u32)> {
    if rect.x >= width || rect.y >= height {
        warn!(
            "Crop rectangle {:?} lies outside the {}x{} canvas; exporting full canvas",
            rect, width, height
        );
        return None;
    }
    let w = rect.width.max(1).min(width - rect.x);
    let h = rect.height.max(1).min(height - rect.y);
    Some((rect.x as u32, rect.y as u32, w as u32, h as u32))
}

/// Renders `shapes`, crops to their bounding rectangle and writes `path`.
///
/// Returns the dimensions of the written image. A failed write may leave a
/// partial file behind.
pub fn export_image(
    shapes: &[Shape],
    canvas: &CanvasSettings,
    path: &Path,
    format: ExportFormat,
) -> Result<(u32, u32), ExportError> {
    let full = render_to_image(shapes, canvas)?;

    let image = match compute_crop_rect(shapes, canvas.width, canvas.height)
        .and_then(|rect| crop_region(rect, canvas.width, canvas.height))
    {
        Some((x, y, w, h)) => image::imageops::crop_imm(&full, x, y, w, h).to_image(),
        None => full,
    };

    let (width, height) = image.dimensions();
    DynamicImage::ImageRgba8(image)
        .to_rgb8()
        .save_with_format(path, format.image_format())?;

    info!(
        "Exported {}x{} {} image to {}",
        width,
        height,
        format.extension(),
        path.display()
    );
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeNamer;
    use crate::draw::color::{BLUE, RED, WHITE};
    use crate::util::Point;

    fn canvas(width: i32, height: i32) -> CanvasSettings {
        CanvasSettings {
            width,
            height,
            background: WHITE,
            line_width: 1.0,
        }
    }

    #[test]
    fn filled_circle_interior_uses_fill_color() {
        let mut namer = ShapeNamer::new();
        let shapes = vec![Shape::filled_circle(
            &mut namer,
            Point::new(20, 20),
            10,
            RED,
            BLUE,
        )];
        let image = render_to_image(&shapes, &canvas(40, 40)).unwrap();
        assert_eq!(image.get_pixel(20, 20), &image::Rgba([0, 0, 255, 255]));
        assert_eq!(image.get_pixel(0, 0), &image::Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let err = render_to_image(&[], &canvas(0, 10)).unwrap_err();
        assert!(matches!(err, ExportError::EmptyCanvas { .. }));
    }

    #[test]
    fn export_crops_to_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circle.png");
        let mut namer = ShapeNamer::new();
        let shapes = vec![Shape::circle(&mut namer, Point::new(50, 50), 10, RED)];

        let size = export_image(&shapes, &canvas(100, 100), &path, ExportFormat::Png).unwrap();
        assert_eq!(size, (20, 20));
        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (20, 20));
    }

    #[test]
    fn export_without_shapes_writes_full_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.jpg");
        let size = export_image(&[], &canvas(30, 12), &path, ExportFormat::Jpg).unwrap();
        assert_eq!(size, (30, 12));
        assert!(path.exists());
    }

    #[test]
    fn degenerate_and_outside_regions() {
        assert_eq!(
            crop_region(Rect::new(10, 40, 50, 0), 100, 100),
            Some((10, 40, 50, 1))
        );
        assert_eq!(crop_region(Rect::new(100, 5, 0, 10), 100, 100), None);
    }

    #[test]
    fn filename_uses_format_extension() {
        let name = generate_filename("drawing", ExportFormat::Gif).unwrap();
        assert_eq!(name, "drawing.gif");
    }

    #[test]
    fn unknown_specifier_is_an_error_not_a_panic() {
        assert!(!is_valid_template("x_%Q"));
        assert!(is_valid_template("drawing_%Y-%m-%d_%H%M%S"));
        let err = generate_filename("x_%Q", ExportFormat::Png).unwrap_err();
        assert!(matches!(err, ExportError::FilenameTemplate(ref t) if t == "x_%Q"));
    }
}
