use cairo::{Context, ImageSurface};
use vecdraw::draw::color::{BLUE, RED, WHITE};
use vecdraw::draw::{Color, Shape, ShapeKind, ShapeNamer, render_canvas, render_shape};
use vecdraw::util::Point;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Reads one pixel as (r, g, b) from an opaque ARGB32 surface.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8) {
    let stride = surface.stride();
    let data = surface.data().unwrap();
    let offset = (y * stride + x * 4) as usize;
    let argb = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    ((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
}

#[test]
fn every_kind_draws_pixels() {
    let mut namer = ShapeNamer::new();
    for kind in ShapeKind::ALL {
        let mut shape = Shape::starting_at(&mut namer, kind, Point::new(20, 20), RED, BLUE);
        shape.set_second_point(Point::new(35, 30));

        let (mut surface, ctx) = surface_with_context(60, 60);
        render_shape(&ctx, &shape, 2.0);
        drop(ctx);
        assert!(surface_has_pixels(&mut surface), "{kind} should draw pixels");
    }
}

#[test]
fn canvas_draws_background_shapes_then_preview() {
    let mut namer = ShapeNamer::new();
    let shapes = vec![Shape::filled_circle(
        &mut namer,
        Point::new(20, 20),
        10,
        RED,
        Color::new(0, 255, 0),
    )];
    let preview = Shape::filled_circle(&mut namer, Point::new(20, 20), 4, RED, BLUE);

    let (mut surface, ctx) = surface_with_context(60, 40);
    render_canvas(&ctx, WHITE, &shapes, Some(&preview), 1.0);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 55, 35), (255, 255, 255));
    assert_eq!(pixel(&mut surface, 27, 20), (0, 255, 0));
    // preview is painted over the document shapes
    assert_eq!(pixel(&mut surface, 20, 20), (0, 0, 255));
}

#[test]
fn zero_radius_circle_renders_without_error() {
    let mut namer = ShapeNamer::new();
    let dot = Shape::circle(&mut namer, Point::new(5, 5), 0, RED);
    let (mut surface, ctx) = surface_with_context(10, 10);
    render_canvas(&ctx, WHITE, [&dot], None, 1.0);
    drop(ctx);
    assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255));
}
