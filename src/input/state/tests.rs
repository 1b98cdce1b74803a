use super::*;
use crate::document::{DocumentListener, DrawingDocument, IndexRange};
use crate::draw::color::{BLUE, RED, WHITE, YELLOW};
use crate::draw::{Geometry, ShapeKind};
use crate::input::colors::Palette;
use crate::input::tool::ToolSelection;
use crate::input::{Key, MouseButton};
use crate::util::Point;
use std::cell::RefCell;
use std::rc::Rc;

fn controller_with(kind: Option<ShapeKind>) -> InteractionController {
    InteractionController::new(ToolSelection::new(kind), Palette::new(RED, YELLOW))
}

#[derive(Default)]
struct AddCounter(usize);

impl DocumentListener for AddCounter {
    fn shapes_added(&mut self, _document: &DrawingDocument, _range: IndexRange) {
        self.0 += 1;
    }
    fn shapes_removed(&mut self, _document: &DrawingDocument, _range: IndexRange) {}
    fn shapes_changed(&mut self, _document: &DrawingDocument, _range: IndexRange) {}
}

#[test]
fn two_clicks_create_a_line() {
    let mut controller = controller_with(Some(ShapeKind::Line));
    let mut document = DrawingDocument::new();
    let counter = Rc::new(RefCell::new(AddCounter::default()));
    document.add_listener(&counter);

    controller.on_mouse_press(MouseButton::Left, Point::new(10, 10), &mut document);
    assert!(controller.is_drawing());
    assert!(controller.needs_redraw);
    assert!(document.is_empty());

    controller.needs_redraw = false;
    controller.on_mouse_motion(Point::new(20, 15));
    assert!(controller.needs_redraw);
    controller.on_mouse_motion(Point::new(30, 40));
    assert!(document.is_empty(), "preview must stay out of the document");
    assert_eq!(counter.borrow().0, 0);

    controller.on_mouse_press(MouseButton::Left, Point::new(99, 99), &mut document);
    assert!(!controller.is_drawing());
    assert!(controller.preview().is_none());
    assert_eq!(document.size(), 1);
    assert_eq!(counter.borrow().0, 1);
    // the committed shape keeps the last motion point, not the click point
    assert_eq!(
        *document.get(0).unwrap().geometry(),
        Geometry::Line {
            start: Point::new(10, 10),
            end: Point::new(30, 40),
            color: RED,
        }
    );
}

#[test]
fn filled_circle_takes_stroke_and_fill_from_palette() {
    let mut controller = controller_with(Some(ShapeKind::FilledCircle));
    let mut document = DrawingDocument::new();

    controller.on_mouse_press(MouseButton::Left, Point::new(0, 0), &mut document);
    controller.on_mouse_motion(Point::new(3, 4));
    controller.on_mouse_press(MouseButton::Left, Point::new(3, 4), &mut document);

    assert_eq!(
        *document.get(0).unwrap().geometry(),
        Geometry::FilledCircle {
            center: Point::new(0, 0),
            radius: 5,
            color: RED,
            fill: YELLOW,
        }
    );
}

#[test]
fn press_without_tool_is_ignored() {
    let mut controller = controller_with(None);
    let mut document = DrawingDocument::new();

    controller.on_mouse_press(MouseButton::Left, Point::new(5, 5), &mut document);
    assert!(!controller.is_drawing());
    assert!(!controller.needs_redraw);

    controller.on_mouse_motion(Point::new(6, 6));
    assert!(!controller.needs_redraw);
    assert!(document.is_empty());
}

#[test]
fn motion_while_idle_does_nothing() {
    let mut controller = controller_with(Some(ShapeKind::Circle));
    controller.on_mouse_motion(Point::new(1, 1));
    assert!(!controller.needs_redraw);
    assert!(controller.preview().is_none());
}

#[test]
fn preview_tracks_pointer() {
    let mut controller = controller_with(Some(ShapeKind::Circle));
    let mut document = DrawingDocument::new();
    controller.on_mouse_press(MouseButton::Left, Point::new(50, 50), &mut document);

    controller.on_mouse_motion(Point::new(60, 50));
    let preview = controller.preview().unwrap();
    assert_eq!(preview.bounding_box(), crate::util::Rect::new(40, 40, 20, 20));
}

#[test]
fn escape_and_right_click_cancel_the_gesture() {
    let mut document = DrawingDocument::new();

    let mut controller = controller_with(Some(ShapeKind::Line));
    controller.on_mouse_press(MouseButton::Left, Point::new(1, 1), &mut document);
    controller.on_key_press(Key::Escape);
    assert!(!controller.is_drawing());

    controller.on_mouse_press(MouseButton::Left, Point::new(1, 1), &mut document);
    controller.on_mouse_press(MouseButton::Right, Point::new(2, 2), &mut document);
    assert!(!controller.is_drawing());
    assert!(document.is_empty());
    assert!(!document.is_modified());
}

#[test]
fn tool_change_mid_gesture_affects_next_gesture_only() {
    let mut controller = controller_with(Some(ShapeKind::Line));
    let mut document = DrawingDocument::new();

    controller.on_mouse_press(MouseButton::Left, Point::new(0, 0), &mut document);
    controller.select_tool(Some(ShapeKind::Circle));
    controller.palette.foreground.select(BLUE);
    controller.on_mouse_press(MouseButton::Left, Point::new(4, 4), &mut document);
    assert_eq!(document.get(0).unwrap().kind(), ShapeKind::Line);
    assert!(matches!(
        document.get(0).unwrap().geometry(),
        Geometry::Line { color: RED, .. }
    ));

    controller.on_mouse_press(MouseButton::Left, Point::new(0, 0), &mut document);
    controller.on_mouse_press(MouseButton::Left, Point::new(0, 0), &mut document);
    assert_eq!(document.get(1).unwrap().kind(), ShapeKind::Circle);
    assert!(matches!(
        document.get(1).unwrap().geometry(),
        Geometry::Circle { color: BLUE, .. }
    ));
}

#[test]
fn delete_key_removes_selected_entry() {
    let mut document = DrawingDocument::new();
    let first = crate::draw::Shape::line(
        document.namer_mut(),
        Point::new(0, 0),
        Point::new(1, 1),
        RED,
    );
    let second =
        crate::draw::Shape::circle(document.namer_mut(), Point::new(0, 0), 2, WHITE);
    document.add(first.clone());
    document.add(second.clone());

    let mut selection = ListSelection::default();
    assert!(selection.on_key_press(Key::Delete, &mut document).is_none());

    selection.select(Some(1));
    assert!(selection.on_key_press(Key::Escape, &mut document).is_none());
    assert_eq!(selection.on_key_press(Key::Delete, &mut document), Some(second));
    assert_eq!(document.shapes(), &[first]);
    assert_eq!(selection.selected(), None);

    selection.select(Some(7));
    assert!(selection.on_key_press(Key::Delete, &mut document).is_none());
    assert_eq!(document.size(), 1);
}

#[test]
fn pending_edit_stays_open_on_invalid_input() {
    let mut document = DrawingDocument::new();
    let circle =
        crate::draw::Shape::circle(document.namer_mut(), Point::new(5, 5), 2, RED);
    document.add(circle.clone());
    document.clear_modified();

    let mut selection = ListSelection::default();
    assert!(selection.activate(&document).is_none());
    selection.select(Some(0));

    let mut edit = selection.activate(&document).unwrap();
    assert_eq!(edit.target(), &circle);
    edit.set("radius", "big").unwrap();
    assert!(edit.confirm(&mut document).is_err());
    assert!(!document.is_modified());

    edit.set("radius", "9").unwrap();
    assert_eq!(edit.confirm(&mut document), Ok(true));
    assert!(matches!(
        document.get(0).unwrap().geometry(),
        Geometry::Circle { radius: 9, .. }
    ));
}
