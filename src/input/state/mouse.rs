use crate::document::DrawingDocument;
use crate::draw::Shape;
use crate::input::events::MouseButton;
use crate::util::Point;
use log::debug;

use super::{DrawingState, InteractionController};

impl InteractionController {
    /// Processes a mouse button press.
    ///
    /// # Behavior
    /// - Left press while Idle with a tool selected: starts a shape at `point`
    ///   using the current foreground (stroke) and background (fill) colors
    /// - Left press while Idle with no tool: ignored
    /// - Left press while Drawing: commits the shape to `document`
    /// - Right press: cancels the current gesture
    pub fn on_mouse_press(
        &mut self,
        button: MouseButton,
        point: Point,
        document: &mut DrawingDocument,
    ) {
        match button {
            MouseButton::Left => match std::mem::take(&mut self.state) {
                DrawingState::Idle => {
                    let Some(kind) = self.tools.current() else {
                        debug!("Ignoring press at {:?}: no tool selected", point);
                        return;
                    };
                    let shape = Shape::starting_at(
                        document.namer_mut(),
                        kind,
                        point,
                        self.palette.foreground.current(),
                        self.palette.background.current(),
                    );
                    debug!("Started {} at {:?}", shape, point);
                    self.state = DrawingState::Drawing { shape };
                    self.needs_redraw = true;
                }
                DrawingState::Drawing { shape } => {
                    document.add(shape);
                    self.needs_redraw = true;
                }
            },
            MouseButton::Right => {
                self.cancel();
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion (with or without a button held).
    ///
    /// While drawing, the pointer position becomes the shape's free parameter
    /// and a redraw is requested for the live preview.
    pub fn on_mouse_motion(&mut self, point: Point) {
        if let DrawingState::Drawing { shape } = &mut self.state {
            shape.set_second_point(point);
            self.needs_redraw = true;
        }
    }
}
