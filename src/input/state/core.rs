use crate::draw::{Shape, ShapeKind};
use crate::input::colors::Palette;
use crate::input::tool::ToolSelection;

/// Current gesture state.
///
/// The first press creates the shape under construction; the second commits it
/// to the document.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Waiting for the first press of a gesture
    #[default]
    Idle,
    /// Between the two presses; `shape` is the live preview
    Drawing {
        /// Not yet part of any document
        shape: Shape,
    },
}

/// Turns pointer and key events into shape creation.
///
/// Owns the tool selection and the palette whose colors new shapes take, plus
/// the transient shape under construction. The document is borrowed per event.
#[derive(Debug)]
pub struct InteractionController {
    /// Shape kind created by the next gesture
    pub tools: ToolSelection,
    /// Foreground (stroke) and background (fill) color selections
    pub palette: Palette,
    /// Current gesture state
    pub state: DrawingState,
    /// Whether the canvas needs to be redrawn
    pub needs_redraw: bool,
}

impl InteractionController {
    pub fn new(tools: ToolSelection, palette: Palette) -> Self {
        Self {
            tools,
            palette,
            state: DrawingState::Idle,
            needs_redraw: false,
        }
    }

    /// Selects the kind created by the next gesture.
    ///
    /// A gesture already in progress keeps the kind it started with.
    pub fn select_tool(&mut self, kind: Option<ShapeKind>) {
        match kind {
            Some(kind) => self.tools.select(kind),
            None => self.tools.deselect(),
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// The in-progress shape, which the canvas draws on top of the document.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.state {
            DrawingState::Drawing { shape } => Some(shape),
            DrawingState::Idle => None,
        }
    }

    /// Drops any in-progress shape without touching the document.
    ///
    /// Returns whether a gesture was cancelled.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DrawingState::Drawing { shape } => {
                log::debug!("Cancelled gesture for {}", shape);
                self.needs_redraw = true;
                true
            }
            DrawingState::Idle => false,
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ToolSelection::default(), Palette::default())
    }
}
