//! Input handling and the gesture state machine.
//!
//! This module translates front-end keyboard and mouse events into document
//! operations. It holds the tool selection, the foreground/background color
//! areas and the two-click creation gesture (idle, drawing).

pub mod colors;
pub mod events;
pub mod state;
pub mod tool;

pub use colors::{ColorArea, ColorChangeListener, ColorRole, ColorStatus, Palette};
pub use events::{Key, MouseButton};
pub use state::{DrawingState, InteractionController, ListSelection, PendingEdit};
pub use tool::ToolSelection;
