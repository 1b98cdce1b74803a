mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use actions::{ListSelection, PendingEdit};
pub use core::{DrawingState, InteractionController};
