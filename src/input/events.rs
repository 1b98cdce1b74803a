//! Generic input event types, independent of any windowing toolkit.

/// Generic key representation.
///
/// Front ends map their native key codes to these values. Keys are delivered
/// as raw key-press events, so non-printable keys such as Delete always arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Escape key (cancels an in-progress gesture)
    Escape,
    /// Delete key (removes the selected list entry)
    Delete,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (places gesture points)
    Left,
    /// Right mouse button (cancels the gesture)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
