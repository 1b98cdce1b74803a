//! Core of a small vector drawing editor.
//!
//! Lines, circles and filled circles live in an observable
//! [`DrawingDocument`](document::DrawingDocument); an
//! [`InteractionController`](input::InteractionController) builds them from
//! two-click pointer gestures; drawings persist as one text record per shape
//! and export as cropped PNG, JPEG or GIF images.

pub mod config;
pub mod document;
pub mod draw;
pub mod export;
pub mod input;
pub mod observer;
pub mod session;
pub mod util;

pub use config::Config;
pub use document::DrawingDocument;
pub use session::EditorSession;
