//! Foreground/background color selection and the color status line.
//!
//! Each [`ColorArea`] is an observable subject: confirming a color in the
//! picker notifies every registered [`ColorChangeListener`] synchronously, in
//! registration order.

use crate::draw::Color;
use crate::draw::color::{BLACK, WHITE};
use crate::observer::{ListenerList, listener_ptr};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Which of the two color selections changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Stroke color of new shapes
    Foreground,
    /// Fill color of new filled circles
    Background,
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRole::Foreground => f.write_str("foreground"),
            ColorRole::Background => f.write_str("background"),
        }
    }
}

/// Observer of a [`ColorArea`].
pub trait ColorChangeListener {
    fn color_changed(&mut self, role: ColorRole, old: Color, new: Color);
}

/// One selectable color with its listeners.
#[derive(Debug)]
pub struct ColorArea {
    role: ColorRole,
    color: Color,
    listeners: ListenerList<dyn ColorChangeListener>,
}

impl ColorArea {
    pub fn new(role: ColorRole, initial: Color) -> Self {
        Self {
            role,
            color: initial,
            listeners: ListenerList::new(),
        }
    }

    pub fn role(&self) -> ColorRole {
        self.role
    }

    pub fn current(&self) -> Color {
        self.color
    }

    /// Stores `color` and notifies listeners with the previous value.
    ///
    /// Every confirmed selection notifies, even when the color is unchanged.
    pub fn select(&mut self, color: Color) {
        let old = self.color;
        self.color = color;
        let role = self.role;
        self.listeners.notify(|l| l.color_changed(role, old, color));
    }

    pub fn add_listener<T: ColorChangeListener + 'static>(&mut self, listener: &Rc<RefCell<T>>) {
        let listener: Rc<RefCell<dyn ColorChangeListener>> = listener.clone();
        self.listeners.add(Rc::downgrade(&listener));
    }

    pub fn remove_listener<T: ColorChangeListener + ?Sized>(
        &mut self,
        listener: &Rc<RefCell<T>>,
    ) -> bool {
        self.listeners.remove_ptr(listener_ptr(listener))
    }
}

/// The foreground and background color areas used to color new shapes.
#[derive(Debug)]
pub struct Palette {
    pub foreground: ColorArea,
    pub background: ColorArea,
}

impl Palette {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground: ColorArea::new(ColorRole::Foreground, foreground),
            background: ColorArea::new(ColorRole::Background, background),
        }
    }

    pub fn area_mut(&mut self, role: ColorRole) -> &mut ColorArea {
        match role {
            ColorRole::Foreground => &mut self.foreground,
            ColorRole::Background => &mut self.background,
        }
    }

    /// Registers `listener` on both areas.
    pub fn add_listener<T: ColorChangeListener + 'static>(&mut self, listener: &Rc<RefCell<T>>) {
        self.foreground.add_listener(listener);
        self.background.add_listener(listener);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(BLACK, WHITE)
    }
}

/// Status line text describing both current colors.
#[derive(Debug, Clone)]
pub struct ColorStatus {
    foreground: Color,
    background: Color,
    text: String,
}

impl ColorStatus {
    /// Status line initialised from the palette's current colors.
    pub fn for_palette(palette: &Palette) -> Self {
        let mut status = Self {
            foreground: palette.foreground.current(),
            background: palette.background.current(),
            text: String::new(),
        };
        status.refresh();
        status
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn refresh(&mut self) {
        self.text = format!(
            "Foreground color: {}, background color: {}.",
            self.foreground, self.background
        );
    }
}

impl ColorChangeListener for ColorStatus {
    fn color_changed(&mut self, role: ColorRole, _old: Color, new: Color) {
        match role {
            ColorRole::Foreground => self.foreground = new,
            ColorRole::Background => self.background = new,
        }
        self.refresh();
    }
}
