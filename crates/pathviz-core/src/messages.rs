//! Device-independent input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Middle button pressed.
    Auxiliary,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved (no button state change).
    Move,
}

/// An input message produced by a back-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event. `pos` is in the back-end's own units (pixels for a
    /// window, character cells for a terminal).
    Mouse { action: MouseAction, pos: Point },
    /// The window was closed or the process asked to quit.
    Quit,
}

impl Msg {
    /// Convenience: a `KeyDown` for a character key.
    pub fn char(c: char) -> Self {
        Self::KeyDown { key: Key::Char(c) }
    }

    /// Convenience: a mouse event.
    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse { action, pos }
    }
}
