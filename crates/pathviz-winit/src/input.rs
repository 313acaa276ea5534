//! Translates winit input events into pathviz [`Msg`] values.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key as WKey, NamedKey};

use pathviz_core::{Key, MouseAction, Msg, Point};

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    if event.repeat {
        return None;
    }
    translate_key(&event.logical_key, event.state)
}

fn translate_key(logical: &WKey, state: ElementState) -> Option<Msg> {
    if state != ElementState::Pressed {
        return None;
    }
    let key = match logical {
        WKey::Named(NamedKey::Escape) => Key::Escape,
        WKey::Named(NamedKey::Enter) => Key::Enter,
        WKey::Named(NamedKey::Space) => Key::Space,
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(Msg::KeyDown { key })
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// Pixel position of the cursor, truncated towards negative infinity.
pub(crate) fn cursor_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}

/// Button events carry no position, so the caller passes the last cursor
/// position it saw.
pub(crate) fn translate_mouse_button(
    state: ElementState,
    button: MouseButton,
    cursor: Point,
) -> Option<Msg> {
    let action = match state {
        ElementState::Pressed => match button {
            MouseButton::Left => MouseAction::Main,
            MouseButton::Right => MouseAction::Secondary,
            MouseButton::Middle => MouseAction::Auxiliary,
            _ => return None,
        },
        ElementState::Released => MouseAction::Release,
    };
    Some(Msg::mouse(action, cursor))
}
