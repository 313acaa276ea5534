//! Colours and the role palette.

use crate::node::Role;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);
    pub const CYAN: Self = Self::from_rgb(0, 255, 255);
    pub const PURPLE: Self = Self::from_rgb(255, 0, 255);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Colour of the grid-line overlay.
pub const LINE_COLOR: Color = Color::GREY;

/// Fill colour for a node with the given role.
pub const fn role_color(role: Role) -> Color {
    match role {
        Role::Open => Color::WHITE,
        Role::Barrier => Color::BLACK,
        Role::Start => Color::YELLOW,
        Role::End => Color::CYAN,
        Role::Visited => Color::RED,
        Role::Frontier => Color::GREEN,
        Role::Path => Color::PURPLE,
    }
}
