//! Bubble styling.
//!
//! Dark background, sharp border, monospace text. Loaded once from config;
//! never consulted inside the placement math except for the internal
//! padding, which travels through [`crate::config::HeraldConfig`].

use herald_core::EdgeInsets;
use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns this color with its alpha scaled by an opacity factor.
    #[must_use]
    pub fn faded(self, opacity: f32) -> Self {
        self.with_alpha(self.a * opacity)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Visual style of the message bubble and its pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleStyle {
    /// Background color.
    pub background: Color,
    /// Border color.
    pub border: Color,
    /// Text color.
    pub text: Color,
    /// Pointer triangle color.
    pub pointer: Color,
    /// Border width.
    pub border_width: f32,
    /// Corner radius.
    pub corner_radius: f32,
    /// Padding between the bubble edge and the message text.
    pub padding: EdgeInsets,
    /// Font size.
    pub font_size: f32,
    /// Use monospace font.
    pub monospace: bool,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.05, 0.05, 0.08, 0.95),
            border: Color::rgba(0.2, 0.8, 0.4, 1.0),
            text: Color::rgba(0.9, 0.9, 0.9, 1.0),
            pointer: Color::rgba(0.05, 0.05, 0.08, 0.95),
            border_width: 1.0,
            corner_radius: 2.0,
            padding: EdgeInsets::uniform(8.0),
            font_size: 14.0,
            monospace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_color_faded_scales_alpha() {
        let color = Color::rgba(0.2, 0.4, 0.6, 0.8).faded(0.5);
        assert!((color.a - 0.4).abs() < f32::EPSILON);
        assert!((color.r - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_style_matches_pointer_to_background() {
        let style = BubbleStyle::default();
        assert_eq!(style.pointer, style.background);
    }
}
