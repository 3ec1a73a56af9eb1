//! Render-command emission.
//!
//! HERALD stops at commands; painting and GPU submission belong to the
//! host. The pointer triangle is tessellated here so hosts can upload the
//! vertices directly.

use herald_core::{Placement, PointerDirection, Rect, Size, Vec2};

use crate::style::{BubbleStyle, Color};

/// A render command for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// Top-left position.
        position: Vec2,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Use monospace font.
        monospace: bool,
    },
    /// Pointer triangle.
    Pointer {
        /// Tessellated vertices, ready for GPU upload.
        vertices: [PointerVertex; 3],
    },
}

/// Vertex of the pointer triangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointerVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl PointerVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Builds the pointer triangle for a direction.
///
/// `tip` is the vertex nearest the target (the anchor point pushed out by
/// the target gap); the base sits one pointer depth further out, where the
/// bubble body begins.
#[must_use]
pub fn tessellate_pointer(direction: PointerDirection, tip: Vec2, size: Size, color: Color) -> [PointerVertex; 3] {
    let rgba = color.to_array();
    let half_base = match direction {
        PointerDirection::Up | PointerDirection::Down => size.width * 0.5,
        PointerDirection::Left | PointerDirection::Right => size.height * 0.5,
    };

    let (base_a, base_b) = match direction {
        PointerDirection::Down => (
            Vec2::new(tip.x - half_base, tip.y + size.height),
            Vec2::new(tip.x + half_base, tip.y + size.height),
        ),
        PointerDirection::Up => (
            Vec2::new(tip.x - half_base, tip.y - size.height),
            Vec2::new(tip.x + half_base, tip.y - size.height),
        ),
        PointerDirection::Left => (
            Vec2::new(tip.x - size.width, tip.y - half_base),
            Vec2::new(tip.x - size.width, tip.y + half_base),
        ),
        PointerDirection::Right => (
            Vec2::new(tip.x + size.width, tip.y - half_base),
            Vec2::new(tip.x + size.width, tip.y + half_base),
        ),
    };

    [
        PointerVertex::new(tip.x, tip.y, rgba),
        PointerVertex::new(base_a.x, base_a.y, rgba),
        PointerVertex::new(base_b.x, base_b.y, rgba),
    ]
}

/// Assembles the bubble, border, pointer and message text for one overlay.
///
/// `opacity` scales every color's alpha; pass 1.0 for the at-rest snapshot
/// and let the host re-apply the live fade value while painting.
#[must_use]
pub fn build_overlay_commands(
    placement: &Placement,
    target: Rect,
    message: &str,
    style: &BubbleStyle,
    pointer_size: Size,
    opacity: f32,
) -> Vec<RenderCommand> {
    let bubble = placement.bubble_rect(target);
    let mut commands = Vec::with_capacity(4);

    commands.push(RenderCommand::Rect {
        bounds: bubble,
        color: style.background.faded(opacity),
        corner_radius: style.corner_radius,
    });

    if style.border_width > 0.0 {
        commands.push(RenderCommand::RectOutline {
            bounds: bubble,
            color: style.border.faded(opacity),
            width: style.border_width,
            corner_radius: style.corner_radius,
        });
    }

    if let Some(pointer) = placement.pointer {
        let tip = placement.target_anchor.point_on(target).add(pointer.offset);
        commands.push(RenderCommand::Pointer {
            vertices: tessellate_pointer(pointer.spec.direction, tip, pointer_size, style.pointer.faded(opacity)),
        });
    }

    commands.push(RenderCommand::Text {
        text: message.to_owned(),
        position: Vec2::new(bubble.x + style.padding.left, bubble.y + style.padding.top),
        color: style.text.faded(opacity),
        font_size: style.font_size,
        monospace: style.monospace,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{place, MonospaceMeasurer, PlacementConfig, Viewport};

    #[test]
    fn test_pointer_down_extends_below_tip() {
        let vertices = tessellate_pointer(
            PointerDirection::Down,
            Vec2::new(35.0, 34.0),
            Size::new(10.0, 10.0),
            Color::WHITE,
        );

        assert_eq!(vertices[0].position, [35.0, 34.0]);
        assert_eq!(vertices[1].position, [30.0, 44.0]);
        assert_eq!(vertices[2].position, [40.0, 44.0]);
    }

    #[test]
    fn test_pointer_left_extends_left_of_tip() {
        let vertices = tessellate_pointer(
            PointerDirection::Left,
            Vec2::new(100.0, 50.0),
            Size::new(10.0, 10.0),
            Color::WHITE,
        );

        assert_eq!(vertices[0].position, [100.0, 50.0]);
        assert_eq!(vertices[1].position, [90.0, 45.0]);
        assert_eq!(vertices[2].position, [90.0, 55.0]);
    }

    #[test]
    fn test_overlay_commands_contain_bubble_pointer_and_text() {
        let vp = Viewport::new(400.0, 800.0);
        let cfg = PlacementConfig::default();
        let target = Rect::new(10.0, 10.0, 50.0, 20.0);
        let placement = place(target, &vp, &cfg, "Hi", &MonospaceMeasurer::default()).unwrap();

        let commands = build_overlay_commands(
            &placement,
            target,
            "Hi",
            &BubbleStyle::default(),
            cfg.pointer_size,
            1.0,
        );

        assert!(matches!(commands[0], RenderCommand::Rect { .. }));
        assert!(commands.iter().any(|c| matches!(c, RenderCommand::Pointer { .. })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::Text { text, .. } if text == "Hi")));
    }

    #[test]
    fn test_opacity_scales_all_colors() {
        let vp = Viewport::new(400.0, 800.0);
        let cfg = PlacementConfig::default();
        let target = Rect::new(10.0, 10.0, 50.0, 20.0);
        let placement = place(target, &vp, &cfg, "Hi", &MonospaceMeasurer::default()).unwrap();
        let style = BubbleStyle::default();

        let commands = build_overlay_commands(&placement, target, "Hi", &style, cfg.pointer_size, 0.5);

        if let RenderCommand::Rect { color, .. } = &commands[0] {
            assert!((color.a - style.background.a * 0.5).abs() < 0.001);
        } else {
            panic!("expected bubble rect first");
        }
    }
}
