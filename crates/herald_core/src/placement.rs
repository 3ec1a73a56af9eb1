//! The placement engine.
//!
//! Pure function of (target, viewport, config, content size) → anchors and
//! offsets. Stage one picks the side, stage two nudges the bubble body back
//! inside the viewport. The pointer never detaches from the target.

use serde::{Deserialize, Serialize};

use crate::anchor::{select_anchors, Anchor, Axis, Halves, HorizontalHalf, PointerDirection, PointerSpec, VerticalHalf};
use crate::geometry::{EdgeInsets, Rect, Size, Vec2, Viewport};

/// Overlap (in units) between the bubble body and the pointer triangle, so
/// the two read as one shape instead of showing a hairline seam.
const POINTER_OVERLAP: f32 = 1.0;

/// Placement engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Preferred placement axis.
    pub axis: Axis,
    /// Margin kept between the bubble and the viewport edges.
    pub outer_padding: EdgeInsets,
    /// Gap between the target and the pointer tip.
    pub target_gap: f32,
    /// Pointer triangle size (base width × depth).
    pub pointer_size: Size,
    /// Internal padding of the message bubble.
    pub bubble_padding: EdgeInsets,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            outer_padding: EdgeInsets::uniform(16.0),
            target_gap: 4.0,
            pointer_size: Size::new(10.0, 10.0),
            bubble_padding: EdgeInsets::uniform(8.0),
        }
    }
}

/// Synchronous wrapping-text measurement, supplied by the caller.
pub trait MeasureContent {
    /// Returns the content's natural size under a maximum-width constraint.
    fn measure(&self, text: &str, max_width: f32) -> Size;
}

/// Character-grid text size estimator.
///
/// Monospace only: a fixed advance per character and a fixed line height.
/// Good enough for terminal-style overlays; hosts with real text shaping
/// supply their own [`MeasureContent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Horizontal advance per character.
    pub char_width: f32,
    /// Height of one wrapped line.
    pub line_height: f32,
}

impl MonospaceMeasurer {
    /// Scales the estimator from a font size (8 px / 16 px at 14 px mono).
    #[must_use]
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            char_width: font_size * (8.0 / 14.0),
            line_height: font_size * (16.0 / 14.0),
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl MeasureContent for MonospaceMeasurer {
    fn measure(&self, text: &str, max_width: f32) -> Size {
        let natural = text.chars().count() as f32 * self.char_width;
        if max_width <= 0.0 {
            return Size::new(0.0, self.line_height);
        }

        let width = natural.min(max_width);
        let lines = (natural / max_width).ceil().max(1.0);
        Size::new(width, lines * self.line_height)
    }
}

/// Pointer variant plus its push-out offset from the target edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPlacement {
    /// Pointer variant and offset sign.
    pub spec: PointerSpec,
    /// Offset of the pointer tip from the target anchor point.
    pub offset: Vec2,
}

/// The result of a placement computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Anchor point on the target.
    pub target_anchor: Anchor,
    /// Complementary anchor point on the bubble.
    pub follower_anchor: Anchor,
    /// Pointer triangle placement (`None` for the center fallback).
    pub pointer: Option<PointerPlacement>,
    /// Base offset handed to the relative-positioning link: pushes the
    /// follower anchor out past the pointer, minus the seam overlap.
    pub link_offset: Vec2,
    /// Edge-clamp correction (dx, dy) keeping the bubble inside the viewport.
    pub correction: Vec2,
    /// Final bubble size (content plus internal padding, width-capped).
    pub bubble_size: Size,
    /// Width constraint used when measuring the content.
    pub max_content_width: f32,
}

impl Placement {
    /// Resolves the bubble rectangle in viewport coordinates.
    ///
    /// The follower anchor point lands at: target anchor point + link offset
    /// + clamp correction.
    #[must_use]
    pub fn bubble_rect(&self, target: Rect) -> Rect {
        let anchored = self
            .target_anchor
            .point_on(target)
            .add(self.link_offset)
            .add(self.correction);
        let local = self
            .follower_anchor
            .point_on(Rect::from_pos_size(Vec2::ZERO, self.bubble_size));
        Rect::from_pos_size(Vec2::new(anchored.x - local.x, anchored.y - local.y), self.bubble_size)
    }
}

/// Computes where the bubble and pointer go for one target rectangle.
///
/// Returns `None` when the geometry cannot be resolved (non-finite target,
/// degenerate viewport). Callers treat that as "skip, retry next frame",
/// never as an error.
#[must_use]
pub fn place(
    target: Rect,
    viewport: &Viewport,
    config: &PlacementConfig,
    text: &str,
    measure: &dyn MeasureContent,
) -> Option<Placement> {
    if !target.is_valid() || !viewport.is_valid() {
        return None;
    }

    let halves = Halves::classify(target.center(), viewport);

    let max_content_width = available_width(target, viewport, config, halves).max(0.0);
    let content = measure.measure(text, max_content_width);

    let mut bubble_size = Size::new(
        content.width + config.bubble_padding.horizontal(),
        content.height + config.bubble_padding.vertical(),
    );
    // Degrade gracefully: a non-wrappable content wider than the available
    // space gets its width constrained, the bubble is never repositioned
    // beyond the clamp correction.
    bubble_size.width = bubble_size
        .width
        .min(max_content_width + config.bubble_padding.horizontal());

    let (target_anchor, follower_anchor) = select_anchors(config.axis, halves);

    let pointer = target_anchor.pointer().map(|spec| PointerPlacement {
        spec,
        offset: spec.unit.scale(config.target_gap),
    });

    let link_offset = pointer.map_or(Vec2::ZERO, |p| {
        let thickness = match p.spec.direction {
            PointerDirection::Up | PointerDirection::Down => config.pointer_size.height,
            PointerDirection::Left | PointerDirection::Right => config.pointer_size.width,
        };
        p.spec.unit.scale(config.target_gap + thickness - POINTER_OVERLAP)
    });

    let correction = edge_clamp(target, viewport, config, halves, bubble_size);

    Some(Placement {
        target_anchor,
        follower_anchor,
        pointer,
        link_offset,
        correction,
        bubble_size,
        max_content_width,
    })
}

/// Width available to the content under the configured axis.
fn available_width(target: Rect, viewport: &Viewport, config: &PlacementConfig, halves: Halves) -> f32 {
    let half_outer = config.outer_padding.horizontal() * 0.5;
    match config.axis {
        Axis::Vertical => viewport.width - config.outer_padding.horizontal(),
        Axis::Horizontal => match halves.x {
            // Target on the right: the bubble wraps into the space to its left.
            HorizontalHalf::Right => target.x - half_outer - config.target_gap - config.pointer_size.width,
            HorizontalHalf::Left => {
                (viewport.width - target.right()) - half_outer - config.target_gap - config.pointer_size.width
            }
        },
    }
}

/// Two-sided edge-clamp correction.
///
/// Overflow on each axis is estimated symmetrically as
/// `(bubble − target) / 2` around the target center; when the tighter edge
/// margin drops under half the per-side padding, the bubble slides toward
/// the viewport interior by the deficit. On the y axis each edge's
/// safe-area inset is added to the padding term.
fn edge_clamp(
    target: Rect,
    viewport: &Viewport,
    config: &PlacementConfig,
    halves: Halves,
    bubble: Size,
) -> Vec2 {
    let pad_x = config.outer_padding.horizontal() * 0.5;
    let overflow_x = (bubble.width - target.width) * 0.5;
    let edge_left = target.x - overflow_x;
    let edge_right = viewport.width - (target.right() + overflow_x);
    let min_edge_x = edge_left.min(edge_right);

    let dx = if min_edge_x < pad_x * 0.5 {
        let deficit = pad_x * 0.5 - min_edge_x;
        match halves.x {
            HorizontalHalf::Left => deficit,
            HorizontalHalf::Right => -deficit,
        }
    } else {
        0.0
    };

    let pad_y = config.outer_padding.vertical() * 0.5;
    let overflow_y = (bubble.height - target.height) * 0.5;
    let edge_top = target.y - overflow_y - viewport.safe_area.top;
    let edge_bottom = viewport.height - (target.bottom() + overflow_y) - viewport.safe_area.bottom;
    let min_edge_y = edge_top.min(edge_bottom);

    let dy = if min_edge_y < pad_y * 0.5 {
        let deficit = pad_y * 0.5 - min_edge_y;
        match halves.y {
            VerticalHalf::Top => deficit,
            VerticalHalf::Bottom => -deficit,
        }
    } else {
        0.0
    };

    Vec2::new(dx, dy)
}
