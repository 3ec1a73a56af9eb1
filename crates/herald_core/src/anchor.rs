//! Anchor model: which side of the target the bubble attaches to.
//!
//! The original five-way conditional chain is replaced by an enum-keyed
//! lookup: `Anchor` → complement, boundary point, pointer spec.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Vec2, Viewport};

/// Preferred placement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Bubble above or below the target.
    #[default]
    Vertical,
    /// Bubble to the left or right of the target.
    Horizontal,
}

/// Which horizontal half of the viewport the target center falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalHalf {
    /// Center at or left of the viewport midpoint.
    Left,
    /// Center right of the viewport midpoint.
    Right,
}

/// Which vertical half of the viewport the target center falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalHalf {
    /// Center at or above the viewport midpoint.
    Top,
    /// Center below the viewport midpoint.
    Bottom,
}

/// Half classification of a target center within a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halves {
    /// Horizontal half.
    pub x: HorizontalHalf,
    /// Vertical half.
    pub y: VerticalHalf,
}

impl Halves {
    /// Classifies a point against the viewport midlines.
    ///
    /// `<=` midpoint goes to `Left`/`Top`.
    #[must_use]
    pub fn classify(center: Vec2, viewport: &Viewport) -> Self {
        Self {
            x: if center.x <= viewport.width * 0.5 {
                HorizontalHalf::Left
            } else {
                HorizontalHalf::Right
            },
            y: if center.y <= viewport.height * 0.5 {
                VerticalHalf::Top
            } else {
                VerticalHalf::Bottom
            },
        }
    }
}

/// A named point on a rectangle's boundary used to align two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Midpoint of the bottom edge.
    BottomCenter,
    /// Midpoint of the top edge.
    TopCenter,
    /// Midpoint of the left edge.
    CenterLeft,
    /// Midpoint of the right edge.
    CenterRight,
    /// Rectangle center. Fallback with no pointer shape.
    Center,
}

/// Which way the pointer triangle is pushed out from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDirection {
    /// Pointer above the target, bubble above (apex points down at it).
    Up,
    /// Pointer below the target, bubble below (apex points up at it).
    Down,
    /// Pointer left of the target, bubble to the left.
    Left,
    /// Pointer right of the target, bubble to the right.
    Right,
}

/// Pointer variant and offset sign for an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSpec {
    /// Pointer variant.
    pub direction: PointerDirection,
    /// Unit offset sign (scaled by the target gap / pointer thickness).
    pub unit: Vec2,
}

impl Anchor {
    /// Returns the complementary anchor on the follower.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::BottomCenter => Self::TopCenter,
            Self::TopCenter => Self::BottomCenter,
            Self::CenterLeft => Self::CenterRight,
            Self::CenterRight => Self::CenterLeft,
            Self::Center => Self::Center,
        }
    }

    /// Resolves this anchor to a point on the given rectangle.
    #[must_use]
    pub fn point_on(self, rect: Rect) -> Vec2 {
        let center = rect.center();
        match self {
            Self::BottomCenter => Vec2::new(center.x, rect.bottom()),
            Self::TopCenter => Vec2::new(center.x, rect.y),
            Self::CenterLeft => Vec2::new(rect.x, center.y),
            Self::CenterRight => Vec2::new(rect.right(), center.y),
            Self::Center => center,
        }
    }

    /// Pointer lookup table: variant and offset sign for this target anchor.
    ///
    /// `None` for [`Anchor::Center`] — the fallback draws no pointer.
    #[must_use]
    pub const fn pointer(self) -> Option<PointerSpec> {
        match self {
            Self::BottomCenter => Some(PointerSpec {
                direction: PointerDirection::Down,
                unit: Vec2::new(0.0, 1.0),
            }),
            Self::TopCenter => Some(PointerSpec {
                direction: PointerDirection::Up,
                unit: Vec2::new(0.0, -1.0),
            }),
            Self::CenterLeft => Some(PointerSpec {
                direction: PointerDirection::Left,
                unit: Vec2::new(-1.0, 0.0),
            }),
            Self::CenterRight => Some(PointerSpec {
                direction: PointerDirection::Right,
                unit: Vec2::new(1.0, 0.0),
            }),
            Self::Center => None,
        }
    }
}

/// Selects the (target, follower) anchor pair for an axis and half pair.
///
/// The enums make the "unclassifiable" case unrepresentable; callers that
/// need the no-pointer fallback use [`Anchor::Center`] directly.
#[must_use]
pub const fn select_anchors(axis: Axis, halves: Halves) -> (Anchor, Anchor) {
    let target = match axis {
        Axis::Horizontal => match halves.x {
            // Target on the right: bubble goes into the free space on the left.
            HorizontalHalf::Right => Anchor::CenterLeft,
            HorizontalHalf::Left => Anchor::CenterRight,
        },
        Axis::Vertical => match halves.y {
            // Target in the top half: bubble drops below it.
            VerticalHalf::Top => Anchor::BottomCenter,
            VerticalHalf::Bottom => Anchor::TopCenter,
        },
    };
    (target, target.complement())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_halves() {
        let vp = Viewport::new(400.0, 800.0);

        let halves = Halves::classify(Vec2::new(35.0, 20.0), &vp);
        assert_eq!(halves.x, HorizontalHalf::Left);
        assert_eq!(halves.y, VerticalHalf::Top);

        let halves = Halves::classify(Vec2::new(390.0, 790.0), &vp);
        assert_eq!(halves.x, HorizontalHalf::Right);
        assert_eq!(halves.y, VerticalHalf::Bottom);
    }

    #[test]
    fn test_classify_midpoint_goes_left_top() {
        let vp = Viewport::new(400.0, 800.0);
        let halves = Halves::classify(Vec2::new(200.0, 400.0), &vp);

        assert_eq!(halves.x, HorizontalHalf::Left);
        assert_eq!(halves.y, VerticalHalf::Top);
    }

    #[test]
    fn test_complement_is_involution() {
        for anchor in [
            Anchor::BottomCenter,
            Anchor::TopCenter,
            Anchor::CenterLeft,
            Anchor::CenterRight,
            Anchor::Center,
        ] {
            assert_eq!(anchor.complement().complement(), anchor);
        }
    }

    #[test]
    fn test_anchor_points() {
        let rect = Rect::new(10.0, 10.0, 50.0, 20.0);

        assert_eq!(Anchor::BottomCenter.point_on(rect), Vec2::new(35.0, 30.0));
        assert_eq!(Anchor::TopCenter.point_on(rect), Vec2::new(35.0, 10.0));
        assert_eq!(Anchor::CenterLeft.point_on(rect), Vec2::new(10.0, 20.0));
        assert_eq!(Anchor::CenterRight.point_on(rect), Vec2::new(60.0, 20.0));
        assert_eq!(Anchor::Center.point_on(rect), Vec2::new(35.0, 20.0));
    }

    #[test]
    fn test_center_has_no_pointer() {
        assert!(Anchor::Center.pointer().is_none());
        assert!(Anchor::BottomCenter.pointer().is_some());
    }

    #[test]
    fn test_anchor_table() {
        let top_left = Halves {
            x: HorizontalHalf::Left,
            y: VerticalHalf::Top,
        };
        let bottom_right = Halves {
            x: HorizontalHalf::Right,
            y: VerticalHalf::Bottom,
        };

        assert_eq!(
            select_anchors(Axis::Vertical, top_left),
            (Anchor::BottomCenter, Anchor::TopCenter)
        );
        assert_eq!(
            select_anchors(Axis::Vertical, bottom_right),
            (Anchor::TopCenter, Anchor::BottomCenter)
        );
        assert_eq!(
            select_anchors(Axis::Horizontal, top_left),
            (Anchor::CenterRight, Anchor::CenterLeft)
        );
        assert_eq!(
            select_anchors(Axis::Horizontal, bottom_right),
            (Anchor::CenterLeft, Anchor::CenterRight)
        );
    }
}
