//! Integration tests for the placement engine's geometric guarantees.

use herald_core::{
    place, Anchor, Axis, EdgeInsets, MeasureContent, MonospaceMeasurer, PlacementConfig, Rect, SafeArea, Size, Vec2,
    Viewport,
};

struct FixedMeasure(Size);

impl MeasureContent for FixedMeasure {
    fn measure(&self, _text: &str, _max_width: f32) -> Size {
        self.0
    }
}

fn base_config(axis: Axis) -> PlacementConfig {
    PlacementConfig {
        axis,
        outer_padding: EdgeInsets::uniform(16.0),
        target_gap: 4.0,
        pointer_size: Size::new(10.0, 10.0),
        bubble_padding: EdgeInsets::uniform(8.0),
    }
}

#[test]
fn left_half_horizontal_targets_anchor_center_right() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Horizontal);
    let measurer = MonospaceMeasurer::default();

    for x in [0.0, 40.0, 80.0, 120.0, 160.0] {
        for y in [0.0, 200.0, 400.0, 780.0] {
            let target = Rect::new(x, y, 30.0, 20.0);
            let placement = place(target, &vp, &cfg, "hint", &measurer).unwrap();

            assert_eq!(placement.target_anchor, Anchor::CenterRight, "target at ({x}, {y})");
            assert_eq!(placement.follower_anchor, Anchor::CenterLeft);
        }
    }
}

#[test]
fn top_half_vertical_targets_anchor_bottom_center_with_positive_pointer_y() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Vertical);
    let measurer = MonospaceMeasurer::default();

    for x in [0.0, 100.0, 200.0, 360.0] {
        for y in [0.0, 100.0, 300.0] {
            let target = Rect::new(x, y, 30.0, 20.0);
            let placement = place(target, &vp, &cfg, "hint", &measurer).unwrap();

            assert_eq!(placement.target_anchor, Anchor::BottomCenter, "target at ({x}, {y})");
            let pointer = placement.pointer.unwrap();
            assert!((pointer.offset.y - cfg.target_gap).abs() < f32::EPSILON);
            assert!((pointer.offset.x - 0.0).abs() < f32::EPSILON);
        }
    }
}

#[test]
fn clamp_keeps_bubble_inside_viewport_when_it_fits() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Vertical);
    let measurer = MonospaceMeasurer::default();
    // 43 chars * 8 px = 344 px natural width: fits in 400 - 32.
    let message = "a".repeat(43);

    for x in [-10.0, 0.0, 50.0, 150.0, 250.0, 350.0, 390.0] {
        let target = Rect::new(x, 100.0, 20.0, 20.0);
        let placement = place(target, &vp, &cfg, &message, &measurer).unwrap();
        let bubble = placement.bubble_rect(target);

        assert!(bubble.x >= 0.0, "left edge clipped for target x={x}: {}", bubble.x);
        assert!(
            bubble.right() <= vp.width,
            "right edge clipped for target x={x}: {}",
            bubble.right()
        );
    }
}

#[test]
fn clamp_correction_is_directed_toward_viewport_interior() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Vertical);
    let wide = FixedMeasure(Size::new(300.0, 16.0));

    let near_left = place(Rect::new(5.0, 100.0, 20.0, 20.0), &vp, &cfg, "m", &wide).unwrap();
    assert!(near_left.correction.x > 0.0);

    let near_right = place(Rect::new(375.0, 100.0, 20.0, 20.0), &vp, &cfg, "m", &wide).unwrap();
    assert!(near_right.correction.x < 0.0);

    let centered = place(Rect::new(190.0, 400.0, 20.0, 20.0), &vp, &cfg, "m", &wide).unwrap();
    assert!((centered.correction.x - 0.0).abs() < f32::EPSILON);
}

#[test]
fn scenario_target_near_top_left_vertical_axis() {
    // Target (10, 10, 50, 20) in a 400x800 viewport, vertical axis,
    // uniform outer padding 16, gap 4, pointer 10x10, content fits.
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Vertical);
    let target = Rect::new(10.0, 10.0, 50.0, 20.0);

    let placement = place(target, &vp, &cfg, "Hi", &MonospaceMeasurer::default()).unwrap();

    assert_eq!(placement.target_anchor, Anchor::BottomCenter);
    assert_eq!(placement.follower_anchor, Anchor::TopCenter);
    let pointer = placement.pointer.unwrap();
    assert_eq!(pointer.offset, Vec2::new(0.0, 4.0));
    // Bubble (16 + 16 = 32 px wide) is narrower than the target: the left
    // edge margin stays above half the per-side padding, no shift needed.
    assert!((placement.correction.x - 0.0).abs() < f32::EPSILON);
}

#[test]
fn scenario_target_near_top_left_with_wide_content_pushes_right() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Vertical);
    let target = Rect::new(10.0, 10.0, 50.0, 20.0);

    let placement = place(target, &vp, &cfg, &"a".repeat(40), &MonospaceMeasurer::default()).unwrap();

    assert!(placement.correction.x > 0.0);
    let bubble = placement.bubble_rect(target);
    assert!(bubble.x >= 0.0);
    assert!(bubble.right() <= vp.width);
}

#[test]
fn scenario_bottom_right_corner_horizontal_axis() {
    let vp = Viewport::new(400.0, 800.0);
    let cfg = base_config(Axis::Horizontal);
    let target = Rect::new(340.0, 760.0, 50.0, 20.0);

    let placement = place(target, &vp, &cfg, "Hi", &MonospaceMeasurer::default()).unwrap();

    assert_eq!(placement.target_anchor, Anchor::CenterLeft);
    assert_eq!(placement.follower_anchor, Anchor::CenterRight);
    let pointer = placement.pointer.unwrap();
    assert_eq!(pointer.offset, Vec2::new(-cfg.target_gap, 0.0));
}

#[test]
fn safe_area_insets_tighten_the_vertical_clamp() {
    let vp = Viewport::new(400.0, 800.0).with_safe_area(SafeArea::new(40.0, 0.0));
    let cfg = base_config(Axis::Horizontal);
    // Target close under the notch with a tall bubble beside it.
    let target = Rect::new(380.0, 45.0, 15.0, 10.0);
    let tall = FixedMeasure(Size::new(40.0, 120.0));

    let with_inset = place(target, &vp, &cfg, "m", &tall).unwrap();
    let without_inset = place(target, &Viewport::new(400.0, 800.0), &cfg, "m", &tall).unwrap();

    assert!(with_inset.correction.y > without_inset.correction.y);
}

#[test]
fn follower_anchor_is_always_the_complement() {
    let vp = Viewport::new(640.0, 480.0);
    let measurer = MonospaceMeasurer::default();

    for axis in [Axis::Vertical, Axis::Horizontal] {
        let cfg = base_config(axis);
        for x in [10.0, 320.0, 600.0] {
            for y in [10.0, 240.0, 460.0] {
                let placement = place(Rect::new(x, y, 16.0, 16.0), &vp, &cfg, "tip", &measurer).unwrap();
                assert_eq!(placement.follower_anchor, placement.target_anchor.complement());
            }
        }
    }
}
