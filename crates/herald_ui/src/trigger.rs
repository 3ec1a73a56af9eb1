//! Gesture recognition and trigger/dismiss mode mapping.
//!
//! Frame-driven, like the rest of the library: the host feeds pointer
//! down/up with timestamps and polls [`PressTracker::update`] once per
//! frame so long-presses fire while the pointer is still held.

use herald_core::Vec2;
use serde::{Deserialize, Serialize};

/// Which gesture toggles the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Single tap on the target.
    #[default]
    Tap,
    /// Press and hold on the target.
    LongPress,
    /// Two taps in quick succession on the target.
    DoubleTap,
    /// No built-in gesture wiring; the host drives the controller directly.
    Manual,
}

/// Which gesture dismisses a showing overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DismissMode {
    /// Any tap outside the bubble content.
    #[default]
    TapOutside,
    /// Only a tap inside the bubble content.
    TapInside,
    /// No built-in dismissal; the host calls `dismiss()` itself.
    Manual,
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Press released quickly.
    Tap,
    /// Second quick tap near the first.
    DoubleTap,
    /// Press held past the long-press threshold.
    LongPress,
}

impl TriggerMode {
    /// Returns true if this mode is toggled by the given event.
    ///
    /// [`TriggerMode::Manual`] matches nothing.
    #[must_use]
    pub const fn matches(self, event: TriggerEvent) -> bool {
        matches!(
            (self, event),
            (Self::Tap, TriggerEvent::Tap)
                | (Self::DoubleTap, TriggerEvent::DoubleTap)
                | (Self::LongPress, TriggerEvent::LongPress)
        )
    }
}

/// Recognizes taps, double-taps and long-presses from raw pointer events.
#[derive(Debug, Clone, Default)]
pub struct PressTracker {
    /// Active press: (start time, start position).
    pressed: Option<(f32, Vec2)>,
    /// Long press already emitted for the active press.
    long_press_fired: bool,
    /// Last completed tap: (release time, position).
    last_tap: Option<(f32, Vec2)>,
}

impl PressTracker {
    /// Double-tap time window (seconds).
    const DOUBLE_TAP_TIME: f32 = 0.3;
    /// Double-tap position threshold (pixels).
    const DOUBLE_TAP_DISTANCE: f32 = 5.0;
    /// Long-press hold threshold (seconds).
    const LONG_PRESS_TIME: f32 = 0.5;

    /// Creates a new tracker with no active press.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer press.
    pub fn pointer_down(&mut self, position: Vec2, time: f32) {
        self.pressed = Some((time, position));
        self.long_press_fired = false;
    }

    /// Per-frame poll; emits a long-press once the hold threshold passes.
    pub fn update(&mut self, time: f32) -> Option<TriggerEvent> {
        let (start, _) = self.pressed?;
        if !self.long_press_fired && time - start >= Self::LONG_PRESS_TIME {
            self.long_press_fired = true;
            return Some(TriggerEvent::LongPress);
        }
        None
    }

    /// Records a pointer release; emits a tap, double-tap or (when `update`
    /// was never polled during a long hold) a long-press.
    pub fn pointer_up(&mut self, position: Vec2, time: f32) -> Option<TriggerEvent> {
        let (start, _) = self.pressed.take()?;

        if self.long_press_fired {
            // Already emitted while held; the release is not a tap.
            self.long_press_fired = false;
            return None;
        }

        if time - start >= Self::LONG_PRESS_TIME {
            return Some(TriggerEvent::LongPress);
        }

        if let Some((tap_time, tap_pos)) = self.last_tap {
            let dx = position.x - tap_pos.x;
            let dy = position.y - tap_pos.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if time - tap_time < Self::DOUBLE_TAP_TIME && distance < Self::DOUBLE_TAP_DISTANCE {
                self.last_tap = None;
                return Some(TriggerEvent::DoubleTap);
            }
        }

        self.last_tap = Some((time, position));
        Some(TriggerEvent::Tap)
    }

    /// Position of the active press, if any.
    #[must_use]
    pub fn press_position(&self) -> Option<Vec2> {
        self.pressed.map(|(_, position)| position)
    }
}
