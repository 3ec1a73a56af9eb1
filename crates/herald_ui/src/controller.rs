//! Overlay lifecycle controller.
//!
//! Owns the inserted overlay exclusively. Frame-driven: the host calls
//! `update(dt)` once per frame; the dismiss fade completes there and only
//! there. Every failure path in `show` degrades to "nothing is shown".

use std::sync::Arc;

use herald_core::{place, MonospaceMeasurer, Placement, Rect, Vec2};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::HeraldConfig;
use crate::events::{ListenerId, ListenerSet, VisibilityEvent};
use crate::fade::Fade;
use crate::overlay::{OverlayEntry, OverlayHost, OverlayId, TargetProvider};
use crate::render::build_overlay_commands;
use crate::trigger::{DismissMode, PressTracker, TriggerEvent};

/// Externally observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No overlay inserted.
    #[default]
    Hidden,
    /// Overlay inserted (possibly mid-fade).
    Showing,
}

/// Internal fade phase. `Showing` covers both `FadingIn` and `FadingOut`;
/// the observable flag only flips once the fade-out has completed and the
/// overlay is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    Idle,
    FadingIn,
    FadingOut,
}

/// A controller handle for shared ownership: the caller manages disposal
/// and must still call [`HeraldController::teardown`] exactly once.
pub type SharedController = Arc<Mutex<HeraldController>>;

/// Drives one overlay through show/dismiss transitions.
pub struct HeraldController {
    config: HeraldConfig,
    state: LifecycleState,
    phase: FadePhase,
    overlay: Option<OverlayId>,
    /// Placement and target snapshot while showing, for hit tests.
    shown: Option<(Placement, Rect)>,
    fade: Fade,
    listeners: ListenerSet,
    tracker: PressTracker,
}

impl HeraldController {
    /// Creates a hidden controller.
    #[must_use]
    pub fn new(config: HeraldConfig) -> Self {
        let fade = Fade::new(0.0).with_duration(config.fade_duration);
        Self {
            config,
            state: LifecycleState::Hidden,
            phase: FadePhase::Idle,
            overlay: None,
            shown: None,
            fade,
            listeners: ListenerSet::new(),
            tracker: PressTracker::new(),
        }
    }

    /// Wraps this controller for shared ownership.
    #[must_use]
    pub fn into_shared(self) -> SharedController {
        Arc::new(Mutex::new(self))
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// True while the overlay is inserted.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.state == LifecycleState::Showing
    }

    /// Live fade opacity for the host to apply while painting.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.fade.value()
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &HeraldConfig {
        &self.config
    }

    /// Replaces the configuration. Placement is recomputed at the next
    /// show; an already-visible overlay keeps its geometry.
    pub fn set_config(&mut self, config: HeraldConfig) {
        self.fade.set_duration(config.fade_duration);
        self.config = config;
    }

    /// Bubble rectangle of the showing overlay, if any.
    #[must_use]
    pub fn bubble_rect(&self) -> Option<Rect> {
        self.shown.map(|(placement, target)| placement.bubble_rect(target))
    }

    /// Registers a visibility callback. Fires after state mutation.
    pub fn subscribe(&self, callback: impl FnMut(bool) + Send + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Deregisters a visibility callback.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Channel subscription for visibility events.
    pub fn watch(&self) -> crossbeam_channel::Receiver<VisibilityEvent> {
        self.listeners.watch()
    }

    /// Shows the overlay. Returns false (and does nothing) when the message
    /// is absent or empty, the target is not laid out, placement cannot be
    /// resolved, or the overlay is already showing. All of those are
    /// expected conditions, not errors.
    pub fn show(&mut self, provider: &dyn TargetProvider, host: &mut dyn OverlayHost) -> bool {
        let Some(message) = self.config.message.clone().filter(|m| !m.is_empty()) else {
            debug!("show skipped: no message");
            return false;
        };

        if self.state == LifecycleState::Showing {
            if self.phase == FadePhase::FadingOut {
                // A show issued mid-dismiss cancels the fade and releases
                // the stale overlay before restarting with fresh geometry.
                self.fade.snap(0.0);
                self.phase = FadePhase::Idle;
                self.state = LifecycleState::Hidden;
                self.release(host);
                self.listeners.notify(false);
            } else {
                return false;
            }
        }

        let Some(target) = provider.target_rect() else {
            debug!("show skipped: target not laid out yet");
            return false;
        };
        let viewport = provider.viewport();
        let measurer = MonospaceMeasurer::for_font_size(self.config.style.font_size);
        let Some(placement) = place(target, &viewport, &self.config.placement_config(), &message, &measurer)
        else {
            debug!("show skipped: placement unresolved");
            return false;
        };

        let commands = build_overlay_commands(
            &placement,
            target,
            &message,
            &self.config.style,
            self.config.pointer_size,
            1.0,
        );
        self.overlay = Some(host.insert(OverlayEntry {
            placement,
            target,
            commands,
        }));
        self.shown = Some((placement, target));
        self.state = LifecycleState::Showing;
        self.phase = FadePhase::FadingIn;
        self.fade.snap(0.0);
        self.fade.fade_to(1.0);
        debug!(anchor = ?placement.target_anchor, "overlay shown");
        self.listeners.notify(true);
        true
    }

    /// Starts the dismiss fade. No-op when hidden or already fading out;
    /// the overlay resource is released when the fade completes in
    /// [`HeraldController::update`].
    pub fn dismiss(&mut self) {
        if self.state == LifecycleState::Hidden || self.phase == FadePhase::FadingOut {
            return;
        }
        self.phase = FadePhase::FadingOut;
        self.fade.fade_to(0.0);
        debug!("overlay dismissing");
    }

    /// Show if hidden, dismiss if showing.
    pub fn toggle(&mut self, provider: &dyn TargetProvider, host: &mut dyn OverlayHost) {
        if self.state == LifecycleState::Hidden {
            self.show(provider, host);
        } else {
            self.dismiss();
        }
    }

    /// Advances the fade; completes a fade-out by removing the overlay and
    /// notifying listeners.
    pub fn update(&mut self, dt: f32, host: &mut dyn OverlayHost) {
        self.fade.update(dt);
        match self.phase {
            FadePhase::FadingIn if self.fade.is_complete() => self.phase = FadePhase::Idle,
            FadePhase::FadingOut if self.fade.is_complete() => {
                self.phase = FadePhase::Idle;
                self.state = LifecycleState::Hidden;
                self.release(host);
                debug!("overlay dismissed");
                self.listeners.notify(false);
            }
            _ => {}
        }
    }

    /// Releases the overlay and cancels any in-flight fade, regardless of
    /// lifecycle state. Safe to call when already hidden.
    pub fn teardown(&mut self, host: &mut dyn OverlayHost) {
        let was_showing = self.state == LifecycleState::Showing;
        self.fade.snap(0.0);
        self.phase = FadePhase::Idle;
        self.state = LifecycleState::Hidden;
        self.release(host);
        if was_showing {
            self.listeners.notify(false);
        }
        debug!("controller torn down");
    }

    /// Routes a recognized gesture through the trigger/dismiss modes.
    pub fn handle_trigger(
        &mut self,
        event: TriggerEvent,
        position: Vec2,
        provider: &dyn TargetProvider,
        host: &mut dyn OverlayHost,
    ) {
        match self.state {
            LifecycleState::Hidden => {
                if self.config.trigger.matches(event)
                    && provider.target_rect().is_some_and(|rect| rect.contains(position))
                {
                    self.show(provider, host);
                }
            }
            LifecycleState::Showing => {
                // The trigger gesture on the target toggles, even when
                // dismissal is otherwise manual.
                if self.config.trigger.matches(event)
                    && provider.target_rect().is_some_and(|rect| rect.contains(position))
                {
                    self.dismiss();
                    return;
                }
                if event == TriggerEvent::Tap {
                    let inside = self.bubble_rect().is_some_and(|bubble| bubble.contains(position));
                    match self.config.dismiss {
                        DismissMode::TapOutside if !inside => self.dismiss(),
                        DismissMode::TapInside if inside => self.dismiss(),
                        DismissMode::TapOutside | DismissMode::TapInside | DismissMode::Manual => {}
                    }
                }
            }
        }
    }

    /// Records a pointer press for gesture recognition.
    pub fn pointer_down(&mut self, position: Vec2, time: f32) {
        self.tracker.pointer_down(position, time);
    }

    /// Records a pointer release; may recognize and route a gesture.
    pub fn pointer_up(
        &mut self,
        position: Vec2,
        time: f32,
        provider: &dyn TargetProvider,
        host: &mut dyn OverlayHost,
    ) {
        if let Some(event) = self.tracker.pointer_up(position, time) {
            self.handle_trigger(event, position, provider, host);
        }
    }

    /// Per-frame gesture poll; fires long-presses while the pointer is held.
    pub fn poll_gestures(&mut self, time: f32, provider: &dyn TargetProvider, host: &mut dyn OverlayHost) {
        let position = self.tracker.press_position();
        if let (Some(event), Some(position)) = (self.tracker.update(time), position) {
            self.handle_trigger(event, position, provider, host);
        }
    }

    fn release(&mut self, host: &mut dyn OverlayHost) {
        self.shown = None;
        if let Some(id) = self.overlay.take() {
            host.remove(id);
        }
    }
}
