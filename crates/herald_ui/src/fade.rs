//! Frame-driven opacity fade.
//!
//! One animated channel, explicit cancellation: `snap` completes the
//! transition immediately so teardown never leaves an overlay lingering at
//! partial opacity.

/// Easing function applied to fade progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeEasing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (sharp snap to target).
    #[default]
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// No animation.
    Instant,
}

impl FadeEasing {
    /// Applies the easing function to a progress value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// An animated opacity value in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Fade {
    current: f32,
    start: f32,
    target: f32,
    progress: f32,
    duration: f32,
    easing: FadeEasing,
}

impl Fade {
    /// Default fade duration (seconds).
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates a fade at rest at the given opacity.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing: FadeEasing::default(),
        }
    }

    /// Sets a custom duration (seconds).
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: FadeEasing) -> Self {
        self.easing = easing;
        self
    }

    /// Changes the duration in place; an in-flight transition keeps its
    /// progress fraction.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration;
    }

    /// Current opacity.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Opacity the fade is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true when the transition has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts a transition from the current opacity to `target`.
    pub fn fade_to(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Cancels any transition and jumps to `value` immediately.
    pub fn snap(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.progress = 1.0;
    }

    /// Advances the fade; `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(0.0)
    }
}
