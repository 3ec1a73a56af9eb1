//! # HERALD UI
//!
//! Overlay lifecycle on top of the `herald_core` placement engine:
//! configuration surface, show/dismiss state machine, fade, visibility
//! events, trigger/dismiss gesture mapping and render-command emission.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  OVERLAY LIFECYCLE                         │
//! ├───────────────────────────────────────────────────────────┤
//! │  Gesture → Trigger Map → Controller → Placement Engine    │
//! │      ↓          ↓            ↓              ↓             │
//! │  PressTracker  Modes    Fade/Events   Render Commands     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! This is a best-effort visual affordance, never on a critical path.
//! Every failure degrades to "nothing is shown": absent message, unresolved
//! target geometry and double-release are all silent no-ops.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod controller;
pub mod events;
pub mod fade;
pub mod overlay;
pub mod render;
pub mod style;
pub mod trigger;

pub use config::{ConfigError, HeraldConfig};
pub use controller::{HeraldController, LifecycleState, SharedController};
pub use events::{ListenerId, ListenerSet, VisibilityEvent};
pub use fade::{Fade, FadeEasing};
pub use overlay::{OverlayEntry, OverlayHost, OverlayId, TargetProvider};
pub use render::{build_overlay_commands, tessellate_pointer, PointerVertex, RenderCommand};
pub use style::{BubbleStyle, Color};
pub use trigger::{DismissMode, PressTracker, TriggerEvent, TriggerMode};
