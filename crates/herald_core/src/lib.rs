//! # HERALD Core
//!
//! The placement engine: given a target rectangle, a viewport and a message,
//! decide which side of the target the bubble appears on, how far the
//! pointer triangle is pushed out, and how much the bubble body must slide
//! to stay inside the viewport.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   PLACEMENT PIPELINE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  Target Rect → Half Classify → Measure → Anchor Pair     │
//! │       ↓              ↓             ↓           ↓         │
//! │   Validate     Available Width  Bubble Size  Edge Clamp  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! Two stages, deliberately decoupled: anchor selection answers "which
//! side", the clamp correction answers "how far to nudge". The pointer
//! stays geometrically attached to the target while the bubble body slides.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod anchor;
pub mod geometry;
pub mod placement;

pub use anchor::{select_anchors, Anchor, Axis, Halves, HorizontalHalf, PointerDirection, PointerSpec, VerticalHalf};
pub use geometry::{EdgeInsets, Rect, SafeArea, Size, Vec2, Viewport};
pub use placement::{place, MeasureContent, MonospaceMeasurer, Placement, PlacementConfig, PointerPlacement};
