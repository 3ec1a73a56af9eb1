//! Collaborator seams: the overlay host and the target geometry provider.
//!
//! The host owns the render tree; the controller owns the inserted overlay
//! entry. Nothing else may insert or remove it.

use herald_core::{Placement, Rect, Viewport};

use crate::render::RenderCommand;

/// Identifier of an inserted overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Everything the host needs to paint one overlay.
#[derive(Debug, Clone)]
pub struct OverlayEntry {
    /// The placement decision that produced this entry.
    pub placement: Placement,
    /// Target rectangle snapshotted at show time.
    pub target: Rect,
    /// Render commands at full opacity; the host multiplies in
    /// [`crate::HeraldController::opacity`] each frame.
    pub commands: Vec<RenderCommand>,
}

/// The render-tree collaborator the controller inserts overlays into.
pub trait OverlayHost {
    /// Inserts an overlay entry and returns its id.
    fn insert(&mut self, entry: OverlayEntry) -> OverlayId;

    /// Removes a previously inserted entry. Removing an id that is already
    /// gone must be a safe no-op.
    fn remove(&mut self, id: OverlayId);
}

/// Supplies target geometry and the viewport, read at show time.
pub trait TargetProvider {
    /// Position and size of the target in viewport coordinates, or `None`
    /// while the target is not laid out yet.
    fn target_rect(&self) -> Option<Rect>;

    /// The visible screen area plus safe-area insets.
    fn viewport(&self) -> Viewport;
}
