#![forbid(unsafe_code)]

//! Manual drag-resize tracking for the field surface.
//!
//! [`ResizeTracker`] records the pointer and surface height at drag start
//! and maps later pointer positions to a clamped target height. The first
//! height ever observed becomes the minimum for the lifetime of the tracker,
//! so a user can never drag the surface smaller than it was born.
//!
//! # Invariants
//!
//! 1. `track` never returns a height below the initial height.
//! 2. The initial height is captured once and survives across drags.

/// Pointer and height snapshot at drag start.
#[derive(Debug, Clone, Copy)]
struct DragState {
    start_y: f32,
    start_height: f32,
}

/// Drag-resize session state.
#[derive(Debug, Clone, Default)]
pub struct ResizeTracker {
    initial_height: Option<f32>,
    drag: Option<DragState>,
}

impl ResizeTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at the given pointer y with the current surface height.
    ///
    /// The first call also records the lifetime minimum height.
    pub fn begin(&mut self, pointer_y: f32, current_height: f32) {
        self.initial_height.get_or_insert(current_height);
        self.drag = Some(DragState {
            start_y: pointer_y,
            start_height: current_height,
        });
    }

    /// Map a pointer y to the clamped target height, if a drag is active.
    #[must_use]
    pub fn track(&self, pointer_y: f32) -> Option<f32> {
        let drag = self.drag?;
        let initial = self.initial_height.unwrap_or(drag.start_height);
        Some((drag.start_height + (pointer_y - drag.start_y)).max(initial))
    }

    /// End the drag. Returns whether one was active.
    pub fn finish(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The lifetime minimum height, once a drag has started.
    #[inline]
    #[must_use]
    pub fn initial_height(&self) -> Option<f32> {
        self.initial_height
    }
}
