#![forbid(unsafe_code)]

//! Hover tooltip debounce tracking.
//!
//! [`HoverTooltip`] holds the pending deadline and captured position for the
//! link hover hint. The widget re-arms it on every pointer move over an
//! anchor (so the hint appears a fixed delay after the pointer settles) and
//! the host polls [`poll`](HoverTooltip::poll) with its clock. No callbacks:
//! deadlines are plain state.
//!
//! # Invariants
//!
//! 1. `poll` fires a given deadline at most once.
//! 2. `cancel_pending` before the deadline means the tooltip never shows.
//! 3. Once visible, only [`dismiss`](HoverTooltip::dismiss) hides it; a new
//!    `poll` fire while visible repositions instead.

use editfield_core::geometry::Point;
use web_time::Instant;

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Instant,
    position: Point,
}

/// Debounce state for the link hover tooltip.
#[derive(Debug, Clone, Default)]
pub struct HoverTooltip {
    pending: Option<Pending>,
    visible: bool,
}

impl HoverTooltip {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the deadline with a captured tooltip position.
    pub fn arm(&mut self, deadline: Instant, position: Point) {
        self.pending = Some(Pending { deadline, position });
    }

    /// Cancel any pending deadline without touching a visible tooltip.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Check the pending deadline against the given clock.
    ///
    /// When the deadline has elapsed, consumes it, marks the tooltip
    /// visible, and returns the position to show it at. Returns `None`
    /// while the deadline is in the future or nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<Point> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        self.visible = true;
        Some(pending.position)
    }

    /// Mark the tooltip hidden. Returns whether it was visible.
    pub fn dismiss(&mut self) -> bool {
        std::mem::take(&mut self.visible)
    }

    /// Whether the tooltip is currently visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
