#![forbid(unsafe_code)]

//! The host environment seam.
//!
//! [`Environment`] is the boundary between widget logic and the surface it
//! drives. Widgets own their state machines; every ambient effect (writing
//! content, moving the caret, opening links, showing tooltips, capturing the
//! pointer) goes through this trait. A DOM host maps each method onto one
//! document operation; test suites substitute a recording implementation.
//!
//! # Invariants
//!
//! 1. Methods never fail. A host that cannot honor an operation degrades to
//!    a no-op; widgets are written to tolerate that.
//! 2. `blur` requests focus loss but does not deliver it: the host follows
//!    up with an `Event::Focus(false)` through its normal event flow, so
//!    widget code observes its own blur the same way it observes a user's.
//! 3. While a pointer capture is active, the host keeps delivering `Move`
//!    and `Up` events to the widget even when the pointer has left it.
//!
//! Timers deliberately do not appear here. Widgets store deadlines and the
//! host polls them with an injected clock, so no callback machinery crosses
//! the boundary.

use crate::geometry::Point;
use crate::style::SurfaceStyle;

/// Capabilities a host lends to a widget.
///
/// Each method corresponds to one ambient operation on the host surface. On
/// a DOM host the mapping is direct: content is the element's markup,
/// editability is the content-editable attribute, `collapse_selection_to_end`
/// is a selection-range collapse, and so on.
pub trait Environment {
    /// Replace the surface content with the given markup/text.
    fn set_content(&mut self, content: &str);

    /// Enable or disable editing on the surface.
    fn set_editable(&mut self, editable: bool);

    /// Whether the surface currently holds input focus.
    fn has_focus(&self) -> bool;

    /// Request that the surface give up focus.
    ///
    /// The host delivers the resulting `Event::Focus(false)` through its
    /// normal event flow.
    fn blur(&mut self);

    /// Collapse the selection to the end of the surface content.
    ///
    /// Called after a content rewrite while the surface holds focus, so the
    /// caret does not end up stranded before re-inserted text.
    fn collapse_selection_to_end(&mut self);

    /// Current rendered height of the surface in pixels.
    fn surface_height(&self) -> f32;

    /// Set an explicit surface height in pixels.
    fn set_surface_height(&mut self, height: f32);

    /// Apply pass-through style declarations to the surface.
    fn apply_style(&mut self, style: &SurfaceStyle);

    /// Current document scroll offset in pixels.
    ///
    /// Added to viewport-relative anchor bounds to produce document
    /// coordinates for tooltip placement.
    fn scroll_offset(&self) -> Point;

    /// Whether the active pointing device is a touch screen.
    fn is_touch(&self) -> bool;

    /// Open a link target in a new browsing context.
    fn open_link(&mut self, href: &str);

    /// Show the hover tooltip with the given text at a document position.
    ///
    /// Idempotent: the first call creates the tooltip element, later calls
    /// reposition it and update its text.
    fn show_tooltip(&mut self, text: &str, position: Point);

    /// Remove the hover tooltip if present.
    fn hide_tooltip(&mut self);

    /// Enable or disable text selection document-wide.
    ///
    /// Disabled for the duration of a resize drag so the drag does not
    /// sweep a selection across the page.
    fn set_text_selection_enabled(&mut self, enabled: bool);

    /// Begin routing all pointer events to the widget.
    fn capture_pointer(&mut self);

    /// End pointer capture started by [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self);

    /// Rewrite plain URLs in committed text into anchor markup.
    ///
    /// The default implementation returns the text unchanged; hosts with a
    /// link-anchoring helper override this.
    fn anchor_links(&self, text: &str) -> String {
        text.to_string()
    }
}
