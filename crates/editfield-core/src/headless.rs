#![forbid(unsafe_code)]

//! A recording [`Environment`] for headless tests.
//!
//! `HeadlessEnv` stores every effect a widget performs and counts the calls,
//! so tests can assert not only the final state but also how often the
//! surface was touched (the controlled-sync invariant is about write counts,
//! not just content).

use crate::env::Environment;
use crate::geometry::Point;
use crate::style::SurfaceStyle;

/// In-memory environment that records all widget effects.
#[derive(Debug, Clone)]
pub struct HeadlessEnv {
    /// Current surface content.
    pub content: String,
    /// Number of `set_content` calls.
    pub content_sets: u32,
    /// Current editability of the surface.
    pub editable: bool,
    /// Whether the surface holds focus. Tests flip this directly to simulate
    /// focus changes; `blur` clears it.
    pub focused: bool,
    /// Number of `blur` requests.
    pub blur_requests: u32,
    /// Number of selection collapses to the content end.
    pub caret_collapses: u32,
    /// Current surface height in pixels.
    pub height: f32,
    /// Last applied style.
    pub style: SurfaceStyle,
    /// Document scroll offset reported to the widget.
    pub scroll: Point,
    /// Whether the environment reports a touch device.
    pub touch: bool,
    /// Hrefs opened via `open_link`, in order.
    pub opened_links: Vec<String>,
    /// Current tooltip text and position, if shown.
    pub tooltip: Option<(String, Point)>,
    /// Number of `show_tooltip` calls.
    pub tooltip_shows: u32,
    /// Whether document-wide text selection is enabled.
    pub selection_enabled: bool,
    /// Whether a pointer capture is active.
    pub pointer_captured: bool,
    /// Optional URL-to-anchor rewriter applied at commit.
    pub link_rewriter: Option<fn(&str) -> String>,
}

impl Default for HeadlessEnv {
    fn default() -> Self {
        Self {
            content: String::new(),
            content_sets: 0,
            editable: true,
            focused: false,
            blur_requests: 0,
            caret_collapses: 0,
            height: 0.0,
            style: SurfaceStyle::new(),
            scroll: Point::ZERO,
            touch: false,
            opened_links: Vec::new(),
            tooltip: None,
            tooltip_shows: 0,
            selection_enabled: true,
            pointer_captured: false,
            link_rewriter: None,
        }
    }
}

impl HeadlessEnv {
    /// Create a fresh environment with default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focus state (builder).
    #[must_use]
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Report a touch device (builder).
    #[must_use]
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// Set the document scroll offset (builder).
    #[must_use]
    pub fn with_scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set the initial surface height (builder).
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Install a URL-to-anchor rewriter (builder).
    #[must_use]
    pub fn with_link_rewriter(mut self, rewriter: fn(&str) -> String) -> Self {
        self.link_rewriter = Some(rewriter);
        self
    }
}

impl Environment for HeadlessEnv {
    fn set_content(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
        self.content_sets += 1;
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn blur(&mut self) {
        self.focused = false;
        self.blur_requests += 1;
    }

    fn collapse_selection_to_end(&mut self) {
        self.caret_collapses += 1;
    }

    fn surface_height(&self) -> f32 {
        self.height
    }

    fn set_surface_height(&mut self, height: f32) {
        self.height = height;
    }

    fn apply_style(&mut self, style: &SurfaceStyle) {
        self.style = style.clone();
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn is_touch(&self) -> bool {
        self.touch
    }

    fn open_link(&mut self, href: &str) {
        self.opened_links.push(href.to_string());
    }

    fn show_tooltip(&mut self, text: &str, position: Point) {
        self.tooltip = Some((text.to_string(), position));
        self.tooltip_shows += 1;
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn set_text_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    fn capture_pointer(&mut self) {
        self.pointer_captured = true;
    }

    fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }

    fn anchor_links(&self, text: &str) -> String {
        match self.link_rewriter {
            Some(rewrite) => rewrite(text),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_content_writes() {
        let mut env = HeadlessEnv::new();
        env.set_content("one");
        env.set_content("two");
        assert_eq!(env.content, "two");
        assert_eq!(env.content_sets, 2);
    }

    #[test]
    fn blur_clears_focus() {
        let mut env = HeadlessEnv::new().with_focus(true);
        assert!(env.has_focus());
        env.blur();
        assert!(!env.has_focus());
        assert_eq!(env.blur_requests, 1);
    }

    #[test]
    fn tooltip_roundtrip() {
        let mut env = HeadlessEnv::new();
        env.show_tooltip("hint", Point::new(3.0, 7.0));
        assert_eq!(env.tooltip, Some(("hint".to_string(), Point::new(3.0, 7.0))));
        env.hide_tooltip();
        assert!(env.tooltip.is_none());
    }

    #[test]
    fn anchor_links_defaults_to_passthrough() {
        let env = HeadlessEnv::new();
        assert_eq!(env.anchor_links("see https://example.org"), "see https://example.org");
    }

    #[test]
    fn anchor_links_uses_rewriter() {
        let env = HeadlessEnv::new().with_link_rewriter(|text| format!("<p>{text}</p>"));
        assert_eq!(env.anchor_links("hi"), "<p>hi</p>");
    }
}
