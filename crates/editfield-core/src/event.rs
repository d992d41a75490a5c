#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types hosts deliver to editfield
//! widgets. All events derive `Clone` and `PartialEq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are `f32` pixels in viewport space; anchor bounds
//!   come from the host's hit test and are viewport-relative as well.
//! - [`HitTarget`] carries what a DOM host would expose via the event target:
//!   whether the pointer is over the editable content, a link anchor (with
//!   its href and bounding box), the resize handle, or outside the widget.
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish.
//! - [`KeyCode::Control`] exists because widgets react to the modifier key
//!   itself being pressed and released, not only to modified keys.
//! - `InputEvent` is a notification that the surface content already changed;
//!   it carries the live text after the edit.

use bitflags::bitflags;

use crate::geometry::{Point, Rect};

/// Canonical input event.
///
/// This enum represents all input the host loop can hand to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer event with a host-resolved hit target.
    Pointer(PointerEvent),

    /// The editable surface content changed from user editing.
    Input(InputEvent),

    /// Focus gained or lost on the editable surface.
    ///
    /// `true` = focus gained, `false` = focus lost. A focus-lost event also
    /// follows a programmatic [`Environment::blur`](crate::env::Environment::blur).
    Focus(bool),

    /// Periodic tick from the host loop.
    ///
    /// Widgets with pending deadlines are polled separately; the tick exists
    /// so hosts can forward their clock without synthesizing input.
    Tick,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Delete key.
    Delete,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// The Control modifier key itself.
    Control,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key or pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerKind,

    /// Pointer position in viewport pixels.
    pub position: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// What the pointer is over, resolved by the host's hit test.
    pub target: HitTarget,
}

impl PointerEvent {
    /// Create a new pointer event over the editable content.
    #[must_use]
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            position,
            modifiers: Modifiers::NONE,
            target: HitTarget::Content,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a pointer event with a specific hit target.
    #[must_use]
    pub fn with_target(mut self, target: HitTarget) -> Self {
        self.target = target;
        self
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer button pressed down.
    Down(MouseButton),

    /// Pointer button released.
    Up(MouseButton),

    /// A completed click (down and up on the same target).
    Click(MouseButton),

    /// Pointer moved. During an active pointer capture, moves outside the
    /// widget are still delivered with [`HitTarget::Outside`].
    Move,

    /// Pointer left the widget region entirely.
    Leave,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,

    /// Right mouse button.
    Right,

    /// Middle mouse button.
    Middle,
}

/// What a pointer event is over.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    /// The editable content surface itself.
    Content,

    /// A rendered link anchor inside the content.
    Anchor(AnchorHit),

    /// The manual resize handle below the surface.
    ResizeHandle,

    /// Outside the widget (only seen during pointer capture).
    Outside,
}

impl HitTarget {
    /// Get the anchor hit, if the target is an anchor.
    #[must_use]
    pub fn as_anchor(&self) -> Option<&AnchorHit> {
        match self {
            Self::Anchor(hit) => Some(hit),
            _ => None,
        }
    }
}

/// Details of a pointer event over a link anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorHit {
    /// The anchor's link target. `None` when the anchor has no href.
    pub href: Option<String>,

    /// The anchor's bounding box in viewport pixels.
    pub bounds: Rect,
}

impl AnchorHit {
    /// Create a new anchor hit.
    #[must_use]
    pub fn new(href: Option<impl Into<String>>, bounds: Rect) -> Self {
        Self {
            href: href.map(Into::into),
            bounds,
        }
    }
}

/// A live-edit notification from the editable surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The full surface text after the edit.
    pub text: String,
}

impl InputEvent {
    /// Create a new input event.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn key_event_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
        assert!(!event.alt());
        assert!(!event.shift());
    }

    #[test]
    fn key_event_combined_modifiers() {
        let event =
            KeyEvent::new(KeyCode::Char('s')).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(event.ctrl());
        assert!(event.shift());
        assert!(!event.alt());
    }

    #[test]
    fn key_event_kind() {
        let press = KeyEvent::new(KeyCode::Enter);
        assert_eq!(press.kind, KeyEventKind::Press);

        let release = press.with_kind(KeyEventKind::Release);
        assert_eq!(release.kind, KeyEventKind::Release);
    }

    #[test]
    fn pointer_event_defaults() {
        let event = PointerEvent::new(PointerKind::Move, Point::new(4.0, 8.0));
        assert_eq!(event.position, Point::new(4.0, 8.0));
        assert_eq!(event.modifiers, Modifiers::NONE);
        assert_eq!(event.target, HitTarget::Content);
    }

    #[test]
    fn pointer_event_with_modifiers() {
        let event = PointerEvent::new(PointerKind::Click(MouseButton::Left), Point::new(0.0, 0.0))
            .with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
    }

    #[test]
    fn pointer_event_anchor_target() {
        let bounds = Rect::new(10.0, 20.0, 40.0, 12.0);
        let event = PointerEvent::new(PointerKind::Move, Point::new(12.0, 22.0))
            .with_target(HitTarget::Anchor(AnchorHit::new(Some("https://example.org"), bounds)));

        let anchor = event.target.as_anchor().unwrap();
        assert_eq!(anchor.href.as_deref(), Some("https://example.org"));
        assert_eq!(anchor.bounds, bounds);
    }

    #[test]
    fn anchor_without_href() {
        let hit = AnchorHit::new(None::<&str>, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(hit.href.is_none());
    }

    #[test]
    fn input_event_creation() {
        let input = InputEvent::new("hello world");
        assert_eq!(input.text, "hello world");
    }

    #[test]
    fn event_variants() {
        // Test that all event variants can be created
        let _key = Event::Key(KeyEvent::new(KeyCode::Char('a')));
        let _pointer = Event::Pointer(PointerEvent::new(
            PointerKind::Down(MouseButton::Left),
            Point::new(0.0, 0.0),
        ));
        let _input = Event::Input(InputEvent::new("text"));
        let _focus = Event::Focus(true);
        let _tick = Event::Tick;
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn key_event_kind_default() {
        assert_eq!(KeyEventKind::default(), KeyEventKind::Press);
    }

    #[test]
    fn event_is_clone_and_eq() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('x')));
        let cloned = event.clone();
        assert_eq!(event, cloned);
    }
}
