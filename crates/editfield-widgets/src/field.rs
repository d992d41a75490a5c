#![forbid(unsafe_code)]

//! Editable text field widget.
//!
//! An inline rich-text field driven by a host [`Environment`]. The widget
//! owns a [`DraftState`] controlled-value machine plus the interaction
//! trackers around it (hover tooltip, drag resize, ctrl affordance) and
//! turns host events into effects on the surface.
//!
//! # Lifecycle contract
//!
//! Hosts call [`TextField::mount`] once the surface exists, feed every event
//! through [`TextField::handle_event`] with their clock, poll
//! [`TextField::check_tooltip`] from their tick, push external value changes
//! through [`TextField::set_value`], and call [`TextField::unmount`] before
//! the surface goes away. `unmount` cancels the pending tooltip deadline and
//! ends any resize drag, so no capture or suppressed selection outlives the
//! widget.
//!
//! # Invariants
//!
//! 1. The surface is rewritten only when the draft revision advances past
//!    the last applied revision. Live edits alone never rewrite it.
//! 2. A commit never mutates field state; owners feed the committed text
//!    back through [`TextField::set_value`] to complete the round trip.
//! 3. Escape reverts the draft, requests blur, and suppresses exactly one
//!    following blur commit.
//! 4. While Ctrl is held the surface is not editable; release restores the
//!    editability the props call for.

use editfield_core::env::Environment;
use editfield_core::event::{
    Event, HitTarget, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, PointerEvent,
    PointerKind,
};
use editfield_core::geometry::Point;
use editfield_core::style::SurfaceStyle;
use web_time::{Duration, Instant};

use crate::draft::DraftState;
use crate::resize::ResizeTracker;
use crate::tooltip::HoverTooltip;

/// Delay between the pointer settling over an anchor and the hint showing.
const DEFAULT_TOOLTIP_DELAY: Duration = Duration::from_millis(250);

/// Hint shown over link anchors unless overridden.
const DEFAULT_LINK_HINT: &str = "ctrl+click to open";

/// Vertical gap in pixels between an anchor's bottom edge and the tooltip.
const TOOLTIP_GAP: f32 = 2.0;

bitflags::bitflags! {
    /// Presentation states derived from field props and draft content.
    ///
    /// Hosts map these onto surface classes or attributes. The flags are
    /// recomputed on demand and never stored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VisualFlags: u8 {
        /// Editing is disabled entirely.
        const DISABLED = 0b0000_0001;
        /// Muted presentation: the field is read-only or the draft is empty.
        const READONLY = 0b0000_0010;
        /// A required field is empty while it could accept input.
        const INVALID  = 0b0000_0100;
    }
}

/// Outcome of feeding an event to a [`TextField`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum EventResult {
    /// The event did not concern the field.
    Ignored,

    /// The field consumed the event. For key and pointer events the host
    /// should suppress the default action.
    Handled,

    /// A commit trigger fired on a dirty draft. The payload is the draft
    /// with link anchors applied, ready for the owner to store.
    Committed(String),
}

impl EventResult {
    /// Whether this result carries a committed value.
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Whether the field consumed the event at all.
    #[inline]
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Form payload mirrored from the field, for hosts that submit forms.
///
/// Mirrors a hidden form input: the submitted value is the live draft, not
/// the last committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField<'a> {
    /// Submission name.
    pub name: &'a str,

    /// Current draft text.
    pub value: &'a str,

    /// Whether submission requires a non-empty value.
    pub required: bool,
}

/// An inline editable text field.
#[derive(Debug, Clone)]
pub struct TextField {
    /// Controlled-value draft machine.
    state: DraftState,
    /// Revision last written to the surface. `None` before the first write.
    applied_revision: Option<u64>,
    /// Placeholder text shown while the draft is empty.
    placeholder: String,
    /// Form submission name. `None` keeps the field out of forms.
    name: Option<String>,
    /// Whether editing is disabled.
    disabled: bool,
    /// Whether the field is read-only.
    read_only: bool,
    /// Whether an empty draft should present as invalid.
    required: bool,
    /// Whether the field accepts newlines and offers the resize handle.
    multiline: bool,
    /// Pass-through style declarations for the surface.
    style: SurfaceStyle,
    /// Tooltip text shown over link anchors.
    link_hint: String,
    /// Debounce delay before the link hint shows.
    tooltip_delay: Duration,
    /// One-shot flag: the next blur must not commit.
    skip_commit_on_blur: bool,
    /// Whether the last pointer press found the surface unfocused.
    pressed_while_unfocused: bool,
    /// Editability to restore when Ctrl is released, while Ctrl is held.
    ctrl_restore: Option<bool>,
    /// Link hover tooltip debounce state.
    tooltip: HoverTooltip,
    /// Drag-resize session state.
    resize: ResizeTracker,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            state: DraftState::default(),
            applied_revision: None,
            placeholder: String::new(),
            name: None,
            disabled: false,
            read_only: false,
            required: false,
            multiline: false,
            style: SurfaceStyle::new(),
            link_hint: DEFAULT_LINK_HINT.to_string(),
            tooltip_delay: DEFAULT_TOOLTIP_DELAY,
            skip_commit_on_blur: false,
            pressed_while_unfocused: false,
            ctrl_restore: None,
            tooltip: HoverTooltip::new(),
            resize: ResizeTracker::new(),
        }
    }
}

impl TextField {
    /// Create a new empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the external value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.state = DraftState::new(value);
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the form submission name (builder).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether editing is disabled (builder).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the field is read-only (builder).
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set whether an empty draft presents as invalid (builder).
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set whether the field accepts newlines and can be resized (builder).
    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Set pass-through surface style declarations (builder).
    #[must_use]
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the link hover hint text (builder).
    #[must_use]
    pub fn with_link_hint(mut self, hint: impl Into<String>) -> Self {
        self.link_hint = hint.into();
        self
    }

    /// Set the link hint debounce delay (builder).
    #[must_use]
    pub fn with_tooltip_delay(mut self, delay: Duration) -> Self {
        self.tooltip_delay = delay;
        self
    }

    // --- Lifecycle ---

    /// Push the initial state onto a freshly created surface.
    pub fn mount(&mut self, env: &mut dyn Environment) {
        env.set_editable(self.is_editable());
        env.apply_style(&self.style);
        self.apply_content(env);
    }

    /// Tear down before the surface goes away.
    ///
    /// Cancels the pending tooltip deadline, hides a visible tooltip, ends
    /// any resize drag (restoring text selection and releasing the pointer
    /// capture), and drops a held Ctrl affordance.
    pub fn unmount(&mut self, env: &mut dyn Environment) {
        self.tooltip.cancel_pending();
        if self.tooltip.dismiss() {
            env.hide_tooltip();
        }
        self.end_resize(env);
        self.ctrl_restore = None;
    }

    /// Adopt a new external value from the owner.
    ///
    /// A value equal to the current one is a no-op and leaves an in-progress
    /// draft untouched, so owner re-renders never clobber typing. A new
    /// value replaces the draft, clears the dirty flag, and rewrites the
    /// surface once.
    pub fn set_value(&mut self, env: &mut dyn Environment, value: &str) {
        if self.state.observe(value) {
            self.apply_content(env);
        }
    }

    /// Write the current value to the surface if its revision is unapplied.
    fn apply_content(&mut self, env: &mut dyn Environment) {
        if self
            .applied_revision
            .is_some_and(|applied| self.state.revision() <= applied)
        {
            return;
        }
        env.set_content(self.state.value());
        if env.has_focus() {
            // A rewrite resets the caret to the content start; put it back
            // at the end so typing continues where the user expects.
            env.collapse_selection_to_end();
        }
        self.applied_revision = Some(self.state.revision());
    }

    // --- Prop updates ---

    /// Update the disabled prop and push the resulting editability.
    pub fn set_disabled(&mut self, env: &mut dyn Environment, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        self.push_editable(env);
    }

    /// Update the read-only prop and push the resulting editability.
    pub fn set_read_only(&mut self, env: &mut dyn Environment, read_only: bool) {
        if self.read_only == read_only {
            return;
        }
        self.read_only = read_only;
        self.push_editable(env);
    }

    /// Update the required prop.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Update the multiline prop. Turning it off ends an active resize drag.
    pub fn set_multiline(&mut self, env: &mut dyn Environment, multiline: bool) {
        self.multiline = multiline;
        if !multiline {
            self.end_resize(env);
        }
    }

    /// Update the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Update the pass-through style and re-apply it to the surface.
    pub fn set_style(&mut self, env: &mut dyn Environment, style: SurfaceStyle) {
        self.style = style;
        env.apply_style(&self.style);
    }

    fn push_editable(&mut self, env: &mut dyn Environment) {
        let editable = self.is_editable();
        if self.ctrl_restore.is_some() {
            // Ctrl is held: the surface stays locked and the release will
            // restore the new state instead of the one saved at press time.
            self.ctrl_restore = Some(editable);
        } else {
            env.set_editable(editable);
        }
    }

    // --- Queries ---

    /// The last committed external value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// The live draft text.
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &str {
        self.state.draft()
    }

    /// Monotone revision of the external value.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Whether the draft has uncommitted edits.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Whether the field accepts edits under its current props.
    #[inline]
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// The placeholder text.
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the host should render the placeholder right now.
    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        self.state.draft().is_empty() && !self.placeholder.is_empty()
    }

    /// Whether the field accepts newlines.
    #[inline]
    #[must_use]
    pub fn multiline(&self) -> bool {
        self.multiline
    }

    /// Whether editing is disabled.
    #[inline]
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the field is read-only.
    #[inline]
    #[must_use]
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Whether an empty draft presents as invalid.
    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// The link hover hint text.
    #[inline]
    #[must_use]
    pub fn link_hint(&self) -> &str {
        &self.link_hint
    }

    /// Whether the link hint tooltip is currently visible.
    #[inline]
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.is_visible()
    }

    /// Whether a resize drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_dragging()
    }

    /// Presentation flags derived from props and draft content.
    #[must_use]
    pub fn visual_flags(&self) -> VisualFlags {
        let mut flags = VisualFlags::empty();
        let empty = self.state.draft().is_empty();
        if self.disabled {
            flags |= VisualFlags::DISABLED;
        }
        if self.read_only || empty {
            flags |= VisualFlags::READONLY;
        }
        // Invalid only while the field could actually accept input.
        if self.required && empty && self.is_editable() {
            flags |= VisualFlags::INVALID;
        }
        flags
    }

    /// Form payload for hosts that submit forms, if the field has a name.
    #[must_use]
    pub fn form_field(&self) -> Option<FormField<'_>> {
        self.name.as_deref().map(|name| FormField {
            name,
            value: self.state.draft(),
            required: self.required,
        })
    }

    // --- Event handling ---

    /// Handle a host event.
    ///
    /// `now` is the host clock reading for this event; it anchors the
    /// tooltip debounce deadline.
    pub fn handle_event(
        &mut self,
        env: &mut dyn Environment,
        event: &Event,
        now: Instant,
    ) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(env, key),
            Event::Pointer(pointer) => self.handle_pointer(env, pointer, now),
            Event::Input(input) => {
                if self.is_editable() {
                    self.state.edit(&input.text);
                    #[cfg(feature = "tracing")]
                    self.trace_field("edit");
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
            Event::Focus(false) => self.handle_blur(env),
            Event::Focus(true) | Event::Tick => EventResult::Ignored,
        }
    }

    /// Poll the tooltip deadline against the host clock.
    ///
    /// Shows (or repositions) the link hint when the debounce delay has
    /// elapsed since the last hover move. Returns `true` when it fired.
    pub fn check_tooltip(&mut self, env: &mut dyn Environment, now: Instant) -> bool {
        match self.tooltip.poll(now) {
            Some(position) => {
                env.show_tooltip(&self.link_hint, position);
                true
            }
            None => false,
        }
    }

    fn handle_key(&mut self, env: &mut dyn Environment, key: &KeyEvent) -> EventResult {
        match (key.code, key.kind) {
            (KeyCode::Control, KeyEventKind::Press | KeyEventKind::Repeat) => {
                // Key repeat must not overwrite the saved state.
                if self.ctrl_restore.is_none() {
                    self.ctrl_restore = Some(self.is_editable());
                    env.set_editable(false);
                }
                EventResult::Handled
            }
            (KeyCode::Control, KeyEventKind::Release) => match self.ctrl_restore.take() {
                Some(editable) => {
                    env.set_editable(editable);
                    EventResult::Handled
                }
                None => EventResult::Ignored,
            },
            (KeyCode::Enter, KeyEventKind::Press | KeyEventKind::Repeat) if !self.multiline => {
                // Single-line fields never take a newline, committed or not.
                match self.commit(env) {
                    Some(text) => EventResult::Committed(text),
                    None => EventResult::Handled,
                }
            }
            (KeyCode::Escape, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.cancel(env);
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_pointer(
        &mut self,
        env: &mut dyn Environment,
        pointer: &PointerEvent,
        now: Instant,
    ) -> EventResult {
        match pointer.kind {
            PointerKind::Down(button) => {
                if button == MouseButton::Left
                    && pointer.target == HitTarget::ResizeHandle
                    && self.multiline
                {
                    self.begin_resize(env, pointer.position.y);
                    return EventResult::Handled;
                }
                self.pressed_while_unfocused = !env.has_focus();
                EventResult::Ignored
            }
            PointerKind::Up(_) => {
                if self.end_resize(env) {
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
            PointerKind::Click(MouseButton::Left) => self.handle_click(env, pointer),
            PointerKind::Click(_) => EventResult::Ignored,
            PointerKind::Move => self.handle_move(env, pointer, now),
            PointerKind::Leave => {
                self.tooltip.cancel_pending();
                if self.tooltip.dismiss() {
                    env.hide_tooltip();
                }
                EventResult::Ignored
            }
        }
    }

    fn handle_click(&mut self, env: &mut dyn Environment, pointer: &PointerEvent) -> EventResult {
        // Navigation is an entering gesture: it fires only when the press
        // that produced this click found the surface unfocused, so clicks
        // inside an active editing session keep placing the caret.
        if !pointer.modifiers.contains(Modifiers::CTRL) || !self.pressed_while_unfocused {
            return EventResult::Ignored;
        }
        let Some(anchor) = pointer.target.as_anchor() else {
            return EventResult::Ignored;
        };
        match anchor.href.as_deref() {
            Some(href) if !href.is_empty() => {
                env.open_link(href);
                #[cfg(feature = "tracing")]
                self.trace_field("open_link");
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_move(
        &mut self,
        env: &mut dyn Environment,
        pointer: &PointerEvent,
        now: Instant,
    ) -> EventResult {
        let resized = match self.resize.track(pointer.position.y) {
            Some(height) => {
                env.set_surface_height(height);
                true
            }
            None => false,
        };

        let hovered_anchor = if !env.is_touch() && self.is_editable() {
            pointer.target.as_anchor()
        } else {
            None
        };

        // Every move restarts the debounce, so the hint appears a full
        // delay after the pointer settles.
        self.tooltip.cancel_pending();
        match hovered_anchor {
            Some(anchor) => {
                let scroll = env.scroll_offset();
                let position = Point::new(
                    anchor.bounds.left() + scroll.x,
                    anchor.bounds.bottom() + scroll.y + TOOLTIP_GAP,
                );
                self.tooltip.arm(now + self.tooltip_delay, position);
            }
            None => {
                if self.tooltip.dismiss() {
                    env.hide_tooltip();
                }
            }
        }

        if resized {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn handle_blur(&mut self, env: &mut dyn Environment) -> EventResult {
        if std::mem::take(&mut self.skip_commit_on_blur) {
            return EventResult::Handled;
        }
        match self.commit(env) {
            Some(text) => EventResult::Committed(text),
            None => EventResult::Handled,
        }
    }

    /// Revert the draft to the external value and leave the field.
    ///
    /// The surface is rewritten with the reverted value, the next blur is
    /// marked to skip its commit, and the host is asked to drop focus.
    pub fn cancel(&mut self, env: &mut dyn Environment) {
        self.state.reset();
        self.apply_content(env);
        self.skip_commit_on_blur = true;
        env.blur();
        #[cfg(feature = "tracing")]
        self.trace_field("cancel");
    }

    /// Produce the commit payload if the draft is dirty.
    ///
    /// Does not mutate field state. The dirty flag clears only when the
    /// owner feeds the committed value back through [`set_value`](Self::set_value).
    fn commit(&mut self, env: &mut dyn Environment) -> Option<String> {
        if !self.state.is_dirty() {
            return None;
        }
        #[cfg(feature = "tracing")]
        self.trace_field("commit");
        Some(env.anchor_links(self.state.draft()))
    }

    fn begin_resize(&mut self, env: &mut dyn Environment, pointer_y: f32) {
        self.resize.begin(pointer_y, env.surface_height());
        // A height drag would otherwise sweep a text selection across
        // the page.
        env.set_text_selection_enabled(false);
        env.capture_pointer();
    }

    fn end_resize(&mut self, env: &mut dyn Environment) -> bool {
        if !self.resize.finish() {
            return false;
        }
        env.set_text_selection_enabled(true);
        env.release_pointer();
        true
    }

    #[cfg(feature = "tracing")]
    fn trace_field(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "field.event",
            operation,
            revision = self.state.revision(),
            dirty = self.state.is_dirty()
        )
        .entered();
    }
}
