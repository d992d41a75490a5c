#![forbid(unsafe_code)]

//! Controlled-value state machine.
//!
//! A [`DraftState`] reconciles an externally controlled value with local
//! edits. The external value and a monotonic revision counter live next to
//! the in-progress draft and a dirty flag, so the widget can tell a genuine
//! external change (revision advances, surface must be rewritten) from a
//! mere re-render (revision unchanged, the user's typing must survive).
//!
//! # Invariants
//!
//! 1. `revision` never decreases; it advances only in [`observe`] (on a
//!    changed value) and [`reset`].
//! 2. Immediately after `observe` adopts a value, `draft == value` and the
//!    dirty flag is clear.
//! 3. [`edit`] never touches `value` or `revision`.
//!
//! [`observe`]: DraftState::observe
//! [`reset`]: DraftState::reset
//! [`edit`]: DraftState::edit

/// Reconciles an externally controlled value with local edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    /// Last external value observed.
    value: String,
    /// Bumped on every external change and on reset.
    revision: u64,
    /// In-progress local text.
    draft: String,
    /// Whether the draft changed since the last sync.
    dirty: bool,
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new("")
    }
}

impl DraftState {
    /// Create a state holding the given external value.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let draft = value.clone();
        Self {
            value,
            revision: 0,
            draft,
            dirty: false,
        }
    }

    /// Adopt an externally controlled value.
    ///
    /// A value identical to the current one is a no-op (a re-render, not a
    /// change). A differing value advances the revision, replaces the draft,
    /// and clears the dirty flag. Returns whether the revision advanced.
    pub fn observe(&mut self, external: &str) -> bool {
        if self.value == external {
            return false;
        }
        self.value.clear();
        self.value.push_str(external);
        self.draft.clear();
        self.draft.push_str(external);
        self.revision += 1;
        self.dirty = false;
        true
    }

    /// Record a local edit from the surface.
    ///
    /// Strips a single trailing line-break artifact from the live text and
    /// marks the draft dirty.
    pub fn edit(&mut self, live_text: &str) {
        let stripped = strip_trailing_break(live_text);
        self.draft.clear();
        self.draft.push_str(stripped);
        self.dirty = true;
    }

    /// Discard the draft and return to the external value.
    ///
    /// Advances the revision so the surface is rewritten even though the
    /// value itself did not change.
    pub fn reset(&mut self) {
        self.draft.clone_from(&self.value);
        self.dirty = false;
        self.revision += 1;
    }

    /// The last external value observed.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The current draft text.
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The revision counter.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the draft changed since the last sync.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Strip a single trailing line-break artifact from live surface text.
///
/// Removes at most one trailing `<br>`-style tag and then at most one
/// trailing newline, in that order. Editable surfaces append one of these
/// when the caret sits on a final empty line; stripping more would eat
/// blank lines the user typed deliberately.
#[must_use]
pub fn strip_trailing_break(text: &str) -> &str {
    let text = strip_br_suffix(text);
    text.strip_suffix('\n').unwrap_or(text)
}

/// Strip one trailing `<br>` / `<br/>` / `<br />` tag, if present.
fn strip_br_suffix(text: &str) -> &str {
    let Some(rest) = text.strip_suffix('>') else {
        return text;
    };
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let rest = rest.trim_end_matches(char::is_whitespace);
    match rest.strip_suffix("<br") {
        Some(prefix) => prefix,
        None => text,
    }
}
