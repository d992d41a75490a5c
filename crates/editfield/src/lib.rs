#![forbid(unsafe_code)]

//! editfield public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use editfield_core::env::Environment;
pub use editfield_core::event::{
    AnchorHit, Event, HitTarget, InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers,
    MouseButton, PointerEvent, PointerKind,
};
pub use editfield_core::geometry::{Point, Rect};
pub use editfield_core::style::SurfaceStyle;

// --- Widget re-exports -----------------------------------------------------

pub use editfield_widgets::draft::{DraftState, strip_trailing_break};
pub use editfield_widgets::field::{EventResult, FormField, TextField, VisualFlags};
pub use editfield_widgets::resize::ResizeTracker;
pub use editfield_widgets::tooltip::HoverTooltip;

// --- i18n re-exports -------------------------------------------------------

pub use editfield_i18n::catalog::{MessageCatalog, lookup};
pub use editfield_i18n::number::{
    FormatSettings, Locale, current_settings, format_fixed, install_settings,
};

// --- Test helper re-exports ------------------------------------------------

#[cfg(feature = "test-helpers")]
pub use editfield_core::headless::HeadlessEnv;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DraftState, Environment, Event, EventResult, HitTarget, KeyCode, KeyEvent, Modifiers,
        Point, PointerEvent, PointerKind, Rect, SurfaceStyle, TextField, VisualFlags,
    };

    pub use crate::{core, i18n, widgets};
}

pub use editfield_core as core;
pub use editfield_i18n as i18n;
pub use editfield_widgets as widgets;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_the_working_set() {
        let mut state = DraftState::new("hi");
        state.edit("hi there");
        assert!(state.is_dirty());

        let field = TextField::new().with_value("hi").with_multiline(true);
        assert_eq!(field.value(), "hi");
        assert_eq!(field.visual_flags(), VisualFlags::empty());
    }
}
