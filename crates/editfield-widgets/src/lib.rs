#![forbid(unsafe_code)]

//! The inline editable text field widget.
//!
//! # Role in editfield
//! This crate owns the widget state machines. [`field::TextField`] reconciles
//! an externally controlled value with in-progress local edits, commits on
//! blur/Enter, cancels on Escape, and layers the pointer affordances on top:
//! Ctrl-click link opening, the hover tooltip over anchors, and manual
//! drag-resizing. All surface effects go through the
//! [`Environment`](editfield_core::env::Environment) seam, so everything here
//! is testable without a real host.
//!
//! # Structure
//! - [`draft`]: the pure controlled-value state machine (value, revision,
//!   draft, dirty flag).
//! - [`tooltip`]: debounce tracking for the link hover tooltip.
//! - [`resize`]: drag session tracking for the manual resize handle.
//! - [`field`]: the widget tying them together over events and the
//!   environment.

pub mod draft;
pub mod field;
pub mod resize;
pub mod tooltip;
