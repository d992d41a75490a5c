#![forbid(unsafe_code)]

//! Core: event model, geometry, and the host environment seam.
//!
//! # Role in editfield
//! `editfield-core` is the boundary layer. It owns the normalized event types
//! hosts feed into widgets, and the [`env::Environment`] capability trait
//! through which widgets reach back into the host surface (content sync,
//! focus, tooltips, pointer capture). Widgets never touch a real document or
//! terminal; they see events and an `Environment`, nothing else.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, pointer events carrying a hit
//!   target, live edit notifications, focus changes).
//! - **Environment**: the injected capability object every ambient surface
//!   operation goes through, keeping widget logic headlessly testable.
//! - **Geometry**: pixel-space points and rectangles for anchor bounds and
//!   tooltip placement.
//!
//! # How it fits in the system
//! `editfield-widgets` consumes these types to drive its state machines. Test
//! suites swap the host out for the recording `HeadlessEnv` (behind the
//! `test-helpers` feature) and replay event scripts against it.

pub mod env;
pub mod event;
pub mod geometry;
pub mod style;

#[cfg(any(test, feature = "test-helpers"))]
pub mod headless;
