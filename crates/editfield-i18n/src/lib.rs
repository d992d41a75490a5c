#![forbid(unsafe_code)]

//! Localization helpers for editfield.
//!
//! Provides externalized string storage with key-based fallback lookup and
//! locale-aware fixed-point number formatting behind a process-wide switch.
//!
//! # Role in editfield
//! `editfield-i18n` isolates localization concerns so widget code stays
//! deterministic: widgets take already-resolved strings (for example the
//! link hover hint) and never consult locale state themselves.
//!
//! # How it fits in the system
//! Hosts resolve user-facing strings through [`lookup`] before configuring
//! widgets, and format numbers for display through [`format_fixed`]. The
//! crate does not depend on the widget or core crates, keeping the
//! localization layer reusable and testable.

pub mod catalog;
pub mod number;

pub use catalog::{MessageCatalog, lookup};
pub use number::{FormatSettings, Locale, current_settings, format_fixed, install_settings};
