#![forbid(unsafe_code)]

//! Locale-aware fixed-point number formatting.
//!
//! [`format_fixed`] renders an `f64` with a fixed number of fraction
//! digits. Localization is off by default: the process-wide
//! [`FormatSettings`] switch turns on locale digit grouping and separators,
//! and hosts flip it once at startup from their user settings.
//!
//! # Design Notes
//!
//! - Grouping is applied to the already-formatted digit string, so values
//!   far outside integer range still localize correctly.
//! - Non-finite values bypass localization and render the plain way.
//! - The settings live in an [`ArcSwap`] so readers never lock.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use num_format::Grouping;
pub use num_format::Locale;

/// Process-wide number formatting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSettings {
    /// When `false`, numbers always format in the plain C style.
    pub locale_aware_numbers: bool,

    /// Locale whose separators and grouping apply when enabled.
    pub locale: Locale,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            locale_aware_numbers: false,
            locale: Locale::en,
        }
    }
}

impl FormatSettings {
    /// Format a value with a fixed number of fraction digits.
    ///
    /// With localization disabled (the default) this is plain `{:.digits$}`
    /// formatting. Enabled, the integer digits are grouped and the
    /// separators come from the configured locale.
    #[must_use]
    pub fn format_fixed(&self, value: f64, digits: usize) -> String {
        let plain = format!("{value:.digits$}");
        if !self.locale_aware_numbers || !value.is_finite() {
            return plain;
        }
        localize_plain(&plain, self.locale)
    }
}

// ---------------------------------------------------------------------------
// Process-wide settings
// ---------------------------------------------------------------------------

static SETTINGS: OnceLock<ArcSwap<FormatSettings>> = OnceLock::new();

fn settings_store() -> &'static ArcSwap<FormatSettings> {
    SETTINGS.get_or_init(|| ArcSwap::from_pointee(FormatSettings::default()))
}

/// Snapshot of the process-wide format settings.
#[must_use]
pub fn current_settings() -> FormatSettings {
    **settings_store().load()
}

/// Replace the process-wide format settings.
pub fn install_settings(settings: FormatSettings) {
    settings_store().store(Arc::new(settings));
}

/// Format a value with the process-wide settings.
#[must_use]
pub fn format_fixed(value: f64, digits: usize) -> String {
    current_settings().format_fixed(value, digits)
}

// ---------------------------------------------------------------------------
// Digit-string localization
// ---------------------------------------------------------------------------

/// Rewrite a plain `-?\d+(\.\d+)?` rendering into the locale's notation.
fn localize_plain(plain: &str, locale: Locale) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (locale.minus_sign(), rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + 8);
    out.push_str(sign);
    out.push_str(&group_digits(int_part, locale.grouping(), locale.separator()));
    if let Some(frac) = frac_part {
        out.push_str(locale.decimal());
        out.push_str(frac);
    }
    out
}

/// Insert a group separator into an ASCII digit string, right to left.
fn group_digits(digits: &str, grouping: Grouping, separator: &str) -> String {
    let group_sizes: &[usize] = match grouping {
        Grouping::Standard => &[3],
        Grouping::Indian => &[3, 2],
        Grouping::Posix => return digits.to_string(),
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut rest = digits;
    let mut sizes = group_sizes.iter().copied();
    let mut size = sizes.next().unwrap_or(3);
    while rest.len() > size {
        let (head, tail) = rest.split_at(rest.len() - size);
        groups.push(tail);
        rest = head;
        // The last listed size repeats for the remaining digits.
        if let Some(next) = sizes.next() {
            size = next;
        }
    }
    groups.push(rest);
    groups.reverse();
    groups.join(separator)
}
