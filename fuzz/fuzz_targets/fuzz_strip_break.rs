#![no_main]

use editfield_widgets::draft::strip_trailing_break;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    let stripped = strip_trailing_break(text);

    // Post-conditions that must always hold:
    assert!(
        text.starts_with(stripped),
        "strip rewrote text instead of removing a suffix"
    );

    // Only a terminal tag or newline may trigger a strip.
    if !text.ends_with('>') && !text.ends_with('\n') {
        assert_eq!(stripped, text, "strip acted without a break terminal");
    }

    // Whatever was removed is one newline, one tag, or a newline that a
    // stripped tag exposed.
    let removed = &text[stripped.len()..];
    if !removed.is_empty() {
        let rest = removed.strip_prefix('\n').unwrap_or(removed);
        assert!(
            rest.is_empty() || (rest.starts_with("<br") && strip_trailing_break(rest).is_empty()),
            "strip removed something other than a break: {removed:?}"
        );
    }

    // Appending a newline always round-trips back to the stripped form.
    let padded = format!("{stripped}\n");
    assert_eq!(
        strip_trailing_break(&padded),
        stripped,
        "appended newline did not strip cleanly"
    );
});
