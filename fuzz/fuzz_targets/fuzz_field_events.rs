#![no_main]

use editfield_core::event::{
    AnchorHit, Event, HitTarget, InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers,
    MouseButton, PointerEvent, PointerKind,
};
use editfield_core::geometry::{Point, Rect};
use editfield_core::headless::HeadlessEnv;
use editfield_widgets::field::TextField;
use libfuzzer_sys::fuzz_target;
use web_time::{Duration, Instant};

const TEXTS: &[&str] = &[
    "",
    "a",
    "note<br>",
    "line\nline",
    "see https://links.example",
    "x<br>\n",
];

const START_HEIGHT: f32 = 48.0;

fuzz_target!(|data: &[u8]| {
    // Use the first byte to derive the field configuration.
    if data.is_empty() {
        return;
    }
    let config = data[0];
    let payload = &data[1..];

    let mut env = HeadlessEnv::new()
        .with_focus(config & 0x02 != 0)
        .with_touch(config & 0x08 != 0)
        .with_height(START_HEIGHT);
    let mut field = TextField::new()
        .with_value("seed text")
        .with_multiline(config & 0x01 != 0)
        .with_required(config & 0x04 != 0);
    field.mount(&mut env);

    let mut now = Instant::now();
    let mut last_revision = field.revision();

    // Each op consumes two bytes: an opcode and an argument. The opcode's
    // high nibble also advances the clock so debounce deadlines can lapse
    // mid-sequence.
    let mut bytes = payload.iter().copied();
    while let Some(op) = bytes.next() {
        let arg = bytes.next().unwrap_or(0);
        now += Duration::from_millis(u64::from(op >> 4) * 50);

        let event = decode_event(op, arg, &mut env);
        let was_dirty = field.is_dirty();
        let result = field.handle_event(&mut env, &event, now);
        field.check_tooltip(&mut env, now);

        // Post-conditions that must always hold:
        if result.is_committed() {
            assert!(was_dirty, "commit produced from a clean draft");
        }
        assert!(
            field.revision() >= last_revision,
            "revision went backwards"
        );
        last_revision = field.revision();
        assert!(
            env.height >= START_HEIGHT,
            "surface shrank below its starting height"
        );
    }

    field.unmount(&mut env);
    assert!(env.tooltip.is_none(), "tooltip outlived the field");
    assert!(env.selection_enabled, "text selection still suppressed");
    assert!(!env.pointer_captured, "pointer capture leaked");
    assert!(!field.is_resizing(), "drag survived unmount");
    assert!(
        !field.check_tooltip(&mut env, now + Duration::from_secs(60)),
        "tooltip deadline survived unmount"
    );
});

fn decode_event(op: u8, arg: u8, env: &mut HeadlessEnv) -> Event {
    match op % 14 {
        0 => Event::Input(InputEvent::new(TEXTS[arg as usize % TEXTS.len()])),
        1 => Event::Key(KeyEvent::new(KeyCode::Enter)),
        2 => Event::Key(KeyEvent::new(KeyCode::Escape)),
        3 => Event::Key(KeyEvent::new(KeyCode::Control)),
        4 => Event::Key(KeyEvent::new(KeyCode::Control).with_kind(KeyEventKind::Release)),
        5 => {
            env.focused = false;
            Event::Focus(false)
        }
        6 => {
            env.focused = true;
            Event::Focus(true)
        }
        7 => Event::Pointer(PointerEvent::new(
            PointerKind::Down(MouseButton::Left),
            Point::new(4.0, f32::from(arg)),
        )),
        8 => Event::Pointer(
            PointerEvent::new(
                PointerKind::Down(MouseButton::Left),
                Point::new(4.0, f32::from(arg)),
            )
            .with_target(HitTarget::ResizeHandle),
        ),
        9 => Event::Pointer(PointerEvent::new(
            PointerKind::Move,
            Point::new(4.0, f32::from(arg) - 64.0),
        )),
        10 => Event::Pointer(PointerEvent::new(
            PointerKind::Up(MouseButton::Left),
            Point::new(4.0, f32::from(arg)),
        )),
        11 => Event::Pointer(
            PointerEvent::new(PointerKind::Click(MouseButton::Left), Point::new(15.0, 25.0))
                .with_modifiers(Modifiers::CTRL)
                .with_target(HitTarget::Anchor(AnchorHit::new(
                    Some("https://links.example"),
                    Rect::new(10.0, 20.0, 80.0, 12.0),
                ))),
        ),
        12 => Event::Pointer(
            PointerEvent::new(PointerKind::Move, Point::new(15.0, 25.0)).with_target(
                HitTarget::Anchor(AnchorHit::new(
                    Some("https://links.example"),
                    Rect::new(10.0, 20.0, 80.0, 12.0),
                )),
            ),
        ),
        _ => Event::Pointer(PointerEvent::new(PointerKind::Leave, Point::ZERO)),
    }
}
