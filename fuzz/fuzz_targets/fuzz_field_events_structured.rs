#![no_main]

use arbitrary::Arbitrary;
use editfield_core::event::{
    AnchorHit, Event, HitTarget, InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers,
    MouseButton, PointerEvent, PointerKind,
};
use editfield_core::geometry::{Point, Rect};
use editfield_core::headless::HeadlessEnv;
use editfield_widgets::field::TextField;
use libfuzzer_sys::fuzz_target;
use web_time::{Duration, Instant};

const START_HEIGHT: f32 = 48.0;

#[derive(Arbitrary, Debug)]
struct Script {
    multiline: bool,
    focused: bool,
    required: bool,
    touch: bool,
    ops: Vec<Op>,
}

/// A well-formed stream of host events and prop writes. Unlike the raw
/// byte target this one reaches the setter surface, so prop flips land
/// mid-gesture (during a ctrl hold, during a drag).
#[derive(Arbitrary, Debug)]
enum Op {
    Type(u8),
    Enter,
    Escape,
    CtrlDown,
    CtrlUp,
    Blur,
    Refocus,
    SetValue(u8),
    SetDisabled(bool),
    SetReadOnly(bool),
    SetMultiline(bool),
    PressContent(u8),
    PressHandle(u8),
    MoveTo(i8),
    HoverAnchor,
    Release,
    CtrlClickAnchor,
    Leave,
    Wait(u8),
}

const TEXTS: &[&str] = &[
    "",
    "a",
    "note<br>",
    "line\nline",
    "see https://links.example",
    "x<br>\n",
];

fuzz_target!(|script: Script| {
    if script.ops.len() > 256 {
        return;
    }

    let mut env = HeadlessEnv::new()
        .with_focus(script.focused)
        .with_touch(script.touch)
        .with_height(START_HEIGHT);
    let mut field = TextField::new()
        .with_value("seed text")
        .with_multiline(script.multiline)
        .with_required(script.required);
    field.mount(&mut env);

    let mut now = Instant::now();
    let mut last_revision = field.revision();

    for op in &script.ops {
        let event = match op {
            Op::Type(n) => Some(Event::Input(InputEvent::new(
                TEXTS[*n as usize % TEXTS.len()],
            ))),
            Op::Enter => Some(Event::Key(KeyEvent::new(KeyCode::Enter))),
            Op::Escape => Some(Event::Key(KeyEvent::new(KeyCode::Escape))),
            Op::CtrlDown => Some(Event::Key(KeyEvent::new(KeyCode::Control))),
            Op::CtrlUp => Some(Event::Key(
                KeyEvent::new(KeyCode::Control).with_kind(KeyEventKind::Release),
            )),
            Op::Blur => {
                env.focused = false;
                Some(Event::Focus(false))
            }
            Op::Refocus => {
                env.focused = true;
                Some(Event::Focus(true))
            }
            Op::SetValue(n) => {
                let text = TEXTS[*n as usize % TEXTS.len()];
                let changes = field.value() != text;
                field.set_value(&mut env, text);
                if changes {
                    assert!(!field.is_dirty(), "adoption left the draft dirty");
                    assert_eq!(field.draft(), text, "adoption did not replace the draft");
                }
                None
            }
            Op::SetDisabled(on) => {
                field.set_disabled(&mut env, *on);
                None
            }
            Op::SetReadOnly(on) => {
                field.set_read_only(&mut env, *on);
                None
            }
            Op::SetMultiline(on) => {
                field.set_multiline(&mut env, *on);
                None
            }
            Op::PressContent(y) => Some(Event::Pointer(PointerEvent::new(
                PointerKind::Down(MouseButton::Left),
                Point::new(4.0, f32::from(*y)),
            ))),
            Op::PressHandle(y) => Some(Event::Pointer(
                PointerEvent::new(
                    PointerKind::Down(MouseButton::Left),
                    Point::new(4.0, f32::from(*y)),
                )
                .with_target(HitTarget::ResizeHandle),
            )),
            Op::MoveTo(dy) => Some(Event::Pointer(PointerEvent::new(
                PointerKind::Move,
                Point::new(4.0, f32::from(*dy)),
            ))),
            Op::HoverAnchor => Some(Event::Pointer(
                PointerEvent::new(PointerKind::Move, Point::new(15.0, 25.0)).with_target(
                    HitTarget::Anchor(AnchorHit::new(
                        Some("https://links.example"),
                        Rect::new(10.0, 20.0, 80.0, 12.0),
                    )),
                ),
            )),
            Op::Release => Some(Event::Pointer(PointerEvent::new(
                PointerKind::Up(MouseButton::Left),
                Point::new(4.0, 0.0),
            ))),
            Op::CtrlClickAnchor => Some(Event::Pointer(
                PointerEvent::new(PointerKind::Click(MouseButton::Left), Point::new(15.0, 25.0))
                    .with_modifiers(Modifiers::CTRL)
                    .with_target(HitTarget::Anchor(AnchorHit::new(
                        Some("https://links.example"),
                        Rect::new(10.0, 20.0, 80.0, 12.0),
                    ))),
            )),
            Op::Leave => Some(Event::Pointer(PointerEvent::new(
                PointerKind::Leave,
                Point::ZERO,
            ))),
            Op::Wait(ms) => {
                now += Duration::from_millis(u64::from(*ms) * 10);
                None
            }
        };

        let was_dirty = field.is_dirty();
        if let Some(event) = event {
            let result = field.handle_event(&mut env, &event, now);
            if result.is_committed() {
                assert!(was_dirty, "commit produced from a clean draft");
            }
        }
        field.check_tooltip(&mut env, now);

        // Post-conditions that must always hold:
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
});
