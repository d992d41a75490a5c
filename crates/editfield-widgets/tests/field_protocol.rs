//! Lifecycle and protocol tests for the editable text field.
//!
//! Drives a [`TextField`] against the recording environment the way a host
//! would, and checks the structural guarantees of the widget protocol:
//!
//! 1. A full edit session commits once and settles after the value round-trip
//! 2. Escape reverts the draft and suppresses exactly one blur commit
//! 3. A resize session leaves no capture or selection suppression behind
//! 4. A hover session shows the hint once and hides it when the pointer moves off
//! 5. No event stream without a commit trigger ever produces a committed value
//! 6. Surface writes happen exactly when a new revision is adopted
//! 7. A resize drag never pulls the surface below its starting height

use editfield_core::event::{
    AnchorHit, Event, HitTarget, InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers,
    MouseButton, PointerEvent, PointerKind,
};
use editfield_core::geometry::{Point, Rect};
use editfield_core::headless::HeadlessEnv;
use editfield_widgets::field::{EventResult, TextField};
use proptest::prelude::*;
use tracing::{Level, info};
use web_time::{Duration, Instant};

// ── Helpers ──────────────────────────────────────────────────────────

const MS_250: Duration = Duration::from_millis(250);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::INFO)
        .try_init();
}

fn typed(text: &str) -> Event {
    Event::Input(InputEvent::new(text))
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn over_anchor(href: &str) -> Event {
    Event::Pointer(
        PointerEvent::new(PointerKind::Move, Point::new(15.0, 25.0)).with_target(
            HitTarget::Anchor(AnchorHit::new(Some(href), Rect::new(10.0, 20.0, 80.0, 12.0))),
        ),
    )
}

fn pointer(kind: PointerKind, y: f32, target: HitTarget) -> Event {
    Event::Pointer(PointerEvent::new(kind, Point::new(0.0, y)).with_target(target))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Full edit session: mount, type, blur, round-trip
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn edit_session_commits_and_settles() {
    init_tracing();
    info!("full edit session: mount, type, blur, round-trip");
    let mut env = HeadlessEnv::new().with_link_rewriter(|text| format!("<linked>{text}</linked>"));
    let mut field = TextField::new().with_value("original");
    field.mount(&mut env);
    assert_eq!(env.content, "original");

    env.focused = true;
    let result = field.handle_event(&mut env, &Event::Focus(true), Instant::now());
    assert_eq!(result, EventResult::Ignored);

    // The surface mutates live; the widget only observes. A trailing break
    // tag is a surface artifact and never reaches the committed value.
    let result = field.handle_event(&mut env, &typed("rewritten note<br>"), Instant::now());
    assert_eq!(result, EventResult::Handled);
    assert_eq!(field.draft(), "rewritten note");
    assert_eq!(env.content, "original");

    env.focused = false;
    let result = field.handle_event(&mut env, &Event::Focus(false), Instant::now());
    assert_eq!(
        result,
        EventResult::Committed("<linked>rewritten note</linked>".to_string())
    );

    // The owner stores the committed value and hands it back down.
    field.set_value(&mut env, "<linked>rewritten note</linked>");
    assert!(!field.is_dirty());
    assert_eq!(env.content, "<linked>rewritten note</linked>");

    let result = field.handle_event(&mut env, &Event::Focus(false), Instant::now());
    assert_eq!(result, EventResult::Handled);
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Escape reverts and suppresses exactly one blur commit
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn escape_session_discards_the_draft() {
    init_tracing();
    info!("escape reverts the draft and suppresses one blur commit");
    let mut env = HeadlessEnv::new();
    let mut field = TextField::new().with_value("keep me");
    field.mount(&mut env);
    env.focused = true;

    let _ = field.handle_event(&mut env, &typed("discard me"), Instant::now());
    let result = field.handle_event(&mut env, &key(KeyCode::Escape), Instant::now());
    assert_eq!(result, EventResult::Handled);
    assert_eq!(env.blur_requests, 1);
    assert_eq!(env.content, "keep me");
    assert!(!env.focused);

    // The host delivers the blur the widget itself requested.
    let result = field.handle_event(&mut env, &Event::Focus(false), Instant::now());
    assert_eq!(result, EventResult::Handled);

    // The suppression was one-shot: the next session commits normally.
    env.focused = true;
    let _ = field.handle_event(&mut env, &typed("second draft"), Instant::now());
    let result = field.handle_event(&mut env, &Event::Focus(false), Instant::now());
    assert_eq!(result, EventResult::Committed("second draft".to_string()));
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Resize session leaves nothing behind
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn resize_session_restores_selection_and_capture() {
    init_tracing();
    info!("resize session releases capture and selection suppression");
    let mut env = HeadlessEnv::new().with_height(60.0);
    let mut field = TextField::new().with_value("tall notes").with_multiline(true);
    field.mount(&mut env);

    let result = field.handle_event(
        &mut env,
        &pointer(PointerKind::Down(MouseButton::Left), 200.0, HitTarget::ResizeHandle),
        Instant::now(),
    );
    assert_eq!(result, EventResult::Handled);
    assert!(!env.selection_enabled);
    assert!(env.pointer_captured);

    // Captured moves arrive even though the pointer left the widget.
    let _ = field.handle_event(
        &mut env,
        &pointer(PointerKind::Move, 260.0, HitTarget::Outside),
        Instant::now(),
    );
    assert_eq!(env.height, 120.0);

    let result = field.handle_event(
        &mut env,
        &pointer(PointerKind::Up(MouseButton::Left), 260.0, HitTarget::Outside),
        Instant::now(),
    );
    assert_eq!(result, EventResult::Handled);
    assert!(env.selection_enabled);
    assert!(!env.pointer_captured);
    assert_eq!(env.height, 120.0);
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Hover session shows the hint once and hides it on move-off
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn hover_session_shows_and_hides_the_hint() {
    init_tracing();
    info!("hover shows the link hint after the delay and hides on move-off");
    let mut env = HeadlessEnv::new();
    let mut field = TextField::new().with_value("see https://example.org");
    field.mount(&mut env);
    let t = Instant::now();

    let _ = field.handle_event(&mut env, &over_anchor("https://example.org"), t);
    assert!(!field.check_tooltip(&mut env, t));
    assert!(field.check_tooltip(&mut env, t + MS_250));
    assert_eq!(env.tooltip_shows, 1);

    // Polling again without a new hover does nothing.
    assert!(!field.check_tooltip(&mut env, t + MS_250 + MS_250));
    assert_eq!(env.tooltip_shows, 1);

    let _ = field.handle_event(
        &mut env,
        &pointer(PointerKind::Move, 25.0, HitTarget::Content),
        t + MS_250,
    );
    assert!(env.tooltip.is_none());
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No commit without a trigger
// ═════════════════════════════════════════════════════════════════════════

fn non_trigger_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[a-z <>/]{0,12}".prop_map(|text| typed(&text)),
        Just(key(KeyCode::Enter)),
        Just(key(KeyCode::Escape)),
        Just(key(KeyCode::Control)),
        Just(Event::Key(
            KeyEvent::new(KeyCode::Control).with_kind(KeyEventKind::Release)
        )),
        Just(key(KeyCode::Tab)),
        Just(Event::Focus(true)),
        Just(Event::Tick),
        Just(pointer(PointerKind::Down(MouseButton::Left), 10.0, HitTarget::Content)),
        Just(pointer(PointerKind::Up(MouseButton::Left), 10.0, HitTarget::Content)),
        Just(pointer(PointerKind::Move, 10.0, HitTarget::Content)),
        Just(pointer(PointerKind::Leave, 10.0, HitTarget::Content)),
        ("https?://[a-z]{1,8}", Just(PointerKind::Click(MouseButton::Left))).prop_map(
            |(href, kind)| Event::Pointer(
                PointerEvent::new(kind, Point::new(15.0, 25.0))
                    .with_modifiers(Modifiers::CTRL)
                    .with_target(HitTarget::Anchor(AnchorHit::new(
                        Some(href),
                        Rect::new(10.0, 20.0, 80.0, 12.0),
                    ))),
            )
        ),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn commits_only_from_triggers(events in prop::collection::vec(non_trigger_event(), 0..40)) {
        // Multiline keeps Enter out of the trigger set; blur never occurs.
        let mut env = HeadlessEnv::new();
        let mut field = TextField::new().with_value("start").with_multiline(true);
        field.mount(&mut env);
        env.focused = true;

        let t = Instant::now();
        for event in &events {
            let result = field.handle_event(&mut env, event, t);
            prop_assert!(
                !result.is_committed(),
                "event {:?} produced a commit without a trigger",
                event
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Surface writes happen exactly when a revision is adopted
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum SyncOp {
    SetValue(String),
    Typed(String),
    Escape,
    Blur,
    Enter,
}

fn sync_op() -> impl Strategy<Value = SyncOp> {
    prop_oneof![
        3 => "[a-z ]{0,8}".prop_map(SyncOp::SetValue),
        3 => "[a-z ]{0,8}".prop_map(SyncOp::Typed),
        1 => Just(SyncOp::Escape),
        1 => Just(SyncOp::Blur),
        1 => Just(SyncOp::Enter),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn surface_writes_match_adoptions(ops in prop::collection::vec(sync_op(), 0..30)) {
        let mut env = HeadlessEnv::new();
        let mut field = TextField::new().with_value("seed");
        field.mount(&mut env);
        let mut expected_writes = 1u32;

        let t = Instant::now();
        for op in &ops {
            match op {
                SyncOp::SetValue(value) => {
                    if value != field.value() {
                        expected_writes += 1;
                    }
                    field.set_value(&mut env, value);
                }
                SyncOp::Typed(text) => {
                    let _ = field.handle_event(&mut env, &typed(text), t);
                }
                SyncOp::Escape => {
                    // A revert always bumps the revision and rewrites.
                    expected_writes += 1;
                    let _ = field.handle_event(&mut env, &key(KeyCode::Escape), t);
                }
                SyncOp::Blur => {
                    let _ = field.handle_event(&mut env, &Event::Focus(false), t);
                }
                SyncOp::Enter => {
                    let _ = field.handle_event(&mut env, &key(KeyCode::Enter), t);
                }
            }
            prop_assert_eq!(env.content_sets, expected_writes);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. A drag never pulls the surface below its starting height
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn drag_respects_minimum_height(
        start_height in 10.0f32..300.0,
        grab_y in -200.0f32..200.0,
        moves in prop::collection::vec(-1000.0f32..1000.0, 1..20),
    ) {
        let mut env = HeadlessEnv::new().with_height(start_height);
        let mut field = TextField::new().with_value("notes").with_multiline(true);
        field.mount(&mut env);

        let t = Instant::now();
        let _ = field.handle_event(
            &mut env,
            &pointer(PointerKind::Down(MouseButton::Left), grab_y, HitTarget::ResizeHandle),
            t,
        );
        for y in &moves {
            let _ = field.handle_event(
                &mut env,
                &pointer(PointerKind::Move, *y, HitTarget::Outside),
                t,
            );
            prop_assert!(env.height >= start_height);
        }
        let _ = field.handle_event(
            &mut env,
            &pointer(PointerKind::Up(MouseButton::Left), 0.0, HitTarget::Outside),
            t,
        );
        prop_assert!(env.height >= start_height);
    }
}
