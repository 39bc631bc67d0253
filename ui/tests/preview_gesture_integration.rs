//! Integration tests for moving and scaling the QR code on the preview.

mod common;

use bizcard_render::{GestureMode, Placement};
use bizcard_ui::widgets::MOUSE_TOUCH_ID;
use common::{MemoryExporter, QueuedPicker, filled_state, harness};
use egui::{Event, Modifiers, PointerButton, Pos2, TouchDeviceId, TouchId, TouchPhase};

fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(id),
        phase,
        pos: Pos2::new(x, y),
        force: None,
    }
}

fn mouse_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn unlocked_harness<'a>() -> egui_kittest::Harness<'a, bizcard_ui::BizCardApp> {
    let mut harness = harness(filled_state(), QueuedPicker::default(), MemoryExporter::default());
    harness.run();
    harness.state_mut().state_mut().regenerate();
    harness.state_mut().state_mut().toggle_lock();
    harness.run();
    harness
}

#[test]
fn test_locked_preview_ignores_touches() {
    let mut harness = harness(filled_state(), QueuedPicker::default(), MemoryExporter::default());
    harness.run();

    harness.input_mut().events.push(touch(1, TouchPhase::Start, 700.0, 360.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::Move, 740.0, 360.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::End, 740.0, 360.0));
    harness.run();

    assert_eq!(harness.state().state().gestures().placement(), Placement::default());
}

#[test]
fn test_one_finger_drag_moves_qr() {
    let mut harness = unlocked_harness();

    harness.input_mut().events.push(touch(1, TouchPhase::Start, 700.0, 360.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::Move, 660.0, 320.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::End, 660.0, 320.0));
    harness.run();

    let placement = harness.state().state().gestures().placement();
    let default = Placement::default();
    assert!(placement.x < default.x - 0.01, "x should move left: {placement:?}");
    assert!(placement.y < default.y - 0.01, "y should move up: {placement:?}");
    assert!((placement.scale - default.scale).abs() < f32::EPSILON);
    assert!(!harness.state().state().is_tracking(1));
}

#[test]
fn test_pinch_scales_qr() {
    let mut harness = unlocked_harness();

    harness.input_mut().events.push(touch(1, TouchPhase::Start, 600.0, 360.0));
    harness.input_mut().events.push(touch(2, TouchPhase::Start, 700.0, 360.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::Move, 550.0, 360.0));
    harness.input_mut().events.push(touch(2, TouchPhase::Move, 750.0, 360.0));
    harness.step();

    let scale = harness.state().state().gestures().placement().scale;
    assert!((scale - 2.0).abs() < 1e-3, "distance doubled, scale {scale}");

    harness.input_mut().events.push(touch(1, TouchPhase::End, 550.0, 360.0));
    harness.input_mut().events.push(touch(2, TouchPhase::End, 750.0, 360.0));
    harness.run();
    assert!((harness.state().state().gestures().placement().scale - 2.0).abs() < 1e-3);
}

#[test]
fn test_touch_outside_preview_is_ignored() {
    let mut harness = unlocked_harness();

    // The contact panel sits on the left edge.
    harness.input_mut().events.push(touch(1, TouchPhase::Start, 20.0, 360.0));
    harness.step();
    harness.input_mut().events.push(touch(1, TouchPhase::Move, 120.0, 360.0));
    harness.run();

    assert!(!harness.state().state().is_tracking(1));
    assert_eq!(harness.state().state().gestures().placement(), Placement::default());
}

#[test]
fn test_touch_during_mouse_drag_does_not_pinch() {
    let mut harness = unlocked_harness();

    let from = Pos2::new(650.0, 400.0);
    harness.input_mut().events.push(Event::PointerMoved(from));
    harness.step();
    harness.input_mut().events.push(mouse_button(from, true));
    harness.step();
    harness.input_mut().events.push(Event::PointerMoved(Pos2::new(680.0, 420.0)));
    harness.step();
    assert!(harness.state().state().is_tracking(MOUSE_TOUCH_ID), "mouse drag should be tracked");

    // A finger lands while the button is still held.
    harness.input_mut().events.push(touch(1, TouchPhase::Start, 700.0, 360.0));
    harness.step();

    let state = harness.state().state();
    assert!(!state.is_tracking(MOUSE_TOUCH_ID), "mouse drag should end when a touch starts");
    assert!(state.is_tracking(1));
    assert!(
        matches!(state.gestures().mode(), GestureMode::Drag { .. }),
        "single finger should drag, got {:?}",
        state.gestures().mode()
    );

    let before = state.gestures().placement();
    harness.input_mut().events.push(touch(1, TouchPhase::Move, 740.0, 360.0));
    harness.step();
    let after = harness.state().state().gestures().placement();
    assert!(after.x > before.x, "finger drag should move right: {before:?} -> {after:?}");
    assert!((after.scale - before.scale).abs() < f32::EPSILON);

    harness.input_mut().events.push(touch(1, TouchPhase::End, 740.0, 360.0));
    harness.input_mut().events.push(mouse_button(Pos2::new(680.0, 420.0), false));
    harness.run();
    assert!(!harness.state().state().is_tracking(1));
}
