//! End-to-end gesture scenarios through the controller

mod test_helpers;

use hand_gesture_control::{
    drag::DragState,
    input::{InputCommand, MouseButton},
};
use std::time::Instant;
use test_helpers::{create_test_controller, without_moves, Finger, HandBuilder};

/// Pinching index to thumb clicks once per pinch
#[test]
fn test_pinch_click_fires_once_per_pinch() {
    let mut controller = create_test_controller();
    let now = Instant::now();
    let pinched = HandBuilder::open().pinch(Finger::Index, 0.0).build();
    let apart = HandBuilder::open().pinch(Finger::Index, 0.05).build();

    assert_eq!(without_moves(&controller.process_frame(&pinched, now)), vec![InputCommand::Click]);
    assert!(without_moves(&controller.process_frame(&pinched, now)).is_empty());
    assert!(without_moves(&controller.process_frame(&apart, now)).is_empty());
    assert_eq!(without_moves(&controller.process_frame(&pinched, now)), vec![InputCommand::Click]);
    assert_eq!(controller.state().clicks.last_click(), Some(now));
}

/// Right and double clicks come from the middle and ring fingers
#[test]
fn test_other_pinch_pairs() {
    let mut controller = create_test_controller();
    let now = Instant::now();

    let right = HandBuilder::open().pinch(Finger::Middle, 0.0).build();
    assert_eq!(without_moves(&controller.process_frame(&right, now)), vec![InputCommand::RightClick]);

    let double = HandBuilder::open().pinch(Finger::Ring, 0.01).build();
    assert_eq!(without_moves(&controller.process_frame(&double, now)), vec![InputCommand::DoubleClick]);
}

/// Holding the scroll-up posture accelerates to the cap, then resets on release
#[test]
fn test_scroll_acceleration_and_reset() {
    let mut controller = create_test_controller();
    let now = Instant::now();
    let scroll_up = HandBuilder::open().fold(Finger::Index).build();

    let amounts: Vec<InputCommand> = (0..5)
        .flat_map(|_| without_moves(&controller.process_frame(&scroll_up, now)))
        .collect();
    assert_eq!(
        amounts,
        vec![
            InputCommand::ScrollBy(10),
            InputCommand::ScrollBy(100),
            InputCommand::ScrollBy(100),
            InputCommand::ScrollBy(100),
            InputCommand::ScrollBy(100),
        ]
    );

    // Neutral frame: nothing emitted, speed back to the reset value
    assert!(without_moves(&controller.process_frame(&HandBuilder::open().build(), now)).is_empty());
    assert_eq!(controller.state().scroll.speed(), 5.0);

    let scroll_down = HandBuilder::open().fold(Finger::Little).build();
    assert_eq!(
        without_moves(&controller.process_frame(&scroll_down, now)),
        vec![InputCommand::ScrollBy(-5)]
    );
}

/// Folding both scroll fingers cancels scrolling
#[test]
fn test_conflicting_scroll_posture_is_idle() {
    let mut controller = create_test_controller();
    let both = HandBuilder::open().fold(Finger::Index).fold(Finger::Little).build();
    assert!(without_moves(&controller.process_frame(&both, Instant::now())).is_empty());
}

/// Four-finger fist drags while the cursor keeps moving
#[test]
fn test_drag_fist_with_thumb_extended() {
    let mut controller = create_test_controller();
    let now = Instant::now();

    for frame in 0u8..3 {
        let fist = HandBuilder::open().anchor(0.5 + 0.01 * f64::from(frame), 0.5).drag_fist().build();
        let commands = controller.process_frame(&fist, now);
        assert!(matches!(commands[0], InputCommand::MoveCursorTo { .. }));
        if frame == 0 {
            assert_eq!(&commands[1..], &[InputCommand::MouseDown(MouseButton::Left)]);
        } else {
            assert_eq!(commands.len(), 1);
        }
    }
    assert_eq!(controller.state().drag.state(), DragState::Held);

    let released = controller.process_frame(&HandBuilder::open().anchor(0.52, 0.5).build(), now);
    assert_eq!(without_moves(&released), vec![InputCommand::MouseUp(MouseButton::Left)]);
    assert_eq!(controller.state().drag.state(), DragState::Released);
}

/// Full fist freezes the cursor but still presses the button
#[test]
fn test_pause_fist_suppresses_cursor() {
    let mut controller = create_test_controller();
    let fist = HandBuilder::open().pause_fist().build();

    let commands = controller.process_frame(&fist, Instant::now());
    assert_eq!(commands, vec![InputCommand::MouseDown(MouseButton::Left)]);
    assert!(controller.state().posture.is_pause_fist());
}

/// A cycle without a hand changes nothing
#[test]
fn test_no_hand_observed() {
    let mut controller = create_test_controller();
    let now = Instant::now();
    controller.process_frame(&HandBuilder::open().fold(Finger::Index).drag_fist().build(), now);

    let before = controller.state().clone();
    let emitted = controller.emitter().commands.len();

    assert!(controller.process_observation(&[], now).is_empty());

    let after = controller.state();
    assert_eq!(after.cursor.previous_position(), before.cursor.previous_position());
    assert_eq!(after.scroll.speed(), before.scroll.speed());
    assert_eq!(after.drag.state(), before.drag.state());
    assert_eq!(after.posture, before.posture);
    assert_eq!(controller.emitter().commands.len(), emitted);
}

/// Pointer target is the clamped sum of the real position and the virtual delta
#[test]
fn test_cursor_delta_is_relative_and_clamped() {
    let mut controller = create_test_controller();
    let now = Instant::now();

    controller.process_frame(&HandBuilder::open().anchor(0.5, 0.5).build(), now);
    assert_eq!(controller.emitter().position, (960, 540));

    // 0.25 of a 3840 px virtual width is 960 px
    let commands = controller.process_frame(&HandBuilder::open().anchor(0.75, 0.5).build(), now);
    assert_eq!(commands, vec![InputCommand::MoveCursorTo { x: 1915, y: 540 }]);

    controller.emitter_mut().position = (300, 300);
    let commands = controller.process_frame(&HandBuilder::open().anchor(0.5, 0.25).build(), now);
    assert_eq!(commands, vec![InputCommand::MoveCursorTo { x: 5, y: 5 }]);
}

/// Several hands in one observation are processed in order
#[test]
fn test_multiple_hands_processed_in_order() {
    let mut controller = create_test_controller();
    let hands = [
        HandBuilder::open().pinch(Finger::Index, 0.0).build(),
        HandBuilder::open().pause_fist().build(),
    ];
    let commands = controller.process_observation(&hands, Instant::now());
    assert_eq!(
        without_moves(&commands),
        vec![InputCommand::Click, InputCommand::MouseDown(MouseButton::Left)]
    );
    assert_eq!(controller.frames_processed(), 2);
}
