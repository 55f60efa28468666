use citizen_pac::entity::direction::Direction;
use citizen_pac::input::commands::GameCommand;
use citizen_pac::input::{Binding, Bindings, InputEvent};
use speculoos::prelude::*;

#[test]
fn test_default_movement_keys() {
    let bindings = Bindings::default();
    let cases = [
        ('w', Direction::North),
        ('s', Direction::South),
        ('d', Direction::East),
        ('a', Direction::West),
    ];

    for (key, direction) in cases {
        assert_that(&bindings.translate(InputEvent::KeyDown(key))).is_equal_to(Some(GameCommand::Move(direction, true)));
        assert_that(&bindings.translate(InputEvent::KeyUp(key))).is_equal_to(Some(GameCommand::Move(direction, false)));
    }
}

#[test]
fn test_keys_are_case_insensitive() {
    let bindings = Bindings::default();
    assert_that(&bindings.translate(InputEvent::KeyDown('W')))
        .is_equal_to(Some(GameCommand::Move(Direction::North, true)));
}

#[test]
fn test_space_toggles_on_press_only() {
    let bindings = Bindings::default();
    assert_that(&bindings.translate(InputEvent::KeyDown(' '))).is_equal_to(Some(GameCommand::TogglePause));
    assert_that(&bindings.translate(InputEvent::KeyUp(' '))).is_none();
}

#[test]
fn test_unbound_keys_are_ignored() {
    let bindings = Bindings::default();
    assert_that(&bindings.translate(InputEvent::KeyDown('q'))).is_none();
    assert_that(&bindings.translate(InputEvent::KeyUp('7'))).is_none();
}

#[test]
fn test_focus_loss() {
    let bindings = Bindings::default();
    assert_that(&bindings.translate(InputEvent::FocusLost)).is_equal_to(Some(GameCommand::FocusLost));
}

#[test]
fn test_rebinding() {
    let mut bindings = Bindings::default();
    bindings.bind('K', Binding::Move(Direction::South));
    assert_that(&bindings.get('k')).is_equal_to(Some(Binding::Move(Direction::South)));
    assert_that(&bindings.translate(InputEvent::KeyDown('k')))
        .is_equal_to(Some(GameCommand::Move(Direction::South, true)));
}
