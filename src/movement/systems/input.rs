//! Movement domain: input sampling for locomotion.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{BodyTuning, MovementInput, Orientation, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.look_delta = mouse_motion.delta;
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.crouch_just_pressed = keyboard.just_pressed(KeyCode::KeyC);
    input.crouch_just_released = keyboard.just_released(KeyCode::KeyC);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
    input.slide_just_pressed = keyboard.just_pressed(KeyCode::ControlLeft);
    input.slide_just_released = keyboard.just_released(KeyCode::ControlLeft);
    input.target_jump_just_pressed = keyboard.just_pressed(KeyCode::KeyJ);
}

/// Turns mouse motion into yaw and pitch; the body follows the yaw.
pub(crate) fn apply_look(
    input: Res<MovementInput>,
    body: Res<BodyTuning>,
    mut query: Query<(&mut Orientation, &mut Transform), With<Player>>,
) {
    for (mut orientation, mut transform) in &mut query {
        if input.look_delta != Vec2::ZERO {
            orientation.turn(input.look_delta, body.look_sensitivity);
        }

        let rotation = orientation.body_rotation();
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}
