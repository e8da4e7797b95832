mod camera;
mod content;
mod debug;
mod movement;

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Locomotion Lab".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            primary_cursor_options: Some(CursorOptions {
                grab_mode: CursorGrabMode::Locked,
                visible: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin,
            movement::MovementPlugin,
            camera::CameraPlugin,
            debug::DebugPlugin,
        ))
        .run();
}
