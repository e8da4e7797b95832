//! Camera domain: first-person camera that follows the locomotion body.

mod effects;
mod systems;


pub use effects::{FovTween, HeadBob};

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::camera::systems::{follow_player, handle_fov_requests, spawn_camera};

#[derive(Component, Debug, Default)]
pub struct PlayerCamera {
    pub fov_tween: Option<FovTween>,
    pub head_bob: HeadBob,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, handle_fov_requests)
            .add_systems(
                PostUpdate,
                follow_player.before(TransformSystems::Propagate),
            );
    }
}
