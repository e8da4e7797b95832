//! Movement domain: cues published for the camera collaborator.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Field-of-view change requested by an ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FovRequest {
    /// Tween to `target` degrees; `None` uses the camera's default transition
    Set {
        target: f32,
        duration: Option<f32>,
    },
    /// Tween back to the base field of view
    Reset,
}

impl Message for FovRequest {}

/// Whether the camera should play its head bob this frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct HeadBobCue {
    pub enabled: bool,
}
