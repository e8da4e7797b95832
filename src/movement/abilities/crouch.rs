//! Movement domain: crouch ability.

use bevy::prelude::*;

use crate::movement::{CrouchTuning, LocomotionRequest, LocomotionSource};

/// Hold-to-crouch. No cooldown.
#[derive(Component, Debug, Default, Clone)]
pub struct Crouch {
    active: bool,
}

impl Crouch {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `Some(true)` when crouching starts, `Some(false)` when it ends.
    pub fn update(&mut self, pressed: bool, released: bool) -> Option<bool> {
        if pressed && !self.active {
            self.active = true;
            return Some(true);
        }
        if released && self.active {
            self.active = false;
            return Some(false);
        }
        None
    }

    pub fn height_request(&self, tuning: &CrouchTuning) -> Option<f32> {
        self.active.then_some(tuning.y_scale)
    }
}

impl LocomotionSource for Crouch {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            crouching: self.active,
            ..default()
        }
    }
}
