//! Data definitions for the locomotion config file.
//!
//! Mirrors assets/data/locomotion.ron. Every section is also the Bevy
//! resource the movement systems read.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{
    BodyTuning, CrouchTuning, DashTuning, JumpTuning, MovementTuning, ScriptedJumpTuning,
    SensorTuning, SlideTuning,
};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocomotionConfig {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub sensor: SensorTuning,
    pub dash: DashTuning,
    pub slide: SlideTuning,
    pub crouch: CrouchTuning,
    pub jump: JumpTuning,
    pub scripted_jump: ScriptedJumpTuning,
    pub body: BodyTuning,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            sensor: SensorTuning::default(),
            dash: DashTuning::default(),
            slide: SlideTuning::default(),
            crouch: CrouchTuning::default(),
            jump: JumpTuning::default(),
            scripted_jump: ScriptedJumpTuning::default(),
            body: BodyTuning::default(),
        }
    }
}

impl LocomotionConfig {
    /// Returns a summary of the headline values for logging.
    pub fn summary(&self) -> String {
        format!(
            "Locomotion config loaded:\n\
             - Speeds: walk {} / sprint {} / crouch {} / slope slide {} / dash {}\n\
             - Max slope angle: {}\n\
             - Dash cooldown: {}s\n\
             - Slide time: {}s..{}s\n\
             - Gravity: {}",
            self.movement.walk_max_speed,
            self.movement.sprint_max_speed,
            self.movement.crouch_max_speed,
            self.movement.slope_slide_max_speed,
            self.movement.dash_max_speed,
            self.sensor.max_slope_angle,
            self.dash.cooldown,
            self.slide.min_time,
            self.slide.max_time,
            self.body.gravity,
        )
    }

    /// Moves every section into the world as its own resource.
    pub fn insert_into(self, commands: &mut Commands) {
        commands.insert_resource(self.movement);
        commands.insert_resource(self.sensor);
        commands.insert_resource(self.dash);
        commands.insert_resource(self.slide);
        commands.insert_resource(self.crouch);
        commands.insert_resource(self.jump);
        commands.insert_resource(self.scripted_jump);
        commands.insert_resource(self.body);
    }
}
