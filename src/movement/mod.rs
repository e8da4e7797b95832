//! Movement domain: locomotion plugin wiring and public exports.

pub mod abilities;
mod arbiter;
mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod governor;
mod kinematics;
pub mod restriction;
mod resources;
mod sensor;
mod systems;
mod timers;


pub use arbiter::{
    LocomotionRequest, LocomotionSource, ModeResolution, SpeedTransition, SprintIntent,
    UNLIMITED_SPEED, resolve_mode,
};
pub use components::{
    BodyHeight, GameLayer, Ground, LocomotionMode, MovementOverrides, Orientation, Player, Wall,
};
pub use events::{FovRequest, HeadBobCue};
pub use governor::{
    ForceMode, SpeedChange, SpeedGovernor, SpeedSmoothing, clamp_velocity, input_force,
    planar_speed, velocity_change,
};
pub use kinematics::{Launch, LaunchError, solve_launch};
pub use resources::{
    BodyTuning, CrouchTuning, DashTuning, JumpTuning, MovementInput, MovementTuning,
    ScriptedJumpTuning, SensorTuning, SlideTuning,
};
pub use sensor::{GroundSense, ProbeHit, SlopeInfo};
pub use timers::{AbilityCooldown, Delayed};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

#[cfg(feature = "dev-tools")]
pub(crate) use crate::movement::dev::spawn_test_course;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_body_height, apply_input_force, apply_slide_force, apply_look, clamp_body_velocity,
    read_input, release_on_contact, resolve_locomotion, sense_ground, tick_restrictions,
    update_crouch, update_dash, update_jump, update_scripted_jump, update_slide,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<SensorTuning>()
            .init_resource::<DashTuning>()
            .init_resource::<SlideTuning>()
            .init_resource::<CrouchTuning>()
            .init_resource::<JumpTuning>()
            .init_resource::<ScriptedJumpTuning>()
            .init_resource::<BodyTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<HeadBobCue>()
            .add_message::<FovRequest>()
            .add_systems(Startup, spawn_player)
            // Mode is resolved once per frame, ahead of every fixed step of that frame
            .add_systems(
                RunFixedMainLoop,
                (
                    read_input,
                    apply_look,
                    sense_ground,
                    tick_restrictions,
                    release_on_contact,
                    update_scripted_jump,
                    update_dash,
                    update_slide,
                    update_crouch,
                    update_jump,
                    apply_body_height,
                    resolve_locomotion,
                )
                    .chain()
                    .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .add_systems(
                FixedUpdate,
                (apply_input_force, apply_slide_force, clamp_body_velocity).chain(),
            )
            .add_systems(Update, clamp_body_velocity);
    }
}
