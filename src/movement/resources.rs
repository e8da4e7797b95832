//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Speed limits and force factors for the locomotion modes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementTuning {
    pub move_force: f32,
    /// Fraction of the ground force available while airborne
    pub air_multiplier: f32,
    /// Linear damping while walking or sprinting
    pub ground_drag: f32,
    pub ground_force_factor: f32,
    pub slope_force_factor: f32,
    pub walk_max_speed: f32,
    pub sprint_max_speed: f32,
    pub crouch_max_speed: f32,
    pub slope_slide_max_speed: f32,
    pub dash_max_speed: f32,
    /// How fast the speed ceiling converges while smoothing
    pub speed_increase_multiplier: f32,
    /// Extra convergence rate while standing on a slope
    pub slope_increase_multiplier: f32,
    /// Rate multiplier recorded when a dash starts and used when leaving it
    pub dash_speed_change_factor: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_force: 12.0,
            air_multiplier: 0.4,
            ground_drag: 5.0,
            ground_force_factor: 10.0,
            slope_force_factor: 7.5,
            walk_max_speed: 7.0,
            sprint_max_speed: 10.0,
            crouch_max_speed: 2.0,
            slope_slide_max_speed: 30.0,
            dash_max_speed: 15.0,
            speed_increase_multiplier: 1.5,
            slope_increase_multiplier: 2.5,
            dash_speed_change_factor: 1.0,
        }
    }
}

/// Ground probe geometry.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTuning {
    pub player_height: f32,
    /// Distance below the feet that still counts as grounded
    pub ground_margin: f32,
    /// Distance below the feet probed for slope data
    pub slope_margin: f32,
    /// Steepest walkable slope in degrees
    pub max_slope_angle: f32,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            player_height: 2.0,
            ground_margin: 0.2,
            slope_margin: 0.5,
            max_slope_angle: 40.0,
        }
    }
}

impl SensorTuning {
    pub fn half_height(&self) -> f32 {
        self.player_height * 0.5
    }

    pub fn ground_distance(&self) -> f32 {
        self.half_height() + self.ground_margin
    }

    pub fn slope_distance(&self) -> f32 {
        self.half_height() + self.slope_margin
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashTuning {
    pub dash_force: f32,
    pub upward_force: f32,
    /// Upward speed cap while dashing (None = uncapped)
    pub max_upward_speed: Option<f32>,
    pub duration: f32,
    pub cooldown: f32,
    /// Delay between the dash starting and its impulse landing
    pub impulse_delay: f32,
    /// Dash along the look direction (including pitch) instead of the body yaw
    pub use_camera_forward: bool,
    pub allow_forward: bool,
    pub allow_back: bool,
    pub allow_sideways: bool,
    pub disable_gravity: bool,
    pub reset_velocity: bool,
    pub reset_vertical_velocity: bool,
    pub fov: f32,
    pub fov_transition: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            dash_force: 70.0,
            upward_force: 2.0,
            max_upward_speed: None,
            duration: 0.4,
            cooldown: 1.5,
            impulse_delay: 0.025,
            use_camera_forward: true,
            allow_forward: true,
            allow_back: true,
            allow_sideways: true,
            disable_gravity: false,
            reset_velocity: true,
            reset_vertical_velocity: true,
            fov: 95.0,
            fov_transition: 0.2,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideTuning {
    pub min_time: f32,
    pub max_time: f32,
    pub force: f32,
    pub cooldown: f32,
    pub y_scale: f32,
    /// Keep a buffered slide alive for as long as the key is held
    pub allow_hold_down: bool,
    /// Downward impulse applied after shrinking so the body stays grounded
    pub settle_impulse: f32,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            min_time: 0.2,
            max_time: 0.75,
            force: 200.0,
            cooldown: 0.5,
            y_scale: 0.5,
            allow_hold_down: false,
            settle_impulse: 5.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrouchTuning {
    pub y_scale: f32,
    pub settle_impulse: f32,
}

impl Default for CrouchTuning {
    fn default() -> Self {
        Self {
            y_scale: 0.5,
            settle_impulse: 5.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpTuning {
    pub jump_force: f32,
    pub cooldown: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_force: 13.0,
            cooldown: 0.25,
        }
    }
}

/// Jump-to-position tuning.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedJumpTuning {
    /// Apex height above the launch point
    pub apex_height: f32,
    /// Reach of the targeting ray
    pub target_range: f32,
    pub launch_delay: f32,
    /// Delay before a contact may release the restriction
    pub touch_arm_delay: f32,
    /// Fallback release if no qualifying contact arrives
    pub max_restricted_time: f32,
    pub fov: f32,
}

impl Default for ScriptedJumpTuning {
    fn default() -> Self {
        Self {
            apex_height: 10.0,
            target_range: 50.0,
            launch_delay: 0.05,
            touch_arm_delay: 0.01,
            max_restricted_time: 1.0,
            fov: 100.0,
        }
    }
}

/// Rigid body and camera constants shared by the movement systems.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTuning {
    pub mass: f32,
    /// Gravity magnitude, also used by the jump solver
    pub gravity: f32,
    pub radius: f32,
    pub eye_height: f32,
    pub look_sensitivity: f32,
    pub base_fov: f32,
    pub fov_transition: f32,
    pub head_bob_amplitude: f32,
    pub head_bob_frequency: f32,
    /// Planar speed below which the head bob stays idle
    pub head_bob_min_speed: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: 9.81,
            radius: 0.5,
            eye_height: 0.6,
            look_sensitivity: 0.002,
            base_fov: 90.0,
            fov_transition: 0.25,
            head_bob_amplitude: 0.05,
            head_bob_frequency: 12.0,
            head_bob_min_speed: 3.0,
        }
    }
}

/// Input sampled once per frame. `axis.x` is strafe (right positive),
/// `axis.y` is forward.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub look_delta: Vec2,
    pub jump_held: bool,
    pub sprint_held: bool,
    pub crouch_just_pressed: bool,
    pub crouch_just_released: bool,
    pub dash_just_pressed: bool,
    pub slide_just_pressed: bool,
    pub slide_just_released: bool,
    pub target_jump_just_pressed: bool,
}

impl MovementInput {
    pub fn is_moving(&self) -> bool {
        self.axis != Vec2::ZERO
    }
}
