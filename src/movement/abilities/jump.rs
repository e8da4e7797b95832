//! Movement domain: regular and scripted (jump-to-position) jumps.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::kinematics::{Launch, LaunchError, solve_launch};
use crate::movement::restriction::Restrictions;
use crate::movement::timers::{AbilityCooldown, Delayed, tick_slot};
use crate::movement::{ForceMode, JumpTuning, ScriptedJumpTuning, velocity_change};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpAttempt {
    /// Conditions not met, nothing consumed
    Idle,
    /// Cooldown consumed but the jump was swallowed (dashing)
    Suppressed,
    Launched,
}

#[derive(Component, Debug, Clone)]
pub struct Jump {
    cooldown: AbilityCooldown,
}

impl Jump {
    pub fn new(tuning: &JumpTuning) -> Self {
        Self {
            cooldown: AbilityCooldown::new(tuning.cooldown),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown.is_ready()
    }

    pub fn tick(&mut self, delta: Duration) {
        self.cooldown.tick(delta);
    }

    pub fn try_jump(&mut self, held: bool, grounded: bool, dashing: bool) -> JumpAttempt {
        if !(held && grounded && self.cooldown.is_ready()) {
            return JumpAttempt::Idle;
        }
        self.cooldown.trigger();
        if dashing {
            JumpAttempt::Suppressed
        } else {
            JumpAttempt::Launched
        }
    }
}

/// Replaces vertical velocity with a fresh upward impulse.
pub fn jump_velocity(velocity: Vec3, jump_force: f32, mass: f32) -> Vec3 {
    Vec3::new(velocity.x, 0.0, velocity.z)
        + velocity_change(Vec3::Y * jump_force, ForceMode::Impulse, mass, 0.0)
}

/// Jump-to-position. Holds the launch velocity until its delay elapses.
#[derive(Component, Debug, Default, Clone)]
pub struct ScriptedJump {
    pending_launch: Option<Delayed<Vec3>>,
}

impl ScriptedJump {
    pub fn is_pending(&self) -> bool {
        self.pending_launch.is_some()
    }

    /// Solves the arc, opens the restriction window immediately and schedules
    /// the launch. Nothing changes when the arc cannot be solved.
    pub fn launch(
        &mut self,
        start: Vec3,
        target: Vec3,
        restrictions: &mut Restrictions,
        tuning: &ScriptedJumpTuning,
        gravity: f32,
    ) -> Result<Launch, LaunchError> {
        let launch = solve_launch(start, target, tuning.apex_height, gravity)?;

        restrictions.begin_scripted_motion(
            launch.planar_speed(),
            tuning.touch_arm_delay,
            tuning.max_restricted_time,
        );
        self.pending_launch = Some(Delayed::new(tuning.launch_delay, launch.velocity));
        Ok(launch)
    }

    pub fn cancel(&mut self) {
        self.pending_launch = None;
    }

    /// Yields the velocity to set once the launch delay has passed.
    pub fn tick(&mut self, delta: Duration) -> Option<Vec3> {
        tick_slot(&mut self.pending_launch, delta)
    }
}
