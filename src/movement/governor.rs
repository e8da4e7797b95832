//! Movement domain: speed ceiling smoothing, velocity clamps and input force.

use bevy::prelude::*;

use crate::movement::{
    GroundSense, LocomotionMode, ModeResolution, MovementTuning, SlopeInfo, SpeedTransition,
};

/// Resumable interpolation of the speed ceiling.
///
/// Progress is measured in speed units, so the duration is proportional to
/// the distance between `start` and `target` divided by the rate it is fed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSmoothing {
    start: f32,
    target: f32,
    span: f32,
    elapsed: f32,
}

impl SpeedSmoothing {
    pub fn new(start: f32, target: f32) -> Self {
        Self {
            start,
            target,
            span: (target - start).abs(),
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns the interpolated ceiling and whether the target was reached.
    pub fn advance(&mut self, progress: f32) -> (f32, bool) {
        self.elapsed += progress.max(0.0);
        if self.elapsed >= self.span {
            (self.target, true)
        } else {
            let t = self.elapsed / self.span;
            (self.start + (self.target - self.start) * t, false)
        }
    }
}

/// What a committed resolution did to the speed ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedChange {
    Unchanged,
    Instant,
    Smoothed,
}

/// Speed state of one character: the active mode and the converging ceiling.
#[derive(Component, Debug, Clone)]
pub struct SpeedGovernor {
    pub mode: LocomotionMode,
    pub last_mode: LocomotionMode,
    pub current_max_speed: f32,
    pub desired_max_speed: f32,
    pub last_desired_max_speed: f32,
    pub vertical_speed_cap: Option<f32>,
    smoothing: Option<SpeedSmoothing>,
    boost_rate: f32,
}

impl SpeedGovernor {
    pub fn new(initial_max_speed: f32) -> Self {
        Self {
            mode: LocomotionMode::Walking,
            last_mode: LocomotionMode::Walking,
            current_max_speed: initial_max_speed,
            desired_max_speed: initial_max_speed,
            last_desired_max_speed: initial_max_speed,
            vertical_speed_cap: None,
            smoothing: None,
            boost_rate: 1.0,
        }
    }

    pub fn smoothing(&self) -> Option<&SpeedSmoothing> {
        self.smoothing.as_ref()
    }

    pub fn boost_rate(&self) -> f32 {
        self.boost_rate
    }

    /// Commits this frame's resolution. A changed desired speed always drops
    /// the in-flight smoothing; the ceiling then either snaps or eases.
    pub fn commit(&mut self, resolution: &ModeResolution) -> SpeedChange {
        let leaving_boosted = self.mode.is_boosted();
        if let Some(rate) = resolution.rate_multiplier {
            self.boost_rate = rate;
        }

        let desired = resolution.desired_max_speed;
        let mut change = SpeedChange::Unchanged;

        if desired != self.last_desired_max_speed {
            self.smoothing = None;

            let eased = match resolution.transition {
                SpeedTransition::Instant => false,
                SpeedTransition::GradualBoost => {
                    desired > self.current_max_speed || leaving_boosted
                }
                SpeedTransition::Default => leaving_boosted,
            };
            let finite = desired.is_finite() && self.current_max_speed.is_finite();

            if eased && finite && desired != self.current_max_speed {
                self.smoothing = Some(SpeedSmoothing::new(self.current_max_speed, desired));
                change = SpeedChange::Smoothed;
            } else {
                self.current_max_speed = desired;
                change = SpeedChange::Instant;
            }
        }

        self.last_mode = self.mode;
        self.mode = resolution.mode;
        self.desired_max_speed = desired;
        self.last_desired_max_speed = desired;
        self.vertical_speed_cap = resolution.vertical_speed_cap;
        change
    }

    /// Resumes the smoothing task, if any, for one frame.
    pub fn advance(&mut self, delta_secs: f32, slope: &SlopeInfo, tuning: &MovementTuning) {
        let Some(smoothing) = self.smoothing.as_mut() else {
            return;
        };

        let mut rate = tuning.speed_increase_multiplier * self.boost_rate;
        if slope.on_slope {
            rate *= tuning.slope_increase_multiplier * slope.acceleration_multiplier();
        }

        let (speed, finished) = if rate > 0.0 && rate.is_finite() {
            smoothing.advance(delta_secs * rate)
        } else {
            (smoothing.target(), true)
        };
        self.current_max_speed = speed;
        if finished {
            self.smoothing = None;
            self.boost_rate = 1.0;
        }
    }

    pub fn clamp(&self, velocity: Vec3) -> Vec3 {
        clamp_velocity(velocity, self.current_max_speed, self.vertical_speed_cap)
    }

    pub fn linear_damping(&self, tuning: &MovementTuning) -> f32 {
        if self.mode.uses_ground_drag() {
            tuning.ground_drag
        } else {
            0.0
        }
    }
}

/// Caps planar speed at `max_planar` and upward speed at `vertical_cap`,
/// each without touching the other component.
pub fn clamp_velocity(velocity: Vec3, max_planar: f32, vertical_cap: Option<f32>) -> Vec3 {
    let mut clamped = velocity;

    let planar = Vec2::new(velocity.x, velocity.z);
    if planar.length() > max_planar {
        let limited = planar.normalize_or_zero() * max_planar.max(0.0);
        clamped.x = limited.x;
        clamped.z = limited.y;
    }

    if let Some(cap) = vertical_cap {
        if clamped.y > cap {
            clamped.y = cap;
        }
    }

    clamped
}

/// Planar speed of a velocity, ignoring the vertical axis.
pub fn planar_speed(velocity: Vec3) -> f32 {
    Vec2::new(velocity.x, velocity.z).length()
}

/// Force produced by player input. Projected onto walkable slopes, reduced
/// while airborne, zero for zero input.
pub fn input_force(direction: Vec3, sense: &GroundSense, tuning: &MovementTuning) -> Vec3 {
    let base = tuning.move_force;
    if sense.on_slope() {
        sense.slope.project(direction) * base * tuning.slope_force_factor
    } else if sense.grounded {
        direction.normalize_or_zero() * base * tuning.ground_force_factor
    } else {
        direction.normalize_or_zero() * base * tuning.ground_force_factor * tuning.air_multiplier
    }
}

/// How a force is turned into a velocity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous, scaled by the step length
    Force,
    /// Instantaneous
    Impulse,
}

pub fn velocity_change(force: Vec3, mode: ForceMode, mass: f32, delta_secs: f32) -> Vec3 {
    if mass <= 0.0 {
        return Vec3::ZERO;
    }
    match mode {
        ForceMode::Force => force / mass * delta_secs,
        ForceMode::Impulse => force / mass,
    }
}
