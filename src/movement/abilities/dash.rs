//! Movement domain: dash ability.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::timers::{AbilityCooldown, Delayed, tick_slot};
use crate::movement::{DashTuning, ForceMode, LocomotionRequest, LocomotionSource, velocity_change};

/// The delayed part of a dash: optional velocity reset, then the impulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashImpulse {
    pub force: Vec3,
    pub reset_velocity: bool,
    pub reset_vertical_velocity: bool,
}

impl DashImpulse {
    pub fn apply(&self, velocity: Vec3, mass: f32) -> Vec3 {
        let base = if self.reset_velocity {
            Vec3::ZERO
        } else if self.reset_vertical_velocity {
            Vec3::new(velocity.x, 0.0, velocity.z)
        } else {
            velocity
        };
        base + velocity_change(self.force, ForceMode::Impulse, mass, 0.0)
    }
}

/// What happened to a dash during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashTick {
    pub impulse: Option<DashImpulse>,
    pub ended: bool,
    /// Gravity was switched off for this dash and must come back
    pub restore_gravity: bool,
}

#[derive(Component, Debug, Clone)]
pub struct Dash {
    active: bool,
    cooldown: AbilityCooldown,
    pending_impulse: Option<Delayed<DashImpulse>>,
    end: Option<Delayed<()>>,
    vertical_speed_cap: Option<f32>,
    gravity_disabled: bool,
}

impl Dash {
    pub fn new(tuning: &DashTuning) -> Self {
        Self {
            active: false,
            cooldown: AbilityCooldown::new(tuning.cooldown),
            pending_impulse: None,
            end: None,
            vertical_speed_cap: None,
            gravity_disabled: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown.is_ready()
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining_secs()
    }

    /// Starts a dash along `direction` if the cooldown allows it.
    pub fn try_start(&mut self, direction: Vec3, up: Vec3, tuning: &DashTuning) -> bool {
        if !self.cooldown.is_ready() {
            return false;
        }

        self.cooldown.set_duration(tuning.cooldown);
        self.cooldown.trigger();
        self.active = true;
        self.vertical_speed_cap = tuning.max_upward_speed;
        self.gravity_disabled = tuning.disable_gravity;

        let impulse = DashImpulse {
            force: direction * tuning.dash_force + up * tuning.upward_force,
            reset_velocity: tuning.reset_velocity,
            reset_vertical_velocity: tuning.reset_vertical_velocity,
        };
        self.pending_impulse = Some(Delayed::new(tuning.impulse_delay, impulse));
        self.end = Some(Delayed::new(tuning.duration, ()));
        true
    }

    pub fn tick(&mut self, delta: Duration) -> DashTick {
        self.cooldown.tick(delta);

        let mut tick = DashTick {
            impulse: tick_slot(&mut self.pending_impulse, delta),
            ..default()
        };

        if tick_slot(&mut self.end, delta).is_some() {
            self.active = false;
            self.vertical_speed_cap = None;
            tick.ended = true;
            tick.restore_gravity = std::mem::take(&mut self.gravity_disabled);
        }

        tick
    }
}

impl LocomotionSource for Dash {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            dashing: self.active,
            vertical_speed_cap: if self.active {
                self.vertical_speed_cap
            } else {
                None
            },
            ..default()
        }
    }
}

/// Dash direction from the input axes and the allowed directions.
///
/// `forward`/`right` come from the look direction or the body, depending on
/// `use_camera_forward`. Returns zero when nothing is allowed.
pub fn dash_direction(axis: Vec2, forward: Vec3, right: Vec3, tuning: &DashTuning) -> Vec3 {
    let mut forward_part = Vec3::ZERO;
    let mut side_part = Vec3::ZERO;

    if axis.y > 0.0 && tuning.allow_forward {
        forward_part = forward;
    }
    if axis.y < 0.0 && tuning.allow_back {
        forward_part = -forward;
    }
    if axis.x > 0.0 && tuning.allow_sideways {
        side_part = right;
    }
    if axis.x < 0.0 && tuning.allow_sideways {
        side_part = -right;
    }
    if axis == Vec2::ZERO && tuning.allow_forward {
        forward_part = forward;
    }
    if tuning.allow_forward && !tuning.allow_back && !tuning.allow_sideways {
        forward_part = forward;
    }

    (forward_part + side_part).normalize_or_zero()
}
