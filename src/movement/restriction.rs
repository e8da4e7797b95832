//! Movement domain: restriction windows and their release.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::timers::{Delayed, tick_slot};
use crate::movement::{GameLayer, LocomotionRequest, LocomotionSource, MovementOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseCause {
    /// Qualifying contact while release-on-touch was armed
    Contact,
    /// Fallback duration ran out
    Timeout,
    /// Another ability took over movement
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub cause: ReleaseCause,
    /// A scripted-motion window was actually open (camera effects need a reset)
    pub ended_window: bool,
}

/// Scripted-motion lock plus the speed limit that travels with it.
///
/// The hard `restricted` lock lives on [`MovementOverrides`]; this component
/// owns the second tier, which only a contact or the fallback timer clear.
#[derive(Component, Debug, Default, Clone)]
pub struct Restrictions {
    tier_two: bool,
    limited_speed: Option<f32>,
    release_on_touch: bool,
    arm_touch: Option<Delayed<()>>,
    fallback: Option<Delayed<()>>,
}

impl Restrictions {
    pub fn is_tier_two(&self) -> bool {
        self.tier_two
    }

    pub fn limited_speed(&self) -> Option<f32> {
        self.limited_speed
    }

    pub fn release_on_touch_armed(&self) -> bool {
        self.release_on_touch
    }

    /// Whether input and ability force must be suppressed this frame.
    pub fn blocks_force(&self, overrides: &MovementOverrides) -> bool {
        overrides.restricted || self.tier_two
    }

    /// Opens a scripted-motion window. Replaces any window already open,
    /// including its timers.
    pub fn begin_scripted_motion(&mut self, speed_limit: f32, arm_delay: f32, max_duration: f32) {
        self.tier_two = true;
        self.limited_speed = Some(speed_limit);
        self.release_on_touch = false;
        self.arm_touch = Some(Delayed::new(arm_delay, ()));
        self.fallback = Some(Delayed::new(max_duration, ()));
    }

    /// Advances the arm and fallback timers.
    pub fn tick(&mut self, delta: Duration) -> Option<Release> {
        if tick_slot(&mut self.arm_touch, delta).is_some() {
            self.release_on_touch = true;
        }

        if tick_slot(&mut self.fallback, delta).is_some() {
            return Some(self.release(ReleaseCause::Timeout));
        }

        None
    }

    /// Contact notification from the physics world.
    pub fn on_contact(&mut self, layer: GameLayer, contact_count: usize) -> Option<Release> {
        let touched = contact_count > 0 && layer.releases_scripted_motion();
        if self.release_on_touch && touched {
            Some(self.release(ReleaseCause::Contact))
        } else {
            None
        }
    }

    /// Clears the window and the speed limit. Safe to call when nothing is open.
    pub fn release(&mut self, cause: ReleaseCause) -> Release {
        let ended_window = self.tier_two;
        self.tier_two = false;
        self.limited_speed = None;
        self.release_on_touch = false;
        self.arm_touch = None;
        self.fallback = None;
        Release {
            cause,
            ended_window,
        }
    }
}

impl LocomotionSource for Restrictions {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            limited_speed: self.limited_speed,
            ..default()
        }
    }
}
