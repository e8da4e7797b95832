//! Movement domain: slide ability.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::timers::AbilityCooldown;
use crate::movement::{LocomotionRequest, LocomotionSource, SlideTuning};

/// Vertical velocity below which a slide on a slope counts as downhill.
const DOWNHILL_VERTICAL_SPEED: f32 = -0.1;

/// Inputs the slide reads each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideInput {
    pub pressed: bool,
    pub released: bool,
    pub moving: bool,
    pub sprinting: bool,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTransition {
    Started,
    Stopped,
}

/// Which force a physics step applies while sliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    /// Along the input direction; the slide timer runs
    Timed,
    /// Along the slope; the slide lasts as long as the slope
    Downhill,
}

#[derive(Component, Debug, Clone)]
pub struct Slide {
    active: bool,
    /// Remaining time of a timed slide
    timer: f32,
    max_time: f32,
    buffered: bool,
    stop_requested: bool,
    cooldown: AbilityCooldown,
}

impl Slide {
    pub fn new(tuning: &SlideTuning) -> Self {
        Self {
            active: false,
            timer: 0.0,
            max_time: tuning.max_time,
            buffered: false,
            stop_requested: false,
            cooldown: AbilityCooldown::new(tuning.cooldown),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown.is_ready()
    }

    /// Time spent in timed sliding since the slide began.
    pub fn elapsed(&self) -> f32 {
        self.max_time - self.timer
    }

    pub fn height_request(&self, tuning: &SlideTuning) -> Option<f32> {
        self.active.then_some(tuning.y_scale)
    }

    /// Frame update: buffering, start, deferred release and leaving the ground.
    pub fn update(
        &mut self,
        input: &SlideInput,
        tuning: &SlideTuning,
        delta: Duration,
    ) -> Option<SlideTransition> {
        self.cooldown.tick(delta);

        if input.pressed && input.moving && input.sprinting {
            if tuning.allow_hold_down || (input.grounded && self.cooldown.is_ready()) {
                self.buffered = true;
            }
        }

        if input.released {
            if tuning.allow_hold_down {
                self.buffered = false;
            }
            if self.active {
                self.stop_requested = true;
            }
        }

        if self.buffered && input.grounded && self.cooldown.is_ready() && !self.active {
            self.buffered = false;
            self.start(tuning);
            return Some(SlideTransition::Started);
        }

        if !self.active {
            return None;
        }

        if self.stop_requested && self.elapsed() >= tuning.min_time {
            self.stop(tuning);
            return Some(SlideTransition::Stopped);
        }

        if !input.grounded {
            self.stop(tuning);
            return Some(SlideTransition::Stopped);
        }

        None
    }

    /// Physics step while sliding. Returns the force kind, and whether the
    /// timer ran out during this step.
    pub fn step(
        &mut self,
        on_slope: bool,
        vertical_velocity: f32,
        tuning: &SlideTuning,
        delta_secs: f32,
    ) -> Option<(SlideStep, bool)> {
        if !self.active {
            return None;
        }

        let kind = if on_slope && vertical_velocity <= DOWNHILL_VERTICAL_SPEED {
            SlideStep::Downhill
        } else {
            self.timer -= delta_secs;
            SlideStep::Timed
        };

        let expired = self.timer <= 0.0;
        if expired {
            self.stop(tuning);
        }
        Some((kind, expired))
    }

    fn start(&mut self, tuning: &SlideTuning) {
        self.active = true;
        self.stop_requested = false;
        self.max_time = tuning.max_time;
        self.timer = tuning.max_time;
    }

    fn stop(&mut self, tuning: &SlideTuning) {
        self.active = false;
        self.stop_requested = false;
        self.cooldown.set_duration(tuning.cooldown);
        self.cooldown.trigger();
    }
}

impl LocomotionSource for Slide {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            sliding: self.active,
            ..default()
        }
    }
}
