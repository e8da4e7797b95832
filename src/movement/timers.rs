//! Movement domain: cooldowns and delayed actions advanced by the frame loop.

use std::time::Duration;

use bevy::prelude::*;

/// Gate on an ability trigger. Starts ready; `trigger` restarts the countdown.
#[derive(Debug, Clone)]
pub struct AbilityCooldown {
    timer: Timer,
}

impl AbilityCooldown {
    pub fn new(seconds: f32) -> Self {
        let mut timer = Timer::from_seconds(seconds.max(0.0), TimerMode::Once);
        let full = timer.duration();
        timer.tick(full);
        Self { timer }
    }

    pub fn is_ready(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }

    pub fn remaining_secs(&self) -> f32 {
        self.timer.remaining_secs()
    }

    pub fn trigger(&mut self) {
        self.timer.reset();
    }

    /// Picks up a new duration without disturbing the current countdown.
    pub fn set_duration(&mut self, seconds: f32) {
        self.timer
            .set_duration(Duration::from_secs_f32(seconds.max(0.0)));
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }
}

impl Default for AbilityCooldown {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A one-shot continuation carrying `T` until its delay elapses.
///
/// Dropping or replacing the value is the cancellation: nothing else holds a
/// reference to the pending payload.
#[derive(Debug, Clone)]
pub struct Delayed<T> {
    timer: Timer,
    payload: Option<T>,
}

impl<T> Delayed<T> {
    pub fn new(seconds: f32, payload: T) -> Self {
        Self {
            timer: Timer::from_seconds(seconds.max(0.0), TimerMode::Once),
            payload: Some(payload),
        }
    }

    /// Advances the delay and yields the payload exactly once when it elapses.
    pub fn tick(&mut self, delta: Duration) -> Option<T> {
        self.timer.tick(delta);
        if self.timer.remaining_secs() == 0.0 {
            self.payload.take()
        } else {
            None
        }
    }

    pub fn is_spent(&self) -> bool {
        self.payload.is_none()
    }
}

/// Ticks an optional continuation, clearing the slot once it has fired.
pub fn tick_slot<T>(slot: &mut Option<Delayed<T>>, delta: Duration) -> Option<T> {
    let fired = slot.as_mut().and_then(|delayed| delayed.tick(delta));
    if slot.as_ref().is_some_and(Delayed::is_spent) {
        *slot = None;
    }
    fired
}
