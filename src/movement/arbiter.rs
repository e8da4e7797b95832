//! Movement domain: locomotion requests and the mode priority cascade.
//!
//! Ability modules never write shared flags. Each one describes what it wants
//! this frame as a [`LocomotionRequest`]; the requests are merged and
//! [`resolve_mode`] turns them into exactly one [`LocomotionMode`] plus the
//! speed ceiling that goes with it.

use bevy::prelude::*;

use crate::movement::{GroundSense, LocomotionMode, MovementOverrides, MovementTuning};

/// Speed ceiling used by [`LocomotionMode::Unlimited`].
pub const UNLIMITED_SPEED: f32 = f32::INFINITY;

/// Vertical velocity above which a slope slide is not considered downhill.
const DOWNHILL_VERTICAL_SPEED: f32 = 0.2;

/// One frame's worth of wishes from a single module.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionRequest {
    pub freeze: bool,
    pub unlimited_speed: bool,
    /// Externally supplied speed limit, e.g. from a scripted jump
    pub limited_speed: Option<f32>,
    pub dashing: bool,
    pub sliding: bool,
    pub crouching: bool,
    pub sprinting: bool,
    /// Upward speed cap requested while the module is active
    pub vertical_speed_cap: Option<f32>,
}

impl LocomotionRequest {
    /// Combines two requests. Flags accumulate; for limits the tighter one wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            freeze: self.freeze || other.freeze,
            unlimited_speed: self.unlimited_speed || other.unlimited_speed,
            limited_speed: min_option(self.limited_speed, other.limited_speed),
            dashing: self.dashing || other.dashing,
            sliding: self.sliding || other.sliding,
            crouching: self.crouching || other.crouching,
            sprinting: self.sprinting || other.sprinting,
            vertical_speed_cap: min_option(self.vertical_speed_cap, other.vertical_speed_cap),
        }
    }

    pub fn gather<'a>(sources: impl IntoIterator<Item = &'a dyn LocomotionSource>) -> Self {
        sources
            .into_iter()
            .map(|source| source.locomotion_request())
            .fold(Self::default(), Self::merge)
    }
}

fn min_option(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Anything that submits a locomotion request to the arbiter.
pub trait LocomotionSource {
    fn locomotion_request(&self) -> LocomotionRequest;
}

impl LocomotionSource for MovementOverrides {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            freeze: self.freeze,
            unlimited_speed: self.unlimited_speed,
            ..default()
        }
    }
}

/// Sprint input counts as a request of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintIntent(pub bool);

impl LocomotionSource for SprintIntent {
    fn locomotion_request(&self) -> LocomotionRequest {
        LocomotionRequest {
            sprinting: self.0,
            ..default()
        }
    }
}

/// How the speed ceiling should follow a change of the desired speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTransition {
    /// Default policy: snap, unless leaving a boosted mode
    #[default]
    Default,
    /// Always snap
    Instant,
    /// Ease upward (slope slide buildup)
    GradualBoost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeResolution {
    pub mode: LocomotionMode,
    pub desired_max_speed: f32,
    pub transition: SpeedTransition,
    /// Convergence multiplier to record for the next eased transition
    pub rate_multiplier: Option<f32>,
    pub vertical_speed_cap: Option<f32>,
}

impl ModeResolution {
    fn new(mode: LocomotionMode, desired_max_speed: f32) -> Self {
        Self {
            mode,
            desired_max_speed,
            transition: SpeedTransition::Default,
            rate_multiplier: None,
            vertical_speed_cap: None,
        }
    }

    fn with_transition(mut self, transition: SpeedTransition) -> Self {
        self.transition = transition;
        self
    }
}

/// Fixed priority cascade, first match wins.
///
/// Pure: identical arguments always produce identical results.
/// `previous_desired` is the desired speed committed on the previous frame
/// and only feeds the airborne rule.
pub fn resolve_mode(
    request: &LocomotionRequest,
    sense: &GroundSense,
    vertical_velocity: f32,
    previous_desired: f32,
    tuning: &MovementTuning,
) -> ModeResolution {
    let mut resolution = if request.freeze {
        ModeResolution::new(LocomotionMode::Frozen, 0.0).with_transition(SpeedTransition::Instant)
    } else if request.unlimited_speed {
        ModeResolution::new(LocomotionMode::Unlimited, UNLIMITED_SPEED)
    } else if let Some(limit) = request.limited_speed {
        ModeResolution::new(LocomotionMode::Limited, limit.max(0.0))
    } else if request.dashing {
        let mut dash = ModeResolution::new(LocomotionMode::Dashing, tuning.dash_max_speed)
            .with_transition(SpeedTransition::Instant);
        dash.rate_multiplier = Some(tuning.dash_speed_change_factor);
        dash
    } else if request.sliding {
        if sense.on_slope() && vertical_velocity < DOWNHILL_VERTICAL_SPEED {
            ModeResolution::new(LocomotionMode::Sliding, tuning.slope_slide_max_speed)
                .with_transition(SpeedTransition::GradualBoost)
        } else {
            ModeResolution::new(LocomotionMode::Sliding, tuning.sprint_max_speed)
        }
    } else if request.crouching && sense.grounded {
        ModeResolution::new(LocomotionMode::Crouching, tuning.crouch_max_speed)
    } else if sense.grounded && request.sprinting {
        ModeResolution::new(LocomotionMode::Sprinting, tuning.sprint_max_speed)
    } else if sense.grounded {
        ModeResolution::new(LocomotionMode::Walking, tuning.walk_max_speed)
    } else {
        // Carried over literally: a low previous ceiling lifts to sprint speed,
        // anything else settles on walk speed.
        let desired = if previous_desired < tuning.walk_max_speed {
            tuning.sprint_max_speed
        } else {
            tuning.walk_max_speed
        };
        ModeResolution::new(LocomotionMode::Airborne, desired)
    };

    resolution.vertical_speed_cap = request.vertical_speed_cap;
    resolution
}
