//! Movement domain: mode resolution and speed ceiling per frame.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::abilities::{Crouch, Dash, Slide};
use crate::movement::restriction::Restrictions;
use crate::movement::{
    GroundSense, HeadBobCue, LocomotionMode, LocomotionRequest, LocomotionSource,
    MovementInput, MovementOverrides, MovementTuning, Player, SpeedChange, SpeedGovernor,
    SprintIntent, resolve_mode,
};

/// Collects every module's request, resolves the mode and advances the
/// speed ceiling toward it.
pub(crate) fn resolve_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut head_bob: ResMut<HeadBobCue>,
    mut query: Query<
        (
            &MovementOverrides,
            &Restrictions,
            &Dash,
            &Slide,
            &Crouch,
            &GroundSense,
            &mut SpeedGovernor,
            &mut LinearVelocity,
            &mut LinearDamping,
        ),
        With<Player>,
    >,
) {
    let sprint = SprintIntent(input.sprint_held);

    for (
        overrides,
        restrictions,
        dash,
        slide,
        crouch,
        sense,
        mut governor,
        mut velocity,
        mut damping,
    ) in &mut query
    {
        let sources: [&dyn LocomotionSource; 6] =
            [overrides, restrictions, dash, slide, crouch, &sprint];
        let request = LocomotionRequest::gather(sources);

        let resolution = resolve_mode(
            &request,
            sense,
            velocity.y,
            governor.last_desired_max_speed,
            &tuning,
        );

        let previous_mode = governor.mode;
        match governor.commit(&resolution) {
            SpeedChange::Smoothed => debug!(
                "Speed ceiling easing {:.2} -> {:.2}",
                governor.current_max_speed, governor.desired_max_speed
            ),
            SpeedChange::Instant => {
                debug!("Speed ceiling set to {:.2}", governor.current_max_speed)
            }
            SpeedChange::Unchanged => {}
        }
        if governor.mode != previous_mode {
            debug!("Locomotion mode: {} -> {}", previous_mode, governor.mode);
        }

        governor.advance(time.delta_secs(), &sense.slope, &tuning);

        if governor.mode == LocomotionMode::Frozen {
            velocity.0 = Vec3::ZERO;
        }

        damping.0 = governor.linear_damping(&tuning);
        head_bob.enabled = governor.mode.head_bob_enabled() && sense.grounded;
    }
}

/// Enforces the speed ceiling and the optional upward cap. A frozen body
/// loses its vertical speed as well.
pub(crate) fn clamp_body_velocity(
    mut query: Query<(&SpeedGovernor, &mut LinearVelocity), With<Player>>,
) {
    for (governor, mut velocity) in &mut query {
        let clamped = if governor.mode == LocomotionMode::Frozen {
            Vec3::ZERO
        } else {
            governor.clamp(velocity.0)
        };
        if clamped != velocity.0 {
            velocity.0 = clamped;
        }
    }
}
