//! Movement domain: fixed-step forces.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::abilities::{Slide, SlideStep};
use crate::movement::restriction::Restrictions;
use crate::movement::{
    BodyTuning, ForceMode, GroundSense, MovementInput, MovementOverrides, MovementTuning,
    Orientation, Player, SlideTuning, SpeedGovernor, input_force, velocity_change,
};

pub(crate) fn apply_input_force(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    body: Res<BodyTuning>,
    mut query: Query<
        (
            &Orientation,
            &GroundSense,
            &SpeedGovernor,
            &Restrictions,
            &MovementOverrides,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (orientation, sense, governor, restrictions, overrides, mut velocity) in &mut query {
        if !governor.mode.is_force_driven() || restrictions.blocks_force(overrides) {
            continue;
        }

        let direction = orientation.planar_direction(input.axis);
        let force = input_force(direction, sense, &tuning);
        velocity.0 += velocity_change(force, ForceMode::Force, body.mass, time.delta_secs());
    }
}

pub(crate) fn apply_slide_force(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<SlideTuning>,
    body: Res<BodyTuning>,
    mut query: Query<
        (
            &Orientation,
            &GroundSense,
            &mut Slide,
            &Restrictions,
            &MovementOverrides,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (orientation, sense, mut slide, restrictions, overrides, mut velocity) in &mut query {
        let Some((step, expired)) =
            slide.step(sense.on_slope(), velocity.y, &tuning, time.delta_secs())
        else {
            continue;
        };

        if !restrictions.blocks_force(overrides) {
            let force = match step {
                SlideStep::Timed => {
                    orientation.planar_direction(input.axis).normalize_or_zero() * tuning.force
                }
                SlideStep::Downhill => {
                    let direction = orientation.planar_direction(input.axis);
                    sense.slope.project(direction) * tuning.force
                }
            };
            velocity.0 += velocity_change(force, ForceMode::Force, body.mass, time.delta_secs());
        }

        if expired {
            debug!("Slide timer ran out");
        }
    }
}
