//! Movement domain: ability triggers, timers and their side effects on the body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::abilities::{
    Crouch, Dash, Jump, JumpAttempt, ScriptedJump, Slide, SlideInput, SlideTransition,
    dash_direction, jump_velocity,
};
use crate::movement::restriction::{ReleaseCause, Restrictions};
use crate::movement::systems::sensors::world_filter;
use crate::movement::{
    BodyHeight, BodyTuning, CrouchTuning, DashTuning, FovRequest, ForceMode, GroundSense,
    JumpTuning, MovementInput, MovementOverrides, Orientation, Player, ScriptedJumpTuning,
    SlideTuning, velocity_change,
};

pub(crate) fn update_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<JumpTuning>,
    body: Res<BodyTuning>,
    mut query: Query<
        (
            &mut Jump,
            &GroundSense,
            &Dash,
            &Restrictions,
            &MovementOverrides,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut jump, sense, dash, restrictions, overrides, mut velocity) in &mut query {
        jump.tick(time.delta());

        if restrictions.blocks_force(overrides) {
            continue;
        }

        match jump.try_jump(input.jump_held, sense.grounded, dash.is_active()) {
            JumpAttempt::Launched => {
                velocity.0 = jump_velocity(velocity.0, tuning.jump_force, body.mass);
                debug!("Jump: vertical_velocity={:.2}", velocity.y);
            }
            JumpAttempt::Suppressed => debug!("Jump swallowed while dashing"),
            JumpAttempt::Idle => {}
        }
    }
}

pub(crate) fn update_crouch(
    input: Res<MovementInput>,
    tuning: Res<CrouchTuning>,
    body: Res<BodyTuning>,
    mut query: Query<
        (
            &mut Crouch,
            &Restrictions,
            &MovementOverrides,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut crouch, restrictions, overrides, mut velocity) in &mut query {
        match crouch.update(input.crouch_just_pressed, input.crouch_just_released) {
            Some(true) if restrictions.blocks_force(overrides) => {
                debug!("Crouch started, settle impulse held back while restricted");
            }
            Some(true) => {
                velocity.0 += velocity_change(
                    Vec3::NEG_Y * tuning.settle_impulse,
                    ForceMode::Impulse,
                    body.mass,
                    0.0,
                );
                debug!("Crouch started");
            }
            Some(false) => debug!("Crouch ended"),
            None => {}
        }
    }
}

pub(crate) fn update_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    body: Res<BodyTuning>,
    mut fov_requests: MessageWriter<FovRequest>,
    mut query: Query<
        (
            &mut Dash,
            &Orientation,
            &mut Restrictions,
            &mut ScriptedJump,
            &MovementOverrides,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for (
        mut dash,
        orientation,
        mut restrictions,
        mut scripted_jump,
        overrides,
        mut velocity,
        mut gravity_scale,
    ) in &mut query
    {
        let tick = dash.tick(time.delta());

        if let Some(impulse) = tick.impulse {
            if restrictions.blocks_force(overrides) {
                debug!("Dash impulse dropped while restricted");
            } else {
                velocity.0 = impulse.apply(velocity.0, body.mass);
                debug!("Dash impulse: velocity={:?}", velocity.0);
            }
        }

        if tick.ended {
            if tick.restore_gravity {
                gravity_scale.0 = 1.0;
            }
            fov_requests.write(FovRequest::Reset);
            debug!("Dash ended");
        }

        if !input.dash_just_pressed || overrides.restricted {
            continue;
        }

        let (forward, right) = if tuning.use_camera_forward {
            (orientation.look_forward(), orientation.look_right())
        } else {
            (orientation.forward(), orientation.right())
        };
        let direction = dash_direction(input.axis, forward, right, &tuning);

        if !dash.try_start(direction, Vec3::Y, &tuning) {
            debug!(
                "Dash on cooldown: {:.2}s remaining",
                dash.cooldown_remaining()
            );
            continue;
        }

        let release = restrictions.release(ReleaseCause::Superseded);
        if release.ended_window {
            scripted_jump.cancel();
            debug!("Scripted motion superseded by dash");
        }

        if tuning.disable_gravity {
            gravity_scale.0 = 0.0;
        }

        fov_requests.write(FovRequest::Set {
            target: tuning.fov,
            duration: Some(tuning.fov_transition),
        });
        debug!("Dash started: direction={:?}", direction);
    }
}

pub(crate) fn update_slide(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<SlideTuning>,
    body: Res<BodyTuning>,
    mut query: Query<
        (
            &mut Slide,
            &GroundSense,
            &Restrictions,
            &MovementOverrides,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut slide, sense, restrictions, overrides, mut velocity) in &mut query {
        let slide_input = SlideInput {
            pressed: input.slide_just_pressed,
            released: input.slide_just_released,
            moving: input.is_moving(),
            sprinting: input.sprint_held,
            grounded: sense.grounded,
        };

        match slide.update(&slide_input, &tuning, time.delta()) {
            Some(SlideTransition::Started) if restrictions.blocks_force(overrides) => {
                debug!("Slide started, settle impulse held back while restricted");
            }
            Some(SlideTransition::Started) => {
                velocity.0 += velocity_change(
                    Vec3::NEG_Y * tuning.settle_impulse,
                    ForceMode::Impulse,
                    body.mass,
                    0.0,
                );
                debug!("Slide started");
            }
            Some(SlideTransition::Stopped) => {
                debug!("Slide stopped after {:.2}s", slide.elapsed());
            }
            None => {}
        }
    }
}

/// Jump-to-position: aims along the look ray and hands the launch to the
/// restriction window.
pub(crate) fn update_scripted_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    tuning: Res<ScriptedJumpTuning>,
    body: Res<BodyTuning>,
    mut fov_requests: MessageWriter<FovRequest>,
    mut query: Query<
        (
            &Transform,
            &Orientation,
            &mut ScriptedJump,
            &mut Restrictions,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (transform, orientation, mut scripted_jump, mut restrictions, mut velocity) in &mut query
    {
        if let Some(launch_velocity) = scripted_jump.tick(time.delta()) {
            velocity.0 = launch_velocity;
            fov_requests.write(FovRequest::Set {
                target: tuning.fov,
                duration: None,
            });
            debug!("Scripted jump launched: velocity={:?}", launch_velocity);
        }

        if !input.target_jump_just_pressed {
            continue;
        }

        let eye = transform.translation + Vec3::Y * body.eye_height;
        let Ok(look) = Dir3::new(orientation.look_forward()) else {
            continue;
        };
        let Some(hit) =
            spatial_query.cast_ray(eye, look, tuning.target_range, true, &world_filter())
        else {
            debug!("Scripted jump: no target in range");
            continue;
        };

        let target = eye + *look * hit.distance;
        match scripted_jump.launch(
            transform.translation,
            target,
            &mut restrictions,
            &tuning,
            body.gravity,
        ) {
            Ok(launch) => debug!(
                "Scripted jump toward {:?}: flight_time={:.2}s, limited_speed={:.2}",
                target,
                launch.flight_time,
                launch.planar_speed()
            ),
            Err(err) => warn!("Scripted jump toward {:?} rejected: {}", target, err),
        }
    }
}

/// Applies the smallest collision height any ability currently asks for.
pub(crate) fn apply_body_height(
    crouch_tuning: Res<CrouchTuning>,
    slide_tuning: Res<SlideTuning>,
    mut query: Query<(&mut Transform, &mut BodyHeight, &Crouch, &Slide), With<Player>>,
) {
    for (mut transform, mut height, crouch, slide) in &mut query {
        let scale = height.resolve([
            crouch.height_request(&crouch_tuning),
            slide.height_request(&slide_tuning),
        ]);

        if scale != height.applied_scale {
            height.applied_scale = scale;
            transform.scale.y = scale;
        }
    }
}
