//! Camera domain: spawn, follow and field-of-view systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{FovTween, PlayerCamera};
use crate::movement::{
    BodyHeight, BodyTuning, FovRequest, HeadBobCue, Orientation, Player, planar_speed,
};

pub(crate) fn spawn_camera(mut commands: Commands, body: Res<BodyTuning>) {
    commands.spawn((
        PlayerCamera::default(),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: body.base_fov.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, body.eye_height, 0.0),
    ));
}

fn current_fov_degrees(projection: &Projection) -> Option<f32> {
    match projection {
        Projection::Perspective(perspective) => Some(perspective.fov.to_degrees()),
        _ => None,
    }
}

/// Starts a tween for the latest request of the frame.
pub(crate) fn handle_fov_requests(
    mut requests: MessageReader<FovRequest>,
    body: Res<BodyTuning>,
    mut query: Query<(&mut PlayerCamera, &Projection)>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let (target, duration) = match request {
        FovRequest::Set { target, duration } => {
            (target, duration.unwrap_or(body.fov_transition))
        }
        FovRequest::Reset => (body.base_fov, body.fov_transition),
    };

    for (mut camera, projection) in &mut query {
        let Some(current) = current_fov_degrees(projection) else {
            continue;
        };
        camera.fov_tween = Some(FovTween::new(current, target, duration));
        debug!("FOV tween {:.1} -> {:.1} over {:.2}s", current, target, duration);
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    body: Res<BodyTuning>,
    head_bob: Res<HeadBobCue>,
    player_query: Query<(&Transform, &Orientation, &BodyHeight, &LinearVelocity), With<Player>>,
    mut camera_query: Query<
        (&mut Transform, &mut PlayerCamera, &mut Projection),
        Without<Player>,
    >,
) {
    let Some((player_transform, orientation, height, velocity)) = player_query.iter().next()
    else {
        return;
    };

    let delta_secs = time.delta_secs();

    for (mut transform, mut camera, mut projection) in &mut camera_query {
        let bob = camera.head_bob.advance(
            head_bob.enabled,
            planar_speed(velocity.0),
            body.head_bob_min_speed,
            body.head_bob_frequency,
            body.head_bob_amplitude,
            delta_secs,
        );

        let eye = body.eye_height * height.applied_scale + bob;
        transform.translation = player_transform.translation + Vec3::Y * eye;
        transform.rotation = orientation.look_rotation();

        if let Some(tween) = camera.fov_tween.as_mut() {
            let (fov, finished) = tween.advance(delta_secs);
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.fov = fov.to_radians();
            }
            if finished {
                camera.fov_tween = None;
            }
        }
    }
}
