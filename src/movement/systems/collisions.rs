//! Movement domain: restriction timers and contact-driven release.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::restriction::{Release, Restrictions};
use crate::movement::{FovRequest, GameLayer, Ground, Player, Wall};

pub(crate) fn tick_restrictions(
    time: Res<Time>,
    mut fov_requests: MessageWriter<FovRequest>,
    mut query: Query<&mut Restrictions, With<Player>>,
) {
    for mut restrictions in &mut query {
        if let Some(release) = restrictions.tick(time.delta()) {
            finish_release(release, &mut fov_requests);
        }
    }
}

/// Ends an armed scripted-motion window on the first touch of world geometry.
pub(crate) fn release_on_contact(
    mut collision_events: MessageReader<CollisionStart>,
    mut fov_requests: MessageWriter<FovRequest>,
    mut player_query: Query<&mut Restrictions, With<Player>>,
    world_query: Query<(Has<Ground>, Has<Wall>)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other_entity) in pairs {
            let Ok(mut restrictions) = player_query.get_mut(player_entity) else {
                continue;
            };

            let layer = match world_query.get(other_entity) {
                Ok((true, _)) => GameLayer::Ground,
                Ok((_, true)) => GameLayer::Wall,
                _ => GameLayer::Default,
            };

            if let Some(release) = restrictions.on_contact(layer, 1) {
                finish_release(release, &mut fov_requests);
            }
        }
    }
}

fn finish_release(release: Release, fov_requests: &mut MessageWriter<FovRequest>) {
    debug!("Scripted motion released: {:?}", release.cause);
    if release.ended_window {
        fov_requests.write(FovRequest::Reset);
    }
}
