//! Movement domain: ground and slope sensing.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSense, Player, ProbeHit, SensorTuning};

/// Filter shared by every downward probe: only world geometry counts.
pub(crate) fn world_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
}

pub(crate) fn sense_ground(
    spatial_query: SpatialQuery,
    tuning: Res<SensorTuning>,
    mut query: Query<(&Transform, &mut GroundSense), With<Player>>,
) {
    let filter = world_filter();

    for (transform, mut sense) in &mut query {
        let was_grounded = sense.grounded;

        let hit = spatial_query
            .cast_ray(
                transform.translation,
                Dir3::NEG_Y,
                tuning.slope_distance(),
                true,
                &filter,
            )
            .map(|hit| ProbeHit {
                distance: hit.distance,
                normal: hit.normal,
            });

        *sense = GroundSense::from_probe(hit, &tuning);

        if sense.grounded && !was_grounded {
            debug!(
                "Landed: on_slope={}, slope_angle={:.1}",
                sense.slope.on_slope, sense.slope.angle
            );
        } else if !sense.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}
