//! Debug domain: locomotion telemetry snapshot.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Serialize, Serializer};

use crate::movement::{LocomotionMode, Player, SpeedGovernor, planar_speed};

/// Per-frame locomotion numbers for overlays and logs.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocomotionTelemetry {
    pub planar_speed: f32,
    #[serde(serialize_with = "serialize_speed_ceiling")]
    pub current_max_speed: f32,
    pub vertical_speed: f32,
    pub mode: LocomotionMode,
}

impl LocomotionTelemetry {
    /// Overlay text: speed over ceiling, vertical speed, active mode.
    pub fn overlay_text(&self) -> String {
        format!(
            "Speed: {:.2}/{:.2}\nY Speed: {:.2}\nMode: {}",
            self.planar_speed, self.current_max_speed, self.vertical_speed, self.mode
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// JSON has no infinity; an unlimited ceiling is written as `"unlimited"`.
fn serialize_speed_ceiling<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f32(*value)
    } else {
        serializer.serialize_str("unlimited")
    }
}

pub(crate) fn publish_telemetry(
    mut telemetry: ResMut<LocomotionTelemetry>,
    query: Query<(&SpeedGovernor, &LinearVelocity), With<Player>>,
) {
    let Some((governor, velocity)) = query.iter().next() else {
        return;
    };

    let snapshot = LocomotionTelemetry {
        planar_speed: planar_speed(velocity.0),
        current_max_speed: governor.current_max_speed,
        vertical_speed: velocity.y,
        mode: governor.mode,
    };
    if *telemetry != snapshot {
        *telemetry = snapshot;
    }
}
