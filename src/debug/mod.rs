//! Debug domain: locomotion telemetry plus dev-only overlay and hotkeys.
//!
//! Features:
//! - Telemetry snapshot refreshed every frame
//! - F1 or ` toggles the telemetry overlay
//! - F3 logs the snapshot as JSON
//! - F5 / F6 / F7 toggle freeze, unlimited speed and the hard restriction
//! - Test course with slopes, walls and a high platform

#[cfg(feature = "dev-tools")]
mod state;
#[cfg(feature = "dev-tools")]
mod systems;
mod telemetry;
#[cfg(feature = "dev-tools")]
mod ui;

#[cfg(test)]
mod tests;

#[cfg(feature = "dev-tools")]
pub use state::DebugState;
pub use telemetry::LocomotionTelemetry;

use bevy::prelude::*;

use crate::debug::telemetry::publish_telemetry;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTelemetry>()
            .add_systems(PostUpdate, publish_telemetry);

        #[cfg(feature = "dev-tools")]
        app.init_resource::<DebugState>()
            .add_systems(Startup, crate::movement::spawn_test_course)
            .add_systems(
                Update,
                (
                    systems::handle_debug_hotkeys,
                    systems::update_status_message,
                    systems::update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
