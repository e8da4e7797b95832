//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug tooling state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the telemetry overlay is visible
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
