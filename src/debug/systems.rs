//! Debug domain: hotkeys and the telemetry overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::telemetry::LocomotionTelemetry;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{MovementOverrides, Player};

/// F1 overlay, F3 JSON snapshot, F5/F6/F7 override toggles.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    telemetry: Res<LocomotionTelemetry>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<&mut MovementOverrides, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F3) {
        match telemetry.to_json() {
            Ok(json) => info!("[DEBUG] telemetry {}", json),
            Err(e) => warn!("[DEBUG] telemetry could not be serialized: {}", e),
        }
    }

    let Ok(mut overrides) = player_query.single_mut() else {
        return;
    };

    let toggled = if keyboard.just_pressed(KeyCode::F5) {
        overrides.freeze = !overrides.freeze;
        Some(("Freeze", overrides.freeze))
    } else if keyboard.just_pressed(KeyCode::F6) {
        overrides.unlimited_speed = !overrides.unlimited_speed;
        Some(("Unlimited speed", overrides.unlimited_speed))
    } else if keyboard.just_pressed(KeyCode::F7) {
        overrides.restricted = !overrides.restricted;
        Some(("Restricted", overrides.restricted))
    } else {
        None
    };

    if let Some((label, enabled)) = toggled {
        let msg = format!("{} {}", label, if enabled { "ON" } else { "OFF" });
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, remaining)) = debug_state.status_message.as_mut() {
        *remaining -= time.delta_secs();
        if *remaining <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the overlay with the current telemetry
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    telemetry: Res<LocomotionTelemetry>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let Ok(mut text) = overlay_query.single_mut() {
        let mut content = telemetry.overlay_text();
        if let Some((message, _)) = &debug_state.status_message {
            content.push('\n');
            content.push_str(message);
        }
        **text = content;
    }
}
