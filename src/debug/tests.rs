//! Debug domain: tests for the telemetry snapshot.

use super::LocomotionTelemetry;
use crate::movement::{LocomotionMode, UNLIMITED_SPEED};

fn sample() -> LocomotionTelemetry {
    LocomotionTelemetry {
        planar_speed: 6.5,
        current_max_speed: 7.0,
        vertical_speed: -1.25,
        mode: LocomotionMode::Walking,
    }
}

#[test]
fn test_overlay_text_shows_speed_over_ceiling() {
    let text = sample().overlay_text();
    assert!(text.contains("Speed: 6.50/7.00"));
    assert!(text.contains("Y Speed: -1.25"));
    assert!(text.contains("Mode: walking"));
}

#[test]
fn test_telemetry_json_snapshot() {
    let json = sample().to_json().expect("telemetry should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["planar_speed"], 6.5);
    assert_eq!(value["current_max_speed"], 7.0);
    assert_eq!(value["vertical_speed"], -1.25);
    assert_eq!(value["mode"], "Walking");
}

#[test]
fn test_telemetry_json_keeps_unlimited_ceiling() {
    let telemetry = LocomotionTelemetry {
        current_max_speed: UNLIMITED_SPEED,
        mode: LocomotionMode::Unlimited,
        ..sample()
    };
    let json = telemetry.to_json().expect("telemetry should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["current_max_speed"], "unlimited");
    assert_eq!(value["mode"], "Unlimited");
}

#[test]
fn test_default_telemetry_is_idle_walking() {
    let telemetry = LocomotionTelemetry::default();
    assert_eq!(telemetry.mode, LocomotionMode::Walking);
    assert_eq!(telemetry.planar_speed, 0.0);
}

#[cfg(feature = "dev-tools")]
#[test]
fn test_status_message_is_replaced() {
    let mut state = super::DebugState::default();
    state.set_message("Freeze ON", 2.0);
    state.set_message("Freeze OFF", 1.0);
    assert_eq!(
        state.status_message,
        Some(("Freeze OFF".to_string(), 1.0))
    );
}
