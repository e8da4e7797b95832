//! Movement domain: ground probe evaluation and slope projection.

use bevy::prelude::*;

use crate::movement::SensorTuning;

/// Angles at or below this are treated as flat ground, not slope.
const FLAT_GROUND_DEGREES: f32 = 1.0e-3;

/// What the downward probe hit, relative to the character's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub distance: f32,
    pub normal: Vec3,
}

/// Slope geometry under the character. Lives for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeInfo {
    pub on_slope: bool,
    pub normal: Vec3,
    /// Angle between the surface normal and world up, in degrees
    pub angle: f32,
}

impl Default for SlopeInfo {
    fn default() -> Self {
        Self {
            on_slope: false,
            normal: Vec3::Y,
            angle: 0.0,
        }
    }
}

impl SlopeInfo {
    pub fn from_normal(normal: Vec3, max_slope_angle: f32) -> Self {
        let normal = normal.normalize_or(Vec3::Y);
        let angle = normal.angle_between(Vec3::Y).to_degrees();
        Self {
            on_slope: angle > FLAT_GROUND_DEGREES && angle < max_slope_angle,
            normal,
            angle,
        }
    }

    /// Projects `direction` onto the slope plane and renormalizes it.
    /// Degenerate input yields zero.
    pub fn project(&self, direction: Vec3) -> Vec3 {
        (direction - self.normal * direction.dot(self.normal)).normalize_or_zero()
    }

    /// Convergence boost for the speed ceiling: steeper means faster.
    pub fn acceleration_multiplier(&self) -> f32 {
        1.0 + (self.angle / 90.0) * 2.0
    }
}

/// Per-frame result of the ground probe.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundSense {
    pub grounded: bool,
    pub slope: SlopeInfo,
}

impl GroundSense {
    /// Evaluates a single downward probe cast to `tuning.slope_distance()`.
    /// A miss means airborne, never an error.
    pub fn from_probe(hit: Option<ProbeHit>, tuning: &SensorTuning) -> Self {
        let Some(hit) = hit else {
            return Self::default();
        };

        let grounded = hit.distance <= tuning.ground_distance();
        let slope = if hit.distance <= tuning.slope_distance() {
            SlopeInfo::from_normal(hit.normal, tuning.max_slope_angle)
        } else {
            SlopeInfo::default()
        };

        Self { grounded, slope }
    }

    pub fn on_slope(&self) -> bool {
        self.slope.on_slope
    }
}
