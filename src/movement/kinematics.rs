//! Movement domain: ballistic launch solver for jump-to-position.

use std::fmt;

use bevy::prelude::*;

/// Reasons a ballistic arc through the target cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchError {
    NonPositiveGravity(f32),
    NonPositiveApex(f32),
    /// The apex sits below the target, so the arc can never reach it
    ApexBelowTarget { apex_height: f32, target_rise: f32 },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::NonPositiveGravity(g) => write!(f, "gravity must be positive, got {}", g),
            LaunchError::NonPositiveApex(h) => write!(f, "apex height must be positive, got {}", h),
            LaunchError::ApexBelowTarget {
                apex_height,
                target_rise,
            } => write!(
                f,
                "apex height {} is below the target rise {}",
                apex_height, target_rise
            ),
        }
    }
}

impl std::error::Error for LaunchError {}

/// A solved launch: initial velocity and the time it takes to reach the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub velocity: Vec3,
    pub flight_time: f32,
}

impl Launch {
    pub fn planar_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }

    /// Position `t` seconds after launching from `start` under `gravity`.
    pub fn position_at(&self, start: Vec3, gravity: f32, t: f32) -> Vec3 {
        start + self.velocity * t + Vec3::NEG_Y * (0.5 * gravity * t * t)
    }
}

/// Solves for the velocity that carries a projectile from `start` through
/// `target`, peaking `apex_height` above `start`, under `gravity` (magnitude).
pub fn solve_launch(
    start: Vec3,
    target: Vec3,
    apex_height: f32,
    gravity: f32,
) -> Result<Launch, LaunchError> {
    if gravity <= 0.0 {
        return Err(LaunchError::NonPositiveGravity(gravity));
    }
    if apex_height <= 0.0 {
        return Err(LaunchError::NonPositiveApex(apex_height));
    }

    let rise = target.y - start.y;
    if apex_height < rise {
        return Err(LaunchError::ApexBelowTarget {
            apex_height,
            target_rise: rise,
        });
    }

    let time_up = (2.0 * apex_height / gravity).sqrt();
    let time_down = (2.0 * (apex_height - rise) / gravity).sqrt();
    let flight_time = time_up + time_down;

    let planar = Vec3::new(target.x - start.x, 0.0, target.z - start.z);
    let vertical = Vec3::Y * (2.0 * gravity * apex_height).sqrt();

    Ok(Launch {
        velocity: planar / flight_time + vertical,
        flight_time,
    })
}
