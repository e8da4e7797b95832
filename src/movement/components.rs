//! Movement domain: components and physics layers for locomotion.

use std::fmt;

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, slopes and platforms
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

impl GameLayer {
    /// Layers whose contact ends a scripted-motion window.
    pub fn releases_scripted_motion(self) -> bool {
        matches!(self, GameLayer::Ground | GameLayer::Wall)
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// The single active locomotion behavior for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
pub enum LocomotionMode {
    Unlimited,
    Limited,
    Frozen,
    Dashing,
    Sliding,
    Crouching,
    Sprinting,
    #[default]
    Walking,
    Airborne,
}

impl LocomotionMode {
    /// Modes whose exit may ease the speed ceiling instead of snapping it.
    pub fn is_boosted(self) -> bool {
        matches!(self, LocomotionMode::Sliding | LocomotionMode::Dashing)
    }

    /// Modes in which player input is turned into force.
    pub fn is_force_driven(self) -> bool {
        matches!(
            self,
            LocomotionMode::Walking
                | LocomotionMode::Sprinting
                | LocomotionMode::Crouching
                | LocomotionMode::Airborne
        )
    }

    pub fn uses_ground_drag(self) -> bool {
        matches!(self, LocomotionMode::Walking | LocomotionMode::Sprinting)
    }

    pub fn head_bob_enabled(self) -> bool {
        self.uses_ground_drag()
    }

    pub fn name(self) -> &'static str {
        match self {
            LocomotionMode::Unlimited => "unlimited",
            LocomotionMode::Limited => "limited",
            LocomotionMode::Frozen => "frozen",
            LocomotionMode::Dashing => "dashing",
            LocomotionMode::Sliding => "sliding",
            LocomotionMode::Crouching => "crouching",
            LocomotionMode::Sprinting => "sprinting",
            LocomotionMode::Walking => "walking",
            LocomotionMode::Airborne => "airborne",
        }
    }
}

impl fmt::Display for LocomotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the character is looking. Yaw turns the body, pitch only the view.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    const PITCH_LIMIT: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;

    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn look_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        self.body_rotation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.body_rotation() * Vec3::X
    }

    pub fn look_forward(&self) -> Vec3 {
        self.look_rotation() * Vec3::NEG_Z
    }

    pub fn look_right(&self) -> Vec3 {
        self.look_rotation() * Vec3::X
    }

    /// Applies a mouse delta; positive x turns right, positive y looks down.
    pub fn turn(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch =
            (self.pitch - delta.y * sensitivity).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Input axes mapped onto the horizontal plane of the body.
    pub fn planar_direction(&self, axis: Vec2) -> Vec3 {
        self.forward() * axis.y + self.right() * axis.x
    }
}

/// Flags set by collaborators outside the ability modules.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementOverrides {
    pub freeze: bool,
    pub unlimited_speed: bool,
    /// Hard lock: no input or ability force at all
    pub restricted: bool,
}

/// Collision height the body was spawned with, and the scale currently applied.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodyHeight {
    pub base_scale: f32,
    pub applied_scale: f32,
}

impl Default for BodyHeight {
    fn default() -> Self {
        Self {
            base_scale: 1.0,
            applied_scale: 1.0,
        }
    }
}

impl BodyHeight {
    /// Resolves competing height requests: the smallest request wins, and no
    /// request restores the base scale.
    pub fn resolve(&self, requests: impl IntoIterator<Item = Option<f32>>) -> f32 {
        requests
            .into_iter()
            .flatten()
            .fold(None, |lowest: Option<f32>, scale| {
                Some(lowest.map_or(scale, |current| current.min(scale)))
            })
            .map_or(self.base_scale, |scale| scale * self.base_scale)
    }
}
