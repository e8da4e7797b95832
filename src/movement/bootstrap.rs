//! Movement domain: player bootstrap from the loaded tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::abilities::{Crouch, Dash, Jump, ScriptedJump, Slide};
use crate::movement::restriction::Restrictions;
use crate::movement::{
    BodyHeight, BodyTuning, DashTuning, GameLayer, GroundSense, JumpTuning, MovementOverrides,
    MovementTuning, Orientation, Player, SensorTuning, SlideTuning, SpeedGovernor,
};

const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawns the locomotion body. Runs after the config has been inserted.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    sensor: Res<SensorTuning>,
    body: Res<BodyTuning>,
    dash: Res<DashTuning>,
    slide: Res<SlideTuning>,
    jump: Res<JumpTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let capsule_length = (sensor.player_height - 2.0 * body.radius).max(0.0);

    commands.spawn((
        // Identity & locomotion state
        (
            Player,
            Orientation::default(),
            GroundSense::default(),
            SpeedGovernor::new(tuning.walk_max_speed),
            MovementOverrides::default(),
            Restrictions::default(),
            BodyHeight::default(),
        ),
        // Abilities
        (
            Dash::new(&dash),
            Slide::new(&slide),
            Crouch::default(),
            Jump::new(&jump),
            ScriptedJump::default(),
        ),
        Transform::from_translation(SPAWN_POSITION),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(body.radius, capsule_length),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            LinearDamping(tuning.ground_drag),
            GravityScale(1.0),
            Mass(body.mass),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!(
        "Spawned player: height={:.2}, mass={:.2}, walk_max_speed={:.2}",
        sensor.player_height, body.mass, tuning.walk_max_speed
    );
}
