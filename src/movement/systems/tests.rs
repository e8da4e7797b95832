//! Movement domain: tests that drive the locomotion systems inside an App.

use std::time::Duration;

use avian3d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

use super::{
    apply_input_force, apply_slide_force, clamp_body_velocity, release_on_contact,
    resolve_locomotion, update_crouch, update_dash, update_slide,
};
use crate::movement::abilities::{
    Crouch, Dash, Jump, ScriptedJump, Slide, SlideInput, SlideTransition,
};
use crate::movement::restriction::{ReleaseCause, Restrictions};
use crate::movement::{
    BodyHeight, BodyTuning, CrouchTuning, DashTuning, FovRequest, Ground, GroundSense,
    HeadBobCue, JumpTuning, LocomotionMode, MovementInput, MovementOverrides, MovementPlugin,
    MovementTuning, Orientation, Player, ScriptedJumpTuning, SensorTuning, SlideTuning,
    SlopeInfo, SpeedGovernor, Wall, planar_speed,
};

/// Longer than one 64 Hz fixed step, so every frame runs at least one.
const FRAME: Duration = Duration::from_millis(20);

/// Bare app with the movement resources; each test adds the systems it drives.
fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.init_resource::<MovementTuning>()
        .init_resource::<SensorTuning>()
        .init_resource::<DashTuning>()
        .init_resource::<SlideTuning>()
        .init_resource::<CrouchTuning>()
        .init_resource::<JumpTuning>()
        .init_resource::<ScriptedJumpTuning>()
        .init_resource::<BodyTuning>()
        .init_resource::<MovementInput>()
        .init_resource::<HeadBobCue>()
        .add_message::<FovRequest>();
    app
}

/// Player state without a physics body, standing on flat ground.
fn spawn_test_player(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            (
                Player,
                Orientation::default(),
                GroundSense {
                    grounded: true,
                    slope: SlopeInfo::default(),
                },
                SpeedGovernor::new(MovementTuning::default().walk_max_speed),
                MovementOverrides::default(),
                Restrictions::default(),
                BodyHeight::default(),
            ),
            (
                Dash::new(&DashTuning::default()),
                Slide::new(&SlideTuning::default()),
                Crouch::default(),
                Jump::new(&JumpTuning::default()),
                ScriptedJump::default(),
            ),
            (
                Transform::default(),
                LinearVelocity::default(),
                LinearDamping(0.0),
                GravityScale(1.0),
            ),
        ))
        .id()
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn velocity(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<LinearVelocity>(entity)
        .expect("player has a velocity")
        .0
}

fn set_velocity(app: &mut App, entity: Entity, value: Vec3) {
    app.world_mut()
        .get_mut::<LinearVelocity>(entity)
        .expect("player has a velocity")
        .0 = value;
}

fn open_scripted_window(app: &mut App, entity: Entity) {
    app.world_mut()
        .get_mut::<Restrictions>(entity)
        .expect("player has restrictions")
        .begin_scripted_motion(5.0, 0.01, 10.0);
}

// -----------------------------------------------------------------------------
// Freeze tests
// -----------------------------------------------------------------------------

#[test]
fn test_freeze_zeroes_velocity_including_vertical() {
    let mut app = create_test_app();
    app.add_systems(Update, (resolve_locomotion, clamp_body_velocity).chain());
    let player = spawn_test_player(&mut app);

    app.world_mut()
        .get_mut::<MovementOverrides>(player)
        .expect("player has overrides")
        .freeze = true;
    set_velocity(&mut app, player, Vec3::new(3.0, -9.0, 4.0));

    app.update();
    assert_eq!(velocity(&app, player), Vec3::ZERO);
    let governor = app.world().get::<SpeedGovernor>(player).expect("governor");
    assert_eq!(governor.mode, LocomotionMode::Frozen);

    // Gravity pulling between frames is wiped again
    set_velocity(&mut app, player, Vec3::new(0.0, -2.5, 0.0));
    app.update();
    assert_eq!(velocity(&app, player), Vec3::ZERO);
}

// -----------------------------------------------------------------------------
// Force gating tests
// -----------------------------------------------------------------------------

#[test]
fn test_input_force_held_during_scripted_motion() {
    let mut app = create_test_app();
    app.insert_resource(MovementInput {
        axis: Vec2::Y,
        ..default()
    });
    app.add_systems(Update, apply_input_force);
    let player = spawn_test_player(&mut app);
    open_scripted_window(&mut app, player);

    run_frames(&mut app, 3);
    assert_eq!(velocity(&app, player), Vec3::ZERO);

    app.world_mut()
        .get_mut::<Restrictions>(player)
        .expect("player has restrictions")
        .release(ReleaseCause::Contact);
    run_frames(&mut app, 2);
    assert!(velocity(&app, player).z < 0.0, "walks forward once released");
}

#[test]
fn test_slide_force_held_under_hard_restriction() {
    let mut app = create_test_app();
    app.insert_resource(MovementInput {
        axis: Vec2::Y,
        ..default()
    });
    app.add_systems(Update, apply_slide_force);
    let player = spawn_test_player(&mut app);

    let tuning = SlideTuning::default();
    let start = SlideInput {
        pressed: true,
        released: false,
        moving: true,
        sprinting: true,
        grounded: true,
    };
    let transition = app
        .world_mut()
        .get_mut::<Slide>(player)
        .expect("player can slide")
        .update(&start, &tuning, Duration::ZERO);
    assert_eq!(transition, Some(SlideTransition::Started));
    app.world_mut()
        .get_mut::<MovementOverrides>(player)
        .expect("player has overrides")
        .restricted = true;

    run_frames(&mut app, 3);
    assert_eq!(velocity(&app, player), Vec3::ZERO);
}

#[test]
fn test_crouch_start_keeps_scripted_arc() {
    let mut app = create_test_app();
    app.insert_resource(MovementInput {
        crouch_just_pressed: true,
        ..default()
    });
    app.add_systems(Update, update_crouch);
    let locked = spawn_test_player(&mut app);
    let free = spawn_test_player(&mut app);
    open_scripted_window(&mut app, locked);

    let arc = Vec3::new(2.0, 5.0, -3.0);
    set_velocity(&mut app, locked, arc);
    set_velocity(&mut app, free, arc);
    app.update();

    assert_eq!(velocity(&app, locked), arc);
    assert!(velocity(&app, free).y < arc.y, "settle impulse pushes down");
    for entity in [locked, free] {
        let crouch = app.world().get::<Crouch>(entity).expect("crouch");
        assert!(crouch.is_active());
    }
}

#[test]
fn test_slide_start_keeps_scripted_arc() {
    let mut app = create_test_app();
    app.insert_resource(MovementInput {
        axis: Vec2::Y,
        sprint_held: true,
        slide_just_pressed: true,
        ..default()
    });
    app.add_systems(Update, update_slide);
    let player = spawn_test_player(&mut app);
    open_scripted_window(&mut app, player);

    let arc = Vec3::new(0.0, 4.0, -6.0);
    set_velocity(&mut app, player, arc);
    app.update();

    assert_eq!(velocity(&app, player), arc);
    assert!(app.world().get::<Slide>(player).expect("slide").is_active());
}

#[test]
fn test_pending_dash_impulse_dropped_once_restricted() {
    let mut app = create_test_app();
    app.add_systems(Update, update_dash);
    let locked = spawn_test_player(&mut app);
    let free = spawn_test_player(&mut app);

    let tuning = DashTuning::default();
    for entity in [locked, free] {
        let started = app
            .world_mut()
            .get_mut::<Dash>(entity)
            .expect("player can dash")
            .try_start(Vec3::NEG_Z, Vec3::Y, &tuning);
        assert!(started);
    }
    app.world_mut()
        .get_mut::<MovementOverrides>(locked)
        .expect("player has overrides")
        .restricted = true;

    // Long enough for the impulse delay, short of the dash duration
    run_frames(&mut app, 5);

    assert_eq!(velocity(&app, locked), Vec3::ZERO);
    assert!(velocity(&app, free).z < 0.0);
}

// -----------------------------------------------------------------------------
// Contact release tests
// -----------------------------------------------------------------------------

fn create_contact_app() -> (App, Entity) {
    let mut app = create_test_app();
    app.add_message::<CollisionStart>();
    app.add_systems(Update, release_on_contact);
    let player = spawn_test_player(&mut app);

    let mut restrictions = app
        .world_mut()
        .get_mut::<Restrictions>(player)
        .expect("player has restrictions");
    restrictions.begin_scripted_motion(5.0, 0.01, 10.0);
    assert_eq!(restrictions.tick(FRAME), None);
    assert!(restrictions.release_on_touch_armed());

    (app, player)
}

fn contact(app: &mut App, collider1: Entity, collider2: Entity) {
    app.world_mut().write_message(CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    });
}

fn restrictions(app: &App, entity: Entity) -> &Restrictions {
    app.world()
        .get::<Restrictions>(entity)
        .expect("player has restrictions")
}

#[test]
fn test_ground_contact_releases_with_player_second() {
    let (mut app, player) = create_contact_app();
    let ground = app.world_mut().spawn(Ground).id();

    contact(&mut app, ground, player);
    app.update();

    assert!(!restrictions(&app, player).is_tier_two());
    assert_eq!(restrictions(&app, player).limited_speed(), None);
}

#[test]
fn test_wall_contact_releases_with_player_first() {
    let (mut app, player) = create_contact_app();
    let wall = app.world_mut().spawn(Wall).id();

    contact(&mut app, player, wall);
    app.update();

    assert!(!restrictions(&app, player).is_tier_two());
}

#[test]
fn test_contact_with_unmarked_body_keeps_window() {
    let (mut app, player) = create_contact_app();
    let crate_body = app.world_mut().spawn(Transform::default()).id();

    contact(&mut app, crate_body, player);
    app.update();

    assert!(restrictions(&app, player).is_tier_two());
    assert_eq!(restrictions(&app, player).limited_speed(), Some(5.0));
}

// -----------------------------------------------------------------------------
// Frame ordering tests
// -----------------------------------------------------------------------------

#[test]
fn test_fixed_step_uses_input_sampled_this_frame() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin, InputPlugin, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    // Avian's collider hierarchy expects a scene spawner
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default());
    app.add_plugins(MovementPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.finish();
    app.cleanup();

    // Spawn, then fall with nothing underneath
    run_frames(&mut app, 3);
    let player = {
        let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
        query.single(app.world()).expect("player spawned")
    };
    assert_eq!(planar_speed(velocity(&app, player)), 0.0);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    app.update();

    assert!(
        planar_speed(velocity(&app, player)) > 0.0,
        "forward force lands in the same frame the key is read"
    );
}
