//! Movement domain: debug-only test course.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// One static block of the course.
struct Block {
    size: Vec3,
    transform: Transform,
    wall: bool,
}

pub(crate) fn spawn_test_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let slope_material = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let wall_material = materials.add(Color::srgb(0.3, 0.3, 0.4));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let blocks = [
        // Floor
        Block {
            size: Vec3::new(80.0, 1.0, 80.0),
            transform: Transform::from_xyz(0.0, -0.5, 0.0),
            wall: false,
        },
        // Walkable slope (25 degrees)
        Block {
            size: Vec3::new(8.0, 1.0, 20.0),
            transform: Transform::from_xyz(-12.0, 3.5, -20.0)
                .with_rotation(Quat::from_rotation_x(25f32.to_radians())),
            wall: false,
        },
        // Too steep to count as a slope (50 degrees)
        Block {
            size: Vec3::new(8.0, 1.0, 12.0),
            transform: Transform::from_xyz(12.0, 3.5, -20.0)
                .with_rotation(Quat::from_rotation_x(50f32.to_radians())),
            wall: false,
        },
        // High platform for jump-to-position
        Block {
            size: Vec3::new(10.0, 1.0, 10.0),
            transform: Transform::from_xyz(0.0, 8.0, -35.0),
            wall: false,
        },
        // Perimeter
        Block {
            size: Vec3::new(80.0, 10.0, 1.0),
            transform: Transform::from_xyz(0.0, 5.0, -40.5),
            wall: true,
        },
        Block {
            size: Vec3::new(80.0, 10.0, 1.0),
            transform: Transform::from_xyz(0.0, 5.0, 40.5),
            wall: true,
        },
        Block {
            size: Vec3::new(1.0, 10.0, 80.0),
            transform: Transform::from_xyz(-40.5, 5.0, 0.0),
            wall: true,
        },
        Block {
            size: Vec3::new(1.0, 10.0, 80.0),
            transform: Transform::from_xyz(40.5, 5.0, 0.0),
            wall: true,
        },
    ];

    let block_count = blocks.len();
    for (index, block) in blocks.into_iter().enumerate() {
        let mesh = meshes.add(Cuboid::from_size(block.size));
        let collider = Collider::cuboid(block.size.x, block.size.y, block.size.z);

        if block.wall {
            commands.spawn((
                Wall,
                Mesh3d(mesh),
                MeshMaterial3d(wall_material.clone()),
                block.transform,
                RigidBody::Static,
                collider,
                wall_layers,
            ));
        } else {
            let material = if index == 0 {
                ground_material.clone()
            } else {
                slope_material.clone()
            };
            commands.spawn((
                Ground,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                block.transform,
                RigidBody::Static,
                collider,
                ground_layers,
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Spawned test course with {} blocks", block_count);
}
