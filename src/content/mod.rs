//! Content domain: locomotion config loading and plugin wiring.

mod data;
mod loader;
mod validation;


pub use data::{CURRENT_SCHEMA_VERSION, LocomotionConfig};
pub use loader::{ConfigLoadError, load_locomotion_config, parse_locomotion_config};
pub use validation::{ValidationError, validate_config};

use std::path::Path;

use avian3d::prelude::Gravity;
use bevy::prelude::*;

pub const CONFIG_PATH: &str = "assets/data/locomotion.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_locomotion_content);
    }
}

/// Loads the config, falling back to built-in defaults, and inserts every
/// section as a resource before anything is spawned.
fn load_locomotion_content(mut commands: Commands) {
    let config = match load_locomotion_config(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            LocomotionConfig::default()
        }
    };

    let problems = config.validate();
    for problem in &problems {
        warn!("Config validation: {}", problem);
    }
    if problems.is_empty() {
        info!("{}", config.summary());
    }

    commands.insert_resource(Gravity(Vec3::NEG_Y * config.body.gravity));
    config.insert_into(&mut commands);
}
