//! Movement domain: system modules for locomotion updates.

pub(crate) mod abilities;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod physics;
pub(crate) mod sensors;

#[cfg(test)]
mod tests;

pub(crate) use abilities::{
    apply_body_height, update_crouch, update_dash, update_jump, update_scripted_jump,
    update_slide,
};
pub(crate) use collisions::{release_on_contact, tick_restrictions};
pub(crate) use input::{apply_look, read_input};
pub(crate) use locomotion::{clamp_body_velocity, resolve_locomotion};
pub(crate) use physics::{apply_input_force, apply_slide_force};
pub(crate) use sensors::sense_ground;
