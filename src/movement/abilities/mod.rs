//! Movement domain: abilities that request control of locomotion.

mod crouch;
mod dash;
mod jump;
mod slide;

pub use crouch::Crouch;
pub use dash::{Dash, DashImpulse, DashTick, dash_direction};
pub use jump::{Jump, JumpAttempt, ScriptedJump, jump_velocity};
pub use slide::{Slide, SlideInput, SlideStep, SlideTransition};
