//! Validation for nonsensical values in the locomotion config.

use super::data::{CURRENT_SCHEMA_VERSION, LocomotionConfig};

/// A validation problem with the section and field it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for flagging a value that must not be negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+ $(,)?) => {
        $(
            if $owner.$field < 0.0 || !$owner.$field.is_finite() {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must be a finite value >= 0, got {}", $owner.$field),
                });
            }
        )+
    };
}

/// Flags a rate that must be strictly positive for smoothing to finish
macro_rules! check_positive {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+ $(,)?) => {
        $(
            if $owner.$field <= 0.0 || !$owner.$field.is_finite() {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must be a finite value > 0, got {}", $owner.$field),
                });
            }
        )+
    };
}

/// Validate every section of the config.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_config(config: &LocomotionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "config",
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                CURRENT_SCHEMA_VERSION, config.schema_version
            ),
        });
    }

    let movement = &config.movement;
    check_non_negative!(
        errors,
        "movement",
        movement,
        move_force,
        air_multiplier,
        ground_drag,
        walk_max_speed,
        sprint_max_speed,
        crouch_max_speed,
        slope_slide_max_speed,
        dash_max_speed,
    );
    check_positive!(
        errors,
        "movement",
        movement,
        speed_increase_multiplier,
        slope_increase_multiplier,
        dash_speed_change_factor,
    );

    let sensor = &config.sensor;
    check_non_negative!(errors, "sensor", sensor, player_height, ground_margin, slope_margin);
    if !(sensor.max_slope_angle > 0.0 && sensor.max_slope_angle < 90.0) {
        errors.push(ValidationError {
            section: "sensor",
            field: "max_slope_angle",
            message: format!(
                "must lie strictly between 0 and 90 degrees, got {}",
                sensor.max_slope_angle
            ),
        });
    }
    if sensor.slope_margin < sensor.ground_margin {
        errors.push(ValidationError {
            section: "sensor",
            field: "slope_margin",
            message: format!(
                "must reach at least as far as ground_margin ({} < {})",
                sensor.slope_margin, sensor.ground_margin
            ),
        });
    }

    let dash = &config.dash;
    check_non_negative!(
        errors,
        "dash",
        dash,
        dash_force,
        upward_force,
        duration,
        cooldown,
        impulse_delay,
        fov_transition,
    );

    let slide = &config.slide;
    check_non_negative!(
        errors,
        "slide",
        slide,
        min_time,
        max_time,
        force,
        cooldown,
        settle_impulse,
    );
    if slide.min_time > slide.max_time {
        errors.push(ValidationError {
            section: "slide",
            field: "min_time",
            message: format!(
                "must not exceed max_time ({} > {})",
                slide.min_time, slide.max_time
            ),
        });
    }

    for (section, field, scale) in [
        ("slide", "y_scale", slide.y_scale),
        ("crouch", "y_scale", config.crouch.y_scale),
    ] {
        if !(scale > 0.0 && scale <= 1.0) {
            errors.push(ValidationError {
                section,
                field,
                message: format!("must lie in (0, 1], got {}", scale),
            });
        }
    }

    let jump = &config.jump;
    check_non_negative!(errors, "jump", jump, jump_force, cooldown);

    let scripted_jump = &config.scripted_jump;
    check_non_negative!(
        errors,
        "scripted_jump",
        scripted_jump,
        target_range,
        launch_delay,
        touch_arm_delay,
        max_restricted_time,
    );
    if scripted_jump.apex_height <= 0.0 {
        errors.push(ValidationError {
            section: "scripted_jump",
            field: "apex_height",
            message: format!("must be positive, got {}", scripted_jump.apex_height),
        });
    }

    let body = &config.body;
    for (field, value) in [("mass", body.mass), ("gravity", body.gravity)] {
        if value <= 0.0 {
            errors.push(ValidationError {
                section: "body",
                field,
                message: format!("must be positive, got {}", value),
            });
        }
    }

    errors
}

impl LocomotionConfig {
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_config(self)
    }
}
