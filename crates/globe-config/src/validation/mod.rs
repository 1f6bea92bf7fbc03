//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod lighting;
mod misc;
mod scene;


use crate::schema::GlobeConfig;
use globe_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlobeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_camera(&mut errors, config);
    scene::validate_globe(&mut errors, config);
    scene::validate_wireframe(&mut errors, config);
    scene::validate_particles(&mut errors, config);
    lighting::validate_lighting(&mut errors, config);
    misc::validate_pointer(&mut errors, config);
    misc::validate_animation(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
