//! Goal Kick - a 3D goal kicking demo
//!
//! Core modules:
//! - `sim`: Scripted flights, scoring and lateral control (no rendering dependencies)
//! - `scene`: Static field description (field, posts, light, camera)
//! - `camera`: Orbit camera for the 3D view
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Score counter display
//! - `settings`: Display preferences

pub mod camera;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{ControlError, RenderError};
pub use settings::{QualityPreset, Settings};

/// Flight and scoring constants
///
/// Distances are world units; steps are applied once per simulation tick.
pub mod consts {
    /// Fixed simulation timestep (one scripted step per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Height of a football sitting on the field
    pub const REST_HEIGHT: f32 = 0.55;
    /// Forward resting position of the player's football
    pub const PLAYER_REST_X: f32 = 0.1;
    /// Forward resting position of the computer's football
    pub const COMPUTER_REST_X: f32 = -0.1;
    /// Forward distance (either direction) at which a ball has left the field
    pub const FIELD_BOUNDARY: f32 = 11.0;

    /// Height above which a flight stops climbing
    pub const APEX_HEIGHT: f32 = 2.5;
    pub const ASCENT_RISE: f32 = 0.02;
    pub const ASCENT_ADVANCE: f32 = 0.03;
    pub const ASCENT_SPIN: f32 = 0.1;
    pub const DESCENT_DROP: f32 = 0.015;
    pub const DESCENT_ADVANCE: f32 = 0.02;
    pub const DESCENT_SPIN: f32 = 0.05;

    /// Lateral drift per step is sampled from [-limit, limit)
    pub const PLAYER_DRIFT_LIMIT: f32 = 0.007;
    pub const COMPUTER_DRIFT_LIMIT: f32 = 0.006;

    /// Lateral nudge applied by move left/right while resting
    pub const LATERAL_STEP: f32 = 0.03;

    /// Landing offsets strictly inside this are goals
    pub const GOAL_HALF_WIDTH: f32 = 0.34;
    /// Landing offsets up to and including this are behinds
    pub const BEHIND_HALF_WIDTH: f32 = 1.34;

    pub const GOAL_POINTS: u32 = 6;
    pub const BEHIND_POINTS: u32 = 1;
}
