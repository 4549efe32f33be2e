//! Elemental Duo - cooperative fire/water puzzle platformer core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (kinematics, collisions, stage lifecycle)
//! - `stages`: Stage catalog (level data as configuration)
//! - `tuning`: Data-driven movement and physics tuning
//! - `results`: Best clear per stage for the current session

pub mod results;
pub mod sim;
pub mod stages;
pub mod tuning;

pub use results::{StageResult, StageResults};
pub use stages::{ConfigError, StageCatalog};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step (the presentation loop targets 60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions in world units (y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player body, anchored at the bottom-center ("feet")
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;

    /// Physics defaults
    pub const GRAVITY: f32 = 0.10;
    pub const MOVE_SPEED: f32 = 4.0;
    pub const JUMP_VELOCITY: f32 = -5.8;
    /// Slack for head-bump detection, absorbs integration error
    pub const HEAD_BUMP_TOLERANCE: f32 = 5.0;

    /// Default star thresholds (seconds)
    pub const THREE_STAR_SECS: f32 = 20.0;
    pub const TWO_STAR_SECS: f32 = 40.0;
}

/// RGBA colours for the presentation layer
pub mod palette {
    pub const FIRE_PLAYER: u32 = 0xBE2137FF; // maroon
    pub const WATER_PLAYER: u32 = 0x0079F1FF; // blue
    pub const PLATFORM: u32 = 0x505050FF;
    pub const MOVER: u32 = 0x828282FF;
    pub const BUTTON_UP: u32 = 0xC8A000FF;
    pub const BUTTON_DOWN: u32 = 0x6E5A00FF;
    pub const HAZARD_FIRE: u32 = 0xE62937FF; // red
    pub const HAZARD_WATER: u32 = 0x66BFFFFF; // sky blue
    pub const HAZARD_NEUTRAL: u32 = 0x00E430FF; // green
    pub const GOAL_FIRE: u32 = 0xFF6464FF;
    pub const GOAL_WATER: u32 = 0x6464FFFF;
    pub const COLLECTIBLE: u32 = 0xFFCB00FF; // gold
}
