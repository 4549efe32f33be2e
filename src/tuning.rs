//! Movement and physics tuning
//!
//! Data-driven so the presentation shell can ship its own balance file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::stages::ConfigError;

/// Tunable simulation parameters (per-frame units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to velocity.y every frame
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    /// Slack for head-bump detection
    pub head_bump_tolerance: f32,
    /// Player collision box size
    pub player_size: Vec2,

    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Seconds per frame, used to turn frame counts into elapsed time
    pub frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            head_bump_tolerance: HEAD_BUMP_TOLERANCE,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_dt: FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: gravity={} move_speed={} jump={}",
            tuning.gravity,
            tuning.move_speed,
            tuning.jump_velocity
        );
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_size.x <= 0.0 || self.player_size.y <= 0.0 {
            return Err(ConfigError::InvalidTuning("player_size must be positive".into()));
        }
        if self.screen_width <= self.player_size.x || self.screen_height <= self.player_size.y {
            return Err(ConfigError::InvalidTuning(
                "screen must be larger than the player".into(),
            ));
        }
        if self.frame_dt <= 0.0 {
            return Err(ConfigError::InvalidTuning("frame_dt must be positive".into()));
        }
        Ok(())
    }

    /// Seconds covered by `frames` simulation steps
    pub fn frames_to_secs(&self, frames: u64) -> f32 {
        frames as f32 * self.frame_dt
    }
}
