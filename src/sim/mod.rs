//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Elapsed time counted in frames
//! - Stable iteration order (platforms, then movers, in stage order)
//! - No rendering, audio or input-device dependencies

pub mod collision;
pub mod movers;
pub mod rect;
pub mod rules;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod fixtures;

pub use collision::{StepContacts, resolve_players, step_player};
pub use rect::{Rect, intersects, overlap_extent};
pub use rules::Bounds;
pub use state::{
    Affinity, Button, Collectible, GamePhase, Goal, Hazard, HazardKind, LiveStage, Mover,
    Platform, Player, StageTemplate, StarThresholds, load_stage,
};
pub use tick::{FrameInput, GameEvent, HudSnapshot, PlayerInput, Session, apply_input};
