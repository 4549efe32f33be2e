//! Stage data model
//!
//! `StageTemplate` is the read-only level definition; `LiveStage` is the
//! mutable working copy a session plays on. `load_stage` is the only way a
//! `LiveStage` is built, so restart, death and advance all reset the same way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::palette;

/// Elemental affinity of a player (and of the goal they must reach)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affinity {
    Fire,
    Water,
}

impl Affinity {
    pub const ALL: [Affinity; 2] = [Affinity::Fire, Affinity::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Affinity::Fire => "fire",
            Affinity::Water => "water",
        }
    }
}

/// Current phase of a stage attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A player touched a lethal hazard; waiting for confirm to retry
    GameOver,
    /// Both players reached their goals; waiting for confirm to advance
    Victory,
    /// Last stage cleared and confirmed
    Finished,
}

/// A player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub affinity: Affinity,
    /// Bottom-center of the body
    pub pos: Vec2,
    pub vel: Vec2,
    /// Standing on something this frame (gates jumping)
    pub grounded: bool,
}

impl Player {
    pub fn new(affinity: Affinity, pos: Vec2) -> Self {
        Self {
            affinity,
            pos,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Collision box derived from `pos`
    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::from_feet(self.pos, size)
    }

    pub fn color(&self) -> u32 {
        match self.affinity {
            Affinity::Fire => palette::FIRE_PLAYER,
            Affinity::Water => palette::WATER_PLAYER,
        }
    }
}

/// Static collision geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    pub fn color(&self) -> u32 {
        palette::PLATFORM
    }
}

/// A platform sliding between two endpoints while any of its buttons is held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Current rectangle; its origin always lies between `start` and `end`
    pub rect: Rect,
    /// Top-left corner when at rest
    pub start: Vec2,
    /// Top-left corner when fully activated
    pub end: Vec2,
    /// Max travel per axis per frame
    pub speed: f32,
    #[serde(default)]
    pub active: bool,
    /// Displacement applied during the current frame
    #[serde(skip)]
    pub last_delta: Vec2,
}

impl Mover {
    pub fn new(size: Vec2, start: Vec2, end: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(start.x, start.y, size.x, size.y),
            start,
            end,
            speed,
            active: false,
            last_delta: Vec2::ZERO,
        }
    }

    /// Back to `start`, inactive, not moving
    pub fn reset(&mut self) {
        self.rect.set_origin(self.start);
        self.active = false;
        self.last_delta = Vec2::ZERO;
    }

    pub fn color(&self) -> u32 {
        palette::MOVER
    }
}

/// A momentary pressure plate driving one mover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub rect: Rect,
    /// Index into the stage's movers
    pub target: usize,
    /// Recomputed every frame from player overlap
    #[serde(default)]
    pub pressed: bool,
}

impl Button {
    pub fn new(rect: Rect, target: usize) -> Self {
        Self {
            rect,
            target,
            pressed: false,
        }
    }

    pub fn color(&self) -> u32 {
        if self.pressed {
            palette::BUTTON_DOWN
        } else {
            palette::BUTTON_UP
        }
    }
}

/// Hazard kinds, named by the level data's element tag.
///
/// Lethality is cross-wired: a `KillsWater` pool ends the run when the
/// fire player touches it, a `KillsFire` pool when the water player does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    KillsWater,
    KillsFire,
    KillsBoth,
}

impl HazardKind {
    pub fn is_lethal_to(&self, affinity: Affinity) -> bool {
        match self {
            HazardKind::KillsWater => affinity == Affinity::Fire,
            HazardKind::KillsFire => affinity == Affinity::Water,
            HazardKind::KillsBoth => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    pub kind: HazardKind,
}

impl Hazard {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, kind: HazardKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }

    pub fn color(&self) -> u32 {
        match self.kind {
            HazardKind::KillsWater => palette::HAZARD_WATER,
            HazardKind::KillsFire => palette::HAZARD_FIRE,
            HazardKind::KillsBoth => palette::HAZARD_NEUTRAL,
        }
    }
}

/// Exit door for one affinity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
    pub affinity: Affinity,
}

impl Goal {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, affinity: Affinity) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            affinity,
        }
    }

    pub fn color(&self) -> u32 {
        match self.affinity {
            Affinity::Fire => palette::GOAL_FIRE,
            Affinity::Water => palette::GOAL_WATER,
        }
    }
}

/// Optional pickup (a diamond); collected at most once per attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    #[serde(default)]
    pub collected: bool,
}

impl Collectible {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            collected: false,
        }
    }

    pub fn color(&self) -> u32 {
        palette::COLLECTIBLE
    }
}

/// Elapsed-time cutoffs for the star rating (seconds, exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarThresholds {
    pub three_star_secs: f32,
    pub two_star_secs: f32,
}

impl Default for StarThresholds {
    fn default() -> Self {
        Self {
            three_star_secs: THREE_STAR_SECS,
            two_star_secs: TWO_STAR_SECS,
        }
    }
}

impl StarThresholds {
    /// 3 under the first cutoff, 2 under the second, 1 otherwise
    pub fn rate(&self, elapsed_secs: f32) -> u8 {
        if elapsed_secs < self.three_star_secs {
            3
        } else if elapsed_secs < self.two_star_secs {
            2
        } else {
            1
        }
    }
}

/// Authoritative definition of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTemplate {
    pub name: String,
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub movers: Vec<Mover>,
    #[serde(default)]
    pub buttons: Vec<Button>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    pub goals: Vec<Goal>,
    pub fire_spawn: Vec2,
    pub water_spawn: Vec2,
    #[serde(default)]
    pub collectible: Option<Rect>,
    #[serde(default)]
    pub stars: StarThresholds,
}

impl StageTemplate {
    pub fn goal_for(&self, affinity: Affinity) -> Option<&Goal> {
        self.goals.iter().find(|g| g.affinity == affinity)
    }
}

/// Mutable working copy of one stage attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStage {
    pub fire: Player,
    pub water: Player,
    pub platforms: Vec<Platform>,
    pub movers: Vec<Mover>,
    pub buttons: Vec<Button>,
    pub hazards: Vec<Hazard>,
    pub goals: Vec<Goal>,
    pub collectible: Option<Collectible>,
    /// Collectibles picked up during this attempt
    pub collected_count: u32,
    pub stars: StarThresholds,
    /// Playing frames since the stage finished loading
    pub elapsed_frames: u64,
    /// Elapsed seconds latched when Victory was entered
    pub clear_secs: f32,
    pub star_rating: u8,
    /// Set once the star rating has been computed for this attempt
    pub rating_computed: bool,
}

/// Build a fresh live stage from a template.
///
/// Geometry is copied by value, movers sit at `start`, buttons are up,
/// both players stand still on their spawns and all attempt bookkeeping
/// is cleared.
pub fn load_stage(template: &StageTemplate) -> LiveStage {
    let mut movers = template.movers.clone();
    for mover in &mut movers {
        mover.reset();
    }
    let mut buttons = template.buttons.clone();
    for button in &mut buttons {
        button.pressed = false;
    }

    LiveStage {
        fire: Player::new(Affinity::Fire, template.fire_spawn),
        water: Player::new(Affinity::Water, template.water_spawn),
        platforms: template.platforms.clone(),
        movers,
        buttons,
        hazards: template.hazards.clone(),
        goals: template.goals.clone(),
        collectible: template.collectible.map(Collectible::new),
        collected_count: 0,
        stars: template.stars,
        elapsed_frames: 0,
        clear_secs: 0.0,
        star_rating: 0,
        rating_computed: false,
    }
}

impl LiveStage {
    pub fn player(&self, affinity: Affinity) -> &Player {
        match affinity {
            Affinity::Fire => &self.fire,
            Affinity::Water => &self.water,
        }
    }

    pub fn player_mut(&mut self, affinity: Affinity) -> &mut Player {
        match affinity {
            Affinity::Fire => &mut self.fire,
            Affinity::Water => &mut self.water,
        }
    }

    pub fn goal_for(&self, affinity: Affinity) -> Option<&Goal> {
        self.goals.iter().find(|g| g.affinity == affinity)
    }

    /// Stage has a collectible that has not been picked up
    pub fn collectible_pending(&self) -> bool {
        self.collectible.is_some_and(|c| !c.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::fixtures::sample_template;
    use proptest::prelude::*;

    #[test]
    fn test_hazard_cross_wiring() {
        assert!(HazardKind::KillsWater.is_lethal_to(Affinity::Fire));
        assert!(!HazardKind::KillsWater.is_lethal_to(Affinity::Water));
        assert!(HazardKind::KillsFire.is_lethal_to(Affinity::Water));
        assert!(!HazardKind::KillsFire.is_lethal_to(Affinity::Fire));
        assert!(HazardKind::KillsBoth.is_lethal_to(Affinity::Fire));
        assert!(HazardKind::KillsBoth.is_lethal_to(Affinity::Water));
    }

    #[test]
    fn test_star_thresholds() {
        let stars = StarThresholds::default();
        assert_eq!(stars.rate(15.0), 3);
        assert_eq!(stars.rate(20.0), 2);
        assert_eq!(stars.rate(39.9), 2);
        assert_eq!(stars.rate(40.0), 1);
    }

    #[test]
    fn test_load_resets_dynamic_state() {
        let mut template = sample_template();
        // A template whose movers/buttons carry stale runtime state
        template.movers[0].rect.set_origin(Vec2::new(250.0, 400.0));
        template.movers[0].active = true;
        template.buttons[0].pressed = true;

        let stage = load_stage(&template);
        assert_eq!(stage.movers[0].rect.origin(), Vec2::new(100.0, 400.0));
        assert!(!stage.movers[0].active);
        assert!(!stage.buttons[0].pressed);
        assert_eq!(stage.fire.pos, template.fire_spawn);
        assert_eq!(stage.water.vel, Vec2::ZERO);
        assert_eq!(stage.collectible.map(|c| c.collected), Some(false));
        assert_eq!(stage.collected_count, 0);
        assert_eq!(stage.elapsed_frames, 0);
        assert!(!stage.rating_computed);
    }

    #[test]
    fn test_load_discards_attempt_progress() {
        let template = sample_template();
        let fresh = load_stage(&template);

        let mut played = load_stage(&template);
        played.fire.pos = Vec2::new(400.0, 100.0);
        played.water.vel = Vec2::new(4.0, -5.8);
        played.movers[0].rect.x = 180.0;
        played.collectible.as_mut().unwrap().collected = true;
        played.collected_count = 1;
        played.elapsed_frames = 900;
        played.star_rating = 3;
        played.rating_computed = true;

        played = load_stage(&template);
        assert_eq!(played, fresh);
    }

    proptest! {
        #[test]
        fn prop_load_is_idempotent(
            fx in 0.0f32..800.0,
            wx in 0.0f32..800.0,
            speed in 0.1f32..10.0,
            end_x in 0.0f32..800.0,
            end_y in 0.0f32..600.0,
        ) {
            let mut template = sample_template();
            template.fire_spawn.x = fx;
            template.water_spawn.x = wx;
            template.movers[0].speed = speed;
            template.movers[0].end = Vec2::new(end_x, end_y);

            let a = load_stage(&template);
            let b = load_stage(&template);
            prop_assert_eq!(a, b);
        }
    }
}
