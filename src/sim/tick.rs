//! Fixed timestep frame update
//!
//! A `Session` owns the catalog, the live stage and the phase machine.
//! `step_frame` is the only entry point the presentation shell needs: feed it
//! one frame of input, draw whatever `stage()` and `hud()` report, react to
//! the returned events.

use super::collision::{resolve_players, step_player};
use super::movers;
use super::rules::{self, Bounds};
use super::state::{Affinity, GamePhase, LiveStage, Player, load_stage};
use crate::results::{StageResult, StageResults};
use crate::stages::{ConfigError, StageCatalog};
use crate::tuning::Tuning;

/// Held keys for one player during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Ignored unless the player is grounded
    pub jump: bool,
}

impl PlayerInput {
    /// -1, 0 or 1; opposite keys cancel out
    pub fn direction(&self) -> f32 {
        (self.move_right as i8 - self.move_left as i8) as f32
    }
}

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub fire: PlayerInput,
    pub water: PlayerInput,
    /// Retry after a death, continue after a victory
    pub confirm: bool,
    /// Jump straight to the next stage (debug/testing)
    pub skip_stage: bool,
}

/// Something the shell may want to react to (sound, overlay, logging)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    StageLoaded { index: usize },
    CollectiblePicked { by: Affinity },
    /// Dropped off the bottom; the stage restarts without a game over
    PlayerFell { who: Affinity },
    HazardDeath { victim: Affinity },
    Victory { stars: u8, elapsed_secs: f32 },
    /// Last stage confirmed
    SessionComplete,
}

/// What a heads-up display shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    /// 1-based
    pub stage_number: usize,
    pub stage_count: usize,
    pub elapsed_secs: f32,
    pub collected: u32,
    /// 0 until the stage is cleared
    pub stars: u8,
    pub phase: GamePhase,
}

/// One play-through of a stage catalog
#[derive(Debug, Clone)]
pub struct Session {
    catalog: StageCatalog,
    tuning: Tuning,
    stage_index: usize,
    phase: GamePhase,
    stage: LiveStage,
    results: StageResults,
}

impl Session {
    /// Validate the configuration and load the first stage
    pub fn new(catalog: StageCatalog, tuning: Tuning) -> Result<Self, ConfigError> {
        catalog.validate()?;
        tuning.validate()?;
        let first = catalog.get(0).ok_or(ConfigError::EmptyCatalog)?;
        let stage = load_stage(first);
        log::info!("Session started: {} stages, first '{}'", catalog.len(), first.name);

        Ok(Self {
            catalog,
            tuning,
            stage_index: 0,
            phase: GamePhase::Playing,
            stage,
            results: StageResults::new(),
        })
    }

    /// Built-in levels with default tuning
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(StageCatalog::builtin(), Tuning::default())
    }

    /// Advance by one frame
    pub fn step_frame(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.phase {
            GamePhase::Playing => self.play_frame(input, &mut events),
            GamePhase::GameOver => {
                if input.confirm {
                    self.load(self.stage_index, &mut events);
                }
            }
            GamePhase::Victory => {
                if input.confirm {
                    self.advance(&mut events);
                }
            }
            GamePhase::Finished => {}
        }
        events
    }

    fn play_frame(&mut self, input: &FrameInput, events: &mut Vec<GameEvent>) {
        if input.skip_stage {
            let next = (self.stage_index + 1) % self.catalog.len();
            log::debug!("Skipping to stage {}", next + 1);
            self.load(next, events);
            return;
        }

        let tuning = &self.tuning;
        let stage = &mut self.stage;
        stage.elapsed_frames += 1;

        apply_input(&mut stage.fire, &input.fire, tuning);
        apply_input(&mut stage.water, &input.water, tuning);

        let bodies = [
            stage.fire.rect(tuning.player_size),
            stage.water.rect(tuning.player_size),
        ];
        movers::update(&mut stage.movers, &mut stage.buttons, &bodies);

        step_player(&mut stage.fire, &stage.platforms, &stage.movers, tuning);
        step_player(&mut stage.water, &stage.platforms, &stage.movers, tuning);
        resolve_players(&mut stage.fire, &mut stage.water, tuning.player_size);

        if let Bounds::FellOut(who) = rules::enforce_bounds(stage, tuning) {
            log::debug!("{} player fell out, restarting stage", who.as_str());
            events.push(GameEvent::PlayerFell { who });
            self.load(self.stage_index, events);
            return;
        }

        if let Some(by) = rules::collect(stage, tuning) {
            log::debug!("Collectible picked up by {}", by.as_str());
            events.push(GameEvent::CollectiblePicked { by });
        }

        if let Some(victim) = rules::hazard_victim(stage, tuning) {
            log::info!("{} player died in a hazard", victim.as_str());
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::HazardDeath { victim });
            return;
        }

        if rules::both_at_goals(stage, tuning) {
            self.enter_victory(events);
        }
    }

    /// Latch the clear time and rating, record the result, show the summary
    fn enter_victory(&mut self, events: &mut Vec<GameEvent>) {
        let stage = &mut self.stage;
        if !stage.rating_computed {
            stage.clear_secs = self.tuning.frames_to_secs(stage.elapsed_frames);
            stage.star_rating = if stage.collectible_pending() {
                0
            } else {
                stage.stars.rate(stage.clear_secs)
            };
            stage.rating_computed = true;

            self.results.record(
                self.stage_index,
                StageResult {
                    stars: stage.star_rating,
                    elapsed_secs: stage.clear_secs,
                    collected: stage.collected_count,
                },
            );
        }

        log::info!(
            "Stage {} cleared in {:.2}s with {} stars",
            self.stage_index + 1,
            stage.clear_secs,
            stage.star_rating
        );
        self.phase = GamePhase::Victory;
        events.push(GameEvent::Victory {
            stars: stage.star_rating,
            elapsed_secs: stage.clear_secs,
        });
    }

    fn advance(&mut self, events: &mut Vec<GameEvent>) {
        let next = self.stage_index + 1;
        if next < self.catalog.len() {
            self.load(next, events);
        } else {
            log::info!(
                "Session complete: {} stars over {} stages",
                self.results.total_stars(),
                self.catalog.len()
            );
            self.phase = GamePhase::Finished;
            events.push(GameEvent::SessionComplete);
        }
    }

    /// Single reset point for start, retry, fall-out, advance and skip
    fn load(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let Some(template) = self.catalog.get(index) else {
            log::warn!("Stage {} does not exist, staying on {}", index + 1, self.stage_index + 1);
            return;
        };
        self.stage = load_stage(template);
        self.stage_index = index;
        self.phase = GamePhase::Playing;
        log::info!("Stage {} '{}' loaded", index + 1, template.name);
        events.push(GameEvent::StageLoaded { index });
    }

    pub fn hud(&self) -> HudSnapshot {
        let elapsed_secs = if self.stage.rating_computed {
            self.stage.clear_secs
        } else {
            self.tuning.frames_to_secs(self.stage.elapsed_frames)
        };
        HudSnapshot {
            stage_number: self.stage_index + 1,
            stage_count: self.catalog.len(),
            elapsed_secs,
            collected: self.stage.collected_count,
            stars: self.stage.star_rating,
            phase: self.phase,
        }
    }

    pub fn stage(&self) -> &LiveStage {
        &self.stage
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn stage_name(&self) -> &str {
        self.catalog
            .get(self.stage_index)
            .map_or("", |template| template.name.as_str())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    pub fn results(&self) -> &StageResults {
        &self.results
    }
}

/// Horizontal velocity follows the keys; a jump only starts from the ground
pub fn apply_input(player: &mut Player, input: &PlayerInput, tuning: &Tuning) {
    player.vel.x = input.direction() * tuning.move_speed;
    if input.jump && player.grounded {
        player.vel.y = tuning.jump_velocity;
        player.grounded = false;
    }
}
