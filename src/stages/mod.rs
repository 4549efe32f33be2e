//! Stage catalog
//!
//! The ordered list of level templates a session plays through. Levels are
//! configuration: either the built-in set or a JSON document supplied by the
//! presentation shell. Everything the simulation indexes blindly (button
//! targets, one goal per affinity) is checked here, once, at load time.

mod builtin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::state::{Affinity, StageTemplate};

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed JSON or schema mismatch
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no stages")]
    EmptyCatalog,

    #[error("stage {stage}: expected 2 goals, found {found}")]
    GoalCount { stage: usize, found: usize },

    #[error("stage {stage}: more than one {} goal", .affinity.as_str())]
    DuplicateGoal { stage: usize, affinity: Affinity },

    #[error("stage {stage}: button {button} targets mover {target} but only {movers} exist")]
    ButtonTarget {
        stage: usize,
        button: usize,
        target: usize,
        movers: usize,
    },

    #[error("stage {stage}: mover {mover} speed must be finite and non-negative")]
    InvalidMover { stage: usize, mover: usize },

    #[error("stage {stage}: star thresholds must be positive and ascending")]
    InvalidThresholds { stage: usize },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

/// Ordered, read-only list of stage templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCatalog {
    stages: Vec<StageTemplate>,
}

impl StageCatalog {
    /// Validate and wrap a list of templates
    pub fn new(stages: Vec<StageTemplate>) -> Result<Self, ConfigError> {
        let catalog = Self { stages };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Levels shipped with the game
    pub fn builtin() -> Self {
        Self {
            stages: builtin::stages(),
        }
    }

    /// Parse a catalog document: `{ "stages": [ ... ] }`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        log::info!("Loaded stage catalog with {} stages", catalog.len());
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (stage, template) in self.stages.iter().enumerate() {
            validate_stage(stage, template)?;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&StageTemplate> {
        self.stages.get(index)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageTemplate> {
        self.stages.iter()
    }
}

fn validate_stage(stage: usize, template: &StageTemplate) -> Result<(), ConfigError> {
    if template.goals.len() != 2 {
        return Err(ConfigError::GoalCount {
            stage,
            found: template.goals.len(),
        });
    }
    for affinity in Affinity::ALL {
        let count = template.goals.iter().filter(|g| g.affinity == affinity).count();
        if count > 1 {
            return Err(ConfigError::DuplicateGoal { stage, affinity });
        }
    }

    for (mover, m) in template.movers.iter().enumerate() {
        if !(m.speed.is_finite() && m.speed >= 0.0) {
            return Err(ConfigError::InvalidMover { stage, mover });
        }
    }

    let movers = template.movers.len();
    for (button, b) in template.buttons.iter().enumerate() {
        if b.target >= movers {
            return Err(ConfigError::ButtonTarget {
                stage,
                button,
                target: b.target,
                movers,
            });
        }
    }

    let stars = template.stars;
    if stars.three_star_secs <= 0.0 || stars.two_star_secs < stars.three_star_secs {
        return Err(ConfigError::InvalidThresholds { stage });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::fixtures::sample_template;
    use crate::sim::state::Goal;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = StageCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(catalog.len() >= 3);
        assert!(catalog.iter().any(|s| !s.movers.is_empty() && !s.buttons.is_empty()));
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = StageCatalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed = StageCatalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            StageCatalog::from_json(r#"{ "stages": [] }"#),
            Err(ConfigError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            StageCatalog::from_json("{ stages: "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_dangling_button() {
        let mut template = sample_template();
        template.buttons[0].target = 3;
        let err = StageCatalog::new(vec![template]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ButtonTarget {
                stage: 0,
                button: 0,
                target: 3,
                movers: 1
            }
        ));
    }

    #[test]
    fn test_rejects_bad_goals() {
        let mut template = sample_template();
        template.goals.pop();
        assert!(matches!(
            StageCatalog::new(vec![template]),
            Err(ConfigError::GoalCount { stage: 0, found: 1 })
        ));

        let mut template = sample_template();
        template.goals[1] = Goal { affinity: Affinity::Fire, ..template.goals[1] };
        assert!(matches!(
            StageCatalog::new(vec![template]),
            Err(ConfigError::DuplicateGoal {
                stage: 0,
                affinity: Affinity::Fire
            })
        ));
    }

    #[test]
    fn test_rejects_bad_mover_speed() {
        for speed in [-2.0, f32::NAN, f32::INFINITY] {
            let mut template = sample_template();
            template.movers[0].speed = speed;
            assert!(matches!(
                StageCatalog::new(vec![template]),
                Err(ConfigError::InvalidMover { stage: 0, mover: 0 })
            ));
        }

        let mut template = sample_template();
        template.movers[0].speed = 0.0;
        assert!(StageCatalog::new(vec![template]).is_ok());
    }

    #[test]
    fn test_rejects_descending_thresholds() {
        let mut template = sample_template();
        template.stars.two_star_secs = 10.0;
        assert!(matches!(
            StageCatalog::new(vec![template]),
            Err(ConfigError::InvalidThresholds { stage: 0 })
        ));
    }
}
