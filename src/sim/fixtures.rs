//! Shared stage layouts for unit tests

use glam::Vec2;

use super::rect::Rect;
use super::state::*;

/// Floor, one horizontal mover with a button, a neutral hazard, both doors
/// and a diamond
pub fn sample_template() -> StageTemplate {
    StageTemplate {
        name: "sample".into(),
        platforms: vec![Platform::new(0.0, 550.0, 800.0, 50.0)],
        movers: vec![Mover::new(
            Vec2::new(80.0, 20.0),
            Vec2::new(100.0, 400.0),
            Vec2::new(300.0, 400.0),
            2.0,
        )],
        buttons: vec![Button::new(Rect::new(500.0, 540.0, 30.0, 10.0), 0)],
        hazards: vec![Hazard::new(300.0, 530.0, 100.0, 20.0, HazardKind::KillsBoth)],
        goals: vec![
            Goal::new(680.0, 500.0, 40.0, 40.0, Affinity::Fire),
            Goal::new(730.0, 500.0, 40.0, 40.0, Affinity::Water),
        ],
        fire_spawn: Vec2::new(60.0, 550.0),
        water_spawn: Vec2::new(100.0, 550.0),
        collectible: Some(Rect::new(200.0, 500.0, 16.0, 16.0)),
        stars: StarThresholds::default(),
    }
}

/// Just a floor and the two doors, players far apart
pub fn open_floor() -> StageTemplate {
    StageTemplate {
        name: "open floor".into(),
        platforms: vec![Platform::new(0.0, 550.0, 800.0, 50.0)],
        movers: Vec::new(),
        buttons: Vec::new(),
        hazards: Vec::new(),
        goals: vec![
            Goal::new(600.0, 510.0, 40.0, 40.0, Affinity::Fire),
            Goal::new(700.0, 510.0, 40.0, 40.0, Affinity::Water),
        ],
        fire_spawn: Vec2::new(60.0, 550.0),
        water_spawn: Vec2::new(200.0, 550.0),
        collectible: None,
        stars: StarThresholds::default(),
    }
}
