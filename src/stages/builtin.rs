//! Built-in levels

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::rect::Rect;
use crate::sim::state::{
    Affinity, Button, Goal, Hazard, HazardKind, Mover, Platform, StageTemplate, StarThresholds,
};

const W: f32 = SCREEN_WIDTH;
const H: f32 = SCREEN_HEIGHT;

pub fn stages() -> Vec<StageTemplate> {
    vec![first_steps(), cascading_maze(), the_lift()]
}

/// Three stacked floors with pools of each element
fn first_steps() -> StageTemplate {
    StageTemplate {
        name: "First Steps".into(),
        platforms: vec![
            Platform::new(0.0, 550.0, W, 50.0),
            Platform::new(0.0, 400.0, W - 100.0, 20.0),
            Platform::new(100.0, 250.0, W - 100.0, 20.0),
            Platform::new(200.0, 320.0, 100.0, 20.0),
            Platform::new(600.0, 300.0, 100.0, 20.0),
        ],
        movers: Vec::new(),
        buttons: Vec::new(),
        hazards: vec![
            Hazard::new(300.0, 530.0, 150.0, 20.0, HazardKind::KillsWater),
            Hazard::new(300.0, 380.0, 150.0, 20.0, HazardKind::KillsFire),
            Hazard::new(220.0, 300.0, 80.0, 20.0, HazardKind::KillsWater),
            Hazard::new(420.0, 450.0, 100.0, 20.0, HazardKind::KillsFire),
            Hazard::new(350.0, 490.0, 80.0, 20.0, HazardKind::KillsBoth),
        ],
        goals: vec![
            Goal::new(W - 120.0, 210.0, 40.0, 40.0, Affinity::Fire),
            Goal::new(W - 70.0, 210.0, 40.0, 40.0, Affinity::Water),
        ],
        fire_spawn: Vec2::new(60.0, 540.0),
        water_spawn: Vec2::new(100.0, 540.0),
        collectible: Some(Rect::new(642.0, 284.0, 16.0, 16.0)),
        stars: StarThresholds::default(),
    }
}

/// Cascading descent with a ceiling that blocks the shortcut to the doors
fn cascading_maze() -> StageTemplate {
    StageTemplate {
        name: "Cascading Maze".into(),
        platforms: vec![
            // Start and first drop
            Platform::new(0.0, 100.0, 250.0, 20.0),
            Platform::new(350.0, 180.0, 200.0, 20.0),
            // Main corridor and the diamond detour
            Platform::new(150.0, 280.0, 450.0, 20.0),
            Platform::new(50.0, 220.0, 40.0, 20.0),
            // Coordinated descent
            Platform::new(W - 300.0, 400.0, 60.0, 20.0),
            Platform::new(W - 150.0, 400.0, 60.0, 20.0),
            // Final stretch
            Platform::new(400.0, 480.0, 80.0, 20.0),
            Platform::new(W - 250.0, 530.0, 80.0, 20.0),
            Platform::new(W - 450.0, 550.0, 80.0, 20.0),
            Platform::new(W - 150.0, H - 20.0, 150.0, 20.0),
            // Ceiling over the shortcut
            Platform::new(480.0, 350.0, 320.0, 20.0),
        ],
        movers: Vec::new(),
        buttons: Vec::new(),
        hazards: vec![
            Hazard::new(250.0, 100.0, 200.0, 20.0, HazardKind::KillsBoth),
            Hazard::new(180.0, 260.0, 120.0, 20.0, HazardKind::KillsFire),
            Hazard::new(320.0, 260.0, 120.0, 20.0, HazardKind::KillsWater),
            Hazard::new(460.0, 260.0, 120.0, 20.0, HazardKind::KillsBoth),
            Hazard::new(W - 320.0, 420.0, 100.0, 20.0, HazardKind::KillsFire),
            Hazard::new(W - 170.0, 420.0, 100.0, 20.0, HazardKind::KillsWater),
            Hazard::new(350.0, 500.0, 300.0, 20.0, HazardKind::KillsBoth),
            Hazard::new(W - 300.0, H - 20.0, 150.0, 20.0, HazardKind::KillsBoth),
        ],
        goals: vec![
            Goal::new(W - 140.0, 540.0, 40.0, 40.0, Affinity::Fire),
            Goal::new(W - 90.0, 540.0, 40.0, 40.0, Affinity::Water),
        ],
        fire_spawn: Vec2::new(60.0, 90.0),
        water_spawn: Vec2::new(100.0, 90.0),
        collectible: Some(Rect::new(30.0, 184.0, 16.0, 16.0)),
        stars: StarThresholds {
            three_star_secs: 45.0,
            two_star_secs: 70.0,
        },
    }
}

/// A lift over a pit; one player holds a plate while the other rides
fn the_lift() -> StageTemplate {
    StageTemplate {
        name: "The Lift".into(),
        platforms: vec![
            Platform::new(0.0, 550.0, 420.0, 50.0),
            Platform::new(560.0, 550.0, 240.0, 50.0),
            Platform::new(560.0, 300.0, 240.0, 20.0),
            Platform::new(0.0, 420.0, 120.0, 20.0),
        ],
        movers: vec![Mover::new(
            Vec2::new(80.0, 20.0),
            Vec2::new(420.0, 550.0),
            Vec2::new(420.0, 300.0),
            1.5,
        )],
        buttons: vec![
            Button::new(Rect::new(200.0, 544.0, 40.0, 6.0), 0),
            Button::new(Rect::new(600.0, 294.0, 40.0, 6.0), 0),
        ],
        hazards: vec![
            Hazard::new(260.0, 540.0, 60.0, 10.0, HazardKind::KillsWater),
            Hazard::new(650.0, 540.0, 60.0, 10.0, HazardKind::KillsFire),
        ],
        goals: vec![
            Goal::new(700.0, 260.0, 40.0, 40.0, Affinity::Fire),
            Goal::new(750.0, 260.0, 40.0, 40.0, Affinity::Water),
        ],
        fire_spawn: Vec2::new(40.0, 550.0),
        water_spawn: Vec2::new(80.0, 550.0),
        collectible: Some(Rect::new(50.0, 396.0, 16.0, 16.0)),
        stars: StarThresholds::default(),
    }
}
