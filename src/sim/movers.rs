//! Buttons and moving platforms
//!
//! Buttons are momentary: their pressed flag is rebuilt from player overlap
//! every frame, and a mover is active exactly while at least one of its
//! buttons is pressed. Nothing here latches across frames.

use glam::Vec2;

use super::rect::{Rect, intersects};
use super::state::{Button, Mover};

/// Recompute every button's pressed flag from the given player boxes
pub fn update_buttons(buttons: &mut [Button], bodies: &[Rect]) {
    for button in buttons.iter_mut() {
        button.pressed = bodies.iter().any(|body| intersects(body, &button.rect));
    }
}

/// Activate each mover iff any button targeting it is pressed (logical OR)
pub fn update_activation(movers: &mut [Mover], buttons: &[Button]) {
    let before: Vec<bool> = movers.iter().map(|m| m.active).collect();

    for mover in movers.iter_mut() {
        mover.active = false;
    }
    for button in buttons.iter().filter(|b| b.pressed) {
        debug_assert!(
            button.target < movers.len(),
            "button targets mover {} but stage has {}",
            button.target,
            movers.len()
        );
        movers[button.target].active = true;
    }

    for (idx, (mover, was_active)) in movers.iter().zip(before).enumerate() {
        if mover.active != was_active {
            log::debug!("Mover {} {}", idx, if mover.active { "activated" } else { "released" });
        }
    }
}

/// Slide every mover toward its current target endpoint
pub fn advance_movers(movers: &mut [Mover]) {
    for mover in movers.iter_mut() {
        advance_mover(mover);
    }
}

/// Move toward `end` when active, `start` otherwise, at most `speed` per axis
pub fn advance_mover(mover: &mut Mover) {
    let target = if mover.active { mover.end } else { mover.start };
    let from = mover.rect.origin();
    let to = Vec2::new(
        step_toward(from.x, target.x, mover.speed),
        step_toward(from.y, target.y, mover.speed),
    );
    mover.rect.set_origin(to);
    mover.last_delta = to - from;
}

/// One clamped step along a single axis; never overshoots `target`
#[inline]
fn step_toward(current: f32, target: f32, max_step: f32) -> f32 {
    debug_assert!(max_step >= 0.0, "mover speed {max_step} is negative");
    let max_step = max_step.abs();
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}

/// Full per-frame pass: buttons, activation, then movement
pub fn update(movers: &mut [Mover], buttons: &mut [Button], bodies: &[Rect]) {
    update_buttons(buttons, bodies);
    update_activation(movers, buttons);
    advance_movers(movers);
}
