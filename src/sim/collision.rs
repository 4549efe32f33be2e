//! Player kinematics and collision response
//!
//! Resolution runs in two passes: a vertical pass (landing and head bumps)
//! against every solid, then a horizontal pass that pushes the player out of
//! side overlaps. Corner and diagonal-mover contacts can therefore resolve
//! on the "wrong" axis; that is a known limitation of the two-pass scheme.

use glam::Vec2;

use super::rect::{Rect, intersects, overlap_extent};
use super::state::{Mover, Platform, Player};
use crate::tuning::Tuning;

/// Slack for the "was above the surface last frame" test
const CONTACT_EPSILON: f32 = 1e-3;

/// A surface the player can collide with this frame
#[derive(Debug, Clone, Copy)]
struct Solid {
    rect: Rect,
    /// Top edge before this frame's movement
    prev_top: f32,
    /// Horizontal displacement handed to a rider that lands this frame
    carry_x: f32,
}

impl From<&Platform> for Solid {
    fn from(platform: &Platform) -> Self {
        Self {
            rect: platform.rect,
            prev_top: platform.rect.top(),
            carry_x: 0.0,
        }
    }
}

impl From<&Mover> for Solid {
    fn from(mover: &Mover) -> Self {
        Self {
            rect: mover.rect,
            prev_top: mover.rect.top() - mover.last_delta.y,
            carry_x: if mover.active { mover.last_delta.x } else { 0.0 },
        }
    }
}

impl Solid {
    fn prev_bottom(&self) -> f32 {
        self.prev_top + self.rect.h
    }
}

fn solids<'a>(platforms: &'a [Platform], movers: &'a [Mover]) -> impl Iterator<Item = Solid> + 'a {
    platforms
        .iter()
        .map(Solid::from)
        .chain(movers.iter().map(Solid::from))
}

/// Contacts resolved during one `step_player` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepContacts {
    pub landed: bool,
    pub bumped_head: bool,
    pub pushed_sideways: bool,
}

/// Integrate one frame of motion and resolve it against the stage geometry.
///
/// Horizontal velocity is applied as-is (input sets it directly); vertical
/// motion is semi-implicit Euler under `tuning.gravity`.
pub fn step_player(
    player: &mut Player,
    platforms: &[Platform],
    movers: &[Mover],
    tuning: &Tuning,
) -> StepContacts {
    let size = tuning.player_size;
    let prev_bottom = player.pos.y;

    player.pos.x += player.vel.x;
    player.vel.y += tuning.gravity;
    player.pos.y += player.vel.y;

    let mut contacts = StepContacts::default();
    let body = player.rect(size);
    player.grounded = false;

    // Vertical pass
    for solid in solids(platforms, movers) {
        let hit = intersects(&body, &solid.rect);
        // Standing on it last frame; a descending mover drops out from under
        // its rider faster than gravity pulls
        let riding = (prev_bottom - solid.prev_top).abs() <= CONTACT_EPSILON
            && body.left() < solid.rect.right()
            && body.right() > solid.rect.left();
        if !hit && !riding {
            continue;
        }

        if player.vel.y > 0.0 && (riding || prev_bottom <= solid.prev_top + CONTACT_EPSILON) {
            player.pos.y = solid.rect.top();
            player.vel.y = 0.0;
            player.grounded = true;
            player.pos.x += solid.carry_x;
            contacts.landed = true;
        } else if hit
            && player.vel.y < 0.0
            && prev_bottom - size.y >= solid.prev_bottom() - tuning.head_bump_tolerance
        {
            player.pos.y = solid.rect.bottom() + size.y;
            player.vel.y = 0.0;
            contacts.bumped_head = true;
        }
    }

    // Horizontal pass
    for solid in solids(platforms, movers) {
        let body = player.rect(size);
        let overlap = overlap_extent(&body, &solid.rect);
        if overlap == Vec2::ZERO || overlap.x >= overlap.y {
            continue;
        }
        if body.center().x < solid.rect.center().x {
            player.pos.x -= overlap.x;
        } else {
            player.pos.x += overlap.x;
        }
        contacts.pushed_sideways = true;
    }

    contacts
}

/// Separate two overlapping players.
///
/// Side-by-side overlaps split the correction evenly. Vertical overlaps
/// seat the falling upper player on top of the other; only that player is
/// adjusted.
pub fn resolve_players(a: &mut Player, b: &mut Player, size: Vec2) {
    let rect_a = a.rect(size);
    let rect_b = b.rect(size);
    if !intersects(&rect_a, &rect_b) {
        return;
    }

    let overlap = overlap_extent(&rect_a, &rect_b);
    if overlap.x < overlap.y {
        let shift = overlap.x / 2.0;
        if rect_a.x < rect_b.x {
            a.pos.x -= shift;
            b.pos.x += shift;
        } else {
            a.pos.x += shift;
            b.pos.x -= shift;
        }
    } else if a.vel.y > 0.0 && rect_a.y < rect_b.y {
        stand_on(a, &rect_b);
    } else if b.vel.y > 0.0 && rect_b.y < rect_a.y {
        stand_on(b, &rect_a);
    }
}

fn stand_on(rider: &mut Player, below: &Rect) {
    rider.pos.y = below.top();
    rider.vel.y = 0.0;
    rider.grounded = true;
}
