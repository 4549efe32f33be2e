//! Win/loss and pickup checks against the current player boxes

use super::rect::intersects;
use super::state::{Affinity, LiveStage, Player};
use crate::tuning::Tuning;

/// Result of the out-of-bounds pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    Inside,
    /// A player dropped below the bottom edge
    FellOut(Affinity),
}

/// Keep both players on screen horizontally and under the top edge.
///
/// Returns the first player that fell through the bottom, if any.
pub fn enforce_bounds(stage: &mut LiveStage, tuning: &Tuning) -> Bounds {
    let mut result = Bounds::Inside;
    for affinity in Affinity::ALL {
        let player = stage.player_mut(affinity);
        clamp_to_screen(player, tuning);
        if result == Bounds::Inside && player.pos.y > tuning.screen_height {
            result = Bounds::FellOut(affinity);
        }
    }
    result
}

fn clamp_to_screen(player: &mut Player, tuning: &Tuning) {
    let half_w = tuning.player_size.x / 2.0;
    player.pos.x = player.pos.x.clamp(half_w, tuning.screen_width - half_w);

    let body = player.rect(tuning.player_size);
    if body.top() < 0.0 {
        player.pos.y = tuning.player_size.y;
        player.vel.y = 0.0;
    }
}

/// Pick up the collectible if either player touches it.
///
/// Returns who took it this frame.
pub fn collect(stage: &mut LiveStage, tuning: &Tuning) -> Option<Affinity> {
    let size = tuning.player_size;
    let fire = stage.fire.rect(size);
    let water = stage.water.rect(size);

    let item = stage.collectible.as_mut().filter(|c| !c.collected)?;
    let taker = if intersects(&fire, &item.rect) {
        Affinity::Fire
    } else if intersects(&water, &item.rect) {
        Affinity::Water
    } else {
        return None;
    };

    item.collected = true;
    stage.collected_count += 1;
    Some(taker)
}

/// First player found touching a hazard lethal to them
pub fn hazard_victim(stage: &LiveStage, tuning: &Tuning) -> Option<Affinity> {
    stage.hazards.iter().find_map(|hazard| {
        Affinity::ALL.into_iter().find(|&affinity| {
            hazard.kind.is_lethal_to(affinity)
                && intersects(&stage.player(affinity).rect(tuning.player_size), &hazard.rect)
        })
    })
}

/// Player is inside their own goal this frame
pub fn at_goal(stage: &LiveStage, affinity: Affinity, tuning: &Tuning) -> bool {
    stage.goal_for(affinity).is_some_and(|goal| {
        intersects(&stage.player(affinity).rect(tuning.player_size), &goal.rect)
    })
}

/// Both players are at their goals in the same frame
pub fn both_at_goals(stage: &LiveStage, tuning: &Tuning) -> bool {
    at_goal(stage, Affinity::Fire, tuning) && at_goal(stage, Affinity::Water, tuning)
}
