//! Collision detection and response for rectangles
//!
//! Everything is axis-aligned, so detection is a plain overlap test. The only
//! response the world needs is snapping the player onto the ground and
//! reflecting oscillating hazards at the ends of their track.

use super::rect::Rect;
use super::state::{Hazard, Player};

/// Check whether two rectangles overlap (touching edges are a miss)
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Keep the player inside the horizontal world bounds
pub fn clamp_to_world(player: &mut Player, world_width: f32) {
    let max_x = (world_width - player.rect.size.x).max(0.0);
    player.rect.pos.x = player.rect.pos.x.clamp(0.0, max_x);
}

/// Land the player on the ground if its bottom edge has passed the ground top.
///
/// This is the only place `on_ground` is set. A jump is the only thing that clears it.
pub fn resolve_ground(player: &mut Player, ground: &Rect) {
    if player.rect.bottom() > ground.top() {
        player.rect.pos.y = ground.top() - player.rect.size.y;
        player.vel.y = 0.0;
        player.on_ground = true;
    }
}

/// Move an oscillating hazard one step along its track.
///
/// The hazard may overshoot an end of its range by up to one step; the speed
/// is negated so the next step carries it back. Static hazards are untouched.
pub fn advance_hazard(hazard: &mut Hazard) {
    if let Some(osc) = hazard.oscillation.as_mut() {
        hazard.rect.pos.y += osc.vertical_speed;
        if hazard.rect.top() <= osc.range_top || hazard.rect.bottom() >= osc.range_bottom {
            osc.vertical_speed = -osc.vertical_speed;
        }
    }
}

/// Index of the first hazard overlapping the player, in list order
pub fn first_hazard_hit(player: &Rect, hazards: &[Hazard]) -> Option<usize> {
    hazards.iter().position(|h| intersects(player, &h.rect))
}
