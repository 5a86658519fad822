//! Player controller
//!
//! Maps the raw cursor to a smoothed horizontal position and facing angle.
//! Horizontal tracking is a first-order ease toward the cursor X; the facing
//! angle always rotates the short way around.

use glam::Vec2;

use crate::consts::HALF_WIDTH;
use crate::physics::PhysicsWorld;
use crate::shortest_angle_delta;
use crate::tuning::Tuning;

use super::state::Player;

/// Advance the player one frame toward the cursor.
///
/// Writes the new horizontal position into the world; the vertical axis stays
/// under the physics world's control.
pub fn update(player: &mut Player, world: &mut PhysicsWorld, cursor_world: Vec2, tuning: &Tuning) {
    let pos = world.position(player.handle);

    // Aim from the pre-ease position, negated to match the world's rotation
    // convention, blended along the shortest path
    let to_cursor = cursor_world - pos;
    let target_angle = -to_cursor.y.atan2(to_cursor.x);
    player.angle += shortest_angle_delta(target_angle, player.angle) * tuning.aim_smoothing;

    // Ease toward the cursor X, clamped so the body stays inside the field
    let eased_x = pos.x + (cursor_world.x - pos.x) * tuning.ease_out_factor;
    let new_x = eased_x.clamp(-HALF_WIDTH + player.radius, HALF_WIDTH - player.radius);

    player.accumulated_distance += (new_x - pos.x).abs();
    world.set_position(player.handle, Vec2::new(new_x, pos.y));
}
