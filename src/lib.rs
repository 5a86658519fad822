//! Splitshot - a 2D physics toy
//!
//! A player-controlled ball tracks the cursor along the floor, fires beams
//! while the fire button is held, and bouncy balls split in two once they
//! have absorbed enough hits.
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step simulation (entities, weapon, resolver)
//! - `physics`: Rigid-body world wrapper (rapier2d behind paired handles)
//! - `tuning`: Data-driven gameplay balance

pub mod physics;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Fixed world constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one physics step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Play-field dimensions; world origin at the center, Y-up
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;
    pub const HALF_WIDTH: f32 = FIELD_WIDTH / 2.0;
    pub const HALF_HEIGHT: f32 = FIELD_HEIGHT / 2.0;

    /// Thickness radius of the boundary wall segments
    pub const WALL_RADIUS: f32 = 40.0;

    /// World gravity
    pub const GRAVITY: Vec2 = Vec2::new(0.0, -100.0);
}

/// Shortest-path angle difference, normalized into (-π, π]
///
/// Blending by this delta always rotates the short way around, never the
/// long way past ±π.
#[inline]
pub fn shortest_angle_delta(target: f32, current: f32) -> f32 {
    use std::f32::consts::PI;
    let mut delta = target - current;
    while delta > PI {
        delta -= 2.0 * PI;
    }
    while delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

/// Convert cursor screen coordinates (origin top-left, Y-down) to world
/// coordinates (origin center, Y-up)
#[inline]
pub fn screen_to_world(cursor: Vec2) -> Vec2 {
    Vec2::new(cursor.x - consts::HALF_WIDTH, consts::HALF_HEIGHT - cursor.y)
}
