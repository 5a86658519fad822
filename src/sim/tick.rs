//! Fixed timestep tick
//!
//! One tick = player controller, weapon, resolver, one physics step. The
//! driver owns the clock; the simulation only ever sees discrete ticks.

use glam::Vec2;

use crate::screen_to_world;

use super::state::SimState;
use super::{player, resolve, weapon};

/// Input sampled by the driver for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw cursor position in screen coordinates (origin top-left, Y-down)
    pub cursor_px: Vec2,
    /// Fire button held
    pub fire: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    let cursor_world = screen_to_world(input.cursor_px);

    player::update(&mut state.player, &mut state.world, cursor_world, &state.tuning);
    weapon::update(state, cursor_world, input.fire);
    resolve::resolve(state);
    state.world.step();

    state.time_ticks += 1;
    #[cfg(debug_assertions)]
    state.check_consistency();
}
