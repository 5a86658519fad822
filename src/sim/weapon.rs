//! Weapon subsystem
//!
//! Cooldown-gated beam emitter: while the fire input is held and the cooldown
//! has expired, one beam per eligible frame leaves the player toward the
//! cursor.

use glam::Vec2;

use super::state::SimState;

/// Fire or cool down, once per frame.
///
/// With the fire button held, a beam spawns every `cooldown_frames + 1`
/// ticks: one firing frame, then `cooldown_frames` frames counting down.
pub fn update(state: &mut SimState, cursor_world: Vec2, fire: bool) {
    if state.cooldown > 0 {
        state.cooldown -= 1;
        return;
    }
    if !fire {
        return;
    }

    let player_pos = state.world.position(state.player.handle);
    let Some(dir) = (cursor_world - player_pos).try_normalize() else {
        // Cursor exactly on the player: no aim direction, keep the cooldown
        return;
    };

    let muzzle = player_pos + dir * (state.player.radius + state.tuning.beam_radius);
    state.spawn_beam(muzzle, dir * state.tuning.beam_speed);
    state.cooldown = state.tuning.cooldown_frames;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_cooldown_gates_fire_rate() {
        let mut state = SimState::new(Tuning::default());
        let cursor = Vec2::new(0.0, 200.0);

        let mut spawned_on = Vec::new();
        for frame in 0..10 {
            let before = state.beams.len();
            update(&mut state, cursor, true);
            if state.beams.len() > before {
                spawned_on.push(frame);
            }
        }

        // cooldown_frames = 2: fire, count 2, count 1, fire again
        assert_eq!(spawned_on, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_no_fire_without_input() {
        let mut state = SimState::new(Tuning::default());
        for _ in 0..10 {
            update(&mut state, Vec2::new(0.0, 200.0), false);
        }
        assert!(state.beams.is_empty());
        assert_eq!(state.cooldown, 0);
    }

    #[test]
    fn test_zero_length_aim_holds_fire() {
        let mut state = SimState::new(Tuning::default());
        let player_pos = state.world.position(state.player.handle);

        update(&mut state, player_pos, true);

        // No beam, and the cooldown was not consumed either
        assert!(state.beams.is_empty());
        assert_eq!(state.cooldown, 0);

        // Next frame with a real aim direction fires immediately
        update(&mut state, player_pos + Vec2::new(0.0, 100.0), true);
        assert_eq!(state.beams.len(), 1);
    }

    #[test]
    fn test_muzzle_offset_and_velocity() {
        let mut state = SimState::new(Tuning::default());
        let player_pos = state.world.position(state.player.handle);
        let cursor = player_pos + Vec2::new(0.0, 300.0);

        update(&mut state, cursor, true);

        let beam = state.beams[0];
        let pos = state.world.position(beam.handle);
        let vel = state.world.velocity(beam.handle);

        // Spawned straight up, offset past the player's own circle
        let offset = state.tuning.player_radius + state.tuning.beam_radius;
        assert!((pos - (player_pos + Vec2::new(0.0, offset))).length() < 1e-3);
        assert!((vel - Vec2::new(0.0, state.tuning.beam_speed)).length() < 1e-3);
    }
}
