//! Splitshot entry point
//!
//! Runs the simulation headless at the fixed step with a scripted input
//! sequence. Rendering, the debug overlay, and input polling are external
//! collaborators; the binary only demonstrates the frame-driver contract:
//! player controller, weapon, resolver, physics step, once per tick.

use glam::Vec2;

use splitshot::consts::{FIELD_HEIGHT, FIELD_WIDTH, SIM_DT};
use splitshot::sim::{SimState, TickInput, tick};
use splitshot::tuning::Tuning;

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(&path),
        None => Tuning::default(),
    };
    let mut state = SimState::new(tuning);

    // Ten simulated seconds: sweep the cursor across the field with the fire
    // button held, roughly what a player chasing the ball does
    let total_ticks = (10.0 / SIM_DT) as u64;
    for t in 0..total_ticks {
        let phase = t as f32 * SIM_DT;
        let input = TickInput {
            cursor_px: Vec2::new(
                (phase.sin() * 0.5 + 0.5) * FIELD_WIDTH,
                ((phase * 0.7).cos() * 0.25 + 0.3) * FIELD_HEIGHT,
            ),
            fire: true,
        };
        tick(&mut state, &input);

        if t % 60 == 0 {
            let (pos, angle) = state.player_pose();
            log::info!(
                "t={:>2}s player=({:>6.1},{:>6.1}) angle={:>5.2} beams={:>2} balls={}",
                t / 60,
                pos.x,
                pos.y,
                angle,
                state.beams.len(),
                state.balls.len(),
            );
        }
    }

    state.check_consistency();
    log::info!(
        "done after {} ticks: {} balls and {} beams live",
        state.time_ticks,
        state.balls.len(),
        state.beams.len(),
    );
}
