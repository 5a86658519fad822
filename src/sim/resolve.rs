//! Collision & lifecycle resolver
//!
//! The per-frame core: beams are tested against the field bounds and against
//! every ball, then both registries and the physics world are rebuilt to the
//! surviving set. Runs in two phases: a pure scan over position snapshots
//! that decides every removal and split, then an apply pass that performs
//! them. The decision logic never mutates the collections it is iterating.

use glam::Vec2;

use crate::consts::{HALF_HEIGHT, HALF_WIDTH};

use super::state::SimState;

/// Beam snapshot for the scan phase
#[derive(Debug, Clone, Copy)]
pub struct BeamSnapshot {
    pub pos: Vec2,
    pub radius: f32,
}

/// Ball snapshot for the scan phase
#[derive(Debug, Clone, Copy)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub hit_count: u32,
}

/// Every decision the scan phase makes, indexed like the input slices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decisions {
    /// Beams to remove this frame (off-screen, or spent on a hit)
    pub remove_beam: Vec<bool>,
    /// Hits landed on each ball this frame
    pub hits: Vec<u32>,
    /// Balls whose total hit count crossed the threshold
    pub split: Vec<bool>,
}

/// Pure decision pass over the pre-frame entity snapshots.
///
/// Off-screen culling wins over collision: a beam outside the field never
/// registers a hit, even while overlapping a ball. A surviving beam hits at
/// most the first overlapping ball in registry order.
pub fn scan(beams: &[BeamSnapshot], balls: &[BallSnapshot], hit_threshold: u32) -> Decisions {
    let mut remove_beam = vec![false; beams.len()];
    let mut hits = vec![0u32; balls.len()];
    let mut split = vec![false; balls.len()];

    for (bi, beam) in beams.iter().enumerate() {
        if beam.pos.x.abs() > HALF_WIDTH || beam.pos.y.abs() > HALF_HEIGHT {
            remove_beam[bi] = true;
            continue;
        }

        for (i, ball) in balls.iter().enumerate() {
            if beam.pos.distance(ball.pos) < ball.radius + beam.radius {
                hits[i] += 1;
                remove_beam[bi] = true;
                if ball.hit_count + hits[i] >= hit_threshold {
                    split[i] = true;
                }
                break;
            }
        }
    }

    Decisions {
        remove_beam,
        hits,
        split,
    }
}

/// Execute one resolver frame against the live state
pub fn resolve(state: &mut SimState) {
    let beams: Vec<BeamSnapshot> = state
        .beams
        .iter()
        .map(|b| BeamSnapshot {
            pos: state.world.position(b.handle),
            radius: b.radius,
        })
        .collect();
    let balls: Vec<BallSnapshot> = state
        .balls
        .iter()
        .map(|b| BallSnapshot {
            pos: state.world.position(b.handle),
            radius: b.radius,
            hit_count: b.hit_count,
        })
        .collect();

    let decisions = scan(&beams, &balls, state.tuning.hit_threshold);
    apply(state, &balls, &decisions);
}

/// Rebuild both registries and the world from the scan's decisions.
///
/// Survivors keep their relative order; split children take their parent's
/// slot. Children spawned here are never re-scanned this frame.
fn apply(state: &mut SimState, balls: &[BallSnapshot], decisions: &Decisions) {
    let old_beams = std::mem::take(&mut state.beams);
    for (beam, &remove) in old_beams.into_iter().zip(&decisions.remove_beam) {
        if remove {
            state.world.remove(beam.handle);
        } else {
            state.beams.push(beam);
        }
    }

    let old_balls = std::mem::take(&mut state.balls);
    for (i, mut ball) in old_balls.into_iter().enumerate() {
        ball.hit_count += decisions.hits[i];
        if !decisions.split[i] {
            state.balls.push(ball);
            continue;
        }

        state.world.remove(ball.handle);

        let pos = balls[i].pos;
        let child_radius = ball.radius / 2.0;
        if child_radius < state.tuning.min_split_radius {
            log::debug!("ball at {pos} vanished, child radius {child_radius} below minimum");
            continue;
        }

        // Deterministic outward kick: first child left, second right, both
        // offset vertically by the parent's height at split time
        for child in 0..2 {
            let vx = if child == 0 {
                -state.tuning.split_speed_x
            } else {
                state.tuning.split_speed_x
            };
            let vel = Vec2::new(vx, state.tuning.split_base_speed_y + pos.y);
            let child_ball = state.create_ball(pos, child_radius, vel);
            state.balls.push(child_ball);
        }
        log::debug!("ball at {pos} split into two r={child_radius} children");
    }
}
