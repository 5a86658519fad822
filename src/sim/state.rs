//! Simulation state and entity types
//!
//! The aggregate owns the physics world and both entity registries; the
//! per-tick systems borrow it explicitly. At the end of every tick the
//! registries and the world agree exactly on which gameplay objects exist.

use glam::Vec2;

use crate::consts::{HALF_HEIGHT, HALF_WIDTH, WALL_RADIUS};
use crate::physics::{PhysHandle, PhysicsWorld};
use crate::tuning::Tuning;

/// A projectile in flight. Kinematic: flies straight until removed.
#[derive(Debug, Clone, Copy)]
pub struct Beam {
    pub handle: PhysHandle,
    pub radius: f32,
}

/// A splittable obstacle
#[derive(Debug, Clone, Copy)]
pub struct BouncyBall {
    pub handle: PhysHandle,
    pub radius: f32,
    /// Hits absorbed so far; only ever increases while the ball exists
    pub hit_count: u32,
}

/// The player-controlled body
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub handle: PhysHandle,
    pub radius: f32,
    /// Smoothed facing angle, radians
    pub angle: f32,
    /// Total horizontal distance walked; the render layer cycles the body
    /// sprite off this
    pub accumulated_distance: f32,
}

/// Position + radius snapshot for the render/debug layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete simulation state for one scene
pub struct SimState {
    pub world: PhysicsWorld,
    pub player: Player,
    pub beams: Vec<Beam>,
    pub balls: Vec<BouncyBall>,
    /// Frames until the weapon may fire again
    pub cooldown: u32,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Build the fixed scene: three boundary walls, the player, and one large
    /// bouncy ball already in flight.
    pub fn new(tuning: Tuning) -> Self {
        let mut world = PhysicsWorld::new();

        let bottom_left = Vec2::new(-HALF_WIDTH, -HALF_HEIGHT);
        let bottom_right = Vec2::new(HALF_WIDTH, -HALF_HEIGHT);
        let top_left = Vec2::new(-HALF_WIDTH, HALF_HEIGHT);
        let top_right = Vec2::new(HALF_WIDTH, HALF_HEIGHT);
        world.add_wall(bottom_left, bottom_right, WALL_RADIUS);
        world.add_wall(bottom_left, top_left, WALL_RADIUS);
        world.add_wall(bottom_right, top_right, WALL_RADIUS);

        let player = Player {
            handle: world.add_player_ball(tuning.player_spawn, tuning.player_radius),
            radius: tuning.player_radius,
            angle: 0.0,
            accumulated_distance: 0.0,
        };

        let mut state = Self {
            world,
            player,
            beams: Vec::new(),
            balls: Vec::new(),
            cooldown: 0,
            tuning,
            time_ticks: 0,
        };

        let spawn = state.tuning.initial_ball_spawn;
        let radius = state.tuning.initial_ball_radius;
        let vel = state.tuning.initial_ball_vel;
        state.spawn_ball(spawn, radius, vel);

        log::info!("scene ready: 3 walls, player, one r={radius} bouncy ball at {spawn}");
        state
    }

    /// Create a bouncy ball in the world without registering it.
    ///
    /// The resolver rebuilds the registry wholesale and places children
    /// itself; everyone else wants [`SimState::spawn_ball`].
    pub(crate) fn create_ball(&mut self, pos: Vec2, radius: f32, vel: Vec2) -> BouncyBall {
        let handle = self.world.add_bouncy_ball(pos, radius);
        self.world.set_velocity(handle, vel);
        BouncyBall {
            handle,
            radius,
            hit_count: 0,
        }
    }

    /// Spawn a bouncy ball and register it
    pub fn spawn_ball(&mut self, pos: Vec2, radius: f32, vel: Vec2) {
        let ball = self.create_ball(pos, radius, vel);
        self.balls.push(ball);
    }

    /// Spawn a beam and register it
    pub fn spawn_beam(&mut self, pos: Vec2, vel: Vec2) {
        let radius = self.tuning.beam_radius;
        let handle = self.world.add_beam(pos, vel, radius);
        self.beams.push(Beam { handle, radius });
    }

    // === Surface read by the render/overlay collaborators ===

    /// Player position and smoothed facing angle, for sprite placement
    pub fn player_pose(&self) -> (Vec2, f32) {
        (self.world.position(self.player.handle), self.player.angle)
    }

    /// Live beams as position/radius circles
    pub fn beam_views(&self) -> Vec<CircleView> {
        self.beams
            .iter()
            .map(|b| CircleView {
                pos: self.world.position(b.handle),
                radius: b.radius,
            })
            .collect()
    }

    /// Live bouncy balls as position/radius circles
    pub fn ball_views(&self) -> Vec<CircleView> {
        self.balls
            .iter()
            .map(|b| CircleView {
                pos: self.world.position(b.handle),
                radius: b.radius,
            })
            .collect()
    }

    /// Verify the registry/world consistency invariant; panics on violation.
    ///
    /// Every registry entry must hold a live world handle, and the world must
    /// hold no gameplay bodies beyond the registered ones. Debug builds run
    /// this after every tick; tests call it directly.
    pub fn check_consistency(&self) {
        for beam in &self.beams {
            assert!(
                self.world.contains(beam.handle),
                "beam registry entry references a removed handle"
            );
        }
        for ball in &self.balls {
            assert!(
                self.world.contains(ball.handle),
                "ball registry entry references a removed handle"
            );
        }
        assert!(
            self.world.contains(self.player.handle),
            "player body missing from the world"
        );
        // 3 walls + player + registered entities account for every body
        assert_eq!(
            self.world.body_count(),
            4 + self.beams.len() + self.balls.len(),
            "world holds gameplay bodies with no registry entry"
        );
    }
}
