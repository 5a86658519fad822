//! Rigid-body world wrapper
//!
//! The simulation treats the physics engine as a black box that creates and
//! removes body+shape pairs and advances them by one fixed timestep at a
//! time. Gameplay code never sees rapier types; it holds `PhysHandle`s and
//! talks world-space `Vec2`.

use glam::Vec2;
use rapier2d::prelude::*;

use crate::consts::{GRAVITY, SIM_DT};

/// Paired body + collider identity for one physical object.
///
/// The pair is created and removed together, so neither half can leak or be
/// freed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysHandle {
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

/// Engine-level collision filters. These only gate the solver's contact
/// response; gameplay hits are the resolver's own distance tests.
mod groups {
    use rapier2d::prelude::{Group, InteractionGroups};

    /// Walls collide with everything
    pub fn wall() -> InteractionGroups {
        InteractionGroups::new(Group::GROUP_1, Group::ALL)
    }

    /// Beams pass through everything; they never push what they overlap
    pub fn beam() -> InteractionGroups {
        InteractionGroups::new(Group::GROUP_2, Group::NONE)
    }

    /// Bouncy balls bounce off walls only, never off each other
    pub fn bouncy_ball() -> InteractionGroups {
        InteractionGroups::new(Group::GROUP_3, Group::GROUP_1)
    }
}

/// The rigid-body world and every engine structure needed to step it
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    gravity: Vector<Real>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let mut params = IntegrationParameters::default();
        params.dt = SIM_DT;

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            params,
            gravity: vector![GRAVITY.x, GRAVITY.y],
        }
    }

    /// Add one boundary wall: a static thick segment from `a` to `b`
    pub fn add_wall(&mut self, a: Vec2, b: Vec2, radius: f32) -> PhysHandle {
        let body = RigidBodyBuilder::fixed().build();
        let shape = SharedShape::capsule(point![a.x, a.y], point![b.x, b.y], radius);
        let collider = ColliderBuilder::new(shape)
            .restitution(1.0)
            .friction(0.5)
            .collision_groups(groups::wall())
            .build();
        self.attach(body, collider)
    }

    /// Add the player: a dynamic circle that does not bounce
    pub fn add_player_ball(&mut self, pos: Vec2, radius: f32) -> PhysHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![pos.x, pos.y])
            .build();
        let collider = ColliderBuilder::ball(radius)
            .mass(radius * radius / 100.0)
            .restitution(0.0)
            .friction(0.5)
            .build();
        self.attach(body, collider)
    }

    /// Add a bouncy ball: dynamic, perfectly elastic, light for its size
    pub fn add_bouncy_ball(&mut self, pos: Vec2, radius: f32) -> PhysHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![pos.x, pos.y])
            .build();
        let collider = ColliderBuilder::ball(radius)
            .mass(radius * radius / 500.0)
            .restitution(1.0)
            .friction(0.1)
            .collision_groups(groups::bouncy_ball())
            .build();
        self.attach(body, collider)
    }

    /// Add a beam: kinematic, so gravity and contacts never bend its path
    pub fn add_beam(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> PhysHandle {
        let body = RigidBodyBuilder::kinematic_velocity_based()
            .translation(vector![pos.x, pos.y])
            .linvel(vector![vel.x, vel.y])
            .build();
        let collider = ColliderBuilder::ball(radius)
            .restitution(0.0)
            .friction(0.0)
            .collision_groups(groups::beam())
            .build();
        self.attach(body, collider)
    }

    fn attach(&mut self, body: RigidBody, collider: Collider) -> PhysHandle {
        let body = self.bodies.insert(body);
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);
        PhysHandle { body, collider }
    }

    /// Remove the body+collider pair from the world.
    ///
    /// Removing a handle twice is an invariant violation and panics.
    pub fn remove(&mut self, handle: PhysHandle) {
        let removed =
            self.colliders
                .remove(handle.collider, &mut self.islands, &mut self.bodies, false);
        if removed.is_none() {
            panic!("collider removed twice: {:?}", handle.collider);
        }
        let removed = self.bodies.remove(
            handle.body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            false,
        );
        if removed.is_none() {
            panic!("body removed twice: {:?}", handle.body);
        }
    }

    /// True while the pair is live in the world
    pub fn contains(&self, handle: PhysHandle) -> bool {
        self.bodies.get(handle.body).is_some() && self.colliders.get(handle.collider).is_some()
    }

    /// Number of live bodies, walls included
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn position(&self, handle: PhysHandle) -> Vec2 {
        let t = self.body(handle).translation();
        Vec2::new(t.x, t.y)
    }

    /// Teleport a body, leaving its velocity untouched
    pub fn set_position(&mut self, handle: PhysHandle, pos: Vec2) {
        self.body_mut(handle)
            .set_translation(vector![pos.x, pos.y], true);
    }

    pub fn velocity(&self, handle: PhysHandle) -> Vec2 {
        let v = self.body(handle).linvel();
        Vec2::new(v.x, v.y)
    }

    pub fn set_velocity(&mut self, handle: PhysHandle, vel: Vec2) {
        self.body_mut(handle).set_linvel(vector![vel.x, vel.y], true);
    }

    /// Advance the world by exactly one fixed timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    fn body(&self, handle: PhysHandle) -> &RigidBody {
        self.bodies
            .get(handle.body)
            .unwrap_or_else(|| panic!("dead body handle: {:?}", handle.body))
    }

    fn body_mut(&mut self, handle: PhysHandle) -> &mut RigidBody {
        self.bodies
            .get_mut(handle.body)
            .unwrap_or_else(|| panic!("dead body handle: {:?}", handle.body))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_paired_add_remove() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_beam(Vec2::ZERO, Vec2::new(100.0, 0.0), 5.0);
        assert!(world.contains(handle));
        assert_eq!(world.body_count(), 1);

        world.remove(handle);
        assert!(!world.contains(handle));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    #[should_panic(expected = "removed twice")]
    fn test_double_remove_panics() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_beam(Vec2::ZERO, Vec2::ZERO, 5.0);
        world.remove(handle);
        world.remove(handle);
    }

    #[test]
    fn test_beam_ignores_gravity() {
        let mut world = PhysicsWorld::new();
        let vel = Vec2::new(100.0, 0.0);
        let handle = world.add_beam(Vec2::ZERO, vel, 5.0);

        for _ in 0..60 {
            world.step();
        }

        // One second later: moved exactly along its velocity, never fell
        let pos = world.position(handle);
        assert!((pos.x - 100.0).abs() < 0.5);
        assert!(pos.y.abs() < 1e-3);
        assert_eq!(world.velocity(handle), vel);
    }

    #[test]
    fn test_dynamic_ball_falls() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_bouncy_ball(Vec2::new(0.0, 1000.0), 30.0);

        for _ in 0..30 {
            world.step();
        }

        let vel = world.velocity(handle);
        assert!(vel.y < -40.0, "expected downward velocity, got {vel}");
        assert!(world.position(handle).y < 1000.0);
    }

    #[test]
    fn test_set_position_keeps_velocity() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_bouncy_ball(Vec2::ZERO, 30.0);
        world.set_velocity(handle, Vec2::new(50.0, 0.0));
        world.set_position(handle, Vec2::new(10.0, 20.0));

        assert_eq!(world.position(handle), Vec2::new(10.0, 20.0));
        assert_eq!(world.velocity(handle), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_step_advances_fixed_dt() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_beam(Vec2::ZERO, Vec2::new(600.0, 0.0), 5.0);
        world.step();
        let pos = world.position(handle);
        assert!((pos.x - 600.0 * SIM_DT).abs() < 1e-3);
    }
}
