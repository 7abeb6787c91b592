//! Movement primitives: axis-locked velocity, tentative stepping, rollback.
//!
//! Movement is speculative everywhere: apply the displacement, test against
//! the wall set, and undo on overlap. No pathing or lookahead.

use bevy_ecs::component::Component;
use glam::IVec2;

use crate::constants::STEP_SPEED;
use crate::map::direction::Direction;
use crate::systems::collision::Aabb;
use crate::systems::components::Collider;

/// Pixel position of an entity's top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub IVec2);

/// An entity's facing direction and the per-tick displacement derived from it.
///
/// The displacement is zero only in the freshly spawned state, before the
/// first heading is assigned; any direction update re-derives it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub direction: Direction,
    pub delta: IVec2,
}

impl Velocity {
    /// Spawn-state velocity: facing `direction`, not yet moving.
    pub fn stopped(direction: Direction) -> Self {
        Self {
            direction,
            delta: IVec2::ZERO,
        }
    }

    /// Points the entity at `direction`, re-deriving its displacement.
    pub fn face(&mut self, direction: Direction) {
        self.direction = direction;
        self.delta = direction.as_ivec2() * STEP_SPEED;
    }
}

/// Advances `position` by one velocity step, rolling the step back if it
/// lands the hitbox inside a wall. Returns true when the step was rejected.
pub fn step(position: &mut Position, collider: &Collider, velocity: &Velocity, walls: &[Aabb]) -> bool {
    position.0 += velocity.delta;
    if overlaps_any(position, collider, walls) {
        position.0 -= velocity.delta;
        true
    } else {
        false
    }
}

/// Turns the entity toward `direction`, keeping the turn only if its first
/// step is clear of walls.
///
/// On rejection the previous direction is restored and the displacement
/// re-derived from it, so a failed turn leaves the entity moving its old way
/// rather than stationary. On success the tentative step is kept. Returns
/// true when the new direction was accepted.
pub fn apply_direction(
    position: &mut Position,
    collider: &Collider,
    velocity: &mut Velocity,
    direction: Direction,
    walls: &[Aabb],
) -> bool {
    let previous = velocity.direction;
    velocity.face(direction);
    position.0 += velocity.delta;

    if overlaps_any(position, collider, walls) {
        position.0 -= velocity.delta;
        velocity.face(previous);
        false
    } else {
        true
    }
}

fn overlaps_any(position: &Position, collider: &Collider, walls: &[Aabb]) -> bool {
    let hitbox = Aabb::new(position.0, collider.size);
    walls.iter().any(|wall| hitbox.intersects(wall))
}
