//! Axis-aligned box collision tests and the per-tick overlap scan.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res};
use glam::{IVec2, UVec2};

use crate::error::GameError;
use crate::events::GameEvent;
use crate::systems::components::{Collider, Ghost, Pellet, PlayerControlled};
use crate::systems::movement::Position;
use crate::systems::state::GameStage;

/// An axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub size: UVec2,
}

impl Aabb {
    pub fn new(min: IVec2, size: UVec2) -> Self {
        Self { min, size }
    }

    /// Two boxes overlap iff their projections on both axes overlap.
    /// Half-open on the max edge, so boxes sharing an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.size.x as i32
            && self.min.x + self.size.x as i32 > other.min.x
            && self.min.y < other.min.y + other.size.y as i32
            && self.min.y + self.size.y as i32 > other.min.y
    }
}

/// Builds an entity's hitbox from its position and collider.
pub fn aabb(position: &Position, collider: &Collider) -> Aabb {
    Aabb::new(position.0, collider.size)
}

/// Detects player-adversary and player-pellet overlaps, emitting a collision
/// event per overlapping pair for the capture and pellet systems to resolve.
pub fn collision_system(
    stage: Res<GameStage>,
    player: Query<(Entity, &Position, &Collider), With<PlayerControlled>>,
    ghosts: Query<(Entity, &Position, &Collider), (With<Ghost>, Without<PlayerControlled>)>,
    pellets: Query<(Entity, &Position, &Collider), With<Pellet>>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    if !stage.is_playing() {
        return;
    }

    let (player_entity, player_pos, player_collider) = match player.single() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("collision scan found no single player: {e}")));
            return;
        }
    };
    let player_box = aabb(player_pos, player_collider);

    for (ghost_entity, position, collider) in ghosts.iter() {
        if player_box.intersects(&aabb(position, collider)) {
            events.write(GameEvent::Collision(player_entity, ghost_entity));
        }
    }

    for (pellet_entity, position, collider) in pellets.iter() {
        if player_box.intersects(&aabb(position, collider)) {
            events.write(GameEvent::Collision(player_entity, pellet_entity));
        }
    }
}
