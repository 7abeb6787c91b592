use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::{IVec2, UVec2};
use rand::rngs::SmallRng;
use strum_macros::{AsRefStr, EnumIter};

use crate::systems::movement::{Position, Velocity};

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The adversary kind tag.
///
/// Purely presentational: the core carries it so the renderer can pick a
/// sprite, but it has no effect on behavior beyond spawn differentiation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Ghost {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

/// A tag component for static maze walls.
#[derive(Component)]
pub struct Wall;

/// A tag component for uneaten pellets.
#[derive(Component)]
pub struct Pellet;

/// The position an entity returns to on a life-loss reset.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoint(pub IVec2);

/// Axis-aligned hitbox extent of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub size: UVec2,
}

/// The player's accumulated score.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Random number generator driving adversary direction choices.
///
/// Held as a resource so a fixed seed yields a reproducible run.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub spawn_point: SpawnPoint,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub position: Position,
    pub velocity: Velocity,
    pub spawn_point: SpawnPoint,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct WallBundle {
    pub wall: Wall,
    pub position: Position,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct PelletBundle {
    pub pellet: Pellet,
    pub position: Position,
    pub collider: Collider,
}
