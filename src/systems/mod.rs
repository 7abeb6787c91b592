//! Per-tick game systems and the components they operate on.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod item;
pub mod level;
pub mod movement;
pub mod player;
pub mod state;

pub use collision::{collision_system, Aabb};
pub use components::{
    Collider, GameRng, Ghost, GhostBundle, Pellet, PelletBundle, PlayerBundle, PlayerControlled, ScoreResource,
    SpawnPoint, Wall, WallBundle,
};
pub use ghost::ghost_movement_system;
pub use item::item_system;
pub use level::{level_system, spawn_level, BoardCleared, LevelLayout};
pub use movement::{Position, Velocity};
pub use player::{player_control_system, player_movement_system};
pub use state::{capture_system, GameStage, PlayerCaught, PlayerLives};
