//! High-level game state: stage, lives, and player-adversary contact.

use bevy_ecs::event::EventReader;
use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, ResMut};
use tracing::{debug, info};

use crate::constants::STARTING_LIVES;
use crate::events::GameEvent;
use crate::systems::collision::{aabb, Aabb};
use crate::systems::components::{Collider, GameRng, Ghost, SpawnPoint, Wall};
use crate::systems::ghost::randomize_direction;
use crate::systems::movement::{Position, Velocity};

/// A resource tracking the overall stage of the game.
///
/// `Playing` transitions to `GameOver` when the last life is lost; the only
/// way back is an explicit restart command.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    #[default]
    Playing,
    GameOver,
}

impl GameStage {
    pub fn is_playing(self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// A resource to store the number of player lives.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLives(pub u8);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

/// Set while an adversary has caught the player this tick.
///
/// A capture consumes the whole tick: adversary movement, pellet pickup, and
/// the level-clear check all stand down. Cleared at the next tick boundary.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerCaught(pub bool);

/// Resolves player-adversary contact.
///
/// At most one life is lost per tick, no matter how many adversaries overlap
/// the player. While lives remain, every actor snaps back to its spawn point
/// and the adversaries draw fresh random headings; on the last life the stage
/// flips to `GameOver` and positions are left where they were.
#[allow(clippy::too_many_arguments)]
pub fn capture_system(
    mut stage: ResMut<GameStage>,
    mut lives: ResMut<PlayerLives>,
    mut caught: ResMut<PlayerCaught>,
    mut rng: ResMut<GameRng>,
    mut collisions: EventReader<GameEvent>,
    ghost_tags: Query<(), With<Ghost>>,
    walls: Query<(&Position, &Collider), With<Wall>>,
    mut actors: Query<(&mut Position, &mut Velocity, &SpawnPoint, &Collider, Option<&Ghost>), Without<Wall>>,
) {
    if !stage.is_playing() {
        collisions.clear();
        return;
    }

    let mut captured = false;
    for event in collisions.read() {
        if captured {
            continue;
        }
        let GameEvent::Collision(_, other) = *event else {
            continue;
        };
        if ghost_tags.get(other).is_ok() {
            captured = true;
        }
    }

    if !captured {
        return;
    }

    lives.0 = lives.0.saturating_sub(1);
    caught.0 = true;
    debug!(lives = lives.0, "player caught by adversary");

    if lives.0 == 0 {
        info!("out of lives, game over");
        *stage = GameStage::GameOver;
        return;
    }

    let wall_boxes: Vec<Aabb> = walls.iter().map(|(pos, col)| aabb(pos, col)).collect();

    for (mut position, mut velocity, spawn, collider, ghost) in actors.iter_mut() {
        position.0 = spawn.0;
        *velocity = Velocity::stopped(velocity.direction);
        if ghost.is_some() {
            randomize_direction(&position, collider, &mut velocity, &wall_boxes, &mut rng.0);
        }
    }
}
