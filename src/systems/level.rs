//! Level population and reload.

use bevy_ecs::entity::Entity;
use bevy_ecs::query::{Or, With};
use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use glam::UVec2;
use tracing::info;

use crate::constants::{ACTOR_SIZE, PELLET_SIZE, TILE_SIZE};
use crate::map::direction::Direction;
use crate::map::parser::ParsedBoard;
use crate::systems::collision::Aabb;
use crate::systems::components::{
    Collider, GameRng, Ghost, GhostBundle, Pellet, PelletBundle, PlayerBundle, PlayerControlled, SpawnPoint, Wall,
    WallBundle,
};
use crate::systems::ghost::randomize_direction;
use crate::systems::movement::{Position, Velocity};
use crate::systems::state::{GameStage, PlayerCaught};

/// The parsed board layout the level is (re)built from.
#[derive(Resource, Debug, Clone)]
pub struct LevelLayout(pub ParsedBoard);

/// Set for the remainder of a tick once the last pellet has been consumed.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct BoardCleared(pub bool);

/// Despawns every board entity and repopulates the world from the stored
/// layout: walls, pellets, the player, and the adversaries with fresh random
/// headings. Score, lives, and stage are untouched.
pub fn spawn_level(world: &mut World) {
    let mut stale_query = world.query_filtered::<Entity, Or<(With<Wall>, With<Pellet>, With<Ghost>, With<PlayerControlled>)>>();
    let stale: Vec<Entity> = stale_query.iter(world).collect();
    for entity in stale {
        world.despawn(entity);
    }

    let layout = world.resource::<LevelLayout>().0.clone();
    let wall_boxes: Vec<Aabb> = layout
        .walls
        .iter()
        .map(|pos| Aabb::new(*pos, UVec2::splat(TILE_SIZE)))
        .collect();

    // Draw the adversaries' spawn headings up front so the RNG borrow ends
    // before any spawning.
    let headings: Vec<Velocity> = {
        let mut rng = world.resource_mut::<GameRng>();
        layout
            .ghost_starts
            .iter()
            .map(|(_, start)| {
                let mut velocity = Velocity::stopped(Direction::default());
                let collider = Collider { size: ACTOR_SIZE };
                randomize_direction(&Position(*start), &collider, &mut velocity, &wall_boxes, &mut rng.0);
                velocity
            })
            .collect()
    };

    for position in &layout.walls {
        world.spawn(WallBundle {
            wall: Wall,
            position: Position(*position),
            collider: Collider {
                size: UVec2::splat(TILE_SIZE),
            },
        });
    }

    for position in &layout.pellets {
        world.spawn(PelletBundle {
            pellet: Pellet,
            position: Position(*position),
            collider: Collider { size: PELLET_SIZE },
        });
    }

    world.spawn(PlayerBundle {
        player: PlayerControlled,
        position: Position(layout.player_start),
        velocity: Velocity::stopped(Direction::default()),
        spawn_point: SpawnPoint(layout.player_start),
        collider: Collider { size: ACTOR_SIZE },
    });

    for ((kind, start), velocity) in layout.ghost_starts.iter().zip(headings) {
        world.spawn(GhostBundle {
            ghost: *kind,
            position: Position(*start),
            velocity,
            spawn_point: SpawnPoint(*start),
            collider: Collider { size: ACTOR_SIZE },
        });
    }

    info!(
        walls = layout.walls.len(),
        pellets = layout.pellets.len(),
        ghosts = layout.ghost_starts.len(),
        "level populated"
    );
}

/// Reloads the level once the pellet set has been emptied this tick. Runs
/// last in the schedule so the final pellet's despawn has been applied.
pub fn level_system(world: &mut World) {
    if !world.resource::<GameStage>().is_playing() || world.resource::<PlayerCaught>().0 {
        return;
    }
    if !world.resource::<BoardCleared>().0 {
        return;
    }

    world.resource_mut::<BoardCleared>().0 = false;
    info!("board cleared, reloading level");
    spawn_level(world);
}
