//! The game core: world construction, per-tick orchestration, and the
//! renderer-facing snapshot.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{error, info, trace, warn};

use crate::constants::{BOARD_CELL_SIZE, RAW_BOARD};
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::map::direction::Direction;
use crate::map::parser::BoardParser;
use crate::systems::state::{GameStage, PlayerCaught, PlayerLives};
use crate::systems::{
    capture_system, collision_system, ghost_movement_system, item_system, level_system, player_control_system,
    player_movement_system, spawn_level, BoardCleared, GameRng, Ghost, LevelLayout, Pellet, PlayerControlled, Position,
    ScoreResource, Velocity, Wall,
};

/// The player's position and facing direction, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorView {
    pub position: IVec2,
    pub facing: Direction,
}

/// One adversary's position and kind, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostView {
    pub position: IVec2,
    pub kind: Ghost,
}

/// Read-only view of the world for an external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub player: ActorView,
    pub ghosts: SmallVec<[GhostView; 4]>,
    pub walls: Vec<IVec2>,
    pub pellets: Vec<IVec2>,
    pub score: u32,
    pub lives: u8,
    pub game_over: bool,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Owns a `World` holding every entity and resource and a `Schedule`
/// defining the per-tick system order. The embedding application drives it:
/// call [`GameWorld::tick`] at a fixed cadence, feed inputs through
/// [`GameWorld::set_player_direction`], and draw from
/// [`GameWorld::snapshot`].
pub struct GameWorld {
    world: World,
    schedule: Schedule,
}

impl GameWorld {
    /// Creates a game on the built-in board with an entropy-seeded RNG.
    pub fn new() -> GameResult<Self> {
        Self::build(RAW_BOARD, SmallRng::from_os_rng())
    }

    /// Creates a game on the built-in board with a fixed RNG seed, for
    /// reproducible adversary behavior.
    pub fn with_seed(seed: u64) -> GameResult<Self> {
        Self::build(RAW_BOARD, SmallRng::seed_from_u64(seed))
    }

    /// Creates a game on a custom board of the same fixed grid shape.
    pub fn custom(board: [&str; BOARD_CELL_SIZE.y as usize], seed: u64) -> GameResult<Self> {
        Self::build(board, SmallRng::seed_from_u64(seed))
    }

    fn build(board: [&str; BOARD_CELL_SIZE.y as usize], rng: SmallRng) -> GameResult<Self> {
        let layout = BoardParser::parse_board(board)?;

        let mut world = World::default();
        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<GameError>(&mut world);

        world.insert_resource(LevelLayout(layout));
        world.insert_resource(GameRng(rng));
        world.insert_resource(ScoreResource::default());
        world.insert_resource(PlayerLives::default());
        world.insert_resource(GameStage::default());
        world.insert_resource(PlayerCaught::default());
        world.insert_resource(BoardCleared::default());

        spawn_level(&mut world);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                player_control_system,
                player_movement_system,
                collision_system,
                capture_system,
                ghost_movement_system,
                item_system,
                level_system,
            )
                .chain(),
        );

        info!("game world initialized");
        Ok(Self { world, schedule })
    }

    /// Advances the game by one fixed step.
    ///
    /// A no-op once the stage is `GameOver`; call [`GameWorld::restart`] to
    /// resume.
    pub fn tick(&mut self) {
        if !self.world.resource::<GameStage>().is_playing() {
            trace!("tick ignored, game over");
            return;
        }

        self.world.resource_mut::<PlayerCaught>().0 = false;
        self.schedule.run(&mut self.world);
        self.drain_errors();
        self.world.resource_mut::<Events<GameEvent>>().update();
    }

    /// Buffers a direction intent for the player.
    ///
    /// Intents are applied atomically at the next tick boundary, validated
    /// against the walls; an impossible turn leaves the player on its
    /// previous heading.
    pub fn set_player_direction(&mut self, direction: Direction) {
        self.world.send_event(GameEvent::Command(GameCommand::SetDirection(direction)));
    }

    /// Restarts a finished game: reloads the board, resets score and lives,
    /// and returns to `Playing`. Ignored while a game is still in progress.
    pub fn restart(&mut self) {
        if self.world.resource::<GameStage>().is_playing() {
            warn!("restart ignored while playing");
            return;
        }

        info!("restarting game");
        self.world.resource_mut::<Events<GameEvent>>().clear();
        self.world.insert_resource(ScoreResource::default());
        self.world.insert_resource(PlayerLives::default());
        self.world.insert_resource(GameStage::Playing);
        self.world.insert_resource(PlayerCaught::default());
        self.world.insert_resource(BoardCleared::default());
        spawn_level(&mut self.world);
    }

    /// Captures a read-only view of the current state for a renderer.
    pub fn snapshot(&mut self) -> Snapshot {
        let player = {
            let mut query = self.world.query_filtered::<(&Position, &Velocity), With<PlayerControlled>>();
            match query.single(&self.world) {
                Ok((position, velocity)) => ActorView {
                    position: position.0,
                    facing: velocity.direction,
                },
                Err(_) => {
                    error!("snapshot taken without a player entity");
                    ActorView {
                        position: IVec2::ZERO,
                        facing: Direction::default(),
                    }
                }
            }
        };

        let ghosts = {
            let mut query = self.world.query::<(&Position, &Ghost)>();
            query
                .iter(&self.world)
                .map(|(position, kind)| GhostView {
                    position: position.0,
                    kind: *kind,
                })
                .collect()
        };

        let walls = {
            let mut query = self.world.query_filtered::<&Position, With<Wall>>();
            query.iter(&self.world).map(|position| position.0).collect()
        };

        let pellets = {
            let mut query = self.world.query_filtered::<&Position, With<Pellet>>();
            query.iter(&self.world).map(|position| position.0).collect()
        };

        Snapshot {
            player,
            ghosts,
            walls,
            pellets,
            score: self.world.resource::<ScoreResource>().0,
            lives: self.world.resource::<PlayerLives>().0,
            game_over: !self.world.resource::<GameStage>().is_playing(),
        }
    }

    fn drain_errors(&mut self) {
        let mut events = self.world.resource_mut::<Events<GameError>>();
        for err in events.drain() {
            error!(%err, "tick reported an inconsistency");
        }
    }
}
