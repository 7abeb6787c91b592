use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;

use crate::map::direction::Direction;

/// Commands issued by the embedding application between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    SetDirection(Direction),
}

/// Events flowing between systems during a tick.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The player's hitbox overlaps another entity's hitbox. The first entity
    /// is always the player.
    Collision(Entity, Entity),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
