//! Player input application and per-tick player movement.

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::error::GameError;
use crate::events::{GameCommand, GameEvent};
use crate::systems::collision::{aabb, Aabb};
use crate::systems::components::{Collider, PlayerControlled, Wall};
use crate::systems::movement::{self, Position, Velocity};
use crate::systems::state::GameStage;

/// Applies buffered direction intents to the player.
///
/// Intents queue up between ticks and are applied here, at the tick boundary,
/// through the tentative-step validation: an intent whose first step would
/// land in a wall is discarded and the player keeps its previous heading.
pub fn player_control_system(
    stage: Res<GameStage>,
    mut events: EventReader<GameEvent>,
    walls: Query<(&Position, &Collider), (With<Wall>, Without<PlayerControlled>)>,
    mut players: Query<(&mut Position, &mut Velocity, &Collider), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    if !stage.is_playing() {
        events.clear();
        return;
    }

    let (mut position, mut velocity, collider) = match players.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("player control found no single player: {e}")));
            events.clear();
            return;
        }
    };

    let wall_boxes: Vec<Aabb> = walls.iter().map(|(pos, col)| aabb(pos, col)).collect();

    for event in events.read() {
        let GameEvent::Command(GameCommand::SetDirection(direction)) = *event else {
            continue;
        };
        let accepted = movement::apply_direction(&mut position, collider, &mut velocity, direction, &wall_boxes);
        trace!(direction = direction.as_ref(), accepted, "direction intent applied");
    }
}

/// Moves the player by its current velocity, rolling the move back when it
/// hits a wall. A blocked player keeps its heading; it is never redirected.
pub fn player_movement_system(
    stage: Res<GameStage>,
    walls: Query<(&Position, &Collider), (With<Wall>, Without<PlayerControlled>)>,
    mut players: Query<(&mut Position, &Velocity, &Collider), With<PlayerControlled>>,
) {
    if !stage.is_playing() {
        return;
    }

    let wall_boxes: Vec<Aabb> = walls.iter().map(|(pos, col)| aabb(pos, col)).collect();

    for (mut position, velocity, collider) in players.iter_mut() {
        let blocked = movement::step(&mut position, collider, velocity, &wall_boxes);
        if blocked {
            trace!("player blocked by wall");
        }
    }
}
