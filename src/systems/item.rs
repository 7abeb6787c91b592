//! Pellet consumption and scoring.

use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use tracing::trace;

use crate::constants::PELLET_SCORE;
use crate::events::GameEvent;
use crate::systems::components::{Pellet, ScoreResource};
use crate::systems::level::BoardCleared;
use crate::systems::state::{GameStage, PlayerCaught};

/// Consumes at most one pellet the player overlaps this tick, awarding the
/// fixed score delta. Eating the last pellet flags the board as cleared for
/// the level system to reload.
pub fn item_system(
    stage: Res<GameStage>,
    caught: Res<PlayerCaught>,
    mut score: ResMut<ScoreResource>,
    mut cleared: ResMut<BoardCleared>,
    mut commands: Commands,
    mut collisions: EventReader<GameEvent>,
    pellets: Query<(), With<Pellet>>,
) {
    if !stage.is_playing() || caught.0 {
        collisions.clear();
        return;
    }

    let mut consumed = false;
    for event in collisions.read() {
        if consumed {
            continue;
        }
        let GameEvent::Collision(_, other) = *event else {
            continue;
        };
        if pellets.get(other).is_err() {
            continue;
        }

        commands.entity(other).despawn();
        score.0 += PELLET_SCORE;
        consumed = true;
        trace!(score = score.0, "pellet consumed");

        if pellets.iter().count() == 1 {
            // The pellet being despawned was the last one on the board.
            cleared.0 = true;
        }
    }
}
