//! Adversary movement: blind forward motion with randomized redirection.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::{BOARD_PIXEL_SIZE, STEP_SPEED};
use crate::map::direction::Direction;
use crate::systems::collision::{aabb, Aabb};
use crate::systems::components::{Collider, GameRng, Ghost, Wall};
use crate::systems::movement::{self, Position, Velocity};
use crate::systems::state::{GameStage, PlayerCaught};

/// Moves each adversary by its velocity and re-picks its heading when the
/// move is rejected by a wall or leaves the horizontal playfield bounds (the
/// side tunnels open onto those bounds).
pub fn ghost_movement_system(
    stage: Res<GameStage>,
    caught: Res<PlayerCaught>,
    mut rng: ResMut<GameRng>,
    walls: Query<(&Position, &Collider), (With<Wall>, Without<Ghost>)>,
    mut ghosts: Query<(&mut Position, &mut Velocity, &Collider), With<Ghost>>,
) {
    // A capture consumes the whole tick; adversaries hold still.
    if !stage.is_playing() || caught.0 {
        return;
    }

    let wall_boxes: Vec<Aabb> = walls.iter().map(|(pos, col)| aabb(pos, col)).collect();

    for (mut position, mut velocity, collider) in ghosts.iter_mut() {
        let blocked = movement::step(&mut position, collider, &velocity, &wall_boxes);
        let escaped = position.0.x < 0 || position.0.x + collider.size.x as i32 > BOARD_PIXEL_SIZE.x as i32;

        if blocked || escaped {
            redirect(&mut position, collider, &mut velocity, &wall_boxes, &mut rng.0);
        }
    }
}

/// Shuffles the four cardinal directions and turns toward the first one whose
/// step validates. An adversary boxed in on all sides keeps its heading and
/// stays put until a wall opens up (it never does; that case is terminal).
fn redirect(position: &mut Position, collider: &Collider, velocity: &mut Velocity, walls: &[Aabb], rng: &mut SmallRng) {
    let mut candidates: SmallVec<[Direction; 4]> = SmallVec::from_slice(&Direction::DIRECTIONS);
    candidates.shuffle(rng);

    for direction in candidates {
        if movement::apply_direction(position, collider, velocity, direction, walls) {
            trace!(direction = direction.as_ref(), "adversary redirected");
            return;
        }
    }
    trace!("adversary boxed in, keeping heading");
}

/// Assigns a random valid heading to a freshly placed adversary.
///
/// Same shuffled scan as the in-tick redirection, but the probe step is never
/// kept: the adversary stays exactly on its spawn point. Leaves the velocity
/// stopped when every direction is walled off.
pub fn randomize_direction(position: &Position, collider: &Collider, velocity: &mut Velocity, walls: &[Aabb], rng: &mut SmallRng) {
    let mut candidates: SmallVec<[Direction; 4]> = SmallVec::from_slice(&Direction::DIRECTIONS);
    candidates.shuffle(rng);

    for direction in candidates {
        if direction_is_open(position, collider, direction, walls) {
            velocity.face(direction);
            return;
        }
    }
}

fn direction_is_open(position: &Position, collider: &Collider, direction: Direction, walls: &[Aabb]) -> bool {
    let probe = Aabb::new(position.0 + direction.as_ivec2() * STEP_SPEED, collider.size);
    !walls.iter().any(|wall| probe.intersects(wall))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACTOR_SIZE, TILE_SIZE};
    use glam::{IVec2, UVec2};
    use rand::SeedableRng;

    fn wall_at(x: i32, y: i32) -> Aabb {
        Aabb::new(IVec2::new(x, y), UVec2::splat(TILE_SIZE))
    }

    #[test]
    fn test_randomize_direction_picks_the_open_side() {
        // Walls above, left, and right; only Down is open.
        let walls = [wall_at(64, 32), wall_at(32, 64), wall_at(96, 64)];
        let position = Position(IVec2::new(64, 64));
        let collider = Collider { size: ACTOR_SIZE };

        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut velocity = Velocity::stopped(Direction::Right);
            randomize_direction(&position, &collider, &mut velocity, &walls, &mut rng);

            assert_eq!(velocity.direction, Direction::Down);
            assert_eq!(velocity.delta, IVec2::new(0, STEP_SPEED));
        }
    }

    #[test]
    fn test_randomize_direction_sealed_stays_stopped() {
        let walls = [wall_at(64, 32), wall_at(32, 64), wall_at(96, 64), wall_at(64, 96)];
        let position = Position(IVec2::new(64, 64));
        let collider = Collider { size: ACTOR_SIZE };

        let mut rng = SmallRng::seed_from_u64(0);
        let mut velocity = Velocity::stopped(Direction::Left);
        randomize_direction(&position, &collider, &mut velocity, &walls, &mut rng);

        assert_eq!(velocity.direction, Direction::Left);
        assert_eq!(velocity.delta, IVec2::ZERO);
    }

    #[test]
    fn test_redirect_leaves_position_legal() {
        // A corner: open cells down and right of the entity.
        let walls = [wall_at(64, 32), wall_at(32, 64)];
        let collider = Collider { size: ACTOR_SIZE };

        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut position = Position(IVec2::new(64, 64));
            let mut velocity = Velocity::stopped(Direction::Up);
            velocity.face(Direction::Up);

            redirect(&mut position, &collider, &mut velocity, &walls, &mut rng);

            let hitbox = Aabb::new(position.0, collider.size);
            assert!(!walls.iter().any(|w| hitbox.intersects(w)));
            assert_ne!(velocity.delta, IVec2::ZERO);
        }
    }
}
