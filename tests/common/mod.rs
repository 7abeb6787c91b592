#![allow(dead_code)]

use glam::UVec2;

use muncher::constants::{ACTOR_SIZE, BOARD_CELL_SIZE, TILE_SIZE};
use muncher::game::Snapshot;
use muncher::systems::Aabb;

/// Returns a board that is solid wall except for the given replacement rows.
pub fn walled_board(rows: &[(usize, &'static str)]) -> [&'static str; BOARD_CELL_SIZE.y as usize] {
    let mut board = ["XXXXXXXXXXXXXXXXXXX"; BOARD_CELL_SIZE.y as usize];
    for (index, row) in rows {
        board[*index] = row;
    }
    board
}

/// Panics if any actor hitbox in the snapshot overlaps any wall.
pub fn assert_no_wall_overlap(snapshot: &Snapshot) {
    let wall_boxes: Vec<Aabb> = snapshot
        .walls
        .iter()
        .map(|pos| Aabb::new(*pos, UVec2::splat(TILE_SIZE)))
        .collect();

    let player_box = Aabb::new(snapshot.player.position, ACTOR_SIZE);
    assert!(
        !wall_boxes.iter().any(|wall| player_box.intersects(wall)),
        "player at {:?} overlaps a wall",
        snapshot.player.position
    );

    for ghost in &snapshot.ghosts {
        let ghost_box = Aabb::new(ghost.position, ACTOR_SIZE);
        assert!(
            !wall_boxes.iter().any(|wall| ghost_box.intersects(wall)),
            "{:?} at {:?} overlaps a wall",
            ghost.kind,
            ghost.position
        );
    }
}
