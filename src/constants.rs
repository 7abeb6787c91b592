//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

use crate::systems::components::Ghost;

/// The interval the external driver is expected to call `tick()` at.
///
/// The core owns no timer; this is advisory for the embedding application.
pub const TICK_DURATION: Duration = Duration::from_millis(50);

/// The side length of a board tile, in pixels.
pub const TILE_SIZE: u32 = 32;
/// The size of the game board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(19, 21);
/// The size of the game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * TILE_SIZE, BOARD_CELL_SIZE.y * TILE_SIZE);

/// Distance an actor covers per tick once it has a heading, in pixels.
pub const STEP_SPEED: i32 = (TILE_SIZE / 4) as i32;

/// The hitbox size of the player and the adversaries, in pixels.
pub const ACTOR_SIZE: UVec2 = UVec2::splat(TILE_SIZE);
/// Offset of a pellet's hitbox from its tile's top-left corner, in pixels.
pub const PELLET_OFFSET: UVec2 = UVec2::new(14, 14);
/// The hitbox size of a pellet, in pixels.
pub const PELLET_SIZE: UVec2 = UVec2::new(4, 4);

/// Points awarded per consumed pellet.
pub const PELLET_SCORE: u32 = 10;
/// Number of lives a fresh game starts with.
pub const STARTING_LIVES: u8 = 3;

/// An enum representing the different types of tiles on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// A wall tile.
    Wall,
    /// A tile holding a pellet.
    Pellet,
    /// An open corridor tile without a pellet.
    Open,
    /// An adversary's starting position, tagged with its kind.
    GhostStart(Ghost),
    /// The player's starting position.
    PlayerStart,
}

/// The raw layout of the game board, as a 2D array of characters.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(TICK_DURATION, Duration::from_millis(50));
    }

    #[test]
    fn test_step_speed_divides_tile() {
        // Actors stay grid-aligned only if a whole number of steps spans a tile.
        assert_eq!(TILE_SIZE as i32 % STEP_SPEED, 0);
        assert_eq!(STEP_SPEED, 8);
    }

    #[test]
    fn test_raw_board_dimensions() {
        assert_eq!(RAW_BOARD.len(), BOARD_CELL_SIZE.y as usize);
        for row in RAW_BOARD.iter() {
            assert_eq!(row.len(), BOARD_CELL_SIZE.x as usize);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == 'X'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == 'X'));
    }

    #[test]
    fn test_raw_board_single_player_start() {
        let count: usize = RAW_BOARD.iter().map(|row| row.chars().filter(|&c| c == 'P').count()).sum();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_raw_board_four_adversaries() {
        for marker in ['b', 'o', 'p', 'r'] {
            let count: usize = RAW_BOARD.iter().map(|row| row.chars().filter(|&c| c == marker).count()).sum();
            assert_eq!(count, 1, "expected exactly one '{marker}' marker");
        }
    }

    #[test]
    fn test_raw_board_tunnel_row() {
        // The side tunnels are the only cells that open onto the horizontal bounds.
        let tunnel_row = RAW_BOARD[9];
        assert_eq!(tunnel_row.chars().next().unwrap(), 'O');
        assert_eq!(tunnel_row.chars().last().unwrap(), 'O');
    }

    #[test]
    fn test_pellet_fits_inside_tile() {
        assert!(PELLET_OFFSET.x + PELLET_SIZE.x <= TILE_SIZE);
        assert!(PELLET_OFFSET.y + PELLET_SIZE.y <= TILE_SIZE);
    }
}
