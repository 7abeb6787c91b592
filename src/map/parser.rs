//! Board parsing functionality for converting raw layouts into structured data.

use glam::IVec2;

use crate::constants::{MapTile, BOARD_CELL_SIZE, PELLET_OFFSET, TILE_SIZE};
use crate::error::ParseError;
use crate::systems::components::Ghost;

/// Represents the parsed data from a raw board layout.
///
/// All positions are pixel coordinates of the entity's top-left corner;
/// pellets carry their in-tile offset already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoard {
    /// The player's starting position.
    pub player_start: IVec2,
    /// Each adversary's kind and starting position.
    pub ghost_starts: Vec<(Ghost, IVec2)>,
    /// Wall positions.
    pub walls: Vec<IVec2>,
    /// Pellet hitbox positions.
    pub pellets: Vec<IVec2>,
}

/// Parser for converting raw board layouts into structured board data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a map tile.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            'X' => Ok(MapTile::Wall),
            ' ' => Ok(MapTile::Pellet),
            'O' => Ok(MapTile::Open),
            'P' => Ok(MapTile::PlayerStart),
            'b' => Ok(MapTile::GhostStart(Ghost::Inky)),
            'o' => Ok(MapTile::GhostStart(Ghost::Clyde)),
            'p' => Ok(MapTile::GhostStart(Ghost::Pinky)),
            'r' => Ok(MapTile::GhostStart(Ghost::Blinky)),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured board data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters, or if it
    /// does not contain exactly one player start cell.
    pub fn parse_board(raw_board: [&str; BOARD_CELL_SIZE.y as usize]) -> Result<ParsedBoard, ParseError> {
        let mut player_starts: Vec<IVec2> = Vec::new();
        let mut ghost_starts = Vec::new();
        let mut walls = Vec::new();
        let mut pellets = Vec::new();

        for (row, line) in raw_board.iter().enumerate() {
            for (col, character) in line.chars().enumerate().take(BOARD_CELL_SIZE.x as usize) {
                let position = IVec2::new(col as i32, row as i32) * TILE_SIZE as i32;

                match Self::parse_character(character)? {
                    MapTile::Wall => walls.push(position),
                    MapTile::Pellet => pellets.push(position + PELLET_OFFSET.as_ivec2()),
                    MapTile::Open => {}
                    MapTile::GhostStart(kind) => ghost_starts.push((kind, position)),
                    MapTile::PlayerStart => player_starts.push(position),
                }
            }
        }

        let player_start = match player_starts.len() {
            0 => return Err(ParseError::MissingPlayerStart),
            1 => player_starts[0],
            n => return Err(ParseError::MultiplePlayerStarts(n)),
        };

        Ok(ParsedBoard {
            player_start,
            ghost_starts,
            walls,
            pellets,
        })
    }
}
