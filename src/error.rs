//! Centralized error types for the game core.
//!
//! Board parsing is the only operation that can fail outright; everything at
//! runtime is defensive state correction. Systems report internal
//! inconsistencies as `GameError` events which `tick()` drains and logs.

use bevy_ecs::event::Event;

/// Main error type for the game core.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Board has no player start cell")]
    MissingPlayerStart,

    #[error("Board must have exactly one player start cell, found {0}")]
    MultiplePlayerStarts(usize),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
