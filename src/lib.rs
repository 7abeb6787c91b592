//! Maze-chase arcade game core.
//!
//! The crate owns simulation state only: an external driver calls
//! [`game::GameWorld::tick`] at a fixed cadence and feeds direction intents,
//! while an external renderer reads [`game::GameWorld::snapshot`]. Windowing,
//! input plumbing, and drawing live outside this crate.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod systems;
