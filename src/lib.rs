// Sokoban rules engine: move legality, box pushes, completion, restart and undo.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' floor.
// Rendering, input devices and level files belong to whoever embeds this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod level;
pub mod session;
#[cfg(test)]
mod test;

pub use crate::config::SessionConfig;
pub use crate::core::{resolve, Cell, Direction, Grid, MoveOutcome, Vec2};
pub use crate::error::{LevelError, SessionError};
pub use crate::level::{LevelRecord, LevelSnapshot, LevelState, Tile};
pub use crate::session::{GameSession, MoveResult, SessionStatus};
