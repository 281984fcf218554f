mod record;
mod state;

pub use record::{LevelRecord, Tile};
pub use state::{LevelSnapshot, LevelState};
