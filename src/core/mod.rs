mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;

pub use models::{Cell, Direction, Grid, MoveOutcome, Vec2};
pub use consts::*;
pub use update::resolve;
pub(crate) use update::commit;
