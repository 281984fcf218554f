use serde::{Deserialize, Serialize};

/// One grid position. The player is never stored here, so the floor or goal
/// under the player is always recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
}

/// Row/column coordinate. `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a single move request would do to a level. Produced by
/// [`resolve`](crate::core::resolve) without touching any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Blocked,
    Moved {
        new_player: Vec2,
    },
    MovedWithPush {
        new_player: Vec2,
        box_from: Vec2,
        box_to: Vec2,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) rows: Vec<Vec<Cell>>,
    pub(crate) width: i32,
}
