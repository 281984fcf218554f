use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::core::{commit, resolve, Cell, Direction, Grid, MoveOutcome, Vec2};
use crate::error::LevelError;
use crate::level::LevelRecord;

/// What a renderer needs to draw one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level_number: u32,
    pub grid: Vec<Vec<Cell>>,
    pub player: Vec2,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pristine {
    grid: Grid,
    player: Vec2,
}

/// One applied move with the symbols it overwrote, so it can be inverted
/// exactly. The push direction alone cannot tell goal from floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HistoryEntry {
    player_before: Vec2,
    outcome: MoveOutcome,
    replaced: Option<[(Vec2, Cell); 2]>,
}

#[derive(Clone, Debug)]
pub struct LevelState {
    number: u32,
    grid: Grid,
    player: Vec2,
    pristine: Pristine,
    history: VecDeque<HistoryEntry>,
    history_limit: Option<usize>,
    moves: usize,
    pushes: usize,
}

impl LevelState {
    pub fn new(record: &LevelRecord) -> Result<Self, LevelError> {
        let (cells, player) = record.validate()?;
        let grid = Grid::from_rows(cells);
        let pristine = Pristine {
            grid: grid.clone(),
            player,
        };
        Ok(LevelState {
            number: record.number,
            grid,
            player,
            pristine,
            history: VecDeque::new(),
            history_limit: None,
            moves: 0,
            pushes: 0,
        })
    }

    /// Caps the undo log; the oldest entries are dropped first.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn box_count(&self) -> usize {
        self.grid.box_count()
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.grid.count(Cell::BoxOnGoal)
    }

    pub fn goal_count(&self) -> usize {
        self.grid.goal_count()
    }

    pub fn is_completed(&self) -> bool {
        self.grid.is_completed()
    }

    /// Returns true iff the player moved.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.step(direction) != MoveOutcome::Blocked
    }

    /// Resolves and commits one move, returning what happened.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = resolve(&self.grid, self.player, direction);
        let (new_player, replaced) = match outcome {
            MoveOutcome::Blocked => {
                debug!(level = self.number, ?direction, "move blocked");
                return outcome;
            }
            MoveOutcome::Moved { new_player } => (new_player, None),
            MoveOutcome::MovedWithPush {
                new_player,
                box_from,
                box_to,
            } => (
                new_player,
                Some([(box_from, self.grid[&box_from]), (box_to, self.grid[&box_to])]),
            ),
        };

        commit(&mut self.grid, &outcome);
        self.history.push_back(HistoryEntry {
            player_before: self.player,
            outcome,
            replaced,
        });
        self.trim_history();

        self.player = new_player;
        self.moves += 1;
        if replaced.is_some() {
            self.pushes += 1;
        }
        debug!(level = self.number, ?direction, ?outcome, "move applied");

        if self.is_completed() {
            info!(level = self.number, moves = self.moves, pushes = self.pushes, "level solved");
        }
        outcome
    }

    /// Reverts the most recent applied move. No-op on an empty log.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop_back() else {
            return false;
        };

        if let Some(replaced) = entry.replaced {
            for (pos, cell) in replaced {
                self.grid[&pos] = cell;
            }
            self.pushes -= 1;
        }
        self.player = entry.player_before;
        self.moves -= 1;
        debug!(level = self.number, outcome = ?entry.outcome, "move undone");
        true
    }

    /// Back to the level as loaded. Counters and the undo log are cleared.
    pub fn restart(&mut self) {
        self.grid = self.pristine.grid.clone();
        self.player = self.pristine.player;
        self.history.clear();
        self.moves = 0;
        self.pushes = 0;
        debug!(level = self.number, "level restarted");
    }

    pub fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot {
            level_number: self.number,
            grid: self.grid.rows().to_vec(),
            player: self.player,
        }
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}
