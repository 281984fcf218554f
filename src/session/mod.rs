use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::config::SessionConfig;
use crate::core::Direction;
use crate::error::SessionError;
use crate::level::{LevelRecord, LevelSnapshot, LevelState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Blocked, or the session is already over.
    Ignored,
    Advanced,
    LevelCompleted,
    GameCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress { level_number: u32 },
    Completed,
}

/// Plays a fixed sequence of levels in order. Every level is validated and
/// loaded up front.
#[derive(Clone, Debug)]
pub struct GameSession {
    levels: Vec<LevelState>,
    active: usize,
    completed: bool,
}

impl GameSession {
    pub fn new(records: &[LevelRecord], config: &SessionConfig) -> Result<Self, SessionError> {
        if records.is_empty() {
            return Err(SessionError::NoLevels);
        }
        let count = records.len();
        if config.start_level == 0 || config.start_level > count {
            return Err(SessionError::StartLevelOutOfRange {
                start: config.start_level,
                count,
            });
        }

        let levels = records
            .iter()
            .map(|record| {
                LevelState::new(record)
                    .map(|level| level.with_history_limit(config.history_limit))
                    .inspect_err(|err| warn!(%err, "rejected level record"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let session = GameSession {
            levels,
            active: config.start_level - 1,
            completed: false,
        };
        info!(levels = count, start = config.start_level, "session started");
        Ok(session)
    }

    pub fn handle_move(&mut self, direction: Direction) -> MoveResult {
        if self.completed {
            return MoveResult::Ignored;
        }

        let level = &mut self.levels[self.active];
        if !level.apply_move(direction) {
            return MoveResult::Ignored;
        }
        if !level.is_completed() {
            return MoveResult::Advanced;
        }

        let solved = level.number();
        if self.active + 1 == self.levels.len() {
            self.completed = true;
            info!(level = solved, "all levels solved");
            MoveResult::GameCompleted
        } else {
            self.active += 1;
            debug!(level = self.levels[self.active].number(), "advanced to next level");
            MoveResult::LevelCompleted
        }
    }

    pub fn restart_current(&mut self) {
        if let Some(level) = self.active_level_mut() {
            level.restart();
        }
    }

    pub fn undo(&mut self) -> bool {
        self.active_level_mut().is_some_and(LevelState::undo)
    }

    pub fn status(&self) -> SessionStatus {
        match self.active_level() {
            Some(level) => SessionStatus::InProgress {
                level_number: level.number(),
            },
            None => SessionStatus::Completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn active_level_snapshot(&self) -> Option<LevelSnapshot> {
        self.active_level().map(LevelState::snapshot)
    }

    pub fn active_level(&self) -> Option<&LevelState> {
        if self.completed {
            return None;
        }
        self.levels.get(self.active)
    }

    /// 0-based index of the level being played.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn active_level_mut(&mut self) -> Option<&mut LevelState> {
        if self.completed {
            return None;
        }
        self.levels.get_mut(self.active)
    }
}
