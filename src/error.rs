use thiserror::Error;

/// Reasons a level record is refused before it can be played.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level {level}: grid has no rows")]
    Empty { level: u32 },

    #[error("level {level}: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        level: u32,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level {level}: no player start")]
    MissingPlayer { level: u32 },

    #[error("level {level}: more than one player start")]
    MultiplePlayers { level: u32 },

    #[error("level {level}: unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        level: u32,
        symbol: char,
        row: usize,
        col: usize,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a session needs at least one level")]
    NoLevels,

    #[error("start level {start} is outside 1..={count}")]
    StartLevelOutOfRange { start: usize, count: usize },

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}
