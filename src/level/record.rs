use serde::{Deserialize, Serialize};
use crate::core::{Cell, Vec2};
use crate::error::LevelError;

/// Initial contents of one position as supplied by a level loader. Unlike
/// [`Cell`] this can mark where the player starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
}

impl Tile {
    pub fn from_symbol(ch: char) -> Option<Tile> {
        let tile = match ch {
            '#' => Tile::Wall,
            ' ' | '-' | '_' => Tile::Floor,
            '.' => Tile::Goal,
            '$' => Tile::Box,
            '*' => Tile::BoxOnGoal,
            '@' => Tile::Player,
            '+' => Tile::PlayerOnGoal,
            _ => return None,
        };
        Some(tile)
    }

    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Goal => '.',
            Tile::Box => '$',
            Tile::BoxOnGoal => '*',
            Tile::Player => '@',
            Tile::PlayerOnGoal => '+',
        }
    }

    /// The tile for a grid cell, marking the player if they stand on it.
    /// Cells holding a box or wall ignore `player`.
    pub fn from_cell(cell: Cell, player: bool) -> Tile {
        match (cell, player) {
            (Cell::Floor, true) => Tile::Player,
            (Cell::Goal, true) => Tile::PlayerOnGoal,
            (Cell::Wall, _) => Tile::Wall,
            (Cell::Floor, _) => Tile::Floor,
            (Cell::Goal, _) => Tile::Goal,
            (Cell::Box, _) => Tile::Box,
            (Cell::BoxOnGoal, _) => Tile::BoxOnGoal,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Tile::Player | Tile::PlayerOnGoal)
    }

    /// The grid symbol underneath, with any player marker removed.
    pub fn cell(&self) -> Cell {
        match self {
            Tile::Wall => Cell::Wall,
            Tile::Floor | Tile::Player => Cell::Floor,
            Tile::Goal | Tile::PlayerOnGoal => Cell::Goal,
            Tile::Box => Cell::Box,
            Tile::BoxOnGoal => Cell::BoxOnGoal,
        }
    }
}

/// One level as handed over by a loader: its number and the initial tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub number: u32,
    pub rows: Vec<Vec<Tile>>,
}

impl LevelRecord {
    pub fn new(number: u32, rows: Vec<Vec<Tile>>) -> Self {
        LevelRecord { number, rows }
    }

    /// Maps each character of `rows` to a tile. Short rows are padded with
    /// floor up to the widest row. Empty lines are skipped; rows of spaces
    /// are open floor and kept.
    pub fn from_rows<S: AsRef<str>>(number: u32, rows: &[S]) -> Result<Self, LevelError> {
        let lines: Vec<&str> = rows
            .iter()
            .map(|line| line.as_ref().trim_end_matches(['\n', '\r']))
            .filter(|line| !line.is_empty())
            .collect();
        let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut tiles = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut tile_row = Vec::with_capacity(max_width);
            for (col, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or(LevelError::UnknownSymbol {
                    level: number,
                    symbol,
                    row,
                    col,
                })?;
                tile_row.push(tile);
            }
            tile_row.resize(max_width, Tile::Floor);
            tiles.push(tile_row);
        }

        Ok(LevelRecord::new(number, tiles))
    }

    /// Same as [`LevelRecord::from_rows`] for a single block of text.
    pub fn from_text(number: u32, text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text.lines().collect();
        LevelRecord::from_rows(number, &lines)
    }

    /// Checks the shape and player start, returning the grid cells and the
    /// player position.
    pub(crate) fn validate(&self) -> Result<(Vec<Vec<Cell>>, Vec2), LevelError> {
        let level = self.number;
        let Some(first) = self.rows.first() else {
            return Err(LevelError::Empty { level });
        };
        let expected = first.len();
        if expected == 0 {
            return Err(LevelError::Empty { level });
        }

        let mut player = None;
        let mut cells = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(LevelError::RaggedRow {
                    level,
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            for (j, tile) in row.iter().enumerate() {
                if tile.is_player() {
                    if player.is_some() {
                        return Err(LevelError::MultiplePlayers { level });
                    }
                    player = Some(Vec2 {
                        i: i as i32,
                        j: j as i32,
                    });
                }
            }
            cells.push(row.iter().map(Tile::cell).collect());
        }

        let player = player.ok_or(LevelError::MissingPlayer { level })?;
        Ok((cells, player))
    }
}
