use crate::core::models::{Cell, Grid, Vec2};

impl Grid {
    /// Builds a grid from rows that are already known to share one length.
    /// Callers outside the crate go through [`LevelRecord`](crate::level::LevelRecord)
    /// validation instead.
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.first().map(|row| row.len() as i32).unwrap_or(0);
        debug_assert!(
            rows.iter().all(|row| row.len() as i32 == width),
            "grid rows must share one width"
        );
        Grid { rows, width }
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height() && pos.j >= 0 && pos.j < self.width
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &c)| {
                (
                    Vec2 {
                        i: i as i32,
                        j: j as i32,
                    },
                    c,
                )
            })
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == cell).count()
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.rows[index.i as usize][index.j as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.rows[index.i as usize][index.j as usize]
    }
}
