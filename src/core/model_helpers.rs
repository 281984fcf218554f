use std::ops::Add;
use crate::core::{Cell, Direction, Grid, Vec2};

impl Cell {
    pub fn is_box(&self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnGoal)
    }

    /// Floor or goal with nothing on it.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Goal)
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Cell::Goal | Cell::BoxOnGoal)
    }

    /// The symbol left behind once a box leaves this cell.
    pub fn without_box(self) -> Cell {
        match self {
            Cell::BoxOnGoal => Cell::Goal,
            Cell::Box => Cell::Floor,
            other => other,
        }
    }

    /// The symbol this cell takes once a box enters it.
    pub fn with_box(self) -> Cell {
        if self.is_goal() {
            Cell::BoxOnGoal
        } else {
            Cell::Box
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Add<Direction> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.delta()
    }
}

impl Grid {
    /// Solved once no plain box remains. Empty goals do not matter.
    pub fn is_completed(&self) -> bool {
        self.count(Cell::Box) == 0
    }

    pub fn box_count(&self) -> usize {
        self.count(Cell::Box) + self.count(Cell::BoxOnGoal)
    }

    pub fn goal_count(&self) -> usize {
        self.count(Cell::Goal) + self.count(Cell::BoxOnGoal)
    }
}
