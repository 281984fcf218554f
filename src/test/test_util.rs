pub use dissimilar::diff as __diff;
use crate::core::{Direction, MoveOutcome, Vec2};
use crate::level::{LevelRecord, LevelSnapshot, LevelState, Tile};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        $crate::assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub fn record(number: u32, level: &str) -> LevelRecord {
    LevelRecord::from_text(number, level).expect("test level should parse")
}

/// Draws a snapshot with the usual one-character symbols, player included.
pub fn render_snapshot_to_string(snapshot: &LevelSnapshot) -> String {
    let mut result = String::new();
    for (i, row) in snapshot.grid.iter().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            let here = Vec2 { i: i as i32, j: j as i32 };
            let ch = Tile::from_cell(c, here == snapshot.player).symbol();
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub struct GameTestState {
    pub level: LevelState,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let level = LevelState::new(&record(1, level)).expect("test level should be valid");
        Self { level }
    }

    pub fn game_to_string(&self) -> String {
        render_snapshot_to_string(&self.level.snapshot()).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.level.step(direction);
        if outcome == MoveOutcome::Blocked {
            panic!("Expected {:?} to move, got {:?}, in map\n{}", direction, outcome, self.game_to_string());
        }
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_blocked(&mut self, direction: Direction) {
        let before = self.game_to_string();
        let outcome = self.level.step(direction);
        assert_eq!(outcome, MoveOutcome::Blocked, "expected {:?} to be blocked in map\n{}", direction, before);
        let after = self.game_to_string();
        assert_eq_text!(before.as_str(), after.as_str());
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.level.step(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
