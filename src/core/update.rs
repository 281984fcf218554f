use crate::core::{Direction, Grid, MoveOutcome, Vec2};

/// Decides what moving `player` one step in `direction` would do.
///
/// Out of bounds counts as wall. A box is only pushed onto a bare floor or
/// goal, never into a wall or another box. Nothing is mutated here; see
/// [`LevelState`](crate::level::LevelState) for committing the result.
pub fn resolve(grid: &Grid, player: Vec2, direction: Direction) -> MoveOutcome {
    let target = player + direction;
    let Some(dest) = grid.get(&target) else {
        return MoveOutcome::Blocked;
    };

    if dest.is_box() {
        let beyond = target + direction;
        return match grid.get(&beyond) {
            Some(cell) if cell.is_walkable() => MoveOutcome::MovedWithPush {
                new_player: target,
                box_from: target,
                box_to: beyond,
            },
            _ => MoveOutcome::Blocked,
        };
    }

    if dest.is_walkable() {
        MoveOutcome::Moved { new_player: target }
    } else {
        MoveOutcome::Blocked
    }
}

/// Writes the box relabelling of a push into `grid`. Plain moves leave the
/// grid untouched since the player is not a grid symbol.
pub(crate) fn commit(grid: &mut Grid, outcome: &MoveOutcome) {
    if let MoveOutcome::MovedWithPush { box_from, box_to, .. } = outcome {
        grid[box_from] = grid[box_from].without_box();
        grid[box_to] = grid[box_to].with_box();
    }
}
