//! Baseline admissible heuristic: summed Manhattan distance.

use super::state::State;

/// Sum, over every non-blank tile, of the Manhattan distance between its current cell and
/// its goal cell. Admissible and consistent for the unit-cost N-puzzle: each legal move
/// changes this value by exactly 1.
pub fn manhattan_distance(state: &State) -> u32 {
    let size = state.size();
    let mut total = 0u32;

    for (index, &tile) in state.cells().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let tile = tile as usize;
        let row = index / size;
        let col = index % size;
        let goal_row = (tile - 1) / size;
        let goal_col = (tile - 1) % size;
        total += row.abs_diff(goal_row) as u32 + col.abs_diff(goal_col) as u32;
    }

    total
}
