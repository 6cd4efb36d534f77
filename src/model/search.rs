//! The A* search loop: best-first expansion with stale-entry handling, partial-progress
//! return on budget or frontier exhaustion, and periodic father's-rule batching.
//!
//! Operates on `StateId` handles into a [`StateArena`] instead of cloning/hashing full
//! boards, with a budget/partial-path return and batched heuristic updates layered on top
//! of a plain best-first A* loop.

use log::{debug, trace};

use crate::config::SolveConfig;

use super::arena::{StateArena, StateId};
use super::closed_set::ClosedSet;
use super::heuristic::manhattan_distance;
use super::heuristic_store::HeuristicStore;
use super::node::NodeTable;
use super::open_set::OpenSet;
use super::path;
use super::state::State;
use super::updater;

/// The result of one `solve` call: a non-empty path starting at the initial state, and
/// whether it ends at the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    pub path: Vec<State>,
    pub solved: bool,
}

/// Runs A* from `initial` under `config`. Never panics on a well-formed `initial`; the one
/// fallible boundary is `State::new`, upstream of this call.
pub fn solve(initial: State, config: &SolveConfig) -> SolveOutcome {
    let mut arena = StateArena::new();
    let mut heuristics = HeuristicStore::new();
    let mut nodes = NodeTable::new();
    let mut closed = ClosedSet::new();
    let mut open = OpenSet::new();

    let (initial_id, _) = arena.intern(initial);
    let initial_h = heuristics.seed(initial_id, arena.get(initial_id));
    nodes.set(initial_id, 0, None, initial_h);
    open.push(initial_h, 0, initial_id);

    let mut best_by_h = (initial_h, initial_id);
    let mut expansions: u32 = 0;

    debug!(
        "solve start: initial h={initial_h}, max_expansions={}, batch_size={}, enable_update={}",
        config.max_expansions, config.batch_size, config.enable_update
    );

    loop {
        let Some((f_pop, _g_pop, id)) = open.pop() else {
            debug!("frontier exhausted after {expansions} expansion(s)");
            return partial_outcome(&arena, &nodes, best_by_h.1);
        };

        if nodes.last_f(id) != Some(f_pop) {
            trace!("discarding stale heap entry at f={f_pop}");
            continue;
        }
        if closed.is_expanded(id) {
            continue;
        }

        closed.mark_expanded(id);

        let h = heuristics.get(id);
        if h < best_by_h.0 {
            best_by_h = (h, id);
        }

        if expansions >= config.max_expansions {
            debug!("expansion budget exhausted at {expansions}");
            return partial_outcome(&arena, &nodes, best_by_h.1);
        }
        expansions += 1;

        if arena.get(id).is_goal() {
            debug!("goal reached after {expansions} expansion(s)");
            let outcome_path = path::reconstruct(&arena, &nodes, id);
            return SolveOutcome {
                path: outcome_path,
                solved: true,
            };
        }

        expand(&mut arena, &mut heuristics, &mut nodes, &mut open, id);

        if config.enable_update && config.batch_size > 0 && expansions % config.batch_size == 0 {
            trace!("running father's-rule batch at {expansions} expansions");
            updater::run_batch(&arena, &mut heuristics, &mut nodes, &mut closed, &mut open);
        }
    }
}

/// Generates `id`'s neighbours, seeding `h` for any newly discovered state and relaxing `g`
/// for any neighbour reached more cheaply than before.
fn expand(
    arena: &mut StateArena,
    heuristics: &mut HeuristicStore,
    nodes: &mut NodeTable,
    open: &mut OpenSet,
    id: StateId,
) {
    let g_s = nodes.g(id).expect("expanded state always has a finite g");
    let neighbours = arena.get(id).neighbours();

    for neighbour in neighbours {
        let (neighbour_id, fresh) = arena.intern(neighbour);
        if fresh {
            heuristics.seed(neighbour_id, arena.get(neighbour_id));
        }

        let h_n = heuristics.get(neighbour_id);
        let g_new = g_s + 1;
        let current_g = nodes.g(neighbour_id).unwrap_or(u32::MAX);

        if g_new < current_g {
            let last_f = g_new + h_n;
            nodes.set(neighbour_id, g_new, Some(id), last_f);
            open.push(last_f, g_new, neighbour_id);
        }
    }
}

fn partial_outcome(arena: &StateArena, nodes: &NodeTable, end: StateId) -> SolveOutcome {
    SolveOutcome {
        path: path::reconstruct(arena, nodes, end),
        solved: false,
    }
}
