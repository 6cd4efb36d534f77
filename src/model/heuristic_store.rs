//! Per-state heuristic memoization and the father's-rule single-state update.
//!
//! A state's heuristic is computed once (Manhattan distance) and may only ever be raised
//! afterwards, never lowered.

use super::arena::StateId;
use super::heuristic::manhattan_distance;
use super::state::State;

/// Memoizes `h[state]` for every state discovered during a solve call, indexed by
/// [`StateId`]. Values only ever increase.
pub struct HeuristicStore {
    values: Vec<u32>,
}

impl HeuristicStore {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Seeds `h` for a freshly interned state with its Manhattan distance. Must be called
    /// exactly once per `StateId`, in arena discovery order.
    pub fn seed(&mut self, id: StateId, state: &State) -> u32 {
        debug_assert_eq!(id.index(), self.values.len());
        let h = manhattan_distance(state);
        self.values.push(h);
        h
    }

    pub fn get(&self, id: StateId) -> u32 {
        self.values[id.index()]
    }

    /// Applies the single-state father's rule: if `neighbour_hs` (the heuristic value of
    /// every neighbour, known or freshly computed) all meet `h[s] + 1`, raises `h[s]` to
    /// `min(neighbour_hs) + 1`. Returns the new value if this strictly raised `h[s]`.
    pub fn try_raise(&mut self, id: StateId, neighbour_hs: &[u32]) -> Option<u32> {
        let current = self.get(id);
        let min_neighbour = *neighbour_hs.iter().min()?;

        if neighbour_hs.iter().all(|&nh| nh >= current + 1) {
            let raised = current.max(min_neighbour + 1);
            if raised > current {
                self.values[id.index()] = raised;
                return Some(raised);
            }
        }
        None
    }
}

impl Default for HeuristicStore {
    fn default() -> Self {
        Self::new()
    }
}
