//! States expanded at their current `(g, h)`. Unlike a plain insert-only closed set, this
//! one supports removal: a state must leave `expanded` the moment its `h` is raised, so it
//! can be re-expanded at its new cost.

use std::collections::HashSet;

use super::arena::StateId;

pub struct ClosedSet {
    expanded: HashSet<StateId>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    pub fn mark_expanded(&mut self, id: StateId) {
        self.expanded.insert(id);
    }

    pub fn is_expanded(&self, id: StateId) -> bool {
        self.expanded.contains(&id)
    }

    /// Evicts `id`, if present. Called when the father's rule raises `h[id]`.
    pub fn evict(&mut self, id: StateId) {
        self.expanded.remove(&id);
    }
}

impl Default for ClosedSet {
    fn default() -> Self {
        Self::new()
    }
}
